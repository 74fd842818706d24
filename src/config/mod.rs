pub mod schema;

mod loader;

pub use schema::{AutoplayConfig, DemoConfig, TaskConfig};
