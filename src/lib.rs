#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions,
    clippy::struct_field_names,
    clippy::must_use_candidate,
    clippy::new_without_default,
    clippy::return_self_not_must_use
)]

pub mod app;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod phase;
pub mod projector;
pub mod reveal;
pub mod scenario;
pub mod session;
pub mod tasks;
pub mod ui;

pub use config::DemoConfig;
pub use error::{ClinisimError, Result};
pub use projector::{RenderedItem, project};
pub use scenario::Scenario;
pub use session::DemoSession;
