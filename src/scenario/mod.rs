//! Static conversation scripts and their authoring-time validation.

mod types;
mod validation;

pub use types::{
    Action, ActionKind, AgentResponse, Completion, CompletionKind, Epilogue, Insight, Interaction,
    Scenario, Severity,
};
