use serde::{Deserialize, Serialize};

/// A complete scripted conversation.
///
/// Scenarios are static fixtures: constructed once, validated once, never
/// mutated. Everything the demo shows is derived from a scenario plus the
/// current phase integer, so two sessions playing the same scenario are
/// indistinguishable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub patient_label: String,
    /// Optional assistant-initiated opener shown before any user turn.
    pub triage: Option<String>,
    pub interactions: Vec<Interaction>,
    pub epilogue: Option<Epilogue>,
}

/// One user turn plus the assistant's scripted reply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interaction {
    pub user_message: String,
    pub response: AgentResponse,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentResponse {
    /// Shown while the thinking indicator is up and in the collapsed
    /// "thought for N s" header afterwards.
    pub reasoning: String,
    /// Display-only; never drives timing.
    pub reasoning_duration_ms: u64,
    pub narrative: String,
    pub insights: Vec<Insight>,
    pub follow_ups: Vec<String>,
    pub actions: Vec<Action>,
}

/// A highlighted finding attached to an assistant reply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    pub severity: Severity,
    pub title: String,
    pub body: String,
}

impl Insight {
    pub fn new(severity: Severity, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            severity,
            title: title.into(),
            body: body.into(),
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display, strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Severity {
    Critical,
    Warning,
    Info,
    Positive,
}

/// A proposed next step the assistant can carry out or queue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action {
    pub label: String,
    pub kind: ActionKind,
    pub icon: Option<String>,
}

impl Action {
    pub fn new(kind: ActionKind, label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            kind,
            icon: None,
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display, strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ActionKind {
    Order,
    Referral,
    Message,
    Schedule,
    Document,
}

/// Tail state reached after every interaction has fully played.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Epilogue {
    pub completions: Vec<Completion>,
    /// Shown only once every completion has been revealed.
    pub memory: String,
}

/// How one earlier action ultimately resolves.
///
/// The `label` joins a [`Action`] by exact string match; validation
/// guarantees the join target exists and is unambiguous.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Completion {
    pub label: String,
    pub kind: CompletionKind,
    pub result: String,
    /// Shown in place of `label` while unresolved.
    pub active_label: Option<String>,
    /// Never resolves; stays in progress for the lifetime of the scenario.
    pub hold: bool,
}

impl Completion {
    pub fn agent_task(label: impl Into<String>, result: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            kind: CompletionKind::AgentTask,
            result: result.into(),
            active_label: None,
            hold: false,
        }
    }

    pub fn human_queued(label: impl Into<String>, result: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            kind: CompletionKind::HumanQueued,
            result: result.into(),
            active_label: None,
            hold: false,
        }
    }

    pub fn with_active_label(mut self, active_label: impl Into<String>) -> Self {
        self.active_label = Some(active_label.into());
        self
    }

    pub fn never_resolving(mut self) -> Self {
        self.hold = true;
        self
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display, strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum CompletionKind {
    /// Queued for a person; never auto-resolves.
    HumanQueued,
    /// Resolves on a background timer unless held open.
    AgentTask,
}
