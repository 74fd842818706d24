use thiserror::Error;

// ─── Top-level error hierarchy ───────────────────────────────────────────────

/// Structured error hierarchy for `clinisim`.
///
/// Each subsystem defines its own error variant. Library callers can match on
/// these to decide recovery strategy; the binary continues to use
/// `anyhow::Result` for ad-hoc context chains.
#[derive(Debug, Error)]
pub enum ClinisimError {
    // ── Config ───────────────────────────────────────────────────────────
    #[error("config: {0}")]
    Config(#[from] ConfigError),

    // ── Scenario scripts ─────────────────────────────────────────────────
    #[error("scenario: {0}")]
    Scenario(#[from] ScenarioError),

    // ── Generic fallthrough (wraps anyhow for interop) ──────────────────
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// ─── Config errors ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load config: {0}")]
    Load(String),

    #[error("failed to parse config: {0}")]
    Parse(String),

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

// ─── Scenario script errors ─────────────────────────────────────────────────

/// Construction-time faults in a scripted scenario.
///
/// These abort scenario registration loudly; a broken script is caught by a
/// test or at startup, never rendered partially.
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("scenario {scenario}: epilogue completion {label:?} matches no action label")]
    UnknownCompletionLabel { scenario: String, label: String },

    #[error("scenario {scenario}: action label {label:?} is defined more than once")]
    DuplicateActionLabel { scenario: String, label: String },

    #[error("scenario {scenario}: script has no interactions")]
    EmptyScript { scenario: String },

    #[error("unknown scenario id: {0}")]
    UnknownId(String),
}

// ─── Convenience re-exports ─────────────────────────────────────────────────

/// Shorthand result type for the crate.
pub type Result<T> = std::result::Result<T, ClinisimError>;
