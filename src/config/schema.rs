use crate::error::ConfigError;
use crate::reveal::RevealConfig;
use serde::{Deserialize, Serialize};

/// Demo runtime configuration.
///
/// Everything here has a compiled-in default; a config file only overrides
/// what it names. Scenario scripts are never configured — they are
/// compiled-in fixtures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DemoConfig {
    pub reveal: RevealConfig,
    pub tasks: TaskConfig,
    pub autoplay: AutoplayConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskConfig {
    /// Delay before a revealed agent task flips to done.
    pub completion_delay_ms: u64,
}

impl Default for TaskConfig {
    fn default() -> Self {
        Self {
            completion_delay_ms: 2600,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutoplayConfig {
    /// How long autoplay holds each phase.
    pub phase_hold_ms: u64,
}

impl Default for AutoplayConfig {
    fn default() -> Self {
        Self {
            phase_hold_ms: 2400,
        }
    }
}

impl DemoConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, band) in [
            ("reveal.human_base", self.reveal.human_base),
            ("reveal.human_word", self.reveal.human_word),
            ("reveal.human_punct", self.reveal.human_punct),
        ] {
            if band.min_ms == 0 || band.min_ms > band.max_ms {
                return Err(ConfigError::Validation(format!(
                    "{name}: pause band must satisfy 0 < min_ms <= max_ms (got {}..{})",
                    band.min_ms, band.max_ms
                )));
            }
        }
        if self.reveal.stream_chunk == 0 {
            return Err(ConfigError::Validation(
                "reveal.stream_chunk must be greater than zero".into(),
            ));
        }
        if self.reveal.stream_interval_ms == 0 {
            return Err(ConfigError::Validation(
                "reveal.stream_interval_ms must be greater than zero".into(),
            ));
        }
        if self.tasks.completion_delay_ms == 0 {
            return Err(ConfigError::Validation(
                "tasks.completion_delay_ms must be greater than zero".into(),
            ));
        }
        if self.autoplay.phase_hold_ms == 0 {
            return Err(ConfigError::Validation(
                "autoplay.phase_hold_ms must be greater than zero".into(),
            ));
        }
        Ok(())
    }
}
