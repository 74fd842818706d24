use super::Scenario;
use crate::error::ScenarioError;
use std::collections::HashSet;

impl Scenario {
    /// Authoring-time validation pass.
    ///
    /// A scenario that fails here must never reach a session: broken scripts
    /// are construction faults, not runtime conditions. Checks:
    ///
    /// - the script has at least one interaction;
    /// - action labels are unique across the whole script, so the
    ///   label-string join between completions and actions is unambiguous;
    /// - every epilogue completion names an action label that exists
    ///   somewhere in the script.
    pub fn validate(&self) -> Result<(), ScenarioError> {
        if self.interactions.is_empty() {
            return Err(ScenarioError::EmptyScript {
                scenario: self.id.clone(),
            });
        }

        let mut labels: HashSet<&str> = HashSet::new();
        for interaction in &self.interactions {
            for action in &interaction.response.actions {
                if !labels.insert(action.label.as_str()) {
                    return Err(ScenarioError::DuplicateActionLabel {
                        scenario: self.id.clone(),
                        label: action.label.clone(),
                    });
                }
            }
        }

        if let Some(epilogue) = &self.epilogue {
            for completion in &epilogue.completions {
                if !labels.contains(completion.label.as_str()) {
                    return Err(ScenarioError::UnknownCompletionLabel {
                        scenario: self.id.clone(),
                        label: completion.label.clone(),
                    });
                }
            }
        }

        Ok(())
    }
}
