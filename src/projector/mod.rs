//! The phase-to-state projection.
//!
//! [`project`] is the heart of the engine: a pure, total function from
//! (scenario, phase, completed-task set) to the ordered list of items the
//! renderer should show. It is re-invoked from scratch on every phase tick
//! and on every task completion; it keeps no state of its own, so scrubbing
//! the phase forward, backward, or to an arbitrary value always lands on the
//! same picture a straight forward walk would have produced.

use crate::scenario::{Action, Completion, CompletionKind, Insight, Scenario};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Local phase slots per interaction: user message, thinking, narrative,
/// insights, follow-ups/actions.
pub const INTERACTION_PHASES: i64 = 5;

/// Phase slots reserved for the opening triage message, when one exists.
pub const TRIAGE_PHASES: i64 = 1;

/// One renderable unit of conversation state.
///
/// Discriminated by kind; each variant carries exactly the fields its
/// presentation needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum RenderedItem {
    Triage {
        text: String,
        typing: bool,
    },
    UserTurn {
        interaction: usize,
        text: String,
        typing: bool,
    },
    Thinking {
        interaction: usize,
        reasoning: String,
    },
    AgentTurn {
        interaction: usize,
        reasoning: String,
        reasoning_duration_ms: u64,
        narrative: String,
        typing: bool,
        insights: Vec<Insight>,
        follow_ups: Vec<String>,
    },
    ActionList {
        interaction: usize,
        actions: Vec<Action>,
        /// Labels of actions flipped to their selected state by revealed
        /// epilogue completions.
        selected: Vec<String>,
    },
    EpilogueResults {
        entries: Vec<CompletionStatus>,
    },
    MemoryNote {
        text: String,
    },
}

/// Presentation state of one revealed epilogue completion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionStatus {
    pub label: String,
    pub kind: CompletionKind,
    pub result: String,
    pub active_label: Option<String>,
    pub in_progress: bool,
}

/// Project the complete visible conversation state for `phase`.
///
/// Pure and total: identical inputs give structurally identical output, and
/// any `i64` phase (negative included) yields a valid, possibly empty, list.
/// Clamping is designed behavior in exactly two places — a fully-passed
/// interaction settles at local phase 4 and never re-animates, and the
/// epilogue reveal count clamps to the number of completions.
pub fn project(
    scenario: &Scenario,
    phase: i64,
    completed_tasks: &HashSet<String>,
) -> Vec<RenderedItem> {
    let mut items = Vec::new();

    let triage_len = triage_block_len(scenario);
    if let Some(triage) = &scenario.triage {
        if phase >= 0 {
            items.push(RenderedItem::Triage {
                text: triage.clone(),
                typing: phase < triage_len,
            });
        }
    }

    let interaction_phase = phase.saturating_sub(triage_len);
    if phase < triage_len {
        return items;
    }

    for (index, interaction) in scenario.interactions.iter().enumerate() {
        let start = interaction_start(index);
        if interaction_phase < start {
            break;
        }
        let local = (interaction_phase - start).min(INTERACTION_PHASES - 1);
        debug_assert!((0..INTERACTION_PHASES).contains(&local));

        items.push(RenderedItem::UserTurn {
            interaction: index,
            text: interaction.user_message.clone(),
            typing: local == 0,
        });

        let response = &interaction.response;
        if local == 1 {
            items.push(RenderedItem::Thinking {
                interaction: index,
                reasoning: response.reasoning.clone(),
            });
        }
        if local >= 2 {
            items.push(RenderedItem::AgentTurn {
                interaction: index,
                reasoning: response.reasoning.clone(),
                reasoning_duration_ms: response.reasoning_duration_ms,
                narrative: response.narrative.clone(),
                typing: local == 2,
                insights: if local >= 3 {
                    response.insights.clone()
                } else {
                    Vec::new()
                },
                follow_ups: if local >= 4 {
                    response.follow_ups.clone()
                } else {
                    Vec::new()
                },
            });
        }
        if local >= 4 && !response.actions.is_empty() {
            items.push(RenderedItem::ActionList {
                interaction: index,
                actions: response.actions.clone(),
                selected: Vec::new(),
            });
        }
    }

    if scenario.epilogue.is_some() {
        apply_epilogue(scenario, interaction_phase, completed_tasks, &mut items);
    }

    items
}

/// Total timeline length in phases: triage block, interaction blocks, then
/// (with an epilogue) one pause slot, one slot per completion, and one slot
/// for the memory note.
pub fn total_phases(scenario: &Scenario) -> i64 {
    let interactions = interaction_count(scenario) * INTERACTION_PHASES;
    let epilogue = scenario.epilogue.as_ref().map_or(0, |epilogue| {
        1 + completion_count(epilogue.completions.len()) + 1
    });
    triage_block_len(scenario) + interactions + epilogue
}

/// The prefix of epilogue completions revealed at `phase`.
///
/// The session controller uses this to know which agent-task timers to
/// start; an empty slice means the epilogue has not begun revealing.
pub fn revealed_completions(scenario: &Scenario, phase: i64) -> &[Completion] {
    let Some(epilogue) = &scenario.epilogue else {
        return &[];
    };
    let Some(epilogue_phase) = epilogue_phase(scenario, phase) else {
        return &[];
    };
    let revealed = revealed_count(epilogue_phase, epilogue.completions.len());
    &epilogue.completions[..revealed]
}

fn apply_epilogue(
    scenario: &Scenario,
    interaction_phase: i64,
    completed_tasks: &HashSet<String>,
    items: &mut Vec<RenderedItem>,
) {
    let Some(epilogue) = &scenario.epilogue else {
        return;
    };
    let blocks_end = interaction_count(scenario) * INTERACTION_PHASES;
    let epilogue_phase = interaction_phase - blocks_end;
    // Epilogue phase 0 is a deliberate pause with nothing revealed yet.
    if epilogue_phase < 1 {
        return;
    }

    let revealed = revealed_count(epilogue_phase, epilogue.completions.len());
    let revealed_labels: HashSet<&str> = epilogue.completions[..revealed]
        .iter()
        .map(|completion| completion.label.as_str())
        .collect();

    // Already-emitted actions flip to their selected state in place; the
    // action item itself is never re-emitted.
    for item in items.iter_mut() {
        if let RenderedItem::ActionList {
            actions, selected, ..
        } = item
        {
            *selected = actions
                .iter()
                .filter(|action| revealed_labels.contains(action.label.as_str()))
                .map(|action| action.label.clone())
                .collect();
        }
    }

    if revealed > 0 {
        let entries = epilogue.completions[..revealed]
            .iter()
            .map(|completion| CompletionStatus {
                label: completion.label.clone(),
                kind: completion.kind,
                result: completion.result.clone(),
                active_label: completion.active_label.clone(),
                in_progress: completion.kind == CompletionKind::AgentTask
                    && (completion.hold || !completed_tasks.contains(&completion.label)),
            })
            .collect();
        items.push(RenderedItem::EpilogueResults { entries });
    }

    if epilogue_phase > completion_count(epilogue.completions.len()) {
        items.push(RenderedItem::MemoryNote {
            text: epilogue.memory.clone(),
        });
    }
}

fn epilogue_phase(scenario: &Scenario, phase: i64) -> Option<i64> {
    scenario.epilogue.as_ref()?;
    let interaction_phase = phase.saturating_sub(triage_block_len(scenario));
    if phase < triage_block_len(scenario) {
        return None;
    }
    let blocks_end = interaction_count(scenario) * INTERACTION_PHASES;
    let epilogue_phase = interaction_phase - blocks_end;
    (epilogue_phase >= 1).then_some(epilogue_phase)
}

fn revealed_count(epilogue_phase: i64, completions: usize) -> usize {
    debug_assert!(epilogue_phase >= 1);
    let clamped = epilogue_phase.min(completion_count(completions));
    usize::try_from(clamped).unwrap_or(completions).min(completions)
}

fn triage_block_len(scenario: &Scenario) -> i64 {
    if scenario.triage.is_some() {
        TRIAGE_PHASES
    } else {
        0
    }
}

fn interaction_start(index: usize) -> i64 {
    i64::try_from(index)
        .unwrap_or(i64::MAX)
        .saturating_mul(INTERACTION_PHASES)
}

fn interaction_count(scenario: &Scenario) -> i64 {
    i64::try_from(scenario.interactions.len()).unwrap_or(i64::MAX)
}

fn completion_count(count: usize) -> i64 {
    i64::try_from(count).unwrap_or(i64::MAX)
}
