//! The session controller.
//!
//! A [`DemoSession`] owns everything mutable for one active scenario: the
//! current phase reading, the task scheduler, and the per-message revealers.
//! Acquire on scenario activation, release on scenario change or session end
//! — `switch_scenario` and `close` are the explicit teardown points the
//! original demo left to UI lifecycle hooks.

use crate::config::DemoConfig;
use crate::error::ScenarioError;
use crate::projector::{self, RenderedItem};
use crate::reveal::{RevealConfig, RevealSpeed, TextRevealer};
use crate::scenario::{CompletionKind, Scenario};
use crate::tasks::TaskScheduler;
use std::collections::{HashMap, HashSet};
use std::future::Future;
use std::time::Duration;
use uuid::Uuid;

/// Identity of a revealable message within the current projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum RevealKey {
    Triage,
    User(usize),
    Agent(usize),
}

pub struct DemoSession {
    id: Uuid,
    scenario: Scenario,
    phase: i64,
    scheduler: TaskScheduler,
    revealers: HashMap<RevealKey, TextRevealer>,
    reveal_config: RevealConfig,
    speed: RevealSpeed,
    active_reveal: Option<RevealKey>,
    closed: bool,
}

impl DemoSession {
    /// Validate `scenario` and acquire a fresh session around it.
    pub fn new(
        scenario: Scenario,
        config: &DemoConfig,
        speed: RevealSpeed,
    ) -> Result<Self, ScenarioError> {
        scenario.validate()?;
        let id = Uuid::new_v4();
        tracing::info!(session = %id, scenario = %scenario.id, "session started");
        Ok(Self {
            id,
            scenario,
            phase: 0,
            scheduler: TaskScheduler::new(Duration::from_millis(
                config.tasks.completion_delay_ms,
            )),
            revealers: HashMap::new(),
            reveal_config: config.reveal.clone(),
            speed,
            active_reveal: None,
            closed: false,
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn scenario(&self) -> &Scenario {
        &self.scenario
    }

    pub fn phase(&self) -> i64 {
        self.phase
    }

    /// Record the sensor's phase reading. Jumps in either direction are
    /// fine; the next [`frame`](Self::frame) re-derives everything.
    pub fn set_phase(&mut self, phase: i64) {
        if phase != self.phase {
            tracing::debug!(session = %self.id, from = self.phase, to = phase, "phase moved");
            self.phase = phase;
        }
    }

    /// Replace the active scenario, resetting every piece of derived state.
    ///
    /// Pending task timers are cancelled and the completed set cleared
    /// before the new script is installed, so a stale timer can never leak
    /// a completion into the new scenario.
    pub fn switch_scenario(&mut self, scenario: Scenario) -> Result<(), ScenarioError> {
        scenario.validate()?;
        self.scheduler.cancel_all();
        self.revealers.clear();
        self.active_reveal = None;
        self.phase = 0;
        tracing::info!(
            session = %self.id,
            from = %self.scenario.id,
            to = %scenario.id,
            "scenario switched"
        );
        self.scenario = scenario;
        Ok(())
    }

    /// Project the current frame: derive items for the current phase and
    /// completed-task snapshot, start timers for newly revealed agent
    /// tasks, and apply the typewriter to the one currently-typing message.
    ///
    /// `on_grow` is forwarded to the active revealer so a scrolled view can
    /// stay pinned to the growing bottom.
    pub fn frame(&mut self, on_grow: &mut dyn FnMut()) -> Vec<RenderedItem> {
        let completed = self.scheduler.completed();
        let mut items = projector::project(&self.scenario, self.phase, &completed);
        if self.closed {
            return items;
        }

        for completion in projector::revealed_completions(&self.scenario, self.phase) {
            if completion.kind == CompletionKind::AgentTask && !completion.hold {
                self.scheduler.start(&completion.label);
            }
        }

        self.active_reveal = None;
        let mut on_screen = HashSet::new();
        for item in &mut items {
            let (key, text, typing) = match item {
                RenderedItem::Triage { text, typing } => (RevealKey::Triage, text, typing),
                RenderedItem::UserTurn {
                    interaction,
                    text,
                    typing,
                } => (RevealKey::User(*interaction), text, typing),
                RenderedItem::AgentTurn {
                    interaction,
                    narrative,
                    typing,
                    ..
                } => (RevealKey::Agent(*interaction), narrative, typing),
                _ => continue,
            };
            on_screen.insert(key);

            // Settled items that never typed render their full text as-is.
            if !*typing && !self.revealers.contains_key(&key) {
                continue;
            }
            let revealer = self
                .revealers
                .entry(key)
                .or_insert_with(|| TextRevealer::new(self.speed, self.reveal_config.clone()));
            let full = std::mem::take(text);
            let frame = revealer.reveal(&full, *typing, on_grow);
            *text = frame.visible;
            if *typing && !frame.done {
                self.active_reveal = Some(key);
            } else {
                *typing = false;
            }
        }
        // A message that scrubbed off screen starts from scratch if it
        // returns; dropping its revealer models the unmount.
        self.revealers.retain(|key, _| on_screen.contains(key));

        items
    }

    /// Delay before the next typewriter tick; `None` when nothing is typing.
    pub fn tick_delay(&self) -> Option<Duration> {
        self.active_reveal
            .and_then(|key| self.revealers.get(&key))
            .and_then(TextRevealer::next_delay)
    }

    /// Resolves the next time a background task completes.
    pub fn task_changed(&self) -> impl Future<Output = ()> + Send + 'static {
        self.scheduler.changed()
    }

    /// True once nothing is typing and no task timer is pending.
    pub fn is_settled(&self) -> bool {
        self.tick_delay().is_none() && self.scheduler.is_idle()
    }

    /// Release the session: cancel every timer and drop reveal state.
    ///
    /// Subsequent [`frame`](Self::frame) calls still project (projection is
    /// pure), but nothing animates and no timer ever starts again.
    pub fn close(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;
        self.scheduler.cancel_all();
        self.revealers.clear();
        self.active_reveal = None;
        tracing::info!(session = %self.id, scenario = %self.scenario.id, "session closed");
    }
}

impl Drop for DemoSession {
    fn drop(&mut self) {
        self.close();
    }
}
