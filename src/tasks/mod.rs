//! Background task completion scheduling.
//!
//! The one piece of engine state that is not a pure function of the phase:
//! agent tasks revealed in the epilogue flip from in-progress to done on a
//! wall-clock delay. The scheduler is owned by a session and scoped to one
//! active scenario; its reset discipline (cancel everything, clear the
//! completed set) is what keeps scenario switches from leaking completions.

use std::collections::{HashMap, HashSet};
use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::sync::Notify;
use tokio::task::JoinHandle;

#[derive(Default)]
struct SchedulerState {
    pending: HashMap<String, JoinHandle<()>>,
    completed: HashSet<String>,
}

/// Fixed-delay completion timers keyed by task label.
///
/// Must live inside a Tokio runtime; timers are spawned tasks. Dropping the
/// scheduler cancels everything still pending.
pub struct TaskScheduler {
    delay: Duration,
    state: Arc<Mutex<SchedulerState>>,
    notify: Arc<Notify>,
}

impl TaskScheduler {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            state: Arc::new(Mutex::new(SchedulerState::default())),
            notify: Arc::new(Notify::new()),
        }
    }

    /// Start the completion timer for `label` if one has never run.
    ///
    /// Idempotent: a label with a pending timer or an existing completion is
    /// left untouched, so re-projecting the same phase never restarts a
    /// timer.
    pub fn start(&self, label: &str) {
        let mut state = lock(&self.state);
        if state.pending.contains_key(label) || state.completed.contains(label) {
            return;
        }
        tracing::debug!(task = label, delay = ?self.delay, "task timer started");

        let shared = Arc::clone(&self.state);
        let notify = Arc::clone(&self.notify);
        let owned = label.to_owned();
        let delay = self.delay;
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let mut state = lock(&shared);
            // A timer that was cancelled out of `pending` must not write,
            // even if its abort raced with expiry.
            if state.pending.remove(&owned).is_some() {
                tracing::debug!(task = %owned, "task completed");
                state.completed.insert(owned);
                drop(state);
                notify.notify_waiters();
            }
        });
        // Inserted under the same lock the timer body takes, so the body
        // always finds its own entry.
        state.pending.insert(label.to_owned(), handle);
    }

    /// Snapshot of every label whose delay has elapsed.
    pub fn completed(&self) -> HashSet<String> {
        lock(&self.state).completed.clone()
    }

    /// True when no timer is pending.
    pub fn is_idle(&self) -> bool {
        lock(&self.state).pending.is_empty()
    }

    /// Cancel every pending timer and clear all completions.
    ///
    /// Called on scenario identity change and on session teardown; a stale
    /// timer from before the reset can never mutate state afterwards.
    pub fn cancel_all(&self) {
        let mut state = lock(&self.state);
        let cancelled = state.pending.len();
        for (_, handle) in state.pending.drain() {
            handle.abort();
        }
        state.completed.clear();
        if cancelled > 0 {
            tracing::debug!(cancelled, "task timers cancelled");
        }
    }

    /// Resolves the next time any task completes.
    ///
    /// Returns an owned future so callers can poll it alongside mutable use
    /// of the owning session.
    pub fn changed(&self) -> impl Future<Output = ()> + Send + 'static {
        let notify = Arc::clone(&self.notify);
        async move { notify.notified().await }
    }
}

impl Drop for TaskScheduler {
    fn drop(&mut self) {
        self.cancel_all();
    }
}

fn lock(state: &Mutex<SchedulerState>) -> MutexGuard<'_, SchedulerState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}
