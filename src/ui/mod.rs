//! Terminal front end: renderer and the autoplay driver.

pub mod render;
pub mod style;

use crate::phase::PhaseSource;
use crate::projector;
use crate::session::DemoSession;
use anyhow::Result;
use console::Term;
use std::time::Duration;

/// Idle poll while nothing is typing; phase movement and task completions
/// both re-render well within one step.
const IDLE_POLL: Duration = Duration::from_millis(120);

/// Drive a session from a phase source until the timeline has fully played
/// out (never returns while `looping` keeps the source wrapping).
pub async fn play(
    session: &mut DemoSession,
    source: &mut dyn PhaseSource,
    looping: bool,
) -> Result<()> {
    let term = Term::stdout();
    let total = projector::total_phases(session.scenario());
    // Full-frame repaint keeps the view pinned; nothing to do per growth.
    let mut on_grow = || {};

    loop {
        let phase = source.current();
        session.set_phase(phase);
        let items = session.frame(&mut on_grow);
        render::draw(&term, session.scenario(), &items, phase)?;

        if !looping && phase >= total - 1 && session.is_settled() {
            return Ok(());
        }

        let delay = session.tick_delay().unwrap_or(IDLE_POLL);
        let task_changed = session.task_changed();
        tokio::select! {
            () = tokio::time::sleep(delay) => {}
            () = task_changed => {}
        }
    }
}
