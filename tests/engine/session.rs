//! Session controller: reveal application, task driving, and the
//! scenario-switch reset discipline.

use crate::fixtures;
use clinisim::DemoConfig;
use clinisim::projector::RenderedItem;
use clinisim::reveal::RevealSpeed;
use clinisim::session::DemoSession;
use std::time::Duration;

const WELL_PAST: Duration = Duration::from_millis(120);

fn fast_config() -> DemoConfig {
    let mut config = DemoConfig::default();
    config.tasks.completion_delay_ms = 25;
    config
}

fn results(items: &[RenderedItem]) -> Option<&[clinisim::projector::CompletionStatus]> {
    items.iter().find_map(|item| match item {
        RenderedItem::EpilogueResults { entries } => Some(entries.as_slice()),
        _ => None,
    })
}

#[tokio::test]
async fn broken_scripts_fail_construction() {
    let mut scenario = fixtures::with_epilogue();
    scenario.interactions.clear();
    assert!(DemoSession::new(scenario, &fast_config(), RevealSpeed::Stream).is_err());
}

#[tokio::test]
async fn frame_applies_the_typewriter_to_the_typing_item() {
    let mut session = DemoSession::new(
        fixtures::single_interaction(),
        &fast_config(),
        RevealSpeed::Human,
    )
    .unwrap();
    let mut grows = 0;
    let mut on_grow = || grows += 1;

    session.set_phase(0);
    let first = session.frame(&mut on_grow);
    let RenderedItem::UserTurn { text, typing, .. } = &first[0] else {
        panic!("user turn expected at phase 0");
    };
    assert!(*typing);
    assert_eq!(text.chars().count(), 1);
    assert!(session.tick_delay().is_some());

    let second = session.frame(&mut on_grow);
    let RenderedItem::UserTurn { text, .. } = &second[0] else {
        panic!("user turn expected at phase 0");
    };
    assert_eq!(text.chars().count(), 2);
    assert_eq!(grows, 2);
}

#[tokio::test]
async fn typing_finishes_and_the_session_settles() {
    let mut session = DemoSession::new(
        fixtures::single_interaction(),
        &fast_config(),
        RevealSpeed::Stream,
    )
    .unwrap();
    let mut on_grow = || {};

    session.set_phase(0);
    for _ in 0..200 {
        session.frame(&mut on_grow);
        if session.tick_delay().is_none() {
            break;
        }
    }
    assert!(session.is_settled());

    let settled = session.frame(&mut on_grow);
    let RenderedItem::UserTurn { text, typing, .. } = &settled[0] else {
        panic!("user turn expected");
    };
    assert_eq!(text, "How is the patient?");
    assert!(!*typing);
}

#[tokio::test]
async fn phase_jumps_settle_text_without_animation() {
    let mut session = DemoSession::new(
        fixtures::single_interaction(),
        &fast_config(),
        RevealSpeed::Human,
    )
    .unwrap();
    let mut on_grow = || {};

    // Jump straight past the typing phases; nothing should animate.
    session.set_phase(4);
    let items = session.frame(&mut on_grow);
    let RenderedItem::UserTurn { text, typing, .. } = &items[0] else {
        panic!("user turn expected");
    };
    assert_eq!(text, "How is the patient?");
    assert!(!*typing);
    assert_eq!(session.tick_delay(), None);
}

#[tokio::test]
async fn revealed_agent_tasks_complete_on_the_wall_clock() {
    let mut session = DemoSession::new(
        fixtures::with_epilogue(),
        &fast_config(),
        RevealSpeed::Stream,
    )
    .unwrap();
    let mut on_grow = || {};

    session.set_phase(14); // every completion revealed
    let before = session.frame(&mut on_grow);
    let entries = results(&before).expect("results visible");
    assert!(entries[0].in_progress);
    assert!(entries[2].in_progress);

    tokio::time::sleep(WELL_PAST).await;
    let after = session.frame(&mut on_grow);
    let entries = results(&after).expect("results visible");
    assert!(entries.iter().all(|entry| !entry.in_progress));
}

#[tokio::test]
async fn phase_movement_never_completes_tasks() {
    let mut session = DemoSession::new(
        fixtures::with_epilogue(),
        &fast_config(),
        RevealSpeed::Stream,
    )
    .unwrap();
    let mut on_grow = || {};

    session.set_phase(14);
    session.frame(&mut on_grow);
    // Scrub around without letting the wall clock advance meaningfully.
    for phase in [0, 14, 3, 14] {
        session.set_phase(phase);
        let items = session.frame(&mut on_grow);
        if let Some(entries) = results(&items) {
            assert!(entries[0].in_progress, "only timers may complete tasks");
        }
    }
}

#[tokio::test]
async fn scenario_switch_resets_completions_even_with_pending_timers() {
    let mut session = DemoSession::new(
        fixtures::with_epilogue(),
        &fast_config(),
        RevealSpeed::Stream,
    )
    .unwrap();
    let mut on_grow = || {};

    // Reveal completions so agent-task timers start.
    session.set_phase(14);
    session.frame(&mut on_grow);

    // Switch while those timers are pending.
    session
        .switch_scenario(fixtures::with_epilogue())
        .unwrap();
    assert_eq!(session.phase(), 0);

    // Let the old timers' expiry come and go, then look again: the new
    // scenario must start from an empty completed set.
    tokio::time::sleep(WELL_PAST).await;
    session.set_phase(14);
    let items = session.frame(&mut on_grow);
    let entries = results(&items).expect("results visible");
    assert!(
        entries[0].in_progress && entries[2].in_progress,
        "stale timers from the previous scenario must not leak completions"
    );
}

#[tokio::test]
async fn close_cancels_everything_and_goes_inert() {
    let mut session = DemoSession::new(
        fixtures::with_epilogue(),
        &fast_config(),
        RevealSpeed::Stream,
    )
    .unwrap();
    let mut on_grow = || {};

    session.set_phase(14);
    session.frame(&mut on_grow);
    session.close();
    assert!(session.is_settled());

    tokio::time::sleep(WELL_PAST).await;
    let items = session.frame(&mut on_grow);
    let entries = results(&items).expect("projection still works after close");
    assert!(
        entries.iter().all(|entry| entry.kind != clinisim::scenario::CompletionKind::AgentTask
            || entry.in_progress),
        "no timer may complete after close"
    );
}

#[tokio::test]
async fn scrubbed_off_messages_restart_their_reveal_on_return() {
    let mut session = DemoSession::new(
        fixtures::single_interaction(),
        &fast_config(),
        RevealSpeed::Human,
    )
    .unwrap();
    let mut on_grow = || {};

    session.set_phase(0);
    session.frame(&mut on_grow);
    session.frame(&mut on_grow); // two characters revealed

    session.set_phase(-1);
    assert!(session.frame(&mut on_grow).is_empty());

    session.set_phase(0);
    let items = session.frame(&mut on_grow);
    let RenderedItem::UserTurn { text, .. } = &items[0] else {
        panic!("user turn expected");
    };
    assert_eq!(text.chars().count(), 1, "a returning message starts over");
}
