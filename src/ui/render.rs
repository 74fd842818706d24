//! Plain terminal renderer for the demo binary.
//!
//! One renderer implementation of many possible; the engine only ever hands
//! it an ordered item list. Repainting the whole frame on every change keeps
//! the view pinned without any scroll bookkeeping.

use super::style;
use crate::projector::RenderedItem;
use crate::scenario::{CompletionKind, Scenario};
use anyhow::Result;
use console::Term;

const CURSOR: &str = "▌";

pub fn draw(term: &Term, scenario: &Scenario, items: &[RenderedItem], phase: i64) -> Result<()> {
    term.clear_screen()?;

    println!("{}", style::header(&scenario.title));
    println!(
        "{}",
        style::dim(format!("{} · {}", scenario.subtitle, scenario.patient_label))
    );
    println!();

    for item in items {
        draw_item(item);
    }

    println!();
    println!(
        "{}",
        style::dim(format!("phase {phase} · ctrl-c to exit"))
    );
    Ok(())
}

fn draw_item(item: &RenderedItem) {
    match item {
        RenderedItem::Triage { text, typing } => {
            println!("{} {}{}", style::assistant("▸ Triage"), text, cursor(*typing));
            println!();
        }
        RenderedItem::UserTurn { text, typing, .. } => {
            println!("{} {}{}", style::header("You:"), text, cursor(*typing));
            println!();
        }
        RenderedItem::Thinking { reasoning, .. } => {
            println!("{}", style::dim(format!("⋯ {reasoning}")));
            println!();
        }
        RenderedItem::AgentTurn {
            reasoning_duration_ms,
            narrative,
            typing,
            insights,
            follow_ups,
            ..
        } => {
            let secs = f64::from(u32::try_from(*reasoning_duration_ms / 100).unwrap_or(0)) / 10.0;
            println!(
                "{} {}",
                style::assistant("Assistant"),
                style::dim(format!("thought for {secs}s"))
            );
            println!("{narrative}{}", cursor(*typing));
            for insight in insights {
                println!("  {}", style::severity(insight.severity, &insight.title));
                println!("  {}", style::dim(&insight.body));
            }
            for follow_up in follow_ups {
                println!("  {}", style::dim(format!("↳ {follow_up}")));
            }
            println!();
        }
        RenderedItem::ActionList {
            actions, selected, ..
        } => {
            for action in actions {
                let mark = if selected.contains(&action.label) {
                    style::done("[✓]")
                } else {
                    style::dim("[ ]")
                };
                println!("  {mark} {} {}", action.label, style::dim(&action.kind));
            }
            println!();
        }
        RenderedItem::EpilogueResults { entries } => {
            for entry in entries {
                let line = if entry.in_progress {
                    let label = entry.active_label.as_deref().unwrap_or(&entry.label);
                    style::pending(format!("◌ {label}…"))
                } else if entry.kind == CompletionKind::HumanQueued {
                    style::dim(format!("◻ {}", entry.result))
                } else {
                    style::done(format!("● {}", entry.result))
                };
                println!("  {line}");
            }
            println!();
        }
        RenderedItem::MemoryNote { text } => {
            println!("{}", style::dim(format!("✎ {text}")));
        }
    }
}

fn cursor(typing: bool) -> &'static str {
    if typing {
        CURSOR
    } else {
        ""
    }
}
