//! Command dispatch for the demo binary.

use crate::cli::{Cli, Commands};
use crate::config::DemoConfig;
use crate::phase::AutoplayPhaseSource;
use crate::projector;
use crate::reveal::RevealSpeed;
use crate::scenario::{CompletionKind, Scenario};
use crate::session::DemoSession;
use crate::{catalog, ui};
use anyhow::{Context, Result};
use std::collections::HashSet;
use std::str::FromStr;
use std::time::Duration;

pub async fn dispatch(cli: Cli, config: DemoConfig) -> Result<()> {
    match cli.command {
        Commands::Play {
            scenario,
            speed,
            looping,
        } => run_play(&config, scenario.as_deref(), speed.as_deref(), looping).await,
        Commands::List => {
            run_list();
            Ok(())
        }
        Commands::Dump {
            scenario,
            phase,
            settled,
        } => run_dump(&scenario, phase, settled),
    }
}

async fn run_play(
    config: &DemoConfig,
    scenario_id: Option<&str>,
    speed: Option<&str>,
    looping: bool,
) -> Result<()> {
    let scenario = match scenario_id {
        Some(id) => catalog::by_id(id)
            .ok_or_else(|| crate::error::ScenarioError::UnknownId(id.to_owned()))?,
        None => pick_scenario()?,
    };
    let speed = match speed {
        Some(raw) => RevealSpeed::from_str(raw)
            .map_err(|_| anyhow::anyhow!("unknown speed {raw:?} (expected human or stream)"))?,
        None => config.reveal.speed,
    };

    let mut session = DemoSession::new(scenario, config, speed)?;
    let total = projector::total_phases(session.scenario());
    let mut source = AutoplayPhaseSource::new(
        Duration::from_millis(config.autoplay.phase_hold_ms),
        total,
        looping,
    );

    let outcome = tokio::select! {
        result = ui::play(&mut session, &mut source, looping) => result,
        _ = tokio::signal::ctrl_c() => Ok(()),
    };
    session.close();
    outcome
}

fn pick_scenario() -> Result<Scenario> {
    let scenarios = catalog::all();
    let items: Vec<String> = scenarios
        .iter()
        .map(|scenario| format!("{} — {}", scenario.title, scenario.subtitle))
        .collect();
    let index = dialoguer::FuzzySelect::new()
        .with_prompt("Scenario")
        .items(&items)
        .default(0)
        .interact()
        .context("scenario selection cancelled")?;
    scenarios
        .into_iter()
        .nth(index)
        .context("selection out of range")
}

fn run_list() {
    for scenario in catalog::all() {
        let epilogue = scenario
            .epilogue
            .as_ref()
            .map_or_else(String::new, |epilogue| {
                format!(" · {} completions", epilogue.completions.len())
            });
        println!(
            "{}  {}",
            ui::style::header(&scenario.id),
            ui::style::dim(format!(
                "{} · {} interactions{epilogue}",
                scenario.title,
                scenario.interactions.len()
            ))
        );
    }
}

fn run_dump(scenario_id: &str, phase: i64, settled: bool) -> Result<()> {
    let scenario = catalog::by_id(scenario_id)
        .ok_or_else(|| crate::error::ScenarioError::UnknownId(scenario_id.to_owned()))?;
    scenario.validate()?;

    let completed: HashSet<String> = if settled {
        scenario
            .epilogue
            .iter()
            .flat_map(|epilogue| &epilogue.completions)
            .filter(|completion| {
                completion.kind == CompletionKind::AgentTask && !completion.hold
            })
            .map(|completion| completion.label.clone())
            .collect()
    } else {
        HashSet::new()
    };

    let items = projector::project(&scenario, phase, &completed);
    let json = serde_json::to_string_pretty(&items).context("serializing projection")?;
    println!("{json}");
    Ok(())
}
