use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// `clinisim` - Deterministic, replayable clinical-assistant conversation demos.
#[derive(Parser, Debug)]
#[command(name = "clinisim")]
#[command(version = "0.1.0")]
#[command(about = "Deterministic, replayable clinical-assistant conversation demos.", long_about = None)]
pub struct Cli {
    /// Path to a TOML config file (default: ~/.clinisim/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log engine lifecycle events to stderr
    #[arg(long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play a scripted scenario in the terminal
    Play {
        /// Scenario id (interactive picker when omitted)
        #[arg(short, long)]
        scenario: Option<String>,

        /// Reveal pacing: human (per-character) or stream (chunked)
        #[arg(long)]
        speed: Option<String>,

        /// Restart from phase 0 when the timeline ends
        #[arg(long = "loop")]
        looping: bool,
    },

    /// List the built-in scenarios
    List,

    /// Print the projection for a scenario at a given phase as JSON
    Dump {
        /// Scenario id
        #[arg(short, long)]
        scenario: String,

        /// Phase to project (any integer is valid)
        #[arg(short, long)]
        phase: i64,

        /// Treat every schedulable task as already completed
        #[arg(long)]
        settled: bool,
    },
}
