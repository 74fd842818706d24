use anyhow::Result;
use clap::Parser;
use clinisim::DemoConfig;
use clinisim::app;
use clinisim::cli::Cli;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // WARN by default so lifecycle logs don't tear the full-screen frame.
    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let config = DemoConfig::load(cli.config.as_deref())?;
    app::dispatch(cli, config).await
}
