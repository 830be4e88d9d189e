//! Entry point wiring CLI dispatch to the triage engine.

use anyhow::Result;
use tracing::{info, instrument};
use triage_assistant::{cli::Cli, config::Settings, logging};

#[tokio::main]
#[instrument]
async fn main() -> Result<()> {
    logging::init_tracing()?;
    let settings = Settings::load()?;
    let cli = Cli::parse();

    info!(?cli, "starting command");
    cli.dispatch(settings).await
}
