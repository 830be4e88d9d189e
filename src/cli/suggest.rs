//! CLI entry-point for vocabulary suggestions.

use anyhow::Result;
use clap::Args as ClapArgs;
use tracing::instrument;

use crate::{config::Settings, engine::TriageEngine};

/// Args for the `suggest` sub-command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// Partial symptom text to complete.
    pub query: String,
}

#[instrument(skip(settings))]
pub async fn run(args: Args, settings: Settings) -> Result<()> {
    let engine = TriageEngine::new(settings);
    let matches = tokio::task::spawn_blocking(move || engine.suggest(&args.query)).await?;
    for entry in matches {
        println!("{entry}");
    }
    Ok(())
}
