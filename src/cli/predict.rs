//! CLI entry-point for one-off predictions.

use anyhow::Result;
use clap::Args as ClapArgs;
use tracing::instrument;

use crate::{config::Settings, engine::TriageEngine};

/// Args for the `predict` sub-command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// Comma separated symptom tokens (free text).
    #[arg(long, value_delimiter = ',', required = true)]
    pub symptoms: Vec<String>,
}

#[instrument(skip(settings))]
pub async fn run(args: Args, settings: Settings) -> Result<()> {
    let engine = TriageEngine::new(settings);
    let result = tokio::task::spawn_blocking(move || engine.predict(&args.symptoms)).await?;
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
