//! Command-line interface wiring for triage-assistant.

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::Settings;

pub mod list;
pub mod predict;
pub mod serve;
pub mod suggest;
pub mod train;

/// Top-level CLI definition.
#[derive(Debug, Parser)]
#[command(author, version, about = "Symptom-to-condition triage assistant", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    /// Parse CLI arguments from the environment.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Dispatch the selected sub-command.
    pub async fn dispatch(self, settings: Settings) -> Result<()> {
        match self.command {
            Commands::Train => train::run(settings).await,
            Commands::Predict(args) => predict::run(args, settings).await,
            Commands::Suggest(args) => suggest::run(args, settings).await,
            Commands::Symptoms => list::symptoms(settings).await,
            Commands::Diseases => list::diseases(settings).await,
            Commands::Serve(args) => serve::run(args, settings).await,
        }
    }
}

/// Supported sub-commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Retrain the condition model and persist the artifact.
    Train,
    /// Predict conditions for a set of symptom tokens.
    Predict(predict::Args),
    /// Suggest vocabulary entries for a partial symptom.
    Suggest(suggest::Args),
    /// List the symptom vocabulary.
    Symptoms,
    /// List the known conditions.
    Diseases,
    /// Serve the JSON API.
    Serve(serve::Args),
}
