//! CLI entry-points for vocabulary listings.

use anyhow::Result;
use tracing::instrument;

use crate::{config::Settings, engine::TriageEngine};

#[instrument(skip(settings))]
pub async fn symptoms(settings: Settings) -> Result<()> {
    let engine = TriageEngine::new(settings);
    let entries = tokio::task::spawn_blocking(move || engine.list_symptoms()).await?;
    for entry in entries {
        println!("{entry}");
    }
    Ok(())
}

#[instrument(skip(settings))]
pub async fn diseases(settings: Settings) -> Result<()> {
    let engine = TriageEngine::new(settings);
    let names = tokio::task::spawn_blocking(move || engine.list_diseases()).await?;
    for name in names {
        println!("{name}");
    }
    Ok(())
}
