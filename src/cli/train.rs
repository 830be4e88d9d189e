//! CLI entry-point for retraining the condition model.

use anyhow::Result;
use tracing::{info, instrument};

use crate::{
    config::Settings,
    data::{self, TrainingData},
    model::{
        store::{self, ArtifactBundle},
        train,
    },
};

/// Train unconditionally from the configured dataset, replacing any
/// persisted artifact.
#[instrument(skip(settings))]
pub async fn run(settings: Settings) -> Result<()> {
    let dataset_path = settings.dataset_path.clone();
    let artifact_path = settings.artifact_path.clone();

    tokio::task::spawn_blocking(move || -> Result<()> {
        let data = data::load_dataset(&dataset_path)?;
        let trained = train::train(&data)?;

        for class in &trained.report.per_class {
            info!(
                condition = %class.condition,
                precision = class.precision,
                recall = class.recall,
                support = class.support,
                "holdout diagnostics"
            );
        }
        info!(
            accuracy = trained.report.accuracy,
            train = trained.report.train_examples,
            holdout = trained.report.holdout_examples,
            "holdout accuracy"
        );

        let TrainingData {
            symptoms, diseases, ..
        } = data;
        let bundle = ArtifactBundle::from_trained(trained, symptoms, diseases);
        store::save(&bundle, &artifact_path)?;
        Ok(())
    })
    .await?
}
