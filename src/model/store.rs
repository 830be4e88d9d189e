//! Durable artifact bundle persistence.

use std::{
    fs::File,
    io::{BufReader, BufWriter},
    path::Path,
};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use tracing::info;

use crate::{
    error::StoreError,
    model::{forest::ConditionForest, train::TrainedModel},
    vocab::{DiseaseVocabulary, SymptomVocabulary},
};

/// Current on-disk layout revision.
pub const SCHEMA_VERSION: u32 = 1;

/// The durable unit: trained ensemble plus the vocabularies and label codes
/// it was fitted against. Replaced wholesale on retrain, never patched.
#[derive(Debug, Serialize, Deserialize)]
pub struct ArtifactBundle {
    pub schema_version: u32,
    pub trained_at: DateTime<Utc>,
    pub forest: ConditionForest,
    pub symptoms: SymptomVocabulary,
    pub diseases: DiseaseVocabulary,
    pub feature_importance: Option<Vec<f64>>,
    pub holdout_accuracy: f64,
}

impl ArtifactBundle {
    /// Assemble the durable unit from a freshly trained model.
    pub fn from_trained(
        trained: TrainedModel,
        symptoms: SymptomVocabulary,
        diseases: DiseaseVocabulary,
    ) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            trained_at: Utc::now(),
            holdout_accuracy: trained.report.accuracy,
            feature_importance: Some(trained.feature_importance),
            forest: trained.forest,
            symptoms,
            diseases,
        }
    }
}

/// Serialise `bundle` beside `path` and swap it into place atomically.
pub fn save(bundle: &ArtifactBundle, path: &Path) -> Result<(), StoreError> {
    let parent = path.parent().unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(parent)?;

    let temp = NamedTempFile::new_in(parent)?;
    let writer = BufWriter::new(&temp);
    bincode::serialize_into(writer, bundle)?;
    temp.persist(path).map_err(|err| StoreError::Io(err.error))?;
    info!(path = %path.display(), "wrote model artifact");
    Ok(())
}

/// Read a bundle back; `NotFound` when the path does not exist.
pub fn load(path: &Path) -> Result<ArtifactBundle, StoreError> {
    if !path.exists() {
        return Err(StoreError::NotFound(path.to_path_buf()));
    }
    let reader = BufReader::new(File::open(path)?);
    let bundle: ArtifactBundle = bincode::deserialize_from(reader)?;
    if bundle.schema_version != SCHEMA_VERSION {
        return Err(StoreError::Version {
            found: bundle.schema_version,
            expected: SCHEMA_VERSION,
        });
    }
    info!(
        path = %path.display(),
        symptoms = bundle.symptoms.len(),
        diseases = bundle.diseases.len(),
        "loaded model artifact"
    );
    Ok(bundle)
}
