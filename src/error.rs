//! Error taxonomy for the triage core.

use std::path::PathBuf;

use thiserror::Error;

/// Failures while reading or interpreting the training dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("dataset file not found at {0}")]
    Missing(PathBuf),
    #[error("label column `{0}` not found in dataset")]
    MissingLabelColumn(&'static str),
    #[error("dataset contains no data rows")]
    Empty,
    #[error("row {row}, column `{column}`: value `{value}` is not a binary indicator")]
    BadValue {
        row: usize,
        column: String,
        value: String,
    },
    #[error("dataset shape mismatch: {0}")]
    Shape(String),
    #[error("csv parse failure: {0}")]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Failures in the training pipeline.
#[derive(Debug, Error)]
pub enum TrainingError {
    #[error(transparent)]
    Dataset(#[from] DatasetError),
    #[error("condition `{label}` has {count} example(s); a stratified split needs at least 2")]
    TooFewExamples { label: String, count: usize },
    #[error("tree fit failed: {0}")]
    Fit(String),
}

/// Failures reading or writing the persisted artifact bundle.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("artifact not found at {0}")]
    NotFound(PathBuf),
    #[error("artifact schema version {found} is unsupported (expected {expected})")]
    Version { found: u32, expected: u32 },
    #[error("artifact codec failure: {0}")]
    Codec(#[from] bincode::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Terminal build failure cached by the engine for the process lifetime.
///
/// Cloneable so every caller of a failed build observes the same outcome.
#[derive(Debug, Clone, Error)]
#[error("model unavailable: {reason}")]
pub struct BuildFailure {
    reason: String,
}

impl BuildFailure {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }
}
