//! Dataset ingestion layer.

pub mod loader;

pub use loader::{load_dataset, TrainingData, LABEL_COLUMN};
