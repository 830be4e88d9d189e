//! Runtime configuration utilities for triage-assistant.

use std::{
    env,
    path::{Path, PathBuf},
};

use anyhow::Context;
use serde::Deserialize;

/// Application configuration resolved from `.env` and defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Tabular training dataset (binary symptom columns + prognosis label).
    pub dataset_path: PathBuf,
    /// Persisted model artifact bundle.
    pub artifact_path: PathBuf,
    /// Root folder for data artefacts.
    pub data_dir: PathBuf,
}

impl Settings {
    /// Load configuration from environment with reasonable defaults.
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let data_dir = env::var("TRIAGE_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./data"));
        let dataset_path = env::var("TRIAGE_DATASET")
            .map(PathBuf::from)
            .unwrap_or_else(|_| data_dir.join("training.csv"));
        let artifact_path = env::var("TRIAGE_ARTIFACT")
            .map(PathBuf::from)
            .unwrap_or_else(|_| data_dir.join("condition_model.bin"));

        std::fs::create_dir_all(&data_dir).context("creating data dir")?;

        Ok(Self {
            dataset_path,
            artifact_path,
            data_dir,
        })
    }

    /// Convenience helper for derived path segments.
    pub fn join_data<P: AsRef<Path>>(&self, path: P) -> PathBuf {
        self.data_dir.join(path)
    }
}
