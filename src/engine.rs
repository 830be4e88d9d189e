//! Application-scoped predictor lifecycle and prediction boundary.

use std::{cmp::Ordering, sync::Arc};

use once_cell::sync::OnceCell;
use serde::Serialize;
use tracing::{error, info, warn};

use crate::{
    config::Settings,
    data::{self, TrainingData},
    error::{BuildFailure, StoreError},
    model::{
        store::{self, ArtifactBundle},
        train,
    },
    vocab::{encoder, suggest, SymptomVocabulary},
};

/// Number of ranked alternatives reported per prediction.
pub const TOP_K: usize = 3;

const ERR_NO_MATCH: &str = "no matching symptoms";
const ERR_UNAVAILABLE: &str = "model unavailable";

/// One ranked (condition, probability) pair.
#[derive(Debug, Clone, Serialize)]
pub struct RankedCondition {
    pub condition: String,
    pub probability: f64,
}

/// Outcome of a single prediction call. Error outcomes are ordinary values;
/// nothing in the engine panics past this boundary.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PredictionResult {
    Predicted {
        condition: String,
        confidence: f64,
        matched_symptoms: Vec<String>,
        ranking: Vec<RankedCondition>,
    },
    NoMatch {
        error: String,
        confidence: f64,
        known_symptoms: Vec<String>,
    },
    Unavailable {
        error: String,
        confidence: f64,
    },
}

impl PredictionResult {
    /// Error message, when the call did not produce a prediction.
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Predicted { .. } => None,
            Self::NoMatch { error, .. } | Self::Unavailable { error, .. } => Some(error),
        }
    }

    pub fn confidence(&self) -> f64 {
        match self {
            Self::Predicted { confidence, .. }
            | Self::NoMatch { confidence, .. }
            | Self::Unavailable { confidence, .. } => *confidence,
        }
    }

    fn no_match(known_symptoms: Vec<String>) -> Self {
        Self::NoMatch {
            error: ERR_NO_MATCH.to_string(),
            confidence: 0.0,
            known_symptoms,
        }
    }

    fn unavailable() -> Self {
        Self::Unavailable {
            error: ERR_UNAVAILABLE.to_string(),
            confidence: 0.0,
        }
    }
}

/// Application-scoped handle owning the single in-memory artifact bundle.
///
/// Construct once and share by reference. The first `get_or_build` performs
/// the load-or-train transition exactly once while concurrent callers wait
/// on it; steady-state reads take no lock.
pub struct TriageEngine {
    settings: Settings,
    bundle: OnceCell<Result<Arc<ArtifactBundle>, BuildFailure>>,
}

impl TriageEngine {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            bundle: OnceCell::new(),
        }
    }

    /// Return the cached bundle, loading or training it on first use.
    ///
    /// Failures are cached too: a process that can neither load nor train
    /// reports the same unavailability on every call instead of re-running
    /// an expensive doomed build.
    pub fn get_or_build(&self) -> Result<Arc<ArtifactBundle>, BuildFailure> {
        self.bundle.get_or_init(|| self.build()).clone()
    }

    fn build(&self) -> Result<Arc<ArtifactBundle>, BuildFailure> {
        match store::load(&self.settings.artifact_path) {
            Ok(bundle) => return Ok(Arc::new(bundle)),
            Err(StoreError::NotFound(_)) => {
                info!("no persisted artifact; training from dataset")
            }
            Err(err) => warn!(%err, "artifact load failed; retraining"),
        }

        let outcome = self.train_and_save();
        if let Err(failure) = &outcome {
            error!(
                reason = failure.reason(),
                "model build failed; predictions unavailable for this process"
            );
        }
        outcome
    }

    fn train_and_save(&self) -> Result<Arc<ArtifactBundle>, BuildFailure> {
        let data = data::load_dataset(&self.settings.dataset_path)
            .map_err(|err| BuildFailure::new(err.to_string()))?;
        let trained = train::train(&data).map_err(|err| BuildFailure::new(err.to_string()))?;

        let TrainingData {
            symptoms, diseases, ..
        } = data;
        let bundle = ArtifactBundle::from_trained(trained, symptoms, diseases);
        if let Err(err) = store::save(&bundle, &self.settings.artifact_path) {
            warn!(%err, "persisting artifact failed; continuing with in-memory model");
        }
        Ok(Arc::new(bundle))
    }

    /// Predict the most likely condition for `tokens`.
    pub fn predict(&self, tokens: &[String]) -> PredictionResult {
        let bundle = match self.get_or_build() {
            Ok(bundle) => bundle,
            Err(_) => return PredictionResult::unavailable(),
        };
        let encoding = match encoder::encode(tokens, &bundle.symptoms) {
            Ok(encoding) => encoding,
            Err(no_match) => return PredictionResult::no_match(no_match.known_sample),
        };

        let proba = bundle.forest.predict_proba(encoding.vector.view());
        let ranking = rank_conditions(&proba, &bundle);
        match ranking.first() {
            Some(top) => PredictionResult::Predicted {
                condition: top.condition.clone(),
                confidence: top.probability,
                matched_symptoms: encoding.matched,
                ranking,
            },
            None => PredictionResult::unavailable(),
        }
    }

    /// Typeahead suggestions; degrades to the static fallback vocabulary.
    pub fn suggest(&self, query: &str) -> Vec<String> {
        match self.get_or_build() {
            Ok(bundle) => suggest::suggest(query, &bundle.symptoms),
            Err(_) => suggest::suggest(query, &SymptomVocabulary::fallback()),
        }
    }

    /// The trained vocabulary, or the static fallback when unavailable.
    pub fn list_symptoms(&self) -> Vec<String> {
        match self.get_or_build() {
            Ok(bundle) => bundle.symptoms.entries().to_vec(),
            Err(_) => SymptomVocabulary::fallback().entries().to_vec(),
        }
    }

    /// Conditions the model can predict; empty when unavailable.
    pub fn list_diseases(&self) -> Vec<String> {
        match self.get_or_build() {
            Ok(bundle) => bundle.diseases.names().to_vec(),
            Err(_) => Vec::new(),
        }
    }
}

/// Top-k conditions sorted by probability, ties broken by code order so the
/// head always agrees with the standalone arg-max prediction.
fn rank_conditions(proba: &[f64], bundle: &ArtifactBundle) -> Vec<RankedCondition> {
    let mut order: Vec<usize> = (0..proba.len()).collect();
    order.sort_by(|&a, &b| {
        proba[b]
            .partial_cmp(&proba[a])
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.cmp(&b))
    });
    order
        .into_iter()
        .take(TOP_K)
        .filter_map(|code| {
            bundle.diseases.name_of(code).map(|name| RankedCondition {
                condition: name.to_string(),
                probability: proba[code],
            })
        })
        .collect()
}
