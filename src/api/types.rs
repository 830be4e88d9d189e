//! Shared DTOs for JSON requests.

use serde::Deserialize;

/// Prediction request body.
#[derive(Debug, Clone, Deserialize)]
pub struct PredictRequest {
    pub symptoms: Vec<String>,
}
