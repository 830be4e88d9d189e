//! HTTP route handlers for Axum.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use crate::{api::types::PredictRequest, engine::PredictionResult};

use super::AppState;

type ApiResult<T> = Result<Json<T>, (StatusCode, String)>;

pub async fn predict(
    State(state): State<AppState>,
    Json(request): Json<PredictRequest>,
) -> ApiResult<PredictionResult> {
    if request.symptoms.is_empty() {
        return Err((
            StatusCode::UNPROCESSABLE_ENTITY,
            "at least one symptom is required".to_string(),
        ));
    }
    let engine = state.engine.clone();
    let result = tokio::task::spawn_blocking(move || engine.predict(&request.symptoms))
        .await
        .map_err(|err| (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()))?;
    Ok(Json(result))
}

#[derive(Debug, Deserialize)]
pub struct SuggestQuery {
    #[serde(default)]
    pub q: String,
}

pub async fn suggest(
    State(state): State<AppState>,
    Query(query): Query<SuggestQuery>,
) -> ApiResult<Vec<String>> {
    let engine = state.engine.clone();
    let matches = tokio::task::spawn_blocking(move || engine.suggest(&query.q))
        .await
        .map_err(|err| (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()))?;
    Ok(Json(matches))
}

pub async fn list_symptoms(State(state): State<AppState>) -> ApiResult<Vec<String>> {
    let engine = state.engine.clone();
    let entries = tokio::task::spawn_blocking(move || engine.list_symptoms())
        .await
        .map_err(|err| (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()))?;
    Ok(Json(entries))
}

pub async fn list_diseases(State(state): State<AppState>) -> ApiResult<Vec<String>> {
    let engine = state.engine.clone();
    let names = tokio::task::spawn_blocking(move || engine.list_diseases())
        .await
        .map_err(|err| (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()))?;
    Ok(Json(names))
}
