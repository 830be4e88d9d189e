//! HTTP layer exposing the prediction boundary.

pub mod routes;
pub mod types;

use std::{net::SocketAddr, sync::Arc};

use anyhow::Result;
use axum::{
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::engine::TriageEngine;

#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<TriageEngine>,
}

pub async fn serve(engine: Arc<TriageEngine>, host: String, port: u16) -> Result<()> {
    // Warm the bundle off the request path; a failed build degrades the
    // endpoints rather than blocking startup.
    let warm = engine.clone();
    tokio::task::spawn_blocking(move || {
        if let Err(err) = warm.get_or_build() {
            warn!(%err, "model warm-up failed; serving degraded");
        }
    });

    let state = AppState { engine };
    let router = Router::new()
        .route("/predict", post(routes::predict))
        .route("/suggest", get(routes::suggest))
        .route("/symptoms", get(routes::list_symptoms))
        .route("/diseases", get(routes::list_diseases))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr: SocketAddr = format!("{host}:{port}").parse()?;
    info!(%addr, "serving triage-assistant API");
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router.into_make_service()).await?;
    Ok(())
}
