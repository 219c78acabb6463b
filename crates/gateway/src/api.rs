//! HTTP API for the prediction gateway

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use gateway_lib::{validate, Predictor, UpstreamError, ValidationError};
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{info, warn};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub predictor: Arc<dyn Predictor>,
}

impl AppState {
    pub fn new(predictor: Arc<dyn Predictor>) -> Self {
        Self { predictor }
    }
}

/// Prediction endpoint - validates the feature vector, delegates to the
/// upstream service, and relays its JSON response
async fn predict(State(state): State<Arc<AppState>>, Json(body): Json<Value>) -> Response {
    let features = match validate(&body) {
        Ok(features) => features,
        Err(err) => return validation_response(&err),
    };

    match state.predictor.predict(&features).await {
        Ok(prediction) => (StatusCode::OK, Json(prediction)).into_response(),
        Err(err) => {
            warn!(error = %err, "Prediction request failed upstream");
            upstream_response(&err)
        }
    }
}

/// Health check - the gateway holds no state, so serving at all means ok
async fn healthz() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

fn validation_response(err: &ValidationError) -> Response {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(json!({
            "error": "validation failed",
            "field": err.field(),
            "message": err.to_string(),
        })),
    )
        .into_response()
}

fn upstream_response(err: &UpstreamError) -> Response {
    (
        StatusCode::BAD_GATEWAY,
        Json(json!({
            "error": "ML service failed",
            "details": err.details(),
        })),
    )
        .into_response()
}

/// Create the API router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/predict", post(predict))
        .route("/healthz", get(healthz))
        .with_state(state)
}

/// Start the API server
pub async fn serve(port: u16, state: Arc<AppState>) -> anyhow::Result<()> {
    let app = create_router(state);

    let addr = format!("0.0.0.0:{}", port);
    info!(addr = %addr, "Starting API server");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
