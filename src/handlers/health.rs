//! Health check handlers

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::{db, state::AppState};

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub database: String,
    pub version: String,
}

/// Health check endpoint; reports whether the document store answers a ping
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let database = match db::test_connection(state.db()).await {
        Ok(()) => "up",
        Err(_) => "down",
    };

    Json(HealthResponse {
        status: if database == "up" { "healthy" } else { "degraded" }.to_string(),
        database: database.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Health routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
