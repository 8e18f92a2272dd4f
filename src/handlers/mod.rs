//! HTTP Request Handlers
//!
//! This module contains all HTTP request handlers organized by domain.

pub mod health;
pub mod problems;

use axum::Router;

use crate::state::AppState;

/// Create all routes.
///
/// The problem routes live at the root rather than under an `/api` prefix;
/// the legacy clients address them by absolute path.
pub fn routes() -> Router<AppState> {
    Router::new().merge(health::routes()).merge(problems::routes())
}
