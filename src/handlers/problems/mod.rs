//! Problem management handlers
//!
//! The route set is the legacy flat namespace: `/new` and `/pnew` both
//! create, `/list` serves the full record shape and `/plist` the reduced
//! summary shape. Each route carries a fallback so a wrong method answers
//! 403 as the original service did.

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Problem routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/new",
            post(handler::create_problem).fallback(handler::method_not_allowed),
        )
        .route(
            "/pnew",
            post(handler::create_problem).fallback(handler::method_not_allowed),
        )
        .route(
            "/pupdate/{pid}",
            post(handler::update_problem).fallback(handler::method_not_allowed),
        )
        .route(
            "/pget/{pid}",
            get(handler::get_problem).fallback(handler::method_not_allowed),
        )
        .route(
            "/list",
            get(handler::list_problems_root).fallback(handler::method_not_allowed),
        )
        .route(
            "/list/",
            get(handler::list_problems_root).fallback(handler::method_not_allowed),
        )
        .route(
            "/list/{*args}",
            get(handler::list_problems).fallback(handler::method_not_allowed),
        )
        .route(
            "/plist",
            get(handler::list_summaries_root).fallback(handler::method_not_allowed),
        )
        .route(
            "/plist/",
            get(handler::list_summaries_root).fallback(handler::method_not_allowed),
        )
        .route(
            "/plist/{*args}",
            get(handler::list_summaries).fallback(handler::method_not_allowed),
        )
}
