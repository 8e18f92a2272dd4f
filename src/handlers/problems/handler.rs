//! Problem handler implementations

use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    error::{AppError, AppResult},
    models::Problem,
    services::ProblemService,
    state::AppState,
};

use super::{
    request::{CreateProblemRequest, ListArgs, UpdateProblemRequest},
    response::{CreatedResponse, ProblemListResponse, SummaryListResponse},
};

/// Create a new problem
pub async fn create_problem(
    State(state): State<AppState>,
    body: Bytes,
) -> AppResult<Json<CreatedResponse>> {
    let payload = decode_body::<CreateProblemRequest>(&body)?;

    let pid = ProblemService::create_problem(state.db(), payload).await?;

    Ok(Json(CreatedResponse { pid }))
}

/// Selectively update fields of an existing problem
pub async fn update_problem(
    State(state): State<AppState>,
    Path(pid): Path<String>,
    body: Bytes,
) -> AppResult<StatusCode> {
    let pid = parse_pid(&pid)?;
    let payload = decode_body::<UpdateProblemRequest>(&body)?;

    ProblemService::update_problem(state.db(), pid, payload).await?;

    Ok(StatusCode::OK)
}

/// Get a specific problem
pub async fn get_problem(
    State(state): State<AppState>,
    Path(pid): Path<String>,
) -> AppResult<Json<Problem>> {
    let pid = parse_pid(&pid)?;

    let problem = ProblemService::get_problem(state.db(), pid).await?;

    Ok(Json(problem))
}

/// List full problem records, filtered by the path arguments
pub async fn list_problems(
    State(state): State<AppState>,
    Path(args): Path<String>,
) -> AppResult<Json<ProblemListResponse>> {
    let args = ListArgs::parse(&args)?;

    let response = ProblemService::list_problems(state.db(), &args).await?;

    Ok(Json(response))
}

/// List full problem records with no filters
pub async fn list_problems_root(
    State(state): State<AppState>,
) -> AppResult<Json<ProblemListResponse>> {
    let response = ProblemService::list_problems(state.db(), &ListArgs::default()).await?;

    Ok(Json(response))
}

/// List problem summaries, filtered by the path arguments
pub async fn list_summaries(
    State(state): State<AppState>,
    Path(args): Path<String>,
) -> AppResult<Json<SummaryListResponse>> {
    let args = ListArgs::parse(&args)?;

    let response = ProblemService::list_summaries(state.db(), &args).await?;

    Ok(Json(response))
}

/// List problem summaries with no filters
pub async fn list_summaries_root(
    State(state): State<AppState>,
) -> AppResult<Json<SummaryListResponse>> {
    let response = ProblemService::list_summaries(state.db(), &ListArgs::default()).await?;

    Ok(Json(response))
}

/// Method-router fallback for the legacy routes, which answer 403 rather
/// than 405 on a wrong method
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

/// Decode a JSON request body.
///
/// Decoding is explicit rather than via the `Json` extractor so that shape
/// errors and syntax errors both map to 400, as the legacy decoder did. The
/// raw payload is recorded on the diagnostics log.
fn decode_body<T: serde::de::DeserializeOwned>(body: &Bytes) -> AppResult<T> {
    tracing::debug!(payload = %String::from_utf8_lossy(body), "request payload");

    serde_json::from_slice(body)
        .map_err(|e| AppError::InvalidInput(format!("malformed problem body: {e}")))
}

/// Parse the pid path segment
fn parse_pid(raw: &str) -> AppResult<i64> {
    raw.parse()
        .map_err(|_| AppError::InvalidInput(format!("invalid pid: {raw}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pid() {
        assert_eq!(parse_pid("12").unwrap(), 12);
        assert!(parse_pid("12a").is_err());
        assert!(parse_pid("").is_err());
    }

    #[test]
    fn test_decode_body_rejects_wrong_shape() {
        // A type mismatch is a 400, not a 422
        let body = Bytes::from_static(br#"{"time": "fast"}"#);
        let err = decode_body::<CreateProblemRequest>(&body).unwrap_err();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_decode_body_rejects_syntax_errors() {
        let body = Bytes::from_static(b"{not json");
        assert!(decode_body::<CreateProblemRequest>(&body).is_err());
    }
}
