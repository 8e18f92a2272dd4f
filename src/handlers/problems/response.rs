//! Problem response DTOs

use serde::Serialize;

use crate::models::{Problem, ProblemSummary};

/// Body returned by a successful create
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub pid: i64,
}

/// Full listing response, the early-revision shape served by `/list`.
///
/// `last` carries the final pid of the page and is present only when the
/// page is exactly full; its absence tells the caller this is the last page.
#[derive(Debug, Serialize)]
pub struct ProblemListResponse {
    pub items: Vec<Problem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last: Option<i64>,
}

/// Reduced listing response, the later-revision shape served by `/plist`
#[derive(Debug, Serialize)]
pub struct SummaryListResponse {
    pub items: Vec<ProblemSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_omitted_when_absent() {
        let body = serde_json::to_value(SummaryListResponse {
            items: vec![],
            last: None,
        })
        .unwrap();
        assert!(body.get("last").is_none());
        assert!(body.get("items").unwrap().as_array().unwrap().is_empty());
    }

    #[test]
    fn test_last_present_on_full_page() {
        let body = serde_json::to_value(SummaryListResponse {
            items: vec![ProblemSummary {
                pid: 2,
                title: "B".to_string(),
                source: "hdu".to_string(),
                submit: 0,
                solved: 0,
            }],
            last: Some(2),
        })
        .unwrap();
        assert_eq!(body["last"], 2);
    }

    #[test]
    fn test_created_response_shape() {
        let body = serde_json::to_value(CreatedResponse { pid: 7 }).unwrap();
        assert_eq!(body, serde_json::json!({ "pid": 7 }));
    }
}
