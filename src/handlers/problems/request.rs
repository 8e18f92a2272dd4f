//! Problem request DTOs

use mongodb::bson::{self, Document};
use serde::{Deserialize, Serialize};

use crate::{
    error::{AppError, AppResult},
    models::Problem,
};

/// Create problem request.
///
/// Every field is optional on the wire; absent fields take their zero value,
/// so a minimal `{"title": "..."}` body is accepted. The pid is always
/// server-assigned; any client-supplied value is discarded.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CreateProblemRequest {
    pub title: String,
    pub source: String,

    pub description: String,
    pub des_in: String,
    pub des_out: String,

    pub sample_in: String,
    pub sample_out: String,
    pub input: String,
    pub output: String,

    pub time: u32,
    pub mem: u32,

    pub submit: i64,
    pub solved: i64,
}

impl CreateProblemRequest {
    /// Attach the allocated pid and build the document to persist
    pub fn into_problem(self, pid: i64) -> Problem {
        Problem {
            pid,
            title: self.title,
            source: self.source,
            description: self.description,
            des_in: self.des_in,
            des_out: self.des_out,
            sample_in: self.sample_in,
            sample_out: self.sample_out,
            input: self.input,
            output: self.output,
            time: self.time,
            mem: self.mem,
            submit: self.submit,
            solved: self.solved,
        }
    }
}

/// Update problem request.
///
/// A field is written only when it is present in the body: omitted fields
/// stay untouched, while an explicit empty string or 0 is a real
/// assignment. The pid itself is never updatable.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct UpdateProblemRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub des_in: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub des_out: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sample_in: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sample_out: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mem: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub submit: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub solved: Option<i64>,
}

impl UpdateProblemRequest {
    /// Build the `$set` document containing exactly the fields present in
    /// the request
    pub fn set_document(&self) -> AppResult<Document> {
        let fields = bson::to_document(self)?;
        Ok(fields)
    }
}

/// Typed list arguments, parsed from the slash-delimited key/value segments
/// that follow the listing route prefix: `limit/<n>/last/<pid>/source/<tag>`
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ListArgs {
    /// Exact-match filter on the source tag
    pub source: Option<String>,
    /// Cursor: only pids strictly greater than this are returned
    pub last: Option<i64>,
    /// Result cap; values <= 0 mean uncapped
    pub limit: Option<i64>,
}

impl ListArgs {
    /// Parse the wildcard remainder of a listing path.
    ///
    /// Segments are taken pairwise; a trailing unpaired key is dropped and
    /// unrecognized keys are ignored, as the legacy parser did. Empty
    /// `source`/`last` values count as absent, while `limit` must always
    /// parse as an integer.
    pub fn parse(path: &str) -> AppResult<Self> {
        let segments: Vec<&str> = path.split('/').collect();

        let mut args = Self::default();
        for pair in segments.chunks_exact(2) {
            let (key, value) = (pair[0], pair[1]);
            match key {
                "source" if !value.is_empty() => args.source = Some(value.to_string()),
                "last" if !value.is_empty() => {
                    args.last = Some(value.parse().map_err(|_| {
                        AppError::InvalidInput(format!("invalid last pid: {value}"))
                    })?);
                }
                "limit" => {
                    args.limit = Some(value.parse().map_err(|_| {
                        AppError::InvalidInput(format!("invalid limit: {value}"))
                    })?);
                }
                _ => {}
            }
        }

        Ok(args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_keys() {
        let args = ListArgs::parse("limit/2/last/5/source/hdu").unwrap();
        assert_eq!(
            args,
            ListArgs {
                source: Some("hdu".to_string()),
                last: Some(5),
                limit: Some(2),
            }
        );
    }

    #[test]
    fn test_parse_ignores_unknown_keys() {
        let args = ListArgs::parse("flavor/blue/limit/3").unwrap();
        assert_eq!(args.limit, Some(3));
        assert_eq!(args.source, None);
    }

    #[test]
    fn test_parse_drops_trailing_unpaired_key() {
        let args = ListArgs::parse("limit/3/last").unwrap();
        assert_eq!(args.limit, Some(3));
        assert_eq!(args.last, None);
    }

    #[test]
    fn test_parse_rejects_malformed_integers() {
        assert!(ListArgs::parse("limit/abc").is_err());
        assert!(ListArgs::parse("last/1x").is_err());
        // An empty limit value is still a parse failure
        assert!(ListArgs::parse("limit/").is_err());
    }

    #[test]
    fn test_parse_empty_cursor_values_are_absent() {
        let args = ListArgs::parse("last//source//limit/4").unwrap();
        assert_eq!(args.last, None);
        assert_eq!(args.source, None);
        assert_eq!(args.limit, Some(4));
    }

    #[test]
    fn test_parse_empty_path() {
        assert_eq!(ListArgs::parse("").unwrap(), ListArgs::default());
    }

    #[test]
    fn test_set_document_contains_only_present_fields() {
        let req = UpdateProblemRequest {
            title: Some("Two Sum".to_string()),
            ..Default::default()
        };
        let doc = req.set_document().unwrap();
        assert_eq!(doc.len(), 1);
        assert_eq!(doc.get_str("title").unwrap(), "Two Sum");
    }

    #[test]
    fn test_set_document_keeps_explicit_zero() {
        // An explicit 0 is an assignment, not "unset"
        let req = UpdateProblemRequest {
            time: Some(0),
            ..Default::default()
        };
        let doc = req.set_document().unwrap();
        assert_eq!(doc.len(), 1);
        assert!(doc.contains_key("time"));
    }

    #[test]
    fn test_set_document_empty_when_no_fields() {
        let doc = UpdateProblemRequest::default().set_document().unwrap();
        assert!(doc.is_empty());
    }

    #[test]
    fn test_create_request_defaults() {
        let req: CreateProblemRequest = serde_json::from_str(r#"{"title": "A"}"#).unwrap();
        assert_eq!(req.title, "A");
        assert_eq!(req.source, "");
        assert_eq!(req.time, 0);

        let problem = req.into_problem(42);
        assert_eq!(problem.pid, 42);
    }
}
