//! Problem model

use serde::{Deserialize, Serialize};

/// Problem document as stored in the `problems` collection.
///
/// The same shape is used on the wire: the BSON and JSON field names match,
/// and the internal `_id` is projected out of every query so it never
/// appears in either.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Problem {
    /// Server-assigned id, unique and immutable
    pub pid: i64,

    pub title: String,
    /// Origin tag, e.g. the contest or judge the problem came from
    pub source: String,

    pub description: String,
    /// Input format description
    pub des_in: String,
    /// Output format description
    pub des_out: String,

    /// Sample input shown to users
    pub sample_in: String,
    /// Sample output shown to users
    pub sample_out: String,
    /// Reference input data
    pub input: String,
    /// Reference output data
    pub output: String,

    /// Time limit in seconds
    pub time: u32,
    /// Memory limit in MB
    pub mem: u32,

    /// Number of submissions recorded against this problem
    #[serde(default)]
    pub submit: i64,
    /// Number of accepted submissions
    #[serde(default)]
    pub solved: i64,
}

/// Reduced projection served by the summary listing route
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProblemSummary {
    pub pid: i64,
    pub title: String,
    pub source: String,
    #[serde(default)]
    pub submit: i64,
    #[serde(default)]
    pub solved: i64,
}

/// Singleton counter document holding the next pid to assign
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Counter {
    pub pro_id: i64,
}
