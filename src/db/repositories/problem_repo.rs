//! Problem repository

use futures::TryStreamExt;
use mongodb::{
    Database,
    bson::{Document, doc},
    options::FindOptions,
};

use crate::{
    constants::PROBLEMS_COLLECTION,
    error::AppResult,
    models::{Problem, ProblemSummary},
};

/// Projection hiding the internal storage id; the legacy wire format never
/// carries `_id`
fn full_projection() -> Document {
    doc! { "_id": 0 }
}

/// Reduced projection for the summary listing
fn summary_projection() -> Document {
    doc! { "_id": 0, "pid": 1, "title": 1, "source": 1, "submit": 1, "solved": 1 }
}

/// Ascending pid order, the only ordering the contract defines
fn sort_by_pid() -> Document {
    doc! { "pid": 1 }
}

/// Repository for problem database operations
pub struct ProblemRepository;

impl ProblemRepository {
    /// Insert a new problem document
    pub async fn insert(db: &Database, problem: &Problem) -> AppResult<()> {
        db.collection::<Problem>(PROBLEMS_COLLECTION)
            .insert_one(problem, None)
            .await?;

        Ok(())
    }

    /// Apply a `$set` merge-update to the problem with the given pid.
    /// Returns whether a document matched.
    pub async fn apply_update(db: &Database, pid: i64, fields: Document) -> AppResult<bool> {
        let result = db
            .collection::<Problem>(PROBLEMS_COLLECTION)
            .update_one(doc! { "pid": pid }, doc! { "$set": fields }, None)
            .await?;

        Ok(result.matched_count > 0)
    }

    /// Find problem by pid
    pub async fn find_by_pid(db: &Database, pid: i64) -> AppResult<Option<Problem>> {
        let options = mongodb::options::FindOneOptions::builder()
            .projection(full_projection())
            .build();

        let problem = db
            .collection::<Problem>(PROBLEMS_COLLECTION)
            .find_one(doc! { "pid": pid }, options)
            .await?;

        Ok(problem)
    }

    /// List full problem records matching `filter`, ascending by pid
    pub async fn list(
        db: &Database,
        filter: Document,
        limit: Option<i64>,
    ) -> AppResult<Vec<Problem>> {
        let options = FindOptions::builder()
            .sort(sort_by_pid())
            .projection(full_projection())
            .limit(limit)
            .build();

        let problems = db
            .collection::<Problem>(PROBLEMS_COLLECTION)
            .find(filter, options)
            .await?
            .try_collect()
            .await?;

        Ok(problems)
    }

    /// List reduced summaries matching `filter`, ascending by pid
    pub async fn list_summaries(
        db: &Database,
        filter: Document,
        limit: Option<i64>,
    ) -> AppResult<Vec<ProblemSummary>> {
        let options = FindOptions::builder()
            .sort(sort_by_pid())
            .projection(summary_projection())
            .limit(limit)
            .build();

        let summaries = db
            .collection::<ProblemSummary>(PROBLEMS_COLLECTION)
            .find(filter, options)
            .await?
            .try_collect()
            .await?;

        Ok(summaries)
    }
}
