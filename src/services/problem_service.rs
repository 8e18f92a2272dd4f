//! Problem service

use mongodb::{
    Database,
    bson::{Document, doc},
};

use crate::{
    db::repositories::{CounterRepository, ProblemRepository},
    error::{AppError, AppResult},
    handlers::problems::{
        request::{CreateProblemRequest, ListArgs, UpdateProblemRequest},
        response::{ProblemListResponse, SummaryListResponse},
    },
    models::Problem,
};

/// Problem service for business logic
pub struct ProblemService;

impl ProblemService {
    /// Create a new problem: allocate a pid and persist the caller's fields
    /// under it
    pub async fn create_problem(db: &Database, payload: CreateProblemRequest) -> AppResult<i64> {
        let pid = CounterRepository::allocate(db).await?;

        let problem = payload.into_problem(pid);
        tracing::debug!(pid, title = %problem.title, "storing new problem");

        ProblemRepository::insert(db, &problem).await?;

        Ok(pid)
    }

    /// Merge the fields present in the payload into an existing problem
    pub async fn update_problem(
        db: &Database,
        pid: i64,
        payload: UpdateProblemRequest,
    ) -> AppResult<()> {
        let fields = payload.set_document()?;
        if fields.is_empty() {
            return Err(AppError::InvalidInput("no fields to update".to_string()));
        }

        if !ProblemRepository::apply_update(db, pid, fields).await? {
            return Err(AppError::UnknownPid(pid));
        }

        Ok(())
    }

    /// Get problem by pid
    pub async fn get_problem(db: &Database, pid: i64) -> AppResult<Problem> {
        ProblemRepository::find_by_pid(db, pid)
            .await?
            .ok_or(AppError::NotFound(pid))
    }

    /// List full problem records (the early-revision response shape)
    pub async fn list_problems(db: &Database, args: &ListArgs) -> AppResult<ProblemListResponse> {
        let items =
            ProblemRepository::list(db, Self::filter_document(args), Self::result_cap(args))
                .await?;

        let last = Self::page_cursor(args.limit, items.len(), items.last().map(|p| p.pid));

        Ok(ProblemListResponse { items, last })
    }

    /// List reduced summaries (the later-revision response shape)
    pub async fn list_summaries(db: &Database, args: &ListArgs) -> AppResult<SummaryListResponse> {
        let items = ProblemRepository::list_summaries(
            db,
            Self::filter_document(args),
            Self::result_cap(args),
        )
        .await?;

        let last = Self::page_cursor(args.limit, items.len(), items.last().map(|s| s.pid));

        Ok(SummaryListResponse { items, last })
    }

    /// Translate the typed list arguments into a find filter
    fn filter_document(args: &ListArgs) -> Document {
        let mut filter = Document::new();
        if let Some(source) = &args.source {
            filter.insert("source", source.as_str());
        }
        if let Some(last) = args.last {
            filter.insert("pid", doc! { "$gt": last });
        }
        filter
    }

    /// Effective result cap; non-positive limits mean uncapped
    fn result_cap(args: &ListArgs) -> Option<i64> {
        args.limit.filter(|l| *l > 0)
    }

    /// Continuation cursor for a page: the final pid, emitted only when the
    /// page is exactly full. A short page signals the caller it is on the
    /// last page.
    fn page_cursor(limit: Option<i64>, returned: usize, final_pid: Option<i64>) -> Option<i64> {
        match limit {
            Some(l) if l > 0 && returned as i64 == l => final_pid,
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_document() {
        let args = ListArgs {
            source: Some("hdu".to_string()),
            last: Some(5),
            limit: Some(2),
        };
        let filter = ProblemService::filter_document(&args);
        assert_eq!(filter.get_str("source").unwrap(), "hdu");
        assert_eq!(
            filter.get_document("pid").unwrap().get_i64("$gt").unwrap(),
            5
        );

        assert!(ProblemService::filter_document(&ListArgs::default()).is_empty());
    }

    #[test]
    fn test_result_cap() {
        let capped = ListArgs {
            limit: Some(10),
            ..Default::default()
        };
        assert_eq!(ProblemService::result_cap(&capped), Some(10));

        let uncapped = ListArgs {
            limit: Some(0),
            ..Default::default()
        };
        assert_eq!(ProblemService::result_cap(&uncapped), None);
        assert_eq!(ProblemService::result_cap(&ListArgs::default()), None);
    }

    #[test]
    fn test_page_cursor_full_page() {
        assert_eq!(ProblemService::page_cursor(Some(2), 2, Some(2)), Some(2));
    }

    #[test]
    fn test_page_cursor_short_page() {
        // Fewer items than the limit means the caller is on the last page
        assert_eq!(ProblemService::page_cursor(Some(2), 1, Some(3)), None);
    }

    #[test]
    fn test_page_cursor_without_limit() {
        assert_eq!(ProblemService::page_cursor(None, 4, Some(9)), None);
        assert_eq!(ProblemService::page_cursor(Some(0), 0, None), None);
    }
}
