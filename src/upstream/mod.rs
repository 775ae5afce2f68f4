// src/upstream/mod.rs

//! Read access to the backend that owns tests, questions and results.

pub mod http;

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use futures::future::join_all;

use crate::models::{
    question::Question, test_definition::TestDefinition, test_result::TestResult, user::UserProfile,
};

pub use self::http::HttpReportSource;

/// Shared handle stored in the application state.
pub type SharedSource = Arc<dyn ReportSource>;

/// Failure to obtain a record from the upstream.
#[derive(Debug)]
pub enum UpstreamError {
    /// The upstream answered 404.
    NotFound(String),
    /// Any other non-success status.
    Status { status: u16, path: String },
    /// Connection, timeout or URL failure.
    Transport(String),
    /// The body was not the expected JSON.
    Decode(String),
}

impl fmt::Display for UpstreamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpstreamError::NotFound(path) => write!(f, "upstream has no record at {}", path),
            UpstreamError::Status { status, path } => {
                write!(f, "upstream returned {} for {}", status, path)
            }
            UpstreamError::Transport(msg) => write!(f, "upstream request failed: {}", msg),
            UpstreamError::Decode(msg) => write!(f, "upstream response was malformed: {}", msg),
        }
    }
}

impl std::error::Error for UpstreamError {}

/// The read-only data sources report views are built from.
#[async_trait]
pub trait ReportSource: Send + Sync {
    async fn test_definition(&self, test_id: i64) -> Result<TestDefinition, UpstreamError>;

    async fn question(&self, question_id: i64) -> Result<Question, UpstreamError>;

    async fn test_result(&self, result_id: i64) -> Result<TestResult, UpstreamError>;

    async fn test_results_for_user(
        &self,
        user_id: i64,
        test_id: i64,
    ) -> Result<Vec<TestResult>, UpstreamError>;

    async fn user_profile(&self, user_id: i64) -> Result<UserProfile, UpstreamError>;
}

/// Fetches every question referenced by `result`, concurrently.
///
/// Each distinct question id is requested once. A question that cannot be
/// fetched is logged and left out; the review simply skips it.
pub async fn fetch_questions(source: &dyn ReportSource, result: &TestResult) -> Vec<Question> {
    let mut seen = HashSet::new();
    let ids: Vec<i64> = result
        .selected_options
        .iter()
        .map(|s| s.question_id)
        .filter(|id| seen.insert(*id))
        .collect();

    let fetches = ids.into_iter().map(|id| async move {
        match source.question(id).await {
            Ok(question) => Some(question),
            Err(e) => {
                tracing::warn!(
                    "Dropping question {} from review of result {}: {}",
                    id,
                    result.id,
                    e
                );
                None
            }
        }
    });

    join_all(fetches).await.into_iter().flatten().collect()
}
