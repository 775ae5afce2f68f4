// src/handlers/reports.rs

use axum::{
    Extension, Json,
    extract::{Path, State},
    response::IntoResponse,
};

use crate::{
    error::AppError,
    models::{
        report::{ReportListResponse, ReportReviewResponse, ReviewTally},
        user::MeResponse,
    },
    projection::{review, summary},
    upstream::{SharedSource, fetch_questions},
    utils::jwt::Session,
};

/// Profile of the signed-in user, for the page header.
pub async fn get_me(
    State(source): State<SharedSource>,
    Extension(session): Extension<Session>,
) -> Result<impl IntoResponse, AppError> {
    let profile = source.user_profile(session.user_id).await?;

    Ok(Json(MeResponse::new(session.user_id, profile)))
}

/// Lists the signed-in user's reports for one test.
///
/// The test definition and the result list are fetched concurrently; if
/// either is unavailable the whole list is.
pub async fn list_reports(
    State(source): State<SharedSource>,
    Extension(session): Extension<Session>,
    Path(test_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let (test, results) = tokio::try_join!(
        source.test_definition(test_id),
        source.test_results_for_user(session.user_id, test_id),
    )?;

    let reports = summary::project(&results, &test)?;

    tracing::debug!(
        "Projected {} reports for user {} on test {}",
        reports.len(),
        session.user_id,
        test_id
    );

    Ok(Json(ReportListResponse {
        test_id,
        test_title: test.title,
        reports,
    }))
}

/// Detailed review of one attempt.
///
/// * Fetches the result, then its test and questions concurrently.
/// * Questions that fail to load are left out of the review.
/// * A missing test definition fails the request; no partial review is sent.
pub async fn get_report(
    State(source): State<SharedSource>,
    Extension(session): Extension<Session>,
    Path(result_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let result = source.test_result(result_id).await?;

    if !session.can_view(result.user_id) {
        tracing::warn!(
            "User {} tried to open result {} owned by user {}",
            session.user_id,
            result_id,
            result.user_id
        );
        return Err(AppError::Forbidden(
            "This report belongs to another user".to_string(),
        ));
    }

    let (test, questions) = tokio::join!(
        source.test_definition(result.test_id),
        fetch_questions(source.as_ref(), &result),
    );
    let test = test?;

    let entries = review::project(&result, &test, &questions);
    let tally = ReviewTally::from_entries(&entries);

    Ok(Json(ReportReviewResponse {
        result_id: result.id,
        test_id: result.test_id,
        test_title: test.title,
        max_marks: test.max_marks,
        tally,
        entries,
    }))
}
