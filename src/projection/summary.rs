// src/projection/summary.rs

use crate::models::{report::ReportSummary, test_definition::TestDefinition, test_result::TestResult};

use super::ProjectionError;

/// Computes the score of one attempt.
///
/// `floor(max_marks / selected_options.len() * correct_answers)`, evaluated
/// exactly as `max_marks * correct_answers / selected_options.len()` in integer
/// arithmetic so inexact divisions never cost a mark. The divisor is the number of selected-option entries, not
/// `number_of_questions`; the backend's scoring contract has not confirmed
/// which one is intended, so the observed formula is kept.
pub fn score_for(result: &TestResult, test: &TestDefinition) -> Result<i64, ProjectionError> {
    let attempted = result.selected_options.len();
    if attempted == 0 {
        return Err(ProjectionError::EmptySelection {
            result_id: result.id,
        });
    }

    // i128 keeps the product of two i64 values from overflowing.
    let score = (test.max_marks as i128 * result.correct_answers as i128)
        .div_euclid(attempted as i128);
    Ok(score as i64)
}

/// Builds the report list for a user's attempts at `test`, in input order.
///
/// Fails on the first result whose score is undefined.
pub fn project(
    results: &[TestResult],
    test: &TestDefinition,
) -> Result<Vec<ReportSummary>, ProjectionError> {
    results
        .iter()
        .map(|result| {
            Ok(ReportSummary {
                result_id: result.id,
                reference: format!("RP0{}", result.id),
                test_title: test.title.clone(),
                score: score_for(result, test)?,
                correct_answers: result.correct_answers,
                wrong_answers: result.wrong_answers,
                unanswered_questions: result.unanswered_questions,
            })
        })
        .collect()
}
