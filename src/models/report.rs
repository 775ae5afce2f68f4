// src/models/report.rs

//! Derived, display-ready report records. Nothing here is persisted.

use serde::Serialize;

/// One row of the report list: a single attempt with its computed score.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    pub result_id: i64,
    /// Human-facing report id, e.g. `RP0501`.
    pub reference: String,
    pub test_title: String,
    pub score: i64,
    pub correct_answers: i64,
    pub wrong_answers: i64,
    pub unanswered_questions: i64,
}

/// Outcome of a single reviewed question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AnswerStatus {
    Correct,
    Wrong,
    Unattempted,
}

/// How an option should be highlighted in the review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum OptionMark {
    SelectedAndCorrect,
    SelectedAndWrong,
    NotSelected,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReviewOption {
    pub text: String,
    pub mark: OptionMark,
}

/// Per-question breakdown of one attempt.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewEntry {
    /// 1-based position among the reviewed questions.
    pub question_number: usize,
    pub question_id: i64,
    pub question_text: String,
    pub options: Vec<ReviewOption>,
    pub selected_option: Option<String>,
    pub correct_option: String,
    pub is_correct: bool,
    pub status: AnswerStatus,
}

/// Counts of each status over a review.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ReviewTally {
    pub correct: usize,
    pub wrong: usize,
    pub unattempted: usize,
}

impl ReviewTally {
    pub fn from_entries(entries: &[ReviewEntry]) -> Self {
        entries.iter().fold(Self::default(), |mut tally, entry| {
            match entry.status {
                AnswerStatus::Correct => tally.correct += 1,
                AnswerStatus::Wrong => tally.wrong += 1,
                AnswerStatus::Unattempted => tally.unattempted += 1,
            }
            tally
        })
    }
}

/// Response for the report list of one test.
///
/// An empty `reports` list still carries the test title so the UI can say
/// which test has no reports.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportListResponse {
    pub test_id: i64,
    pub test_title: String,
    pub reports: Vec<ReportSummary>,
}

/// Response for the detailed review of one attempt.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportReviewResponse {
    pub result_id: i64,
    pub test_id: i64,
    pub test_title: String,
    pub max_marks: i64,
    pub tally: ReviewTally,
    pub entries: Vec<ReviewEntry>,
}
