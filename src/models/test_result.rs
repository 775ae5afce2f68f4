// src/models/test_result.rs

use serde::{Deserialize, Serialize};

use crate::utils::de::blank_as_none;

/// The answer a user gave (or did not give) to one question of an attempt.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedOption {
    pub question_id: i64,

    /// `None` means the question was left unattempted.
    #[serde(default, deserialize_with = "blank_as_none")]
    pub selected_option: Option<String>,
}

/// One completed attempt at a test, as recorded by the upstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestResult {
    pub id: i64,
    pub user_id: i64,
    pub test_id: i64,

    /// One entry per question the user was shown, in presentation order.
    #[serde(default)]
    pub selected_options: Vec<SelectedOption>,

    #[serde(default)]
    pub correct_answers: i64,
    #[serde(default)]
    pub wrong_answers: i64,
    #[serde(default)]
    pub unanswered_questions: i64,
}
