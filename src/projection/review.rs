// src/projection/review.rs

use std::collections::HashMap;

use crate::models::{
    question::Question,
    report::{AnswerStatus, OptionMark, ReviewEntry, ReviewOption},
    test_definition::TestDefinition,
    test_result::{SelectedOption, TestResult},
};

/// Builds the per-question review of one attempt.
///
/// Entries follow the order of `result.selected_options`. Selections whose
/// question is not in `questions` are skipped, and `question_number` counts
/// only the entries that remain. `test` must be the test `result` was taken
/// against; a mismatch is logged and the review is still built.
pub fn project(result: &TestResult, test: &TestDefinition, questions: &[Question]) -> Vec<ReviewEntry> {
    if test.id != result.test_id {
        tracing::warn!(
            "Reviewing result {} of test {} against test {}",
            result.id,
            result.test_id,
            test.id
        );
    }

    let by_id: HashMap<i64, &Question> = questions.iter().map(|q| (q.id, q)).collect();

    result
        .selected_options
        .iter()
        .filter_map(|selection| {
            by_id
                .get(&selection.question_id)
                .map(|question| (selection, *question))
        })
        .enumerate()
        .map(|(idx, (selection, question))| review_entry(idx + 1, selection, question))
        .collect()
}

fn review_entry(question_number: usize, selection: &SelectedOption, question: &Question) -> ReviewEntry {
    let selected = selection.selected_option.as_deref();
    let is_correct = selected == Some(question.correct_answer.as_str());

    let status = match (is_correct, selected) {
        (true, _) => AnswerStatus::Correct,
        (false, Some(_)) => AnswerStatus::Wrong,
        (false, None) => AnswerStatus::Unattempted,
    };

    let options = question
        .options()
        .into_iter()
        .map(|text| ReviewOption {
            text: text.to_string(),
            mark: mark_option(text, selected, is_correct),
        })
        .collect();

    ReviewEntry {
        question_number,
        question_id: question.id,
        question_text: question.text.clone(),
        options,
        selected_option: selection.selected_option.clone(),
        correct_option: question.correct_answer.clone(),
        is_correct,
        status,
    }
}

fn mark_option(option: &str, selected: Option<&str>, is_correct: bool) -> OptionMark {
    match selected {
        Some(choice) if choice == option && is_correct => OptionMark::SelectedAndCorrect,
        Some(choice) if choice == option => OptionMark::SelectedAndWrong,
        _ => OptionMark::NotSelected,
    }
}
