// src/models/question.rs

use serde::{Deserialize, Serialize};

use crate::utils::de::blank_as_none;

/// A multiple-choice question with two to four options.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    #[serde(rename = "quesId", alias = "id")]
    pub id: i64,

    /// The question prompt.
    #[serde(rename = "question")]
    pub text: String,

    pub option1: String,
    pub option2: String,

    #[serde(default, deserialize_with = "blank_as_none")]
    pub option3: Option<String>,

    #[serde(default, deserialize_with = "blank_as_none")]
    pub option4: Option<String>,

    /// Text of the correct option.
    #[serde(rename = "answer")]
    pub correct_answer: String,
}

impl Question {
    /// Options in display order. Options 3 and 4 are skipped when absent.
    pub fn options(&self) -> Vec<&str> {
        let mut options = vec![self.option1.as_str(), self.option2.as_str()];
        options.extend(self.option3.as_deref());
        options.extend(self.option4.as_deref());
        options
    }
}
