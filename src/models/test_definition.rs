// src/models/test_definition.rs

use serde::{Deserialize, Serialize};

use crate::utils::de::lenient_int;

/// A test as described by the upstream `GET /test/{id}` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestDefinition {
    /// Some upstream payloads omit the id; callers already know it.
    #[serde(alias = "testId", default)]
    pub id: i64,

    pub title: String,

    /// Free-text description, sent by the upstream as `disc`.
    #[serde(rename = "disc", alias = "description", default)]
    pub description: Option<String>,

    /// Marks awarded for a fully correct attempt.
    #[serde(deserialize_with = "lenient_int")]
    pub max_marks: i64,

    #[serde(default, deserialize_with = "lenient_int")]
    pub number_of_questions: i64,

    #[serde(default)]
    pub active: bool,

    #[serde(default)]
    pub subject: Option<SubjectRef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubjectRef {
    #[serde(rename = "subId")]
    pub sub_id: i64,
}

impl TestDefinition {
    pub fn subject_id(&self) -> Option<i64> {
        self.subject.as_ref().map(|s| s.sub_id)
    }
}
