// src/projection/mod.rs

//! Pure transformations from upstream records into report views.
//!
//! Nothing in here performs I/O; callers fetch the inputs first.

pub mod review;
pub mod summary;

use std::fmt;

/// Errors raised while projecting upstream data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectionError {
    /// The result has no selected-option entries, so its score is undefined.
    EmptySelection { result_id: i64 },
}

impl fmt::Display for ProjectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectionError::EmptySelection { result_id } => write!(
                f,
                "test result {} has no selected options; score is undefined",
                result_id
            ),
        }
    }
}

impl std::error::Error for ProjectionError {}
