//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::model::QuizSummaryError;
use storage::repository::StorageError;

/// Errors emitted by quiz sessions and the session loop.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SessionError {
    #[error("requested {requested} questions, pool has {available}")]
    InvalidCount { requested: usize, available: usize },

    #[error("current question already answered")]
    AlreadyAnswered,

    #[error("current question not answered yet")]
    NotAnswered,

    #[error("session already completed")]
    Completed,

    #[error(transparent)]
    Summary(#[from] QuizSummaryError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}
