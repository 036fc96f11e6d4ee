use thiserror::Error;

use crate::model::{Question, QuestionDraft, QuestionError};

/// An immutable, ordered set of validated questions for one topic.
///
/// A pool is loaded once per topic selection and never changes for the
/// lifetime of a session built from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionPool {
    questions: Vec<Question>,
}

impl QuestionPool {
    /// Validate a list of drafts into a pool.
    ///
    /// Any malformed question is fatal for the whole pool; nothing is
    /// silently skipped.
    ///
    /// # Errors
    ///
    /// Returns `PoolError::Empty` for an empty list, or
    /// `PoolError::MalformedQuestion` naming the first offending index.
    pub fn from_drafts(drafts: Vec<QuestionDraft>) -> Result<Self, PoolError> {
        if drafts.is_empty() {
            return Err(PoolError::Empty);
        }

        let questions = drafts
            .into_iter()
            .enumerate()
            .map(|(index, draft)| {
                draft
                    .validate()
                    .map_err(|source| PoolError::MalformedQuestion { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { questions })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Consume the pool, yielding its questions in load order.
    #[must_use]
    pub fn into_questions(self) -> Vec<Question> {
        self.questions
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PoolError {
    #[error("question pool is empty")]
    Empty,

    #[error("malformed question at index {index}: {source}")]
    MalformedQuestion {
        index: usize,
        #[source]
        source: QuestionError,
    },
}
