use serde::{Deserialize, Serialize};
use thiserror::Error;

//
// ─── QUESTION TYPES ────────────────────────────────────────────────────────────
//

/// Unvalidated question as it appears in a pool file.
///
/// Field names match the on-disk JSON format: an array of objects with
/// `question`, `choices`, `answer`, and an optional `explanation`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionDraft {
    pub question: String,
    pub choices: Vec<String>,
    pub answer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

impl QuestionDraft {
    /// Validate the draft into an immutable `Question`.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::EmptyPrompt` if the prompt is blank,
    /// `QuestionError::TooFewChoices` if fewer than two choices are given, or
    /// `QuestionError::AnswerNotInChoices` if the answer is not one of them.
    pub fn validate(self) -> Result<Question, QuestionError> {
        if self.question.trim().is_empty() {
            return Err(QuestionError::EmptyPrompt);
        }
        if self.choices.len() < 2 {
            return Err(QuestionError::TooFewChoices {
                len: self.choices.len(),
            });
        }
        if !self.choices.iter().any(|c| c == &self.answer) {
            return Err(QuestionError::AnswerNotInChoices);
        }

        Ok(Question {
            prompt: self.question,
            choices: self.choices,
            answer: self.answer,
            explanation: self.explanation,
        })
    }
}

/// A validated multiple-choice question. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    prompt: String,
    choices: Vec<String>,
    answer: String,
    explanation: Option<String>,
}

impl Question {
    /// The question text shown to the user.
    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// The answer choices in their canonical (unshuffled) order.
    #[must_use]
    pub fn choices(&self) -> &[String] {
        &self.choices
    }

    /// The correct answer; guaranteed to equal one of `choices()`.
    #[must_use]
    pub fn answer(&self) -> &str {
        &self.answer
    }

    #[must_use]
    pub fn explanation(&self) -> Option<&str> {
        self.explanation.as_deref()
    }
}

//
// ─── QUESTION VALIDATION ERRORS ────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question prompt is empty")]
    EmptyPrompt,

    #[error("question has {len} choices, at least 2 required")]
    TooFewChoices { len: usize },

    #[error("answer does not match any choice")]
    AnswerNotInChoices,
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
