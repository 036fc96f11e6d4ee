use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::model::TopicName;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizSummaryError {
    #[error("completed_at is before started_at")]
    InvalidTimeRange,

    #[error("score ({score}) exceeds total questions ({total})")]
    ScoreExceedsTotal { score: usize, total: usize },

    #[error("too many questions for a single attempt: {len}")]
    TooManyQuestions { len: usize },
}

/// Final tally for one completed quiz attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSummary {
    topic: TopicName,
    started_at: DateTime<Utc>,
    completed_at: DateTime<Utc>,
    score: u32,
    total: u32,
}

impl QuizSummary {
    /// Build a summary for a finished attempt.
    ///
    /// # Errors
    ///
    /// Returns `QuizSummaryError::InvalidTimeRange` if `completed_at` is
    /// before `started_at`, `QuizSummaryError::ScoreExceedsTotal` if the
    /// score is impossible for the question count, or
    /// `QuizSummaryError::TooManyQuestions` if the count cannot fit in `u32`.
    pub fn new(
        topic: TopicName,
        started_at: DateTime<Utc>,
        completed_at: DateTime<Utc>,
        score: usize,
        total: usize,
    ) -> Result<Self, QuizSummaryError> {
        if completed_at < started_at {
            return Err(QuizSummaryError::InvalidTimeRange);
        }
        if score > total {
            return Err(QuizSummaryError::ScoreExceedsTotal { score, total });
        }
        let total =
            u32::try_from(total).map_err(|_| QuizSummaryError::TooManyQuestions { len: total })?;
        let score =
            u32::try_from(score).map_err(|_| QuizSummaryError::TooManyQuestions { len: score })?;

        Ok(Self {
            topic,
            started_at,
            completed_at,
            score,
            total,
        })
    }

    #[must_use]
    pub fn topic(&self) -> &TopicName {
        &self.topic
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> DateTime<Utc> {
        self.completed_at
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.total
    }
}
