use chrono::{DateTime, Utc};
use rand::Rng;
use std::fmt;

use quiz_core::model::{Question, QuestionPool, QuizSummary, TopicName};

use super::progress::SessionProgress;
use super::shuffle::{sample, shuffle};
use crate::error::SessionError;

/// Placeholder shown when a question carries no explanation text.
pub const NO_EXPLANATION: &str = "No explanation available.";

//
// ─── ANSWER TYPES ──────────────────────────────────────────────────────────────
//

/// Outcome of submitting an answer, for highlighting and feedback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerResult {
    pub is_correct: bool,
    pub correct_answer: String,
    pub explanation: String,
}

/// One resolved question in the session's answer log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerRecord {
    pub question_index: usize,
    pub selected: String,
    pub is_correct: bool,
}

/// Final tally, available once the session is complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FinalScore {
    pub score: usize,
    pub total: usize,
}

//
// ─── QUIZ SESSION ──────────────────────────────────────────────────────────────
//

/// One quiz attempt over a sampled, shuffled subset of a question pool.
///
/// The session steps through its questions one at a time: `submit_answer`
/// resolves the current question, `advance` moves to the next one (or to
/// completion). Completion is terminal; a new session is started for a
/// retry.
pub struct QuizSession {
    topic: TopicName,
    questions: Vec<Question>,
    current: usize,
    score: usize,
    option_order: Vec<String>,
    answered: bool,
    allow_skip: bool,
    answers: Vec<AnswerRecord>,
    started_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
}

impl QuizSession {
    /// Start a session with `count` questions sampled from `pool`.
    ///
    /// The sample is drawn without replacement and its order randomized in
    /// one pass (a full Fisher–Yates shuffle truncated to `count`). The
    /// first question's choice order is shuffled immediately.
    ///
    /// `started_at` should come from the services layer clock to keep time
    /// deterministic; `rng` is injected so tests can seed it.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidCount` unless
    /// `1 <= count <= pool.len()`.
    pub fn new<R: Rng + ?Sized>(
        topic: TopicName,
        pool: QuestionPool,
        count: usize,
        started_at: DateTime<Utc>,
        rng: &mut R,
    ) -> Result<Self, SessionError> {
        let available = pool.len();
        if count == 0 || count > available {
            return Err(SessionError::InvalidCount {
                requested: count,
                available,
            });
        }

        let questions = sample(pool.into_questions(), count, rng);
        let option_order = shuffled_choices(&questions[0], rng);

        Ok(Self {
            topic,
            questions,
            current: 0,
            score: 0,
            option_order,
            answered: false,
            allow_skip: false,
            answers: Vec::new(),
            started_at,
            completed_at: None,
        })
    }

    /// Allow `advance` past an unanswered question.
    ///
    /// Off by default: skipping is an explicit caller policy, not an
    /// accident of clicking "next" too early.
    #[must_use]
    pub fn with_allow_skip(mut self, allow_skip: bool) -> Self {
        self.allow_skip = allow_skip;
        self
    }

    /// Resolve the current question against `selected`.
    ///
    /// Exact string equality against the question's answer; a correct
    /// submission increments the score exactly once. The session does not
    /// advance here.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Completed` if the session is over, or
    /// `SessionError::AlreadyAnswered` on a second submission for the same
    /// question (the score must never double-count).
    pub fn submit_answer(&mut self, selected: &str) -> Result<AnswerResult, SessionError> {
        if self.is_complete() {
            return Err(SessionError::Completed);
        }
        if self.answered {
            return Err(SessionError::AlreadyAnswered);
        }

        let question = &self.questions[self.current];
        let is_correct = selected == question.answer();
        if is_correct {
            self.score += 1;
        }
        self.answered = true;
        self.answers.push(AnswerRecord {
            question_index: self.current,
            selected: selected.to_owned(),
            is_correct,
        });

        let explanation = question
            .explanation()
            .filter(|text| !text.trim().is_empty())
            .unwrap_or(NO_EXPLANATION)
            .to_owned();

        Ok(AnswerResult {
            is_correct,
            correct_answer: question.answer().to_owned(),
            explanation,
        })
    }

    /// Move on to the next question, or to completion after the last one.
    ///
    /// In bounds, the new question's choice order is shuffled exactly once
    /// and the answered flag cleared. Past the end, `reached_at` is recorded
    /// as the completion time and no further choice order is computed.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Completed` if the session is already over, or
    /// `SessionError::NotAnswered` if the current question is unresolved and
    /// skipping was not enabled.
    pub fn advance<R: Rng + ?Sized>(
        &mut self,
        reached_at: DateTime<Utc>,
        rng: &mut R,
    ) -> Result<(), SessionError> {
        if self.is_complete() {
            return Err(SessionError::Completed);
        }
        if !self.answered && !self.allow_skip {
            return Err(SessionError::NotAnswered);
        }

        self.current += 1;
        if self.current < self.questions.len() {
            self.option_order = shuffled_choices(&self.questions[self.current], rng);
            self.answered = false;
        } else {
            self.option_order.clear();
            self.completed_at = Some(reached_at);
        }
        Ok(())
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
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// The active question, or `None` once the session is complete.
    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current)
    }

    /// Shuffled choice order for the active question; empty once complete.
    #[must_use]
    pub fn option_order(&self) -> &[String] {
        &self.option_order
    }

    /// Whether the active question has been resolved.
    #[must_use]
    pub fn is_answered(&self) -> bool {
        self.answered
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    /// Number of questions in this session, fixed at start.
    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    /// Log of resolved questions, in submission order. Skipped questions do
    /// not appear.
    #[must_use]
    pub fn answers(&self) -> &[AnswerRecord] {
        &self.answers
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.current >= self.questions.len()
    }

    /// Fraction of the session passed through, in `[0.0, 1.0]`.
    #[must_use]
    pub fn progress_fraction(&self) -> f64 {
        self.progress().fraction()
    }

    /// Returns a summary of the current session progress.
    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        SessionProgress {
            total: self.questions.len(),
            answered: self.answers.len(),
            remaining: self.questions.len().saturating_sub(self.current),
            is_complete: self.is_complete(),
        }
    }

    /// The final tally, only once the session is complete.
    #[must_use]
    pub fn final_score(&self) -> Option<FinalScore> {
        if !self.is_complete() {
            return None;
        }
        Some(FinalScore {
            score: self.score,
            total: self.questions.len(),
        })
    }

    /// Build the completed-attempt record for this session.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Completed` if the session is still in
    /// progress, or propagates `QuizSummaryError` if the tally is invalid.
    pub fn build_summary(&self) -> Result<QuizSummary, SessionError> {
        let completed_at = self.completed_at.ok_or(SessionError::Completed)?;
        Ok(QuizSummary::new(
            self.topic.clone(),
            self.started_at,
            completed_at,
            self.score,
            self.questions.len(),
        )?)
    }
}

fn shuffled_choices<R: Rng + ?Sized>(question: &Question, rng: &mut R) -> Vec<String> {
    let mut order = question.choices().to_vec();
    shuffle(&mut order, rng);
    order
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("topic", &self.topic)
            .field("questions_len", &self.questions.len())
            .field("current", &self.current)
            .field("score", &self.score)
            .field("answered", &self.answered)
            .field("completed_at", &self.completed_at)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
