use std::sync::Arc;

use quiz_core::Clock;
use quiz_core::model::TopicName;
use storage::repository::PoolRepository;

use super::session::{AnswerResult, QuizSession};
use crate::error::SessionError;

/// Orchestrates session start against a pool source.
///
/// Owns the ambient clock and randomness so sessions stay injectable in
/// tests while production callers get real time and a real RNG.
#[derive(Clone)]
pub struct QuizLoopService {
    clock: Clock,
    pools: Arc<dyn PoolRepository>,
    allow_skip: bool,
}

impl QuizLoopService {
    #[must_use]
    pub fn new(clock: Clock, pools: Arc<dyn PoolRepository>) -> Self {
        Self {
            clock,
            pools,
            allow_skip: false,
        }
    }

    /// Let sessions advance past unanswered questions.
    #[must_use]
    pub fn with_allow_skip(mut self, allow_skip: bool) -> Self {
        self.allow_skip = allow_skip;
        self
    }

    /// List topics the pool source can serve.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Storage` if the source cannot be enumerated.
    pub async fn topics(&self) -> Result<Vec<TopicName>, SessionError> {
        Ok(self.pools.list_topics().await?)
    }

    /// Start a session of `count` questions for a topic.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Storage` for load failures (missing topic,
    /// malformed pool) and `SessionError::InvalidCount` if `count` does not
    /// fit the pool.
    pub async fn start_session(
        &self,
        topic: &TopicName,
        count: usize,
    ) -> Result<QuizSession, SessionError> {
        let pool = self.pools.load_pool(topic).await?;
        let session = QuizSession::new(
            topic.clone(),
            pool,
            count,
            self.clock.now(),
            &mut rand::rng(),
        )?;
        Ok(session.with_allow_skip(self.allow_skip))
    }

    /// Start a session over every question in the topic's pool.
    ///
    /// # Errors
    ///
    /// Same failure modes as `start_session`.
    pub async fn start_session_all(&self, topic: &TopicName) -> Result<QuizSession, SessionError> {
        let pool = self.pools.load_pool(topic).await?;
        let count = pool.len();
        let session = QuizSession::new(
            topic.clone(),
            pool,
            count,
            self.clock.now(),
            &mut rand::rng(),
        )?;
        Ok(session.with_allow_skip(self.allow_skip))
    }

    /// Resolve the current question of a running session.
    ///
    /// # Errors
    ///
    /// Propagates the session's state-machine errors unchanged.
    pub fn answer_current(
        &self,
        session: &mut QuizSession,
        selected: &str,
    ) -> Result<AnswerResult, SessionError> {
        session.submit_answer(selected)
    }

    /// Advance a running session, supplying ambient time and randomness.
    ///
    /// # Errors
    ///
    /// Propagates the session's state-machine errors unchanged.
    pub fn advance_current(&self, session: &mut QuizSession) -> Result<(), SessionError> {
        session.advance(self.clock.now(), &mut rand::rng())
    }
}
