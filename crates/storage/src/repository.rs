use async_trait::async_trait;
use quiz_core::model::{PoolError, QuestionDraft, QuestionPool, TopicName};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors surfaced by question-pool sources.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("topic not found")]
    NotFound,

    #[error("i/o error: {0}")]
    Io(String),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error(transparent)]
    Malformed(#[from] PoolError),
}

/// Source of question pools, keyed by topic.
///
/// A malformed question anywhere in a pool fails the whole load; the core
/// never sees a partially valid pool.
#[async_trait]
pub trait PoolRepository: Send + Sync {
    /// Load and validate the pool for a topic.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if the topic has no pool,
    /// `StorageError::Malformed` if any question fails validation, or other
    /// storage errors.
    async fn load_pool(&self, topic: &TopicName) -> Result<QuestionPool, StorageError>;

    /// List the topics this source can serve, sorted by name.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backing store cannot be enumerated.
    async fn list_topics(&self) -> Result<Vec<TopicName>, StorageError>;
}

/// In-memory pool source for tests and wiring without a filesystem.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    pools: Arc<Mutex<HashMap<TopicName, Vec<QuestionDraft>>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) the drafts served for a topic.
    pub fn insert_pool(&self, topic: TopicName, drafts: Vec<QuestionDraft>) {
        self.pools
            .lock()
            .expect("pool map lock poisoned")
            .insert(topic, drafts);
    }
}

#[async_trait]
impl PoolRepository for InMemoryRepository {
    async fn load_pool(&self, topic: &TopicName) -> Result<QuestionPool, StorageError> {
        let drafts = {
            let pools = self.pools.lock().expect("pool map lock poisoned");
            pools.get(topic).cloned().ok_or(StorageError::NotFound)?
        };
        Ok(QuestionPool::from_drafts(drafts)?)
    }

    async fn list_topics(&self) -> Result<Vec<TopicName>, StorageError> {
        let pools = self.pools.lock().expect("pool map lock poisoned");
        let mut topics: Vec<TopicName> = pools.keys().cloned().collect();
        topics.sort();
        Ok(topics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(prompt: &str) -> QuestionDraft {
        QuestionDraft {
            question: prompt.to_string(),
            choices: vec!["yes".to_string(), "no".to_string()],
            answer: "yes".to_string(),
            explanation: None,
        }
    }

    #[tokio::test]
    async fn in_memory_serves_registered_pool() {
        let repo = InMemoryRepository::new();
        let topic = TopicName::new("history").unwrap();
        repo.insert_pool(topic.clone(), vec![draft("Q1"), draft("Q2")]);

        let pool = repo.load_pool(&topic).await.unwrap();
        assert_eq!(pool.len(), 2);
    }

    #[tokio::test]
    async fn missing_topic_is_not_found() {
        let repo = InMemoryRepository::new();
        let topic = TopicName::new("geography").unwrap();
        let err = repo.load_pool(&topic).await.unwrap_err();
        assert!(matches!(err, StorageError::NotFound));
    }

    #[tokio::test]
    async fn malformed_pool_fails_load() {
        let repo = InMemoryRepository::new();
        let topic = TopicName::new("history").unwrap();
        let mut bad = draft("Q1");
        bad.choices = vec!["only".to_string()];
        repo.insert_pool(topic.clone(), vec![bad]);

        let err = repo.load_pool(&topic).await.unwrap_err();
        assert!(matches!(err, StorageError::Malformed(_)));
    }

    #[tokio::test]
    async fn topics_are_sorted() {
        let repo = InMemoryRepository::new();
        repo.insert_pool(TopicName::new("science").unwrap(), vec![draft("Q")]);
        repo.insert_pool(TopicName::new("history").unwrap(), vec![draft("Q")]);

        let topics = repo.list_topics().await.unwrap();
        let names: Vec<&str> = topics.iter().map(TopicName::as_str).collect();
        assert_eq!(names, vec!["history", "science"]);
    }
}
