use async_trait::async_trait;
use quiz_core::model::{QuestionDraft, QuestionPool, TopicName};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::repository::{PoolRepository, StorageError};

/// Errors raised while opening a JSON pool directory.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum JsonInitError {
    #[error("pool directory does not exist: {0}")]
    MissingDirectory(PathBuf),
}

/// Pool source backed by a directory of `<topic>.json` files.
///
/// Each file holds a JSON array of question objects, the same format the
/// in-browser runner fetches per theme.
#[derive(Debug, Clone)]
pub struct JsonPoolRepository {
    dir: PathBuf,
}

impl JsonPoolRepository {
    /// Open a pool directory.
    ///
    /// # Errors
    ///
    /// Returns `JsonInitError::MissingDirectory` if `dir` is not a directory.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, JsonInitError> {
        let dir = dir.into();
        if !dir.is_dir() {
            return Err(JsonInitError::MissingDirectory(dir));
        }
        Ok(Self { dir })
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn pool_path(&self, topic: &TopicName) -> PathBuf {
        self.dir.join(format!("{topic}.json"))
    }
}

#[async_trait]
impl PoolRepository for JsonPoolRepository {
    async fn load_pool(&self, topic: &TopicName) -> Result<QuestionPool, StorageError> {
        let path = self.pool_path(topic);
        let bytes = tokio::fs::read(&path).await.map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                StorageError::NotFound
            } else {
                StorageError::Io(e.to_string())
            }
        })?;

        let drafts: Vec<QuestionDraft> = serde_json::from_slice(&bytes)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;

        Ok(QuestionPool::from_drafts(drafts)?)
    }

    async fn list_topics(&self) -> Result<Vec<TopicName>, StorageError> {
        let mut entries = tokio::fs::read_dir(&self.dir)
            .await
            .map_err(|e| StorageError::Io(e.to_string()))?;

        let mut topics = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| StorageError::Io(e.to_string()))?
        {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            if let Ok(topic) = TopicName::new(stem) {
                topics.push(topic);
            }
        }

        topics.sort();
        Ok(topics)
    }
}
