use std::path::PathBuf;

use quiz_core::model::TopicName;
use storage::{JsonInitError, JsonPoolRepository, PoolRepository, StorageError};

struct TempPoolDir {
    path: PathBuf,
}

impl TempPoolDir {
    fn new(label: &str) -> Self {
        let path = std::env::temp_dir().join(format!(
            "quiz-pools-{label}-{}",
            std::process::id()
        ));
        std::fs::create_dir_all(&path).unwrap();
        Self { path }
    }

    fn write_pool(&self, topic: &str, body: &str) {
        std::fs::write(self.path.join(format!("{topic}.json")), body).unwrap();
    }
}

impl Drop for TempPoolDir {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.path);
    }
}

const HISTORY_POOL: &str = r#"[
    {
        "question": "In what year did WWII end?",
        "choices": ["1943", "1945", "1950"],
        "answer": "1945",
        "explanation": "The war ended in 1945."
    },
    {
        "question": "Who wrote the Declaration of Independence?",
        "choices": ["Jefferson", "Franklin"],
        "answer": "Jefferson"
    }
]"#;

#[tokio::test]
async fn loads_and_validates_pool_file() {
    let dir = TempPoolDir::new("load");
    dir.write_pool("history", HISTORY_POOL);

    let repo = JsonPoolRepository::new(&dir.path).unwrap();
    let topic = TopicName::new("history").unwrap();
    let pool = repo.load_pool(&topic).await.unwrap();

    assert_eq!(pool.len(), 2);
    assert_eq!(pool.questions()[0].answer(), "1945");
    assert_eq!(pool.questions()[1].explanation(), None);
}

#[tokio::test]
async fn missing_topic_file_is_not_found() {
    let dir = TempPoolDir::new("missing");
    let repo = JsonPoolRepository::new(&dir.path).unwrap();
    let topic = TopicName::new("geography").unwrap();

    let err = repo.load_pool(&topic).await.unwrap_err();
    assert!(matches!(err, StorageError::NotFound));
}

#[tokio::test]
async fn invalid_json_is_a_serialization_error() {
    let dir = TempPoolDir::new("badjson");
    dir.write_pool("history", "not json at all");

    let repo = JsonPoolRepository::new(&dir.path).unwrap();
    let topic = TopicName::new("history").unwrap();

    let err = repo.load_pool(&topic).await.unwrap_err();
    assert!(matches!(err, StorageError::Serialization(_)));
}

#[tokio::test]
async fn malformed_question_fails_whole_pool() {
    let dir = TempPoolDir::new("malformed");
    dir.write_pool(
        "history",
        r#"[{"question": "Q?", "choices": ["only one"], "answer": "only one"}]"#,
    );

    let repo = JsonPoolRepository::new(&dir.path).unwrap();
    let topic = TopicName::new("history").unwrap();

    let err = repo.load_pool(&topic).await.unwrap_err();
    assert!(matches!(err, StorageError::Malformed(_)));
}

#[tokio::test]
async fn lists_topics_from_json_stems() {
    let dir = TempPoolDir::new("list");
    dir.write_pool("science", HISTORY_POOL);
    dir.write_pool("history", HISTORY_POOL);
    std::fs::write(dir.path.join("notes.txt"), "ignored").unwrap();

    let repo = JsonPoolRepository::new(&dir.path).unwrap();
    let topics = repo.list_topics().await.unwrap();
    let names: Vec<&str> = topics.iter().map(TopicName::as_str).collect();

    assert_eq!(names, vec!["history", "science"]);
}

#[test]
fn missing_directory_is_an_init_error() {
    let err = JsonPoolRepository::new("/definitely/not/a/real/dir").unwrap_err();
    assert!(matches!(err, JsonInitError::MissingDirectory(_)));
}
