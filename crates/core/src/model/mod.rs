mod pool;
mod question;
mod summary;
mod topic;

pub use pool::{PoolError, QuestionPool};
pub use question::{Question, QuestionDraft, QuestionError};
pub use summary::{QuizSummary, QuizSummaryError};
pub use topic::{TopicName, TopicNameError};
