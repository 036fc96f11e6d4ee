mod counts;
mod progress;
mod session;
mod shuffle;
mod workflow;

// Public API of the session subsystem.
pub use crate::error::SessionError;
pub use counts::{STANDARD_COUNTS, count_options};
pub use progress::SessionProgress;
pub use session::{AnswerRecord, AnswerResult, FinalScore, QuizSession, NO_EXPLANATION};
pub use shuffle::{sample, shuffle};
pub use workflow::QuizLoopService;
