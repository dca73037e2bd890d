mod progress;
mod sampling;
mod service;
mod view;

// Public API of the quiz session subsystem.
pub use crate::error::SessionError;
pub use progress::QuizProgress;
pub use sampling::{DEFAULT_SAMPLE_SIZE, fisher_yates, sample_working_set};
pub use service::{FinishReason, QuizPhase, QuizSession, SessionOptions};
pub use view::{
    AnswerFeedback, CategoryScore, EmptySnapshot, HomeSnapshot, QuestionSnapshot, QuizSnapshot,
    ResultsSnapshot, ReviewItem,
};
