#![forbid(unsafe_code)]

pub mod app_services;
pub mod bank;
pub mod config;
pub mod error;
#[cfg(any(test, feature = "test-support"))]
pub mod fixtures;
pub mod sessions;

pub use quiz_core::Clock;

pub use app_services::AppServices;
pub use bank::QuestionBank;
pub use config::{BankSource, QuizConfig};
pub use error::{AppServicesError, BankError, ConfigError, SessionError};

pub use sessions::{
    AnswerFeedback, CategoryScore, EmptySnapshot, FinishReason, HomeSnapshot, QuestionSnapshot,
    QuizPhase, QuizProgress, QuizSession, QuizSnapshot, ResultsSnapshot, ReviewItem,
    SessionOptions,
};
