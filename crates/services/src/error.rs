//! Shared error types for the services crate.

use std::path::PathBuf;

use thiserror::Error;

use quiz_core::model::{OptionId, QuestionId};

/// Why a session transition was turned away.
///
/// Every variant is a guard rejection: when a transition returns one of these
/// the session is exactly as it was before the call.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("the quiz has already started")]
    NotInHome,
    #[error("no quiz is in progress")]
    NotInProgress,
    #[error("the quiz is finished; restart to change settings")]
    AlreadyFinished,
    #[error("no questions match the current filters")]
    EmptySelection,
    #[error("no option has been selected")]
    NoPendingChoice,
    #[error("the current question has already been submitted")]
    AlreadySubmitted,
    #[error("the current question has not been submitted yet")]
    NotSubmitted,
    #[error("option {0} does not belong to the current question")]
    UnknownOption(OptionId),
    #[error("the countdown is not running")]
    TimerInactive,
    #[error("tick from session generation {actual} ignored; current generation is {expected}")]
    StaleTick { expected: u64, actual: u64 },
}

/// Errors raised while loading a question bank.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BankError {
    #[error("could not read question bank {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("question bank is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("question {id} is invalid: {source}")]
    InvalidQuestion {
        id: QuestionId,
        source: quiz_core::Error,
    },
    #[error("question id {0} appears more than once")]
    DuplicateId(QuestionId),
    #[error("question bank is empty")]
    Empty,
}

/// Errors raised while validating the quiz configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("sample size must be at least 1")]
    ZeroSampleSize,
    #[error("invalid value for {key}: {raw:?}")]
    InvalidValue { key: &'static str, raw: String },
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Bank(#[from] BankError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}
