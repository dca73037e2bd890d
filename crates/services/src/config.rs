use std::path::PathBuf;

use quiz_core::model::TimerDuration;

use crate::bank::QuestionBank;
use crate::error::{AppServicesError, ConfigError};
use crate::sessions::DEFAULT_SAMPLE_SIZE;

/// Where questions come from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BankSource {
    /// The bank compiled into the binary.
    #[default]
    Builtin,
    /// A JSON file in the same format as the builtin bank.
    File(PathBuf),
}

/// Launch-time settings, validated once and then read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizConfig {
    pub bank: BankSource,
    pub sample_size: usize,
    pub timer: TimerDuration,
    pub seed: Option<u64>,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            bank: BankSource::Builtin,
            sample_size: DEFAULT_SAMPLE_SIZE,
            timer: TimerDuration::Off,
            seed: None,
        }
    }
}

impl QuizConfig {
    /// # Errors
    ///
    /// Returns `ConfigError::ZeroSampleSize` when no question could ever be drawn.
    pub fn validate(self) -> Result<Self, ConfigError> {
        if self.sample_size == 0 {
            return Err(ConfigError::ZeroSampleSize);
        }
        Ok(self)
    }

    /// # Errors
    ///
    /// Returns `AppServicesError::Bank` if the bank cannot be read or validated.
    pub fn load_bank(&self) -> Result<QuestionBank, AppServicesError> {
        let bank = match &self.bank {
            BankSource::Builtin => QuestionBank::builtin()?,
            BankSource::File(path) => QuestionBank::from_path(path)?,
        };
        Ok(bank)
    }
}

// ─── Value parsing ────────────────────────────────────────────────────────────

/// # Errors
///
/// Returns `ConfigError::InvalidValue` unless `raw` is a positive integer.
pub fn parse_sample_size(key: &'static str, raw: &str) -> Result<usize, ConfigError> {
    match raw.trim().parse::<usize>() {
        Ok(0) => Err(ConfigError::ZeroSampleSize),
        Ok(size) => Ok(size),
        Err(_) => Err(invalid(key, raw)),
    }
}

/// Accepts `off`, `none` or a number of seconds.
///
/// # Errors
///
/// Returns `ConfigError::InvalidValue` for anything else.
pub fn parse_timer(key: &'static str, raw: &str) -> Result<TimerDuration, ConfigError> {
    raw.parse().map_err(|_| invalid(key, raw))
}

/// # Errors
///
/// Returns `ConfigError::InvalidValue` unless `raw` is an unsigned 64-bit integer.
pub fn parse_seed(key: &'static str, raw: &str) -> Result<u64, ConfigError> {
    raw.trim().parse().map_err(|_| invalid(key, raw))
}

fn invalid(key: &'static str, raw: &str) -> ConfigError {
    ConfigError::InvalidValue {
        key,
        raw: raw.to_owned(),
    }
}
