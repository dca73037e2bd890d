use std::sync::Arc;

use tracing::info;

use crate::Clock;
use crate::bank::QuestionBank;
use crate::config::QuizConfig;
use crate::error::AppServicesError;
use crate::sessions::{QuizSession, SessionOptions};

/// Loaded bank plus launch settings, shared by every screen.
#[derive(Debug, Clone)]
pub struct AppServices {
    bank: QuestionBank,
    config: Arc<QuizConfig>,
    clock: Clock,
}

impl AppServices {
    /// Validate `config` and load its question bank.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if the config is invalid or the bank fails to load.
    pub fn new(config: QuizConfig, clock: Clock) -> Result<Self, AppServicesError> {
        let config = config.validate()?;
        let bank = config.load_bank()?;
        info!(
            questions = bank.len(),
            sample_size = config.sample_size,
            timer = %config.timer,
            "question bank loaded"
        );
        Ok(Self::from_parts(bank, config, clock))
    }

    /// Assemble services around an already loaded bank.
    #[must_use]
    pub fn from_parts(bank: QuestionBank, config: QuizConfig, clock: Clock) -> Self {
        Self {
            bank,
            config: Arc::new(config),
            clock,
        }
    }

    #[must_use]
    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    #[must_use]
    pub fn config(&self) -> Arc<QuizConfig> {
        Arc::clone(&self.config)
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }

    /// A fresh session in `Home`, drawing from the shared bank.
    #[must_use]
    pub fn new_session(&self) -> QuizSession {
        QuizSession::new(
            self.bank.clone(),
            SessionOptions {
                sample_size: self.config.sample_size,
                timer: self.config.timer,
                seed: self.config.seed,
                clock: self.clock,
            },
        )
    }
}
