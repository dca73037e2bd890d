use std::sync::Arc;

use services::QuizSession;

/// What the UI needs from the composition root.
pub trait UiApp: Send + Sync {
    /// A fresh session in `Home`.
    fn new_session(&self) -> QuizSession;
    fn bank_size(&self) -> usize;
}

#[derive(Clone)]
pub struct AppContext {
    app: Arc<dyn UiApp>,
    bank_size: usize,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            bank_size: app.bank_size(),
            app: Arc::clone(app),
        }
    }

    #[must_use]
    pub fn new_session(&self) -> QuizSession {
        self.app.new_session()
    }

    #[must_use]
    pub fn bank_size(&self) -> usize {
        self.bank_size
    }
}

// This context is provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
