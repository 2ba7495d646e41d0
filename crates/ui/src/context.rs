use std::sync::Arc;

use services::QuizProvider;

/// What the composition root hands to the UI.
pub trait UiApp: Send + Sync {
    fn quiz_provider(&self) -> Arc<dyn QuizProvider>;
}

#[derive(Clone)]
pub struct AppContext {
    quiz_provider: Arc<dyn QuizProvider>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            quiz_provider: app.quiz_provider(),
        }
    }

    #[must_use]
    pub fn quiz_provider(&self) -> Arc<dyn QuizProvider> {
        Arc::clone(&self.quiz_provider)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
