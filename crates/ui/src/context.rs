use std::sync::Arc;

use services::QuizSettings;

pub trait UiApp: Send + Sync {
    fn quiz_settings(&self) -> QuizSettings;

    /// Text placed in the week input on first render, if any.
    fn initial_week(&self) -> Option<String>;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppContext {
    quiz_settings: QuizSettings,
    initial_week: Option<String>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            quiz_settings: app.quiz_settings(),
            initial_week: app.initial_week(),
        }
    }

    #[must_use]
    pub fn quiz_settings(&self) -> QuizSettings {
        self.quiz_settings
    }

    #[must_use]
    pub fn initial_week(&self) -> Option<&str> {
        self.initial_week.as_deref()
    }
}

// Provided by the composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
