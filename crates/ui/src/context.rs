use std::sync::Arc;

use services::{AccountService, ClassroomService, QuizService};

pub trait UiApp: Send + Sync {
    fn quiz(&self) -> Arc<QuizService>;
    fn accounts(&self) -> Arc<AccountService>;
    fn classroom(&self) -> Arc<ClassroomService>;
}

#[derive(Clone)]
pub struct AppContext {
    quiz: Arc<QuizService>,
    accounts: Arc<AccountService>,
    classroom: Arc<ClassroomService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            quiz: app.quiz(),
            accounts: app.accounts(),
            classroom: app.classroom(),
        }
    }

    #[must_use]
    pub fn quiz(&self) -> Arc<QuizService> {
        Arc::clone(&self.quiz)
    }

    #[must_use]
    pub fn accounts(&self) -> Arc<AccountService> {
        Arc::clone(&self.accounts)
    }

    #[must_use]
    pub fn classroom(&self) -> Arc<ClassroomService> {
        Arc::clone(&self.classroom)
    }
}

// Provided by the composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
