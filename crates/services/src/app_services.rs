use std::sync::Arc;

use storage::repository::Storage;

use crate::Clock;
use crate::account_service::AccountService;
use crate::analysis_service::HttpAnswerAnalyzer;
use crate::classroom_service::ClassroomService;
use crate::config::ServiceConfig;
use crate::error::AppServicesError;
use crate::generation_service::HttpQuestionGenerator;
use crate::http::build_client;
use crate::quiz::QuizService;

/// Assembles app-facing services around one storage backend and HTTP client.
#[derive(Clone)]
pub struct AppServices {
    quiz: Arc<QuizService>,
    accounts: Arc<AccountService>,
    classroom: Arc<ClassroomService>,
}

impl AppServices {
    /// Build services from already-opened storage.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError::Http` if the HTTP client cannot be built.
    pub fn new(
        storage: &Storage,
        config: &ServiceConfig,
        clock: Clock,
    ) -> Result<Self, AppServicesError> {
        let client = build_client(config.request_timeout)?;

        let generator = Arc::new(HttpQuestionGenerator::new(
            client.clone(),
            config.generator_url.clone(),
            Arc::clone(&storage.tokens),
        ));
        let analyzer = Arc::new(HttpAnswerAnalyzer::new(
            client.clone(),
            config.generator_url.clone(),
            Arc::clone(&storage.tokens),
        ));
        let quiz = Arc::new(QuizService::new(generator, analyzer).with_clock(clock));
        let accounts = Arc::new(AccountService::new(
            client.clone(),
            config.api_base_url.clone(),
            Arc::clone(&storage.tokens),
            clock,
        ));
        let classroom = Arc::new(ClassroomService::new(
            client,
            config.classroom_url.clone(),
            Arc::clone(&storage.tokens),
            clock,
        ));

        Ok(Self {
            quiz,
            accounts,
            classroom,
        })
    }

    /// Build services backed by `SQLite` storage.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization fails or the HTTP
    /// client cannot be built.
    pub async fn new_sqlite(
        db_url: &str,
        config: &ServiceConfig,
        clock: Clock,
    ) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        Self::new(&storage, config, clock)
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
