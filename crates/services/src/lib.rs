#![forbid(unsafe_code)]

pub mod account_service;
pub mod analysis_service;
pub mod app_services;
pub mod classroom_service;
pub mod config;
pub mod error;
pub mod generation_service;
mod http;
pub mod quiz;

pub use quiz_core::Clock;

pub use account_service::{AccountService, SignInOutcome, SignUpForm};
pub use analysis_service::{AnswerAnalyzer, HttpAnswerAnalyzer};
pub use app_services::AppServices;
pub use classroom_service::ClassroomService;
pub use config::ServiceConfig;
pub use error::{
    AccountError, AnalysisError, AppServicesError, ClassroomError, ConfigError, GenerationError,
    QuizError,
};
pub use generation_service::{HttpQuestionGenerator, QuestionGenerator};
pub use quiz::{
    AnalysisTicket, CompletionOutcome, GenerationTicket, QuizService, QuizSessionController,
    SessionFailure,
};
