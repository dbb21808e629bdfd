//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::model::{QuestionError, RequestError, SessionPhase};
use quiz_core::scoring::ScoreError;
use storage::repository::StorageError;
use storage::sqlite::SqliteInitError;

/// Errors emitted by question generators.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GenerationError {
    #[error("the generator returned no usable questions")]
    EmptyResponse,
    #[error("generation request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error("generation response was malformed: {0}")]
    Malformed(String),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by answer analyzers.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AnalysisError {
    #[error("analysis request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error("analysis response was malformed: {0}")]
    Malformed(String),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Rejected quiz session operations. State is left untouched when returned.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("cannot {operation} while {phase}")]
    InvalidPhase {
        operation: &'static str,
        phase: SessionPhase,
    },
    #[error("a generation request is already in flight")]
    Busy,
    #[error("there is no previous request to regenerate")]
    NoPreviousRequest,
    #[error("{answered} of {total} questions answered")]
    Incomplete { answered: usize, total: usize },
    #[error("question {index} is out of range for {len} questions")]
    QuestionOutOfRange { index: usize, len: usize },
    #[error("option {option} is out of range for question {question}")]
    OptionOutOfRange { question: usize, option: usize },
    #[error("no question is being edited")]
    NotEditing,
    #[error(transparent)]
    InvalidRequest(#[from] RequestError),
    #[error(transparent)]
    InvalidDraft(#[from] QuestionError),
    #[error(transparent)]
    Score(#[from] ScoreError),
}

/// Errors emitted by `AccountService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AccountError {
    #[error("the accounts backend is not configured")]
    Disabled,
    #[error("{field} is required")]
    MissingField { field: &'static str },
    #[error("email address is not valid")]
    InvalidEmail,
    #[error("accounts request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by `ClassroomService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ClassroomError {
    #[error("connect a classroom account first")]
    NotConnected,
    #[error("access token cannot be empty")]
    EmptyToken,
    #[error("classroom request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors raised while reading configuration from the environment.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("{key} is not a valid http(s) URL: {value}")]
    InvalidUrl { key: &'static str, value: String },
    #[error("{key} must be a positive integer, got {value}")]
    InvalidNumber { key: &'static str, value: String },
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}
