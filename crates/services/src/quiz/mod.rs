mod controller;
mod service;

// Public API of the quiz subsystem.
pub use crate::error::QuizError;
pub use controller::{
    AnalysisTicket, CompletionOutcome, GenerationTicket, QuizSessionController, SessionFailure,
};
pub use service::QuizService;
