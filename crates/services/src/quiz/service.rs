use std::sync::Arc;

use quiz_core::Clock;
use quiz_core::model::{Analysis, GenerationRequest, Question};

use super::controller::{AnalysisTicket, CompletionOutcome, GenerationTicket, QuizSessionController};
use crate::analysis_service::AnswerAnalyzer;
use crate::error::{AnalysisError, GenerationError, QuizError};
use crate::generation_service::QuestionGenerator;

/// Resolves session tickets against the generator and analyzer.
///
/// UIs that must stay responsive call `fetch_*` between `begin_*` and
/// `complete_*` themselves; the `generate`/`regenerate`/`submit` helpers run a
/// whole round trip for callers that can hold the session across the await.
#[derive(Clone)]
pub struct QuizService {
    clock: Clock,
    generator: Arc<dyn QuestionGenerator>,
    analyzer: Arc<dyn AnswerAnalyzer>,
}

impl QuizService {
    #[must_use]
    pub fn new(generator: Arc<dyn QuestionGenerator>, analyzer: Arc<dyn AnswerAnalyzer>) -> Self {
        Self {
            clock: Clock::default(),
            generator,
            analyzer,
        }
    }

    #[must_use]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// A fresh idle session stamped by this service's clock.
    #[must_use]
    pub fn new_session(&self) -> QuizSessionController {
        QuizSessionController::new(self.clock)
    }

    /// # Errors
    ///
    /// Returns `GenerationError` from the underlying generator.
    pub async fn fetch_questions(
        &self,
        ticket: &GenerationTicket,
    ) -> Result<Vec<Question>, GenerationError> {
        self.generator.generate(ticket.request()).await
    }

    /// # Errors
    ///
    /// Returns `AnalysisError` from the underlying analyzer.
    pub async fn fetch_analysis(
        &self,
        ticket: &AnalysisTicket,
    ) -> Result<Vec<Analysis>, AnalysisError> {
        self.analyzer.analyze(ticket.wrong_answers()).await
    }

    /// Generate a new quiz into `session`.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Busy` if the session is already generating.
    /// Network failures are recorded on the session instead.
    pub async fn generate(
        &self,
        session: &mut QuizSessionController,
        request: GenerationRequest,
    ) -> Result<CompletionOutcome, QuizError> {
        let ticket = session.begin_generation(request)?;
        let outcome = self.fetch_questions(&ticket).await;
        Ok(session.complete_generation(&ticket, outcome))
    }

    /// Re-run the last request.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::NoPreviousRequest` before the first generation.
    pub async fn regenerate(
        &self,
        session: &mut QuizSessionController,
    ) -> Result<CompletionOutcome, QuizError> {
        let ticket = session.begin_regeneration()?;
        let outcome = self.fetch_questions(&ticket).await;
        Ok(session.complete_generation(&ticket, outcome))
    }

    /// Grade the attempt and, when something was wrong, fetch the analysis.
    ///
    /// Returns `None` when there was nothing to analyse.
    ///
    /// # Errors
    ///
    /// Returns `QuizError` if the session cannot be submitted.
    pub async fn submit(
        &self,
        session: &mut QuizSessionController,
    ) -> Result<Option<CompletionOutcome>, QuizError> {
        let Some(ticket) = session.submit()? else {
            return Ok(None);
        };
        let outcome = self.fetch_analysis(&ticket).await;
        Ok(Some(session.complete_analysis(&ticket, outcome)))
    }
}
