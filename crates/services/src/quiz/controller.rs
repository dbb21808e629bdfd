use std::fmt;

use quiz_core::Clock;
use quiz_core::export::{ExportError, export_questions};
use quiz_core::model::{
    Analysis, AnswerSet, GenerationRequest, Question, QuestionDraft, SessionPhase, WrongAnswer,
};
use quiz_core::scoring::QuizResult;
use tracing::{debug, info, warn};

use crate::error::QuizError;

//
// ─── TICKETS & OUTCOMES ────────────────────────────────────────────────────────
//

/// Handle for an outstanding generation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationTicket {
    id: u64,
    request: GenerationRequest,
}

impl GenerationTicket {
    #[must_use]
    pub fn id(&self) -> u64 {
        self.id
    }

    #[must_use]
    pub fn request(&self) -> &GenerationRequest {
        &self.request
    }
}

/// Handle for an outstanding analysis request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisTicket {
    id: u64,
    wrong_answers: Vec<WrongAnswer>,
}

impl AnalysisTicket {
    #[must_use]
    pub fn id(&self) -> u64 {
        self.id
    }

    #[must_use]
    pub fn wrong_answers(&self) -> &[WrongAnswer] {
        &self.wrong_answers
    }
}

/// What happened when a response was handed back to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionOutcome {
    Applied,
    Failed,
    /// The ticket was superseded; the response was discarded.
    Stale,
}

/// User-visible error signal from the last failed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionFailure {
    Generation(String),
    Analysis(String),
}

impl SessionFailure {
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Generation(_) => {
                "Something went wrong while generating the questions. Please try again.".into()
            }
            Self::Analysis(_) => "Failed to get detailed analysis. Please try again.".into(),
        }
    }

    #[must_use]
    pub fn detail(&self) -> &str {
        match self {
            Self::Generation(detail) | Self::Analysis(detail) => detail,
        }
    }
}

#[derive(Debug, Clone)]
struct EditState {
    index: usize,
    draft: QuestionDraft,
}

//
// ─── CONTROLLER ────────────────────────────────────────────────────────────────
//

/// State machine for one quiz attempt.
///
/// Network calls are not made here. `begin_*` methods hand out tickets that a
/// driver resolves and feeds back through `complete_*`. Every ticket carries an
/// id from a monotonically increasing counter, so responses that arrive after
/// a regeneration are recognised and dropped.
pub struct QuizSessionController {
    clock: Clock,
    phase: SessionPhase,
    questions: Vec<Question>,
    answers: AnswerSet,
    analysis: Vec<Analysis>,
    result: Option<QuizResult>,
    editing: Option<EditState>,
    failure: Option<SessionFailure>,
    last_request: Option<GenerationRequest>,
    request_seq: u64,
    pending_generation: Option<u64>,
    pending_analysis: Option<u64>,
}

impl Default for QuizSessionController {
    fn default() -> Self {
        Self::new(Clock::default())
    }
}

impl QuizSessionController {
    #[must_use]
    pub fn new(clock: Clock) -> Self {
        Self {
            clock,
            phase: SessionPhase::Idle,
            questions: Vec::new(),
            answers: AnswerSet::new(),
            analysis: Vec::new(),
            result: None,
            editing: None,
            failure: None,
            last_request: None,
            request_seq: 0,
            pending_generation: None,
            pending_analysis: None,
        }
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    #[must_use]
    pub fn analysis(&self) -> &[Analysis] {
        &self.analysis
    }

    #[must_use]
    pub fn result(&self) -> Option<&QuizResult> {
        self.result.as_ref()
    }

    #[must_use]
    pub fn failure(&self) -> Option<&SessionFailure> {
        self.failure.as_ref()
    }

    #[must_use]
    pub fn last_request(&self) -> Option<&GenerationRequest> {
        self.last_request.as_ref()
    }

    #[must_use]
    pub fn editing_index(&self) -> Option<usize> {
        self.editing.as_ref().map(|edit| edit.index)
    }

    #[must_use]
    pub fn draft(&self) -> Option<&QuestionDraft> {
        self.editing.as_ref().map(|edit| &edit.draft)
    }

    /// The generate action is available (no generation in flight).
    #[must_use]
    pub fn can_generate(&self) -> bool {
        self.phase != SessionPhase::Generating
    }

    /// Every question has an answer and the attempt is still open.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.phase == SessionPhase::Reviewing
            && !self.questions.is_empty()
            && self.answers.len() == self.questions.len()
            && self.answers.covers(self.questions.len())
    }

    pub fn dismiss_failure(&mut self) {
        self.failure = None;
    }

    //
    // ─── GENERATION ────────────────────────────────────────────────────────
    //

    /// Start a fresh generation, discarding questions, answers and analysis.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Busy` while another generation is in flight.
    pub fn begin_generation(
        &mut self,
        request: GenerationRequest,
    ) -> Result<GenerationTicket, QuizError> {
        if self.phase == SessionPhase::Generating {
            return Err(QuizError::Busy);
        }
        Ok(self.issue_generation(request))
    }

    /// Re-issue the last request from any phase. A generation still in flight
    /// is superseded and its response will be discarded.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::NoPreviousRequest` if nothing was generated yet.
    pub fn begin_regeneration(&mut self) -> Result<GenerationTicket, QuizError> {
        let request = self
            .last_request
            .clone()
            .ok_or(QuizError::NoPreviousRequest)?;
        Ok(self.issue_generation(request))
    }

    fn issue_generation(&mut self, request: GenerationRequest) -> GenerationTicket {
        self.reset_attempt();
        self.request_seq += 1;
        let id = self.request_seq;
        self.pending_generation = Some(id);
        self.last_request = Some(request.clone());
        self.phase = SessionPhase::Generating;
        info!(
            request_id = id,
            count = request.question_count(),
            "quiz generation started"
        );
        GenerationTicket { id, request }
    }

    /// Questions, answers, analysis, result and edit state always go together.
    fn reset_attempt(&mut self) {
        self.questions.clear();
        self.answers.clear();
        self.analysis.clear();
        self.result = None;
        self.editing = None;
        self.failure = None;
        self.pending_analysis = None;
    }

    /// Apply the outcome of a generation request.
    pub fn complete_generation<E: fmt::Display>(
        &mut self,
        ticket: &GenerationTicket,
        outcome: Result<Vec<Question>, E>,
    ) -> CompletionOutcome {
        if self.pending_generation != Some(ticket.id) {
            debug!(request_id = ticket.id, "discarding stale generation response");
            return CompletionOutcome::Stale;
        }
        self.pending_generation = None;

        match outcome {
            Ok(questions) if !questions.is_empty() => {
                info!(
                    request_id = ticket.id,
                    count = questions.len(),
                    "quiz generation applied"
                );
                self.questions = questions;
                self.phase = SessionPhase::Reviewing;
                CompletionOutcome::Applied
            }
            Ok(_) => {
                self.fail_generation(ticket.id, "the generator returned no questions".into());
                CompletionOutcome::Failed
            }
            Err(err) => {
                self.fail_generation(ticket.id, err.to_string());
                CompletionOutcome::Failed
            }
        }
    }

    fn fail_generation(&mut self, request_id: u64, detail: String) {
        warn!(request_id, error = %detail, "quiz generation failed");
        self.questions.clear();
        self.phase = SessionPhase::Error;
        self.failure = Some(SessionFailure::Generation(detail));
    }

    //
    // ─── ANSWERING & EDITING ───────────────────────────────────────────────
    //

    /// Select an option, replacing any earlier selection for the question.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::InvalidPhase` outside `Reviewing`, and range errors
    /// for unknown questions or options.
    pub fn select_answer(&mut self, question: usize, option: usize) -> Result<(), QuizError> {
        self.require_reviewing("answer")?;
        let options = self.question(question)?.options().len();
        if option >= options {
            return Err(QuizError::OptionOutOfRange { question, option });
        }
        self.answers.select(question, option);
        Ok(())
    }

    /// Open the edit form for a question, replacing any open form.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::InvalidPhase` outside `Reviewing` or
    /// `QuizError::QuestionOutOfRange` for an unknown question.
    pub fn start_edit(&mut self, index: usize) -> Result<&mut QuestionDraft, QuizError> {
        self.require_reviewing("edit")?;
        let draft = QuestionDraft::from_question(self.question(index)?);
        let edit = self.editing.insert(EditState { index, draft });
        Ok(&mut edit.draft)
    }

    /// Mutable access to the staged draft.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::NotEditing` when no form is open.
    pub fn edit_draft_mut(&mut self) -> Result<&mut QuestionDraft, QuizError> {
        self.editing
            .as_mut()
            .map(|edit| &mut edit.draft)
            .ok_or(QuizError::NotEditing)
    }

    /// Validate the staged draft and replace the question with it.
    ///
    /// On a validation error the form stays open with the draft intact.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::NotEditing` or `QuizError::InvalidDraft`.
    pub fn save_edit(&mut self) -> Result<&Question, QuizError> {
        self.require_reviewing("save an edit")?;
        let edit = self.editing.take().ok_or(QuizError::NotEditing)?;
        match edit.draft.clone().validate() {
            Ok(question) => {
                debug!(index = edit.index, "question edit saved");
                let len = self.questions.len();
                let slot = self
                    .questions
                    .get_mut(edit.index)
                    .ok_or(QuizError::QuestionOutOfRange {
                        index: edit.index,
                        len,
                    })?;
                *slot = question;
                Ok(slot)
            }
            Err(err) => {
                self.editing = Some(edit);
                Err(err.into())
            }
        }
    }

    /// Discard the staged draft. Returns whether a form was open.
    pub fn cancel_edit(&mut self) -> bool {
        self.editing.take().is_some()
    }

    fn require_reviewing(&self, operation: &'static str) -> Result<(), QuizError> {
        if self.phase == SessionPhase::Reviewing {
            Ok(())
        } else {
            Err(QuizError::InvalidPhase {
                operation,
                phase: self.phase,
            })
        }
    }

    fn question(&self, index: usize) -> Result<&Question, QuizError> {
        self.questions
            .get(index)
            .ok_or(QuizError::QuestionOutOfRange {
                index,
                len: self.questions.len(),
            })
    }

    //
    // ─── SUBMISSION & ANALYSIS ─────────────────────────────────────────────
    //

    /// Grade the attempt. Returns a ticket when wrong answers need analysis.
    ///
    /// Any open edit form is discarded.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::InvalidPhase` outside `Reviewing` and
    /// `QuizError::Incomplete` unless every question is answered.
    pub fn submit(&mut self) -> Result<Option<AnalysisTicket>, QuizError> {
        self.require_reviewing("submit")?;
        if !self.can_submit() {
            return Err(QuizError::Incomplete {
                answered: self.answers.len(),
                total: self.questions.len(),
            });
        }

        let result = QuizResult::grade(&self.questions, &self.answers, self.clock.now())?;
        info!(
            correct = result.correct(),
            total = result.total(),
            "quiz submitted"
        );

        self.editing = None;
        self.failure = None;
        self.phase = SessionPhase::Submitted;
        let wrong_answers = result.wrong_answers().to_vec();
        self.result = Some(result);

        if wrong_answers.is_empty() {
            return Ok(None);
        }

        self.request_seq += 1;
        let id = self.request_seq;
        self.pending_analysis = Some(id);
        self.phase = SessionPhase::AnalysisLoading;
        Ok(Some(AnalysisTicket { id, wrong_answers }))
    }

    /// Apply the outcome of an analysis request. Failure keeps the score.
    pub fn complete_analysis<E: fmt::Display>(
        &mut self,
        ticket: &AnalysisTicket,
        outcome: Result<Vec<Analysis>, E>,
    ) -> CompletionOutcome {
        if self.pending_analysis != Some(ticket.id) || self.phase != SessionPhase::AnalysisLoading {
            debug!(request_id = ticket.id, "discarding stale analysis response");
            return CompletionOutcome::Stale;
        }
        self.pending_analysis = None;

        match outcome {
            Ok(analysis) => {
                info!(request_id = ticket.id, count = analysis.len(), "analysis applied");
                self.analysis = analysis;
                self.phase = SessionPhase::AnalysisReady;
                CompletionOutcome::Applied
            }
            Err(err) => {
                warn!(request_id = ticket.id, error = %err, "analysis failed");
                self.analysis.clear();
                self.phase = SessionPhase::Submitted;
                self.failure = Some(SessionFailure::Analysis(err.to_string()));
                CompletionOutcome::Failed
            }
        }
    }

    /// Export the current questions, whatever the phase.
    ///
    /// # Errors
    ///
    /// Returns `ExportError` if encoding fails.
    pub fn export_document(&self) -> Result<String, ExportError> {
        export_questions(&self.questions)
    }
}

impl fmt::Debug for QuizSessionController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSessionController")
            .field("phase", &self.phase)
            .field("questions_len", &self.questions.len())
            .field("answered", &self.answers.len())
            .field("analysis_len", &self.analysis.len())
            .field("editing", &self.editing_index())
            .field("request_seq", &self.request_seq)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
