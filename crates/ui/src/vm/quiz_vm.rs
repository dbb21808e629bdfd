use std::path::{Path, PathBuf};

use quiz_core::export::EXPORT_FILE_NAME;
use quiz_core::model::{GenerationRequest, MAX_QUESTION_COUNT, RequestError, SessionPhase};
use services::QuizSessionController;
use tracing::warn;

use crate::views::ViewError;
use crate::vm::time_fmt::format_datetime;

/// How an option button should be drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionState {
    Idle,
    Selected,
    Correct,
    Wrong,
}

impl OptionState {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Idle => "option",
            Self::Selected => "option selected",
            Self::Correct => "option correct",
            Self::Wrong => "option wrong",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    pub index: usize,
    pub text: String,
    pub state: OptionState,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionRowVm {
    pub index: usize,
    pub number: usize,
    pub prompt: String,
    pub options: Vec<OptionVm>,
    /// Only revealed once the attempt is graded.
    pub explanation: Option<String>,
    pub editing: bool,
    pub can_edit: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WrongAnswerVm {
    pub number: usize,
    pub question: String,
    pub your_answer: String,
    pub correct_answer: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnalysisCardVm {
    pub question: String,
    pub text: String,
    pub video_url: Option<String>,
}

/// Why the generation form cannot be sent yet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormError {
    EmptyTopic,
    InvalidCount,
}

impl FormError {
    #[must_use]
    pub fn message(self) -> String {
        match self {
            Self::EmptyTopic => "Describe the topic the questions should cover.".into(),
            Self::InvalidCount => {
                format!("Choose between 1 and {MAX_QUESTION_COUNT} questions.")
            }
        }
    }
}

/// Parse the generation form fields.
///
/// # Errors
///
/// Returns `FormError` for a blank topic or a count outside the allowed range.
pub fn parse_generation_form(topic: &str, count: &str) -> Result<GenerationRequest, FormError> {
    let count: u32 = count.trim().parse().map_err(|_| FormError::InvalidCount)?;
    GenerationRequest::new(topic, count).map_err(|err| match err {
        RequestError::EmptyTopic => FormError::EmptyTopic,
        _ => FormError::InvalidCount,
    })
}

/// Render-ready projection of a quiz session.
pub struct QuizVm {
    session: QuizSessionController,
}

impl QuizVm {
    #[must_use]
    pub fn new(session: QuizSessionController) -> Self {
        Self { session }
    }

    #[must_use]
    pub fn session(&self) -> &QuizSessionController {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut QuizSessionController {
        &mut self.session
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.session.phase()
    }

    #[must_use]
    pub fn generate_disabled(&self) -> bool {
        !self.session.can_generate()
    }

    #[must_use]
    pub fn generate_label(&self) -> &'static str {
        if self.session.phase() == SessionPhase::Generating {
            "Generating..."
        } else {
            "Generate MCQs"
        }
    }

    #[must_use]
    pub fn submit_disabled(&self) -> bool {
        !self.session.can_submit()
    }

    #[must_use]
    pub fn show_submit(&self) -> bool {
        self.session.phase() == SessionPhase::Reviewing
    }

    #[must_use]
    pub fn can_regenerate(&self) -> bool {
        self.session.last_request().is_some()
    }

    #[must_use]
    pub fn has_questions(&self) -> bool {
        !self.session.questions().is_empty()
    }

    #[must_use]
    pub fn rows(&self) -> Vec<QuestionRowVm> {
        let graded = self.session.phase().is_graded();
        let reviewing = self.session.phase() == SessionPhase::Reviewing;
        let editing = self.session.editing_index();
        let answers = self.session.answers();

        self.session
            .questions()
            .iter()
            .enumerate()
            .map(|(index, question)| {
                let selected = answers.get(index);
                let options = question
                    .options()
                    .iter()
                    .enumerate()
                    .map(|(option, text)| {
                        let chosen = selected == Some(option);
                        let state = if !graded {
                            if chosen {
                                OptionState::Selected
                            } else {
                                OptionState::Idle
                            }
                        } else if question.is_correct(option) {
                            OptionState::Correct
                        } else if chosen {
                            OptionState::Wrong
                        } else {
                            OptionState::Idle
                        };
                        OptionVm {
                            index: option,
                            text: text.clone(),
                            state,
                        }
                    })
                    .collect();
                QuestionRowVm {
                    index,
                    number: index + 1,
                    prompt: question.prompt().to_string(),
                    options,
                    explanation: graded
                        .then(|| question.explanation().map(str::to_string))
                        .flatten(),
                    editing: editing == Some(index),
                    can_edit: reviewing,
                }
            })
            .collect()
    }

    #[must_use]
    pub fn progress_line(&self) -> String {
        format!(
            "{} of {} answered",
            self.session.answers().len(),
            self.session.questions().len()
        )
    }

    #[must_use]
    pub fn score_line(&self) -> Option<String> {
        self.session.result().map(|result| {
            format!(
                "You scored {} out of {} ({}%)",
                result.correct(),
                result.total(),
                result.percentage()
            )
        })
    }

    #[must_use]
    pub fn submitted_at_str(&self) -> Option<String> {
        self.session
            .result()
            .map(|result| format_datetime(result.submitted_at()))
    }

    #[must_use]
    pub fn wrong_answers(&self) -> Vec<WrongAnswerVm> {
        self.session
            .result()
            .map(|result| {
                result
                    .wrong_answers()
                    .iter()
                    .map(|wrong| WrongAnswerVm {
                        number: wrong.question_index + 1,
                        question: wrong.question.clone(),
                        your_answer: wrong.user_answer_text.clone(),
                        correct_answer: if wrong.correct_answer_text.is_empty() {
                            "(not provided)".into()
                        } else {
                            wrong.correct_answer_text.clone()
                        },
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    #[must_use]
    pub fn analysis_cards(&self) -> Vec<AnalysisCardVm> {
        self.session
            .analysis()
            .iter()
            .map(|analysis| AnalysisCardVm {
                question: analysis.question().to_string(),
                text: analysis.analysis_text().to_string(),
                video_url: analysis.video_url().map(|url| url.to_string()),
            })
            .collect()
    }

    #[must_use]
    pub fn status_line(&self) -> Option<&'static str> {
        let phase = self.session.phase();
        if !phase.is_loading() {
            return None;
        }
        Some(if phase == SessionPhase::Generating {
            "Generating questions..."
        } else {
            "Analysing your answers..."
        })
    }

    #[must_use]
    pub fn error_message(&self) -> Option<String> {
        self.session.failure().map(services::SessionFailure::message)
    }

    /// Underlying cause of the current failure, shown as a hover hint.
    #[must_use]
    pub fn error_detail(&self) -> Option<String> {
        self.session.failure().map(|failure| failure.detail().to_string())
    }

    /// Write the export document into `dir` and return the file path.
    ///
    /// # Errors
    ///
    /// Returns `ViewError::ExportFailed` if encoding or writing fails.
    pub fn export_to(&self, dir: &Path) -> Result<PathBuf, ViewError> {
        let document = self.session.export_document().map_err(|err| {
            warn!(error = %err, "export encoding failed");
            ViewError::ExportFailed
        })?;
        let path = dir.join(EXPORT_FILE_NAME);
        std::fs::write(&path, document).map_err(|err| {
            warn!(error = %err, path = %path.display(), "export write failed");
            ViewError::ExportFailed
        })?;
        Ok(path)
    }
}
