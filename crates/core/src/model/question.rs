use thiserror::Error;

/// Wire/export value used when a question has no matching correct option.
pub const UNMATCHED_INDEX: i64 = -1;

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// A multiple-choice question with exactly one correct option.
///
/// `correct` is `None` when the generator named an answer that is not one of
/// the options. Such a question grades every selection as wrong until it is
/// edited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    prompt: String,
    options: Vec<String>,
    correct: Option<usize>,
    explanation: Option<String>,
}

impl Question {
    /// Build a question from its parts.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::EmptyPrompt` for a blank prompt,
    /// `QuestionError::TooFewOptions` for fewer than two options and
    /// `QuestionError::CorrectOutOfRange` if `correct` does not index an option.
    pub fn new(
        prompt: impl Into<String>,
        options: Vec<String>,
        correct: Option<usize>,
        explanation: Option<String>,
    ) -> Result<Self, QuestionError> {
        let prompt = prompt.into();
        if prompt.trim().is_empty() {
            return Err(QuestionError::EmptyPrompt);
        }
        if options.len() < 2 {
            return Err(QuestionError::TooFewOptions { len: options.len() });
        }
        if let Some(index) = correct {
            if index >= options.len() {
                return Err(QuestionError::CorrectOutOfRange {
                    index,
                    len: options.len(),
                });
            }
        }

        let explanation = explanation.filter(|text| !text.trim().is_empty());
        Ok(Self {
            prompt,
            options,
            correct,
            explanation,
        })
    }

    /// Build a question whose correct option is located by exact text match.
    ///
    /// # Errors
    ///
    /// Same as [`Question::new`]; an unmatched answer is not an error.
    pub fn from_answer_text(
        prompt: impl Into<String>,
        options: Vec<String>,
        answer: &str,
    ) -> Result<Self, QuestionError> {
        let correct = options.iter().position(|option| option == answer);
        Self::new(prompt, options, correct, None)
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn option(&self, index: usize) -> Option<&str> {
        self.options.get(index).map(String::as_str)
    }

    #[must_use]
    pub fn correct_option_index(&self) -> Option<usize> {
        self.correct
    }

    /// Correct index as exported: the index, or [`UNMATCHED_INDEX`].
    #[must_use]
    pub fn correct_index_value(&self) -> i64 {
        self.correct
            .and_then(|index| i64::try_from(index).ok())
            .unwrap_or(UNMATCHED_INDEX)
    }

    #[must_use]
    pub fn correct_text(&self) -> Option<&str> {
        self.correct.and_then(|index| self.option(index))
    }

    #[must_use]
    pub fn explanation(&self) -> Option<&str> {
        self.explanation.as_deref()
    }

    #[must_use]
    pub fn is_correct(&self, option: usize) -> bool {
        self.correct == Some(option)
    }
}

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question prompt cannot be empty")]
    EmptyPrompt,

    #[error("a question needs at least two options, got {len}")]
    TooFewOptions { len: usize },

    #[error("option {index} cannot be empty")]
    EmptyOption { index: usize },

    #[error("option index {index} is out of range for {len} options")]
    OptionOutOfRange { index: usize, len: usize },

    #[error("correct index {index} is out of range for {len} options")]
    CorrectOutOfRange { index: usize, len: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(items: &[&str]) -> Vec<String> {
        items.iter().map(|item| (*item).to_string()).collect()
    }

    #[test]
    fn answer_text_maps_to_index() {
        let question =
            Question::from_answer_text("2 + 2?", options(&["3", "4", "5"]), "4").unwrap();
        assert_eq!(question.correct_option_index(), Some(1));
        assert_eq!(question.correct_index_value(), 1);
        assert_eq!(question.correct_text(), Some("4"));
        assert!(question.is_correct(1));
    }

    #[test]
    fn unmatched_answer_uses_sentinel() {
        let question =
            Question::from_answer_text("2 + 2?", options(&["3", "4"]), "four").unwrap();
        assert_eq!(question.correct_option_index(), None);
        assert_eq!(question.correct_index_value(), UNMATCHED_INDEX);
        assert!(!question.is_correct(0));
        assert!(!question.is_correct(1));
    }

    #[test]
    fn answer_match_is_exact() {
        let question =
            Question::from_answer_text("Capital?", options(&["Paris ", "Rome"]), "Paris").unwrap();
        assert_eq!(question.correct_option_index(), None);
    }

    #[test]
    fn rejects_single_option() {
        let err = Question::new("Q", options(&["only"]), Some(0), None).unwrap_err();
        assert_eq!(err, QuestionError::TooFewOptions { len: 1 });
    }

    #[test]
    fn rejects_blank_prompt() {
        let err = Question::new("  ", options(&["a", "b"]), Some(0), None).unwrap_err();
        assert_eq!(err, QuestionError::EmptyPrompt);
    }

    #[test]
    fn rejects_correct_index_past_options() {
        let err = Question::new("Q", options(&["a", "b"]), Some(2), None).unwrap_err();
        assert_eq!(err, QuestionError::CorrectOutOfRange { index: 2, len: 2 });
    }

    #[test]
    fn blank_explanation_is_dropped() {
        let question =
            Question::new("Q", options(&["a", "b"]), Some(0), Some("   ".into())).unwrap();
        assert_eq!(question.explanation(), None);
    }
}
