use crate::model::question::{Question, QuestionError};

/// Staged copy of a question while it is being edited.
///
/// Changes only reach the question list through [`QuestionDraft::validate`],
/// so a cancelled edit leaves nothing behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionDraft {
    pub prompt: String,
    pub options: Vec<String>,
    pub correct: Option<usize>,
    pub explanation: String,
}

impl QuestionDraft {
    #[must_use]
    pub fn from_question(question: &Question) -> Self {
        Self {
            prompt: question.prompt().to_string(),
            options: question.options().to_vec(),
            correct: question.correct_option_index(),
            explanation: question.explanation().unwrap_or_default().to_string(),
        }
    }

    pub fn set_prompt(&mut self, prompt: impl Into<String>) {
        self.prompt = prompt.into();
    }

    pub fn set_explanation(&mut self, explanation: impl Into<String>) {
        self.explanation = explanation.into();
    }

    /// Replace the text of one option.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::OptionOutOfRange` for an unknown option.
    pub fn set_option(&mut self, index: usize, text: impl Into<String>) -> Result<(), QuestionError> {
        let len = self.options.len();
        let slot = self
            .options
            .get_mut(index)
            .ok_or(QuestionError::OptionOutOfRange { index, len })?;
        *slot = text.into();
        Ok(())
    }

    /// Mark an option as the correct one.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::OptionOutOfRange` for an unknown option.
    pub fn set_correct(&mut self, index: usize) -> Result<(), QuestionError> {
        if index >= self.options.len() {
            return Err(QuestionError::OptionOutOfRange {
                index,
                len: self.options.len(),
            });
        }
        self.correct = Some(index);
        Ok(())
    }

    /// Swap two options. The correct mark follows the option it was on.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::OptionOutOfRange` if either index is unknown.
    pub fn swap_options(&mut self, a: usize, b: usize) -> Result<(), QuestionError> {
        let len = self.options.len();
        for index in [a, b] {
            if index >= len {
                return Err(QuestionError::OptionOutOfRange { index, len });
            }
        }
        self.options.swap(a, b);
        self.correct = self.correct.map(|correct| match correct {
            c if c == a => b,
            c if c == b => a,
            c => c,
        });
        Ok(())
    }

    /// Validate the staged changes into a question.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` if the prompt or any option is blank, or the
    /// question would violate the option/correct-index invariants.
    pub fn validate(self) -> Result<Question, QuestionError> {
        if let Some(index) = self.options.iter().position(|o| o.trim().is_empty()) {
            return Err(QuestionError::EmptyOption { index });
        }
        let explanation = Some(self.explanation);
        Question::new(self.prompt, self.options, self.correct, explanation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question() -> Question {
        Question::new(
            "Largest planet?",
            vec!["Mars".into(), "Jupiter".into(), "Venus".into()],
            Some(1),
            None,
        )
        .unwrap()
    }

    #[test]
    fn draft_round_trips_unchanged_question() {
        let original = question();
        let validated = QuestionDraft::from_question(&original).validate().unwrap();
        assert_eq!(validated, original);
    }

    #[test]
    fn swap_keeps_correct_option_text() {
        let mut draft = QuestionDraft::from_question(&question());
        draft.swap_options(0, 1).unwrap();
        let edited = draft.validate().unwrap();
        assert_eq!(edited.options()[0], "Jupiter");
        assert_eq!(edited.correct_option_index(), Some(0));
        assert_eq!(edited.correct_text(), Some("Jupiter"));
    }

    #[test]
    fn blank_option_fails_validation() {
        let mut draft = QuestionDraft::from_question(&question());
        draft.set_option(2, " ").unwrap();
        assert_eq!(
            draft.validate().unwrap_err(),
            QuestionError::EmptyOption { index: 2 }
        );
    }

    #[test]
    fn out_of_range_edits_are_rejected() {
        let mut draft = QuestionDraft::from_question(&question());
        assert!(matches!(
            draft.set_correct(3),
            Err(QuestionError::OptionOutOfRange { index: 3, len: 3 })
        ));
        assert!(draft.set_option(9, "x").is_err());
        assert!(draft.swap_options(0, 7).is_err());
        assert_eq!(draft.correct, Some(1));
    }

    #[test]
    fn set_correct_repairs_unmatched_question() {
        let broken = Question::new("Q", vec!["a".into(), "b".into()], None, None).unwrap();
        let mut draft = QuestionDraft::from_question(&broken);
        draft.set_correct(1).unwrap();
        assert_eq!(draft.validate().unwrap().correct_option_index(), Some(1));
    }
}
