use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::model::{AnswerSet, Question, WrongAnswer};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ScoreError {
    #[error("there are no questions to grade")]
    NoQuestions,

    #[error("{answered} of {total} questions answered")]
    Incomplete { answered: usize, total: usize },

    #[error("answer {option} for question {question} is not one of its options")]
    UnknownOption { question: usize, option: usize },
}

/// Graded snapshot of one attempt, computed once at submit time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizResult {
    correct: usize,
    total: usize,
    wrong_answers: Vec<WrongAnswer>,
    submitted_at: DateTime<Utc>,
}

impl QuizResult {
    /// Grade `answers` against the current state of `questions`.
    ///
    /// # Errors
    ///
    /// Returns `ScoreError::NoQuestions` for an empty list,
    /// `ScoreError::Incomplete` unless every question has an answer and
    /// `ScoreError::UnknownOption` for a selection outside a question's options.
    pub fn grade(
        questions: &[Question],
        answers: &AnswerSet,
        submitted_at: DateTime<Utc>,
    ) -> Result<Self, ScoreError> {
        if questions.is_empty() {
            return Err(ScoreError::NoQuestions);
        }
        if !answers.covers(questions.len()) {
            return Err(ScoreError::Incomplete {
                answered: answers.len(),
                total: questions.len(),
            });
        }

        let mut correct = 0_usize;
        let mut wrong_answers = Vec::new();
        for (index, question) in questions.iter().enumerate() {
            let Some(selected) = answers.get(index) else {
                continue;
            };
            let Some(user_text) = question.option(selected) else {
                return Err(ScoreError::UnknownOption {
                    question: index,
                    option: selected,
                });
            };

            if question.is_correct(selected) {
                correct += 1;
            } else {
                wrong_answers.push(WrongAnswer {
                    question_index: index,
                    question: question.prompt().to_string(),
                    user_answer_text: user_text.to_string(),
                    correct_answer_text: question.correct_text().unwrap_or_default().to_string(),
                });
            }
        }

        Ok(Self {
            correct,
            total: questions.len(),
            wrong_answers,
            submitted_at,
        })
    }

    #[must_use]
    pub fn correct(&self) -> usize {
        self.correct
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    /// `round(100 * correct / total)`, halves rounded up.
    #[must_use]
    pub fn percentage(&self) -> usize {
        if self.total == 0 {
            return 0;
        }
        (self.correct * 200 + self.total) / (self.total * 2)
    }

    #[must_use]
    pub fn wrong_answers(&self) -> &[WrongAnswer] {
        &self.wrong_answers
    }

    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.wrong_answers.is_empty()
    }

    #[must_use]
    pub fn submitted_at(&self) -> DateTime<Utc> {
        self.submitted_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::fixed_now;

    fn question(prompt: &str, options: &[&str], correct: Option<usize>) -> Question {
        Question::new(
            prompt,
            options.iter().map(|o| (*o).to_string()).collect(),
            correct,
            None,
        )
        .unwrap()
    }

    #[test]
    fn grades_and_collects_wrong_answers() {
        let questions = vec![
            question("First", &["a", "b"], Some(1)),
            question("Second", &["yes", "no"], Some(0)),
        ];
        let mut answers = AnswerSet::new();
        answers.select(0, 1);
        answers.select(1, 1);

        let result = QuizResult::grade(&questions, &answers, fixed_now()).unwrap();

        assert_eq!(result.correct(), 1);
        assert_eq!(result.total(), 2);
        assert_eq!(result.percentage(), 50);
        assert_eq!(
            result.wrong_answers(),
            &[WrongAnswer {
                question_index: 1,
                question: "Second".into(),
                user_answer_text: "no".into(),
                correct_answer_text: "yes".into(),
            }]
        );
    }

    #[test]
    fn incomplete_answers_are_rejected() {
        let questions = vec![
            question("First", &["a", "b"], Some(0)),
            question("Second", &["a", "b"], Some(0)),
        ];
        let mut answers = AnswerSet::new();
        answers.select(0, 0);

        let err = QuizResult::grade(&questions, &answers, fixed_now()).unwrap_err();
        assert_eq!(err, ScoreError::Incomplete { answered: 1, total: 2 });
    }

    #[test]
    fn unmatched_question_is_always_wrong() {
        let questions = vec![question("Broken", &["a", "b"], None)];
        let mut answers = AnswerSet::new();
        answers.select(0, 0);

        let result = QuizResult::grade(&questions, &answers, fixed_now()).unwrap();
        assert_eq!(result.correct(), 0);
        assert_eq!(result.wrong_answers()[0].correct_answer_text, "");
    }

    #[test]
    fn percentage_rounds_half_up() {
        let questions: Vec<_> = (0..8)
            .map(|i| question(&format!("Q{i}"), &["a", "b"], Some(0)))
            .collect();
        let mut answers = AnswerSet::new();
        answers.select(0, 0);
        for i in 1..8 {
            answers.select(i, 1);
        }
        let result = QuizResult::grade(&questions, &answers, fixed_now()).unwrap();
        assert_eq!(result.correct(), 1);
        assert_eq!(result.percentage(), 13);
    }

    #[test]
    fn empty_question_list_cannot_be_graded() {
        let err = QuizResult::grade(&[], &AnswerSet::new(), fixed_now()).unwrap_err();
        assert_eq!(err, ScoreError::NoQuestions);
    }
}
