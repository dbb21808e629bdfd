//! JSON export of a question list.

use serde::Serialize;
use thiserror::Error;

use crate::model::Question;

/// File name offered for downloaded exports.
pub const EXPORT_FILE_NAME: &str = "generated_mcqs.json";

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ExportError {
    #[error("failed to encode questions: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ExportedQuestion<'a> {
    prompt: &'a str,
    options: &'a [String],
    correct_option_index: i64,
    explanation: Option<&'a str>,
}

/// Serialize questions into a self-contained, pretty-printed JSON array.
///
/// # Errors
///
/// Returns `ExportError::Encode` if serialization fails.
pub fn export_questions(questions: &[Question]) -> Result<String, ExportError> {
    let exported: Vec<_> = questions
        .iter()
        .map(|question| ExportedQuestion {
            prompt: question.prompt(),
            options: question.options(),
            correct_option_index: question.correct_index_value(),
            explanation: question.explanation(),
        })
        .collect();
    Ok(serde_json::to_string_pretty(&exported)?)
}
