use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use quiz_core::model::{GenerationRequest, Question};
use storage::repository::{TokenKind, TokenStore};

use crate::error::GenerationError;
use crate::http::{endpoint, with_bearer};

/// Source of generated multiple-choice questions.
#[async_trait]
pub trait QuestionGenerator: Send + Sync {
    /// Generate questions for the request.
    ///
    /// # Errors
    ///
    /// Returns `GenerationError` when the call fails or yields no usable questions.
    async fn generate(&self, request: &GenerationRequest) -> Result<Vec<Question>, GenerationError>;
}

/// Generator backed by the `/generate` HTTP endpoint.
#[derive(Clone)]
pub struct HttpQuestionGenerator {
    client: Client,
    base_url: String,
    tokens: Arc<dyn TokenStore>,
}

impl HttpQuestionGenerator {
    #[must_use]
    pub fn new(client: Client, base_url: impl Into<String>, tokens: Arc<dyn TokenStore>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            tokens,
        }
    }
}

#[async_trait]
impl QuestionGenerator for HttpQuestionGenerator {
    async fn generate(&self, request: &GenerationRequest) -> Result<Vec<Question>, GenerationError> {
        let url = endpoint(&self.base_url, "generate");
        let payload = GenerateRequest {
            prompt: request.prompt(),
        };

        let builder = self.client.post(url).json(&payload);
        let response = with_bearer(builder, &self.tokens, TokenKind::Session)
            .await?
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(GenerationError::HttpStatus(response.status()));
        }

        let body = response.text().await?;
        let items: Vec<Value> =
            serde_json::from_str(&body).map_err(|err| GenerationError::Malformed(err.to_string()))?;
        let received = items.len();
        let questions = map_generated(items);
        debug!(
            requested = request.question_count(),
            received,
            kept = questions.len(),
            "generation response mapped"
        );

        if questions.is_empty() {
            return Err(GenerationError::EmptyResponse);
        }
        Ok(questions)
    }
}

/// Map raw generator items into questions, dropping items that cannot form one.
pub(crate) fn map_generated(items: Vec<Value>) -> Vec<Question> {
    items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| {
            let raw: GeneratedQuestion = match serde_json::from_value(item) {
                Ok(raw) => raw,
                Err(err) => {
                    warn!(index, error = %err, "skipping undecodable generated question");
                    return None;
                }
            };
            match Question::from_answer_text(raw.question, raw.options, &raw.answer) {
                Ok(question) => {
                    if question.correct_option_index().is_none() {
                        warn!(index, "generated answer matches no option");
                    }
                    Some(question)
                }
                Err(err) => {
                    warn!(index, error = %err, "skipping invalid generated question");
                    None
                }
            }
        })
        .collect()
}

#[derive(Debug, Serialize)]
struct GenerateRequest {
    prompt: String,
}

#[derive(Debug, Deserialize)]
struct GeneratedQuestion {
    #[serde(rename = "Question", default)]
    question: String,
    #[serde(rename = "Options", default)]
    options: Vec<String>,
    #[serde(rename = "Answer", default)]
    answer: String,
}
