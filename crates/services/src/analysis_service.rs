use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use quiz_core::model::{Analysis, WrongAnswer};
use storage::repository::{TokenKind, TokenStore};

use crate::error::AnalysisError;
use crate::http::{endpoint, with_bearer};

/// Explains wrong answers after a quiz is graded.
#[async_trait]
pub trait AnswerAnalyzer: Send + Sync {
    /// Request one analysis per wrong answer.
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError` when the call fails or the response is not a list.
    async fn analyze(&self, wrong_answers: &[WrongAnswer]) -> Result<Vec<Analysis>, AnalysisError>;
}

/// Analyzer backed by the `/analyze` HTTP endpoint.
#[derive(Clone)]
pub struct HttpAnswerAnalyzer {
    client: Client,
    base_url: String,
    tokens: Arc<dyn TokenStore>,
}

impl HttpAnswerAnalyzer {
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
impl AnswerAnalyzer for HttpAnswerAnalyzer {
    async fn analyze(&self, wrong_answers: &[WrongAnswer]) -> Result<Vec<Analysis>, AnalysisError> {
        let url = endpoint(&self.base_url, "analyze");
        let payload: Vec<AnalyzeItem<'_>> = wrong_answers
            .iter()
            .map(|wrong| AnalyzeItem {
                question: &wrong.question,
                user_answer: &wrong.user_answer_text,
                correct_answer: &wrong.correct_answer_text,
            })
            .collect();

        let builder = self.client.post(url).json(&payload);
        let response = with_bearer(builder, &self.tokens, TokenKind::Session)
            .await?
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AnalysisError::HttpStatus(response.status()));
        }

        let body = response.text().await?;
        let items: Vec<Value> =
            serde_json::from_str(&body).map_err(|err| AnalysisError::Malformed(err.to_string()))?;
        let analysis = map_analysis(items);
        debug!(
            requested = wrong_answers.len(),
            received = analysis.len(),
            "analysis response mapped"
        );
        Ok(analysis)
    }
}

pub(crate) fn map_analysis(items: Vec<Value>) -> Vec<Analysis> {
    items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| match serde_json::from_value::<AnalysisItem>(item) {
            Ok(raw) => Some(Analysis::new(
                raw.question,
                raw.analysis,
                raw.youtube_video_url.as_deref(),
            )),
            Err(err) => {
                warn!(index, error = %err, "skipping undecodable analysis item");
                None
            }
        })
        .collect()
}

#[derive(Debug, Serialize)]
struct AnalyzeItem<'a> {
    question: &'a str,
    user_answer: &'a str,
    correct_answer: &'a str,
}

#[derive(Debug, Deserialize)]
struct AnalysisItem {
    #[serde(default)]
    question: String,
    analysis: String,
    #[serde(default)]
    youtube_video_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn maps_items_and_skips_broken_ones() {
        let items = vec![
            json!({
                "question": "Q1",
                "analysis": "Review chapter 2.",
                "youtube_video_url": "https://youtu.be/abc"
            }),
            json!({ "question": "Q2", "analysis": "Close.", "youtube_video_url": "" }),
            json!({ "question": "Q3" }),
        ];

        let analysis = map_analysis(items);

        assert_eq!(analysis.len(), 2);
        assert_eq!(analysis[0].analysis_text(), "Review chapter 2.");
        assert!(analysis[0].video_url().is_some());
        assert!(analysis[1].video_url().is_none());
    }
}
