use std::sync::Arc;

use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use quiz_core::Clock;
use quiz_core::model::Course;
use storage::repository::{TokenKind, TokenStore};

use crate::error::ClassroomError;
use crate::http::endpoint;

/// Lists the signed-in user's courses from the classroom provider.
#[derive(Clone)]
pub struct ClassroomService {
    client: Client,
    base_url: String,
    tokens: Arc<dyn TokenStore>,
    clock: Clock,
}

impl ClassroomService {
    #[must_use]
    pub fn new(
        client: Client,
        base_url: impl Into<String>,
        tokens: Arc<dyn TokenStore>,
        clock: Clock,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            tokens,
            clock,
        }
    }

    /// Store the OAuth access token used for course listing.
    ///
    /// # Errors
    ///
    /// Returns `ClassroomError::EmptyToken` for a blank token or
    /// `ClassroomError::Storage` if it cannot be saved.
    pub async fn connect(&self, access_token: &str) -> Result<(), ClassroomError> {
        let token = access_token.trim();
        if token.is_empty() {
            return Err(ClassroomError::EmptyToken);
        }
        self.tokens
            .save_token(TokenKind::Classroom, token, self.clock.now())
            .await?;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `ClassroomError::Storage` if the token cannot be removed.
    pub async fn disconnect(&self) -> Result<(), ClassroomError> {
        self.tokens.clear_token(TokenKind::Classroom).await?;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `ClassroomError::Storage` if the token store cannot be read.
    pub async fn is_connected(&self) -> Result<bool, ClassroomError> {
        Ok(self.tokens.get_token(TokenKind::Classroom).await?.is_some())
    }

    /// # Errors
    ///
    /// Returns `ClassroomError::NotConnected` without a stored token, or
    /// `ClassroomError` when the request fails.
    pub async fn list_courses(&self) -> Result<Vec<Course>, ClassroomError> {
        let token = self
            .tokens
            .get_token(TokenKind::Classroom)
            .await?
            .ok_or(ClassroomError::NotConnected)?;

        let response = self
            .client
            .get(endpoint(&self.base_url, "courses"))
            .bearer_auth(token.token)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(ClassroomError::HttpStatus(response.status()));
        }

        let body: CoursesResponse = response.json().await?;
        debug!(count = body.courses.len(), "courses listed");
        Ok(body.courses)
    }
}

#[derive(Debug, Deserialize)]
struct CoursesResponse {
    #[serde(default)]
    courses: Vec<Course>,
}
