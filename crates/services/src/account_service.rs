use std::sync::Arc;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use quiz_core::Clock;
use quiz_core::model::Role;
use storage::repository::{TokenKind, TokenStore};

use crate::error::AccountError;
use crate::http::endpoint;

/// Sign-up form as entered by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignUpForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

impl SignUpForm {
    /// # Errors
    ///
    /// Returns `AccountError::MissingField` or `AccountError::InvalidEmail`.
    pub fn validate(&self) -> Result<(), AccountError> {
        require("name", &self.name)?;
        validate_credentials(&self.email, &self.password)
    }
}

/// Result of a successful sign-in call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignInOutcome {
    /// The backend issued a token and it was stored.
    Authenticated,
    /// The backend accepted the credentials without returning a token.
    Accepted,
}

/// Thin client for the accounts backend.
#[derive(Clone)]
pub struct AccountService {
    client: Client,
    base_url: Option<String>,
    tokens: Arc<dyn TokenStore>,
    clock: Clock,
}

impl AccountService {
    #[must_use]
    pub fn new(
        client: Client,
        base_url: Option<String>,
        tokens: Arc<dyn TokenStore>,
        clock: Clock,
    ) -> Self {
        Self {
            client,
            base_url,
            tokens,
            clock,
        }
    }

    #[must_use]
    pub fn enabled(&self) -> bool {
        self.base_url.is_some()
    }

    /// # Errors
    ///
    /// Returns `AccountError` on invalid input, when the backend is not
    /// configured or when the call fails.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<SignInOutcome, AccountError> {
        validate_credentials(email, password)?;
        let base_url = self.base_url.as_deref().ok_or(AccountError::Disabled)?;

        let payload = SignInRequest {
            email: email.trim(),
            password,
        };
        let response = self
            .client
            .post(endpoint(base_url, "users/signin/"))
            .json(&payload)
            .send()
            .await?;
        if !response.status().is_success() {
            warn!(status = %response.status(), "sign-in rejected");
            return Err(AccountError::HttpStatus(response.status()));
        }

        // Bodies without a token still count as success.
        let body: SignInResponse = response.json().await.unwrap_or_default();
        match body.token.or(body.access_token) {
            Some(token) if !token.trim().is_empty() => {
                self.tokens
                    .save_token(TokenKind::Session, token.trim(), self.clock.now())
                    .await?;
                info!("signed in");
                Ok(SignInOutcome::Authenticated)
            }
            _ => Ok(SignInOutcome::Accepted),
        }
    }

    /// # Errors
    ///
    /// Returns `AccountError` on invalid input, when the backend is not
    /// configured or when the call fails.
    pub async fn sign_up(&self, form: &SignUpForm) -> Result<(), AccountError> {
        form.validate()?;
        let base_url = self.base_url.as_deref().ok_or(AccountError::Disabled)?;

        let payload = SignUpRequest {
            username: form.name.trim(),
            email: form.email.trim(),
            password: &form.password,
            role: form.role,
        };
        let response = self
            .client
            .post(endpoint(base_url, "users/"))
            .json(&payload)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(AccountError::HttpStatus(response.status()));
        }
        info!(role = form.role.as_str(), "account created");
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `AccountError::Storage` if the token cannot be removed.
    pub async fn sign_out(&self) -> Result<(), AccountError> {
        self.tokens.clear_token(TokenKind::Session).await?;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `AccountError::Storage` if the token store cannot be read.
    pub async fn is_signed_in(&self) -> Result<bool, AccountError> {
        Ok(self.tokens.get_token(TokenKind::Session).await?.is_some())
    }
}

fn require(field: &'static str, value: &str) -> Result<(), AccountError> {
    if value.trim().is_empty() {
        Err(AccountError::MissingField { field })
    } else {
        Ok(())
    }
}

fn validate_credentials(email: &str, password: &str) -> Result<(), AccountError> {
    require("email", email)?;
    require("password", password)?;
    if email.contains('@') {
        Ok(())
    } else {
        Err(AccountError::InvalidEmail)
    }
}

#[derive(Debug, Serialize)]
struct SignInRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
struct SignUpRequest<'a> {
    username: &'a str,
    email: &'a str,
    password: &'a str,
    role: Role,
}

#[derive(Debug, Default, Deserialize)]
struct SignInResponse {
    #[serde(default)]
    token: Option<String>,
    #[serde(default)]
    access_token: Option<String>,
}
