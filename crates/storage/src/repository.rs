use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Which credential a token belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Issued by the accounts backend on sign-in.
    Session,
    /// OAuth access token for the classroom provider.
    Classroom,
}

impl TokenKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Session => "session",
            Self::Classroom => "classroom",
        }
    }

    /// # Errors
    ///
    /// Returns `StorageError::Serialization` for an unknown kind.
    pub fn parse(raw: &str) -> Result<Self, StorageError> {
        match raw {
            "session" => Ok(Self::Session),
            "classroom" => Ok(Self::Classroom),
            other => Err(StorageError::Serialization(format!(
                "invalid token kind: {other}"
            ))),
        }
    }
}

/// A persisted bearer token.
#[derive(Clone, PartialEq, Eq)]
pub struct StoredToken {
    pub kind: TokenKind,
    pub token: String,
    pub updated_at: DateTime<Utc>,
}

impl fmt::Debug for StoredToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoredToken")
            .field("kind", &self.kind)
            .field("token", &"<redacted>")
            .field("updated_at", &self.updated_at)
            .finish()
    }
}

/// Token persistence capability handed to HTTP clients.
#[async_trait]
pub trait TokenStore: Send + Sync {
    /// Fetch the token of the given kind, if one is stored.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on persistence failures.
    async fn get_token(&self, kind: TokenKind) -> Result<Option<StoredToken>, StorageError>;

    /// Store or replace the token of the given kind.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the token cannot be stored.
    async fn save_token(
        &self,
        kind: TokenKind,
        token: &str,
        updated_at: DateTime<Utc>,
    ) -> Result<(), StorageError>;

    /// Remove the token of the given kind. Removing a missing token is not an error.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on persistence failures.
    async fn clear_token(&self, kind: TokenKind) -> Result<(), StorageError>;
}

/// In-memory token store for tests and ephemeral sessions.
#[derive(Clone, Default)]
pub struct InMemoryTokenStore {
    tokens: Arc<Mutex<HashMap<TokenKind, StoredToken>>>,
}

impl InMemoryTokenStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TokenStore for InMemoryTokenStore {
    async fn get_token(&self, kind: TokenKind) -> Result<Option<StoredToken>, StorageError> {
        let guard = self
            .tokens
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.get(&kind).cloned())
    }

    async fn save_token(
        &self,
        kind: TokenKind,
        token: &str,
        updated_at: DateTime<Utc>,
    ) -> Result<(), StorageError> {
        let mut guard = self
            .tokens
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.insert(
            kind,
            StoredToken {
                kind,
                token: token.to_string(),
                updated_at,
            },
        );
        Ok(())
    }

    async fn clear_token(&self, kind: TokenKind) -> Result<(), StorageError> {
        let mut guard = self
            .tokens
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.remove(&kind);
        Ok(())
    }
}

/// Storage handles behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub tokens: Arc<dyn TokenStore>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let tokens: Arc<dyn TokenStore> = Arc::new(InMemoryTokenStore::new());
        Self { tokens }
    }
}
