use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::Row;

use super::SqliteRepository;
use crate::repository::{StorageError, StoredToken, TokenKind, TokenStore};

fn ser<E: core::fmt::Display>(e: E) -> StorageError {
    StorageError::Serialization(e.to_string())
}

fn conn<E: core::fmt::Display>(e: E) -> StorageError {
    StorageError::Connection(e.to_string())
}

#[async_trait]
impl TokenStore for SqliteRepository {
    async fn get_token(&self, kind: TokenKind) -> Result<Option<StoredToken>, StorageError> {
        let row = sqlx::query(
            r"
            SELECT kind, token, updated_at
            FROM auth_tokens
            WHERE kind = ?1
            ",
        )
        .bind(kind.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(conn)?;

        let Some(row) = row else {
            return Ok(None);
        };

        let stored_kind = TokenKind::parse(&row.try_get::<String, _>("kind").map_err(ser)?)?;
        let token: String = row.try_get("token").map_err(ser)?;
        let updated_at: DateTime<Utc> = row.try_get("updated_at").map_err(ser)?;

        Ok(Some(StoredToken {
            kind: stored_kind,
            token,
            updated_at,
        }))
    }

    async fn save_token(
        &self,
        kind: TokenKind,
        token: &str,
        updated_at: DateTime<Utc>,
    ) -> Result<(), StorageError> {
        sqlx::query(
            r"
            INSERT INTO auth_tokens (kind, token, updated_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(kind) DO UPDATE SET
                token = excluded.token,
                updated_at = excluded.updated_at
            ",
        )
        .bind(kind.as_str())
        .bind(token)
        .bind(updated_at)
        .execute(&self.pool)
        .await
        .map_err(conn)?;

        Ok(())
    }

    async fn clear_token(&self, kind: TokenKind) -> Result<(), StorageError> {
        sqlx::query("DELETE FROM auth_tokens WHERE kind = ?1")
            .bind(kind.as_str())
            .execute(&self.pool)
            .await
            .map_err(conn)?;
        Ok(())
    }
}
