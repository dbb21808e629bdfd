use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, RequestBuilder};
use storage::repository::{StorageError, TokenKind, TokenStore};

/// Build the shared HTTP client.
pub(crate) fn build_client(timeout: Duration) -> Result<Client, reqwest::Error> {
    Client::builder().timeout(timeout).build()
}

/// Join a base URL and a path without doubling slashes.
pub(crate) fn endpoint(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Attach the stored bearer token of `kind`, if any.
pub(crate) async fn with_bearer(
    request: RequestBuilder,
    tokens: &Arc<dyn TokenStore>,
    kind: TokenKind,
) -> Result<RequestBuilder, StorageError> {
    Ok(match tokens.get_token(kind).await? {
        Some(stored) => request.bearer_auth(stored.token),
        None => request,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_cleanly() {
        assert_eq!(endpoint("http://x/", "/generate"), "http://x/generate");
        assert_eq!(endpoint("http://x", "users/signin/"), "http://x/users/signin/");
    }
}
