//! Anti-forgery token lifecycle.
//!
//! The repository requires an `x-csrf-token` header on every authenticated
//! call. Tokens are fetched with a `GET` against the file-API root carrying
//! `x-csrf-token: fetch`, cached per host inside the credential entry, and
//! refreshed reactively: the service never advertises expiry, so the only
//! refresh signals are a missing/placeholder/rejected cached value or a
//! later 403 token-required response.

use std::sync::Arc;

use http::header::AUTHORIZATION;

use repofs_core::FsError;

use crate::credentials::CredentialStore;
use crate::error::classify;
use crate::executor::HttpExecutor;
use crate::types::HttpRequest;

/// Request and response header carrying the token.
pub const CSRF_HEADER: &str = "x-csrf-token";

/// Request header value asking the service to issue a token.
pub const TOKEN_FETCH: &str = "fetch";

/// Response header value marking a token-required rejection.
pub const TOKEN_REQUIRED: &str = "required";

/// Cached value some services hand out before authentication completes;
/// treated as not-yet-real.
pub const TOKEN_PLACEHOLDER: &str = "unsafe";

/// Token cache state for one host/credential.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TokenState {
    /// No token fetched yet.
    #[default]
    NoToken,
    /// Cached token, sent on every call until rejected.
    Valid(String),
    /// The service rejected the token; the next request refreshes first.
    Rejected,
}

impl TokenState {
    /// Whether the next token request must hit the server.
    pub fn needs_refresh(&self, force: bool) -> bool {
        if force {
            return true;
        }
        match self {
            TokenState::NoToken | TokenState::Rejected => true,
            TokenState::Valid(token) => token == TOKEN_PLACEHOLDER,
        }
    }
}

/// Per-host token manager over the shared credential store.
pub struct TokenManager {
    credentials: Arc<CredentialStore>,
}

impl TokenManager {
    pub fn new(credentials: Arc<CredentialStore>) -> Self {
        Self { credentials }
    }

    /// Current token for `host`, refreshing when the cached state demands it
    /// or `force_refresh` is set. `root_url` is the file-API root the fetch
    /// is issued against.
    pub fn token(
        &self,
        executor: &dyn HttpExecutor,
        root_url: &str,
        host: &str,
        force_refresh: bool,
    ) -> Result<String, FsError> {
        let state = self.credentials.token(host);
        if !state.needs_refresh(force_refresh) {
            if let TokenState::Valid(token) = state {
                return Ok(token);
            }
        }
        self.refresh(executor, root_url, host)
    }

    /// Mark the cached token rejected; the next `token` call refreshes.
    pub fn reject(&self, host: &str) {
        log::debug!("csrf token for {} rejected", host);
        self.credentials.reject_token(host);
    }

    fn refresh(
        &self,
        executor: &dyn HttpExecutor,
        root_url: &str,
        host: &str,
    ) -> Result<String, FsError> {
        let credential = self.credentials.resolve(host, None, None)?;

        log::debug!("fetching csrf token from {}", host);
        let request = HttpRequest::get(root_url)
            .with_header(AUTHORIZATION.as_str(), credential.basic_authorization())
            .with_header(CSRF_HEADER, TOKEN_FETCH);

        let response = executor.execute(&request).map_err(FsError::from)?;

        match response.header(CSRF_HEADER) {
            Some(token) if !token.is_empty() => {
                let token = token.to_string();
                self.credentials.store_token(host, token.clone());
                Ok(token)
            }
            _ => {
                log::warn!(
                    "token fetch from {} returned status {} without a token",
                    host,
                    response.status
                );
                self.credentials.reject_token(host);
                classify("/", &response)?;
                // a 2xx without the header is still a failure, never an
                // empty-token fallback
                Err(FsError::unavailable(
                    "token fetch response carried no x-csrf-token header",
                ))
            }
        }
    }
}
