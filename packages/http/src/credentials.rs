//! Host-keyed credential cache.
//!
//! One credential per host at a time, created on first access - from fields
//! embedded in the address when both are present, otherwise through the
//! injected [`CredentialPrompt`]. Entries live for the process lifetime.

use std::collections::HashMap;
use std::sync::Mutex;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use repofs_core::{CredentialPrompt, FsError};

use crate::token::TokenState;

/// A username/password pair with its cached anti-forgery token.
///
/// The token belongs to exactly this credential: replacing the credential
/// for a host discards the token with it.
#[derive(Debug, Clone)]
pub struct Credential {
    pub username: String,
    pub password: String,
    pub(crate) token: TokenState,
}

impl Credential {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            token: TokenState::NoToken,
        }
    }

    /// Value for the `authorization` request header.
    pub fn basic_authorization(&self) -> String {
        let raw = format!("{}:{}", self.username, self.password);
        format!("Basic {}", STANDARD.encode(raw))
    }
}

/// Host-keyed credential cache shared by every operation of a client.
pub struct CredentialStore {
    prompt: Box<dyn CredentialPrompt>,
    entries: Mutex<HashMap<String, Credential>>,
}

impl CredentialStore {
    pub fn new(prompt: Box<dyn CredentialPrompt>) -> Self {
        Self {
            prompt,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Resolve the credential for a host.
    ///
    /// Cached entry if present; else embedded fields when both are given;
    /// else the prompt collaborator is asked for username and password.
    /// A dismissed prompt aborts with `Unavailable` - never silently
    /// skipped.
    pub fn resolve(
        &self,
        host: &str,
        username: Option<&str>,
        password: Option<&str>,
    ) -> Result<Credential, FsError> {
        if let Some(entry) = self.entries.lock().unwrap().get(host) {
            return Ok(entry.clone());
        }

        if let (Some(user), Some(pass)) = (username, password) {
            return Ok(self.insert(host, Credential::new(user, pass)));
        }

        let user = self.prompt.ask(&format!("Username for {}: ", host));
        let pass = self.prompt.ask(&format!("Password for {}: ", host));

        match (user, pass) {
            (Some(user), Some(pass)) => Ok(self.insert(host, Credential::new(user, pass))),
            _ => Err(FsError::unavailable(format!(
                "credentials for {} are required",
                host
            ))),
        }
    }

    // Concurrent first accesses to one host race here; last write wins.
    fn insert(&self, host: &str, credential: Credential) -> Credential {
        log::debug!("caching credential for {}", host);
        self.entries
            .lock()
            .unwrap()
            .insert(host.to_string(), credential.clone());
        credential
    }

    pub(crate) fn token(&self, host: &str) -> TokenState {
        self.entries
            .lock()
            .unwrap()
            .get(host)
            .map(|entry| entry.token.clone())
            .unwrap_or_default()
    }

    pub(crate) fn store_token(&self, host: &str, token: String) {
        if let Some(entry) = self.entries.lock().unwrap().get_mut(host) {
            entry.token = TokenState::Valid(token);
        }
    }

    pub(crate) fn reject_token(&self, host: &str) {
        if let Some(entry) = self.entries.lock().unwrap().get_mut(host) {
            entry.token = TokenState::Rejected;
        }
    }
}
