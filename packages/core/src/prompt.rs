//! Interactive credential collection, as a capability the host injects.

/// Asks the user one question at a time.
///
/// The protocol client calls this when an operation reaches a host it has no
/// credentials for. Implementations live in the host (an editor input box, a
/// terminal prompt); `None` means the user dismissed the question.
pub trait CredentialPrompt: Send + Sync {
    fn ask(&self, message: &str) -> Option<String>;
}

/// A prompt that never answers.
///
/// For non-interactive hosts: operations against hosts without embedded or
/// cached credentials fail instead of blocking on input.
pub struct NoPrompt;

impl CredentialPrompt for NoPrompt {
    fn ask(&self, _message: &str) -> Option<String> {
        None
    }
}
