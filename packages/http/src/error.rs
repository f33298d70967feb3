//! Transport errors and the status-code classifier.

use repofs_core::FsError;

use crate::types::HttpResponse;

/// Errors below the filesystem taxonomy: the transport and codec layer.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid header name: {0}")]
    InvalidHeaderName(#[from] http::header::InvalidHeaderName),

    #[error("invalid header value: {0}")]
    InvalidHeaderValue(#[from] http::header::InvalidHeaderValue),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("transport failed: {message}")]
    Transport { message: String },
}

impl From<Error> for FsError {
    fn from(error: Error) -> Self {
        FsError::unavailable(error.to_string())
    }
}

/// Map a response status onto the filesystem error taxonomy.
///
/// Applied to every non-2xx response before any further processing:
/// 5xx is `Unavailable` with the body as detail, 404 is `NotFound`, any
/// other 4xx is `NoPermissions` (auth failures, anti-forgery rejection, and
/// generic client errors - the protocol does not disambiguate further).
/// Everything below 400 passes.
pub fn classify(path: &str, response: &HttpResponse) -> Result<(), FsError> {
    if response.status >= 500 {
        return Err(FsError::unavailable(response.text()));
    }
    if response.status == 404 {
        return Err(FsError::not_found(path));
    }
    if response.status >= 400 {
        return Err(FsError::no_permissions(response.text()));
    }
    Ok(())
}
