//! The filesystem error taxonomy.

/// Errors surfaced by filesystem operations.
///
/// Backends classify; rendering and user messaging are the host's
/// responsibility. All failures surface synchronously to the caller of the
/// operation.
#[derive(thiserror::Error, Debug)]
pub enum FsError {
    /// The address could not be parsed as a network locator with host and path.
    #[error("invalid address: {message}")]
    InvalidAddress { message: String },

    /// The backing service cannot serve the operation (server errors,
    /// transport failures, missing credentials).
    #[error("unavailable: {detail}")]
    Unavailable { detail: String },

    /// The resource does not exist.
    #[error("file not found: {path}")]
    NotFound { path: String },

    /// The service rejected the operation (auth failures, anti-forgery
    /// rejection, and generic client errors - the protocol does not
    /// disambiguate further).
    #[error("no permissions: {detail}")]
    NoPermissions { detail: String },

    /// A file operation was applied to a directory.
    #[error("file is a directory: {path}")]
    FileIsADirectory { path: String },

    /// A directory operation was applied to a file.
    #[error("file is not a directory: {path}")]
    FileNotADirectory { path: String },

    /// The target already exists and overwriting was not requested.
    #[error("file exists: {path}")]
    FileExists { path: String },
}

impl FsError {
    pub fn invalid_address(message: impl Into<String>) -> Self {
        FsError::InvalidAddress {
            message: message.into(),
        }
    }

    pub fn unavailable(detail: impl Into<String>) -> Self {
        FsError::Unavailable {
            detail: detail.into(),
        }
    }

    pub fn not_found(path: impl Into<String>) -> Self {
        FsError::NotFound { path: path.into() }
    }

    pub fn no_permissions(detail: impl Into<String>) -> Self {
        FsError::NoPermissions {
            detail: detail.into(),
        }
    }

    pub fn file_is_a_directory(path: impl Into<String>) -> Self {
        FsError::FileIsADirectory { path: path.into() }
    }

    pub fn file_not_a_directory(path: impl Into<String>) -> Self {
        FsError::FileNotADirectory { path: path.into() }
    }

    pub fn file_exists(path: impl Into<String>) -> Self {
        FsError::FileExists { path: path.into() }
    }
}
