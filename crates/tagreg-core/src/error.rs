//! Shared error type across tagreg crates.

use thiserror::Error;

/// Stable error codes (used in CLI output and by callers matching on kind).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Tag rejected at registration.
    InvalidTag,
    /// Manifest could not be parsed or failed validation.
    BadManifest,
    /// Manifest declares a version this build does not understand.
    UnsupportedVersion,
    /// Reading the manifest failed.
    Io,
    /// Internal failure (e.g. output encoding).
    Internal,
}

impl ErrorCode {
    /// String representation used in logs and CLI output.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::InvalidTag => "INVALID_TAG",
            ErrorCode::BadManifest => "BAD_MANIFEST",
            ErrorCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ErrorCode::Io => "IO",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, RegistryError>;

/// Unified error type used by core and loader.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("invalid tag for entity {entity}: tag name must not be empty")]
    InvalidTag { entity: String },
    #[error("bad manifest: {0}")]
    BadManifest(String),
    #[error("unsupported manifest version: {0}")]
    UnsupportedVersion(u32),
    #[error("io: {0}")]
    Io(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl RegistryError {
    /// Map the error to its stable code.
    pub fn code(&self) -> ErrorCode {
        match self {
            RegistryError::InvalidTag { .. } => ErrorCode::InvalidTag,
            RegistryError::BadManifest(_) => ErrorCode::BadManifest,
            RegistryError::UnsupportedVersion(_) => ErrorCode::UnsupportedVersion,
            RegistryError::Io(_) => ErrorCode::Io,
            RegistryError::Internal(_) => ErrorCode::Internal,
        }
    }
}
