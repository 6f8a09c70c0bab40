//! Error types for the pinpoint library.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all pinpoint operations.
///
/// Every variant describes a recoverable condition: front ends surface it and
/// return to the last stable state.
#[derive(Error, Debug)]
pub enum PinpointError {
    /// Invalid input validation errors. Raised locally, never after a remote
    /// call has been issued.
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Network, transport or remote API failure
    #[error("Remote service unavailable: {message}")]
    RemoteUnavailable {
        message: String,
        #[source]
        source: Option<reqwest::Error>,
    },
    /// The remote store does not know the requested resource
    #[error("{resource} with ID {id} not found")]
    NotFound { resource: &'static str, id: u64 },
    /// The geocoding service returned zero matches
    #[error("No match found for '{query}'")]
    NoMatch { query: String },
    /// A previous submission of the same operation is still in flight
    #[error("{operation} is already in progress")]
    Busy { operation: &'static str },
    /// A commit or edit was attempted with no open edit session
    #[error("No point is being edited")]
    NoOpenSession,
    /// "Add as point" was requested with no active search result
    #[error("There is no search result to add")]
    NoSearchResult,
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating remote errors with optional context.
pub struct RemoteErrorBuilder {
    message: String,
}

impl RemoteErrorBuilder {
    /// Create a new remote error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given transport source.
    pub fn with_source(self, source: reqwest::Error) -> PinpointError {
        PinpointError::RemoteUnavailable {
            message: self.message,
            source: Some(source),
        }
    }

    /// Build the error without an underlying transport error, e.g. for an
    /// unexpected HTTP status.
    pub fn without_source(self) -> PinpointError {
        PinpointError::RemoteUnavailable {
            message: self.message,
            source: None,
        }
    }
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> PinpointError {
        PinpointError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl PinpointError {
    /// Creates a builder for remote errors.
    pub fn remote(message: impl Into<String>) -> RemoteErrorBuilder {
        RemoteErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Returns true for errors raised before any remote call was made.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }

    /// Returns true for errors reported by (or on the way to) the remote
    /// store.
    pub fn is_remote(&self) -> bool {
        matches!(self, Self::RemoteUnavailable { .. } | Self::NotFound { .. })
    }
}

/// Extension trait mapping transport errors into [`PinpointError`] with a
/// message.
pub trait RemoteResultExt<T> {
    /// Map transport errors with a message.
    fn remote_context(self, message: &str) -> Result<T>;

    /// Map transport errors with a lazily built message.
    fn remote_context_lazy<C, F>(self, f: F) -> Result<T>
    where
        C: fmt::Display,
        F: FnOnce() -> C;
}

impl<T> RemoteResultExt<T> for std::result::Result<T, reqwest::Error> {
    fn remote_context(self, message: &str) -> Result<T> {
        self.map_err(|e| PinpointError::remote(message).with_source(e))
    }

    fn remote_context_lazy<C, F>(self, f: F) -> Result<T>
    where
        C: fmt::Display,
        F: FnOnce() -> C,
    {
        self.map_err(|e| PinpointError::remote(f().to_string()).with_source(e))
    }
}

/// Ensure a user supplied name is non-empty once trimmed, returning the
/// trimmed form.
pub(crate) fn require_name<'a>(field: &str, value: &'a str) -> Result<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(PinpointError::invalid_input(field).with_reason("must not be empty"));
    }
    Ok(trimmed)
}

/// Result type alias for pinpoint operations
pub type Result<T> = std::result::Result<T, PinpointError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_name_trims() {
        assert_eq!(require_name("name", "  Praia  ").unwrap(), "Praia");
    }

    #[test]
    fn test_require_name_rejects_whitespace() {
        let err = require_name("name", " \t\n").unwrap_err();
        assert!(err.is_validation());
        assert_eq!(
            err.to_string(),
            "Invalid input for field 'name': must not be empty"
        );
    }

    #[test]
    fn test_error_classification() {
        let missing = PinpointError::NotFound {
            resource: "Point",
            id: 7,
        };
        assert!(missing.is_remote());
        assert_eq!(missing.to_string(), "Point with ID 7 not found");

        let remote = PinpointError::remote("GET /maps returned 500").without_source();
        assert!(remote.is_remote());
        assert!(!remote.is_validation());

        let no_match = PinpointError::NoMatch {
            query: "Atlantis".to_string(),
        };
        assert!(!no_match.is_remote());
        assert_eq!(no_match.to_string(), "No match found for 'Atlantis'");
    }
}
