//! Error types for pstore-travis

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for pstore-travis operations
#[derive(Error, Debug, Diagnostic)]
pub enum Error {
    /// The document could not be serialized
    #[error("Serialization failed: {0}")]
    #[diagnostic(code(pstore_travis::serialization))]
    Serialization(String),

    /// Writing the rendered document failed
    #[error("I/O error while {operation}: {source}")]
    #[diagnostic(code(pstore_travis::io))]
    Io {
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
        /// Description of the operation that failed
        operation: String,
    },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(source: std::io::Error, operation: impl Into<String>) -> Self {
        Self::Io {
            source,
            operation: operation.into(),
        }
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

/// Result type for pstore-travis operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type returned by emitters
pub type EmitterError = Error;

/// Result type for emitter operations
pub type EmitterResult<T> = Result<T>;
