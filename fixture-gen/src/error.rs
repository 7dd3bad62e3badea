//! Error types for fixture generation and digest verification.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Main error type for fixture operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Failed to open an existing file for reading
    #[error("{}: {source}", path.display())]
    OpenInput {
        /// Path to the input file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Failed to create or truncate the destination file
    #[error("{}: {source}", path.display())]
    CreateOutput {
        /// Path to the output file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Failed while writing, flushing or syncing the destination file
    #[error("{}: Write failed: {source}", path.display())]
    Write {
        /// Path to the output file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Failed while reading a file to digest it
    #[error("{}: Read failed: {source}", path.display())]
    Read {
        /// Path to the input file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The operating system entropy source could not seed the generator
    #[error("Secure random source unavailable: {source}")]
    EntropyUnavailable {
        /// Error reported by the random source
        #[source]
        source: rand::Error,
    },

    /// A textual digest could not be parsed
    #[error("Invalid SHA-1 digest {value:?}: {reason}")]
    InvalidDigest {
        /// The rejected input
        value: String,
        /// Why it was rejected
        reason: String,
    },

    /// General I/O error
    #[error("I/O error: {source}")]
    Io {
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },
}

/// Specialized `Result` type for fixture operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns `true` for failures caused by the host environment rather than
    /// the filesystem.
    pub fn is_environment_fault(&self) -> bool {
        matches!(self, Error::EntropyUnavailable { .. })
    }
}

impl From<io::Error> for Error {
    fn from(source: io::Error) -> Self {
        Error::Io { source }
    }
}

impl From<Error> for io::Error {
    fn from(err: Error) -> Self {
        match &err {
            Error::EntropyUnavailable { .. } => io::Error::other(err),
            Error::InvalidDigest { .. } => io::Error::new(io::ErrorKind::InvalidInput, err),
            Error::OpenInput { source, .. }
            | Error::CreateOutput { source, .. }
            | Error::Write { source, .. }
            | Error::Read { source, .. }
            | Error::Io { source } => {
                // Preserve the original error kind
                io::Error::new(source.kind(), err)
            }
        }
    }
}
