//! Error taxonomy shared by every component.
//!
//! Library code never terminates the process. Each failure is returned as an
//! [`Error`] and the binaries decide the exit status from [`Error::kind`].

use std::io;
use std::path::PathBuf;

/// Result alias used across the library.
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("i/o error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid hex encoding: {0}")]
    Encoding(String),

    #[error("invalid key length: expected {expected} bytes, got {actual}")]
    InvalidKeyLength { expected: usize, actual: usize },

    #[error("invalid iv length: expected {expected} bytes, got {actual}")]
    InvalidIvLength { expected: usize, actual: usize },

    #[error("unsupported mode: {0}")]
    UnsupportedMode(String),

    #[error("invalid key format: {0}")]
    KeyFormat(String),

    #[error("message too long: at most {max} bytes fit this key, got {actual}")]
    MessageTooLong { max: usize, actual: usize },

    #[error("{0}")]
    Crypto(String),

    #[error("provider failure: {0}")]
    Provider(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Coarse grouping of [`Error`] variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// File could not be opened, read or written.
    Io,
    /// Bad input from the caller: mode, lengths, encodings, arguments.
    Usage,
    /// The cipher rejected the data.
    Crypto,
    /// Randomness or key generation failed.
    Provider,
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Io { .. } => ErrorKind::Io,
            Self::Encoding(_)
            | Self::InvalidKeyLength { .. }
            | Self::InvalidIvLength { .. }
            | Self::UnsupportedMode(_)
            | Self::KeyFormat(_)
            | Self::MessageTooLong { .. }
            | Self::InvalidArgument(_) => ErrorKind::Usage,
            Self::Crypto(_) => ErrorKind::Crypto,
            Self::Provider(_) => ErrorKind::Provider,
        }
    }
}

impl From<hex::FromHexError> for Error {
    fn from(err: hex::FromHexError) -> Self {
        Self::Encoding(err.to_string())
    }
}
