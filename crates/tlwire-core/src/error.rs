//! Shared error type across tlwire crates.

use thiserror::Error;

/// Stable error kinds (assert on these, not on messages).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A byte string, vector or frame declares a length the stream cannot hold.
    MalformedLength,
    /// A constructor tag has no registry entry.
    UnknownTag,
    /// A context-typed field carried the wrong constructor.
    UnexpectedTag,
    /// Gzip payload is not valid compressed data.
    Decompression,
    /// Integer does not fit the requested width/signedness, or a size limit
    /// was exceeded.
    Range,
    /// Polymorphic fields nested past the registry's depth limit.
    NestingDepth,
    /// Stream ended before a field was fully consumed.
    ShortRead,
    /// Registry or qualified name misuse.
    Registry,
    /// Object has no wire representation.
    Unsupported,
    /// Decrypt capability failed.
    Decrypt,
    /// Invalid configuration.
    Config,
    /// Transport I/O failure.
    Io,
}

impl ErrorKind {
    /// String representation used by test vectors and logs.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::MalformedLength => "MALFORMED_LENGTH",
            ErrorKind::UnknownTag => "UNKNOWN_TAG",
            ErrorKind::UnexpectedTag => "UNEXPECTED_TAG",
            ErrorKind::Decompression => "DECOMPRESSION",
            ErrorKind::Range => "RANGE",
            ErrorKind::NestingDepth => "NESTING_DEPTH",
            ErrorKind::ShortRead => "SHORT_READ",
            ErrorKind::Registry => "REGISTRY",
            ErrorKind::Unsupported => "UNSUPPORTED",
            ErrorKind::Decrypt => "DECRYPT",
            ErrorKind::Config => "CONFIG",
            ErrorKind::Io => "IO",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, TlError>;

/// Unified error type used by the codec and the session boundary.
#[derive(Debug, Error)]
pub enum TlError {
    #[error("malformed length in {field}: {msg}")]
    MalformedLength { field: &'static str, msg: String },
    #[error("unknown constructor tag {0:#010x}")]
    UnknownTag(u32),
    #[error("unexpected constructor {found:#010x} for {expected}")]
    UnexpectedTag { expected: &'static str, found: u32 },
    #[error("gzip decompression failed: {0}")]
    Decompression(#[source] std::io::Error),
    #[error("range violation in {field}: {msg}")]
    RangeViolation { field: &'static str, msg: String },
    #[error("objects nested deeper than {limit} levels")]
    NestingTooDeep { limit: usize },
    #[error("short read in {field}: need {needed} bytes, {remaining} remaining")]
    ShortRead {
        field: &'static str,
        needed: usize,
        remaining: usize,
    },
    #[error("registry: {0}")]
    Registry(String),
    #[error("{0} has no wire encoding")]
    Unsupported(&'static str),
    #[error("decrypt failed: {0}")]
    Decrypt(String),
    #[error("config: {0}")]
    Config(String),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

impl TlError {
    /// Map an error to its stable kind.
    pub fn kind(&self) -> ErrorKind {
        match self {
            TlError::MalformedLength { .. } => ErrorKind::MalformedLength,
            TlError::UnknownTag(_) => ErrorKind::UnknownTag,
            TlError::UnexpectedTag { .. } => ErrorKind::UnexpectedTag,
            TlError::Decompression(_) => ErrorKind::Decompression,
            TlError::RangeViolation { .. } => ErrorKind::Range,
            TlError::NestingTooDeep { .. } => ErrorKind::NestingDepth,
            TlError::ShortRead { .. } => ErrorKind::ShortRead,
            TlError::Registry(_) => ErrorKind::Registry,
            TlError::Unsupported(_) => ErrorKind::Unsupported,
            TlError::Decrypt(_) => ErrorKind::Decrypt,
            TlError::Config(_) => ErrorKind::Config,
            TlError::Io(_) => ErrorKind::Io,
        }
    }

    pub fn malformed(field: &'static str, msg: impl Into<String>) -> Self {
        TlError::MalformedLength {
            field,
            msg: msg.into(),
        }
    }

    pub fn range(field: &'static str, msg: impl Into<String>) -> Self {
        TlError::RangeViolation {
            field,
            msg: msg.into(),
        }
    }
}
