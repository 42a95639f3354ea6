//! Error types for sha1lite.

use thiserror::Error;

/// Result type alias for sha1lite operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while hashing or parsing digests.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The message bit length does not fit the 64-bit length field.
    #[error("message of {len} bytes is too long: bit length exceeds 2^64 - 1")]
    MessageTooLong {
        /// Length of the rejected message in bytes.
        len: usize,
    },

    /// Malformed hexadecimal digest string.
    #[error("invalid hex digest: {0:?}")]
    InvalidHex(String),
}
