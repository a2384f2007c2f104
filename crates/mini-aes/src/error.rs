//! Error and result types.

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Buffer-size contract violations.
///
/// The transforms themselves are total; these are only produced by the
/// slice-based entry points, before any output is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A key was not exactly 16 bytes.
    #[error("invalid key size: expected {expected} bytes, got {actual}")]
    InvalidKeySize {
        /// Required length.
        expected: usize,
        /// Length supplied by the caller.
        actual: usize,
    },
    /// A block, batch or schedule buffer had the wrong length.
    #[error("invalid input size: expected {expected} bytes, got {actual}")]
    InvalidInputSize {
        /// Required length.
        expected: usize,
        /// Length supplied by the caller.
        actual: usize,
    },
}
