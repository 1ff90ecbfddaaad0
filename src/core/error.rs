//! Error type shared by the converters and the clipboard harness.

use thiserror::Error;

/// Errors raised while transforming between text and bytes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransformError {
    /// Hex input reduced to an odd number of digits.
    #[error("odd number of hex digits ({0})")]
    OddHexLength(usize),

    #[error("invalid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    /// Text contains characters with no mapping in the active encoding.
    #[error("text cannot be represented in {encoding}")]
    Unencodable { encoding: &'static str },

    #[error("clipboard error: {0}")]
    Clipboard(String),
}
