//! The active text encoding: clipboard text becomes bytes through it, and
//! bytes become text again for the raw paste and the clipboard.

use crate::core::error::TransformError;
use encoding_rs::Encoding;

/// Encodings offered in the encoding selector.
pub const SUPPORTED_LABELS: &[&str] = &[
    "UTF-8",
    "windows-1252",
    "Shift_JIS",
    "EUC-JP",
    "GBK",
    "Big5",
    "EUC-KR",
    "KOI8-R",
];

/// Resolve an encoding label, defaulting to UTF-8 if the label is unknown.
///
/// Decode-only encodings (UTF-16, replacement) resolve to their output
/// encoding so that text and bytes round-trip through the same encoding.
pub fn resolve(label: &str) -> &'static Encoding {
    Encoding::for_label(label.trim().as_bytes())
        .unwrap_or(encoding_rs::UTF_8)
        .output_encoding()
}

/// Decode bytes, replacing malformed sequences with U+FFFD.
pub fn decode_lossy(data: &[u8], encoding: &'static Encoding) -> String {
    let (decoded, _) = encoding.decode_without_bom_handling(data);
    decoded.into_owned()
}

/// Decode bytes, returning `None` if any sequence is malformed.
pub fn decode_strict(data: &[u8], encoding: &'static Encoding) -> Option<String> {
    encoding
        .decode_without_bom_handling_and_without_replacement(data)
        .map(|text| text.into_owned())
}

/// Encode text in the given encoding.
pub fn encode_text(text: &str, encoding: &'static Encoding) -> Result<Vec<u8>, TransformError> {
    let (encoded, _, had_errors) = encoding.encode(text);
    if had_errors {
        return Err(TransformError::Unencodable {
            encoding: encoding.name(),
        });
    }
    Ok(encoded.into_owned())
}
