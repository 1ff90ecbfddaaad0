//! Text-to-byte decoders used by the "copy as" commands.
//!
//! Each decoder ignores characters that cannot be part of its format, so
//! comma, space or newline separated input decodes the same as packed input.

use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig};
use base64::engine::DecodePaddingMode;
use base64::Engine;
use encoding_rs::Encoding;
use once_cell::sync::Lazy;
use percent_encoding::percent_decode;
use regex::Regex;

use super::error::TransformError;
use crate::utils::encoding;

/// Standard alphabet, padding optional.
const BASE64_LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

// `0x` only counts as a prefix when no letter or digit precedes it;
// `_` and other punctuation act as separators.
static ZERO_X_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(^|[^0-9A-Za-z])0[xX]").unwrap());

static BASE64_NOISE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-zA-Z0-9+/=]+").unwrap());

static SLASH_X_ESCAPE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\\x([0-9a-fA-F]{2})").unwrap());

fn hex_value(c: u8) -> u8 {
    match c {
        b'0'..=b'9' => c - b'0',
        b'a'..=b'f' => c - b'a' + 10,
        b'A'..=b'F' => c - b'A' + 10,
        _ => 0,
    }
}

/// The text encoded in the active encoding.
pub fn raw(text: &str, encoding: &'static Encoding) -> Result<Vec<u8>, TransformError> {
    encoding::encode_text(text, encoding)
}

/// Hex digits, in either case. Token-leading `0x` prefixes are dropped and
/// every other non-hex character is ignored.
pub fn hex(text: &str) -> Result<Vec<u8>, TransformError> {
    let stripped = ZERO_X_PREFIX.replace_all(text, "${1} ");
    let digits: Vec<u8> = stripped
        .bytes()
        .filter(|b| b.is_ascii_hexdigit())
        .collect();

    if digits.len() % 2 != 0 {
        return Err(TransformError::OddHexLength(digits.len()));
    }

    Ok(digits
        .chunks(2)
        .map(|pair| hex_value(pair[0]) << 4 | hex_value(pair[1]))
        .collect())
}

/// Standard base64. Characters outside the alphabet are dropped first.
pub fn base64(text: &str) -> Result<Vec<u8>, TransformError> {
    let cleaned = BASE64_NOISE.replace_all(text, "");
    Ok(BASE64_LENIENT.decode(cleaned.as_bytes())?)
}

/// Percent-decoding. Malformed escapes are kept literally and `+` is not a space.
pub fn url(text: &str, encoding: &'static Encoding) -> Result<Vec<u8>, TransformError> {
    let bytes = encoding::encode_text(text, encoding)?;
    Ok(percent_decode(&bytes).collect())
}

/// `\xHH` escapes become single bytes; surrounding text is kept as is.
pub fn slash_x(text: &str, encoding: &'static Encoding) -> Result<Vec<u8>, TransformError> {
    let mut out = Vec::with_capacity(text.len());
    let mut last_end = 0;

    for caps in SLASH_X_ESCAPE.captures_iter(text) {
        let (Some(whole), Some(digits)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        out.extend(encoding::encode_text(&text[last_end..whole.start()], encoding)?);
        let pair = digits.as_str().as_bytes();
        out.push(hex_value(pair[0]) << 4 | hex_value(pair[1]));
        last_end = whole.end();
    }
    out.extend(encoding::encode_text(&text[last_end..], encoding)?);

    Ok(out)
}

/// Binary digits read eight at a time; everything else is ignored.
/// A trailing group shorter than eight bits is read as its own value.
pub fn binary(text: &str) -> Vec<u8> {
    let bits: Vec<u8> = text
        .bytes()
        .filter(|&b| b == b'0' || b == b'1')
        .map(|b| b - b'0')
        .collect();

    bits.chunks(8)
        .map(|group| group.iter().fold(0u8, |acc, bit| acc << 1 | bit))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use encoding_rs::UTF_8 as UTF8;

    #[test]
    fn test_hex_plain() {
        assert_eq!(hex("ABCDEF").unwrap(), vec![0xAB, 0xCD, 0xEF]);
        assert_eq!(hex("abcdef").unwrap(), vec![0xAB, 0xCD, 0xEF]);
    }

    #[test]
    fn test_hex_ignores_separators() {
        assert_eq!(hex("41 42, 43\n44").unwrap(), b"ABCD".to_vec());
        assert_eq!(hex("41:42-43").unwrap(), b"ABC".to_vec());
    }

    #[test]
    fn test_hex_strips_zero_x_prefixes() {
        assert_eq!(hex("0x41, 0x00, 0xAB").unwrap(), vec![0x41, 0x00, 0xAB]);
        assert_eq!(hex("0X4100ab").unwrap(), vec![0x41, 0x00, 0xAB]);
        assert_eq!(hex("{0x01,0x02}").unwrap(), vec![0x01, 0x02]);
    }

    #[test]
    fn test_hex_zero_x_after_underscore() {
        assert_eq!(hex("0x41_0x42").unwrap(), b"AB".to_vec());
        assert_eq!(hex("0x41_0x42_0x43").unwrap(), b"ABC".to_vec());
    }

    #[test]
    fn test_hex_zero_x_inside_token_is_not_a_prefix() {
        // "A0x41": the `0` after `A` is a digit, `x` is noise
        assert_eq!(hex("A0x41").unwrap(), vec![0xA0, 0x41]);
    }

    #[test]
    fn test_hex_odd_length() {
        assert_eq!(hex("ABC"), Err(TransformError::OddHexLength(3)));
    }

    #[test]
    fn test_hex_empty() {
        assert_eq!(hex("").unwrap(), Vec::<u8>::new());
        assert_eq!(hex("xyz").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_base64() {
        assert_eq!(base64("aGVsbG8sIHdvcmxk").unwrap(), b"hello, world".to_vec());
    }

    #[test]
    fn test_base64_ignores_noise_and_missing_padding() {
        assert_eq!(base64("aGVs\nbG8s IHdv\tcmxk").unwrap(), b"hello, world".to_vec());
        assert_eq!(base64("aGk").unwrap(), b"hi".to_vec());
        assert_eq!(base64("aGk=").unwrap(), b"hi".to_vec());
    }

    #[test]
    fn test_base64_invalid() {
        assert!(matches!(base64("a"), Err(TransformError::Base64(_))));
    }

    #[test]
    fn test_url() {
        assert_eq!(
            url("aoeu%AB%CDsnth", UTF8).unwrap(),
            vec![b'a', b'o', b'e', b'u', 0xAB, 0xCD, b's', b'n', b't', b'h']
        );
    }

    #[test]
    fn test_url_keeps_malformed_escapes_and_plus() {
        assert_eq!(url("100%+a%zz%4", UTF8).unwrap(), b"100%+a%zz%4".to_vec());
    }

    #[test]
    fn test_url_non_ascii_uses_encoding() {
        assert_eq!(url("é%00", UTF8).unwrap(), vec![0xC3, 0xA9, 0x00]);
        assert_eq!(
            url("é%00", encoding_rs::WINDOWS_1252).unwrap(),
            vec![0xE9, 0x00]
        );
    }

    #[test]
    fn test_slash_x() {
        assert_eq!(slash_x("\\x41\\xab\\xCD", UTF8).unwrap(), vec![0x41, 0xAB, 0xCD]);
    }

    #[test]
    fn test_slash_x_mixed_text() {
        assert_eq!(
            slash_x("id\\x00=\\x7 \\x41!", UTF8).unwrap(),
            b"id\x00=\\x7 A!".to_vec()
        );
    }

    #[test]
    fn test_binary() {
        assert_eq!(binary("01000001 01000010"), b"AB".to_vec());
        assert_eq!(binary("0100,0001;0100 0010"), b"AB".to_vec());
    }

    #[test]
    fn test_binary_short_trailing_group() {
        assert_eq!(binary("01000001101"), vec![0x41, 0x05]);
    }

    #[test]
    fn test_binary_ignores_other_digits() {
        assert_eq!(binary("2 0 1 9"), vec![0x01]);
    }

    #[test]
    fn test_raw() {
        assert_eq!(raw("hi", UTF8).unwrap(), b"hi".to_vec());
        assert!(raw("日本", encoding_rs::WINDOWS_1252).is_err());
    }
}
