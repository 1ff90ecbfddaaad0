//! Byte-to-text encoders used by the "paste as" commands.
//!
//! Every encoder is a pure function of its input. Hex digits are always
//! uppercase.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use encoding_rs::Encoding;
use percent_encoding::{percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::utils::encoding;

const HEX_CHARS: &[u8; 16] = b"0123456789ABCDEF";

/// Characters left untouched by URL encoding: unreserved marks and `/`.
const URL_SAFE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b'/');

fn push_hex(out: &mut String, byte: u8) {
    out.push(HEX_CHARS[(byte >> 4) as usize] as char);
    out.push(HEX_CHARS[(byte & 0x0F) as usize] as char);
}

fn push_escape(out: &mut String, byte: u8) {
    out.push_str("\\x");
    push_hex(out, byte);
}

/// Bytes decoded in the active encoding; malformed sequences become U+FFFD.
pub fn raw(data: &[u8], encoding: &'static Encoding) -> String {
    encoding::decode_lossy(data, encoding)
}

/// Contiguous hex digits, two per byte: `4100AB`.
pub fn hex_pairs(data: &[u8]) -> String {
    let mut out = String::with_capacity(data.len() * 2);
    for &byte in data {
        push_hex(&mut out, byte);
    }
    out
}

/// A single `0x`-prefixed hex blob: `0x4100AB`.
pub fn zero_x_hex(data: &[u8]) -> String {
    format!("0x{}", hex_pairs(data))
}

/// Every byte as a `\xHH` escape.
pub fn slash_x(data: &[u8]) -> String {
    let mut out = String::with_capacity(data.len() * 4);
    for &byte in data {
        push_escape(&mut out, byte);
    }
    out
}

/// Escapes everything except ASCII letters and digits.
pub fn slash_x_alnum(data: &[u8]) -> String {
    escape_unless(data, |b| b.is_ascii_alphanumeric())
}

/// Escapes everything except printable ASCII and ASCII whitespace
/// (space, tab, newline, carriage return, vertical tab, form feed).
pub fn slash_x_printable(data: &[u8]) -> String {
    escape_unless(data, |b| {
        b.is_ascii_graphic() || matches!(b, b' ' | b'\t' | b'\n' | b'\r' | 0x0B | 0x0C)
    })
}

fn escape_unless(data: &[u8], keep: impl Fn(u8) -> bool) -> String {
    let mut out = String::with_capacity(data.len());
    for &byte in data {
        if keep(byte) {
            out.push(byte as char);
        } else {
            push_escape(&mut out, byte);
        }
    }
    out
}

/// Percent-encoding of every byte outside `A-Za-z0-9 - . _ ~ /`.
pub fn url(data: &[u8]) -> String {
    percent_encode(data, URL_SAFE).to_string()
}

/// Standard base64 with padding.
pub fn base64(data: &[u8]) -> String {
    STANDARD.encode(data)
}

/// C-style array body: `0x41, 0x00, 0xAB`.
pub fn c_array(data: &[u8]) -> String {
    data.iter()
        .map(|byte| format!("0x{:02X}", byte))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Space separated 8-bit groups: `01000001 00000000`.
pub fn binary_octets(data: &[u8]) -> String {
    data.iter()
        .map(|byte| format!("{:08b}", byte))
        .collect::<Vec<_>>()
        .join(" ")
}
