//! Catalogue of "copy as" and "paste as" commands.

use std::fmt;
use std::str::FromStr;

use encoding_rs::Encoding;
use serde::{Deserialize, Serialize};

use super::decoders;
use super::encoders;
use super::error::TransformError;

/// Formats a selection can be decoded from before it is copied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CopyFormat {
    Raw,
    #[default]
    Hex,
    Base64,
    UrlEncode,
    SlashX,
    Binary,
}

impl CopyFormat {
    pub const ALL: [CopyFormat; 6] = [
        CopyFormat::Raw,
        CopyFormat::Hex,
        CopyFormat::Base64,
        CopyFormat::UrlEncode,
        CopyFormat::SlashX,
        CopyFormat::Binary,
    ];

    /// Command name, as used in the config file.
    pub fn name(&self) -> &'static str {
        match self {
            CopyFormat::Raw => "raw",
            CopyFormat::Hex => "hex",
            CopyFormat::Base64 => "base64",
            CopyFormat::UrlEncode => "url_encode",
            CopyFormat::SlashX => "slash_x",
            CopyFormat::Binary => "binary",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CopyFormat::Raw => "Raw",
            CopyFormat::Hex => "Hex",
            CopyFormat::Base64 => "Base64",
            CopyFormat::UrlEncode => "URL Decode",
            CopyFormat::SlashX => "\\x Escapes",
            CopyFormat::Binary => "Binary",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            CopyFormat::Raw => "Copy the selection unchanged",
            CopyFormat::Hex => "Hex pairs (non-hex characters and 0x prefixes are ignored)",
            CopyFormat::Base64 => "Base64 (characters outside the alphabet are ignored)",
            CopyFormat::UrlEncode => "Percent-encoded text",
            CopyFormat::SlashX => "\\x?? escapes in text",
            CopyFormat::Binary => "Binary octets (non-binary characters are ignored)",
        }
    }

    /// Decode a selection into the bytes to copy.
    pub fn decode(&self, text: &str, encoding: &'static Encoding) -> Result<Vec<u8>, TransformError> {
        match self {
            CopyFormat::Raw => decoders::raw(text, encoding),
            CopyFormat::Hex => decoders::hex(text),
            CopyFormat::Base64 => decoders::base64(text),
            CopyFormat::UrlEncode => decoders::url(text, encoding),
            CopyFormat::SlashX => decoders::slash_x(text, encoding),
            CopyFormat::Binary => Ok(decoders::binary(text)),
        }
    }
}

impl fmt::Display for CopyFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CopyFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CopyFormat::ALL
            .into_iter()
            .find(|format| format.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown copy format: {}", s))
    }
}

/// Formats the clipboard bytes can be rendered as when pasted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PasteFormat {
    Raw,
    ZeroXHex,
    #[default]
    HexPairs,
    SlashX,
    SlashXAlnum,
    SlashXPrintable,
    UrlEncode,
    Base64,
    CArray,
    Binary,
}

impl PasteFormat {
    pub const ALL: [PasteFormat; 10] = [
        PasteFormat::Raw,
        PasteFormat::ZeroXHex,
        PasteFormat::HexPairs,
        PasteFormat::SlashX,
        PasteFormat::SlashXAlnum,
        PasteFormat::SlashXPrintable,
        PasteFormat::UrlEncode,
        PasteFormat::Base64,
        PasteFormat::CArray,
        PasteFormat::Binary,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            PasteFormat::Raw => "raw",
            PasteFormat::ZeroXHex => "zero_x_hex",
            PasteFormat::HexPairs => "hex_pairs",
            PasteFormat::SlashX => "slash_x",
            PasteFormat::SlashXAlnum => "slash_x_alnum",
            PasteFormat::SlashXPrintable => "slash_x_printable",
            PasteFormat::UrlEncode => "url_encode",
            PasteFormat::Base64 => "base64",
            PasteFormat::CArray => "c_array",
            PasteFormat::Binary => "binary",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PasteFormat::Raw => "Raw",
            PasteFormat::ZeroXHex => "0x Hex",
            PasteFormat::HexPairs => "Hex Pairs",
            PasteFormat::SlashX => "\\x Escapes",
            PasteFormat::SlashXAlnum => "\\x Escapes (alnum safe)",
            PasteFormat::SlashXPrintable => "\\x Escapes (printable safe)",
            PasteFormat::UrlEncode => "URL Encode",
            PasteFormat::Base64 => "Base64",
            PasteFormat::CArray => "C Array",
            PasteFormat::Binary => "Binary",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            PasteFormat::Raw => "Paste the clipboard unchanged",
            PasteFormat::ZeroXHex => "0x??????",
            PasteFormat::HexPairs => "????????",
            PasteFormat::SlashX => "\\x??\\x??\\x??",
            PasteFormat::SlashXAlnum => "\\x?? escape anything non-alphanumeric",
            PasteFormat::SlashXPrintable => "\\x?? escape anything non-printable",
            PasteFormat::UrlEncode => "Percent-encode everything but unreserved characters",
            PasteFormat::Base64 => "Standard base64 with padding",
            PasteFormat::CArray => "0x??, 0x??, 0x?? C-style array",
            PasteFormat::Binary => "???????? ???????? binary octets",
        }
    }

    /// Render clipboard bytes as text.
    pub fn encode(&self, data: &[u8], encoding: &'static Encoding) -> String {
        match self {
            PasteFormat::Raw => encoders::raw(data, encoding),
            PasteFormat::ZeroXHex => encoders::zero_x_hex(data),
            PasteFormat::HexPairs => encoders::hex_pairs(data),
            PasteFormat::SlashX => encoders::slash_x(data),
            PasteFormat::SlashXAlnum => encoders::slash_x_alnum(data),
            PasteFormat::SlashXPrintable => encoders::slash_x_printable(data),
            PasteFormat::UrlEncode => encoders::url(data),
            PasteFormat::Base64 => encoders::base64(data),
            PasteFormat::CArray => encoders::c_array(data),
            PasteFormat::Binary => encoders::binary_octets(data),
        }
    }
}

impl fmt::Display for PasteFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PasteFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PasteFormat::ALL
            .into_iter()
            .find(|format| format.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown paste format: {}", s))
    }
}
