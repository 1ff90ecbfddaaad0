//! Processor that runs a format over the selection or the clipboard.
//!
//! Combines the converters with a clipboard backend. Bytes the clipboard
//! cannot carry are held in a scratchpad and handed to the next paste, once.
//! That covers embedded NULs and bytes that do not survive a decode and
//! re-encode in the active encoding unchanged.

use encoding_rs::Encoding;

use super::error::TransformError;
use super::formats::{CopyFormat, PasteFormat};
use crate::utils::clipboard::ClipboardBackend;
use crate::utils::encoding;

/// What a copy command did with the decoded bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    /// Nothing selected, or the selection decoded to nothing.
    Skipped,
    /// The bytes were placed on the system clipboard as text.
    Copied { bytes: usize },
    /// The bytes were kept in the scratchpad for the next paste.
    Scratchpad { bytes: usize },
}

/// Runs copy/paste transforms against a clipboard backend.
pub struct ClipProcessor<C: ClipboardBackend> {
    clipboard: C,
    encoding: &'static Encoding,
    scratchpad: Option<Vec<u8>>,
}

impl<C: ClipboardBackend> ClipProcessor<C> {
    /// Create a processor using the given encoding label (UTF-8 if unknown).
    pub fn new(clipboard: C, encoding_label: &str) -> Self {
        Self {
            clipboard,
            encoding: encoding::resolve(encoding_label),
            scratchpad: None,
        }
    }

    /// Decode the selection and copy the resulting bytes.
    pub fn copy_as(
        &mut self,
        selection: &str,
        format: CopyFormat,
    ) -> Result<CopyOutcome, TransformError> {
        self.scratchpad = None;

        if selection.is_empty() {
            return Ok(CopyOutcome::Skipped);
        }

        let bytes = format.decode(selection, self.encoding)?;
        tracing::debug!(
            format = format.name(),
            input_len = selection.len(),
            bytes = bytes.len(),
            "Decoded selection"
        );

        if bytes.is_empty() {
            return Ok(CopyOutcome::Skipped);
        }

        let len = bytes.len();
        let text = encoding::decode_strict(&bytes, self.encoding)
            .filter(|text| !text.contains('\0'))
            // Some byte sequences decode fine but encode back differently
            // (Shift_JIS NEC rows, Big5 combining pairs).
            .filter(|text| {
                encoding::encode_text(text, self.encoding).is_ok_and(|round| round == bytes)
            });

        match text {
            Some(text) => {
                self.clipboard.set_text(&text)?;
                Ok(CopyOutcome::Copied { bytes: len })
            }
            None => {
                tracing::warn!(
                    bytes = len,
                    encoding = self.encoding.name(),
                    "Clipboard cannot hold these bytes, using scratchpad once"
                );
                self.scratchpad = Some(bytes);
                Ok(CopyOutcome::Scratchpad { bytes: len })
            }
        }
    }

    /// Render the clipboard (or the armed scratchpad) in the given format.
    ///
    /// Returns `None` when there is nothing to insert.
    pub fn paste_as(&mut self, format: PasteFormat) -> Result<Option<String>, TransformError> {
        let source = match self.scratchpad.take() {
            Some(bytes) => {
                tracing::debug!(bytes = bytes.len(), "Using scratchpad contents");
                bytes
            }
            None => {
                let text = self.clipboard.get_text()?;
                encoding::encode_text(&text, self.encoding)?
            }
        };

        let output = format.encode(&source, self.encoding);
        tracing::debug!(
            format = format.name(),
            bytes = source.len(),
            output_len = output.len(),
            "Encoded clipboard"
        );

        if output.is_empty() {
            Ok(None)
        } else {
            Ok(Some(output))
        }
    }

    /// Switch the active encoding. Unknown labels fall back to UTF-8.
    pub fn set_encoding(&mut self, label: &str) {
        self.encoding = encoding::resolve(label);
    }

    pub fn encoding_name(&self) -> &'static str {
        self.encoding.name()
    }

    /// Number of bytes waiting in the scratchpad, if armed.
    pub fn scratchpad_len(&self) -> Option<usize> {
        self.scratchpad.as_ref().map(Vec::len)
    }

    pub fn clear_scratchpad(&mut self) {
        self.scratchpad = None;
    }

    pub fn clipboard_mut(&mut self) -> &mut C {
        &mut self.clipboard
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::clipboard::MemoryClipboard;

    fn processor(text: &str) -> ClipProcessor<MemoryClipboard> {
        ClipProcessor::new(MemoryClipboard::with_text(text), "UTF-8")
    }

    #[test]
    fn test_copy_hex_to_clipboard() {
        let mut p = processor("");
        let outcome = p.copy_as("68 65 6c 6c 6f", CopyFormat::Hex).unwrap();
        assert_eq!(outcome, CopyOutcome::Copied { bytes: 5 });
        assert_eq!(p.clipboard_mut().text(), "hello");
        assert_eq!(p.scratchpad_len(), None);
    }

    #[test]
    fn test_copy_empty_selection_is_skipped() {
        let mut p = processor("untouched");
        assert_eq!(p.copy_as("", CopyFormat::Hex).unwrap(), CopyOutcome::Skipped);
        assert_eq!(p.copy_as("zz", CopyFormat::Hex).unwrap(), CopyOutcome::Skipped);
        assert_eq!(p.clipboard_mut().text(), "untouched");
    }

    #[test]
    fn test_copy_error_leaves_clipboard() {
        let mut p = processor("untouched");
        let err = p.copy_as("ABC", CopyFormat::Hex).unwrap_err();
        assert_eq!(err, TransformError::OddHexLength(3));
        assert_eq!(p.clipboard_mut().text(), "untouched");
    }

    #[test]
    fn test_null_bytes_use_scratchpad_once() {
        let mut p = processor("previous");
        let outcome = p.copy_as("41 00 42", CopyFormat::Hex).unwrap();
        assert_eq!(outcome, CopyOutcome::Scratchpad { bytes: 3 });
        assert_eq!(p.clipboard_mut().text(), "previous");
        assert_eq!(p.scratchpad_len(), Some(3));

        let first = p.paste_as(PasteFormat::SlashX).unwrap();
        assert_eq!(first.as_deref(), Some("\\x41\\x00\\x42"));
        assert_eq!(p.scratchpad_len(), None);

        // Second paste falls back to the system clipboard.
        let second = p.paste_as(PasteFormat::Raw).unwrap();
        assert_eq!(second.as_deref(), Some("previous"));
    }

    #[test]
    fn test_invalid_text_bytes_use_scratchpad() {
        let mut p = processor("");
        let outcome = p.copy_as("\\xab\\xcd", CopyFormat::SlashX).unwrap();
        assert_eq!(outcome, CopyOutcome::Scratchpad { bytes: 2 });
        assert_eq!(p.paste_as(PasteFormat::HexPairs).unwrap().as_deref(), Some("ABCD"));
    }

    #[test]
    fn test_single_byte_encoding_carries_high_bytes() {
        let mut p = ClipProcessor::new(MemoryClipboard::new(), "windows-1252");
        let outcome = p.copy_as("%E9t%E9", CopyFormat::UrlEncode).unwrap();
        assert_eq!(outcome, CopyOutcome::Copied { bytes: 3 });
        assert_eq!(p.clipboard_mut().text(), "été");
        assert_eq!(p.paste_as(PasteFormat::HexPairs).unwrap().as_deref(), Some("E974E9"));
    }

    #[test]
    fn test_copy_disarms_scratchpad() {
        let mut p = processor("");
        p.copy_as("00", CopyFormat::Hex).unwrap();
        assert_eq!(p.scratchpad_len(), Some(1));

        p.copy_as("", CopyFormat::Hex).unwrap();
        assert_eq!(p.scratchpad_len(), None);
    }

    #[test]
    fn test_failed_copy_disarms_scratchpad() {
        let mut p = processor("clip");
        p.copy_as("00", CopyFormat::Hex).unwrap();
        assert_eq!(p.scratchpad_len(), Some(1));

        assert!(p.copy_as("ABC", CopyFormat::Hex).is_err());
        assert_eq!(p.scratchpad_len(), None);
        assert_eq!(p.paste_as(PasteFormat::Raw).unwrap().as_deref(), Some("clip"));
    }

    #[test]
    fn test_shift_jis_bytes_that_reencode_differently() {
        let mut p = ClipProcessor::new(MemoryClipboard::with_text("previous"), "Shift_JIS");

        // ED40 decodes to U+7E8A, which encodes back as FA5C
        let outcome = p.copy_as("ED40", CopyFormat::Hex).unwrap();
        assert_eq!(outcome, CopyOutcome::Scratchpad { bytes: 2 });
        assert_eq!(p.clipboard_mut().text(), "previous");
        assert_eq!(p.paste_as(PasteFormat::HexPairs).unwrap().as_deref(), Some("ED40"));

        let outcome = p.copy_as("FA5C", CopyFormat::Hex).unwrap();
        assert_eq!(outcome, CopyOutcome::Copied { bytes: 2 });
        assert_eq!(p.clipboard_mut().text(), "\u{7E8A}");
        assert_eq!(p.paste_as(PasteFormat::HexPairs).unwrap().as_deref(), Some("FA5C"));
    }

    #[test]
    fn test_gbk_four_byte_sequence_uses_scratchpad() {
        let mut p = ClipProcessor::new(MemoryClipboard::new(), "GBK");
        let outcome = p.copy_as("81308130", CopyFormat::Hex).unwrap();
        assert_eq!(outcome, CopyOutcome::Scratchpad { bytes: 4 });
        assert_eq!(p.paste_as(PasteFormat::HexPairs).unwrap().as_deref(), Some("81308130"));
    }

    #[test]
    fn test_copied_bytes_paste_back_unchanged() {
        fn check(p: &mut ClipProcessor<MemoryClipboard>, hex: &str) {
            p.copy_as(hex, CopyFormat::Hex).unwrap();
            let pasted = p.paste_as(PasteFormat::HexPairs).unwrap();
            assert_eq!(
                pasted.as_deref(),
                Some(hex),
                "{} in {}",
                hex,
                p.encoding_name()
            );
        }

        for label in crate::utils::encoding::SUPPORTED_LABELS {
            let mut p = ClipProcessor::new(MemoryClipboard::new(), label);
            for byte in 0x01..=0xFFu8 {
                check(&mut p, &format!("{:02X}", byte));
            }
            for lead in 0x81..=0xFEu8 {
                for trail in 0x40..=0xFEu8 {
                    check(&mut p, &format!("{:02X}{:02X}", lead, trail));
                }
            }
        }
    }

    #[test]
    fn test_paste_from_clipboard() {
        let mut p = processor("hello, world");
        assert_eq!(
            p.paste_as(PasteFormat::Base64).unwrap().as_deref(),
            Some("aGVsbG8sIHdvcmxk")
        );
        assert_eq!(
            p.paste_as(PasteFormat::CArray).unwrap().as_deref(),
            Some("0x68, 0x65, 0x6C, 0x6C, 0x6F, 0x2C, 0x20, 0x77, 0x6F, 0x72, 0x6C, 0x64")
        );
    }

    #[test]
    fn test_paste_empty_clipboard() {
        let mut p = processor("");
        assert_eq!(p.paste_as(PasteFormat::HexPairs).unwrap(), None);
        // 0x prefix alone is still output
        assert_eq!(p.paste_as(PasteFormat::ZeroXHex).unwrap().as_deref(), Some("0x"));
    }

    #[test]
    fn test_paste_uses_active_encoding() {
        let mut p = processor("é");
        assert_eq!(p.paste_as(PasteFormat::SlashX).unwrap().as_deref(), Some("\\xC3\\xA9"));

        p.set_encoding("latin1");
        assert_eq!(p.encoding_name(), "windows-1252");
        assert_eq!(p.paste_as(PasteFormat::SlashX).unwrap().as_deref(), Some("\\xE9"));
    }

    #[test]
    fn test_paste_unencodable_clipboard() {
        let mut p = ClipProcessor::new(MemoryClipboard::with_text("日本"), "windows-1252");
        assert!(matches!(
            p.paste_as(PasteFormat::HexPairs),
            Err(TransformError::Unencodable { .. })
        ));
    }

    #[test]
    fn test_clear_scratchpad() {
        let mut p = processor("clip");
        p.copy_as("\\x00", CopyFormat::SlashX).unwrap();
        p.clear_scratchpad();
        assert_eq!(p.paste_as(PasteFormat::Raw).unwrap().as_deref(), Some("clip"));
    }
}
