//! Cross-platform clipboard utilities.
//!
//! Uses arboard crate for clipboard access (works with GNU toolchain).

use crate::core::error::TransformError;
use arboard::Clipboard;

/// Text clipboard used by the transform harness.
pub trait ClipboardBackend {
    /// Read the clipboard text. An empty clipboard reads as an empty string.
    fn get_text(&mut self) -> Result<String, TransformError>;

    fn set_text(&mut self, text: &str) -> Result<(), TransformError>;
}

/// The system clipboard.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl ClipboardBackend for SystemClipboard {
    fn get_text(&mut self) -> Result<String, TransformError> {
        // arboard requires a new Clipboard instance for each operation
        let mut clipboard = open()?;
        match clipboard.get_text() {
            Ok(text) => Ok(text),
            Err(arboard::Error::ContentNotAvailable) => Ok(String::new()),
            Err(e) => Err(TransformError::Clipboard(e.to_string())),
        }
    }

    fn set_text(&mut self, text: &str) -> Result<(), TransformError> {
        let mut clipboard = open()?;
        clipboard
            .set_text(text)
            .map_err(|e| TransformError::Clipboard(e.to_string()))
    }
}

fn open() -> Result<Clipboard, TransformError> {
    Clipboard::new().map_err(|e| TransformError::Clipboard(e.to_string()))
}

/// In-process clipboard, for headless environments and tests.
#[derive(Debug, Default, Clone)]
pub struct MemoryClipboard {
    text: String,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl ClipboardBackend for MemoryClipboard {
    fn get_text(&mut self) -> Result<String, TransformError> {
        Ok(self.text.clone())
    }

    fn set_text(&mut self, text: &str) -> Result<(), TransformError> {
        self.text = text.to_string();
        Ok(())
    }
}
