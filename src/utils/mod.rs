//! Utility modules for text encodings and clipboard access.

pub mod clipboard;
pub mod encoding;
