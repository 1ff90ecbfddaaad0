//! Converters between clipboard text and bytes, and the harness that runs them.

pub mod clip_processor;
pub mod decoders;
pub mod encoders;
pub mod error;
pub mod formats;
