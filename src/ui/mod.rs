//! egui user interface.

pub mod main_window;
pub mod theme;
