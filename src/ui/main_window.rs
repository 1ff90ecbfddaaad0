//! Main application window.
//!
//! Source editor on the left ("copy selection as"), output on the right
//! ("paste clipboard as").

use std::ops::Range;

use egui::{Color32, RichText, TextEdit, Ui};

use crate::config::{Config, ConfigManager};
use crate::core::clip_processor::{ClipProcessor, CopyOutcome};
use crate::core::formats::{CopyFormat, PasteFormat};
use crate::ui::theme;
use crate::utils::clipboard::{ClipboardBackend, SystemClipboard};
use crate::utils::encoding::SUPPORTED_LABELS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StatusLevel {
    Info,
    Warning,
    Error,
}

/// Main window state.
pub struct MainWindow {
    // UI State
    source: String,
    selection: Option<Range<usize>>,
    output: String,
    status_message: String,
    status_level: StatusLevel,
    show_scratchpad_notice: bool,

    // Config
    config_manager: ConfigManager,
    config: Config,

    processor: ClipProcessor<SystemClipboard>,

    theme_applied: bool,
}

impl MainWindow {
    pub fn new() -> Self {
        let config_manager = ConfigManager::new();
        let config = config_manager.load();
        let processor = ClipProcessor::new(SystemClipboard, &config.encoding);

        tracing::info!(
            config = %config_manager.get_config_file_path().display(),
            encoding = processor.encoding_name(),
            "Main window ready"
        );

        Self {
            source: String::new(),
            selection: None,
            output: String::new(),
            status_message: String::new(),
            status_level: StatusLevel::Info,
            show_scratchpad_notice: false,

            config_manager,
            config,

            processor,

            theme_applied: false,
        }
    }

    /// Render the main window.
    pub fn render(&mut self, ctx: &egui::Context) {
        // Apply theme once
        if !self.theme_applied {
            theme::apply_theme(ctx);
            self.theme_applied = true;
        }

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            self.render_toolbar(ui);
        });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            self.render_status_bar(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_main_content(ui);
        });

        if self.show_scratchpad_notice {
            self.render_scratchpad_notice(ctx);
        }
    }

    fn render_toolbar(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            ui.heading(RichText::new("🔁 Clip Transform").color(theme::accent_color()));
            ui.separator();

            let previous_encoding = self.config.encoding.clone();
            egui::ComboBox::from_label("Encoding")
                .selected_text(self.processor.encoding_name())
                .show_ui(ui, |ui| {
                    for label in SUPPORTED_LABELS {
                        ui.selectable_value(&mut self.config.encoding, label.to_string(), *label);
                    }
                });
            if self.config.encoding != previous_encoding {
                self.processor.set_encoding(&self.config.encoding);
                self.save_config();
            }

            ui.separator();

            if ui
                .checkbox(&mut self.config.warn_on_scratchpad, "Warn on scratchpad")
                .changed()
            {
                self.save_config();
            }
            if ui
                .checkbox(&mut self.config.auto_copy_output, "Auto Copy Output")
                .on_hover_text("Also copy pasted output to the clipboard")
                .changed()
            {
                self.save_config();
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if let Some(len) = self.processor.scratchpad_len() {
                    if ui.small_button("✖").on_hover_text("Discard scratchpad").clicked() {
                        self.processor.clear_scratchpad();
                        self.set_status("Scratchpad cleared", StatusLevel::Info);
                    }
                    ui.label(
                        RichText::new(format!("📝 Scratchpad: {} bytes", len))
                            .color(theme::warning_color()),
                    );
                }
            });
        });
    }

    fn render_status_bar(&self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            let color = match self.status_level {
                StatusLevel::Info => theme::success_color(),
                StatusLevel::Warning => theme::warning_color(),
                StatusLevel::Error => theme::error_color(),
            };
            ui.label(RichText::new(&self.status_message).color(color));

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    RichText::new(concat!("v", env!("CARGO_PKG_VERSION")))
                        .small()
                        .color(Color32::GRAY),
                );
            });
        });
    }

    fn render_main_content(&mut self, ui: &mut Ui) {
        let available_width = ui.available_width();
        let left_width = available_width * 0.5;
        let right_width = available_width - left_width - 10.0;

        ui.horizontal_top(|ui| {
            ui.vertical(|ui| {
                ui.set_width(left_width);
                self.render_source_panel(ui);
            });

            ui.separator();

            ui.vertical(|ui| {
                ui.set_width(right_width);
                self.render_output_panel(ui);
            });
        });
    }

    fn render_source_panel(&mut self, ui: &mut Ui) {
        ui.group(|ui| {
            ui.heading("Source");

            ui.horizontal(|ui| {
                let previous = self.config.copy_format;
                egui::ComboBox::from_label("Copy as")
                    .selected_text(previous.label())
                    .show_ui(ui, |ui| {
                        for format in CopyFormat::ALL {
                            ui.selectable_value(&mut self.config.copy_format, format, format.label())
                                .on_hover_text(format.description());
                        }
                    });
                if self.config.copy_format != previous {
                    self.save_config();
                }

                if ui.button("📋 Copy").clicked() {
                    self.copy_selection();
                }
            });

            let hint = match &self.selection {
                Some(range) => format!("{} characters selected", range.len()),
                None => "No selection, the whole text is used".to_string(),
            };
            ui.label(RichText::new(hint).small().italics());

            let output = TextEdit::multiline(&mut self.source)
                .font(egui::TextStyle::Monospace)
                .desired_width(f32::INFINITY)
                .desired_rows(20)
                .show(ui);

            if let Some(range) = output.state.cursor.char_range() {
                let (a, b) = (range.primary.index, range.secondary.index);
                self.selection = (a != b).then(|| a.min(b)..a.max(b));
            }
        });
    }

    fn render_output_panel(&mut self, ui: &mut Ui) {
        ui.group(|ui| {
            ui.heading("Output");

            ui.horizontal(|ui| {
                let previous = self.config.paste_format;
                egui::ComboBox::from_label("Paste as")
                    .selected_text(previous.label())
                    .show_ui(ui, |ui| {
                        for format in PasteFormat::ALL {
                            ui.selectable_value(&mut self.config.paste_format, format, format.label())
                                .on_hover_text(format.description());
                        }
                    });
                if self.config.paste_format != previous {
                    self.save_config();
                }

                if ui.button("📥 Paste").clicked() {
                    self.paste_clipboard();
                }

                if ui.button("📋 Copy Output").clicked() {
                    self.copy_output();
                }

                if ui.button("🗑 Clear").clicked() {
                    self.output.clear();
                }
            });

            ui.label(RichText::new(self.config.paste_format.description()).small().italics());

            ui.add(
                TextEdit::multiline(&mut self.output)
                    .font(egui::TextStyle::Monospace)
                    .desired_width(f32::INFINITY)
                    .desired_rows(20),
            );
        });
    }

    fn render_scratchpad_notice(&mut self, ctx: &egui::Context) {
        egui::Window::new("Scratchpad in use")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.label("The copied bytes contain a null byte or do not survive a");
                ui.label(format!("round trip through {}.", self.processor.encoding_name()));
                ui.label("They are held internally and used by the next paste only.");
                ui.add_space(6.0);
                if ui.button("OK").clicked() {
                    self.show_scratchpad_notice = false;
                }
            });
    }

    // Actions

    fn selected_text(&self) -> String {
        match &self.selection {
            Some(range) => self
                .source
                .chars()
                .skip(range.start)
                .take(range.len())
                .collect(),
            None => self.source.clone(),
        }
    }

    fn copy_selection(&mut self) {
        let selection = self.selected_text();
        let format = self.config.copy_format;

        match self.processor.copy_as(&selection, format) {
            Ok(CopyOutcome::Skipped) => {
                self.set_status("Nothing to copy", StatusLevel::Warning);
            }
            Ok(CopyOutcome::Copied { bytes }) => {
                self.set_status(&format!("Copied {} bytes from {}", bytes, format), StatusLevel::Info);
            }
            Ok(CopyOutcome::Scratchpad { bytes }) => {
                self.set_status(
                    &format!("{} bytes held in the scratchpad for the next paste", bytes),
                    StatusLevel::Warning,
                );
                if self.config.warn_on_scratchpad {
                    self.show_scratchpad_notice = true;
                }
            }
            Err(e) => {
                tracing::warn!(format = format.name(), "Copy failed: {}", e);
                self.set_status(&format!("Copy as {} failed: {}", format, e), StatusLevel::Error);
            }
        }
    }

    fn paste_clipboard(&mut self) {
        let format = self.config.paste_format;

        match self.processor.paste_as(format) {
            Ok(Some(text)) => {
                self.output = text;
                if self.config.auto_copy_output {
                    self.copy_output();
                } else {
                    self.set_status(&format!("Pasted as {}", format), StatusLevel::Info);
                }
            }
            Ok(None) => {
                self.set_status("Clipboard is empty", StatusLevel::Warning);
            }
            Err(e) => {
                tracing::warn!(format = format.name(), "Paste failed: {}", e);
                self.set_status(&format!("Paste as {} failed: {}", format, e), StatusLevel::Error);
            }
        }
    }

    fn copy_output(&mut self) {
        if self.output.is_empty() {
            self.set_status("No output to copy", StatusLevel::Warning);
            return;
        }

        match self.processor.clipboard_mut().set_text(&self.output) {
            Ok(()) => self.set_status("Output copied to clipboard", StatusLevel::Info),
            Err(e) => self.set_status(&format!("Failed to copy output: {}", e), StatusLevel::Error),
        }
    }

    fn save_config(&mut self) {
        if let Err(e) = self.config_manager.save(&self.config) {
            tracing::warn!("Failed to save config: {:#}", e);
            self.set_status(&format!("Failed to save config: {}", e), StatusLevel::Error);
        }
    }

    fn set_status(&mut self, msg: &str, level: StatusLevel) {
        self.status_message = msg.to_string();
        self.status_level = level;
    }
}

impl Default for MainWindow {
    fn default() -> Self {
        Self::new()
    }
}
