//! Look and feel: egui's dark visuals with a teal accent and a larger
//! monospace font for the byte views.

use egui::{Color32, FontId, Stroke, TextStyle, Visuals};

const ACCENT: Color32 = Color32::from_rgb(80, 200, 180);
const MONOSPACE_SIZE: f32 = 14.0;

pub fn apply_theme(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();
    style.visuals = Visuals::dark();

    style.visuals.selection.bg_fill = ACCENT.gamma_multiply(0.35);
    style.visuals.selection.stroke = Stroke::new(1.0, ACCENT);
    style.visuals.hyperlink_color = ACCENT;
    style.visuals.widgets.active.bg_stroke = Stroke::new(1.0, ACCENT);

    if let Some(font) = style.text_styles.get_mut(&TextStyle::Monospace) {
        *font = FontId::monospace(MONOSPACE_SIZE);
    }

    ctx.set_style(style);
}

pub fn accent_color() -> Color32 {
    ACCENT
}

/// Status bar colours.
pub fn success_color() -> Color32 {
    Color32::from_rgb(120, 210, 120)
}

pub fn error_color() -> Color32 {
    Color32::from_rgb(240, 90, 90)
}

pub fn warning_color() -> Color32 {
    Color32::from_rgb(235, 190, 70)
}
