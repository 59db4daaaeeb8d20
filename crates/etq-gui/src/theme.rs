//! Theme and styling constants

use egui::Color32;

use etq_model::Severity;

/// Spacing constants
pub mod spacing {
    pub const XS: f32 = 4.0;
    pub const SM: f32 = 8.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
}

/// Banner colors for a notification severity: (fill, border, text).
pub fn severity_colors(severity: Severity) -> (Color32, Color32, Color32) {
    match severity {
        Severity::Info => (
            Color32::from_rgb(207, 226, 255),
            Color32::from_rgb(158, 197, 254),
            Color32::from_rgb(5, 81, 96),
        ),
        Severity::Success => (
            Color32::from_rgb(209, 231, 221),
            Color32::from_rgb(163, 207, 187),
            Color32::from_rgb(10, 54, 34),
        ),
        Severity::Danger => (
            Color32::from_rgb(248, 215, 218),
            Color32::from_rgb(241, 174, 181),
            Color32::from_rgb(88, 21, 28),
        ),
    }
}
