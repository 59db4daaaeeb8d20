//! Transient alert banner.

use egui::{CornerRadius, Margin, RichText, Stroke, Ui};

use etq_state::NotificationCenter;

use crate::theme;

/// Render the live notice, if any. Expired notices render nothing; expiry
/// itself is handled by the per-frame tick in the app loop.
pub fn show(ui: &mut Ui, notifications: &NotificationCenter) {
    let Some(notice) = notifications.active() else {
        return;
    };
    let (fill, border, text) = theme::severity_colors(notice.severity);
    egui::Frame::new()
        .fill(fill)
        .stroke(Stroke::new(1.0, border))
        .corner_radius(CornerRadius::same(4))
        .inner_margin(Margin::symmetric(12, 8))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(&notice.message).color(text));
        });
    ui.add_space(theme::spacing::SM);
}
