//! Shared UI components.

use eframe::egui::{self, Color32, Response, RichText, Sense, StrokeKind, Ui};
use egui_phosphor::regular::{CHECK_CIRCLE, CLOCK, WARNING_CIRCLE};

use crate::models::patient::PatientStatus;

/// Status and accent colors.
pub mod colors {
    use super::Color32;

    pub const SUCCESS: Color32 = Color32::from_rgb(5, 150, 105);
    pub const ERROR: Color32 = Color32::from_rgb(220, 38, 38);
    pub const WARNING: Color32 = Color32::from_rgb(245, 158, 11);
    pub const NEUTRAL: Color32 = Color32::from_rgb(107, 114, 128);
    pub const ACCENT: Color32 = Color32::from_rgb(37, 99, 235);
    pub const ACCENT_LIGHT: Color32 = Color32::from_rgb(59, 130, 246);
}

/// Display color for a patient status. Exhaustive over the status set.
pub fn status_color(status: PatientStatus) -> Color32 {
    match status {
        PatientStatus::Scanning => colors::WARNING,
        PatientStatus::Review => colors::ACCENT_LIGHT,
        PatientStatus::Approved => colors::SUCCESS,
        PatientStatus::Delivered => colors::NEUTRAL,
    }
}

/// Display icon for a patient status.
pub fn status_icon(status: PatientStatus) -> &'static str {
    match status {
        PatientStatus::Scanning => CLOCK,
        PatientStatus::Review => WARNING_CIRCLE,
        PatientStatus::Approved | PatientStatus::Delivered => CHECK_CIRCLE,
    }
}

/// Render a centered screen header with title and subtitle.
pub fn screen_header(ui: &mut Ui, title: &str, subtitle: &str) {
    ui.vertical_centered(|ui| {
        ui.add_space(16.0);
        ui.label(RichText::new(title).size(28.0).strong());
        ui.add_space(4.0);
        ui.label(RichText::new(subtitle).size(14.0).weak());
        ui.add_space(16.0);
    });
}

/// Render a clickable quick-action card with icon, title, and subtitle.
///
/// Returns the response which can be checked for `.clicked()`.
pub fn action_card(ui: &mut Ui, icon: &str, title: &str, subtitle: &str, size: egui::Vec2) -> Response {
    let (rect, response) = ui.allocate_exact_size(size, Sense::click());

    if ui.is_rect_visible(rect) {
        let visuals = ui.style().interact(&response);

        ui.painter().rect_filled(rect, 8.0, visuals.bg_fill);
        ui.painter()
            .rect_stroke(rect, 8.0, visuals.bg_stroke, StrokeKind::Outside);

        let icon_pos = egui::pos2(rect.center().x, rect.top() + size.y * 0.28);
        ui.painter().text(
            icon_pos,
            egui::Align2::CENTER_CENTER,
            icon,
            egui::FontId::proportional(30.0),
            colors::ACCENT,
        );

        let title_pos = egui::pos2(rect.center().x, rect.center().y + size.y * 0.12);
        ui.painter().text(
            title_pos,
            egui::Align2::CENTER_CENTER,
            title,
            egui::FontId::proportional(16.0),
            visuals.text_color(),
        );

        let subtitle_pos = egui::pos2(rect.center().x, rect.bottom() - size.y * 0.16);
        ui.painter().text(
            subtitle_pos,
            egui::Align2::CENTER_CENTER,
            subtitle,
            egui::FontId::proportional(11.0),
            ui.visuals().weak_text_color(),
        );
    }

    response
}

/// Render a stat card with title, value, and subtitle.
pub fn stat_card(ui: &mut Ui, title: &str, value: &str, subtitle: &str) {
    egui::Frame::new()
        .fill(ui.style().visuals.extreme_bg_color)
        .inner_margin(egui::Margin::same(15))
        .outer_margin(egui::Margin::same(5))
        .corner_radius(egui::CornerRadius::same(8))
        .show(ui, |ui| {
            ui.set_min_width(140.0);

            ui.vertical(|ui| {
                ui.label(RichText::new(title).small());
                ui.label(RichText::new(value).heading().strong());
                ui.label(RichText::new(subtitle).small().weak());
            });
        });
}

/// Render a framed notice with a leading icon, used for info, warning, and
/// safety boxes.
pub fn notice(ui: &mut Ui, color: Color32, icon: &str, text: &str) {
    egui::Frame::new()
        .fill(color.gamma_multiply(0.12))
        .inner_margin(egui::Margin::same(12))
        .corner_radius(egui::CornerRadius::same(8))
        .show(ui, |ui| {
            ui.horizontal_wrapped(|ui| {
                ui.label(RichText::new(icon).size(16.0).color(color));
                ui.label(RichText::new(text).size(13.0).color(color));
            });
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display_mapping_is_distinct_per_pipeline_stage() {
        // Every status resolves to a color and icon; the two completed
        // states share the check icon but differ by color.
        for status in PatientStatus::ALL {
            assert!(!status_icon(status).is_empty());
        }
        assert_ne!(status_color(PatientStatus::Approved), status_color(PatientStatus::Delivered));
        assert_ne!(status_color(PatientStatus::Scanning), status_color(PatientStatus::Review));
    }
}
