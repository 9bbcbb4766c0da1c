//! Settings screen. Toggles here are per-session presentation state; the
//! persisted configuration lives in the config file.

use eframe::egui::{self, RichText, Ui};
use egui_phosphor::regular::{
    BELL, CARET_RIGHT, CHART_BAR, CLOUD_ARROW_UP, FILE_TEXT, FINGERPRINT, INFO, QUESTION,
    SHIELD_CHECK,
};

use super::app::App;
use super::components::{colors, screen_header};

/// Session-scoped settings toggles, reset whenever the screen is left.
#[derive(Debug, Clone)]
pub struct SettingsState {
    pub notifications: bool,
    pub biometrics: bool,
    pub analytics: bool,
    pub auto_backup: bool,
}

impl Default for SettingsState {
    fn default() -> Self {
        Self {
            notifications: true,
            biometrics: false,
            analytics: true,
            auto_backup: true,
        }
    }
}

pub fn show(app: &mut App, ui: &mut Ui) {
    screen_header(ui, "Settings", "Preferences and account options");

    egui::ScrollArea::vertical().show(ui, |ui| {
        section(ui, "Patient Care", |ui| {
            toggle_row(
                ui,
                BELL,
                "Care Notifications",
                "Reminders for skin checks and wearing schedule",
                &mut app.settings.notifications,
            );
            toggle_row(
                ui,
                CLOUD_ARROW_UP,
                "Auto Backup",
                "Back up scan data when connected",
                &mut app.settings.auto_backup,
            );
        });

        section(ui, "Privacy & Security", |ui| {
            toggle_row(
                ui,
                FINGERPRINT,
                "Biometric Unlock",
                "Require biometrics to open patient records",
                &mut app.settings.biometrics,
            );

            egui::Frame::new()
                .fill(ui.style().visuals.extreme_bg_color)
                .inner_margin(egui::Margin::same(10))
                .corner_radius(egui::CornerRadius::same(8))
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.horizontal(|ui| {
                        ui.label(RichText::new(CHART_BAR).size(18.0).color(colors::ACCENT));
                        ui.vertical(|ui| {
                            ui.checkbox(&mut app.settings.analytics, "Share Anonymous Analytics");
                            ui.label(
                                RichText::new(
                                    "Helps improve scan accuracy. No patient data or \
                                     personal information is ever shared.",
                                )
                                .size(11.0)
                                .weak(),
                            );
                        });
                    });
                });
        });

        section(ui, "App Preferences", |ui| {
            nav_row(ui, SHIELD_CHECK, "Scan Quality", "High (recommended)");
            nav_row(ui, INFO, "About CervCare", env!("CARGO_PKG_VERSION"));
        });

        section(ui, "Support & Legal", |ui| {
            nav_row(ui, QUESTION, "Help & Support", "");
            nav_row(ui, FILE_TEXT, "Privacy Policy", "");
            nav_row(ui, FILE_TEXT, "Terms of Service", "");
        });

        ui.add_space(12.0);
    });
}

fn section(ui: &mut Ui, title: &str, add_contents: impl FnOnce(&mut Ui)) {
    ui.label(RichText::new(title).size(15.0).strong());
    ui.add_space(4.0);
    add_contents(ui);
    ui.add_space(14.0);
}

fn toggle_row(ui: &mut Ui, icon: &str, title: &str, subtitle: &str, value: &mut bool) {
    ui.horizontal(|ui| {
        ui.label(RichText::new(icon).size(18.0).color(colors::ACCENT));
        ui.vertical(|ui| {
            ui.checkbox(value, title);
            ui.label(RichText::new(subtitle).size(11.0).weak());
        });
    });
    ui.add_space(4.0);
}

/// Inert navigation row; the linked screens are not part of this release.
fn nav_row(ui: &mut Ui, icon: &str, title: &str, value: &str) {
    ui.horizontal(|ui| {
        ui.label(RichText::new(icon).size(18.0).color(colors::ACCENT));
        ui.label(RichText::new(title).size(13.0));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(RichText::new(CARET_RIGHT).size(13.0).weak());
            if !value.is_empty() {
                ui.label(RichText::new(value).size(12.0).weak());
            }
        });
    });
    ui.add_space(4.0);
}
