//! Home dashboard: quick actions, pipeline summary, and recent activity.

use eframe::egui::{self, RichText, Ui, vec2};
use egui_phosphor::regular::{HEART, SCAN, USERS, WARNING};

use crate::models::patient::PatientStatus;

use super::app::{App, LogLevel, Panel};
use super::components::{action_card, colors, notice, stat_card};

/// Render the home dashboard. Returns the panel to navigate to when a quick
/// action was clicked.
pub fn show(app: &mut App, ui: &mut Ui) -> Option<Panel> {
    let mut next = None;

    egui::ScrollArea::vertical().show(ui, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(16.0);
            ui.label(RichText::new("Welcome to").size(15.0).weak());
            ui.label(
                RichText::new("CervCare")
                    .size(30.0)
                    .strong()
                    .color(colors::ACCENT),
            );
            ui.label(
                RichText::new("Custom neck brace scanning and patient tracking")
                    .size(13.0)
                    .weak(),
            );
            ui.add_space(16.0);
        });

        let card_size = vec2((ui.available_width() - 20.0).max(200.0) / 2.0, 110.0);
        ui.horizontal(|ui| {
            if action_card(ui, SCAN, "Start New Scan", "Capture neck measurements", card_size)
                .clicked()
            {
                next = Some(Panel::Scan);
            }
            if action_card(ui, USERS, "Manage Patients", "View and edit records", card_size)
                .clicked()
            {
                next = Some(Panel::Patients);
            }
        });

        ui.add_space(12.0);
        show_pipeline_stats(app, ui);

        ui.add_space(12.0);
        show_recent_activity(app, ui);

        ui.add_space(12.0);
        egui::Frame::group(ui.style())
            .inner_margin(egui::Margin::same(14))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    ui.label(RichText::new(HEART).size(22.0).color(colors::ACCENT));
                    ui.vertical(|ui| {
                        ui.label(RichText::new("Need Assistance?").strong());
                        ui.label(
                            RichText::new(
                                "Connect with local ALS organizations for in-person help \
                                 with scanning and fitting.",
                            )
                            .size(12.0)
                            .weak(),
                        );
                    });
                });
            });

        if app.config.ui.show_safety_notices {
            ui.add_space(12.0);
            notice(
                ui,
                colors::ERROR,
                WARNING,
                "For medical emergencies, contact your healthcare provider or \
                 emergency services immediately.",
            );
        }
        ui.add_space(12.0);
    });

    next
}

fn show_pipeline_stats(app: &App, ui: &mut Ui) {
    let in_review = app
        .patients
        .iter()
        .filter(|p| p.status == PatientStatus::Review)
        .count();
    let delivered = app
        .patients
        .iter()
        .filter(|p| p.status == PatientStatus::Delivered)
        .count();

    ui.horizontal(|ui| {
        stat_card(ui, "In Review", &in_review.to_string(), "Scans awaiting approval");
        stat_card(ui, "Completed", &delivered.to_string(), "Successful deliveries");
    });
}

fn show_recent_activity(app: &App, ui: &mut Ui) {
    ui.label(RichText::new("Recent Activity").size(16.0).strong());
    ui.add_space(4.0);

    egui::Frame::new()
        .fill(ui.style().visuals.extreme_bg_color)
        .inner_margin(egui::Margin::same(10))
        .corner_radius(egui::CornerRadius::same(8))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());

            if app.log_messages.is_empty() {
                ui.label(RichText::new("No activity yet").weak());
                return;
            }

            for entry in app.log_messages.iter().rev().take(6) {
                let color = match entry.level {
                    LogLevel::Info => ui.visuals().text_color(),
                    LogLevel::Success => colors::SUCCESS,
                    LogLevel::Warning => colors::WARNING,
                    LogLevel::Error => colors::ERROR,
                };
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(entry.timestamp.format("%H:%M:%S").to_string())
                            .size(11.0)
                            .weak(),
                    );
                    ui.label(RichText::new(&entry.message).size(12.0).color(color));
                });
            }
        });
}
