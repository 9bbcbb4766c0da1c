//! Patient management screen: search, record cards, and pipeline stats.

use eframe::egui::{self, RichText, Ui};
use egui_phosphor::regular::{MAGNIFYING_GLASS, PENCIL, PLUS, USER, WARNING_CIRCLE};

use crate::models::patient::{Patient, PatientStatus};

use super::app::App;
use super::components::{self, colors, screen_header, stat_card};
use super::patient_form::{self, PatientFormState};

pub fn show(app: &mut App, ui: &mut Ui) {
    screen_header(ui, "Patient Management", "Track scans and brace deliveries");

    ui.horizontal(|ui| {
        ui.label(RichText::new(MAGNIFYING_GLASS).size(16.0).weak());
        ui.add(
            egui::TextEdit::singleline(&mut app.patient_search)
                .hint_text("Search patients...")
                .desired_width(ui.available_width() - 120.0),
        );
        if ui
            .button(RichText::new(format!("{PLUS} Add Patient")).size(13.0))
            .clicked()
        {
            app.patient_form = PatientFormState::new_patient();
        }
    });
    ui.add_space(10.0);

    let matching: Vec<u32> = app
        .patients
        .iter()
        .filter(|p| p.matches(&app.patient_search))
        .map(|p| p.id)
        .collect();

    egui::ScrollArea::vertical().show(ui, |ui| {
        if matching.is_empty() {
            ui.vertical_centered(|ui| {
                ui.add_space(30.0);
                ui.label(RichText::new("No patients match your search").weak());
            });
        }

        let mut edit_id = None;
        for id in &matching {
            if let Some(patient) = app.patients.iter().find(|p| p.id == *id) {
                if show_patient_card(ui, patient) {
                    edit_id = Some(*id);
                }
                ui.add_space(8.0);
            }
        }
        if let Some(id) = edit_id
            && let Some(patient) = app.patients.iter().find(|p| p.id == id)
        {
            app.patient_form = PatientFormState::edit(patient);
        }

        ui.add_space(10.0);
        show_stats(app, ui);
    });

    patient_form::show(app, ui.ctx());
}

/// Render one patient record card. Returns true when the edit button was
/// clicked.
fn show_patient_card(ui: &mut Ui, patient: &Patient) -> bool {
    let mut edit_clicked = false;

    egui::Frame::group(ui.style())
        .inner_margin(egui::Margin::same(12))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());

            ui.horizontal(|ui| {
                ui.label(RichText::new(USER).size(26.0).color(colors::ACCENT));
                ui.add_space(6.0);

                ui.vertical(|ui| {
                    ui.label(RichText::new(&patient.name).size(16.0).strong());

                    let mut detail = format!("Age {} \u{2022} {}", patient.age, patient.condition);
                    if patient.has_trach {
                        detail.push_str(" \u{2022} Tracheostomy");
                        if let Some(size) = &patient.trach_size {
                            detail.push_str(&format!(" ({size})"));
                        }
                    }
                    ui.label(RichText::new(detail).size(12.0).weak());

                    ui.horizontal(|ui| {
                        let color = components::status_color(patient.status);
                        ui.label(
                            RichText::new(components::status_icon(patient.status))
                                .size(13.0)
                                .color(color),
                        );
                        ui.label(RichText::new(patient.status.label()).size(12.0).color(color));
                        ui.label(
                            RichText::new(format!("Updated {}", patient.last_update))
                                .size(11.0)
                                .weak(),
                        );
                    });
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui
                        .button(RichText::new(PENCIL).size(14.0))
                        .on_hover_text("Edit patient")
                        .clicked()
                    {
                        edit_clicked = true;
                    }
                });
            });

            if patient.status == PatientStatus::Review {
                ui.add_space(6.0);
                ui.horizontal(|ui| {
                    ui.label(RichText::new(WARNING_CIRCLE).size(13.0).color(colors::ACCENT_LIGHT));
                    ui.label(
                        RichText::new("Awaiting clinical review approval")
                            .size(12.0)
                            .color(colors::ACCENT_LIGHT),
                    );
                });
            }
        });

    edit_clicked
}

fn show_stats(app: &App, ui: &mut Ui) {
    let total = app.patients.len();
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
        stat_card(ui, "Total Patients", &total.to_string(), "All records");
        stat_card(ui, "In Review", &in_review.to_string(), "Scans awaiting approval");
        stat_card(ui, "Delivered", &delivered.to_string(), "Successful deliveries");
    });
}
