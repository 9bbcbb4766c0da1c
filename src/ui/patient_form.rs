//! Patient create/edit form dialog with inline validation and a final
//! confirmation step before saving.

use eframe::egui::{self, RichText};

use crate::models::patient::{FieldErrors, Patient, PatientDraft};

use super::app::App;
use super::components::colors;

/// Form dialog state. Closed by default; opened for a new patient or
/// pre-filled for an edit.
#[derive(Debug, Clone, Default)]
pub struct PatientFormState {
    pub draft: PatientDraft,
    pub errors: FieldErrors,
    pub editing_id: Option<u32>,
    pub is_open: bool,
    pub confirm_open: bool,
}

impl PatientFormState {
    pub fn new_patient() -> Self {
        Self {
            is_open: true,
            ..Self::default()
        }
    }

    pub fn edit(patient: &Patient) -> Self {
        Self {
            draft: PatientDraft::from_patient(patient),
            errors: FieldErrors::default(),
            editing_id: Some(patient.id),
            is_open: true,
            confirm_open: false,
        }
    }
}

pub fn show(app: &mut App, ctx: &egui::Context) {
    if !app.patient_form.is_open {
        return;
    }

    if app.patient_form.confirm_open {
        show_confirm_dialog(app, ctx);
        return;
    }

    let title = if app.patient_form.editing_id.is_some() {
        "Edit Patient"
    } else {
        "New Patient"
    };

    let mut close = false;
    egui::Window::new(title)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.set_min_width(360.0);
            let form = &mut app.patient_form;

            egui::Grid::new("patient_form_grid")
                .num_columns(2)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    ui.label("Full Name");
                    if ui
                        .text_edit_singleline(&mut form.draft.name)
                        .changed()
                    {
                        form.errors.name = None;
                    }
                    ui.end_row();
                    field_error(ui, form.errors.name);

                    ui.label("Age");
                    if ui
                        .add(
                            egui::TextEdit::singleline(&mut form.draft.age)
                                .char_limit(3)
                                .desired_width(60.0),
                        )
                        .changed()
                    {
                        form.errors.age = None;
                    }
                    ui.end_row();
                    field_error(ui, form.errors.age);

                    ui.label("Medical Condition");
                    if ui
                        .text_edit_singleline(&mut form.draft.condition)
                        .changed()
                    {
                        form.errors.condition = None;
                    }
                    ui.end_row();
                    field_error(ui, form.errors.condition);
                });

            ui.add_space(6.0);
            ui.checkbox(&mut form.draft.has_trach, "Patient has a tracheostomy");
            if form.draft.has_trach {
                ui.horizontal(|ui| {
                    ui.label("Trach Size");
                    if ui
                        .add(
                            egui::TextEdit::singleline(&mut form.draft.trach_size)
                                .hint_text("e.g. 8.0mm")
                                .desired_width(100.0),
                        )
                        .changed()
                    {
                        form.errors.trach_size = None;
                    }
                });
                if let Some(error) = form.errors.trach_size {
                    ui.label(RichText::new(error).size(11.0).color(colors::ERROR));
                }
                ui.label(
                    RichText::new(
                        "This ensures proper clearance around the tracheostomy site",
                    )
                    .size(11.0)
                    .weak(),
                );
            }

            ui.add_space(6.0);
            ui.label("Notes");
            ui.add(
                egui::TextEdit::multiline(&mut form.draft.notes)
                    .desired_rows(2)
                    .desired_width(f32::INFINITY),
            );

            ui.add_space(12.0);
            ui.horizontal(|ui| {
                if ui.button("Cancel").clicked() {
                    close = true;
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui
                        .button(RichText::new("Save & Continue").strong())
                        .clicked()
                    {
                        form.errors = form.draft.validate();
                        if form.errors.is_empty() {
                            form.confirm_open = true;
                        }
                    }
                });
            });
        });

    if close {
        app.patient_form = PatientFormState::default();
    }
}

fn field_error(ui: &mut egui::Ui, error: Option<&'static str>) {
    if let Some(message) = error {
        ui.label("");
        ui.label(RichText::new(message).size(11.0).color(colors::ERROR));
        ui.end_row();
    }
}

fn show_confirm_dialog(app: &mut App, ctx: &egui::Context) {
    let mut review = false;
    let mut confirm = false;

    egui::Window::new("Confirm Patient Information")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.set_max_width(340.0);
            ui.label(
                "Please verify all patient information is accurate before \
                 proceeding with the scan.",
            );
            ui.add_space(8.0);

            let draft = &app.patient_form.draft;
            ui.label(RichText::new(&draft.name).strong());
            ui.label(format!("Age {} \u{2022} {}", draft.age.trim(), draft.condition.trim()));
            if draft.has_trach {
                ui.label(format!("Tracheostomy: {}", draft.trach_size.trim()));
            }

            ui.add_space(12.0);
            ui.horizontal(|ui| {
                if ui.button("Review").clicked() {
                    review = true;
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button(RichText::new("Confirm").strong()).clicked() {
                        confirm = true;
                    }
                });
            });
        });

    if review {
        app.patient_form.confirm_open = false;
    }
    if confirm {
        app.patient_form.confirm_open = false;
        app.commit_patient();
    }
}
