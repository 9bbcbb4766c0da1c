//! Main application UI state.

use chrono::{DateTime, Local};
use eframe::egui::{self, Align, Layout, ProgressBar, RichText};
use egui_phosphor::regular::{BOOK_OPEN, GEAR, HOUSE, SCAN, USERS};

use crate::config::AppConfig;
use crate::models::patient::{Patient, PatientStatus, sample_patients};

use super::components::colors;
use super::guide_panel::{self, GuideState};
use super::home_panel;
use super::patient_form::PatientFormState;
use super::patients_panel;
use super::scan_panel::{self, ScanScreen};
use super::settings_panel::{self, SettingsState};

/// Top-level screens reachable from the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Panel {
    #[default]
    Home,
    Patients,
    Scan,
    Guide,
    Settings,
}

impl Panel {
    const ALL: [Panel; 5] = [
        Panel::Home,
        Panel::Patients,
        Panel::Scan,
        Panel::Guide,
        Panel::Settings,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Panel::Home => "Home",
            Panel::Patients => "Patients",
            Panel::Scan => "Scan",
            Panel::Guide => "Guide",
            Panel::Settings => "Settings",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            Panel::Home => HOUSE,
            Panel::Patients => USERS,
            Panel::Scan => SCAN,
            Panel::Guide => BOOK_OPEN,
            Panel::Settings => GEAR,
        }
    }
}

/// Log level for UI messages.
#[derive(Clone, Copy, Debug)]
pub enum LogLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// Log entry for display in the activity feed.
#[derive(Clone)]
pub struct LogEntry {
    pub timestamp: DateTime<Local>,
    pub message: String,
    pub level: LogLevel,
}

/// Main application state.
pub struct App {
    pub config: AppConfig,
    pub current_panel: Panel,

    // Patients screen
    pub patients: Vec<Patient>,
    pub patient_search: String,
    pub patient_form: PatientFormState,
    pub next_patient_id: u32,

    // Scan screen
    pub scan: ScanScreen,

    // Guide and settings screens
    pub guide: GuideState,
    pub settings: SettingsState,

    // Activity log and dialogs
    pub log_messages: Vec<LogEntry>,
    pub error_message: Option<String>,
    pub success_message: Option<String>,
    pub initial_error: Option<String>,
}

impl App {
    pub fn new(config: AppConfig, initial_error: Option<String>) -> Self {
        let patients = sample_patients();
        let next_patient_id = patients.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        let scan = ScanScreen::new(&config);

        let mut app = Self {
            config,
            current_panel: Panel::default(),
            patients,
            patient_search: String::new(),
            patient_form: PatientFormState::default(),
            next_patient_id,
            scan,
            guide: GuideState::default(),
            settings: SettingsState::default(),
            log_messages: Vec::new(),
            error_message: None,
            success_message: None,
            initial_error,
        };
        app.log_info("Application started");
        app
    }

    pub fn log(&mut self, message: impl Into<String>, level: LogLevel) {
        let message = message.into();
        match level {
            LogLevel::Info => tracing::info!("{message}"),
            LogLevel::Success => tracing::info!("{message}"),
            LogLevel::Warning => tracing::warn!("{message}"),
            LogLevel::Error => tracing::error!("{message}"),
        }
        self.log_messages.push(LogEntry {
            timestamp: Local::now(),
            message,
            level,
        });
        if self.log_messages.len() > 100 {
            self.log_messages.remove(0);
        }
    }

    pub fn log_info(&mut self, message: impl Into<String>) {
        self.log(message, LogLevel::Info);
    }

    pub fn log_success(&mut self, message: impl Into<String>) {
        self.log(message, LogLevel::Success);
    }

    pub fn log_warning(&mut self, message: impl Into<String>) {
        self.log(message, LogLevel::Warning);
    }

    pub fn log_error(&mut self, message: impl Into<String>) {
        self.log(message, LogLevel::Error);
    }

    /// Switch to another panel. The departing screen's state is discarded,
    /// so every screen starts fresh on entry.
    pub fn navigate(&mut self, panel: Panel) {
        if panel == self.current_panel {
            return;
        }
        match self.current_panel {
            Panel::Scan => {
                if self.scan.capture.is_running() {
                    self.log_warning("Capture cancelled by navigation");
                }
                self.scan = ScanScreen::new(&self.config);
            }
            Panel::Patients => {
                self.patient_search.clear();
                self.patient_form = PatientFormState::default();
            }
            Panel::Guide => self.guide = GuideState::default(),
            Panel::Settings => self.settings = SettingsState::default(),
            Panel::Home => {}
        }
        self.current_panel = panel;
    }

    /// Insert or update a patient from a confirmed, validated form.
    pub fn commit_patient(&mut self) {
        let form = &self.patient_form;
        let (id, status) = match form.editing_id {
            Some(id) => {
                let status = self
                    .patients
                    .iter()
                    .find(|p| p.id == id)
                    .map(|p| p.status)
                    .unwrap_or(PatientStatus::Scanning);
                (id, status)
            }
            None => (self.next_patient_id, PatientStatus::Scanning),
        };

        let Some(patient) = form.draft.to_patient(id, status) else {
            self.error_message = Some("Patient form is incomplete".to_string());
            return;
        };

        let name = patient.name.clone();
        match form.editing_id {
            Some(id) => {
                if let Some(slot) = self.patients.iter_mut().find(|p| p.id == id) {
                    *slot = patient;
                }
            }
            None => {
                self.patients.push(patient);
                self.next_patient_id += 1;
            }
        }

        self.success_message = Some(format!("Patient '{name}' saved"));
        self.log_success(format!("Patient '{name}' saved"));
        self.patient_form = PatientFormState::default();
    }

    fn show_nav_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("nav_bar").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new("CervCare")
                        .size(18.0)
                        .strong()
                        .color(colors::ACCENT),
                );
                ui.add_space(20.0);

                let mut target = None;
                for panel in Panel::ALL {
                    let selected = self.current_panel == panel;
                    let text = format!("{} {}", panel.icon(), panel.name());
                    if ui.selectable_label(selected, text).clicked() && !selected {
                        target = Some(panel);
                    }
                }
                if let Some(panel) = target {
                    self.navigate(panel);
                }
            });
            ui.add_space(4.0);
        });
    }

    fn show_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if self.config.device.simulate_lidar {
                    ui.label(RichText::new("LiDAR: enhanced accuracy").color(colors::SUCCESS));
                } else {
                    ui.label(RichText::new("LiDAR: standard mode").color(colors::NEUTRAL));
                }

                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    if self.scan.capture.is_running() {
                        ui.add(
                            ProgressBar::new(f32::from(self.scan.capture.percent()) / 100.0)
                                .desired_width(220.0)
                                .text(self.scan.capture.current_angle())
                                .animate(true),
                        );
                        ui.label("Capturing:");
                    }
                });
            });
        });
    }

    fn show_dialogs(&mut self, ctx: &egui::Context) {
        if let Some(message) = self.initial_error.clone() {
            egui::Window::new("Configuration Error")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.label(RichText::new(&message).color(colors::ERROR));
                    ui.label("Default settings are in effect for this session.");
                    ui.add_space(8.0);
                    if ui.button("Continue").clicked() {
                        self.initial_error = None;
                    }
                });
        }

        if let Some(message) = self.error_message.clone() {
            egui::Window::new("Error")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.label(RichText::new(&message).color(colors::ERROR));
                    ui.add_space(8.0);
                    if ui.button("OK").clicked() {
                        self.error_message = None;
                    }
                });
        }

        if let Some(message) = self.success_message.clone() {
            egui::Window::new("Success")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.label(RichText::new(&message).color(colors::SUCCESS));
                    ui.add_space(8.0);
                    if ui.button("OK").clicked() {
                        self.success_message = None;
                    }
                });
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // The capture advances on wall-clock ticks, so keep frames coming
        // while one is running instead of waiting for input events.
        if self.scan.capture.is_running() {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }

        self.show_nav_bar(ctx);
        self.show_status_bar(ctx);
        self.show_dialogs(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            match self.current_panel {
                Panel::Home => {
                    if let Some(next) = home_panel::show(self, ui) {
                        self.navigate(next);
                    }
                }
                Panel::Patients => patients_panel::show(self, ui),
                Panel::Scan => scan_panel::show(self, ui),
                Panel::Guide => guide_panel::show(self, ui),
                Panel::Settings => settings_panel::show(self, ui),
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan::wizard::ScanStep;

    fn test_app() -> App {
        App::new(AppConfig::default(), None)
    }

    #[test]
    fn test_navigation_discards_screen_state() {
        let mut app = test_app();

        app.navigate(Panel::Scan);
        app.scan.wizard.confirm_start();
        app.scan.wizard.go_next();
        assert_eq!(app.scan.wizard.step(), ScanStep::Scanning);

        app.navigate(Panel::Home);
        app.navigate(Panel::Scan);
        assert_eq!(app.scan.wizard.step(), ScanStep::DeviceCheck);
    }

    #[test]
    fn test_navigation_clears_patient_search() {
        let mut app = test_app();

        app.navigate(Panel::Patients);
        app.patient_search = "als".to_string();

        app.navigate(Panel::Home);
        assert!(app.patient_search.is_empty());
    }

    #[test]
    fn test_navigate_to_current_panel_keeps_state() {
        let mut app = test_app();
        app.navigate(Panel::Patients);
        app.patient_search = "maria".to_string();

        app.navigate(Panel::Patients);
        assert_eq!(app.patient_search, "maria");
    }

    #[test]
    fn test_commit_new_patient_appends_and_bumps_id() {
        let mut app = test_app();
        let before = app.patients.len();
        let expected_id = app.next_patient_id;

        app.patient_form = PatientFormState::new_patient();
        app.patient_form.draft.name = "Test Patient".to_string();
        app.patient_form.draft.age = "45".to_string();
        app.patient_form.draft.condition = "ALS".to_string();
        app.commit_patient();

        assert_eq!(app.patients.len(), before + 1);
        let added = app.patients.last().unwrap();
        assert_eq!(added.id, expected_id);
        assert_eq!(added.status, PatientStatus::Scanning);
        assert_eq!(app.next_patient_id, expected_id + 1);
        assert!(app.success_message.is_some());
    }

    #[test]
    fn test_commit_edit_preserves_status() {
        let mut app = test_app();
        let target = app.patients[1].clone();
        assert_eq!(target.status, PatientStatus::Delivered);

        app.patient_form = PatientFormState::edit(&target);
        app.patient_form.draft.name = "Maria Garcia-Lopez".to_string();
        app.commit_patient();

        let updated = app.patients.iter().find(|p| p.id == target.id).unwrap();
        assert_eq!(updated.name, "Maria Garcia-Lopez");
        assert_eq!(updated.status, PatientStatus::Delivered);
    }

    #[test]
    fn test_incomplete_form_is_rejected_with_error() {
        let mut app = test_app();
        let before = app.patients.len();

        app.patient_form = PatientFormState::new_patient();
        app.patient_form.draft.age = "abc".to_string();
        app.commit_patient();

        assert_eq!(app.patients.len(), before);
        assert!(app.error_message.is_some());
    }

    #[test]
    fn test_log_capped_at_hundred_entries() {
        let mut app = test_app();
        for i in 0..150 {
            app.log_info(format!("event {i}"));
        }
        assert_eq!(app.log_messages.len(), 100);
        assert_eq!(app.log_messages.last().unwrap().message, "event 149");
    }
}
