//! Scan wizard screen: step progress, device check, patient setup, capture,
//! and review.

use eframe::egui::{self, FontId, RichText, Sense, Ui, vec2};
use egui_phosphor::regular::{ARROW_LEFT, ARROW_RIGHT, CHECK_CIRCLE, INFO, WARNING};

use crate::camera::{CameraDevice, Facing};
use crate::config::AppConfig;
use crate::error::AppError;
use crate::scan::capture::{CaptureProgress, CaptureResult, TICK_PERIOD};
use crate::scan::clock::Ticker;
use crate::scan::wizard::{ScanStep, ScanWizard};

use super::app::App;
use super::camera_view;
use super::components::{colors, notice, screen_header};

/// All mutable state owned by the scan screen. Created fresh when the screen
/// is entered and dropped when it is left.
pub struct ScanScreen {
    pub wizard: ScanWizard,
    pub capture: CaptureProgress,
    pub ticker: Ticker,
    pub camera: Option<CameraDevice>,
    pub camera_denied: bool,
    pub facing: Facing,
    pub confirm_open: bool,
    pub result: Option<CaptureResult>,
}

impl ScanScreen {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            wizard: ScanWizard::new(config.device.simulate_lidar),
            capture: CaptureProgress::new(),
            ticker: Ticker::new(TICK_PERIOD),
            camera: None,
            camera_denied: false,
            facing: config.device.facing(),
            confirm_open: false,
            result: None,
        }
    }

    /// Stop any running capture and release the camera.
    pub fn abort_capture(&mut self) {
        self.capture.cancel();
        self.ticker.stop();
        self.camera = None;
    }
}

pub fn show(app: &mut App, ui: &mut Ui) {
    screen_header(
        ui,
        "3D Neck Scanning",
        "Guided capture for professional-grade measurements",
    );

    egui::ScrollArea::vertical().show(ui, |ui| {
        show_step_progress(ui, app.scan.wizard.step());
        ui.add_space(12.0);

        match app.scan.wizard.step() {
            ScanStep::DeviceCheck => show_device_check(app, ui),
            ScanStep::PatientSetup => show_patient_setup(app, ui),
            ScanStep::Scanning => camera_view::show(app, ui),
            ScanStep::Review => show_review(app, ui),
        }

        if app.config.ui.show_safety_notices {
            ui.add_space(20.0);
            notice(
                ui,
                colors::ERROR,
                WARNING,
                "This app is for custom neck brace fitting only. For medical \
                 emergencies or urgent concerns, contact your healthcare provider \
                 immediately.",
            );
        }
        ui.add_space(12.0);
    });

    show_confirm_dialog(app, ui.ctx());
}

/// Numbered step dots joined by connector lines, with the active step's
/// title underneath.
fn show_step_progress(ui: &mut Ui, current: ScanStep) {
    const DOT: f32 = 28.0;
    const LINE: f32 = 48.0;

    let total_width = DOT * 4.0 + LINE * 3.0;
    let left = (ui.available_width() - total_width).max(0.0) / 2.0;

    ui.horizontal(|ui| {
        ui.add_space(left);
        ui.spacing_mut().item_spacing.x = 0.0;

        for (i, step) in ScanStep::ALL.into_iter().enumerate() {
            let reached = i <= current.index();
            let color = if reached {
                colors::ACCENT
            } else {
                ui.visuals().widgets.inactive.bg_fill
            };

            let (rect, _) = ui.allocate_exact_size(vec2(DOT, DOT), Sense::hover());
            ui.painter().circle_filled(rect.center(), DOT / 2.0, color);
            ui.painter().text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                if i < current.index() {
                    CHECK_CIRCLE.to_string()
                } else {
                    (i + 1).to_string()
                },
                FontId::proportional(13.0),
                egui::Color32::WHITE,
            );

            if step != ScanStep::Review {
                let done = i < current.index();
                let (line, _) = ui.allocate_exact_size(vec2(LINE, DOT), Sense::hover());
                let y = line.center().y;
                ui.painter().line_segment(
                    [egui::pos2(line.left() + 4.0, y), egui::pos2(line.right() - 4.0, y)],
                    egui::Stroke::new(
                        2.0,
                        if done {
                            colors::ACCENT
                        } else {
                            ui.visuals().widgets.inactive.bg_fill
                        },
                    ),
                );
            }
        }
    });

    ui.add_space(8.0);
    ui.vertical_centered(|ui| {
        ui.label(RichText::new(current.title()).size(17.0).strong());
        ui.label(RichText::new(current.description()).size(12.0).weak());
    });
}

fn check_row(ui: &mut Ui, color: egui::Color32, icon: &str, text: &str) {
    ui.horizontal(|ui| {
        ui.label(RichText::new(icon).size(16.0).color(color));
        ui.label(RichText::new(text).size(14.0));
    });
}

fn show_device_check(app: &mut App, ui: &mut Ui) {
    let has_lidar = app.scan.wizard.has_lidar;

    egui::Frame::group(ui.style())
        .inner_margin(egui::Margin::same(16))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.vertical_centered(|ui| {
                ui.label(
                    RichText::new(ScanStep::DeviceCheck.icon())
                        .size(32.0)
                        .color(colors::ACCENT),
                );
                ui.label(RichText::new("Device Compatibility Check").size(18.0).strong());
            });
            ui.add_space(12.0);

            check_row(ui, colors::SUCCESS, CHECK_CIRCLE, "Camera access available");
            check_row(ui, colors::SUCCESS, CHECK_CIRCLE, "Sufficient storage space");
            if has_lidar {
                check_row(
                    ui,
                    colors::SUCCESS,
                    CHECK_CIRCLE,
                    "LiDAR available (enhanced accuracy)",
                );
            } else {
                check_row(
                    ui,
                    colors::WARNING,
                    WARNING,
                    "LiDAR not detected (standard mode)",
                );
            }

            ui.add_space(12.0);
            notice(
                ui,
                colors::ACCENT,
                INFO,
                "For best results, ensure good lighting and remove any clothing or \
                 accessories around the neck area.",
            );
        });

    ui.add_space(16.0);
    ui.vertical_centered(|ui| {
        let start = egui::Button::new(
            RichText::new(format!("Start Scanning Process {ARROW_RIGHT}")).size(15.0),
        )
        .min_size(vec2(230.0, 36.0));
        if ui.add(start).clicked() {
            app.scan.confirm_open = true;
        }
    });
}

const SETUP_STEPS: [&str; 5] = [
    "Have the patient sit upright in a comfortable position",
    "Remove any clothing or accessories from the neck area",
    "Ensure even, bright lighting without harsh shadows",
    "Position the camera at neck height, about arm's length away",
    "Ask the patient to look straight ahead and hold still",
];

fn show_patient_setup(app: &mut App, ui: &mut Ui) {
    egui::Frame::group(ui.style())
        .inner_margin(egui::Margin::same(16))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new("Prepare for Scanning").size(18.0).strong());
            ui.add_space(8.0);

            for (i, step) in SETUP_STEPS.iter().enumerate() {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(format!("{}.", i + 1))
                            .strong()
                            .color(colors::ACCENT),
                    );
                    ui.label(RichText::new(*step).size(14.0));
                });
                ui.add_space(4.0);
            }

            ui.add_space(8.0);
            notice(
                ui,
                colors::WARNING,
                WARNING,
                "Remove any medical devices or jewelry from the neck area before \
                 scanning. These can interfere with measurement accuracy.",
            );
        });

    ui.add_space(16.0);
    ui.horizontal(|ui| {
        if ui
            .button(RichText::new(format!("{ARROW_LEFT} Back")).size(14.0))
            .clicked()
        {
            app.scan.wizard.go_back();
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let begin = egui::Button::new(RichText::new("Begin 3D Scan").size(15.0))
                .min_size(vec2(160.0, 36.0));
            if ui.add(begin).clicked() && app.scan.wizard.go_next() {
                open_camera(app);
            }
        });
    });
}

/// Acquire the camera for the scanning step. A permission denial switches
/// the camera view into its access-request mode instead of failing the step.
fn open_camera(app: &mut App) {
    match CameraDevice::open(app.scan.facing) {
        Ok(camera) => {
            app.scan.camera = Some(camera);
            app.scan.camera_denied = false;
        }
        Err(AppError::CameraAccessDenied) => {
            app.scan.camera_denied = true;
            app.log_warning("Camera access denied");
        }
        Err(err) => {
            app.error_message = Some(err.to_string());
            app.log_error(err.to_string());
            app.scan.wizard.go_back();
        }
    }
}

fn show_review(app: &mut App, ui: &mut Ui) {
    egui::Frame::group(ui.style())
        .inner_margin(egui::Margin::same(16))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.vertical_centered(|ui| {
                ui.label(RichText::new(CHECK_CIRCLE).size(40.0).color(colors::SUCCESS));
                ui.label(RichText::new("Scan Captured").size(20.0).strong());
            });
            ui.add_space(12.0);

            if let Some(result) = &app.scan.result {
                egui::Grid::new("scan_result_grid")
                    .num_columns(2)
                    .spacing([24.0, 6.0])
                    .show(ui, |ui| {
                        ui.label(RichText::new("Quality").strong());
                        ui.label(result.quality);
                        ui.end_row();

                        ui.label(RichText::new("Captured").strong());
                        ui.label(result.timestamp.format("%Y-%m-%d %H:%M:%S").to_string());
                        ui.end_row();
                    });

                ui.add_space(8.0);
                ui.label(RichText::new("Captured angles").strong());
                for angle in &result.angles {
                    check_row(ui, colors::SUCCESS, CHECK_CIRCLE, angle);
                }
            } else {
                ui.label(RichText::new("No capture data available").weak());
            }

            ui.add_space(12.0);
            ui.label(
                RichText::new(
                    "Upload for clinical review will be available in a future release.",
                )
                .size(12.0)
                .weak(),
            );
        });
}

fn show_confirm_dialog(app: &mut App, ctx: &egui::Context) {
    if !app.scan.confirm_open {
        return;
    }

    egui::Window::new("Start 3D Scan")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.set_max_width(340.0);
            ui.label(
                "This will access your camera to capture neck measurements. Ensure \
                 good lighting and a clear view of the patient's neck area.",
            );
            ui.add_space(12.0);
            ui.horizontal(|ui| {
                if ui.button("Cancel").clicked() {
                    app.scan.confirm_open = false;
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button(RichText::new("Continue").strong()).clicked() {
                        app.scan.confirm_open = false;
                        app.scan.wizard.confirm_start();
                        app.log_info("Scan session started");
                    }
                });
            });
        });
}
