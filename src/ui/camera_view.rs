//! Simulated camera preview with the capture overlay.
//!
//! There is no real video feed on desktop; the preview paints a frame with
//! alignment marks and drives the capture state machine from the frame loop.

use std::time::Instant;

use eframe::egui::{self, Color32, FontId, Pos2, ProgressBar, Rect, RichText, Sense, Stroke, Ui, vec2};
use egui_phosphor::regular::{CAMERA, CAMERA_ROTATE, CHECK_CIRCLE, SQUARE, WARNING_CIRCLE, X};

use crate::camera::{self, CameraDevice, Permission};
use crate::scan::wizard::ScanStep;

use super::app::App;
use super::components::colors;

pub fn show(app: &mut App, ui: &mut Ui) {
    if app.scan.camera_denied {
        show_permission_view(app, ui);
        return;
    }

    drive_capture(app);
    if app.scan.wizard.step() != ScanStep::Scanning {
        // The capture just completed; the review step renders next frame.
        return;
    }

    show_preview(app, ui);
    ui.add_space(10.0);
    show_progress(app, ui);
    ui.add_space(10.0);
    show_controls(app, ui);
    ui.add_space(12.0);
    show_tips(ui);
}

/// Poll the ticker and feed due ticks to the capture. On the completing
/// tick the result is kept, the camera released, and the wizard moved on.
fn drive_capture(app: &mut App) {
    if !app.scan.capture.is_running() {
        return;
    }
    if app.scan.ticker.poll(Instant::now())
        && let Some(result) = app.scan.capture.tick()
    {
        app.scan.ticker.stop();
        app.scan.camera = None;
        app.scan.result = Some(result);
        app.scan.wizard.complete_scan();
        app.log_success("Scan captured: 4 angles, quality high");
    }
}

fn show_permission_view(app: &mut App, ui: &mut Ui) {
    ui.vertical_centered(|ui| {
        ui.add_space(40.0);
        ui.label(RichText::new(WARNING_CIRCLE).size(48.0).color(colors::ERROR));
        ui.label(RichText::new("Camera Access Required").size(22.0).strong());
        ui.add_space(6.0);
        ui.label(
            "We need camera access to capture 3D neck measurements for your \
             custom brace fitting.",
        );
        ui.add_space(14.0);

        if ui
            .add(egui::Button::new(RichText::new("Grant Camera Access").size(14.0)))
            .clicked()
        {
            match camera::request_permission() {
                Permission::Granted => match CameraDevice::open(app.scan.facing) {
                    Ok(device) => {
                        app.scan.camera = Some(device);
                        app.scan.camera_denied = false;
                        app.log_info("Camera access granted");
                    }
                    Err(err) => {
                        app.error_message = Some(err.to_string());
                    }
                },
                Permission::Denied => {
                    app.log_warning("Camera permission still denied");
                }
            }
        }
        ui.add_space(4.0);
        if ui.button("Back").clicked() {
            app.scan.abort_capture();
            app.scan.camera_denied = false;
            app.scan.wizard.go_back();
        }
    });
}

fn show_preview(app: &App, ui: &mut Ui) {
    let width = ui.available_width().min(520.0);
    let size = vec2(width, width * 0.72);
    let left = (ui.available_width() - width).max(0.0) / 2.0;

    ui.horizontal(|ui| {
        ui.add_space(left);
        let (rect, _) = ui.allocate_exact_size(size, Sense::hover());
        let painter = ui.painter_at(rect);

        painter.rect_filled(rect, 8.0, Color32::from_rgb(24, 26, 30));

        // Alignment frame: corner marks around the target area.
        let side = rect.height().min(rect.width()) * 0.62;
        let frame = Rect::from_center_size(rect.center(), vec2(side, side));
        let stroke = Stroke::new(4.0, colors::ACCENT_LIGHT);
        let arm = side * 0.18;
        for (corner, dx, dy) in [
            (frame.left_top(), arm, arm),
            (frame.right_top(), -arm, arm),
            (frame.left_bottom(), arm, -arm),
            (frame.right_bottom(), -arm, -arm),
        ] {
            painter.line_segment([corner, Pos2::new(corner.x + dx, corner.y)], stroke);
            painter.line_segment([corner, Pos2::new(corner.x, corner.y + dy)], stroke);
        }

        if app.scan.capture.is_running() {
            let y = frame.center().y;
            painter.line_segment(
                [Pos2::new(frame.left(), y), Pos2::new(frame.right(), y)],
                Stroke::new(2.0, colors::ACCENT_LIGHT),
            );
        }

        let instruction = if app.scan.capture.is_running() {
            app.scan.capture.current_angle()
        } else {
            "Position neck area within the frame"
        };
        painter.text(
            Pos2::new(rect.center().x, frame.bottom() + 26.0),
            egui::Align2::CENTER_CENTER,
            instruction,
            FontId::proportional(15.0),
            Color32::WHITE,
        );

        painter.text(
            Pos2::new(rect.left() + 10.0, rect.bottom() - 14.0),
            egui::Align2::LEFT_CENTER,
            app.scan.facing.label(),
            FontId::proportional(11.0),
            Color32::GRAY,
        );
    });
}

fn show_progress(app: &App, ui: &mut Ui) {
    if !app.scan.capture.is_running() {
        return;
    }
    let percent = app.scan.capture.percent();
    ui.vertical_centered(|ui| {
        ui.add(
            ProgressBar::new(f32::from(percent) / 100.0)
                .desired_width(320.0)
                .text(format!("{percent}% Complete"))
                .animate(true),
        );
    });
}

fn show_controls(app: &mut App, ui: &mut Ui) {
    let running = app.scan.capture.is_running();

    ui.vertical_centered(|ui| {
        ui.horizontal(|ui| {
            let total = 96.0 + 140.0 + 96.0 + ui.spacing().item_spacing.x * 2.0;
            ui.add_space((ui.available_width() - total).max(0.0) / 2.0);

            let cancel = egui::Button::new(RichText::new(format!("{X} Cancel")).size(13.0))
                .min_size(vec2(96.0, 34.0));
            if ui.add(cancel).clicked() {
                app.scan.abort_capture();
                app.scan.wizard.go_back();
                app.log_info("Capture cancelled");
            }

            if running {
                ui.add_sized(vec2(140.0, 34.0), egui::Spinner::new());
            } else {
                let capture = egui::Button::new(
                    RichText::new(format!("{CAMERA} Capture")).size(15.0).strong(),
                )
                .min_size(vec2(140.0, 34.0))
                .fill(colors::ACCENT);
                if ui.add(capture).clicked() && app.scan.capture.start() {
                    app.scan.ticker.start(Instant::now());
                    app.log_info("Capture started");
                }
            }

            let flip = egui::Button::new(RichText::new(format!("{CAMERA_ROTATE} Flip")).size(13.0))
                .min_size(vec2(96.0, 34.0));
            if ui.add_enabled(!running, flip).clicked() {
                let facing = app.scan.facing.toggled();
                app.scan.facing = facing;
                if let Some(device) = &mut app.scan.camera {
                    device.set_facing(facing);
                }
            }
        });
    });
}

fn show_tips(ui: &mut Ui) {
    egui::Frame::new()
        .fill(ui.style().visuals.extreme_bg_color)
        .inner_margin(egui::Margin::same(12))
        .corner_radius(egui::CornerRadius::same(8))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(RichText::new(SQUARE).color(colors::ACCENT_LIGHT));
                ui.label(RichText::new("Keep device steady").size(13.0));
                ui.add_space(24.0);
                ui.label(RichText::new(CHECK_CIRCLE).color(colors::SUCCESS));
                ui.label(RichText::new("Good lighting required").size(13.0));
            });
        });
}
