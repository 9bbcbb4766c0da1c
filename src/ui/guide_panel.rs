//! Care guide: collapsible reference sections for scanning, assembly, and
//! daily use.

use eframe::egui::{self, RichText, Ui};
use egui_phosphor::regular::{CARET_DOWN, CARET_RIGHT, CHECK_CIRCLE, LIGHTBULB, WARNING_CIRCLE};

use super::app::App;
use super::components::{colors, screen_header};

struct GuideItem {
    title: &'static str,
    content: &'static str,
    important: bool,
}

struct GuideSection {
    id: &'static str,
    title: &'static str,
    items: &'static [GuideItem],
}

const SECTIONS: [GuideSection; 3] = [
    GuideSection {
        id: "scanning",
        title: "Scanning Process",
        items: &[
            GuideItem {
                title: "Preparing for a Scan",
                content: "Ensure the patient is seated comfortably with their neck \
                          visible. Remove any clothing, jewelry, or medical devices \
                          from the neck area. Good lighting is essential: use bright, \
                          even light without harsh shadows.",
                important: false,
            },
            GuideItem {
                title: "Capturing the Scan",
                content: "Hold the device steady at neck height, about arm's length \
                          away. Follow the on-screen prompts to capture all four \
                          angles. The patient should remain still and look straight \
                          ahead throughout the capture.",
                important: true,
            },
            GuideItem {
                title: "After the Scan",
                content: "Review the captured angles for completeness. The scan is \
                          sent for clinical review, and you will be notified when \
                          the brace design is approved for printing.",
                important: false,
            },
        ],
    },
    GuideSection {
        id: "assembly",
        title: "Assembly Instructions",
        items: &[
            GuideItem {
                title: "Unpacking Your Brace",
                content: "Your custom brace arrives in two halves with fastening \
                          straps. Check all parts against the included list and \
                          inspect for any damage from shipping before first use.",
                important: false,
            },
            GuideItem {
                title: "Initial Assembly",
                content: "Align the front and back halves around the neck, starting \
                          from the chin support. Fasten the straps on both sides with \
                          even tension. The brace should feel snug but never tight; \
                          you should fit one finger between the brace and the skin.",
                important: true,
            },
            GuideItem {
                title: "Fit Adjustments",
                content: "Small adjustments can be made with the strap tensioners. If \
                          the brace causes pressure points or the fit changes over \
                          time, contact your care team for a refit rather than \
                          modifying the brace yourself.",
                important: false,
            },
        ],
    },
    GuideSection {
        id: "care",
        title: "Daily Care & Usage",
        items: &[
            GuideItem {
                title: "Skin Care",
                content: "Check the skin under the brace daily for redness or \
                          irritation. Keep the skin clean and dry. If pressure marks \
                          do not fade within 30 minutes of removing the brace, \
                          contact your care team.",
                important: true,
            },
            GuideItem {
                title: "Cleaning the Brace",
                content: "Wipe the brace daily with a damp cloth and mild soap. Air \
                          dry completely before wearing. Do not use harsh solvents or \
                          machine wash any component.",
                important: false,
            },
            GuideItem {
                title: "Wearing Schedule",
                content: "Follow the wearing schedule from your care team. Build up \
                          wearing time gradually during the first week to let the \
                          skin adapt.",
                important: false,
            },
        ],
    },
];

const SAFETY_REMINDERS: [&str; 3] = [
    "Never modify the brace structure yourself",
    "Remove the brace immediately if breathing feels restricted",
    "Keep follow-up appointments for fit checks",
];

/// Which section is expanded. Per-session only; reset when the screen is
/// left.
pub struct GuideState {
    pub expanded: Option<&'static str>,
}

impl Default for GuideState {
    fn default() -> Self {
        Self {
            expanded: Some("scanning"),
        }
    }
}

pub fn show(app: &mut App, ui: &mut Ui) {
    screen_header(ui, "Care Guide", "Scanning, assembly, and daily use reference");

    egui::ScrollArea::vertical().show(ui, |ui| {
        for section in &SECTIONS {
            show_section(&mut app.guide, section, ui);
            ui.add_space(8.0);
        }

        ui.add_space(4.0);
        egui::Frame::new()
            .fill(colors::ACCENT.gamma_multiply(0.12))
            .inner_margin(egui::Margin::same(12))
            .corner_radius(egui::CornerRadius::same(8))
            .show(ui, |ui| {
                ui.horizontal_wrapped(|ui| {
                    ui.label(RichText::new(LIGHTBULB).size(16.0).color(colors::ACCENT));
                    ui.label(
                        RichText::new(
                            "Need help? Contact our support team or connect with local \
                             ALS organizations for in-person assistance.",
                        )
                        .size(13.0)
                        .color(colors::ACCENT),
                    );
                });
            });

        ui.add_space(12.0);
        ui.label(RichText::new("Safety Reminders").size(16.0).strong());
        ui.add_space(4.0);
        for reminder in SAFETY_REMINDERS {
            ui.horizontal(|ui| {
                ui.label(RichText::new(CHECK_CIRCLE).size(14.0).color(colors::SUCCESS));
                ui.label(RichText::new(reminder).size(13.0));
            });
        }
        ui.add_space(12.0);
    });
}

fn show_section(state: &mut GuideState, section: &GuideSection, ui: &mut Ui) {
    let expanded = state.expanded == Some(section.id);

    egui::Frame::group(ui.style())
        .inner_margin(egui::Margin::same(12))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());

            let caret = if expanded { CARET_DOWN } else { CARET_RIGHT };
            let header = ui.horizontal(|ui| {
                ui.label(RichText::new(caret).size(14.0).color(colors::ACCENT));
                ui.label(RichText::new(section.title).size(16.0).strong());
            });
            if header
                .response
                .interact(egui::Sense::click())
                .clicked()
            {
                state.expanded = if expanded { None } else { Some(section.id) };
            }

            if expanded {
                ui.add_space(6.0);
                for item in section.items {
                    ui.horizontal(|ui| {
                        if item.important {
                            ui.label(
                                RichText::new(WARNING_CIRCLE)
                                    .size(13.0)
                                    .color(colors::WARNING),
                            );
                        }
                        ui.label(RichText::new(item.title).size(14.0).strong());
                    });
                    ui.label(RichText::new(item.content).size(12.5));
                    ui.add_space(8.0);
                }
            }
        });
}
