//! UI module - egui settings panel
//!
//! Right-hand panel with the selected-time readout, position readout,
//! animation replay, and the reduced-motion preference.

use nannou_egui::egui;

/// Result of settings panel interactions
#[derive(Default)]
pub struct PanelResult {
    /// Restart the chart draw-in animation
    pub replay: bool,
    /// Reduced motion setting changed
    pub reduced_motion_changed: bool,
}

/// Draw the settings panel and report what the user did.
pub fn draw_settings_panel(
    ctx: &egui::Context,
    time_label: &str,
    position: f32,
    is_dragging: bool,
    reduced_motion: &mut bool,
) -> PanelResult {
    let mut result = PanelResult::default();

    egui::SidePanel::right("settings_panel")
        .resizable(false)
        .default_width(260.0)
        .show(ctx, |ui| {
            ui.add_space(10.0);

            ui.heading("Selected Time");
            ui.add_space(5.0);

            ui.label(
                egui::RichText::new(time_label)
                    .size(32.0)
                    .color(if is_dragging {
                        egui::Color32::from_rgb(120, 180, 220)
                    } else {
                        egui::Color32::from_rgb(245, 230, 211)
                    }),
            );

            ui.label(
                egui::RichText::new(format!("Position: {:.3}", position))
                    .size(12.0)
                    .color(egui::Color32::from_rgb(166, 144, 128)),
            );

            if is_dragging {
                ui.add_space(5.0);
                ui.colored_label(egui::Color32::from_rgb(120, 180, 220), "SCRUBBING");
            }

            ui.add_space(15.0);
            ui.separator();
            ui.add_space(10.0);

            ui.heading("Animation");
            ui.add_space(5.0);

            if ui.button("Replay draw-in").clicked() {
                result.replay = true;
            }

            ui.add_space(15.0);
            ui.separator();
            ui.add_space(10.0);

            ui.heading("Settings");
            ui.add_space(5.0);

            if ui.checkbox(reduced_motion, "Reduced Motion").changed() {
                result.reduced_motion_changed = true;
            }
            ui.label(
                egui::RichText::new("Skips the chart draw-in animation")
                    .size(11.0)
                    .color(egui::Color32::from_rgb(140, 130, 120)),
            );

            ui.add_space(10.0);
        });

    result
}
