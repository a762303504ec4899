// Step list and messages drawn with plain egui widgets.

use crate::report::Report;

const WARNING_COLOR: egui::Color32 = egui::Color32::from_rgb(230, 180, 60);
const ERROR_COLOR: egui::Color32 = egui::Color32::from_rgb(220, 80, 70);
const SUCCESS_COLOR: egui::Color32 = egui::Color32::from_rgb(90, 190, 110);

/// Draw the calculation steps and the final level in a left side panel.
pub fn draw_steps(ctx: &egui::Context, report: &Report) {
    egui::SidePanel::left("steps")
        .min_width(380.0)
        .show(ctx, |ui| {
            ui.heading("Calculation Steps");
            ui.separator();

            for line in report.step_lines() {
                ui.monospace(line);
            }

            if let Some(note) = report.ignored_line() {
                ui.add_space(6.0);
                ui.colored_label(WARNING_COLOR, note);
            }

            ui.add_space(10.0);
            ui.label(
                egui::RichText::new(report.final_line())
                    .strong()
                    .color(SUCCESS_COLOR),
            );
        });
}

/// Draw a warning or error in place of the results.
pub fn draw_message(ctx: &egui::Context, message: &str, is_error: bool) {
    let color = if is_error { ERROR_COLOR } else { WARNING_COLOR };
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.colored_label(color, message);
    });
}
