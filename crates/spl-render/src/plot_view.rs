// Correction-curve chart via egui_plot.

use egui_plot::{Legend, Line, Plot, Points};
use spl_core::{CombinationStep, CurveSample};

/// Draw the L+ over ΔL curve in the central panel, with the merges of the
/// current trace marked on it.
pub fn draw_curve_plot(ctx: &egui::Context, curve: &[CurveSample], trace: &[CombinationStep]) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.heading("ΔL vs L+ Chart");

        let points: Vec<[f64; 2]> = curve.iter().map(|s| [s.delta_l, s.l_plus]).collect();
        let line = Line::new(points).name("L+ vs ΔL");

        // Steps beyond the sampled range would stretch the axis; keep them off.
        let max_delta = curve.last().map_or(0.0, |s| s.delta_l);
        let steps: Vec<[f64; 2]> = trace
            .iter()
            .filter(|step| step.delta_l <= max_delta)
            .map(|step| [step.delta_l, step.l_plus])
            .collect();
        let markers = Points::new(steps).name("Steps").radius(4.0);

        Plot::new("correction_curve")
            .x_axis_label("ΔL (dB)")
            .y_axis_label("L+ (dB)")
            .legend(Legend::default())
            .show(ui, |plot_ui| {
                plot_ui.line(line);
                plot_ui.points(markers);
            });
    });
}
