// eframe application: owns the input, the current outcome and the sampled curve.

use spl_core::CurveSample;
use tracing::debug;

use crate::config::AppConfig;
use crate::report::{evaluate_with, Outcome};
use crate::{plot_view, steps_view, ui, ui::UiState};

pub struct App {
    config: AppConfig,
    ui_state: UiState,
    outcome: Outcome,
    /// The curve does not depend on the input; sampled once.
    curve: Vec<CurveSample>,
}

impl App {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        let ui_state = UiState::new(&config.default_input);
        let outcome = evaluate_with(&ui_state.input, config.decimals);
        let curve = spl_core::sample_curve(config.curve.max_delta_db, config.curve.samples);

        Self {
            config,
            ui_state,
            outcome,
            curve,
        }
    }

    fn recompute(&mut self) {
        self.outcome = evaluate_with(&self.ui_state.input, self.config.decimals);
        match &self.outcome {
            Outcome::Computed(report) => {
                debug!(combined = report.combination.combined, "recomputed");
            }
            Outcome::Warning(message) | Outcome::Error(message) => {
                debug!(input = %self.ui_state.input, reason = %message, "input rejected");
            }
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Panels must be added before the central panel.
        if ui::draw_controls(ctx, &mut self.ui_state) {
            self.recompute();
        }

        match &self.outcome {
            Outcome::Computed(report) => {
                steps_view::draw_steps(ctx, report);
                plot_view::draw_curve_plot(ctx, &self.curve, &report.combination.trace);
            }
            Outcome::Warning(message) => steps_view::draw_message(ctx, message, false),
            Outcome::Error(message) => steps_view::draw_message(ctx, message, true),
        }
    }
}
