pub mod app;
pub mod config;
pub mod input;
pub mod plot_view;
pub mod report;
pub mod steps_view;
pub mod ui;

use app::App;
use config::AppConfig;
use tracing::info;

pub use input::{parse_levels, InputError, ParsedLevels};
pub use report::{curve_table, evaluate, evaluate_with, Outcome, Report};

/// Open the calculator window and block until it is closed.
pub fn run(config: AppConfig) -> eframe::Result<()> {
    info!(
        width = config.window.width,
        height = config.window.height,
        "opening calculator window"
    );

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("SPL Addition Calculator")
            .with_inner_size([config.window.width, config.window.height]),
        ..Default::default()
    };
    eframe::run_native(
        "SPL Addition Calculator",
        native_options,
        Box::new(|cc| Ok(Box::new(App::new(cc, config)))),
    )
}
