// egui input panel: title, description, SPL entry line.

/// UI-only state that is not part of the computation.
pub struct UiState {
    /// Current contents of the comma-separated input line.
    pub input: String,
}

impl UiState {
    pub fn new(default_input: &str) -> Self {
        Self {
            input: default_input.to_owned(),
        }
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_INPUT)
    }
}

/// Draw the top input panel. Returns `true` if the input line changed
/// (meaning the combination needs to be re-evaluated).
pub fn draw_controls(ctx: &egui::Context, ui_state: &mut UiState) -> bool {
    let mut changed = false;

    egui::TopBottomPanel::top("controls")
        .min_height(110.0)
        .show(ctx, |ui| {
            ui.heading("Sound Pressure Level (SPL) Addition Calculator");
            ui.label(
                "This app calculates the combined SPL from multiple noise sources \
                 using standard acoustic procedures.",
            );
            ui.separator();

            ui.label("Enter SPL values (comma-separated, e.g. 90,85,88):");
            let response = ui.add(
                egui::TextEdit::singleline(&mut ui_state.input)
                    .desired_width(f32::INFINITY)
                    .hint_text("90,85,88"),
            );
            if response.changed() {
                changed = true;
            }
        });

    changed
}
