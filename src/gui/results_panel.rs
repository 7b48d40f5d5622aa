use eframe::egui;

use crate::{
    gui::theme::Theme,
    prediction::PredictionState,
};

/// Error line plus the latest prediction, when there is one. Both can be
/// visible at once: a failed submit leaves the previous result on screen.
pub fn show(ui: &mut egui::Ui, state: &PredictionState, theme: &Theme) {
    if let Some(error) = state.error() {
        ui.add_space(8.0);
        ui.colored_label(theme.red(ui.ctx()), error);
    }

    if let Some(result) = state.result() {
        ui.add_space(8.0);
        ui.group(|ui| {
            ui.label(theme.heading(ui.ctx(), "Prediction Results").strong());
            ui.add_space(4.0);

            egui::Grid::new("prediction_results_grid")
                .num_columns(2)
                .spacing([24.0, 4.0])
                .show(ui, |ui| {
                    for (label, value) in result.rows() {
                        ui.strong(label);
                        ui.label(value);
                        ui.end_row();
                    }
                });

            if let Some(time) = state.result_time() {
                ui.add_space(4.0);
                ui.small(format!("Updated {}", time.format("%H:%M:%S")));
            }
        });
    }
}
