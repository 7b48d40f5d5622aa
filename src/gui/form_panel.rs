use eframe::egui;
use egui_extras::{
    Column,
    TableBuilder,
};

use crate::core::models::{
    FormState,
    TelemetryField,
};

/// Striped table of the seventeen telemetry inputs. Returns true when the
/// Predict button was clicked this frame.
pub fn show(ui: &mut egui::Ui, form: &mut FormState, in_flight: bool) -> bool {
    let text_height =
        egui::TextStyle::Body.resolve(ui.style()).size.max(ui.spacing().interact_size.y);

    TableBuilder::new(ui)
        .striped(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::auto().at_least(190.0))
        .column(Column::remainder().at_least(140.0))
        .column(Column::auto().at_least(56.0))
        .header(25.0, |mut header| {
            header.col(|ui| {
                ui.strong("Telemetry");
            });
            header.col(|ui| {
                ui.strong("Value");
            });
            header.col(|ui| {
                ui.strong("Unit");
            });
        })
        .body(|body| {
            body.rows(text_height + 6.0, TelemetryField::ALL.len(), |mut row| {
                let field = TelemetryField::ALL[row.index()];

                row.col(|ui| {
                    let label = ui.label(field.label());
                    if field.is_encoded_category() {
                        label.on_hover_text("Class code as used in training, not free text");
                    }
                });

                row.col(|ui| {
                    let hint = if field.is_encoded_category() { "class code" } else { "0.0" };
                    ui.add(
                        egui::TextEdit::singleline(form.value_mut(field))
                            .hint_text(hint)
                            .desired_width(f32::INFINITY),
                    );
                });

                row.col(|ui| {
                    ui.label(field.unit().unwrap_or(""));
                });
            });
        });

    ui.add_space(12.0);

    ui.add_enabled(!in_flight, egui::Button::new("Predict")).clicked()
}
