use eframe::egui;

use super::data::{
    SettingsData,
    DEFAULT_ENDPOINT,
};

pub struct EndpointModal {
    open: bool,
    endpoint_input: String,
    original_settings: SettingsData,
    status: Option<String>,
}

impl EndpointModal {
    pub fn new() -> Self {
        Self {
            open: false,
            endpoint_input: String::new(),
            original_settings: SettingsData::default(),
            status: None,
        }
    }

    pub fn open_settings(&mut self, current_settings: SettingsData) {
        self.endpoint_input = current_settings.endpoint.clone();
        self.original_settings = current_settings;
        self.status = None;
        self.open = true;
    }

    pub fn show(&mut self, ctx: &egui::Context) -> Option<SettingsData> {
        if !self.open {
            return None;
        }

        let mut result: Option<SettingsData> = None;

        let modal = egui::Modal::new(egui::Id::new("endpoint_settings_modal")).show(ctx, |ui| {
            ui.heading("Prediction Service Settings");
            ui.add_space(10.0);

            self.ui_endpoint_configuration(ui);
            ui.add_space(10.0);

            if let Some(status) = &self.status {
                ui.horizontal(|ui| {
                    ui.colored_label(egui::Color32::LIGHT_BLUE, "ℹ");
                    ui.label(status);
                });
                ui.add_space(5.0);
            }

            ui.separator();

            let trimmed = self.endpoint_input.trim().to_string();
            let is_dirty = trimmed != self.original_settings.endpoint;

            ui.add_space(5.0);

            ui.horizontal(|ui| {
                let save_clicked =
                    ui.add_enabled(is_dirty, egui::Button::new("Save Settings")).clicked();
                let cancel_clicked =
                    ui.add_enabled(is_dirty, egui::Button::new("Cancel")).clicked();

                let mut reset_clicked = false;
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    reset_clicked = ui.button("Restore Default").clicked();
                });

                if save_clicked {
                    if is_valid_endpoint(&trimmed) {
                        let settings =
                            SettingsData { endpoint: trimmed.trim_end_matches('/').to_string() };
                        self.original_settings = settings.clone();
                        result = Some(settings);
                        ui.close();
                    } else {
                        self.status = Some(
                            "Invalid endpoint. Use a full base URL like http://127.0.0.1:5000."
                                .to_string(),
                        );
                    }
                } else if cancel_clicked {
                    self.endpoint_input = self.original_settings.endpoint.clone();
                    self.status = None;
                } else if reset_clicked {
                    self.endpoint_input = DEFAULT_ENDPOINT.to_string();
                    self.status = None;
                }
            });
        });

        if modal.should_close() {
            self.open = false;
        }

        result
    }

    fn ui_endpoint_configuration(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Endpoint:");
            ui.add(
                egui::TextEdit::singleline(&mut self.endpoint_input)
                    .desired_width(280.0)
                    .hint_text(DEFAULT_ENDPOINT),
            );
        });

        if !is_valid_endpoint(self.endpoint_input.trim()) {
            ui.colored_label(
                egui::Color32::RED,
                "⚠ Endpoint must start with http:// or https://",
            );
        }
    }
}

impl Default for EndpointModal {
    fn default() -> Self {
        Self::new()
    }
}

fn is_valid_endpoint(endpoint: &str) -> bool {
    endpoint
        .strip_prefix("http://")
        .or_else(|| endpoint.strip_prefix("https://"))
        .is_some_and(|rest| !rest.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_validation() {
        assert!(is_valid_endpoint("http://127.0.0.1:5000"));
        assert!(is_valid_endpoint("https://predict.example.com"));

        assert!(!is_valid_endpoint(""));
        assert!(!is_valid_endpoint("http://"));
        assert!(!is_valid_endpoint("127.0.0.1:5000"));
        assert!(!is_valid_endpoint("ftp://127.0.0.1"));
    }
}
