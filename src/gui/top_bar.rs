use eframe::egui::{
    self,
    containers,
};

use crate::gui::settings::{
    EndpointModal,
    SettingsData,
};

pub struct TopBar;

impl TopBar {
    pub fn show(
        ctx: &egui::Context,
        endpoint_modal: &mut EndpointModal,
        current_settings: &SettingsData,
        service_online: bool,
    ) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            containers::menu::Bar::new().ui(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.menu_button("Settings", |ui| {
                    if ui.button("Prediction Endpoint").clicked() {
                        endpoint_modal.open_settings(current_settings.clone());
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    Self::show_status_indicator(ui, current_settings, service_online);
                });
            });
        });
    }

    fn show_status_indicator(ui: &mut egui::Ui, settings: &SettingsData, online: bool) {
        let color = if online {
            egui::Color32::from_rgb(0, 200, 0)
        } else {
            egui::Color32::from_rgb(200, 80, 80)
        };

        let tooltip = if online {
            format!("Prediction service reachable at {}", settings.endpoint)
        } else {
            format!("Prediction service not reachable at {}", settings.endpoint)
        };

        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 2.0;
            ui.small("API").on_hover_text(&tooltip);
            ui.small(egui::RichText::new("●").color(color)).on_hover_text(&tooltip);
        });
    }
}
