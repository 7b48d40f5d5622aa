use std::time::{
    Duration,
    Instant,
};

use eframe::egui;

use super::{
    form_panel,
    message_overlay::MessageOverlay,
    results_panel,
    settings::{
        EndpointModal,
        SettingsData,
    },
    theme::{
        set_theme,
        Theme,
    },
    top_bar::TopBar,
};
use crate::{
    core::tasks::{
        TaskManager,
        TaskResult,
    },
    persistence::{
        load_json_or_default,
        save_json,
    },
    prediction::PredictionState,
};

const SETTINGS_FILE: &str = "settings.json";
const STATUS_POLL_SECS: u64 = 5;

pub struct VoltviewApp {
    // Prediction state
    state: PredictionState,

    // Configuration
    settings_data: SettingsData,

    // UI state
    theme: Theme,
    message_overlay: MessageOverlay,
    endpoint_modal: EndpointModal,

    // External service
    service_online: bool,
    last_status_check: Option<Instant>,
    task_manager: TaskManager,
}

impl VoltviewApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let settings_data = load_json_or_default::<SettingsData>(SETTINGS_FILE);

        let theme = Theme::default();
        set_theme(&cc.egui_ctx, theme.clone());

        Self {
            state: PredictionState::new(),
            settings_data,
            theme,
            message_overlay: MessageOverlay::new(),
            endpoint_modal: EndpointModal::new(),
            service_online: false,
            last_status_check: None,
            task_manager: TaskManager::new(),
        }
    }

    fn handle_task_result(&mut self, result: TaskResult) {
        match result {
            TaskResult::Prediction { generation, result } => {
                self.state.apply_result(generation, result);
                if !self.state.in_flight() {
                    self.message_overlay.clear_message();
                }
            }

            TaskResult::ServiceStatus(online) => {
                self.service_online = online;
            }
        }
    }

    fn submit(&mut self) {
        if let Some((generation, request)) = self.state.begin_submit() {
            self.message_overlay.set_message("Requesting prediction...".to_string());
            self.task_manager.submit_prediction(
                self.settings_data.endpoint.clone(),
                generation,
                request,
            );
        }
    }

    fn update_service_status(&mut self) {
        let now = Instant::now();
        let should_check = match self.last_status_check {
            None => true,
            Some(last_check) => now.duration_since(last_check).as_secs() >= STATUS_POLL_SECS,
        };

        if should_check {
            self.task_manager.check_service_status(self.settings_data.endpoint.clone());
            self.last_status_check = Some(now);
        }
    }

    fn save_settings(&self) {
        if let Err(e) = save_json(&self.settings_data, SETTINGS_FILE) {
            eprintln!("Failed to save settings: {}", e);
        }
    }
}

impl eframe::App for VoltviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for result in self.task_manager.poll_results() {
            self.handle_task_result(result);
        }

        self.update_service_status();

        TopBar::show(ctx, &mut self.endpoint_modal, &self.settings_data, self.service_online);

        let in_flight = self.state.in_flight();
        let mut predict_clicked = false;

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.heading("EV Battery Health Monitoring");
                ui.add_space(8.0);

                predict_clicked = form_panel::show(ui, &mut self.state.form, in_flight);
                results_panel::show(ui, &self.state, &self.theme);
            });
        });

        if predict_clicked {
            self.submit();
        }

        self.message_overlay.show(ctx, &self.theme);

        if let Some(settings) = self.endpoint_modal.show(ctx) {
            self.settings_data = settings;
            self.save_settings();
            // Re-ping the new endpoint right away instead of waiting out the poll.
            self.last_status_check = None;
        }

        // Task results arrive over a channel; keep frames coming so they are
        // picked up and the status dot stays fresh.
        ctx.request_repaint_after(Duration::from_secs(1));
    }
}
