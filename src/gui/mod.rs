pub mod app;
pub mod form_panel;
pub mod message_overlay;
pub mod results_panel;
pub mod settings;
pub mod theme;
pub mod top_bar;

pub use app::VoltviewApp;
