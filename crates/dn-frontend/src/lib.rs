//! Day/Night Switch Frontend
//!
//! egui widget for the day/night switch plus the `daynight` sample app.

pub mod app;
pub mod config;
pub mod host;
pub mod paint;
pub mod panels;
pub mod theme;
pub mod widget;

// Re-exports for convenience
pub use app::DayNightApp;
pub use config::{AppConfig, ConfigManager, SharedConfig};
pub use host::EguiThemeHost;
pub use widget::SwitchView;
