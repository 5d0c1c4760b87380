//! Main application module

mod menu;
mod pages;

use dn_core::{
    MemoryStore, NightModeManager, NightModeSettings, RonFileStore, SharedNightMode,
    SharedSwitchMemory, create_switch_memory,
};

use crate::config::{self, ConfigManager, SETTINGS_FILE, SharedConfig};
use crate::host::EguiThemeHost;
use crate::panels::PreferencesPanel;

pub use menu::{MenuAction, render_menu_bar};
pub use pages::{DemoKind, DemoPage};

/// Sample application showing the switch wired three different ways
pub struct DayNightApp {
    config: SharedConfig,
    night_mode: SharedNightMode,
    /// Switch memory shared by successive demo pages
    memory: SharedSwitchMemory,
    page: Option<DemoPage>,
    preferences: PreferencesPanel,
    show_preferences: bool,
}

impl DayNightApp {
    /// Create a new app
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        crate::theme::install_visuals(&cc.egui_ctx);

        let config = ConfigManager::load().into_shared();
        cc.egui_ctx.set_zoom_factor(config.read().config().ui.scale);

        Self {
            night_mode: create_night_mode(&cc.egui_ctx),
            config,
            memory: create_switch_memory(),
            page: None,
            preferences: PreferencesPanel::new(),
            show_preferences: false,
        }
    }

    fn open_page(&mut self, kind: DemoKind) {
        if self.page.as_ref().is_some_and(|page| page.kind() == kind) {
            return;
        }
        self.leave_page();
        let config = self.config.read();
        self.page = Some(DemoPage::new(
            kind,
            &self.night_mode,
            &self.memory,
            config.config(),
        ));
    }

    fn leave_page(&mut self) {
        if let Some(mut page) = self.page.take() {
            page.leave();
        }
    }

    fn show_home(&mut self, ctx: &egui::Context) {
        let mut open = None;
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Day/Night Switch");
            ui.add_space(8.0);

            // Lock only around the manager calls; switch callbacks take it too
            let mut follow_system = self.night_mode.lock().is_follow_system();
            if ui.checkbox(&mut follow_system, "Follow system").changed()
                && let Err(e) = self.night_mode.lock().set_follow_system(follow_system)
            {
                tracing::error!("Failed to save follow-system setting: {}", e);
            }
            let mode = self.night_mode.lock().theme_mode();
            ui.weak(format!("Theme mode: {:?}", mode));

            ui.add_space(16.0);
            for kind in DemoKind::ALL {
                ui.horizontal(|ui| {
                    if ui.button(kind.title()).clicked() {
                        open = Some(kind);
                    }
                    ui.label(kind.description());
                });
            }
        });
        if let Some(kind) = open {
            self.open_page(kind);
        }
    }
}

/// Night-mode manager persisting to the platform config directory.
///
/// Falls back to an in-memory store when the directory is unavailable or
/// the settings file cannot be read.
fn create_night_mode(ctx: &egui::Context) -> SharedNightMode {
    let host = EguiThemeHost::new(ctx.clone());
    let loaded = config::config_dir()
        .map_err(|e| e.to_string())
        .and_then(|dir| {
            NightModeManager::new(RonFileStore::new(dir.join(SETTINGS_FILE)), host.clone())
                .map_err(|e| e.to_string())
        });
    let manager = match loaded {
        Ok(manager) => manager,
        Err(e) => {
            tracing::error!("Night mode settings unavailable, not persisting: {}", e);
            NightModeManager::with_settings(MemoryStore::new(), host, NightModeSettings::default())
        }
    };
    manager.into_shared()
}

impl eframe::App for DayNightApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        match render_menu_bar(ctx) {
            Some(MenuAction::OpenPreferences) => self.show_preferences = true,
            Some(MenuAction::GoHome) => self.leave_page(),
            None => {}
        }

        if self.show_preferences {
            let mut open = true;
            let changed = self.preferences.show(ctx, &self.config, &mut open);
            self.show_preferences = open;
            if changed && let Some(page) = self.page.as_mut() {
                self.config.read().config().switch.apply_to(page.switch_mut());
            }
        }

        let back = match self.page.as_mut() {
            Some(page) => {
                let config = self.config.read().config().clone();
                page.show(ctx, &config)
            }
            None => {
                self.show_home(ctx);
                false
            }
        };
        if back {
            self.leave_page();
        }
    }

    fn on_exit(&mut self) {
        self.leave_page();
    }
}
