//! Night-mode host backed by the egui context

use dn_core::{ThemeHost, ThemeMode};
use egui::{Theme, ThemePreference};

/// Applies theme modes through egui's theme preference
#[derive(Clone)]
pub struct EguiThemeHost {
    ctx: egui::Context,
}

impl EguiThemeHost {
    pub fn new(ctx: egui::Context) -> Self {
        Self { ctx }
    }
}

/// Preference egui should use for a theme mode
pub fn theme_preference(mode: ThemeMode) -> ThemePreference {
    match mode {
        ThemeMode::FollowSystem => ThemePreference::System,
        ThemeMode::Night => ThemePreference::Dark,
        ThemeMode::Day => ThemePreference::Light,
    }
}

impl ThemeHost for EguiThemeHost {
    fn apply_theme_mode(&mut self, mode: ThemeMode) {
        tracing::debug!(?mode, "applying theme");
        self.ctx.set_theme(theme_preference(mode));
    }

    fn system_is_dark(&self) -> bool {
        // Platforms without a theme signal count as day
        self.ctx.system_theme() == Some(Theme::Dark)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_maps_to_preference() {
        assert_eq!(theme_preference(ThemeMode::FollowSystem), ThemePreference::System);
        assert_eq!(theme_preference(ThemeMode::Night), ThemePreference::Dark);
        assert_eq!(theme_preference(ThemeMode::Day), ThemePreference::Light);
    }

    #[test]
    fn test_night_mode_switches_context_theme() {
        let ctx = egui::Context::default();
        let mut host = EguiThemeHost::new(ctx.clone());
        host.apply_theme_mode(ThemeMode::Night);
        assert_eq!(ctx.theme(), Theme::Dark);
        host.apply_theme_mode(ThemeMode::Day);
        assert_eq!(ctx.theme(), Theme::Light);
    }
}
