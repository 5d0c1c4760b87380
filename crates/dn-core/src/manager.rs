//! Night-mode manager: persisted flags applied to the host theme

use std::sync::Arc;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::settings::{NightModeSettings, SettingsError, SettingsStore};

/// Tri-state theme selection handed to the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThemeMode {
    /// Follow the operating system theme
    FollowSystem,
    /// Force the night theme
    Night,
    /// Force the day theme
    Day,
}

impl ThemeMode {
    /// Mode implied by the persisted flags; following the system wins
    pub fn from_settings(settings: &NightModeSettings) -> Self {
        if settings.is_follow_system {
            ThemeMode::FollowSystem
        } else if settings.is_night_mode {
            ThemeMode::Night
        } else {
            ThemeMode::Day
        }
    }

    /// Whether this mode ends up dark given the system theme
    pub fn is_dark(self, system_is_dark: bool) -> bool {
        match self {
            ThemeMode::FollowSystem => system_is_dark,
            ThemeMode::Night => true,
            ThemeMode::Day => false,
        }
    }
}

/// Host application theme API
pub trait ThemeHost {
    /// Switch the host to the given mode
    fn apply_theme_mode(&mut self, mode: ThemeMode);

    /// Whether the operating system currently reports a dark theme
    fn system_is_dark(&self) -> bool;
}

/// Shared manager handle for switch callbacks and UI
pub type SharedNightMode = Arc<Mutex<NightModeManager>>;

/// Keeps the persisted night-mode flags and the host theme in step
pub struct NightModeManager {
    store: Box<dyn SettingsStore + Send>,
    host: Box<dyn ThemeHost + Send>,
    settings: NightModeSettings,
}

impl std::fmt::Debug for NightModeManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NightModeManager")
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

impl NightModeManager {
    /// Load the persisted flags and apply the resulting mode to the host
    pub fn new(
        store: impl SettingsStore + Send + 'static,
        host: impl ThemeHost + Send + 'static,
    ) -> Result<Self, SettingsError> {
        let settings = store.load()?;
        Ok(Self::with_settings(store, host, settings))
    }

    /// Start from already loaded flags and apply the resulting mode
    pub fn with_settings(
        store: impl SettingsStore + Send + 'static,
        host: impl ThemeHost + Send + 'static,
        settings: NightModeSettings,
    ) -> Self {
        let mut manager = Self {
            store: Box::new(store),
            host: Box::new(host),
            settings,
        };
        let mode = manager.theme_mode();
        tracing::info!(?mode, "night mode initialized");
        manager.host.apply_theme_mode(mode);
        manager
    }

    /// Wrap into a shared handle
    pub fn into_shared(self) -> SharedNightMode {
        Arc::new(Mutex::new(self))
    }

    pub fn settings(&self) -> NightModeSettings {
        self.settings
    }

    pub fn theme_mode(&self) -> ThemeMode {
        ThemeMode::from_settings(&self.settings)
    }

    /// Whether the host currently shows the dark theme
    pub fn is_dark(&self) -> bool {
        self.theme_mode().is_dark(self.host.system_is_dark())
    }

    pub fn system_is_dark(&self) -> bool {
        self.host.system_is_dark()
    }

    pub fn is_night_mode(&self) -> bool {
        self.settings.is_night_mode
    }

    /// Persist the night flag and force the matching theme.
    ///
    /// The host theme is applied even when persisting fails.
    pub fn set_night_mode(&mut self, is_night: bool) -> Result<(), SettingsError> {
        self.settings.is_night_mode = is_night;
        let saved = self.store.save(&self.settings);
        self.host.apply_theme_mode(if is_night {
            ThemeMode::Night
        } else {
            ThemeMode::Day
        });
        saved
    }

    pub fn is_follow_system(&self) -> bool {
        self.settings.is_follow_system
    }

    /// Persist the follow-system flag.
    ///
    /// Turning it off pins night mode to whatever the system shows now.
    pub fn set_follow_system(&mut self, follow: bool) -> Result<(), SettingsError> {
        self.settings.is_follow_system = follow;
        let saved = self.store.save(&self.settings);
        if follow {
            self.host.apply_theme_mode(ThemeMode::FollowSystem);
            saved
        } else {
            let system_dark = self.host.system_is_dark();
            saved.and(self.set_night_mode(system_dark))
        }
    }
}
