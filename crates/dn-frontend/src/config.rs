//! Application configuration
//!
//! Persisted as RON next to the night-mode settings. Every section uses
//! `#[serde(default)]` so older files keep loading after new fields appear.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use dn_core::{DEFAULT_TOUCH_SLOP, DEFAULT_WIDTH, DayNightSwitch, Easing};
use dn_renderer::{SceneConfig, SwitchPalette};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

/// Directory name under the platform config directory
pub const APP_DIR: &str = "daynight";
/// Config file name
pub const CONFIG_FILE: &str = "config.ron";
/// Night-mode settings file name
pub const SETTINGS_FILE: &str = "night_mode.ron";

/// Shared config handle
pub type SharedConfig = Arc<RwLock<ConfigManager>>;

/// Interface settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct UiConfig {
    /// egui zoom factor
    pub scale: f32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self { scale: 1.0 }
    }
}

/// Switch behavior and size
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SwitchConfig {
    /// Switch width in logical points
    pub width: f32,
    /// Drag threshold in logical points
    pub touch_slop: f32,
    /// Duration of a full day-to-night transition
    pub duration_ms: u64,
    pub easing: Easing,
    /// Tessellation quality
    pub scene: SceneConfig,
}

impl Default for SwitchConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            touch_slop: DEFAULT_TOUCH_SLOP,
            duration_ms: dn_core::BASE_DURATION.as_millis() as u64,
            easing: Easing::default(),
            scene: SceneConfig::default(),
        }
    }
}

impl SwitchConfig {
    /// Push the behavior settings into a switch
    pub fn apply_to(&self, switch: &mut DayNightSwitch) {
        switch.set_touch_slop(self.touch_slop);
        switch.set_base_duration(Duration::from_millis(self.duration_ms));
        switch.set_easing(self.easing);
    }
}

/// Root of the config file
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub ui: UiConfig,
    pub switch: SwitchConfig,
    pub palette: SwitchPalette,
}

/// Errors raised while reading or writing the config file
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Serialization error: {0}")]
    Serialize(String),
    #[error("Deserialization error: {0}")]
    Deserialize(String),
    #[error("No config directory available on this platform")]
    NoConfigDir,
}

/// Platform directory holding both config files
pub fn config_dir() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR))
        .ok_or(ConfigError::NoConfigDir)
}

/// Owns the loaded config and the file it came from
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config: AppConfig,
    path: Option<PathBuf>,
}

impl ConfigManager {
    /// Load from the platform config directory, falling back to defaults
    pub fn load() -> Self {
        let path = match config_dir() {
            Ok(dir) => dir.join(CONFIG_FILE),
            Err(e) => {
                tracing::warn!("{}; using default config", e);
                return Self::in_memory(AppConfig::default());
            }
        };
        Self::load_or_default(path)
    }

    /// Load from `path`; a missing or broken file yields defaults
    pub fn load_or_default(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let config = match Self::read(&path) {
            Ok(Some(config)) => {
                tracing::info!("Loaded config from {}", path.display());
                config
            }
            Ok(None) => AppConfig::default(),
            Err(e) => {
                tracing::warn!("Failed to load config from {}: {}", path.display(), e);
                AppConfig::default()
            }
        };
        Self {
            config,
            path: Some(path),
        }
    }

    /// Config that is never written to disk
    pub fn in_memory(config: AppConfig) -> Self {
        Self { config, path: None }
    }

    fn read(path: &Path) -> Result<Option<AppConfig>, ConfigError> {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(ConfigError::Io(e.to_string())),
        };
        ron::from_str(&text)
            .map(Some)
            .map_err(|e| ConfigError::Deserialize(e.to_string()))
    }

    /// Write the config back to its file
    pub fn save(&self) -> Result<(), ConfigError> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::Io(e.to_string()))?;
        }
        let text = ron::ser::to_string_pretty(&self.config, ron::ser::PrettyConfig::default())
            .map_err(|e| ConfigError::Serialize(e.to_string()))?;
        std::fs::write(path, text).map_err(|e| ConfigError::Io(e.to_string()))?;
        tracing::debug!("Saved config to {}", path.display());
        Ok(())
    }

    pub fn reset_to_defaults(&mut self) {
        self.config = AppConfig::default();
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut AppConfig {
        &mut self.config
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn into_shared(self) -> SharedConfig {
        Arc::new(RwLock::new(self))
    }
}
