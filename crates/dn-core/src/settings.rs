//! Persisted night-mode settings

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// The two persisted night-mode flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NightModeSettings {
    /// Whether the user picked the night theme
    #[serde(default)]
    pub is_night_mode: bool,
    /// Whether the theme follows the operating system
    #[serde(default)]
    pub is_follow_system: bool,
}

/// Backing storage for [`NightModeSettings`]
pub trait SettingsStore {
    /// Load the settings; a store with nothing saved yields defaults
    fn load(&self) -> Result<NightModeSettings, SettingsError>;

    /// Persist the settings
    fn save(&mut self, settings: &NightModeSettings) -> Result<(), SettingsError>;
}

/// Settings stored as a RON file
#[derive(Debug, Clone)]
pub struct RonFileStore {
    path: PathBuf,
}

impl RonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Serialize settings to bytes
    pub fn to_bytes(settings: &NightModeSettings) -> Result<Vec<u8>, SettingsError> {
        let content = ron::ser::to_string_pretty(settings, ron::ser::PrettyConfig::default())
            .map_err(|e| SettingsError::Serialize(e.to_string()))?;
        Ok(content.into_bytes())
    }

    /// Deserialize settings from bytes
    pub fn from_bytes(data: &[u8]) -> Result<NightModeSettings, SettingsError> {
        let content =
            std::str::from_utf8(data).map_err(|e| SettingsError::Deserialize(e.to_string()))?;
        ron::from_str(content).map_err(|e| SettingsError::Deserialize(e.to_string()))
    }
}

impl SettingsStore for RonFileStore {
    fn load(&self) -> Result<NightModeSettings, SettingsError> {
        match std::fs::read(&self.path) {
            Ok(data) => Self::from_bytes(&data),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no saved night-mode settings");
                Ok(NightModeSettings::default())
            }
            Err(e) => Err(SettingsError::Io(e.to_string())),
        }
    }

    fn save(&mut self, settings: &NightModeSettings) -> Result<(), SettingsError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| SettingsError::Io(e.to_string()))?;
        }
        let content = Self::to_bytes(settings)?;
        std::fs::write(&self.path, content).map_err(|e| SettingsError::Io(e.to_string()))?;
        tracing::debug!(path = %self.path.display(), ?settings, "night-mode settings saved");
        Ok(())
    }
}

/// In-memory store, for hosts without a filesystem and for tests
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    settings: Option<NightModeSettings>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with saved settings
    pub fn with_settings(settings: NightModeSettings) -> Self {
        Self {
            settings: Some(settings),
        }
    }
}

impl SettingsStore for MemoryStore {
    fn load(&self) -> Result<NightModeSettings, SettingsError> {
        Ok(self.settings.unwrap_or_default())
    }

    fn save(&mut self, settings: &NightModeSettings) -> Result<(), SettingsError> {
        self.settings = Some(*settings);
        Ok(())
    }
}

/// Settings persistence errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Serialization error: {0}")]
    Serialize(String),
    #[error("Deserialization error: {0}")]
    Deserialize(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = RonFileStore::new(dir.path().join("night_mode.ron"));
        assert_eq!(store.load().unwrap(), NightModeSettings::default());
    }

    #[test]
    fn test_save_creates_directories_and_reloads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("night_mode.ron");
        let mut store = RonFileStore::new(&path);
        let settings = NightModeSettings {
            is_night_mode: true,
            is_follow_system: false,
        };
        store.save(&settings).unwrap();
        assert!(path.exists());
        assert_eq!(RonFileStore::new(&path).load().unwrap(), settings);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let settings = RonFileStore::from_bytes(b"(is_follow_system: true)").unwrap();
        assert!(settings.is_follow_system);
        assert!(!settings.is_night_mode);
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("night_mode.ron");
        std::fs::write(&path, "not ron at all {").unwrap();
        let err = RonFileStore::new(&path).load().unwrap_err();
        assert!(matches!(err, SettingsError::Deserialize(_)));
    }

    #[test]
    fn test_memory_store() {
        let mut store = MemoryStore::new();
        assert_eq!(store.load().unwrap(), NightModeSettings::default());
        let settings = NightModeSettings {
            is_night_mode: true,
            is_follow_system: true,
        };
        store.save(&settings).unwrap();
        assert_eq!(store.load().unwrap(), settings);
    }
}
