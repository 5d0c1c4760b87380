//! UI panels

mod preferences;

pub use preferences::{PreferencesPanel, PreferencesTab};
