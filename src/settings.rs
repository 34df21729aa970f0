//! Game settings and preferences
//!
//! Persisted as JSON next to the binary (or wherever the host points).
//! Anything unreadable falls back to defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::SettingsError;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Mute all audio
    pub muted: bool,

    // === Simulation ===
    /// Fixed RNG seed; a time-derived seed is used when absent
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
            seed: None,
        }
    }
}

impl Settings {
    /// Set master volume (clamped to 0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (clamped to 0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Parse settings from JSON
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load settings from `path`, falling back to defaults on any failure
    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path)
            .map_err(SettingsError::from)
            .and_then(|json| Self::from_json(&json))
        {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Using default settings ({})", e);
                Self::default()
            }
        }
    }

    /// Save settings to `path`
    pub fn save_to(&self, path: &Path) -> Result<(), SettingsError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_volume_clamped() {
        let mut settings = Settings::default();
        settings.set_master_volume(3.0);
        settings.set_sfx_volume(-1.0);
        assert_eq!(settings.master_volume, 1.0);
        assert_eq!(settings.sfx_volume, 0.0);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = Settings::from_json(r#"{ "muted": true, "seed": 42 }"#).unwrap();
        assert!(settings.muted);
        assert_eq!(settings.seed, Some(42));
        assert_eq!(settings.sfx_volume, 1.0);
    }

    #[test]
    fn test_bad_json_is_an_error() {
        assert!(matches!(
            Settings::from_json("{ not json"),
            Err(SettingsError::Parse(_))
        ));
    }

    #[test]
    fn test_save_and_load() {
        let path =
            std::env::temp_dir().join(format!("invaders_settings_{}.json", std::process::id()));
        let settings = Settings {
            master_volume: 0.5,
            seed: Some(7),
            ..Default::default()
        };
        settings.save_to(&path).unwrap();
        assert_eq!(Settings::load_from(&path), settings);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_missing_file_falls_back() {
        let path = std::env::temp_dir().join("invaders_settings_does_not_exist.json");
        assert_eq!(Settings::load_from(&path), Settings::default());
    }
}
