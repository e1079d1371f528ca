//! Player preferences
//!
//! Persisted as JSON in LocalStorage. Missing or unknown fields fall back to defaults,
//! so settings saved by older builds keep loading.

use serde::{Deserialize, Serialize};

/// Player preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    pub muted: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }
}

impl Settings {
    pub fn set_master_volume(&mut self, volume: f32) {
        self.master_volume = volume.clamp(0.0, 1.0);
    }

    pub fn set_sfx_volume(&mut self, volume: f32) {
        self.sfx_volume = volume.clamp(0.0, 1.0);
    }

    pub fn toggle_mute(&mut self) {
        self.muted = !self.muted;
        log::info!("Sound {}", if self.muted { "muted" } else { "unmuted" });
    }

    /// Gain applied to sound effects (respects mute)
    pub fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume.clamp(0.0, 1.0) * self.sfx_volume.clamp(0.0, 1.0)
        }
    }

    /// Parse stored JSON, clamping out-of-range volumes
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut settings: Settings = serde_json::from_str(json)?;
        settings.set_master_volume(settings.master_volume);
        settings.set_sfx_volume(settings.sfx_volume);
        Ok(settings)
    }

    /// LocalStorage key
    const STORAGE_KEY: &'static str = "circle_shooter_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring stored settings: {}", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        let Some(storage) = storage else {
            log::warn!("LocalStorage unavailable, settings not saved");
            return;
        };
        match serde_json::to_string(self) {
            Ok(json) => {
                if storage.set_item(Self::STORAGE_KEY, &json).is_err() {
                    log::warn!("Failed to write settings");
                } else {
                    log::info!("Settings saved");
                }
            }
            Err(e) => log::warn!("Failed to serialize settings: {}", e),
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        log::debug!("Settings not persisted on native ({})", Self::STORAGE_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert!(!settings.muted);
        assert!((settings.effective_volume() - 0.8).abs() < 1e-6);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = Settings::from_json(r#"{"muted": true}"#).unwrap();
        assert!(settings.muted);
        assert_eq!(settings.master_volume, 0.8);
        assert_eq!(settings.effective_volume(), 0.0);
    }

    #[test]
    fn test_unknown_fields_ignored_and_volumes_clamped() {
        let settings =
            Settings::from_json(r#"{"master_volume": 3.0, "sfx_volume": -1, "quality": "High"}"#)
                .unwrap();
        assert_eq!(settings.master_volume, 1.0);
        assert_eq!(settings.sfx_volume, 0.0);
    }

    #[test]
    fn test_garbage_is_an_error() {
        assert!(Settings::from_json("not json").is_err());
    }

    #[test]
    fn test_round_trip_and_toggle() {
        let mut settings = Settings::default();
        settings.set_sfx_volume(0.5);
        settings.toggle_mute();
        let json = serde_json::to_string(&settings).unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }
}
