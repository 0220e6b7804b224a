//! Game settings and preferences
//!
//! Presentation only; physics tunables stay in `consts`. Read from the JSON
//! file named by `PONG_SETTINGS`, if set.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Window title prefix (the score is appended)
    pub title: String,
    /// Undecorated window
    pub borderless: bool,
    /// Sync presentation to the display instead of relying on frame pacing alone
    pub vsync: bool,
    /// Fixed RNG seed for reproducible serves; wall-clock time otherwise
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            title: "Pong".to_string(),
            borderless: true,
            vsync: false,
            seed: None,
        }
    }
}

impl Settings {
    /// Environment variable naming the settings file
    pub const PATH_ENV: &'static str = "PONG_SETTINGS";

    /// Parse settings JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Load settings from a file, falling back to defaults on any problem
    pub fn load_from(path: &Path) -> Self {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Could not read settings {}: {}", path.display(), e);
                return Self::default();
            }
        };
        match Self::from_json(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Invalid settings {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Load from `PONG_SETTINGS` if set, otherwise defaults
    pub fn load() -> Self {
        match std::env::var_os(Self::PATH_ENV) {
            Some(path) => Self::load_from(Path::new(&path)),
            None => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Window title showing the current score
    pub fn title_with_score(&self, left: u32, right: u32) -> String {
        format!("{}  {} : {}", self.title, left, right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_window_is_borderless() {
        let settings = Settings::default();
        assert!(settings.borderless);
        assert!(!settings.vsync);
        assert_eq!(settings.seed, None);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = Settings::from_json(r#"{ "borderless": false, "seed": 7 }"#).unwrap();
        assert!(!settings.borderless);
        assert_eq!(settings.seed, Some(7));
        assert_eq!(settings.title, "Pong");
    }

    #[test]
    fn test_json_round_trip() {
        let settings = Settings {
            title: "Table".to_string(),
            borderless: false,
            vsync: true,
            seed: Some(3),
        };
        let json = settings.to_json().unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn test_bad_json_is_an_error() {
        assert!(Settings::from_json("{ borderless: ").is_err());
        assert!(Settings::from_json(r#"{ "vsync": "yes" }"#).is_err());
    }

    #[test]
    fn test_missing_file_falls_back() {
        let settings = Settings::load_from(Path::new("/nonexistent/pong-settings.json"));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_title_with_score() {
        assert_eq!(Settings::default().title_with_score(2, 5), "Pong  2 : 5");
    }
}
