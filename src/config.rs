//! Application configuration and theme management.
//!
//! Settings are serialized as pretty JSON so they can be inspected and
//! edited by hand. A missing file is replaced with defaults; a partial file
//! (say, from an older version) is merged over the defaults field by field.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Where the configuration lives relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "data/config.json";

/// Visual theme of the application.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// Colors used for everything drawn inside the simulation viewport.
    pub fn palette(self) -> Palette {
        match self {
            Theme::Light => Palette {
                background: egui::Color32::from_rgb(240, 240, 245),
                text: egui::Color32::from_rgb(20, 20, 20),
                pendulum_bob: egui::Color32::from_rgb(50, 50, 150),
                pendulum_wire: egui::Color32::from_rgb(100, 100, 100),
                grid: egui::Color32::from_rgb(200, 200, 210),
            },
            Theme::Dark => Palette {
                background: egui::Color32::from_rgb(30, 30, 40),
                text: egui::Color32::from_rgb(220, 220, 220),
                pendulum_bob: egui::Color32::from_rgb(100, 150, 250),
                pendulum_wire: egui::Color32::from_rgb(180, 180, 180),
                grid: egui::Color32::from_rgb(50, 50, 60),
            },
        }
    }

    /// The matching egui widget style.
    pub fn visuals(self) -> egui::Visuals {
        match self {
            Theme::Light => egui::Visuals::light(),
            Theme::Dark => egui::Visuals::dark(),
        }
    }
}

/// Theme colors for the simulation viewport.
///
/// Widget chrome (buttons, panels) is handled by [`Theme::visuals`]; this
/// struct only covers what pendlab draws itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub background: egui::Color32,
    pub text: egui::Color32,
    pub pendulum_bob: egui::Color32,
    pub pendulum_wire: egui::Color32,
    pub grid: egui::Color32,
}

/// Persisted application settings.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Visual theme (light/dark).
    pub theme: Theme,
    /// Gravitational acceleration in m/s^2.
    pub gravity: f32,
    /// Simulation speed multiplier (1.0 = real time).
    pub simulation_speed: f32,
    /// How long trace points live, in seconds.
    pub path_duration: f32,
    /// Trace color as sRGB bytes.
    pub path_color: [u8; 3],
    /// Whether pendulum wires are drawn.
    pub show_wire: bool,
    /// Frame rate cap for the simulation scene.
    pub fps_limit: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            gravity: 9.81,
            simulation_speed: 1.0,
            path_duration: 2.0,
            path_color: [50, 100, 200],
            show_wire: true,
            fps_limit: 60,
        }
    }
}

impl AppConfig {
    /// Load the configuration from a JSON file.
    ///
    /// If the file does not exist, defaults are written to that path and
    /// returned. Fields absent from the file keep their default values.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            let config = Self::default();
            config.save(path)?;
            return Ok(config);
        }
        let json = fs::read_to_string(path)?;
        let config = serde_json::from_str(&json)?;
        Ok(config)
    }

    /// Save the configuration as pretty JSON, creating parent directories
    /// as needed.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        if let Some(dir) = path.parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir)?;
            }
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("pendlab_{}_{}.json", name, std::process::id()))
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.theme, Theme::Light);
        assert_eq!(config.gravity, 9.81);
        assert_eq!(config.simulation_speed, 1.0);
        assert_eq!(config.path_duration, 2.0);
        assert_eq!(config.path_color, [50, 100, 200]);
        assert!(config.show_wire);
        assert_eq!(config.fps_limit, 60);
    }

    #[test]
    fn test_save_load_round_trip() {
        let path = temp_path("round_trip");
        let mut config = AppConfig::default();
        config.theme = Theme::Dark;
        config.gravity = 3.7;
        config.fps_limit = 120;

        config.save(&path).unwrap();
        let loaded = AppConfig::load(&path).unwrap();
        assert_eq!(loaded, config);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_load_missing_file_writes_defaults() {
        let path = temp_path("missing");
        let _ = std::fs::remove_file(&path);

        let loaded = AppConfig::load(&path).unwrap();
        assert_eq!(loaded, AppConfig::default());
        assert!(path.exists());

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_partial_file_merges_over_defaults() {
        let path = temp_path("partial");
        std::fs::write(&path, r#"{ "theme": "dark", "gravity": 1.62 }"#).unwrap();

        let loaded = AppConfig::load(&path).unwrap();
        assert_eq!(loaded.theme, Theme::Dark);
        assert_eq!(loaded.gravity, 1.62);
        // Untouched fields fall back to defaults
        assert_eq!(loaded.fps_limit, 60);
        assert_eq!(loaded.path_color, [50, 100, 200]);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_invalid_json_is_a_parse_error() {
        let path = temp_path("invalid");
        std::fs::write(&path, "not json at all").unwrap();

        match AppConfig::load(&path) {
            Err(crate::error::ConfigError::Parse(_)) => {}
            other => panic!("expected parse error, got {:?}", other.map(|_| ())),
        }

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_theme_palettes_differ() {
        let light = Theme::Light.palette();
        let dark = Theme::Dark.palette();
        assert_ne!(light.background, dark.background);
        assert_ne!(light.text, dark.text);
    }
}
