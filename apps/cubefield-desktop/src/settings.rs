use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Errors from loading a settings file.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse settings file: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Application settings, optionally loaded from a YAML file.
///
/// Every field has a default, so a partial file only overrides what it
/// names and a missing file means defaults throughout.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub window: WindowSettings,
    pub camera: CameraSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub width: u32,
    pub height: u32,
    pub title: String,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            title: "Cubefield".into(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    /// Field of view in degrees.
    pub fov: f32,
    /// Movement speed in units per second.
    pub speed: f32,
    /// Movement speed while sprinting.
    pub sprint_speed: f32,
    /// Radians of rotation per pixel of cursor travel.
    pub sensitivity: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            fov: 45.0,
            speed: 5.0,
            sprint_speed: 15.0,
            sensitivity: 0.002,
        }
    }
}

impl Settings {
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let settings = Settings::default();
        assert_eq!(settings.window.width, 1280);
        assert_eq!(settings.window.height, 720);
        assert_eq!(settings.camera.fov, 45.0);
        assert!(settings.camera.sprint_speed > settings.camera.speed);
    }

    #[test]
    fn partial_file_overrides_only_named_fields() {
        let settings: Settings = serde_yaml::from_str(
            "camera:\n  speed: 12.5\nwindow:\n  title: Test\n",
        )
        .unwrap();
        assert_eq!(settings.camera.speed, 12.5);
        assert_eq!(settings.window.title, "Test");
        // Untouched fields keep their defaults.
        assert_eq!(settings.window.width, 1280);
        assert_eq!(settings.camera.fov, 45.0);
    }

    #[test]
    fn malformed_yaml_is_a_parse_error() {
        let err = serde_yaml::from_str::<Settings>("window: [not, a, map]").unwrap_err();
        let err = SettingsError::from(err);
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = Settings::load(Path::new("/nonexistent/cubefield.yaml")).unwrap_err();
        assert!(matches!(err, SettingsError::Io(_)));
    }
}
