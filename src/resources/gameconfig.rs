//! Game configuration resource.
//!
//! Settings loaded from an INI file, with safe defaults when the file or a
//! key is missing.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 1400
//! height = 900
//! target_fps = 60
//!
//! [audio]
//! music_volume = 0.4
//! fx_volume = 1.0
//! ```

use bevy_ecs::prelude::Resource;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

const DEFAULT_WINDOW_WIDTH: u32 = 1400;
const DEFAULT_WINDOW_HEIGHT: u32 = 900;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_MUSIC_VOLUME: f32 = 0.4;
const DEFAULT_FX_VOLUME: f32 = 1.0;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Window and audio settings.
#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    /// Window width in pixels.
    pub window_width: u32,
    /// Window height in pixels.
    pub window_height: u32,
    /// Target frames per second.
    pub target_fps: u32,
    /// Background music volume, 0.0 to 1.0.
    pub music_volume: f32,
    /// Sound-effect volume, 0.0 to 1.0.
    pub fx_volume: f32,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a configuration with safe default values.
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            music_volume: DEFAULT_MUSIC_VOLUME,
            fx_volume: DEFAULT_FX_VOLUME,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing keys retain their current values. Returns an error if the
    /// file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config.load(&self.config_path)?;

        if let Ok(Some(width)) = config.getuint("window", "width") {
            self.window_width = width as u32;
        }
        if let Ok(Some(height)) = config.getuint("window", "height") {
            self.window_height = height as u32;
        }
        if let Ok(Some(fps)) = config.getuint("window", "target_fps") {
            self.target_fps = fps as u32;
        }
        if let Ok(Some(volume)) = config.getfloat("audio", "music_volume") {
            self.music_volume = volume as f32;
        }
        if let Ok(Some(volume)) = config.getfloat("audio", "fx_volume") {
            self.fx_volume = volume as f32;
        }

        info!(
            "config loaded from {}: {}x{} @ {} fps",
            self.config_path.display(),
            self.window_width,
            self.window_height,
            self.target_fps
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let config = GameConfig::new();
        assert_eq!(config.window_width, 1400);
        assert_eq!(config.window_height, 900);
        assert_eq!(config.target_fps, 60);
        assert!(config.music_volume > 0.0 && config.music_volume <= 1.0);
        assert!(config.fx_volume > 0.0 && config.fx_volume <= 1.0);
    }

    #[test]
    fn with_path_keeps_defaults() {
        let config = GameConfig::with_path("/tmp/nowhere.ini");
        assert_eq!(config.config_path, PathBuf::from("/tmp/nowhere.ini"));
        assert_eq!(config.window_width, 1400);
    }

    #[test]
    fn missing_file_is_an_error_and_leaves_defaults() {
        let mut config = GameConfig::with_path("/definitely/not/here.ini");
        assert!(config.load_from_file().is_err());
        assert_eq!(config.window_width, 1400);
        assert_eq!(config.window_height, 900);
    }
}
