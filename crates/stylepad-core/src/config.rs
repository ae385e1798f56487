//! Editor configuration.
//!
//! ## Learning: Serde for Serialization
//!
//! `#[serde(default)]` fills missing fields from `Default`, so an empty or
//! partial `config.toml` is valid. Field types still validate: a
//! `font_size` outside the selector set is a parse error.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::style::{DEFAULT_FAMILY, FontSize, Rgb, Style};

/// Main editor configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Initial text style
    pub style: StyleConfig,

    /// Window settings
    pub window: WindowConfig,
}

impl Config {
    /// Loads config from the default location, falling back to defaults.
    pub fn load() -> Self {
        match Self::load_from_default_path() {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Using default config: {}", e);
                Self::default()
            }
        }
    }

    /// Loads config from a file.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    fn load_from_default_path() -> Result<Self, ConfigError> {
        let path = Self::default_path()?;
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Returns the default config file path.
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join("stylepad").join("config.toml"))
    }

    /// Initial style as configured.
    pub fn initial_style(&self) -> Style {
        Style::new(
            self.style.font_family.clone(),
            self.style.font_size,
            self.style.text_color,
        )
    }
}

/// Initial style configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Preferred font family
    pub font_family: String,

    /// Font size in points
    pub font_size: FontSize,

    /// Text color as `[r, g, b]`; unset means the theme color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_color: Option<Rgb>,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            font_family: DEFAULT_FAMILY.to_string(),
            font_size: FontSize::DEFAULT,
            text_color: None,
        }
    }
}

/// Window configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 900.0,
            height: 650.0,
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config directory not found")]
    NoConfigDir,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.style.font_family, "Arial");
        assert_eq!(config.style.font_size.points(), 18);
        assert_eq!(config.window.width, 900.0);
        assert_eq!(config.initial_style(), Style::default());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_config() {
        let config: Config = toml::from_str(
            r#"
            [style]
            font_size = 24
            text_color = [200, 40, 40]
            "#,
        )
        .unwrap();

        assert_eq!(config.style.font_family, "Arial");
        assert_eq!(config.style.font_size, FontSize::new(24).unwrap());
        assert_eq!(config.style.text_color, Some(Rgb::new(200, 40, 40)));
        assert_eq!(config.window, WindowConfig::default());
    }

    #[test]
    fn test_size_outside_set_is_rejected() {
        let result: Result<Config, _> = toml::from_str("[style]\nfont_size = 13\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[window]\nwidth = 1024.0\nheight = 700.0\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.window.width, 1024.0);

        let missing = Config::load_from(dir.path().join("nope.toml"));
        assert!(matches!(missing, Err(ConfigError::Io(_))));
    }
}
