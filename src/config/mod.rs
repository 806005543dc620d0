// SPDX-License-Identifier: MPL-2.0
//! This module handles the alert style settings stored in a `settings.toml`
//! file.
//!
//! Every field is optional: a missing entry keeps the built-in default.
//!
//! ```toml
//! [style]
//! hair_color = "#FF9500"
//! destructive_color = "#FF3B30"
//! title_font = 22.0
//! ```
//!
//! # Examples
//!
//! ```no_run
//! use iced_alert::config::{self, StyleSettings};
//! use iced_alert::ui::alert::StyleConfig;
//! use std::path::Path;
//!
//! let path = Path::new("settings.toml");
//! let mut config = config::load().unwrap_or_default();
//! config.style = Some(StyleSettings {
//!     hair_color: Some("#FF9500".to_string()),
//!     ..StyleSettings::default()
//! });
//! config::save_to_path(&config, path).expect("Failed to save config");
//!
//! let style = config.style_config().unwrap_or_default();
//! StyleConfig::set_global(style);
//! ```

pub mod defaults;

use crate::error::Result;
use crate::ui::alert::StyleConfig;
use crate::ui::color::try_hex_color;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedAlert";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub style: Option<StyleSettings>,
}

/// Overrides of the default alert style.
///
/// Colors are `RGB` or `RRGGBB` hex strings, with or without `#`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StyleSettings {
    #[serde(default)]
    pub hair_color: Option<String>,
    #[serde(default)]
    pub title_color: Option<String>,
    #[serde(default)]
    pub message_color: Option<String>,
    #[serde(default)]
    pub button_text_color: Option<String>,
    #[serde(default)]
    pub destructive_color: Option<String>,
    #[serde(default)]
    pub hairline_color: Option<String>,
    #[serde(default)]
    pub highlight_color: Option<String>,
    #[serde(default)]
    pub title_font: Option<f32>,
    #[serde(default)]
    pub message_font: Option<f32>,
    #[serde(default)]
    pub button_font: Option<f32>,
    #[serde(default)]
    pub corner_radius: Option<f32>,
}

impl StyleSettings {
    /// Applies the overrides on top of `base`.
    ///
    /// Font sizes and corner radius are clamped to the bounds in
    /// [`defaults`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Color`](crate::error::Error::Color) for the first
    /// malformed color.
    pub fn apply(&self, base: StyleConfig) -> Result<StyleConfig> {
        let mut style = base;

        let colors = [
            (&self.hair_color, &mut style.hair_color),
            (&self.title_color, &mut style.title_color),
            (&self.message_color, &mut style.message_color),
            (&self.button_text_color, &mut style.button_text_color),
            (&self.destructive_color, &mut style.destructive_color),
            (&self.hairline_color, &mut style.hairline_color),
            (&self.highlight_color, &mut style.highlight_color),
        ];
        for (setting, target) in colors {
            if let Some(hex) = setting {
                *target = try_hex_color(hex)?;
            }
        }

        let fonts = [
            (self.title_font, &mut style.title_font),
            (self.message_font, &mut style.message_font),
            (self.button_font, &mut style.button_font),
        ];
        for (setting, target) in fonts {
            if let Some(size) = setting {
                *target = clamp_setting(size, defaults::MIN_FONT_SIZE, defaults::MAX_FONT_SIZE);
            }
        }

        if let Some(radius) = self.corner_radius {
            style.corner_radius = clamp_setting(
                radius,
                defaults::MIN_CORNER_RADIUS,
                defaults::MAX_CORNER_RADIUS,
            );
        }

        Ok(style)
    }
}

fn clamp_setting(value: f32, min: f32, max: f32) -> f32 {
    if value.is_nan() {
        return min;
    }
    let clamped = value.clamp(min, max);
    if clamped != value {
        log::warn!("Setting value {value} out of range, using {clamped}");
    }
    clamped
}

impl Config {
    /// Style resulting from the settings applied to the built-in defaults.
    ///
    /// # Errors
    ///
    /// Fails like [`StyleSettings::apply`].
    pub fn style_config(&self) -> Result<StyleConfig> {
        match &self.style {
            Some(settings) => settings.apply(StyleConfig::default()),
            None => Ok(StyleConfig::default()),
        }
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config = toml::from_str(&content).unwrap_or_else(|err| {
        log::warn!("Ignoring invalid settings in {}: {err}", path.display());
        Config::default()
    });
    log::info!("Loaded settings from {}", path.display());
    Ok(config)
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::ui::design_tokens::palette;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_style() {
        let config = Config {
            style: Some(StyleSettings {
                hair_color: Some("#FF9500".to_string()),
                title_font: Some(22.0),
                ..StyleSettings::default()
            }),
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert!(loaded.style.is_none());
    }

    #[test]
    fn load_from_missing_path_is_an_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let result = load_from_path(&temp_dir.path().join("missing.toml"));
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn empty_style_table_keeps_defaults() {
        let config: Config = toml::from_str("[style]\n").expect("valid toml");
        assert_eq!(config.style_config(), Ok(StyleConfig::default()));
    }

    #[test]
    fn apply_overrides_colors_and_fonts() {
        let settings = StyleSettings {
            destructive_color: Some("#000".to_string()),
            message_font: Some(14.0),
            ..StyleSettings::default()
        };

        let style = settings.apply(StyleConfig::default()).expect("valid settings");
        assert_eq!(style.destructive_color, palette::BLACK);
        assert_eq!(style.message_font, 14.0);
        assert_eq!(style.hair_color, palette::ACCENT);
    }

    #[test]
    fn apply_rejects_malformed_colors() {
        let settings = StyleSettings {
            hairline_color: Some("#12345".to_string()),
            ..StyleSettings::default()
        };
        assert!(matches!(
            settings.apply(StyleConfig::default()),
            Err(Error::Color(_))
        ));
    }

    #[test]
    fn apply_clamps_out_of_range_sizes() {
        let settings = StyleSettings {
            title_font: Some(500.0),
            button_font: Some(f32::NAN),
            corner_radius: Some(-3.0),
            ..StyleSettings::default()
        };

        let style = settings.apply(StyleConfig::default()).expect("valid settings");
        assert_eq!(style.title_font, defaults::MAX_FONT_SIZE);
        assert_eq!(style.button_font, defaults::MIN_FONT_SIZE);
        assert_eq!(style.corner_radius, defaults::MIN_CORNER_RADIUS);
    }
}
