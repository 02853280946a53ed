//! Application settings
//!
//! Colors are resolved from, in priority order:
//! 1. CLI arguments (`--color`)
//! 2. The user config file (settings.json)
//! 3. Built-in defaults

use super::{CliArgs, ConfigFile};
use crate::data::parse_hex_rgb;
use bevy::color::Srgba;
use bevy::prelude::*;

pub const WINDOW_TITLE: &str = "pointlayer";
pub const DEFAULT_WINDOW_SIZE: (f32, f32) = (1024.0, 768.0);

pub const DEFAULT_NEW_POINT_COLOR: &str = "ff8800";
pub const DEFAULT_BACKGROUND_COLOR: &str = "181818";

/// Editor-wide settings for the point layer
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct LayerSettings {
    /// Color given to points created with the mouse
    pub new_point_color: Srgba,
    pub background_color: Srgba,
}

impl Default for LayerSettings {
    fn default() -> Self {
        Self {
            new_point_color: Srgba::rgb_u8(0xff, 0x88, 0x00),
            background_color: Srgba::rgb_u8(0x18, 0x18, 0x18),
        }
    }
}

impl LayerSettings {
    /// Resolve settings from CLI arguments and the user config file.
    ///
    /// A bad CLI color is an error; a bad config color is logged and skipped.
    pub fn resolve(cli_args: &CliArgs, config: Option<&ConfigFile>) -> anyhow::Result<Self> {
        let mut settings = Self::default();

        if let Some(config) = config {
            if let Some(color) = config_color(config.new_point_color.as_deref(), "new_point_color") {
                settings.new_point_color = color;
            }
            if let Some(color) = config_color(config.background_color.as_deref(), "background_color") {
                settings.background_color = color;
            }
        }

        if let Some(color) = &cli_args.color {
            settings.new_point_color = parse_hex_rgb(color)
                .map_err(|e| anyhow::anyhow!("Invalid --color '{}': {}", color, e))?;
            debug!("Using new point color from CLI: {}", color);
        }

        Ok(settings)
    }
}

fn config_color(value: Option<&str>, name: &str) -> Option<Srgba> {
    let value = value?;
    match parse_hex_rgb(value) {
        Ok(color) => {
            debug!("Using {} from config file: {}", name, value);
            Some(color)
        }
        Err(e) => {
            warn!("Ignoring {} '{}' in settings.json: {}", name, value, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_default_hex_values() {
        let settings = LayerSettings::default();
        assert_eq!(Ok(settings.new_point_color), parse_hex_rgb(DEFAULT_NEW_POINT_COLOR));
        assert_eq!(Ok(settings.background_color), parse_hex_rgb(DEFAULT_BACKGROUND_COLOR));
    }

    #[test]
    fn test_config_overrides_defaults() {
        let config = ConfigFile {
            new_point_color: Some("00ff00".to_string()),
            background_color: Some("ffffff".to_string()),
        };
        let settings = LayerSettings::resolve(&CliArgs::default(), Some(&config)).unwrap();

        assert_eq!(settings.new_point_color, Srgba::rgb(0.0, 1.0, 0.0));
        assert_eq!(settings.background_color, Srgba::rgb(1.0, 1.0, 1.0));
    }

    #[test]
    fn test_cli_overrides_config() {
        let config = ConfigFile {
            new_point_color: Some("00ff00".to_string()),
            background_color: None,
        };
        let cli_args = CliArgs {
            color: Some("0000ff".to_string()),
            ..Default::default()
        };
        let settings = LayerSettings::resolve(&cli_args, Some(&config)).unwrap();

        assert_eq!(settings.new_point_color, Srgba::rgb(0.0, 0.0, 1.0));
        assert_eq!(settings.background_color, LayerSettings::default().background_color);
    }

    #[test]
    fn test_bad_config_color_falls_back() {
        let config = ConfigFile {
            new_point_color: Some("orange".to_string()),
            background_color: None,
        };
        let settings = LayerSettings::resolve(&CliArgs::default(), Some(&config)).unwrap();
        assert_eq!(settings, LayerSettings::default());
    }

    #[test]
    fn test_bad_cli_color_is_an_error() {
        let cli_args = CliArgs {
            color: Some("12".to_string()),
            ..Default::default()
        };
        assert!(LayerSettings::resolve(&cli_args, None).is_err());
    }
}
