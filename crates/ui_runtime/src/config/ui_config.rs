//! # UI Runtime Configuration
//!
//! Asset names, text timing and the cvars the runtime mirrors from the host.
//! Everything here has a default matching the stock game assets, so an empty
//! config file is valid.

use serde::{Serialize, Deserialize};

use super::{Config, ConfigError};

/// Image names resolved through the renderer at init
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiAssets {
    /// Flat white image used for rectangle fills and outlines
    pub white: String,
    /// Mouse cursor image
    pub cursor: String,
    /// Left background panel (drawn 512x512 at the origin)
    pub background_a: String,
    /// Right background panel (drawn 256x512 at x = 384)
    pub background_b: String,
}

impl Default for UiAssets {
    fn default() -> Self {
        Self {
            white: "ColorBlock".to_string(),
            cursor: "mouse".to_string(),
            background_a: "sepiaload_a".to_string(),
            background_b: "sepiaload_b".to_string(),
        }
    }
}

/// Font registered with the renderer at init
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontConfig {
    /// Font name as known to the renderer
    pub name: String,
    /// Point size to request
    pub point_size: u32,
}

/// Timing and coarse-metric constants for styled text
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextTiming {
    /// Blink parity divisor in milliseconds
    pub blink_divisor: i32,
    /// Length of one pulse step in milliseconds
    pub pulse_divisor: i32,
    /// Fixed per-character width used for justification and text boxes
    pub char_width: f32,
    /// Fixed per-character height used for text boxes
    pub char_height: f32,
}

impl Default for TextTiming {
    fn default() -> Self {
        Self {
            blink_divisor: 200,
            pulse_divisor: 75,
            char_width: 14.0,
            char_height: 14.0,
        }
    }
}

/// A cvar the runtime registers and mirrors every frame
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CvarSpec {
    /// Variable name
    pub name: String,
    /// Default value used at registration
    pub default: String,
    /// Raw flag bits, see [`crate::host::CvarFlags`]
    #[serde(default)]
    pub flags: u32,
}

impl CvarSpec {
    /// Create a new cvar spec
    pub fn new(name: impl Into<String>, default: impl Into<String>, flags: u32) -> Self {
        Self {
            name: name.into(),
            default: default.into(),
            flags,
        }
    }
}

/// Top-level UI runtime configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Log filter used by binaries embedding the runtime
    pub log_level: String,
    /// Cached images
    pub assets: UiAssets,
    /// Optional font for styled text
    pub font: Option<FontConfig>,
    /// Text timing constants
    pub text: TextTiming,
    /// Cursor edge length in virtual units
    pub cursor_size: f32,
    /// Console command token that primes the asset cache
    pub cache_command: String,
    /// Cvars registered at init
    pub cvars: Vec<CvarSpec>,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            assets: UiAssets::default(),
            font: None,
            text: TextTiming::default(),
            cursor_size: 32.0,
            cache_command: "ui_cache".to_string(),
            cvars: vec![CvarSpec::new(crate::ui::DEBUG_TEXT_CVAR, "0", 0)],
        }
    }
}

impl Config for UiConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        let assets = [
            ("white", &self.assets.white),
            ("cursor", &self.assets.cursor),
            ("background_a", &self.assets.background_a),
            ("background_b", &self.assets.background_b),
        ];
        for (slot, name) in assets {
            if name.is_empty() {
                return Err(ConfigError::Invalid(format!("asset `{}` has an empty name", slot)));
            }
        }

        if self.text.blink_divisor <= 0 {
            return Err(ConfigError::Invalid("blink_divisor must be positive".to_string()));
        }
        if self.text.pulse_divisor <= 0 {
            return Err(ConfigError::Invalid("pulse_divisor must be positive".to_string()));
        }
        if self.cache_command.is_empty() {
            return Err(ConfigError::Invalid("cache_command cannot be empty".to_string()));
        }
        if let Some(cvar) = self.cvars.iter().find(|c| c.name.is_empty()) {
            return Err(ConfigError::Invalid(format!(
                "cvar with default `{}` has an empty name",
                cvar.default
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigFormat;

    #[test]
    fn test_default_config_is_valid() {
        let config = UiConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.text.blink_divisor, 200);
        assert_eq!(config.cursor_size, 32.0);
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = UiConfig::parse("", ConfigFormat::Toml).unwrap();
        assert_eq!(config, UiConfig::default());
    }

    #[test]
    fn test_partial_toml_overrides() {
        let text = r#"
            cursor_size = 24.0

            [assets]
            cursor = "ui/cursor_arrow"

            [font]
            name = "fonts/courier"
            point_size = 16

            [[cvars]]
            name = "ui_volume"
            default = "0.8"
            flags = 1
        "#;
        let config = UiConfig::parse(text, ConfigFormat::Toml).unwrap();
        assert_eq!(config.cursor_size, 24.0);
        assert_eq!(config.assets.cursor, "ui/cursor_arrow");
        assert_eq!(config.assets.white, "ColorBlock");
        assert_eq!(config.font.as_ref().map(|f| f.point_size), Some(16));
        assert_eq!(config.cvars, vec![CvarSpec::new("ui_volume", "0.8", 1)]);
    }

    #[test]
    fn test_ron_round_trip_through_parser() {
        let text = "(cache_command: \"prime\", text: (blink_divisor: 100))";
        let config = UiConfig::parse(text, ConfigFormat::Ron).unwrap();
        assert_eq!(config.cache_command, "prime");
        assert_eq!(config.text.blink_divisor, 100);
        assert_eq!(config.text.pulse_divisor, 75);
    }

    #[test]
    fn test_validation_rejects_zero_divisor() {
        let mut config = UiConfig::default();
        config.text.blink_divisor = 0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_validation_rejects_empty_asset() {
        let mut config = UiConfig::default();
        config.assets.background_b.clear();
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }
}
