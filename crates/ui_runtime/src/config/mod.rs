//! Configuration system
//!
//! UI settings live in a TOML or RON file next to the game data. The file
//! extension picks the format; every loaded value is validated before the
//! runtime sees it.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;

mod ui_config;

pub use ui_config::{CvarSpec, FontConfig, TextTiming, UiAssets, UiConfig};

/// On-disk configuration format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// `.toml`
    Toml,
    /// `.ron`
    Ron,
}

impl ConfigFormat {
    /// Pick the format from a file extension, ignoring ASCII case
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let extension = path.extension().and_then(|ext| ext.to_str()).unwrap_or_default();
        if extension.eq_ignore_ascii_case("toml") {
            Ok(Self::Toml)
        } else if extension.eq_ignore_ascii_case("ron") {
            Ok(Self::Ron)
        } else {
            Err(ConfigError::UnknownExtension(path.to_path_buf()))
        }
    }

    /// Deserialize `contents` in this format
    pub fn parse<T: DeserializeOwned>(self, contents: &str) -> Result<T, ConfigError> {
        match self {
            Self::Toml => toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string())),
            Self::Ron => ron::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string())),
        }
    }

    /// Serialize `value` in this format
    pub fn render<T: Serialize>(self, value: &T) -> Result<String, ConfigError> {
        match self {
            Self::Toml => toml::to_string_pretty(value).map_err(|e| ConfigError::Serialize(e.to_string())),
            Self::Ron => ron::ser::to_string_pretty(value, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string())),
        }
    }
}

/// A settings structure that can be read from and written to disk
pub trait Config: Serialize + DeserializeOwned + Default {
    /// Reject values that parsed but cannot be used
    fn validate(&self) -> Result<(), ConfigError> {
        Ok(())
    }

    /// Parse and validate configuration text
    fn parse(contents: &str, format: ConfigFormat) -> Result<Self, ConfigError> {
        let config: Self = format.parse(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a configuration file
    fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let format = ConfigFormat::from_path(path)?;
        let contents = std::fs::read_to_string(path)?;
        log::debug!("loading {:?} config from {}", format, path.display());
        Self::parse(&contents, format)
    }

    /// Write the configuration in the format its extension names
    fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let contents = ConfigFormat::from_path(path)?.render(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// The file could not be read or written
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The text is not valid for its format
    #[error("Parse error: {0}")]
    Parse(String),

    /// The value could not be written out
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Neither `.toml` nor `.ron`
    #[error("No config format for {}", .0.display())]
    UnknownExtension(PathBuf),

    /// Values parsed but are not usable
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(ConfigFormat::from_path(Path::new("ui.toml")).unwrap(), ConfigFormat::Toml);
        assert_eq!(ConfigFormat::from_path(Path::new("cfg/UI.RON")).unwrap(), ConfigFormat::Ron);

        for path in ["ui.json", "ui", "toml"] {
            let err = ConfigFormat::from_path(Path::new(path)).unwrap_err();
            assert!(matches!(err, ConfigError::UnknownExtension(_)), "{}", path);
        }
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let path = std::env::temp_dir().join("ui_runtime_missing_config.toml");
        let err = UiConfig::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_save_then_load() {
        let path = std::env::temp_dir().join(format!("ui_runtime_save_{}.ron", std::process::id()));
        let mut config = UiConfig::default();
        config.cursor_size = 40.0;
        config.save(&path).unwrap();

        let loaded = UiConfig::load(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_parse_validates() {
        let err = UiConfig::parse("cache_command = \"\"", ConfigFormat::Toml).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }
}
