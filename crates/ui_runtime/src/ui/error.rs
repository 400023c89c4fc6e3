//! UI runtime errors

use thiserror::Error;

use super::menu::MenuCommand;

/// Errors reported by runtime entry points
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UiError {
    /// Unrecoverable request; the host must end the UI session
    #[error("Fatal UI error: {0}")]
    Fatal(String),

    /// Known menu that this build does not implement
    #[error("Menu {0:?} is not supported")]
    UnsupportedMenu(MenuCommand),

    /// Raw menu identifier outside the known set
    #[error("Unknown menu identifier {0}")]
    UnknownMenu(i32),

    /// Configuration rejected at init
    #[error("Invalid UI configuration: {0}")]
    Config(String),
}

impl UiError {
    /// Whether the host has to stop the UI subsystem
    pub fn is_fatal(&self) -> bool {
        matches!(self, UiError::Fatal(_))
    }
}

impl From<crate::config::ConfigError> for UiError {
    fn from(err: crate::config::ConfigError) -> Self {
        UiError::Config(err.to_string())
    }
}
