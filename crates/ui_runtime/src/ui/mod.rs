//! In-game UI runtime
//!
//! Architecture:
//! - context: state owned for one init/shutdown session
//! - menu: active-menu state machine and the menu contents seam
//! - cvars: local mirror of host cvars
//! - frame: per-frame protocol and render pass
//! - runtime: host-facing entry points

pub mod error;
pub mod menu;
pub mod cvars;
pub mod context;
pub mod frame;
pub mod runtime;

#[cfg(test)]
mod tests;

/// Cvar that echoes every `draw_string` call through diagnostics
pub const DEBUG_TEXT_CVAR: &str = "ui_debugText";

/// Host cvar the in-game menu uses to pause the game
pub const PAUSED_CVAR: &str = "cl_paused";

pub use error::UiError;
pub use menu::{ActiveMenu, MenuCommand, MenuScreens, MenuState, NullMenus};
pub use cvars::{CvarRegistry, TrackedCvar};
pub use context::{CachedAssets, Cursor, UiContext};
pub use frame::{CommandOutcome, FrameReport, UiCommand};
pub use runtime::UiRuntime;
