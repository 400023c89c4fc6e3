//! # UI Runtime
//!
//! The in-game menu runtime of a first-person shooter client, written
//! against abstract host services.
//!
//! ## Features
//!
//! - **Virtual Canvas**: 640x480 layout mapped onto any output resolution,
//!   centered with a horizontal bias on wide displays
//! - **Draw Primitives**: Filled and outlined rectangles, mirrored images,
//!   scoped tinting
//! - **Styled Text**: Inline color escapes, drop shadows, blink, pulse and
//!   coarse justification
//! - **Menu State**: Main and in-game menus with pause and input capture
//! - **Frame Protocol**: Fixed per-frame ordering of timing, console
//!   commands, cvar sync and rendering
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ui_runtime::prelude::*;
//!
//! fn main() -> Result<(), UiError> {
//!     let mut host = RecordingHost::new(1920, 1080);
//!     let mut ui = UiRuntime::init(UiConfig::default(), &mut host, NullMenus)?;
//!
//!     ui.set_active_menu(&mut host, MenuCommand::Main)?;
//!     let report = ui.refresh(&mut host, 16);
//!     assert!(report.rendered);
//!
//!     ui.shutdown(&mut host);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod foundation;
pub mod config;
pub mod host;
pub mod render;
pub mod ui;

/// Common imports for runtime users
pub mod prelude {
    pub use crate::{
        config::{Config, ConfigError, UiConfig},
        foundation::math::Color,
        host::{
            recording::RecordingHost, Audio, CommandLine, CvarStore, Diagnostics, Host, Input,
            KeyCatcher, Renderer,
        },
        render::{ScreenTransform, TextRun, TextStyle},
        ui::{ActiveMenu, FrameReport, MenuCommand, MenuScreens, NullMenus, UiError, UiRuntime},
    };
}
