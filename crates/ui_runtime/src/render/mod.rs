//! Rendering on the 640x480 virtual canvas
//!
//! Architecture:
//! - screen: virtual-to-physical transform
//! - draw: rectangle, outline and image primitives with scoped tinting
//! - color: inline color escapes
//! - text: styled glyph layout

pub mod screen;
pub mod draw;
pub mod color;
pub mod text;

pub use screen::{ScreenTransform, SCREEN_WIDTH, SCREEN_HEIGHT};
pub use draw::{Painter, ColorScope, FULL_IMAGE};
pub use text::{TextRenderer, TextRun, TextStats, TextStyle, Justify};
