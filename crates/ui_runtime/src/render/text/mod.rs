//! Styled text rendering
//!
//! Lays strings out glyph by glyph from a host font, honoring inline color
//! escapes and the drop-shadow, pulse and blink styles.

mod style;
mod text_renderer;

pub use style::{Justify, TextStyle};
pub use text_renderer::{TextRenderer, TextRun, TextStats};
pub use crate::host::{FontInfo, GlyphInfo};
