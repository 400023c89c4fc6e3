//! Inline color escapes
//!
//! Text may embed `^N` sequences that switch the draw color to entry `N`
//! of an eight-color table. A doubled marker (`^^`) is not an escape.

use crate::foundation::math::Color;

/// Escape marker byte
pub const COLOR_ESCAPE: u8 = b'^';

const COLOR_TABLE: [[f32; 4]; 8] = [
    [0.0, 0.0, 0.0, 1.0], // black
    [1.0, 0.0, 0.0, 1.0], // red
    [0.0, 1.0, 0.0, 1.0], // green
    [1.0, 1.0, 0.0, 1.0], // yellow
    [0.0, 0.0, 1.0, 1.0], // blue
    [0.0, 1.0, 1.0, 1.0], // cyan
    [1.0, 0.0, 1.0, 1.0], // magenta
    [1.0, 1.0, 1.0, 1.0], // white
];

/// Whether `text[at..]` starts with a color escape
pub fn is_color_escape(text: &[u8], at: usize) -> bool {
    match (text.get(at), text.get(at + 1)) {
        (Some(&COLOR_ESCAPE), Some(&next)) => next != COLOR_ESCAPE && next != 0,
        _ => false,
    }
}

/// Table index selected by the byte following an escape marker
///
/// Any byte is accepted; only its low three bits past `'0'` matter, so
/// `'8'` wraps to black and letters land somewhere in the table.
pub fn color_index(code: u8) -> usize {
    usize::from(code.wrapping_sub(b'0') & 7)
}

/// Table color selected by the byte following an escape marker
pub fn escape_color(code: u8) -> Color {
    Color::from(COLOR_TABLE[color_index(code)])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_detection() {
        assert!(is_color_escape(b"^1Hi", 0));
        assert!(!is_color_escape(b"^1Hi", 1));
        assert!(!is_color_escape(b"^^", 0));
        assert!(!is_color_escape(b"^", 0));
        assert!(!is_color_escape(b"", 0));
    }

    #[test]
    fn test_color_index_wraps() {
        assert_eq!(color_index(b'1'), 1);
        assert_eq!(color_index(b'7'), 7);
        assert_eq!(color_index(b'8'), 0);
        assert_eq!(escape_color(b'1'), Color::new(1.0, 0.0, 0.0, 1.0));
        assert_eq!(escape_color(b'9'), Color::new(1.0, 0.0, 0.0, 1.0));
    }
}
