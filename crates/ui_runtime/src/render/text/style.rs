//! Text style flags

use bitflags::bitflags;

bitflags! {
    /// Style bits accepted by the text renderer
    ///
    /// The low three bits select justification; no bits set means left.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct TextStyle: u32 {
        /// Center justify at x
        const CENTER = 0x0001;
        /// Right justify at x
        const RIGHT = 0x0002;
        /// Black copy one unit down and right under every glyph
        const DROPSHADOW = 0x0800;
        /// Skip drawing on alternate blink periods
        const BLINK = 0x1000;
        /// Oscillate brightness over time
        const PULSE = 0x4000;
    }
}

/// Horizontal justification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Justify {
    /// Text starts at x
    #[default]
    Left,
    /// Text is centered on x
    Center,
    /// Text ends at x
    Right,
}

impl TextStyle {
    /// Bits that encode justification
    pub const FORMAT_MASK: u32 = 0x0007;

    /// Justification encoded in the format bits
    pub fn justify(self) -> Justify {
        match self.bits() & Self::FORMAT_MASK {
            0x0001 => Justify::Center,
            0x0002 => Justify::Right,
            _ => Justify::Left,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_justify_from_bits() {
        assert_eq!(TextStyle::empty().justify(), Justify::Left);
        assert_eq!(TextStyle::CENTER.justify(), Justify::Center);
        assert_eq!((TextStyle::RIGHT | TextStyle::PULSE).justify(), Justify::Right);
        // both bits set is not a known format and falls back to left
        assert_eq!((TextStyle::CENTER | TextStyle::RIGHT).justify(), Justify::Left);
    }
}
