//! Glyph-by-glyph text painter
//!
//! Positioning is done in two steps. Justification shifts the starting x
//! once, using a fixed per-character width from [`TextTiming::char_width`]
//! applied to the raw byte length (escapes included). Painting then
//! advances by each glyph's own `x_skip`. The two widths disagree for any
//! proportional font; menus are laid out against this behavior, so the
//! coarse estimate stays.

use super::style::{Justify, TextStyle};
use crate::config::TextTiming;
use crate::foundation::math::{color_black, lerp_color, Color};
use crate::host::{FontInfo, GlyphInfo, Renderer};
use crate::render::color::{escape_color, is_color_escape};
use crate::render::draw::Painter;

/// Brightness the pulse style dips to
const PULSE_LOWLIGHT: f32 = 0.8;

/// Offset of the drop shadow in virtual units
const SHADOW_OFFSET: f32 = 1.0;

/// One string to paint, with its placement and style
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextRun<'t> {
    /// Anchor x in virtual units
    pub x: f32,
    /// Baseline y in virtual units
    pub y: f32,
    /// Scale applied on top of the font's glyph scale
    pub scale: f32,
    /// Base color; escapes keep its alpha
    pub color: Color,
    /// Text, possibly containing color escapes
    pub text: &'t str,
    /// Extra advance added after every glyph
    pub adjust: f32,
    /// Maximum number of glyphs to paint; zero means no limit
    pub limit: usize,
    /// Style flags
    pub style: TextStyle,
}

impl<'t> TextRun<'t> {
    /// Unscaled, white, left-justified text at `(x, y)`
    pub fn new(x: f32, y: f32, text: &'t str) -> Self {
        Self {
            x,
            y,
            scale: 1.0,
            color: Color::new(1.0, 1.0, 1.0, 1.0),
            text,
            adjust: 0.0,
            limit: 0,
            style: TextStyle::empty(),
        }
    }

    /// Set the scale
    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    /// Set the base color
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Set the per-glyph extra advance
    pub fn with_adjust(mut self, adjust: f32) -> Self {
        self.adjust = adjust;
        self
    }

    /// Limit the number of painted glyphs
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Set the style flags
    pub fn with_style(mut self, style: TextStyle) -> Self {
        self.style = style;
        self
    }
}

/// What a paint call produced
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TextStats {
    /// Visible glyphs painted
    pub glyphs: usize,
    /// Shadow glyphs painted
    pub shadows: usize,
    /// Color escapes consumed
    pub escapes: usize,
    /// Pen x after the last glyph, in virtual units
    pub end_x: f32,
}

/// Styled text painter
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer {
    timing: TextTiming,
}

impl TextRenderer {
    /// Create a renderer with the given timing constants
    pub fn new(timing: TextTiming) -> Self {
        Self { timing }
    }

    /// Timing constants in use
    pub fn timing(&self) -> &TextTiming {
        &self.timing
    }

    /// Whether blinking text is hidden at `realtime`
    pub fn blink_hidden(&self, realtime: i32) -> bool {
        realtime
            .checked_div(self.timing.blink_divisor)
            .is_some_and(|period| period & 1 != 0)
    }

    /// Pulse-modulated version of `color` at `realtime`
    pub fn pulse_color(&self, color: &Color, realtime: i32) -> Color {
        let lowlight = color * PULSE_LOWLIGHT;
        let step = realtime.checked_div(self.timing.pulse_divisor).unwrap_or(0);
        let t = 0.5 + 0.5 * (step as f32).sin();
        lerp_color(color, &lowlight, t)
    }

    /// Fixed-width estimate of a string's width, escapes included
    pub fn coarse_width(&self, text: &str) -> f32 {
        text.len() as f32 * self.timing.char_width
    }

    /// Starting x after justification
    pub fn justified_x(&self, x: f32, text: &str, justify: Justify) -> f32 {
        match justify {
            Justify::Left => x,
            Justify::Center => x - self.coarse_width(text) / 2.0,
            Justify::Right => x - self.coarse_width(text),
        }
    }

    /// Draw color for a run after the pulse style is applied
    pub fn style_color(&self, run: &TextRun<'_>, realtime: i32) -> Color {
        if run.style.contains(TextStyle::PULSE) {
            self.pulse_color(&run.color, realtime)
        } else {
            run.color
        }
    }

    /// Lay out and paint a run
    ///
    /// Empty text and hidden blink periods paint nothing and leave the
    /// renderer color untouched. Otherwise the tint is reset to "no tint"
    /// before returning.
    pub fn paint<R: Renderer + ?Sized>(
        &self,
        painter: &mut Painter<'_, R>,
        font: &FontInfo,
        realtime: i32,
        run: &TextRun<'_>,
    ) -> TextStats {
        let mut stats = TextStats {
            end_x: run.x,
            ..TextStats::default()
        };

        if run.text.is_empty() {
            return stats;
        }
        if run.style.contains(TextStyle::BLINK) && self.blink_hidden(realtime) {
            log::trace!("blink hides {:?} at {}", run.text, realtime);
            return stats;
        }

        let draw_color = self.style_color(run, realtime);
        let use_scale = run.scale * font.glyph_scale;
        let bytes = run.text.as_bytes();
        let len = if run.limit > 0 { bytes.len().min(run.limit) } else { bytes.len() };
        let shadowed = run.style.contains(TextStyle::DROPSHADOW);

        let mut x = self.justified_x(run.x, run.text, run.style.justify());
        let y = run.y;
        let mut color = draw_color;

        let mut scope = painter.scoped_color(Some(&draw_color));
        let mut i = 0;
        while i < bytes.len() && stats.glyphs < len {
            if is_color_escape(bytes, i) {
                color = escape_color(bytes[i + 1]);
                color.w = draw_color.w;
                scope.set(&color);
                stats.escapes += 1;
                i += 2;
                continue;
            }

            let glyph = font.glyph(bytes[i]);
            let yadj = use_scale * glyph.top as f32;

            if shadowed {
                let mut shadow = color_black();
                shadow.w = color.w;
                scope.set(&shadow);
                paint_glyph(&mut *scope, &glyph, x + SHADOW_OFFSET, y - yadj + SHADOW_OFFSET, use_scale);
                scope.set(&color);
                stats.shadows += 1;
            }
            paint_glyph(&mut *scope, &glyph, x, y - yadj, use_scale);

            x += glyph.x_skip as f32 * use_scale + run.adjust;
            stats.glyphs += 1;
            i += 1;
        }

        stats.end_x = x;
        stats
    }
}

fn paint_glyph<R: Renderer + ?Sized>(
    painter: &mut Painter<'_, R>,
    glyph: &GlyphInfo,
    x: f32,
    y: f32,
    scale: f32,
) {
    let w = glyph.image_width as f32 * scale;
    let h = glyph.image_height as f32 * scale;
    painter.blit(x, y, w, h, [glyph.s, glyph.t, glyph.s2, glyph.t2], glyph.glyph);
}
