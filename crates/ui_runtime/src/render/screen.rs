//! Virtual screen transform
//!
//! All menu layout is authored on a fixed 640x480 canvas. The transform maps
//! that canvas onto the real output, fitting vertically and centering the
//! 4:3 area horizontally on wider displays.

/// Virtual canvas width
pub const SCREEN_WIDTH: f32 = 640.0;

/// Virtual canvas height
pub const SCREEN_HEIGHT: f32 = 480.0;

/// Scale factors and horizontal bias from virtual to physical pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenTransform {
    /// Physical pixels per virtual unit, horizontally
    pub xscale: f32,
    /// Physical pixels per virtual unit, vertically
    pub yscale: f32,
    /// Physical pixels added to every x coordinate on wide displays
    pub bias: f32,
}

impl ScreenTransform {
    /// Compute the transform for an output resolution
    ///
    /// Zero or degenerate sizes produce zero scales rather than dividing by
    /// zero; callers are expected to pass a real resolution.
    pub fn new(width: u32, height: u32) -> Self {
        let width_f = width as f32;
        let height_f = height as f32;

        let mut xscale = width_f * (1.0 / SCREEN_WIDTH);
        let yscale = height_f * (1.0 / SCREEN_HEIGHT);

        let bias = if u64::from(width) * 480 > u64::from(height) * 640 {
            // wide screen: fit vertically, center the 4:3 area
            xscale = yscale;
            0.5 * (width_f - height_f * (SCREEN_WIDTH / SCREEN_HEIGHT))
        } else {
            0.0
        };

        Self { xscale, yscale, bias }
    }

    /// Whether the output is wider than 4:3
    pub fn is_widescreen(&self) -> bool {
        self.bias > 0.0
    }

    /// Convert a virtual rectangle to physical pixels
    pub fn to_physical(&self, x: f32, y: f32, w: f32, h: f32) -> (f32, f32, f32, f32) {
        (
            x * self.xscale + self.bias,
            y * self.yscale,
            w * self.xscale,
            h * self.yscale,
        )
    }
}

impl Default for ScreenTransform {
    fn default() -> Self {
        Self::new(SCREEN_WIDTH as u32, SCREEN_HEIGHT as u32)
    }
}
