//! UI context
//!
//! All state the runtime keeps between frames, owned in one place and
//! handed explicitly to every operation.

use crate::config::UiConfig;
use crate::foundation::time::FrameClock;
use crate::host::{DisplayConfig, FontInfo, Renderer, ShaderHandle};
use crate::render::{Painter, ScreenTransform, TextRenderer, SCREEN_HEIGHT, SCREEN_WIDTH};

use super::cvars::CvarRegistry;
use super::menu::MenuState;

/// Images resolved once at init
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CachedAssets {
    /// Flat white fill
    pub white: ShaderHandle,
    /// Mouse cursor
    pub cursor: ShaderHandle,
    /// Left background panel
    pub background_a: ShaderHandle,
    /// Right background panel
    pub background_b: ShaderHandle,
}

/// Mouse cursor position on the virtual canvas
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Cursor {
    /// Horizontal position, may extend into the wide-screen margins
    pub x: f32,
    /// Vertical position
    pub y: f32,
}

impl Cursor {
    /// Move by a mouse delta, clamping x to `[-bias, 640 + bias]` and y to
    /// `[0, 480]`
    pub fn move_by(&mut self, dx: f32, dy: f32, bias: f32) {
        self.x = (self.x + dx).max(-bias).min(SCREEN_WIDTH + bias);
        self.y = (self.y + dy).max(0.0).min(SCREEN_HEIGHT);
    }

    /// Whether the cursor lies inside a rectangle, edges included
    pub fn in_rect(&self, x: f32, y: f32, w: f32, h: f32) -> bool {
        !(self.x < x || self.y < y || self.x > x + w || self.y > y + h)
    }
}

/// Process-wide UI state for one init/shutdown session
#[derive(Debug, Clone)]
pub struct UiContext {
    /// Settings the session was started with
    pub config: UiConfig,
    /// Frame timing
    pub clock: FrameClock,
    /// Cursor position
    pub cursor: Cursor,
    /// Output resolution captured at init
    pub display: DisplayConfig,
    /// Virtual-to-physical transform, fixed for the session
    pub transform: ScreenTransform,
    /// Active menu
    pub menu: MenuState,
    /// Cached images
    pub assets: CachedAssets,
    /// Font for styled strings, when one is configured
    pub font: Option<FontInfo>,
    /// Text styling
    pub text: TextRenderer,
    /// Mirrored cvars
    pub cvars: CvarRegistry,
}

impl UiContext {
    /// Fresh context for a display; no assets, no font, no menu
    pub fn new(config: UiConfig, display: DisplayConfig) -> Self {
        let text = TextRenderer::new(config.text);
        Self {
            config,
            clock: FrameClock::new(),
            cursor: Cursor::default(),
            display,
            transform: ScreenTransform::new(display.width, display.height),
            menu: MenuState::new(),
            assets: CachedAssets::default(),
            font: None,
            text,
            cvars: CvarRegistry::new(),
        }
    }

    /// Painter over `renderer` using this session's transform and white image
    pub fn painter<'a, R: Renderer + ?Sized>(&'a self, renderer: &'a mut R) -> Painter<'a, R> {
        Painter::new(renderer, &self.transform, self.assets.white)
    }

    /// Current frame timestamp in milliseconds
    pub fn realtime(&self) -> i32 {
        self.clock.realtime()
    }
}
