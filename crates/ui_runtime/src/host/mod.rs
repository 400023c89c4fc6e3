//! Host Service Traits
//!
//! Defines the interface between the UI runtime and the engine that embeds
//! it. Keeps the runtime independent of any particular renderer, sound
//! system, input layer or cvar store. All calls are synchronous and happen
//! on the host's frame thread.

use bitflags::bitflags;

use crate::foundation::math::Color;

pub mod recording;

/// Handle to an image or shader registered with the renderer
///
/// Handle `0` is the renderer's "no image" handle and is what a failed
/// registration returns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ShaderHandle(pub i32);

/// Handle to a registered sound effect
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SoundHandle(pub i32);

/// Output display configuration reported by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayConfig {
    /// Output width in pixels
    pub width: u32,
    /// Output height in pixels
    pub height: u32,
}

/// A single textured quad with an explicit destination rectangle and
/// texture-coordinate rectangle, in physical pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StretchPic {
    /// Destination x
    pub x: f32,
    /// Destination y
    pub y: f32,
    /// Destination width
    pub w: f32,
    /// Destination height
    pub h: f32,
    /// Left texture coordinate
    pub s0: f32,
    /// Top texture coordinate
    pub t0: f32,
    /// Right texture coordinate
    pub s1: f32,
    /// Bottom texture coordinate
    pub t1: f32,
    /// Image to sample
    pub shader: ShaderHandle,
}

bitflags! {
    /// Which subsystem currently receives key and mouse events
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct KeyCatcher: u32 {
        /// Console is open
        const CONSOLE = 0x0001;
        /// The menu runtime owns input
        const UI = 0x0002;
        /// Chat message line is open
        const MESSAGE = 0x0004;
        /// Client game module owns input
        const CGAME = 0x0008;
    }
}

bitflags! {
    /// Cvar registration flags understood by the host store
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct CvarFlags: u32 {
        /// Saved to the config file
        const ARCHIVE = 0x0001;
        /// Sent to the server on connect or change
        const USERINFO = 0x0002;
        /// Sent in response to front-end requests
        const SERVERINFO = 0x0004;
        /// Replicated to all clients
        const SYSTEMINFO = 0x0008;
        /// Only settable from the command line
        const INIT = 0x0010;
        /// Change takes effect on restart
        const LATCH = 0x0020;
        /// Read-only for the user
        const ROM = 0x0040;
        /// Created by a set command
        const USER_CREATED = 0x0080;
        /// Not archived even when changed
        const TEMP = 0x0100;
        /// Requires cheats to change
        const CHEAT = 0x0200;
        /// Not cleared on a cvar restart
        const NORESTART = 0x0400;
    }
}

/// Per-character metrics of a registered font
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GlyphInfo {
    /// Line height in glyph pixels
    pub height: i32,
    /// Distance from the baseline to the top of the glyph image
    pub top: i32,
    /// Distance from the baseline to the bottom of the glyph image
    pub bottom: i32,
    /// Horizontal advance after this glyph
    pub x_skip: i32,
    /// Glyph image width
    pub image_width: i32,
    /// Glyph image height
    pub image_height: i32,
    /// Atlas left coordinate
    pub s: f32,
    /// Atlas top coordinate
    pub t: f32,
    /// Atlas right coordinate
    pub s2: f32,
    /// Atlas bottom coordinate
    pub t2: f32,
    /// Atlas page holding the glyph
    pub glyph: ShaderHandle,
}

/// Number of glyph slots in a font, one per byte value
pub const GLYPHS_PER_FONT: usize = 256;

/// A font asset produced by the renderer
///
/// Owned by the renderer's asset cache; the runtime only reads it.
#[derive(Debug, Clone, PartialEq)]
pub struct FontInfo {
    /// Glyphs indexed by byte value
    pub glyphs: Vec<GlyphInfo>,
    /// Multiplier from the font's point size to virtual units
    pub glyph_scale: f32,
    /// Font name
    pub name: String,
}

impl FontInfo {
    /// Create a font whose every slot holds the same glyph
    pub fn uniform(name: impl Into<String>, glyph: GlyphInfo, glyph_scale: f32) -> Self {
        Self {
            glyphs: vec![glyph; GLYPHS_PER_FONT],
            glyph_scale,
            name: name.into(),
        }
    }

    /// Glyph for a byte value
    ///
    /// Fonts carry one slot per byte value; a short table falls back to the
    /// space glyph slot and then to an empty glyph.
    pub fn glyph(&self, code: u8) -> GlyphInfo {
        self.glyphs
            .get(usize::from(code))
            .or_else(|| self.glyphs.get(usize::from(b' ')))
            .copied()
            .unwrap_or_default()
    }
}

/// Rendering services
pub trait Renderer {
    /// Register an image without mipmaps, returning its handle
    fn register_shader_no_mip(&mut self, name: &str) -> ShaderHandle;

    /// Register a font at a point size
    fn register_font(&mut self, name: &str, point_size: u32) -> Option<FontInfo>;

    /// Set the tint applied to subsequent quads; `None` restores no tint
    fn set_color(&mut self, color: Option<&Color>);

    /// Draw one textured quad in physical pixels
    fn draw_stretch_pic(&mut self, pic: StretchPic);

    /// Ask the host to present the current frame
    fn update_screen(&mut self);

    /// Current output resolution
    fn display_config(&self) -> DisplayConfig;
}

/// Audio services
pub trait Audio {
    /// Register a sound effect
    fn register_sound(&mut self, name: &str, compressed: bool) -> SoundHandle;

    /// Play a one-shot sound on a local channel
    fn start_local_sound(&mut self, sound: SoundHandle, channel: i32);

    /// Start a looping background track
    fn start_background_track(&mut self, intro: &str, looped: &str);

    /// Stop the background track
    fn stop_background_track(&mut self);
}

/// Input ownership and key state
pub trait Input {
    /// Current key catcher bits
    fn catcher(&self) -> KeyCatcher;

    /// Replace the key catcher bits
    fn set_catcher(&mut self, catcher: KeyCatcher);

    /// Release every latched key
    fn clear_key_states(&mut self);

    /// Whether a key is currently held
    fn is_key_down(&self, key: i32) -> bool;
}

/// Host cvar store
pub trait CvarStore {
    /// Register a variable, returning its current string value
    fn register(&mut self, name: &str, default: &str, flags: CvarFlags) -> String;

    /// Current string value; empty when the variable does not exist
    fn variable_string(&self, name: &str) -> String;

    /// Current value parsed as a float; zero when missing or unparsable
    fn variable_value(&self, name: &str) -> f32 {
        self.variable_string(name).trim().parse().unwrap_or(0.0)
    }

    /// Write a value
    fn set(&mut self, name: &str, value: &str);
}

/// Message reporting
pub trait Diagnostics {
    /// Report a recoverable message
    fn print(&mut self, message: &str);

    /// Report an unrecoverable error
    ///
    /// The host is expected to end the UI session after this call; the
    /// runtime returns a fatal error to its caller and does no further work
    /// for the current request.
    fn error(&mut self, message: &str);
}

/// Access to the console command being executed
pub trait CommandLine {
    /// Number of tokens in the pending command; zero when nothing is pending
    fn argc(&self) -> usize;

    /// Token `n` of the pending command, empty when out of range
    fn argv(&self, n: usize) -> String;

    /// Drop the pending command once it has been executed
    ///
    /// The UI only consumes commands it handled. Anything it reports as
    /// unhandled stays pending for the host to route elsewhere and clear.
    fn consume_command(&mut self);
}

/// Everything the runtime needs from its host
pub trait Host: Renderer + Audio + Input + CvarStore + Diagnostics + CommandLine {}

impl<T> Host for T where T: Renderer + Audio + Input + CvarStore + Diagnostics + CommandLine {}
