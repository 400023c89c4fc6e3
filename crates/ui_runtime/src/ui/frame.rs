//! Per-frame protocol
//!
//! Every frame runs the same four steps in the same order: timing update,
//! console command intake, cvar sync, and a render pass that only happens
//! while the UI holds the input catcher.

use crate::config::UiAssets;
use crate::host::{CommandLine, Host, KeyCatcher, Renderer};

use super::context::{CachedAssets, UiContext};
use super::menu::MenuScreens;

/// Left background panel placement, virtual units
const BACKGROUND_A: (f32, f32, f32, f32) = (0.0, 0.0, 512.0, 512.0);

/// Right background panel placement, virtual units
const BACKGROUND_B: (f32, f32, f32, f32) = (384.0, 0.0, 256.0, 512.0);

/// Console commands the UI handles itself
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiCommand {
    /// Re-register every cached image
    Cache,
}

/// Result of looking at the pending console command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CommandOutcome {
    /// No command was pending
    #[default]
    Idle,
    /// The command was a UI command and has been executed
    Handled(UiCommand),
    /// The command belongs to someone else
    Unhandled,
}

impl CommandOutcome {
    /// Whether the UI consumed the command
    pub fn is_handled(&self) -> bool {
        matches!(self, CommandOutcome::Handled(_))
    }
}

/// What one frame did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameReport {
    /// Milliseconds since the previous frame
    pub delta: i32,
    /// Console command intake result
    pub command: CommandOutcome,
    /// Number of mirrored cvars that changed this frame
    pub cvars_changed: usize,
    /// Whether the render pass ran
    pub rendered: bool,
}

/// Register the configured images and return their handles
pub fn cache_assets<R: Renderer + ?Sized>(assets: &UiAssets, renderer: &mut R) -> CachedAssets {
    CachedAssets {
        white: renderer.register_shader_no_mip(&assets.white),
        cursor: renderer.register_shader_no_mip(&assets.cursor),
        background_a: renderer.register_shader_no_mip(&assets.background_a),
        background_b: renderer.register_shader_no_mip(&assets.background_b),
    }
}

/// Classify the pending console command
///
/// The first token is compared to the configured cache token, ignoring
/// ASCII case.
pub fn dispatch_command<H: CommandLine + ?Sized>(ctx: &UiContext, host: &H) -> CommandOutcome {
    if host.argc() == 0 {
        return CommandOutcome::Idle;
    }

    let token = host.argv(0);
    if token.eq_ignore_ascii_case(&ctx.config.cache_command) {
        CommandOutcome::Handled(UiCommand::Cache)
    } else {
        log::trace!("console command {:?} not for the UI", token);
        CommandOutcome::Unhandled
    }
}

/// Run a UI command
pub fn execute_command<R: Renderer + ?Sized>(command: UiCommand, ctx: &mut UiContext, renderer: &mut R) {
    match command {
        UiCommand::Cache => {
            ctx.assets = cache_assets(&ctx.config.assets, renderer);
            log::debug!("asset cache primed: {:?}", ctx.assets);
        }
    }
}

/// Classify and, when it is ours, execute and consume the pending console
/// command
pub fn intake_command<H: Host + ?Sized>(ctx: &mut UiContext, host: &mut H) -> CommandOutcome {
    let outcome = dispatch_command(ctx, host);
    if let CommandOutcome::Handled(command) = outcome {
        execute_command(command, ctx, host);
        host.consume_command();
    }
    outcome
}

/// Run one frame at timestamp `now` (milliseconds)
pub fn run_frame<H: Host, M: MenuScreens + ?Sized>(
    ctx: &mut UiContext,
    host: &mut H,
    menus: &mut M,
    now: i32,
) -> FrameReport {
    let delta = ctx.clock.advance(now);
    let command = intake_command(ctx, host);
    let cvars_changed = ctx.cvars.update(host);

    let rendered = host.catcher().contains(KeyCatcher::UI);
    if rendered {
        render_pass(ctx, host, menus);
    }

    log::trace!(
        "frame {} at {}: delta {} command {:?} rendered {}",
        ctx.clock.frame_count(),
        now,
        delta,
        command,
        rendered
    );

    FrameReport {
        delta,
        command,
        cvars_changed,
        rendered,
    }
}

/// Paint backgrounds, menu contents, then the cursor on top
pub fn render_pass<H: Host, M: MenuScreens + ?Sized>(ctx: &UiContext, host: &mut H, menus: &mut M) {
    if ctx.menu.is_active() {
        let mut painter = ctx.painter(host);
        let (x, y, w, h) = BACKGROUND_A;
        painter.draw_handle_pic(x, y, w, h, ctx.assets.background_a);
        let (x, y, w, h) = BACKGROUND_B;
        painter.draw_handle_pic(x, y, w, h, ctx.assets.background_b);

        menus.draw(ctx.menu.active(), ctx, host);
    }

    host.set_color(None);
    let size = ctx.config.cursor_size;
    let half = size / 2.0;
    ctx.painter(host)
        .draw_handle_pic(ctx.cursor.x - half, ctx.cursor.y - half, size, size, ctx.assets.cursor);
}
