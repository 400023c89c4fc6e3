//! Host-facing entry points
//!
//! [`UiRuntime`] is what an engine embeds. It owns the session context and
//! the menu contents collaborator; the host passes itself into every call.

use crate::config::{Config, UiConfig};
use crate::foundation::math::{color_black, color_white, Color};
use crate::host::{Host, Renderer, ShaderHandle};
use crate::render::{TextRun, TextStats, TextStyle};

use super::context::{CachedAssets, Cursor, UiContext};
use super::error::UiError;
use super::frame::{self, cache_assets, FrameReport};
use super::menu::{ActiveMenu, MenuCommand, MenuScreens, NullMenus};
use super::DEBUG_TEXT_CVAR;

/// UI subsystem for one init/shutdown session
pub struct UiRuntime<M: MenuScreens = NullMenus> {
    ctx: UiContext,
    menus: M,
}

impl<M: MenuScreens> UiRuntime<M> {
    /// Start a session
    ///
    /// Validates the configuration, registers cvars, captures the display
    /// resolution, computes the screen transform and caches images and the
    /// optional font.
    pub fn init<H: Host>(config: UiConfig, host: &mut H, menus: M) -> Result<Self, UiError> {
        config.validate()?;

        let display = host.display_config();
        let mut ctx = UiContext::new(config, display);

        ctx.cvars.register_all(host, &ctx.config.cvars);
        ctx.assets = cache_assets(&ctx.config.assets, host);

        if let Some(font) = &ctx.config.font {
            ctx.font = host.register_font(&font.name, font.point_size);
            if ctx.font.is_none() {
                log::warn!(
                    "font {} ({}pt) not available, styled strings disabled",
                    font.name,
                    font.point_size
                );
            }
        }

        log::info!(
            "UI initialized at {}x{}: scale {:.3}x{:.3}, bias {:.1}",
            display.width,
            display.height,
            ctx.transform.xscale,
            ctx.transform.yscale,
            ctx.transform.bias
        );

        Ok(Self { ctx, menus })
    }

    /// End the session: close menus and drop cached handles
    pub fn shutdown<H: Host + ?Sized>(&mut self, host: &mut H) {
        self.ctx.menu.force_off(host);
        self.ctx.assets = CachedAssets::default();
        self.ctx.font = None;
        log::info!("UI shut down after {} frames", self.ctx.clock.frame_count());
    }

    /// Session state
    pub fn context(&self) -> &UiContext {
        &self.ctx
    }

    /// Menu contents collaborator
    pub fn menus(&self) -> &M {
        &self.menus
    }

    /// Menu currently up
    pub fn active_menu(&self) -> ActiveMenu {
        self.ctx.menu.active()
    }

    /// Per-frame update and render at timestamp `now`
    pub fn refresh<H: Host>(&mut self, host: &mut H, now: i32) -> FrameReport {
        frame::run_frame(&mut self.ctx, host, &mut self.menus, now)
    }

    /// Console command entry point; returns whether the UI handled it
    pub fn console_command<H: Host>(&mut self, host: &mut H, now: i32) -> bool {
        self.ctx.clock.sync(now);
        frame::intake_command(&mut self.ctx, host).is_handled()
    }

    /// Switch menus
    pub fn set_active_menu<H: Host>(&mut self, host: &mut H, command: MenuCommand) -> Result<(), UiError> {
        self.ctx.menu.activate(command, host, &mut self.menus)
    }

    /// Switch menus from a raw host identifier
    ///
    /// Identifiers outside the known set leave the state alone and are
    /// reported like unsupported menus.
    pub fn set_active_menu_raw<H: Host>(&mut self, host: &mut H, raw: i32) -> Result<(), UiError> {
        match MenuCommand::try_from(raw) {
            Ok(command) => self.set_active_menu(host, command),
            Err(err) => {
                log::warn!("set_active_menu: {}", err);
                if cfg!(debug_assertions) {
                    host.print(&format!("set_active_menu: bad enum {}\n", raw));
                }
                Err(err)
            }
        }
    }

    /// Key event; forwarded to the active menu, ignored otherwise
    pub fn key_event<H: Host>(&mut self, host: &mut H, key: i32, down: bool) {
        let active = self.ctx.menu.active();
        if active == ActiveMenu::Inactive {
            return;
        }
        log::trace!("key {} {} -> {:?}", key, if down { "down" } else { "up" }, active);
        self.menus.key_event(active, key, down, host);
    }

    /// Mouse delta event; moves the cursor while a menu is up
    pub fn mouse_event(&mut self, dx: i32, dy: i32) {
        if !self.ctx.menu.is_active() {
            return;
        }
        let bias = self.ctx.transform.bias;
        self.ctx.cursor.move_by(dx as f32, dy as f32, bias);
    }

    /// Paint the connection progress screen
    pub fn draw_connect_screen<H: Host>(&mut self, host: &mut H, overlay: bool) {
        self.menus.draw_connect_screen(overlay, &self.ctx, host);
    }

    /// Whether the UI covers the whole screen
    pub fn is_fullscreen(&self) -> bool {
        true
    }

    /// Ask the renderer to present the frame
    pub fn update_screen<R: Renderer + ?Sized>(&self, renderer: &mut R) {
        renderer.update_screen();
    }

    /// Current cursor position
    pub fn cursor(&self) -> Cursor {
        self.ctx.cursor
    }

    /// Whether the cursor lies inside a virtual rectangle, edges included
    pub fn cursor_in_rect(&self, x: f32, y: f32, w: f32, h: f32) -> bool {
        self.ctx.cursor.in_rect(x, y, w, h)
    }

    /// Token `n` of the current console command, empty when out of range
    pub fn argv<H: Host + ?Sized>(&self, host: &H, n: usize) -> String {
        host.argv(n)
    }

    /// Current string value of a host cvar
    pub fn cvar_string<H: Host + ?Sized>(&self, host: &H, name: &str) -> String {
        host.variable_string(name)
    }

    /// Fill a virtual rectangle; `None` draws untinted white
    pub fn fill_rect<R: Renderer + ?Sized>(
        &self,
        renderer: &mut R,
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        color: Option<&Color>,
    ) {
        self.ctx.painter(renderer).fill_rect(x, y, w, h, color);
    }

    /// Outline a virtual rectangle
    pub fn draw_rect<R: Renderer + ?Sized>(
        &self,
        renderer: &mut R,
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        color: Option<&Color>,
    ) {
        self.ctx.painter(renderer).draw_rect(x, y, w, h, color);
    }

    /// Draw an image by handle; negative sizes mirror
    pub fn draw_handle_pic<R: Renderer + ?Sized>(
        &self,
        renderer: &mut R,
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        shader: ShaderHandle,
    ) {
        self.ctx.painter(renderer).draw_handle_pic(x, y, w, h, shader);
    }

    /// Draw an image by name
    pub fn draw_named_pic<R: Renderer + ?Sized>(
        &self,
        renderer: &mut R,
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        name: &str,
    ) {
        self.ctx.painter(renderer).draw_named_pic(x, y, w, h, name);
    }

    /// Black box with a white border sized in character cells
    ///
    /// The box starts half a cell in from `(x, y)` and spans
    /// `width + 1` by `lines + 1` cells.
    pub fn draw_text_box<R: Renderer + ?Sized>(
        &self,
        renderer: &mut R,
        x: f32,
        y: f32,
        width: i32,
        lines: i32,
    ) {
        let timing = self.ctx.text.timing();
        let bx = x + timing.char_width / 2.0;
        let by = y + timing.char_height / 2.0;
        let w = (width as f32 + 1.0) * timing.char_width;
        let h = (lines as f32 + 1.0) * timing.char_height;

        let mut painter = self.ctx.painter(renderer);
        painter.fill_rect(bx, by, w, h, Some(&color_black()));
        painter.draw_rect(bx, by, w, h, Some(&color_white()));
    }

    /// Paint a string with style flags using the registered font
    ///
    /// Without a font nothing is drawn.
    pub fn draw_string<H: Host + ?Sized>(
        &self,
        host: &mut H,
        x: f32,
        y: f32,
        text: &str,
        style: TextStyle,
        color: &Color,
    ) -> TextStats {
        if self.ctx.cvars.value(DEBUG_TEXT_CVAR) != 0.0 {
            host.print(&format!("draw_string: {}\n", text));
        }
        let run = TextRun::new(x, y, text).with_color(*color).with_style(style);
        self.paint_text(host, &run)
    }

    /// Paint a fully specified text run using the registered font
    pub fn paint_text<R: Renderer + ?Sized>(&self, renderer: &mut R, run: &TextRun<'_>) -> TextStats {
        let Some(font) = &self.ctx.font else {
            log::trace!("no font registered, skipping {:?}", run.text);
            return TextStats {
                end_x: run.x,
                ..TextStats::default()
            };
        };
        let mut painter = self.ctx.painter(renderer);
        self.ctx.text.paint(&mut painter, font, self.ctx.realtime(), run)
    }
}
