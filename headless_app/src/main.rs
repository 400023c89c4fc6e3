//! Headless UI demo
//!
//! Runs a scripted minute of menu interaction against the recording host at
//! 1920x1080 and logs what the runtime asked the engine to do.

use ui_runtime::config::{ConfigError, CvarSpec, FontConfig};
use ui_runtime::foundation::logging;
use ui_runtime::foundation::math::{clamp_cvar, color_white, Color};
use ui_runtime::host::{FontInfo, GlyphInfo, ShaderHandle};
use ui_runtime::prelude::*;
use ui_runtime::ui::UiContext;

const FRAME_MS: i32 = 16;
const FRAMES: i32 = 60;

const KEY_LEFTARROW: i32 = 134;
const KEY_RIGHTARROW: i32 = 135;

const VOLUME_CVAR: &str = "s_volume";

/// Errors that end the demo
#[derive(Debug, thiserror::Error)]
enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Ui(#[from] UiError),
}

/// Minimal menu contents: a framed panel with a title and a volume control
#[derive(Debug, Default)]
struct DemoMenus {
    built: usize,
}

impl MenuScreens for DemoMenus {
    fn main_menu(&mut self, host: &mut dyn Host) {
        self.built += 1;
        host.start_background_track("music/menu_intro", "music/menu_loop");
    }

    fn in_game_menu(&mut self, _host: &mut dyn Host) {
        self.built += 1;
    }

    fn draw(&mut self, active: ActiveMenu, ctx: &UiContext, host: &mut dyn Host) {
        let title = match active {
            ActiveMenu::Main => "^3MAIN ^7MENU",
            ActiveMenu::InGame => "PAUSED",
            ActiveMenu::Inactive => return,
        };

        let mut painter = ctx.painter(host);
        painter.fill_rect(160.0, 120.0, 320.0, 240.0, Some(&Color::new(0.0, 0.0, 0.0, 0.6)));
        painter.draw_rect(160.0, 120.0, 320.0, 240.0, Some(&color_white()));

        if let Some(font) = &ctx.font {
            let run = TextRun::new(320.0, 160.0, title)
                .with_style(TextStyle::CENTER | TextStyle::DROPSHADOW | TextStyle::PULSE);
            ctx.text.paint(&mut painter, font, ctx.realtime(), &run);
        }
    }

    fn key_event(&mut self, _active: ActiveMenu, key: i32, down: bool, host: &mut dyn Host) {
        if !down {
            return;
        }
        let step = match key {
            KEY_LEFTARROW => -0.1,
            KEY_RIGHTARROW => 0.1,
            _ => return,
        };
        let volume = clamp_cvar(0.0, 1.0, host.variable_value(VOLUME_CVAR) + step);
        host.set(VOLUME_CVAR, &format!("{:.1}", volume));
    }
}

/// Scripted driver around one UI session
struct HeadlessApp {
    host: RecordingHost,
    ui: UiRuntime<DemoMenus>,
    rendered_frames: usize,
    draw_calls: usize,
    commands_handled: usize,
}

impl HeadlessApp {
    fn new(config: UiConfig) -> Result<Self, AppError> {
        let mut host = RecordingHost::new(1920, 1080);
        let glyph = GlyphInfo {
            height: 32,
            top: 24,
            bottom: 8,
            x_skip: 20,
            image_width: 16,
            image_height: 32,
            s: 0.0,
            t: 0.0,
            s2: 1.0,
            t2: 1.0,
            glyph: ShaderHandle(1000),
        };
        host.font = Some(FontInfo::uniform("demo", glyph, 0.5));

        let ui = UiRuntime::init(config, &mut host, DemoMenus::default())?;
        Ok(Self {
            host,
            ui,
            rendered_frames: 0,
            draw_calls: 0,
            commands_handled: 0,
        })
    }

    fn run(&mut self) -> Result<(), AppError> {
        for frame in 0..FRAMES {
            self.script(frame)?;

            self.host.clear_calls();
            let report = self.ui.refresh(&mut self.host, (frame + 1) * FRAME_MS);
            self.ui.update_screen(&mut self.host);

            if report.rendered {
                self.rendered_frames += 1;
            }
            if report.command.is_handled() {
                self.commands_handled += 1;
            }
            self.draw_calls += self.host.stretch_pics().len();
            log::debug!("frame {}: {:?}", frame, report);
        }

        self.ui.shutdown(&mut self.host);
        Ok(())
    }

    fn script(&mut self, frame: i32) -> Result<(), AppError> {
        match frame {
            0 => self.ui.set_active_menu(&mut self.host, MenuCommand::Main)?,
            5..=14 => self.ui.mouse_event(24, 12),
            20 | 21 => self.ui.key_event(&mut self.host, KEY_RIGHTARROW, true),
            30 => self.host.queue_command("ui_cache"),
            40 => self.ui.set_active_menu(&mut self.host, MenuCommand::InGame)?,
            45 => {
                if let Err(err) = self.ui.set_active_menu_raw(&mut self.host, 6) {
                    log::warn!("scripted request rejected: {}", err);
                }
            }
            50 => self.ui.set_active_menu(&mut self.host, MenuCommand::None)?,
            _ => {}
        }
        Ok(())
    }

    fn summary(&self) {
        let cursor = self.ui.cursor();
        log::info!(
            "{} frames, {} rendered, {} quads, {} UI commands, {} menus built",
            FRAMES,
            self.rendered_frames,
            self.draw_calls,
            self.commands_handled,
            self.ui.menus().built
        );
        log::info!(
            "cursor ended at ({:.0}, {:.0}), {} = {}",
            cursor.x,
            cursor.y,
            VOLUME_CVAR,
            self.ui.cvar_string(&self.host, VOLUME_CVAR)
        );
        for cvar in self.ui.context().cvars.iter() {
            log::debug!(
                "cvar {} = {:?} ({} changes)",
                cvar.name,
                cvar.string,
                cvar.modification_count
            );
        }
    }
}

fn load_config() -> Result<UiConfig, ConfigError> {
    let mut config = match std::env::args().nth(1) {
        Some(path) => UiConfig::load(&path)?,
        None => UiConfig::default(),
    };
    if config.font.is_none() {
        config.font = Some(FontConfig {
            name: "demo".to_string(),
            point_size: 16,
        });
    }
    if !config.cvars.iter().any(|c| c.name == VOLUME_CVAR) {
        config.cvars.push(CvarSpec::new(VOLUME_CVAR, "0.5", 0));
    }
    Ok(config)
}

fn main() -> Result<(), AppError> {
    let config = load_config()?;
    logging::init_with_level(&config.log_level);

    log::info!("Starting headless UI session");
    let mut app = HeadlessApp::new(config)?;
    app.run()?;
    app.summary();
    Ok(())
}
