//! Cross-module tests for the UI runtime
//!
//! These drive [`UiRuntime`](super::UiRuntime) against the recording host and
//! assert on the exact sequence of host calls.

mod frame_protocol;

use crate::config::UiConfig;
use crate::host::recording::RecordingHost;
use crate::host::{Diagnostics, Host};

use super::context::UiContext;
use super::menu::{ActiveMenu, MenuScreens};
use super::runtime::UiRuntime;

/// Marker printed by [`ScriptedMenus::draw`] so tests can locate it in the call log
pub(crate) const MENU_DRAW_MARKER: &str = "<menu draw>";

/// Menu contents that log what the runtime asked of them
#[derive(Debug, Default)]
pub(crate) struct ScriptedMenus {
    pub events: Vec<String>,
    /// `(realtime, debug cvar value)` seen by each draw
    pub draws: Vec<(i32, f32)>,
}

impl MenuScreens for ScriptedMenus {
    fn main_menu(&mut self, _host: &mut dyn Host) {
        self.events.push("build main".to_string());
    }

    fn in_game_menu(&mut self, _host: &mut dyn Host) {
        self.events.push("build in-game".to_string());
    }

    fn draw(&mut self, active: ActiveMenu, ctx: &UiContext, host: &mut dyn Host) {
        self.draws.push((ctx.realtime(), ctx.cvars.value(super::DEBUG_TEXT_CVAR)));
        self.events.push(format!("draw {:?}", active));
        host.print(MENU_DRAW_MARKER);
    }

    fn key_event(&mut self, active: ActiveMenu, key: i32, down: bool, _host: &mut dyn Host) {
        self.events.push(format!("key {:?} {} {}", active, key, down));
    }

    fn draw_connect_screen(&mut self, overlay: bool, _ctx: &UiContext, _host: &mut dyn Host) {
        self.events.push(format!("connect {}", overlay));
    }
}

/// Runtime with scripted menus on a recording host of the given size
pub(crate) fn runtime_at(width: u32, height: u32) -> (UiRuntime<ScriptedMenus>, RecordingHost) {
    let mut host = RecordingHost::new(width, height);
    let runtime = UiRuntime::init(UiConfig::default(), &mut host, ScriptedMenus::default())
        .expect("default config initializes");
    host.clear_calls();
    (runtime, host)
}
