//! Per-frame protocol tests
//!
//! Timing, command intake, cvar sync and the conditional render pass

use approx::assert_relative_eq;

use crate::host::recording::HostCall;
use crate::host::{CommandLine, KeyCatcher, ShaderHandle};
use crate::ui::frame::{CommandOutcome, UiCommand};
use crate::ui::menu::{ActiveMenu, MenuCommand};
use crate::ui::DEBUG_TEXT_CVAR;

use super::{runtime_at, MENU_DRAW_MARKER};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_1080p_main_menu_frame() {
        let (mut ui, mut host) = runtime_at(1920, 1080);
        let transform = ui.context().transform;
        assert_relative_eq!(transform.bias, 240.0, epsilon = 1e-3);
        assert_relative_eq!(transform.xscale, 2.25, epsilon = 1e-5);
        assert_relative_eq!(transform.yscale, 2.25, epsilon = 1e-5);

        ui.set_active_menu(&mut host, MenuCommand::Main).unwrap();
        host.clear_calls();
        let report = ui.refresh(&mut host, 16);

        assert!(report.rendered);
        let pics = host.stretch_pics();
        assert_eq!(pics.len(), 3);

        let assets = ui.context().assets;
        let expected: [(ShaderHandle, f32, f32, f32, f32); 3] = [
            (assets.background_a, 240.0, 0.0, 1152.0, 1152.0),
            (assets.background_b, 1104.0, 0.0, 576.0, 1152.0),
            (assets.cursor, 204.0, -36.0, 72.0, 72.0),
        ];
        for (pic, (shader, x, y, w, h)) in pics.iter().zip(expected) {
            assert_eq!(pic.shader, shader);
            assert_relative_eq!(pic.x, x, epsilon = 1e-2);
            assert_relative_eq!(pic.y, y, epsilon = 1e-2);
            assert_relative_eq!(pic.w, w, epsilon = 1e-2);
            assert_relative_eq!(pic.h, h, epsilon = 1e-2);
        }
    }

    #[test]
    fn test_render_order_puts_cursor_last() {
        let (mut ui, mut host) = runtime_at(640, 480);
        ui.set_active_menu(&mut host, MenuCommand::InGame).unwrap();
        host.clear_calls();

        ui.refresh(&mut host, 100);

        let marker = host
            .calls
            .iter()
            .position(|c| *c == HostCall::Print(MENU_DRAW_MARKER.to_string()))
            .expect("menu draw ran");
        let draws: Vec<usize> = host
            .calls
            .iter()
            .enumerate()
            .filter(|(_, c)| matches!(c, HostCall::DrawStretchPic(_)))
            .map(|(i, _)| i)
            .collect();

        assert_eq!(draws.len(), 3);
        assert!(draws[0] < marker && draws[1] < marker);
        assert!(draws[2] > marker);
        assert_eq!(host.calls[draws[2] - 1], HostCall::SetColor(None));
        assert_eq!(host.stretch_pics()[2].shader, ui.context().assets.cursor);
        assert_eq!(ui.menus().events.last().map(String::as_str), Some("draw InGame"));
    }

    #[test]
    fn test_no_render_without_catcher() {
        let (mut ui, mut host) = runtime_at(640, 480);
        ui.set_active_menu(&mut host, MenuCommand::Main).unwrap();

        // console steals focus while the menu stays active
        host.catcher = KeyCatcher::CONSOLE;
        host.clear_calls();
        let report = ui.refresh(&mut host, 16);

        assert_eq!(ui.active_menu(), ActiveMenu::Main);
        assert!(!report.rendered);
        assert!(host.calls.is_empty());
        assert!(ui.menus().draws.is_empty());
    }

    #[test]
    fn test_catcher_without_menu_draws_cursor_only() {
        let (mut ui, mut host) = runtime_at(640, 480);
        host.catcher = KeyCatcher::UI;

        let report = ui.refresh(&mut host, 16);

        assert!(report.rendered);
        let pics = host.stretch_pics();
        assert_eq!(pics.len(), 1);
        assert_eq!(pics[0].shader, ui.context().assets.cursor);
        assert!(ui.menus().draws.is_empty());
    }

    #[test]
    fn test_timing_and_cvar_sync_precede_render() {
        let (mut ui, mut host) = runtime_at(640, 480);
        ui.set_active_menu(&mut host, MenuCommand::Main).unwrap();

        assert_eq!(ui.refresh(&mut host, 1000).delta, 1000);

        host.cvars.insert(DEBUG_TEXT_CVAR.to_string(), "1".to_string());
        let report = ui.refresh(&mut host, 1016);

        assert_eq!(report.delta, 16);
        assert_eq!(report.cvars_changed, 1);
        assert_eq!(ui.menus().draws, vec![(1000, 0.0), (1016, 1.0)]);
        assert_eq!(ui.context().clock.frame_count(), 2);
    }

    #[test]
    fn test_frame_drains_pending_command() {
        let (mut ui, mut host) = runtime_at(640, 480);

        host.queue_command("UI_CACHE");
        let report = ui.refresh(&mut host, 5);
        assert_eq!(report.command, CommandOutcome::Handled(UiCommand::Cache));
        assert!(!report.rendered);

        host.queue_command("connect localhost");
        assert_eq!(ui.refresh(&mut host, 10).command, CommandOutcome::Unhandled);

        host.args.clear();
        assert_eq!(ui.refresh(&mut host, 15).command, CommandOutcome::Idle);
    }

    #[test]
    fn test_console_command_entry_point() {
        let (mut ui, mut host) = runtime_at(640, 480);

        host.queue_command("ui_cache");
        assert!(ui.console_command(&mut host, 40));
        assert_eq!(ui.context().realtime(), 40);

        host.queue_command("quit");
        assert!(!ui.console_command(&mut host, 50));
        assert_eq!(ui.context().realtime(), 50);
        assert_eq!(ui.context().clock.frame_count(), 0);
    }

    #[test]
    fn test_console_command_then_frames_handles_once() {
        let (mut ui, mut host) = runtime_at(640, 480);

        host.queue_command("ui_cache");
        assert!(ui.console_command(&mut host, 16));
        assert_eq!(host.argc(), 0);

        let report = ui.refresh(&mut host, 16);
        assert_eq!(report.command, CommandOutcome::Idle);
        assert_eq!(report.delta, 16);

        let report = ui.refresh(&mut host, 32);
        assert_eq!(report.command, CommandOutcome::Idle);
        assert_eq!(report.delta, 16);
        assert_eq!(ui.context().clock.frame_count(), 2);
    }
}
