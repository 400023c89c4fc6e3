//! Menu activation state machine
//!
//! The runtime tracks which top-level menu is up and owns the side effects
//! of entering and leaving it. Menu contents (widgets, layout, key handling)
//! belong to a [`MenuScreens`] collaborator supplied by the embedder.

use super::context::UiContext;
use super::error::UiError;
use super::PAUSED_CVAR;
use crate::host::{Host, KeyCatcher};

/// Menu request as sent by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuCommand {
    /// Close every menu
    None,
    /// Main menu
    Main,
    /// In-game menu; pauses the game
    InGame,
    /// Legacy licensing prompt, always fatal
    NeedCdKey,
    /// Legacy licensing prompt, always fatal
    BadCdKey,
    /// Legacy team menu, not implemented
    Team,
    /// Legacy post-game menu, not implemented
    PostGame,
}

impl TryFrom<i32> for MenuCommand {
    type Error = UiError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(MenuCommand::None),
            1 => Ok(MenuCommand::Main),
            2 => Ok(MenuCommand::InGame),
            3 => Ok(MenuCommand::NeedCdKey),
            4 => Ok(MenuCommand::BadCdKey),
            5 => Ok(MenuCommand::Team),
            6 => Ok(MenuCommand::PostGame),
            other => Err(UiError::UnknownMenu(other)),
        }
    }
}

/// Menu currently shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ActiveMenu {
    /// No menu; gameplay owns the screen
    #[default]
    Inactive,
    /// Main menu
    Main,
    /// In-game menu
    InGame,
}

/// Menu contents provided by the embedder
///
/// Every method has a no-op default so embedders only implement the screens
/// they have.
pub trait MenuScreens {
    /// Build the main menu
    fn main_menu(&mut self, _host: &mut dyn Host) {}

    /// Build the in-game menu
    fn in_game_menu(&mut self, _host: &mut dyn Host) {}

    /// Paint the active menu's content over the background
    fn draw(&mut self, _active: ActiveMenu, _ctx: &UiContext, _host: &mut dyn Host) {}

    /// Handle a key event while a menu is active
    fn key_event(&mut self, _active: ActiveMenu, _key: i32, _down: bool, _host: &mut dyn Host) {}

    /// Paint the connection progress screen
    fn draw_connect_screen(&mut self, _overlay: bool, _ctx: &UiContext, _host: &mut dyn Host) {}
}

/// Embedder with no menu contents
#[derive(Debug, Clone, Copy, Default)]
pub struct NullMenus;

impl MenuScreens for NullMenus {}

/// Active-menu tracker
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    active: ActiveMenu,
}

impl MenuState {
    /// Start with no menu up
    pub fn new() -> Self {
        Self::default()
    }

    /// Menu currently up
    pub fn active(&self) -> ActiveMenu {
        self.active
    }

    /// Whether any menu is up
    pub fn is_active(&self) -> bool {
        self.active != ActiveMenu::Inactive
    }

    /// Close every menu and hand input back to the game
    ///
    /// Stops the background track, drops the UI input catcher bit, clears
    /// latched keys and unpauses. Safe to call any number of times.
    pub fn force_off<H: Host + ?Sized>(&mut self, host: &mut H) {
        self.active = ActiveMenu::Inactive;

        host.stop_background_track();
        let catcher = host.catcher();
        host.set_catcher(catcher - KeyCatcher::UI);
        host.clear_key_states();
        host.set(PAUSED_CVAR, "0");
    }

    /// Switch to the menu requested by the host
    ///
    /// Licensing prompts report through `Diagnostics::error` and return
    /// [`UiError::Fatal`]. Unimplemented legacy menus leave the state alone
    /// and return [`UiError::UnsupportedMenu`].
    pub fn activate<H: Host, M: MenuScreens + ?Sized>(
        &mut self,
        command: MenuCommand,
        host: &mut H,
        menus: &mut M,
    ) -> Result<(), UiError> {
        log::debug!("set active menu {:?} (was {:?})", command, self.active);

        match command {
            MenuCommand::None => {
                self.force_off(host);
                Ok(())
            }
            MenuCommand::Main => {
                menus.main_menu(host);
                self.enter(ActiveMenu::Main, host);
                Ok(())
            }
            MenuCommand::InGame => {
                host.set(PAUSED_CVAR, "1");
                menus.in_game_menu(host);
                self.enter(ActiveMenu::InGame, host);
                Ok(())
            }
            MenuCommand::NeedCdKey | MenuCommand::BadCdKey => {
                let message = if command == MenuCommand::NeedCdKey {
                    "Need CD Key menu called."
                } else {
                    "Bad CD Key menu called."
                };
                log::error!("{}", message);
                host.error(message);
                Err(UiError::Fatal(message.to_string()))
            }
            MenuCommand::Team | MenuCommand::PostGame => {
                log::warn!("set_active_menu: unsupported menu {:?}", command);
                if cfg!(debug_assertions) {
                    host.print(&format!("set_active_menu: bad enum {:?}\n", command));
                }
                Err(UiError::UnsupportedMenu(command))
            }
        }
    }

    fn enter<H: Host + ?Sized>(&mut self, menu: ActiveMenu, host: &mut H) {
        self.active = menu;
        let catcher = host.catcher();
        host.set_catcher(catcher | KeyCatcher::UI);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::recording::{HostCall, RecordingHost};
    use crate::host::CvarStore;

    #[derive(Default)]
    struct CountingMenus {
        main: usize,
        in_game: usize,
    }

    impl MenuScreens for CountingMenus {
        fn main_menu(&mut self, _host: &mut dyn Host) {
            self.main += 1;
        }

        fn in_game_menu(&mut self, host: &mut dyn Host) {
            // pause is already visible to the menu builder
            assert_eq!(host.variable_string(PAUSED_CVAR), "1");
            self.in_game += 1;
        }
    }

    #[test]
    fn test_initial_state_is_inactive() {
        let state = MenuState::new();
        assert_eq!(state.active(), ActiveMenu::Inactive);
        assert!(!state.is_active());
    }

    #[test]
    fn test_raw_identifiers() {
        assert_eq!(MenuCommand::try_from(1), Ok(MenuCommand::Main));
        assert_eq!(MenuCommand::try_from(6), Ok(MenuCommand::PostGame));
        assert_eq!(MenuCommand::try_from(7), Err(UiError::UnknownMenu(7)));
        assert_eq!(MenuCommand::try_from(-1), Err(UiError::UnknownMenu(-1)));
    }

    #[test]
    fn test_main_menu_builds_and_grabs_input() {
        let mut host = RecordingHost::default();
        let mut menus = CountingMenus::default();
        let mut state = MenuState::new();

        state.activate(MenuCommand::Main, &mut host, &mut menus).unwrap();

        assert_eq!(state.active(), ActiveMenu::Main);
        assert_eq!(menus.main, 1);
        assert!(host.catcher.contains(KeyCatcher::UI));
    }

    #[test]
    fn test_in_game_menu_pauses_first() {
        let mut host = RecordingHost::default();
        let mut menus = CountingMenus::default();
        let mut state = MenuState::new();

        state.activate(MenuCommand::InGame, &mut host, &mut menus).unwrap();

        assert_eq!(state.active(), ActiveMenu::InGame);
        assert_eq!(menus.in_game, 1);
        assert_eq!(host.variable_string(PAUSED_CVAR), "1");
    }

    #[test]
    fn test_force_off_side_effects() {
        let mut host = RecordingHost::default();
        host.catcher = KeyCatcher::UI | KeyCatcher::CONSOLE;
        host.keys_down = vec![13, 27];
        let mut state = MenuState::new();
        state.activate(MenuCommand::InGame, &mut host, &mut NullMenus).unwrap();
        host.clear_calls();

        state.activate(MenuCommand::None, &mut host, &mut NullMenus).unwrap();

        assert_eq!(state.active(), ActiveMenu::Inactive);
        assert_eq!(host.catcher, KeyCatcher::CONSOLE);
        assert!(host.keys_down.is_empty());
        assert_eq!(host.variable_string(PAUSED_CVAR), "0");
        assert_eq!(
            host.calls,
            vec![
                HostCall::StopBackgroundTrack,
                HostCall::SetCatcher(KeyCatcher::CONSOLE),
                HostCall::ClearKeyStates,
                HostCall::SetCvar(PAUSED_CVAR.to_string(), "0".to_string()),
            ]
        );
    }

    #[test]
    fn test_force_off_is_idempotent() {
        let mut once = RecordingHost::default();
        once.catcher = KeyCatcher::UI;
        let mut twice = once.clone();

        let mut a = MenuState::new();
        a.activate(MenuCommand::None, &mut once, &mut NullMenus).unwrap();

        let mut b = MenuState::new();
        b.activate(MenuCommand::None, &mut twice, &mut NullMenus).unwrap();
        let first_pass = twice.calls.clone();
        b.activate(MenuCommand::None, &mut twice, &mut NullMenus).unwrap();

        assert_eq!(a, b);
        assert_eq!(once.catcher, twice.catcher);
        assert_eq!(once.cvars, twice.cvars);
        assert_eq!(&twice.calls[first_pass.len()..], first_pass.as_slice());
    }

    #[test]
    fn test_licensing_menus_are_fatal() {
        for command in [MenuCommand::NeedCdKey, MenuCommand::BadCdKey] {
            let mut host = RecordingHost::default();
            let mut state = MenuState::new();

            let err = state.activate(command, &mut host, &mut NullMenus).unwrap_err();

            assert!(err.is_fatal());
            assert_eq!(state.active(), ActiveMenu::Inactive);
            assert!(matches!(host.calls.last(), Some(HostCall::Error(_))));
        }
    }

    #[test]
    fn test_legacy_menus_leave_state_alone() {
        let mut host = RecordingHost::default();
        let mut state = MenuState::new();
        state.activate(MenuCommand::Main, &mut host, &mut NullMenus).unwrap();

        for command in [MenuCommand::Team, MenuCommand::PostGame] {
            let err = state.activate(command, &mut host, &mut NullMenus).unwrap_err();
            assert_eq!(err, UiError::UnsupportedMenu(command));
            assert!(!err.is_fatal());
            assert_eq!(state.active(), ActiveMenu::Main);
        }
        if cfg!(debug_assertions) {
            assert_eq!(host.prints().len(), 2);
        }
    }
}
