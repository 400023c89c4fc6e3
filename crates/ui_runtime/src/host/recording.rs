//! Recording host
//!
//! An in-memory [`Host`](super::Host) that answers queries from plain fields
//! and appends every side-effecting call to a log. Used by the test suite and
//! by the headless driver to observe what the runtime asks of an engine.

use std::collections::HashMap;

use super::{
    Audio, CommandLine, CvarFlags, CvarStore, Diagnostics, DisplayConfig, FontInfo, Input,
    KeyCatcher, Renderer, ShaderHandle, SoundHandle, StretchPic,
};
use crate::foundation::math::Color;

/// One side-effecting host call
#[derive(Debug, Clone, PartialEq)]
pub enum HostCall {
    /// `Renderer::set_color`
    SetColor(Option<Color>),
    /// `Renderer::draw_stretch_pic`
    DrawStretchPic(StretchPic),
    /// `Renderer::update_screen`
    UpdateScreen,
    /// `Audio::start_local_sound`
    StartLocalSound(SoundHandle),
    /// `Audio::start_background_track`
    StartBackgroundTrack(String),
    /// `Audio::stop_background_track`
    StopBackgroundTrack,
    /// `Input::set_catcher`
    SetCatcher(KeyCatcher),
    /// `Input::clear_key_states`
    ClearKeyStates,
    /// `CvarStore::register`
    RegisterCvar(String),
    /// `CvarStore::set`
    SetCvar(String, String),
    /// `Diagnostics::print`
    Print(String),
    /// `Diagnostics::error`
    Error(String),
}

/// In-memory host that records what the runtime does
#[derive(Debug, Clone)]
pub struct RecordingHost {
    /// Reported display resolution
    pub display: DisplayConfig,
    /// Current key catcher
    pub catcher: KeyCatcher,
    /// Keys reported as held
    pub keys_down: Vec<i32>,
    /// Cvar values
    pub cvars: HashMap<String, String>,
    /// Tokens of the pending console command
    pub args: Vec<String>,
    /// Font handed out by `register_font`
    pub font: Option<FontInfo>,
    /// Registered image names, in registration order; handle = index + 1
    pub shaders: Vec<String>,
    /// Every side-effecting call, in order
    pub calls: Vec<HostCall>,
}

impl RecordingHost {
    /// Create a host reporting the given resolution
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            display: DisplayConfig { width, height },
            catcher: KeyCatcher::empty(),
            keys_down: Vec::new(),
            cvars: HashMap::new(),
            args: Vec::new(),
            font: None,
            shaders: Vec::new(),
            calls: Vec::new(),
        }
    }

    /// Handle that was assigned to an image name, if registered
    pub fn shader(&self, name: &str) -> Option<ShaderHandle> {
        self.shaders
            .iter()
            .position(|s| s == name)
            .and_then(|i| i32::try_from(i + 1).ok())
            .map(ShaderHandle)
    }

    /// Queue a console command for the next dispatch
    pub fn queue_command(&mut self, line: &str) {
        self.args = line.split_whitespace().map(str::to_string).collect();
    }

    /// All recorded quads
    pub fn stretch_pics(&self) -> Vec<StretchPic> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                HostCall::DrawStretchPic(pic) => Some(*pic),
                _ => None,
            })
            .collect()
    }

    /// All recorded diagnostics prints
    pub fn prints(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                HostCall::Print(message) => Some(message.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Forget every recorded call
    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }
}

impl Default for RecordingHost {
    fn default() -> Self {
        Self::new(640, 480)
    }
}

impl Renderer for RecordingHost {
    fn register_shader_no_mip(&mut self, name: &str) -> ShaderHandle {
        if let Some(handle) = self.shader(name) {
            return handle;
        }
        self.shaders.push(name.to_string());
        ShaderHandle(i32::try_from(self.shaders.len()).unwrap_or(0))
    }

    fn register_font(&mut self, _name: &str, _point_size: u32) -> Option<FontInfo> {
        self.font.clone()
    }

    fn set_color(&mut self, color: Option<&Color>) {
        self.calls.push(HostCall::SetColor(color.copied()));
    }

    fn draw_stretch_pic(&mut self, pic: StretchPic) {
        self.calls.push(HostCall::DrawStretchPic(pic));
    }

    fn update_screen(&mut self) {
        self.calls.push(HostCall::UpdateScreen);
    }

    fn display_config(&self) -> DisplayConfig {
        self.display
    }
}

impl Audio for RecordingHost {
    fn register_sound(&mut self, name: &str, _compressed: bool) -> SoundHandle {
        SoundHandle(i32::try_from(name.len()).unwrap_or(0))
    }

    fn start_local_sound(&mut self, sound: SoundHandle, _channel: i32) {
        self.calls.push(HostCall::StartLocalSound(sound));
    }

    fn start_background_track(&mut self, intro: &str, _looped: &str) {
        self.calls.push(HostCall::StartBackgroundTrack(intro.to_string()));
    }

    fn stop_background_track(&mut self) {
        self.calls.push(HostCall::StopBackgroundTrack);
    }
}

impl Input for RecordingHost {
    fn catcher(&self) -> KeyCatcher {
        self.catcher
    }

    fn set_catcher(&mut self, catcher: KeyCatcher) {
        self.catcher = catcher;
        self.calls.push(HostCall::SetCatcher(catcher));
    }

    fn clear_key_states(&mut self) {
        self.keys_down.clear();
        self.calls.push(HostCall::ClearKeyStates);
    }

    fn is_key_down(&self, key: i32) -> bool {
        self.keys_down.contains(&key)
    }
}

impl CvarStore for RecordingHost {
    fn register(&mut self, name: &str, default: &str, _flags: CvarFlags) -> String {
        self.calls.push(HostCall::RegisterCvar(name.to_string()));
        self.cvars
            .entry(name.to_string())
            .or_insert_with(|| default.to_string())
            .clone()
    }

    fn variable_string(&self, name: &str) -> String {
        self.cvars.get(name).cloned().unwrap_or_default()
    }

    fn set(&mut self, name: &str, value: &str) {
        self.cvars.insert(name.to_string(), value.to_string());
        self.calls.push(HostCall::SetCvar(name.to_string(), value.to_string()));
    }
}

impl Diagnostics for RecordingHost {
    fn print(&mut self, message: &str) {
        self.calls.push(HostCall::Print(message.to_string()));
    }

    fn error(&mut self, message: &str) {
        self.calls.push(HostCall::Error(message.to_string()));
    }
}

impl CommandLine for RecordingHost {
    fn argc(&self) -> usize {
        self.args.len()
    }

    fn argv(&self, n: usize) -> String {
        self.args.get(n).cloned().unwrap_or_default()
    }

    fn consume_command(&mut self) {
        self.args.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shader_handles_are_stable() {
        let mut host = RecordingHost::default();
        let a = host.register_shader_no_mip("a");
        let b = host.register_shader_no_mip("b");
        assert_ne!(a, b);
        assert_eq!(host.register_shader_no_mip("a"), a);
        assert_eq!(host.shader("b"), Some(b));
        assert_eq!(host.shader("missing"), None);
    }

    #[test]
    fn test_cvar_register_keeps_existing_value() {
        let mut host = RecordingHost::default();
        host.cvars.insert("sensitivity".to_string(), "5".to_string());
        assert_eq!(host.register("sensitivity", "3", CvarFlags::ARCHIVE), "5");
        assert_eq!(host.register("fresh", "1", CvarFlags::empty()), "1");
        assert_eq!(host.variable_value("fresh"), 1.0);
        assert_eq!(host.variable_value("missing"), 0.0);
    }

    #[test]
    fn test_queue_command_tokenizes() {
        let mut host = RecordingHost::default();
        host.queue_command("ui_cache  now");
        assert_eq!(host.argc(), 2);
        assert_eq!(host.argv(0), "ui_cache");
        assert_eq!(host.argv(5), "");
    }

    #[test]
    fn test_consume_command_clears_pending() {
        let mut host = RecordingHost::default();
        host.queue_command("ui_cache");
        host.consume_command();
        assert_eq!(host.argc(), 0);
        assert!(host.calls.is_empty());
    }
}
