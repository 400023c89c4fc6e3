//! Time management utilities

/// Host-driven frame clock
///
/// The host owns the real clock and hands the UI a millisecond timestamp on
/// every entry point. Any entry point may [`sync`](Self::sync) the current
/// time, but only a frame [`advance`](Self::advance) measures the delta and
/// counts a frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameClock {
    realtime: i32,
    last_frame: i32,
    frametime: i32,
    frame_count: u64,
}

impl FrameClock {
    /// Create a clock starting at time zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `now` (milliseconds) as the current time without starting a frame
    pub fn sync(&mut self, now: i32) {
        self.realtime = now;
    }

    /// Start a frame at `now` (milliseconds), returning the time since the
    /// previous frame
    ///
    /// Timestamps are expected to be monotonic. A timestamp that goes
    /// backwards produces a negative delta rather than being rejected, which
    /// matches what the host reports after a clock reset.
    pub fn advance(&mut self, now: i32) -> i32 {
        self.frametime = now.wrapping_sub(self.last_frame);
        self.last_frame = now;
        self.realtime = now;
        self.frame_count += 1;
        self.frametime
    }

    /// Most recent timestamp in milliseconds
    pub fn realtime(&self) -> i32 {
        self.realtime
    }

    /// Milliseconds between the last two frames
    pub fn frametime(&self) -> i32 {
        self.frametime
    }

    /// Number of frames since creation
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_tracks_delta() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.advance(100), 100);
        assert_eq!(clock.advance(116), 16);
        assert_eq!(clock.realtime(), 116);
        assert_eq!(clock.frametime(), 16);
        assert_eq!(clock.frame_count(), 2);
    }

    #[test]
    fn test_sync_does_not_start_a_frame() {
        let mut clock = FrameClock::new();
        clock.advance(100);
        clock.sync(110);
        assert_eq!(clock.realtime(), 110);
        assert_eq!(clock.frame_count(), 1);
        assert_eq!(clock.frametime(), 100);

        // the next frame still measures from the previous frame
        assert_eq!(clock.advance(116), 16);
        assert_eq!(clock.frame_count(), 2);
    }
}
