//! Lesson session state.

/// Which surface the learner is focused on.
///
/// Toggled by explicit user action only; there are no transition guards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    #[default]
    VideoFocus,
    CodeFocus,
}

impl DisplayMode {
    pub fn is_video(self) -> bool {
        matches!(self, DisplayMode::VideoFocus)
    }

    pub fn is_code(self) -> bool {
        matches!(self, DisplayMode::CodeFocus)
    }
}

/// Mutable per-session state: what is selected and where playback is.
///
/// Passed explicitly to whoever needs it; there is no ambient global.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    pub track_id: Option<String>,
    pub video_id: Option<String>,
    /// Last progress reported by the player, 0-100.
    pub progress: f64,
    pub mode: DisplayMode,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_selection(&self) -> bool {
        self.track_id.is_some() && self.video_id.is_some()
    }
}
