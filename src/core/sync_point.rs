//! Sync point model: timestamped cues that drive the code editor while a
//! lesson video plays.

use serde::{Deserialize, Serialize};

use crate::core::time::{Elapsed, Seconds};

/// How long a sync point stays active once its timestamp is reached.
pub const SYNC_WINDOW: Seconds = 30;

/// Declarative check over learner-submitted code.
///
/// Passes when the submission contains every required fragment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeCheck {
    pub required: Vec<String>,
}

impl CodeCheck {
    pub fn requiring<I, S>(fragments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            required: fragments.into_iter().map(Into::into).collect(),
        }
    }

    pub fn evaluate(&self, code: &str) -> bool {
        self.required.iter().all(|fragment| code.contains(fragment.as_str()))
    }
}

/// Presentation treatment for a sync point's code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SyncAction {
    /// Show the code in the editor as the video reaches this point.
    Reveal,
    /// Draw the learner's attention to code already on screen.
    Highlight,
    /// Present the code alongside the instructor's explanation.
    Explain,
    /// Ask the learner to work on the code; the check runs when they submit.
    Challenge {
        check: CodeCheck,
        success_message: String,
    },
}

impl SyncAction {
    pub fn is_challenge(&self) -> bool {
        matches!(self, SyncAction::Challenge { .. })
    }

    pub fn name(&self) -> &'static str {
        match self {
            SyncAction::Reveal => "reveal",
            SyncAction::Highlight => "highlight",
            SyncAction::Explain => "explain",
            SyncAction::Challenge { .. } => "challenge",
        }
    }
}

/// A timestamped cue in a lesson's sync table.
///
/// Tables are authored with ascending timestamps and windows that do not
/// overlap; neither is enforced. When windows do overlap, resolution scans
/// in table order and the earlier entry wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncPoint {
    /// Point in the lesson video at which this entry becomes active.
    pub video_timestamp: Seconds,
    /// Identifier for the code block this entry belongs to.
    pub section: String,
    /// Source text projected into the editor, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Free text shown to the learner alongside the code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    pub action: SyncAction,
}

impl SyncPoint {
    pub fn new(video_timestamp: Seconds, section: impl Into<String>, action: SyncAction) -> Self {
        Self {
            video_timestamp,
            section: section.into(),
            code: None,
            hint: None,
            action,
        }
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Check whether a playback position falls inside this entry's
    /// activation window `[video_timestamp, video_timestamp + SYNC_WINDOW)`.
    pub fn is_active_at(&self, position: Elapsed) -> bool {
        let start = f64::from(self.video_timestamp);
        position >= start && position < start + f64::from(SYNC_WINDOW)
    }
}
