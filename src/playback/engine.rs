//! Lesson session engine coordinating player progress, sync resolution,
//! and the projected editor state.
//!
//! The engine is synchronous: every command is processed on the caller's
//! thread and observable outcomes are returned as events. The video player
//! and any UI live outside and talk to it through [`LessonCommand`].

use tracing::{debug, info};

use crate::core::lesson::LessonVideo;
use crate::core::sync_point::SyncAction;
use crate::core::time::Seconds;
use crate::editor::language::language_for;
use crate::editor::stage::{ChallengeOutcome, EditorStage};
use crate::library::{starter_code, LessonLibrary};
use crate::playback::progress::{elapsed_seconds, progress_at};
use crate::playback::state::{DisplayMode, SessionState};
use crate::playback::sync::resolve_sync_point;

/// Command sent to the lesson engine.
#[derive(Debug, Clone)]
pub enum LessonCommand {
    SelectTrack(String),
    SelectVideo(String),
    /// Player progress report, 0-100.
    ReportProgress(f64),
    /// Jump to an absolute position, in seconds.
    Seek(Seconds),
    /// Jump to a chapter of the current video by index.
    JumpToChapter(usize),
    SetDisplayMode(DisplayMode),
    /// Learner submission, checked against the staged challenge.
    SubmitCode(String),
}

/// Observable outcome of processing a command.
#[derive(Debug, Clone, PartialEq)]
pub enum LessonEvent {
    TrackSelected(String),
    VideoSelected(String),
    /// A sync point's code was projected into the editor.
    CodeProjected {
        section: String,
        hint: Option<String>,
    },
    /// The projected sync point asks the learner to work on the code.
    ChallengeActivated { section: String },
    Seeked(Seconds),
    DisplayModeChanged(DisplayMode),
    ChallengePassed { message: String },
    ChallengeFailed,
}

/// Error type for engine commands.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("unknown track: {0}")]
    UnknownTrack(String),
    #[error("unknown video in current track: {0}")]
    UnknownVideo(String),
    #[error("no track selected")]
    NoTrackSelected,
    #[error("no video selected")]
    NoVideoSelected,
    #[error("current video has no chapter {0}")]
    UnknownChapter(usize),
    #[error("no challenge is staged")]
    NoChallengeStaged,
}

/// Lesson session engine.
///
/// Owns the session state and the editor stage; reads the catalog. All
/// state is local to the session and updated synchronously.
pub struct LessonEngine {
    library: LessonLibrary,
    session: SessionState,
    stage: EditorStage,
}

impl LessonEngine {
    pub fn new(library: LessonLibrary) -> Self {
        let stage = EditorStage::new(language_for(None, &[]));
        Self {
            library,
            session: SessionState::new(),
            stage,
        }
    }

    /// Process a command against the session.
    pub fn process_command(&mut self, command: LessonCommand) -> Result<Vec<LessonEvent>, EngineError> {
        match command {
            LessonCommand::SelectTrack(track_id) => self.handle_select_track(track_id),
            LessonCommand::SelectVideo(video_id) => self.handle_select_video(video_id),
            LessonCommand::ReportProgress(progress) => Ok(self.handle_progress(progress)),
            LessonCommand::Seek(position) => self.handle_seek(position),
            LessonCommand::JumpToChapter(index) => self.handle_chapter_jump(index),
            LessonCommand::SetDisplayMode(mode) => Ok(self.handle_display_mode(mode)),
            LessonCommand::SubmitCode(code) => self.handle_submission(code),
        }
    }

    pub fn library(&self) -> &LessonLibrary {
        &self.library
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn stage(&self) -> &EditorStage {
        &self.stage
    }

    /// The currently selected video, if any.
    pub fn current_video(&self) -> Option<&LessonVideo> {
        let track_id = self.session.track_id.as_deref()?;
        let video_id = self.session.video_id.as_deref()?;
        self.library.video(track_id, video_id)
    }

    fn handle_select_track(&mut self, track_id: String) -> Result<Vec<LessonEvent>, EngineError> {
        if self.library.track(&track_id).is_none() {
            return Err(EngineError::UnknownTrack(track_id));
        }

        self.session.video_id = None;
        self.session.progress = 0.0;
        self.stage.clear(language_for(Some(track_id.as_str()), &[]));
        info!(track = %track_id, "track selected");

        self.session.track_id = Some(track_id.clone());
        Ok(vec![LessonEvent::TrackSelected(track_id)])
    }

    fn handle_select_video(&mut self, video_id: String) -> Result<Vec<LessonEvent>, EngineError> {
        let track_id = self
            .session
            .track_id
            .clone()
            .ok_or(EngineError::NoTrackSelected)?;
        let track = self
            .library
            .track(&track_id)
            .ok_or_else(|| EngineError::UnknownTrack(track_id.clone()))?;
        let video = track
            .video(&video_id)
            .ok_or_else(|| EngineError::UnknownVideo(video_id.clone()))?;

        let language = language_for(Some(track_id.as_str()), &video.technologies);
        let starter = starter_code(&track_id, video);
        self.stage.reset(starter, language);
        self.session.video_id = Some(video_id.clone());
        self.session.progress = 0.0;
        info!(video = %video_id, %language, "video selected");

        Ok(vec![LessonEvent::VideoSelected(video_id)])
    }

    /// Progress report from the player: map to lesson time, resolve the
    /// active sync point, and project it into the editor.
    ///
    /// A session with no video selected absorbs reports silently, matching
    /// a player that is still mounting.
    fn handle_progress(&mut self, progress: f64) -> Vec<LessonEvent> {
        self.session.progress = progress;

        let video = match (self.session.track_id.as_deref(), self.session.video_id.as_deref()) {
            (Some(track_id), Some(video_id)) => self.library.video(track_id, video_id),
            _ => None,
        };
        let video = match video {
            Some(video) => video,
            None => return Vec::new(),
        };

        let position = elapsed_seconds(progress, video.duration_secs());
        let point = match resolve_sync_point(position, &video.sync_points) {
            Some(point) => point,
            None => return Vec::new(),
        };

        if !self.stage.project(point) {
            return Vec::new();
        }

        if let Some(hint) = &point.hint {
            debug!(section = %point.section, hint = %hint, "hint available");
        }

        let mut events = vec![LessonEvent::CodeProjected {
            section: point.section.clone(),
            hint: point.hint.clone(),
        }];
        match &point.action {
            SyncAction::Challenge { .. } => {
                info!(section = %point.section, "challenge activated");
                events.push(LessonEvent::ChallengeActivated {
                    section: point.section.clone(),
                });
            }
            SyncAction::Explain => {
                debug!(section = %point.section, "explanation available");
            }
            SyncAction::Reveal | SyncAction::Highlight => {}
        }
        events
    }

    /// Move the playback position. The player performs the actual jump and
    /// keeps reporting progress from the new position; sync points resolve
    /// on those reports.
    fn handle_seek(&mut self, position: Seconds) -> Result<Vec<LessonEvent>, EngineError> {
        let duration = self.selected_video()?.duration_secs();
        // Clamp to lesson bounds
        let target = position.min(duration);
        self.session.progress = progress_at(target, duration);
        debug!(seconds = target, "seek");

        Ok(vec![LessonEvent::Seeked(target)])
    }

    fn handle_chapter_jump(&mut self, index: usize) -> Result<Vec<LessonEvent>, EngineError> {
        let chapter = self
            .selected_video()?
            .chapter(index)
            .ok_or(EngineError::UnknownChapter(index))?;
        let timestamp = chapter.timestamp;
        debug!(chapter = index, seconds = timestamp, "jumping to chapter");

        self.handle_seek(timestamp)
    }

    fn handle_display_mode(&mut self, mode: DisplayMode) -> Vec<LessonEvent> {
        if self.session.mode == mode {
            return Vec::new();
        }
        self.session.mode = mode;
        vec![LessonEvent::DisplayModeChanged(mode)]
    }

    /// Store the learner's submission and run the staged challenge check.
    fn handle_submission(&mut self, code: String) -> Result<Vec<LessonEvent>, EngineError> {
        self.stage.set_code(code);
        match self.stage.check_submission() {
            Some(ChallengeOutcome::Passed { message }) => {
                info!("challenge passed");
                Ok(vec![LessonEvent::ChallengePassed { message }])
            }
            Some(ChallengeOutcome::Failed) => Ok(vec![LessonEvent::ChallengeFailed]),
            None => Err(EngineError::NoChallengeStaged),
        }
    }

    fn selected_video(&self) -> Result<&LessonVideo, EngineError> {
        let track_id = self
            .session
            .track_id
            .as_deref()
            .ok_or(EngineError::NoTrackSelected)?;
        let video_id = self
            .session
            .video_id
            .as_deref()
            .ok_or(EngineError::NoVideoSelected)?;
        self.library
            .video(track_id, video_id)
            .ok_or_else(|| EngineError::UnknownVideo(video_id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::lesson::LessonVideo;
    use crate::core::sync_point::{CodeCheck, SyncPoint};
    use crate::core::track::LessonTrack;
    use crate::editor::language::EditorLanguage;

    /// One-track library: a 15:00 lesson with a challenge at 420s.
    fn fixture_library() -> LessonLibrary {
        let video = LessonVideo::new("demo-lesson", "Demo Lesson", "https://example.test/demo", "15:00")
            .with_technologies(["python"])
            .with_chapters(vec![
                crate::core::lesson::VideoChapter::new("Intro", 0),
                crate::core::lesson::VideoChapter::new("Strings", 420),
            ])
            .with_sync_points(vec![SyncPoint::new(
                420,
                "strings",
                SyncAction::Challenge {
                    check: CodeCheck::requiring(["input("]),
                    success_message: "Done!".to_string(),
                },
            )
            .with_code("X")
            .with_hint("try input()")]);

        LessonLibrary::from_tracks(vec![LessonTrack::new("demo-track", "Demo Track", "One lesson")
            .with_primary_tech("python")
            .with_videos(vec![video])])
    }

    fn started_engine() -> LessonEngine {
        let mut engine = LessonEngine::new(fixture_library());
        engine
            .process_command(LessonCommand::SelectTrack("demo-track".to_string()))
            .unwrap();
        engine
            .process_command(LessonCommand::SelectVideo("demo-lesson".to_string()))
            .unwrap();
        engine
    }

    #[test]
    fn test_select_unknown_track_fails() {
        let mut engine = LessonEngine::new(fixture_library());
        let err = engine
            .process_command(LessonCommand::SelectTrack("nope".to_string()))
            .unwrap_err();
        assert!(matches!(err, EngineError::UnknownTrack(_)));
    }

    #[test]
    fn test_select_video_requires_track() {
        let mut engine = LessonEngine::new(fixture_library());
        let err = engine
            .process_command(LessonCommand::SelectVideo("demo-lesson".to_string()))
            .unwrap_err();
        assert!(matches!(err, EngineError::NoTrackSelected));
    }

    #[test]
    fn test_progress_inside_window_projects_code() {
        let mut engine = started_engine();

        // progress 47% of 900s is 423s, inside [420, 450)
        let events = engine
            .process_command(LessonCommand::ReportProgress(47.0))
            .unwrap();

        assert!(events.contains(&LessonEvent::CodeProjected {
            section: "strings".to_string(),
            hint: Some("try input()".to_string()),
        }));
        assert!(events.contains(&LessonEvent::ChallengeActivated {
            section: "strings".to_string(),
        }));
        assert_eq!(engine.stage().code(), "X");
    }

    #[test]
    fn test_progress_outside_window_leaves_code_untouched() {
        let mut engine = started_engine();
        engine
            .process_command(LessonCommand::ReportProgress(47.0))
            .unwrap();

        // 90% of 900s is 810s, past every window
        let events = engine
            .process_command(LessonCommand::ReportProgress(90.0))
            .unwrap();

        assert!(events.is_empty());
        assert_eq!(engine.stage().code(), "X");
    }

    #[test]
    fn test_repeated_reports_in_window_project_once() {
        let mut engine = started_engine();

        let first = engine
            .process_command(LessonCommand::ReportProgress(47.0))
            .unwrap();
        let second = engine
            .process_command(LessonCommand::ReportProgress(48.0))
            .unwrap();

        assert!(!first.is_empty());
        assert!(second.is_empty());
    }

    #[test]
    fn test_progress_with_no_selection_is_absorbed() {
        let mut engine = LessonEngine::new(fixture_library());
        let events = engine
            .process_command(LessonCommand::ReportProgress(50.0))
            .unwrap();
        assert!(events.is_empty());
    }

    #[test]
    fn test_video_selection_seeds_starter_code_and_language() {
        let engine = started_engine();
        assert_eq!(engine.stage().language(), EditorLanguage::Python);
        assert!(engine.stage().code().contains("Demo Lesson"));
        assert!(engine.stage().code().contains("Code will sync with video progress"));
    }

    #[test]
    fn test_challenge_submission_round_trip() {
        let mut engine = started_engine();
        engine
            .process_command(LessonCommand::ReportProgress(47.0))
            .unwrap();

        let failed = engine
            .process_command(LessonCommand::SubmitCode("print('hi')".to_string()))
            .unwrap();
        assert_eq!(failed, vec![LessonEvent::ChallengeFailed]);

        let passed = engine
            .process_command(LessonCommand::SubmitCode("name = input('? ')".to_string()))
            .unwrap();
        assert_eq!(
            passed,
            vec![LessonEvent::ChallengePassed {
                message: "Done!".to_string()
            }]
        );
    }

    #[test]
    fn test_submission_without_challenge_fails() {
        let mut engine = started_engine();
        let err = engine
            .process_command(LessonCommand::SubmitCode("x = 1".to_string()))
            .unwrap_err();
        assert!(matches!(err, EngineError::NoChallengeStaged));
    }

    #[test]
    fn test_seek_clamps_to_duration_and_updates_progress() {
        let mut engine = started_engine();
        let events = engine.process_command(LessonCommand::Seek(1200)).unwrap();

        assert_eq!(events, vec![LessonEvent::Seeked(900)]);
        assert_eq!(engine.session().progress, 100.0);
    }

    #[test]
    fn test_chapter_jump_seeks_to_chapter_timestamp() {
        let mut engine = started_engine();
        let events = engine
            .process_command(LessonCommand::JumpToChapter(1))
            .unwrap();

        assert_eq!(events, vec![LessonEvent::Seeked(420)]);

        let err = engine
            .process_command(LessonCommand::JumpToChapter(5))
            .unwrap_err();
        assert!(matches!(err, EngineError::UnknownChapter(5)));
    }

    #[test]
    fn test_display_mode_toggle_emits_only_on_change() {
        let mut engine = started_engine();

        let first = engine
            .process_command(LessonCommand::SetDisplayMode(DisplayMode::CodeFocus))
            .unwrap();
        assert_eq!(first, vec![LessonEvent::DisplayModeChanged(DisplayMode::CodeFocus)]);

        let second = engine
            .process_command(LessonCommand::SetDisplayMode(DisplayMode::CodeFocus))
            .unwrap();
        assert!(second.is_empty());
    }

    #[test]
    fn test_track_change_clears_editor() {
        let mut engine = started_engine();
        engine
            .process_command(LessonCommand::ReportProgress(47.0))
            .unwrap();
        assert_eq!(engine.stage().code(), "X");

        engine
            .process_command(LessonCommand::SelectTrack("demo-track".to_string()))
            .unwrap();
        assert_eq!(engine.stage().code(), "");
        assert!(engine.session().video_id.is_none());
    }
}
