//! Projected state of the lesson code editor.

use crate::core::sync_point::{SyncAction, SyncPoint};
use crate::editor::language::EditorLanguage;

/// Outcome of checking a learner submission against the staged challenge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChallengeOutcome {
    Passed { message: String },
    Failed,
}

/// The visible code editor state, updated as sync points resolve.
///
/// Content is only replaced when a newly resolved entry carries different
/// code, so repeated progress reports inside one activation window leave
/// learner edits alone.
#[derive(Debug, Clone)]
pub struct EditorStage {
    code: String,
    language: EditorLanguage,
    hint: Option<String>,
    staged: Option<SyncAction>,
    section: Option<String>,
}

impl EditorStage {
    pub fn new(language: EditorLanguage) -> Self {
        Self {
            code: String::new(),
            language,
            hint: None,
            staged: None,
            section: None,
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn language(&self) -> EditorLanguage {
        self.language
    }

    pub fn hint(&self) -> Option<&str> {
        self.hint.as_deref()
    }

    /// Action of the last projected sync point, for downstream presentation.
    pub fn staged_action(&self) -> Option<&SyncAction> {
        self.staged.as_ref()
    }

    pub fn section(&self) -> Option<&str> {
        self.section.as_deref()
    }

    /// Synthetic tab name for the editor, derived from the lesson title.
    pub fn tab_name(&self, lesson_title: &str) -> String {
        let stem = lesson_title.to_lowercase().replace(char::is_whitespace, "-");
        format!("{}.{}", stem, self.language.file_extension())
    }

    /// Learner edit: replace the buffer without touching the staged cue.
    pub fn set_code(&mut self, code: impl Into<String>) {
        self.code = code.into();
    }

    /// Reset the stage for a newly selected lesson.
    pub fn reset(&mut self, starter_code: String, language: EditorLanguage) {
        self.code = starter_code;
        self.language = language;
        self.hint = None;
        self.staged = None;
        self.section = None;
    }

    /// Drop all content, e.g. when the learner switches tracks.
    pub fn clear(&mut self, language: EditorLanguage) {
        self.reset(String::new(), language);
    }

    /// Apply a resolved sync point to the editor.
    ///
    /// Returns true when the entry's code was projected into the buffer,
    /// false when the entry has no code or the buffer already shows it.
    pub fn project(&mut self, point: &SyncPoint) -> bool {
        let code = match point.code.as_ref() {
            Some(code) => code,
            None => return false,
        };
        if *code == self.code {
            return false;
        }

        self.code = code.clone();
        self.hint = point.hint.clone();
        self.staged = Some(point.action.clone());
        self.section = Some(point.section.clone());
        true
    }

    /// Run the staged challenge against the current buffer.
    ///
    /// Returns `None` when no challenge is staged. This is invoked on
    /// learner submission, never on a timer.
    pub fn check_submission(&self) -> Option<ChallengeOutcome> {
        match &self.staged {
            Some(SyncAction::Challenge { check, success_message }) => {
                if check.evaluate(&self.code) {
                    Some(ChallengeOutcome::Passed {
                        message: success_message.clone(),
                    })
                } else {
                    Some(ChallengeOutcome::Failed)
                }
            }
            _ => None,
        }
    }
}
