//! Synchronized lesson playback engine.
//!
//! Keeps a video player's playback position mapped to per-lesson sync
//! points that reveal, highlight, or challenge the learner with code in
//! the lesson editor. The player and the editor widget are external; this
//! crate owns the catalog, the mapping pipeline, and the projected editor
//! state.

pub mod core;
pub mod editor;
pub mod library;
pub mod playback;

pub use editor::{EditorLanguage, EditorStage};
pub use library::LessonLibrary;
pub use playback::{DisplayMode, EngineError, LessonCommand, LessonEngine, LessonEvent};
