//! Core types for the lesson player.
//!
//! This module provides the fundamental data structures for tracks, lesson
//! videos, sync points, and time representation. All positions are whole
//! seconds of lesson video.

pub mod lesson;
pub mod sync_point;
pub mod time;
pub mod track;

// Re-export core data structures for easier access.
pub use lesson::{Difficulty, LessonVideo, VideoChapter};
pub use sync_point::{CodeCheck, SyncAction, SyncPoint, SYNC_WINDOW};
pub use track::{LessonTrack, SkillLevel};
