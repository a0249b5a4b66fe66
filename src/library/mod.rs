//! Lesson catalog: the built-in tracks, their sync tables, and starter
//! code, plus lookup across all of it.
//!
//! The catalog is read-only reference data for the duration of a lesson
//! view; it can also be loaded from a JSON file with the same shape.

mod starter;
mod sync_tables;
mod tracks;

pub use starter::starter_code;

use serde::{Deserialize, Serialize};

use crate::core::lesson::LessonVideo;
use crate::core::sync_point::SyncPoint;
use crate::core::track::LessonTrack;

/// The full set of learning tracks available to a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonLibrary {
    tracks: Vec<LessonTrack>,
}

impl LessonLibrary {
    /// The catalog shipped with the application.
    pub fn builtin() -> Self {
        Self {
            tracks: tracks::builtin_tracks(),
        }
    }

    pub fn from_tracks(tracks: Vec<LessonTrack>) -> Self {
        Self { tracks }
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn tracks(&self) -> &[LessonTrack] {
        &self.tracks
    }

    pub fn track(&self, track_id: &str) -> Option<&LessonTrack> {
        self.tracks.iter().find(|track| track.id == track_id)
    }

    pub fn video(&self, track_id: &str, video_id: &str) -> Option<&LessonVideo> {
        self.track(track_id)?.video(video_id)
    }

    /// Sync table for a lesson; empty when the lesson has none or the ids
    /// are unknown.
    pub fn sync_points(&self, track_id: &str, video_id: &str) -> &[SyncPoint] {
        self.video(track_id, video_id)
            .map(|video| video.sync_points.as_slice())
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_builtin_catalog_shape() {
        let library = LessonLibrary::builtin();
        let ids: Vec<&str> = library.tracks().iter().map(|t| t.id.as_str()).collect();

        assert_eq!(
            ids,
            vec!["python-fundamentals", "shopify-dev", "react-mastery", "web-fundamentals"]
        );
        assert_eq!(library.track("python-fundamentals").unwrap().videos.len(), 5);
    }

    #[test]
    fn test_every_lesson_duration_parses() {
        let library = LessonLibrary::builtin();
        for track in library.tracks() {
            for video in &track.videos {
                assert!(video.duration_secs() > 0, "{} has an unparseable duration", video.id);
            }
        }
    }

    #[test]
    fn test_sync_tables_attached_to_expected_lessons() {
        let library = LessonLibrary::builtin();

        assert_eq!(library.sync_points("python-fundamentals", "python-basics").len(), 3);
        assert_eq!(library.sync_points("python-fundamentals", "python-functions").len(), 2);
        assert_eq!(library.sync_points("shopify-dev", "liquid-basics").len(), 3);

        // Lessons without a table sync nothing
        assert!(library.sync_points("python-fundamentals", "python-oop").is_empty());
        assert!(library.sync_points("react-mastery", "react-hooks").is_empty());
    }

    #[test]
    fn test_unknown_ids_resolve_to_empty() {
        let library = LessonLibrary::builtin();
        assert!(library.track("rust-fundamentals").is_none());
        assert!(library.video("python-fundamentals", "rust-basics").is_none());
        assert!(library.sync_points("nope", "nope").is_empty());
    }

    #[test]
    fn test_sync_windows_fit_inside_their_lessons() {
        let library = LessonLibrary::builtin();
        for track in library.tracks() {
            for video in &track.videos {
                let duration = video.duration_secs();
                for point in &video.sync_points {
                    assert!(
                        point.video_timestamp + crate::core::sync_point::SYNC_WINDOW <= duration,
                        "{}/{} sync point at {} overruns the lesson",
                        track.id,
                        video.id,
                        point.video_timestamp
                    );
                }
            }
        }
    }

    #[test]
    fn test_prerequisites_reference_lessons_in_the_same_track() {
        let library = LessonLibrary::builtin();
        for track in library.tracks() {
            for video in &track.videos {
                for prerequisite in &video.prerequisites {
                    assert!(
                        track.video(prerequisite).is_some(),
                        "{}/{} requires unknown lesson {}",
                        track.id,
                        video.id,
                        prerequisite
                    );
                }
            }
        }
    }

    #[test]
    fn test_json_round_trip() {
        let library = LessonLibrary::builtin();
        let json = library.to_json().unwrap();
        let back = LessonLibrary::from_json(&json).unwrap();

        assert_eq!(back, library);
    }
}
