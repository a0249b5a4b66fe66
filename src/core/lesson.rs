//! Lesson video metadata: the static, per-lesson data shipped with the
//! catalog. Read-only at runtime.

use serde::{Deserialize, Serialize};

use crate::core::sync_point::SyncPoint;
use crate::core::time::{parse_duration, Seconds};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }
}

/// A named mark inside a lesson video.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoChapter {
    pub title: String,
    pub timestamp: Seconds,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl VideoChapter {
    pub fn new(title: impl Into<String>, timestamp: Seconds) -> Self {
        Self {
            title: title.into(),
            timestamp,
            description: None,
        }
    }
}

/// A single lesson video and the static data that ships with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonVideo {
    pub id: String,
    pub title: String,
    pub url: String,
    /// Display duration as authored, e.g. "18:45".
    pub duration: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
    /// Ids of videos that should be watched first.
    #[serde(default)]
    pub prerequisites: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub chapters: Vec<VideoChapter>,
    /// Sync table driving the code editor; empty for lessons without one.
    #[serde(default)]
    pub sync_points: Vec<SyncPoint>,
}

impl LessonVideo {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        url: impl Into<String>,
        duration: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            url: url.into(),
            duration: duration.into(),
            technologies: Vec::new(),
            difficulty: None,
            prerequisites: Vec::new(),
            description: None,
            chapters: Vec::new(),
            sync_points: Vec::new(),
        }
    }

    pub fn with_technologies<I, S>(mut self, technologies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.technologies = technologies.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = Some(difficulty);
        self
    }

    pub fn with_prerequisites<I, S>(mut self, prerequisites: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.prerequisites = prerequisites.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_chapters(mut self, chapters: Vec<VideoChapter>) -> Self {
        self.chapters = chapters;
        self
    }

    pub fn with_sync_points(mut self, sync_points: Vec<SyncPoint>) -> Self {
        self.sync_points = sync_points;
        self
    }

    /// Total length in seconds, parsed from the display duration.
    pub fn duration_secs(&self) -> Seconds {
        parse_duration(&self.duration)
    }

    pub fn has_technology(&self, tech: &str) -> bool {
        self.technologies.iter().any(|t| t == tech)
    }

    pub fn chapter(&self, index: usize) -> Option<&VideoChapter> {
        self.chapters.get(index)
    }
}
