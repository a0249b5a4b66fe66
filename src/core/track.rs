//! Learning track: a named curriculum path over an ordered set of lessons.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::lesson::LessonVideo;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
    Mixed,
}

impl fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SkillLevel::Beginner => "beginner",
            SkillLevel::Intermediate => "intermediate",
            SkillLevel::Advanced => "advanced",
            SkillLevel::Mixed => "mixed",
        };
        f.write_str(name)
    }
}

/// A curriculum track grouping an ordered set of lesson videos.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonTrack {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Display total across all lessons, e.g. "4h 30m".
    pub total_duration: String,
    pub estimated_hours: u32,
    pub skill_level: SkillLevel,
    pub primary_tech: String,
    #[serde(default)]
    pub supporting_tech: Vec<String>,
    pub videos: Vec<LessonVideo>,
}

impl LessonTrack {
    pub fn new(id: impl Into<String>, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            total_duration: String::new(),
            estimated_hours: 0,
            skill_level: SkillLevel::Mixed,
            primary_tech: String::new(),
            supporting_tech: Vec::new(),
            videos: Vec::new(),
        }
    }

    pub fn with_schedule(mut self, total_duration: impl Into<String>, estimated_hours: u32) -> Self {
        self.total_duration = total_duration.into();
        self.estimated_hours = estimated_hours;
        self
    }

    pub fn with_skill_level(mut self, skill_level: SkillLevel) -> Self {
        self.skill_level = skill_level;
        self
    }

    pub fn with_primary_tech(mut self, primary_tech: impl Into<String>) -> Self {
        self.primary_tech = primary_tech.into();
        self
    }

    pub fn with_supporting_tech<I, S>(mut self, supporting_tech: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.supporting_tech = supporting_tech.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_videos(mut self, videos: Vec<LessonVideo>) -> Self {
        self.videos = videos;
        self
    }

    /// Find a lesson by id within this track.
    pub fn video(&self, video_id: &str) -> Option<&LessonVideo> {
        self.videos.iter().find(|video| video.id == video_id)
    }

    pub fn first_video(&self) -> Option<&LessonVideo> {
        self.videos.first()
    }
}
