//! Editor-facing state: the projected code stage and language selection.

pub mod language;
pub mod stage;

pub use language::{language_for, EditorLanguage};
pub use stage::{ChallengeOutcome, EditorStage};
