pub mod evaluator;
pub mod session;
pub mod summary;

pub use session::{InterviewSession, InterviewState, FALLBACK_QUESTIONS, QUESTION_COUNT};
pub use summary::{summarize, InterviewSummary};

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Behavior {
    Aggressive,
    Polite,
    #[default]
    Medium,
}

impl Behavior {
    pub fn as_str(&self) -> &'static str {
        match self {
            Behavior::Aggressive => "Aggressive",
            Behavior::Polite => "Polite",
            Behavior::Medium => "Medium",
        }
    }
}

/// Interviewer settings captured once at session start; changing the
/// selectors afterwards does not regenerate the running session.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct InterviewSettings {
    pub difficulty: Difficulty,
    pub behavior: Behavior,
}

/// Where an answer's text came from. Audio and video answers arrive already
/// transcribed by an external collaborator and are treated as plain text.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnswerSource {
    Text,
    TranscribedAudio,
    TranscribedVideo,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct AnswerInput {
    pub text: String,
    pub source: AnswerSource,
}

impl AnswerInput {
    pub fn typed(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            source: AnswerSource::Text,
        }
    }

    pub fn transcribed_audio(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            source: AnswerSource::TranscribedAudio,
        }
    }

    pub fn transcribed_video(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            source: AnswerSource::TranscribedVideo,
        }
    }
}
