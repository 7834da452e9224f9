//! TutorMate core: a personalized tutoring and interview-practice engine.
//!
//! The crate is a library driven by an outer UI shell. It owns the learner
//! profile, the dynamically generated topic/subtopic curriculum, on-demand
//! lesson content, and the interview session state machine with per-answer
//! scoring. All text generation goes through the [`llm::CompletionGateway`]
//! boundary; the shell decides which provider backs it.

pub mod chatbot;
pub mod error;
pub mod interview;
pub mod lessons;
pub mod llm;
pub mod media;
pub mod profile;
pub mod prompts;
pub mod session;
pub mod topics;

pub use error::TutorError;
pub use interview::{
    AnswerInput, AnswerSource, Behavior, Difficulty, InterviewSession, InterviewSettings,
    InterviewState, InterviewSummary,
};
pub use lessons::LessonHistory;
pub use llm::{CompletionGateway, GenerationConfig, HttpGateway, Provider};
pub use profile::{Level, Profile};
pub use session::{SessionStore, TutorSession};
pub use topics::TopicMap;

#[cfg(test)]
pub(crate) mod test_util;
