use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use log::info;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Result, TutorError};
use crate::interview::{AnswerInput, InterviewSession, InterviewSettings, InterviewSummary};
use crate::lessons::{self, LessonHistory};
use crate::llm::{CompletionGateway, GenerationConfig};
use crate::profile::{self, Profile};
use crate::topics::{split_csv, TopicMap};

/// One learner's session: profile, derived curriculum, lesson history and
/// interview state, owned together and passed explicitly into every
/// operation. Created on survey submission, dropped when the session ends;
/// nothing here touches durable storage.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct TutorSession {
    pub id: Uuid,
    pub profile: Profile,
    pub generation: GenerationConfig,
    pub topics: TopicMap,
    pub lessons: LessonHistory,
    pub interview: InterviewSession,
    pub created_at: DateTime<Utc>,
}

impl TutorSession {
    pub fn new(profile: Profile) -> Self {
        Self {
            id: Uuid::new_v4(),
            profile,
            generation: GenerationConfig::default(),
            topics: TopicMap::new(),
            lessons: LessonHistory::new(),
            interview: InterviewSession::new(),
            created_at: Utc::now(),
        }
    }

    pub fn with_generation(mut self, generation: GenerationConfig) -> Self {
        self.generation = generation;
        self
    }

    /// Generate (once) and attach the profile assessment.
    pub async fn generate_assessment(&mut self, gateway: &dyn CompletionGateway) -> Result<String> {
        profile::generate_assessment(&mut self.profile, &self.generation, gateway).await
    }

    /// Expand the profile's topics of interest into the topic map.
    pub async fn expand_topics(&mut self, gateway: &dyn CompletionGateway) {
        self.topics
            .expand_from_profile(&self.profile, &self.generation, gateway)
            .await;
    }

    /// Add additional comma-separated topics; existing topics are untouched.
    pub async fn add_topics(&mut self, raw: &str, gateway: &dyn CompletionGateway) {
        let batch = split_csv(raw);
        self.topics
            .add_topics(&batch, &self.generation, gateway)
            .await;
    }

    /// Generate a lesson for a (topic, subtopic) pair and record it.
    pub async fn generate_lesson(
        &mut self,
        topic: &str,
        subtopic: &str,
        gateway: &dyn CompletionGateway,
    ) -> Result<String> {
        lessons::generate_lesson(
            &self.profile,
            &self.topics,
            &mut self.lessons,
            topic,
            subtopic,
            &self.generation,
            gateway,
        )
        .await
    }

    /// Start (or restart) the interview over the subtopics of `topic`.
    pub async fn start_interview(
        &mut self,
        topic: &str,
        settings: InterviewSettings,
        gateway: &dyn CompletionGateway,
    ) -> Result<()> {
        let subtopics = self.topics.subtopics(topic).ok_or_else(|| {
            TutorError::Precondition(format!("interview requested for unknown topic '{}'", topic))
        })?;
        if subtopics.is_empty() {
            return Err(TutorError::Precondition(format!(
                "no subtopics available for topic '{}'",
                topic
            )));
        }
        let context = subtopics.to_vec();
        self.interview
            .start(settings, &context, &self.generation, gateway)
            .await
    }

    /// Submit the answer to the current interview question.
    pub async fn submit_interview_answer(
        &mut self,
        answer: &AnswerInput,
        gateway: &dyn CompletionGateway,
    ) -> Result<String> {
        self.interview
            .submit_answer(answer, &self.generation, gateway)
            .await
    }

    /// Summary of the completed interview.
    pub fn interview_summary(&self) -> Result<InterviewSummary> {
        self.interview.summary()
    }
}

/// Keyed store for concurrent sessions. Isolation is per session id: callers
/// check a session out, drive it, and store it back; no two actors share one
/// session.
#[derive(Clone, Default)]
pub struct SessionStore {
    sessions: Arc<Mutex<HashMap<Uuid, TutorSession>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(&self, session: TutorSession) {
        info!("💾 Storing session: {}", session.id);
        self.sessions.lock().insert(session.id, session);
    }

    pub fn get(&self, id: &Uuid) -> Option<TutorSession> {
        self.sessions.lock().get(id).cloned()
    }

    pub fn remove(&self, id: &Uuid) -> Option<TutorSession> {
        self.sessions.lock().remove(id)
    }

    pub fn len(&self) -> usize {
        self.sessions.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.lock().is_empty()
    }
}
