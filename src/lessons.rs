use indexmap::IndexMap;
use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::error::{Result, TutorError};
use crate::llm::{CompletionGateway, GenerationConfig};
use crate::profile::Profile;
use crate::prompts;
use crate::topics::TopicMap;

/// Composite key under which a lesson is stored.
pub fn lesson_key(topic: &str, subtopic: &str) -> String {
    format!("{} - {}", topic, subtopic)
}

/// Lessons generated so far, keyed by `"topic - subtopic"`.
///
/// Re-generating a pair overwrites the previous content (last write wins, no
/// versioning). Insertion order is preserved.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct LessonHistory {
    entries: IndexMap<String, String>,
}

impl LessonHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, topic: &str, subtopic: &str) -> Option<&str> {
        self.entries.get(&lesson_key(topic, subtopic)).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// The first lesson generated this session, if any.
    pub fn first_lesson(&self) -> Option<&str> {
        self.entries.values().next().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn record(&mut self, topic: &str, subtopic: &str, content: String) {
        self.entries.insert(lesson_key(topic, subtopic), content);
    }
}

/// Generate a lesson for one (topic, subtopic) pair and record it.
///
/// The topic must already exist in the topic map; asking for an unknown one
/// is a sequencing bug in the caller. A gateway failure degrades to an empty
/// lesson which is stored and returned as-is, with no retry.
pub async fn generate_lesson(
    profile: &Profile,
    topic_map: &TopicMap,
    history: &mut LessonHistory,
    topic: &str,
    subtopic: &str,
    config: &GenerationConfig,
    gateway: &dyn CompletionGateway,
) -> Result<String> {
    if !topic_map.contains(topic) {
        return Err(TutorError::Precondition(format!(
            "lesson requested for unknown topic '{}'",
            topic
        )));
    }

    info!("📖 Generating lesson for '{}'", lesson_key(topic, subtopic));
    let prompt = prompts::lesson_prompt(profile, topic, subtopic);
    let content = match gateway.complete(&prompt, config).await {
        Ok(content) => content,
        Err(e) => {
            warn!("Lesson generation for '{}' failed: {}", lesson_key(topic, subtopic), e);
            String::new()
        }
    };

    history.record(topic, subtopic, content.clone());
    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::{sample_profile, scripted_topic_map, ScriptedGateway};

    #[tokio::test]
    async fn lesson_is_recorded_under_composite_key() {
        let profile = sample_profile();
        let topic_map = scripted_topic_map().await;
        let mut history = LessonHistory::new();
        let config = GenerationConfig::default();
        let gateway = ScriptedGateway::with_responses(vec!["Lesson body."]);

        let content = generate_lesson(
            &profile,
            &topic_map,
            &mut history,
            "Chatbots",
            "Intent recognition",
            &config,
            &gateway,
        )
        .await
        .unwrap();

        assert_eq!(content, "Lesson body.");
        assert_eq!(history.get("Chatbots", "Intent recognition"), Some("Lesson body."));
        assert_eq!(history.first_lesson(), Some("Lesson body."));
    }

    #[tokio::test]
    async fn regenerating_a_pair_overwrites_prior_content() {
        let profile = sample_profile();
        let topic_map = scripted_topic_map().await;
        let mut history = LessonHistory::new();
        let config = GenerationConfig::default();

        let gateway = ScriptedGateway::with_responses(vec!["First draft.", "Second draft."]);
        for _ in 0..2 {
            generate_lesson(
                &profile,
                &topic_map,
                &mut history,
                "Chatbots",
                "Intent recognition",
                &config,
                &gateway,
            )
            .await
            .unwrap();
        }

        assert_eq!(history.len(), 1);
        assert_eq!(history.get("Chatbots", "Intent recognition"), Some("Second draft."));
    }

    #[tokio::test]
    async fn unknown_topic_is_a_precondition_error() {
        let profile = sample_profile();
        let topic_map = scripted_topic_map().await;
        let mut history = LessonHistory::new();
        let config = GenerationConfig::default();
        let gateway = ScriptedGateway::with_responses(vec!["unused"]);

        let result = generate_lesson(
            &profile,
            &topic_map,
            &mut history,
            "Quantum Computing",
            "Qubits",
            &config,
            &gateway,
        )
        .await;

        assert!(matches!(result, Err(TutorError::Precondition(_))));
        assert!(history.is_empty());
    }

    #[tokio::test]
    async fn failed_generation_stores_an_empty_lesson() {
        let profile = sample_profile();
        let topic_map = scripted_topic_map().await;
        let mut history = LessonHistory::new();
        let config = GenerationConfig::default();
        let gateway = ScriptedGateway::failing();

        let content = generate_lesson(
            &profile,
            &topic_map,
            &mut history,
            "Chatbots",
            "Intent recognition",
            &config,
            &gateway,
        )
        .await
        .unwrap();

        assert!(content.is_empty());
        assert_eq!(history.get("Chatbots", "Intent recognition"), Some(""));
    }
}
