//! Shared test doubles for the unit tests.

use std::collections::VecDeque;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::error::{Result, TutorError};
use crate::llm::{CompletionGateway, GenerationConfig};
use crate::profile::{Level, Profile};
use crate::topics::TopicMap;

/// Gateway that replays a fixed script of responses and records the prompts
/// it was called with. An exhausted script fails the call, which makes tests
/// that accidentally issue extra completions fail loudly.
pub struct ScriptedGateway {
    responses: Mutex<VecDeque<Result<String>>>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedGateway {
    pub fn with_responses(responses: Vec<&str>) -> Self {
        Self {
            responses: Mutex::new(responses.into_iter().map(|r| Ok(r.to_string())).collect()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// A gateway whose every call fails with a generation error.
    pub fn failing() -> Self {
        Self {
            responses: Mutex::new(VecDeque::new()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.prompts.lock().last().cloned()
    }
}

#[async_trait]
impl CompletionGateway for ScriptedGateway {
    async fn complete(&self, prompt: &str, _config: &GenerationConfig) -> Result<String> {
        self.prompts.lock().push(prompt.to_string());
        self.responses
            .lock()
            .pop_front()
            .unwrap_or_else(|| Err(TutorError::Generation("provider unavailable".to_string())))
    }
}

pub fn sample_profile() -> Profile {
    Profile {
        name: "Asha".to_string(),
        age: 24,
        country: "India".to_string(),
        languages: vec!["English".to_string(), "Hindi".to_string()],
        english_first: false,
        personality: "curious and fun loving".to_string(),
        tone_sample: "I love long weekend treks in the hills.".to_string(),
        learning_goals: "Build and ship an AI chatbot.".to_string(),
        level: Level::Beginner,
        topics: "Chatbots, Data Science".to_string(),
        resume_text: None,
        assessment: None,
    }
}

/// A topic map seeded with one "Chatbots" topic and five subtopics.
pub async fn scripted_topic_map() -> TopicMap {
    let mut map = TopicMap::new();
    let gateway = ScriptedGateway::with_responses(vec![
        "Intent recognition, Dialog flows, Entity extraction, Deployment, Testing",
    ]);
    map.add_topics(
        &["Chatbots".to_string()],
        &GenerationConfig::default(),
        &gateway,
    )
    .await;
    map
}
