use indexmap::IndexMap;
use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::llm::{CompletionGateway, GenerationConfig};
use crate::profile::Profile;
use crate::prompts;

/// Split comma-separated free text into trimmed, non-empty items.
pub fn split_csv(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Topic -> ordered subtopic list, derived from the profile's topics of
/// interest. Insertion order follows the learner's input order.
///
/// The map only ever grows: expanding again or adding additional topics never
/// removes or overwrites an existing key. A topic whose subtopic generation
/// failed keeps an empty list, which the shell treats as "lessons unavailable
/// for this topic".
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct TopicMap {
    entries: IndexMap<String, Vec<String>>,
}

impl TopicMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn topics(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn subtopics(&self, topic: &str) -> Option<&[String]> {
        self.entries.get(topic).map(Vec::as_slice)
    }

    pub fn contains(&self, topic: &str) -> bool {
        self.entries.contains_key(topic)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Expand the profile's comma-separated topics of interest into subtopic
    /// lists, one completion call per topic not already present.
    pub async fn expand_from_profile(
        &mut self,
        profile: &Profile,
        config: &GenerationConfig,
        gateway: &dyn CompletionGateway,
    ) {
        let topics = split_csv(&profile.topics);
        info!("📚 Expanding {} profile topic(s) into subtopics", topics.len());
        self.add_topics(&topics, config, gateway).await;
    }

    /// Add a batch of topics. Existing keys are left untouched; each new
    /// topic gets one generation call.
    pub async fn add_topics(
        &mut self,
        topics: &[String],
        config: &GenerationConfig,
        gateway: &dyn CompletionGateway,
    ) {
        for topic in topics {
            if self.entries.contains_key(topic) {
                continue;
            }
            let subtopics = generate_subtopics(topic, config, gateway).await;
            self.entries.insert(topic.clone(), subtopics);
        }
    }
}

/// One completion call for one topic. Failures and unparseable output
/// degrade to an empty list; there is no retry.
async fn generate_subtopics(
    topic: &str,
    config: &GenerationConfig,
    gateway: &dyn CompletionGateway,
) -> Vec<String> {
    let prompt = prompts::subtopics_prompt(topic);
    match gateway.complete(&prompt, config).await {
        Ok(response) => {
            let subtopics = split_csv(&response);
            if subtopics.is_empty() {
                warn!("Subtopic generation for '{}' returned nothing usable", topic);
            }
            subtopics
        }
        Err(e) => {
            warn!("Subtopic generation for '{}' failed: {}", topic, e);
            Vec::new()
        }
    }
}
