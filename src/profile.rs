use log::info;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::llm::{CompletionGateway, GenerationConfig};
use crate::prompts;

/// Self-reported skill level from the survey.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Level {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Beginner => "Beginner",
            Level::Intermediate => "Intermediate",
            Level::Advanced => "Advanced",
        }
    }
}

/// The learner's submitted survey record.
///
/// Immutable once submitted, except for the generated assessment which is
/// attached after the fact. `languages` keeps the order the learner gave;
/// the first entry is their primary language and decides the lesson language
/// when English is not listed.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Profile {
    pub name: String,
    pub age: u32,
    pub country: String,
    pub languages: Vec<String>,
    pub english_first: bool,
    pub personality: String,
    pub tone_sample: String,
    pub learning_goals: String,
    pub level: Level,
    /// Topics of interest exactly as submitted (comma-separated free text).
    pub topics: String,
    pub resume_text: Option<String>,
    pub assessment: Option<String>,
}

impl Profile {
    pub fn primary_language(&self) -> Option<&str> {
        self.languages.first().map(String::as_str)
    }

    pub fn languages_label(&self) -> String {
        self.languages.join(", ")
    }
}

/// Generate the one-off personality/learning assessment and attach it to the
/// profile. Re-invoking returns the stored assessment without another call.
///
/// A gateway failure propagates so the shell can message it and retry; no
/// partial assessment is attached.
pub async fn generate_assessment(
    profile: &mut Profile,
    config: &GenerationConfig,
    gateway: &dyn CompletionGateway,
) -> Result<String> {
    if let Some(existing) = &profile.assessment {
        return Ok(existing.clone());
    }

    info!("🧠 Generating profile assessment for: {}", profile.name);
    let prompt = prompts::assessment_prompt(profile);
    let analysis = gateway.complete(&prompt, config).await?;
    profile.assessment = Some(analysis.clone());

    info!("✅ Assessment attached to profile");
    Ok(analysis)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::{sample_profile, ScriptedGateway};

    #[tokio::test]
    async fn assessment_is_generated_once() {
        let mut profile = sample_profile();
        let gateway = ScriptedGateway::with_responses(vec!["You are a curious learner."]);
        let config = GenerationConfig::default();

        let first = generate_assessment(&mut profile, &config, &gateway)
            .await
            .unwrap();
        assert_eq!(first, "You are a curious learner.");
        assert_eq!(profile.assessment.as_deref(), Some("You are a curious learner."));

        // The script is exhausted, so a second call would fail if it hit the
        // gateway again.
        let second = generate_assessment(&mut profile, &config, &gateway)
            .await
            .unwrap();
        assert_eq!(second, first);
    }

    #[tokio::test]
    async fn assessment_failure_leaves_profile_untouched() {
        let mut profile = sample_profile();
        let gateway = ScriptedGateway::failing();
        let config = GenerationConfig::default();

        let result = generate_assessment(&mut profile, &config, &gateway).await;
        assert!(result.is_err());
        assert!(profile.assessment.is_none());
    }
}
