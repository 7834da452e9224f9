//! Auxiliary chat surfaces: a free-form chatbot and question answering
//! grounded in an uploaded document's text.

use log::info;

use crate::error::Result;
use crate::llm::{CompletionGateway, GenerationConfig};
use crate::prompts;

/// Fallback grounding text when no document has been uploaded.
pub const DEFAULT_KNOWLEDGE_BASE: &str =
    "This is the default knowledge base of the TutorMate engine. It includes comprehensive \
     lessons on Python, Generative AI, and more.";

/// Free-form chatbot question with caller-chosen provider settings.
pub async fn ask(
    question: &str,
    config: &GenerationConfig,
    gateway: &dyn CompletionGateway,
) -> Result<String> {
    info!("💬 Chatbot request via {}", config.provider.as_str());
    gateway.complete(question, config).await
}

/// Answer a question against extracted document text. When `document` is
/// `None` the default knowledge base is used instead.
pub async fn answer_about_document(
    document: Option<&str>,
    question: &str,
    config: &GenerationConfig,
    gateway: &dyn CompletionGateway,
) -> Result<String> {
    let grounding = document.unwrap_or(DEFAULT_KNOWLEDGE_BASE);
    let prompt = prompts::document_answer_prompt(grounding, question);
    gateway.complete(&prompt, config).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::ScriptedGateway;

    #[tokio::test]
    async fn ask_passes_the_question_through() {
        let gateway = ScriptedGateway::with_responses(vec!["An embedding is a vector."]);
        let answer = ask(
            "What is an embedding?",
            &GenerationConfig::default(),
            &gateway,
        )
        .await
        .unwrap();
        assert_eq!(answer, "An embedding is a vector.");
        assert_eq!(gateway.last_prompt(), Some("What is an embedding?".to_string()));
    }

    #[tokio::test]
    async fn document_answers_fall_back_to_default_knowledge_base() {
        let gateway = ScriptedGateway::with_responses(vec!["answer"]);
        answer_about_document(None, "What is covered?", &GenerationConfig::default(), &gateway)
            .await
            .unwrap();
        let prompt = gateway.last_prompt().unwrap();
        assert!(prompt.contains(DEFAULT_KNOWLEDGE_BASE));
        assert!(prompt.contains("What is covered?"));
    }

    #[tokio::test]
    async fn document_answers_ground_in_the_supplied_text() {
        let gateway = ScriptedGateway::with_responses(vec!["answer"]);
        answer_about_document(
            Some("Extracted PDF body."),
            "Summarize this.",
            &GenerationConfig::default(),
            &gateway,
        )
        .await
        .unwrap();
        let prompt = gateway.last_prompt().unwrap();
        assert!(prompt.contains("Extracted PDF body."));
        assert!(!prompt.contains(DEFAULT_KNOWLEDGE_BASE));
    }
}
