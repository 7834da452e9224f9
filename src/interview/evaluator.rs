use log::info;

use super::AnswerInput;
use crate::error::Result;
use crate::llm::{CompletionGateway, GenerationConfig};
use crate::prompts;

/// Score one answer against its question.
///
/// Returns the raw evaluation text, expected (but not guaranteed) to follow
/// `Score: X. Feedback: ...`; the aggregator tolerates deviation. A gateway
/// failure propagates so the caller can leave its own state untouched.
pub async fn evaluate_answer(
    question: &str,
    answer: &AnswerInput,
    config: &GenerationConfig,
    gateway: &dyn CompletionGateway,
) -> Result<String> {
    info!("🧠 Evaluating {:?} answer", answer.source);
    let prompt = prompts::evaluation_prompt(question, &answer.text);
    let evaluation = gateway.complete(&prompt, config).await?;
    Ok(evaluation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::ScriptedGateway;

    #[tokio::test]
    async fn evaluation_returns_raw_model_text() {
        let gateway = ScriptedGateway::with_responses(vec!["Score: 9. Feedback: strong answer."]);
        let answer = AnswerInput::transcribed_audio("spoken answer");
        let evaluation = evaluate_answer(
            "What is a token?",
            &answer,
            &GenerationConfig::default(),
            &gateway,
        )
        .await
        .unwrap();
        assert_eq!(evaluation, "Score: 9. Feedback: strong answer.");
    }
}
