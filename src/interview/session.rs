use log::{info, warn};
use serde::{Deserialize, Serialize};

use super::evaluator;
use super::summary::{summarize, InterviewSummary};
use super::{AnswerInput, InterviewSettings};
use crate::error::{Result, TutorError};
use crate::llm::{CompletionGateway, GenerationConfig};
use crate::prompts;

/// Number of questions requested per interview. The model is asked for this
/// many but the parsed list is taken at whatever length comes back.
pub const QUESTION_COUNT: usize = 5;

/// Generic question set substituted when question generation fails or the
/// model returns a conversational preamble instead of a clean list.
pub const FALLBACK_QUESTIONS: [&str; 3] = [
    "What is one key takeaway from the lesson?",
    "How would you apply the concepts learned to a real-world scenario?",
    "Can you explain a challenging aspect of the lesson in your own words?",
];

/// Tagged interview state. `InProgress` carries the whole session record so
/// no field can exist without the state that owns it.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub enum InterviewState {
    #[default]
    NotStarted,
    InProgress {
        questions: Vec<String>,
        current_index: usize,
        evaluations: Vec<String>,
        settings: InterviewSettings,
    },
    Completed {
        questions: Vec<String>,
        evaluations: Vec<String>,
        settings: InterviewSettings,
    },
}

/// The interview state machine: NotStarted -> InProgress -> Completed.
///
/// One answer at a time is evaluated and appended; the cursor advances only
/// after a successful evaluation, so a failed call leaves the same question
/// pending for a retry. Starting again from any state resets everything
/// atomically.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct InterviewSession {
    state: InterviewState,
}

impl InterviewSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &InterviewState {
        &self.state
    }

    /// Generate the question list and move to `InProgress`.
    ///
    /// `context` is the subtopic list of the topic the interview covers.
    /// Generation failure, an empty parse, or any line containing the
    /// "Certainly!" preamble marker discards the generated list in favor of
    /// [`FALLBACK_QUESTIONS`].
    pub async fn start(
        &mut self,
        settings: InterviewSettings,
        context: &[String],
        config: &GenerationConfig,
        gateway: &dyn CompletionGateway,
    ) -> Result<()> {
        info!(
            "🎬 Starting interview ({} difficulty, {} interviewer)",
            settings.difficulty.as_str(),
            settings.behavior.as_str()
        );

        let prompt = prompts::interview_questions_prompt(context, QUESTION_COUNT, &settings);
        let raw = match gateway.complete(&prompt, config).await {
            Ok(text) => text,
            Err(e) => {
                warn!("Question generation failed, using fallback set: {}", e);
                String::new()
            }
        };

        let questions = parse_questions(&raw);
        let questions = if questions.is_empty() || questions.iter().any(|q| q.contains("Certainly!"))
        {
            warn!("Generated question list unusable, substituting generic questions");
            FALLBACK_QUESTIONS.iter().map(|q| q.to_string()).collect()
        } else {
            questions
        };

        info!("✅ Interview started with {} question(s)", questions.len());
        self.state = InterviewState::InProgress {
            questions,
            current_index: 0,
            evaluations: Vec::new(),
            settings,
        };
        Ok(())
    }

    /// Evaluate the answer to the current question and advance the cursor.
    ///
    /// Returns the raw evaluation text. If the evaluator call fails the
    /// session is left exactly as it was so the same question can be
    /// retried. Answering the last question flips the state to `Completed`.
    pub async fn submit_answer(
        &mut self,
        answer: &AnswerInput,
        config: &GenerationConfig,
        gateway: &dyn CompletionGateway,
    ) -> Result<String> {
        let question = match &self.state {
            InterviewState::InProgress {
                questions,
                current_index,
                evaluations,
                ..
            } => {
                assert_eq!(
                    evaluations.len(),
                    *current_index,
                    "evaluation log out of step with question cursor"
                );
                questions[*current_index].clone()
            }
            InterviewState::NotStarted => {
                return Err(TutorError::Precondition(
                    "answer submitted before the interview was started".to_string(),
                ))
            }
            InterviewState::Completed { .. } => {
                return Err(TutorError::Precondition(
                    "answer submitted after the interview completed".to_string(),
                ))
            }
        };

        // Evaluate before touching any state: a failure here must not
        // advance the cursor.
        let evaluation = evaluator::evaluate_answer(&question, answer, config, gateway).await?;

        if let InterviewState::InProgress {
            questions,
            current_index,
            mut evaluations,
            settings,
        } = std::mem::take(&mut self.state)
        {
            evaluations.push(evaluation.clone());
            let current_index = current_index + 1;
            self.state = if current_index == questions.len() {
                info!("🏁 Interview completed after {} answer(s)", evaluations.len());
                InterviewState::Completed {
                    questions,
                    evaluations,
                    settings,
                }
            } else {
                InterviewState::InProgress {
                    questions,
                    current_index,
                    evaluations,
                    settings,
                }
            };
        }

        Ok(evaluation)
    }

    /// The question awaiting an answer, if the interview is in progress.
    pub fn current_question(&self) -> Option<&str> {
        match &self.state {
            InterviewState::InProgress {
                questions,
                current_index,
                ..
            } => questions.get(*current_index).map(String::as_str),
            _ => None,
        }
    }

    /// (answered, total) for a running or completed interview.
    pub fn progress(&self) -> Option<(usize, usize)> {
        match &self.state {
            InterviewState::NotStarted => None,
            InterviewState::InProgress {
                questions,
                current_index,
                ..
            } => Some((*current_index, questions.len())),
            InterviewState::Completed {
                questions,
                evaluations,
                ..
            } => {
                debug_assert_eq!(evaluations.len(), questions.len());
                Some((questions.len(), questions.len()))
            }
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self.state, InterviewState::Completed { .. })
    }

    pub fn settings(&self) -> Option<&InterviewSettings> {
        match &self.state {
            InterviewState::NotStarted => None,
            InterviewState::InProgress { settings, .. }
            | InterviewState::Completed { settings, .. } => Some(settings),
        }
    }

    pub fn evaluations(&self) -> &[String] {
        match &self.state {
            InterviewState::NotStarted => &[],
            InterviewState::InProgress { evaluations, .. }
            | InterviewState::Completed { evaluations, .. } => evaluations,
        }
    }

    /// Aggregate the completed interview into a summary score and feedback
    /// list. Calling before completion is a sequencing error.
    pub fn summary(&self) -> Result<InterviewSummary> {
        match &self.state {
            InterviewState::Completed { evaluations, .. } => Ok(summarize(evaluations)),
            _ => Err(TutorError::Precondition(
                "summary requested before the interview completed".to_string(),
            )),
        }
    }
}

fn parse_questions(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
