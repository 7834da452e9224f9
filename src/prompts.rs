//! Prompt assembly for every completion task the tutor issues.
//!
//! Pure templating over profile fields and task parameters; no I/O. Each
//! function embeds the formatting directives the downstream parsers rely on
//! (comma-separated subtopic lists, numbered question lists, the
//! `Score: X. Feedback: ...` shape), so any change here must be mirrored in
//! the corresponding parser.

use crate::interview::InterviewSettings;
use crate::profile::Profile;

/// Prompt for the one-off personality/learning assessment of a freshly
/// submitted profile.
pub fn assessment_prompt(profile: &Profile) -> String {
    let mut prompt = String::from(
        "Based on the following user profile details, provide a comprehensive assessment that includes:\n\n\
         1. An evaluation of the user's personality type from their self-description.\n\
         2. An analysis of their language style and tone as inferred from their writing sample.\n\
         3. A discussion of their learning goals and current level, including actionable recommendations \
         on which topics to focus on and steps to achieve their goals.\n",
    );
    if profile.resume_text.is_some() {
        prompt.push_str("4. A brief summary of the important points from the resume.\n");
    }
    prompt.push('\n');

    prompt.push_str(&format!("Name: {}\n", profile.name));
    prompt.push_str(&format!("Age: {}\n", profile.age));
    prompt.push_str(&format!("Personality Description: {}\n", profile.personality));
    prompt.push_str(&format!(
        "Writing Sample (Tone & Language Style): {}\n",
        profile.tone_sample
    ));
    prompt.push_str(&format!("Learning Goals: {}\n", profile.learning_goals));
    prompt.push_str(&format!("Current Level: {}\n", profile.level.as_str()));
    prompt.push_str(&format!("Topics of Interest: {}\n", profile.topics));
    if let Some(resume) = &profile.resume_text {
        prompt.push_str(&format!("Resume Content: {}\n", resume));
    }

    prompt.push_str(
        "\nPlease provide a detailed, insightful analysis along with recommendations on how the user \
         can reach their learning goals.",
    );
    prompt
}

/// Prompt for expanding one topic into its subtopic list. The response is
/// parsed as a comma-separated list.
pub fn subtopics_prompt(topic: &str) -> String {
    format!(
        "Generate 5 relevant subtopics for the learning topic: '{}'. \
         Provide them as a comma-separated list.",
        topic
    )
}

/// Prompt for a lesson on one (topic, subtopic) pair, tailored to the
/// learner's tone, languages and personality.
pub fn lesson_prompt(profile: &Profile, topic: &str, subtopic: &str) -> String {
    let assessment = profile.assessment.as_deref().unwrap_or("N/A");
    format!(
        "Based on the following user profile details:\n\
         Name: {name}\n\
         Personality: {personality}\n\
         Hobby/Tone Sample: {tone}\n\
         Learning Goals: {goals}\n\
         Current Level: {level}\n\
         Languages: {languages}\n\n\
         Provide a comprehensive lesson on the topic '{topic}' specifically focusing on the subtopic '{subtopic}'. \
         The lesson should match the user's language style, include real-life examples related to their hobby, \
         and offer actionable recommendations to help the user feel comfortable and engaged in their learning journey. \
         Note: The hobby is only for tone reference, while the topics to learn are those provided above. \
         If the user mentions being fun loving, include small humour. Also, provide examples, idioms, and proverbs \
         in all the specified languages to make the content relatable. Do not add idioms/proverbs/jokes solely for \
         content; make it very relatable. In case English is not mentioned in the languages, provide the content in \
         the first language provided. Provide detailed explanations and examples to help the user understand the \
         topic better. Based on the assessment below, highlight strengths and weaknesses while designing a learning \
         curve appropriate for the user's age.\n\
         Assessment: {assessment}",
        name = profile.name,
        personality = profile.personality,
        tone = profile.tone_sample,
        goals = profile.learning_goals,
        level = profile.level.as_str(),
        languages = profile.languages_label(),
        topic = topic,
        subtopic = subtopic,
        assessment = assessment,
    )
}

/// Prompt for generating the interview question list. The response is parsed
/// as one question per line.
pub fn interview_questions_prompt(
    context: &[String],
    count: usize,
    settings: &InterviewSettings,
) -> String {
    let mut prompt = String::from("Based on the following subtopics:\n");
    for item in context {
        prompt.push_str(&format!("- {}\n", item));
    }
    prompt.push_str(&format!(
        "\nGenerate {count} interview questions for a candidate based on the above topics. \
         Return them as a numbered list, one question per line. \
         The questions should be of {difficulty} difficulty and the interviewer should be {behavior}. \
         The questions should test the candidate's understanding of the topics, their ability to apply \
         the concepts to real-world scenarios, and should be challenging but not overly complex based on \
         the user's level and difficulty preference. The questions should also test the candidate's \
         problem-solving skills, creativity, and ability to think on their feet.",
        count = count,
        difficulty = settings.difficulty.as_str(),
        behavior = settings.behavior.as_str(),
    ));
    prompt
}

/// Prompt for scoring one answer against its question. The response is
/// expected in the literal shape `Score: X. Feedback: ...`.
pub fn evaluation_prompt(question: &str, answer: &str) -> String {
    format!(
        "Interview Question: {}\n\n\
         Candidate Answer: {}\n\n\
         Evaluate the candidate's answer on a scale of 1 to 10. \
         Provide a brief explanation of what was strong and what could be improved. \
         Format the response as: 'Score: X. Feedback: ...'",
        question, answer
    )
}

/// Prompt for answering a question grounded in a document (or the default
/// knowledge base).
pub fn document_answer_prompt(document: &str, question: &str) -> String {
    format!(
        "Given the following text:\n\n{}\n\nAnswer the following question in detail:\n{}",
        document, question
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interview::{Behavior, Difficulty};
    use crate::test_util::sample_profile;

    #[test]
    fn assessment_prompt_embeds_profile_fields() {
        let profile = sample_profile();
        let prompt = assessment_prompt(&profile);
        assert!(prompt.contains("Name: Asha"));
        assert!(prompt.contains("Personality Description: curious and fun loving"));
        assert!(prompt.contains("Current Level: Beginner"));
        assert!(prompt.contains("Topics of Interest: Chatbots, Data Science"));
        assert!(!prompt.contains("Resume Content"));
    }

    #[test]
    fn assessment_prompt_includes_resume_when_present() {
        let mut profile = sample_profile();
        profile.resume_text = Some("Three years as a data analyst.".to_string());
        let prompt = assessment_prompt(&profile);
        assert!(prompt.contains("summary of the important points from the resume"));
        assert!(prompt.contains("Resume Content: Three years as a data analyst."));
    }

    #[test]
    fn subtopics_prompt_requests_comma_separated_list() {
        let prompt = subtopics_prompt("Chatbots");
        assert!(prompt.contains("'Chatbots'"));
        assert!(prompt.contains("comma-separated list"));
    }

    #[test]
    fn lesson_prompt_carries_tone_and_languages() {
        let profile = sample_profile();
        let prompt = lesson_prompt(&profile, "Chatbots", "Intent recognition");
        assert!(prompt.contains("'Chatbots'"));
        assert!(prompt.contains("'Intent recognition'"));
        assert!(prompt.contains("Languages: English, Hindi"));
        assert!(prompt.contains("idioms"));
    }

    #[test]
    fn question_prompt_carries_settings_and_context() {
        let settings = InterviewSettings {
            difficulty: Difficulty::Hard,
            behavior: Behavior::Aggressive,
        };
        let context = vec!["Intent recognition".to_string(), "Dialog flows".to_string()];
        let prompt = interview_questions_prompt(&context, 5, &settings);
        assert!(prompt.contains("- Intent recognition"));
        assert!(prompt.contains("- Dialog flows"));
        assert!(prompt.contains("Generate 5 interview questions"));
        assert!(prompt.contains("Hard difficulty"));
        assert!(prompt.contains("Aggressive"));
    }

    #[test]
    fn evaluation_prompt_fixes_output_shape() {
        let prompt = evaluation_prompt("What is a token?", "A unit of text.");
        assert!(prompt.contains("Interview Question: What is a token?"));
        assert!(prompt.contains("Candidate Answer: A unit of text."));
        assert!(prompt.contains("'Score: X. Feedback: ...'"));
    }
}
