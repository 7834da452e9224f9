use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static SCORE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").expect("valid regex"));

/// Aggregated result of a completed interview.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct InterviewSummary {
    /// Average of the extracted scores, 0.0 when nothing was parseable.
    pub average_score: f64,
    /// Feedback lines kept verbatim, in answer order.
    pub feedback: Vec<String>,
    /// How many evaluations contributed to the average.
    pub scored: usize,
}

impl InterviewSummary {
    /// Human-readable summary block.
    pub fn render(&self) -> String {
        let mut out = format!(
            "Final Interview Score: {:.1}/10\n\nFeedback Summary:\n",
            self.average_score
        );
        for line in &self.feedback {
            out.push_str(&format!("- {}\n", line));
        }
        out
    }
}

/// Aggregate raw evaluation texts into a summary.
///
/// Per evaluation: the first line containing "Score:" yields the score, the
/// first line containing "Feedback:" is kept verbatim. An evaluation missing
/// either line (or whose score line has no number) is skipped entirely and
/// contributes to neither the average nor the feedback list. Pure function;
/// safe to re-run.
pub fn summarize(evaluations: &[String]) -> InterviewSummary {
    let mut scores: Vec<u32> = Vec::new();
    let mut feedback: Vec<String> = Vec::new();

    for text in evaluations {
        let score_line = text.lines().find(|line| line.contains("Score:"));
        let feedback_line = text.lines().find(|line| line.contains("Feedback:"));
        let (Some(score_line), Some(feedback_line)) = (score_line, feedback_line) else {
            debug!("Skipping evaluation without score/feedback lines");
            continue;
        };
        let Some(score) = extract_score(score_line) else {
            debug!("Skipping evaluation with unparseable score line");
            continue;
        };
        scores.push(score);
        feedback.push(feedback_line.to_string());
    }

    let average_score = if scores.is_empty() {
        0.0
    } else {
        scores.iter().sum::<u32>() as f64 / scores.len() as f64
    };

    InterviewSummary {
        average_score,
        feedback,
        scored: scores.len(),
    }
}

/// First run of digits on the line, so "Score: 8 out of 10" reads as 8.
fn extract_score(line: &str) -> Option<u32> {
    SCORE_RE.find(line).and_then(|m| m.as_str().parse().ok())
}
