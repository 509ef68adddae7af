use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use crate::ports::GeneratorPort;
use crate::transcript::Message;

/// Triage category assigned to a user utterance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    General,
    Emergency,
    MentalHealth,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::General => write!(f, "general"),
            Category::Emergency => write!(f, "emergency"),
            Category::MentalHealth => write!(f, "mental health"),
        }
    }
}

/// Parse a free-text classification reply into a category.
///
/// First match wins, case-insensitive, against the trimmed reply:
/// "general", then "emergency", then "mental". Anything else (including an
/// empty reply) falls back to General — an off-format reply is treated as
/// non-urgent rather than as a failure.
pub fn parse_category(reply: &str) -> Category {
    let reply = reply.trim().to_lowercase();
    if reply.contains("general") {
        Category::General
    } else if reply.contains("emergency") {
        Category::Emergency
    } else if reply.contains("mental") {
        Category::MentalHealth
    } else {
        Category::General
    }
}

fn classification_prompt(symptom: &str) -> String {
    format!(
        "You are a helpful medical assistant. Classify the user's statement into one of the following categories: \
        'General', 'Emergency', or 'Mental Health'. Your response should be a single word. \
        For example, if the user says 'I have a fever', you should respond with 'General'. \
        If the user says 'I'm having chest pains', you should respond with 'Emergency'. \
        If the user says 'I feel anxious and sad', you should respond with 'Mental Health'.\
        \n\nUser's statement: \"{}\"",
        symptom
    )
}

/// Classify the symptom via one generator call.
///
/// Returns the category together with the "thinking" annotation message the
/// caller stages onto the transcript.
pub async fn classify<G: GeneratorPort>(generator: &G, symptom: &str) -> Result<(Category, Message)> {
    let reply = generator.generate(&classification_prompt(symptom)).await?;
    let category = parse_category(&reply);
    debug!(%category, raw = %reply.trim(), "classified symptom");

    let annotation = Message::assistant(format!(
        "(Thinking... It seems like this might be a {} concern.)",
        category
    ));
    Ok((category, annotation))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_single_words() {
        assert_eq!(parse_category("General"), Category::General);
        assert_eq!(parse_category("Emergency"), Category::Emergency);
        assert_eq!(parse_category("Mental Health"), Category::MentalHealth);
    }

    #[test]
    fn priority_order_general_wins() {
        // Both substrings present: the "general" check runs first.
        assert_eq!(parse_category("Emergency, not General"), Category::General);
        assert_eq!(parse_category("general or emergency?"), Category::General);
    }

    #[test]
    fn priority_order_emergency_beats_mental() {
        assert_eq!(
            parse_category("emergency with a mental component"),
            Category::Emergency
        );
    }

    #[test]
    fn case_and_whitespace_insensitive() {
        assert_eq!(parse_category("  EMERGENCY  \n"), Category::Emergency);
        assert_eq!(parse_category("mental HEALTH"), Category::MentalHealth);
    }

    #[test]
    fn fallback_on_garbled_reply() {
        assert_eq!(parse_category("I'm not sure"), Category::General);
        assert_eq!(parse_category(""), Category::General);
        assert_eq!(parse_category("   "), Category::General);
    }

    #[test]
    fn annotation_renders_category_with_spaces() {
        assert_eq!(Category::MentalHealth.to_string(), "mental health");
        assert_eq!(Category::General.to_string(), "general");
    }
}
