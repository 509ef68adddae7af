use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn is_user(&self) -> bool {
        self.role == Role::User
    }
}

/// Content of the last user-authored message, if the transcript ends with one.
pub fn last_user_text(transcript: &[Message]) -> Option<&str> {
    transcript
        .last()
        .filter(|m| m.is_user())
        .map(|m| m.content.as_str())
}

/// Render the transcript as numbered role-labelled lines for prompt context.
pub fn render_context(transcript: &[Message]) -> String {
    let mut context = String::new();
    for (i, msg) in transcript.iter().enumerate() {
        let role = match msg.role {
            Role::User => "User",
            Role::Assistant => "Assistant",
        };
        context.push_str(&format!("{}. [{}]: {}\n", i + 1, role, msg.content));
    }
    context
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_user_text_requires_trailing_user_message() {
        let transcript = vec![
            Message::assistant("Hello! How are you feeling today?"),
            Message::user("I have a headache"),
        ];
        assert_eq!(last_user_text(&transcript), Some("I have a headache"));

        let transcript = vec![Message::assistant("Hello!")];
        assert_eq!(last_user_text(&transcript), None);

        assert_eq!(last_user_text(&[]), None);
    }

    #[test]
    fn context_rendering_labels_roles() {
        let transcript = vec![
            Message::assistant("Hello!"),
            Message::user("I can't sleep"),
        ];
        let context = render_context(&transcript);
        assert!(context.contains("1. [Assistant]: Hello!"));
        assert!(context.contains("2. [User]: I can't sleep"));
    }
}
