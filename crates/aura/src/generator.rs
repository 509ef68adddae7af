use anyhow::Result;
use async_trait::async_trait;
use llm::{ChatMessage, ChatOptions, Role};
use triage_core::GeneratorPort;

/// Adapts the Gemini chat client to the engine's generator port.
pub struct GeminiGenerator {
    client: llm::Client,
    temperature: f32,
}

impl GeminiGenerator {
    pub fn new(client: llm::Client) -> Self {
        Self {
            client,
            temperature: 0.7,
        }
    }
}

#[async_trait]
impl GeneratorPort for GeminiGenerator {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let messages = vec![ChatMessage {
            role: Role::User,
            content: prompt.to_string(),
        }];
        let options = ChatOptions {
            temperature: Some(self.temperature),
        };
        self.client.chat(&messages, options).await
    }
}
