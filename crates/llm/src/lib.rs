use anyhow::{Context, Result, anyhow};
use reqwest::Client as Http;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

#[derive(Clone, Debug)]
pub enum Provider {
    Gemini, // add more later
}

#[derive(Clone, Debug)]
pub struct Client {
    http: Http,
    provider: Provider,
    api_key: String,
    model: String,
    base_url: String, // provider-specific defaulted
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role { System, User, Assistant }

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

#[derive(Clone, Debug, Default)]
pub struct ChatOptions {
    pub temperature: Option<f32>,
}

impl Client {
    pub fn new(provider: Provider, api_key: String, model: String) -> Result<Self> {
        let base_url = match provider {
            Provider::Gemini => "https://generativelanguage.googleapis.com/v1beta".to_string(),
        };
        Ok(Self {
            http: Http::builder().pool_max_idle_per_host(8).build()?,
            provider, api_key, model, base_url,
        })
    }

    /// Convenience: pick up GOOGLE_API_KEY from env for Gemini.
    pub fn from_env_gemini(model: &str) -> Result<Self> {
        let key = std::env::var("GOOGLE_API_KEY").context("GOOGLE_API_KEY not set")?;
        Self::new(Provider::Gemini, key, model.to_string())
    }

    pub async fn chat(&self, messages: &[ChatMessage], opts: ChatOptions) -> Result<String> {
        match self.provider {
            Provider::Gemini => self.chat_gemini(messages, opts).await,
        }
    }

    async fn chat_gemini(&self, messages: &[ChatMessage], opts: ChatOptions) -> Result<String> {
        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);

        // Gemini keeps system text out of the contents list and calls the
        // assistant role "model"
        let system_text: Vec<&str> = messages.iter()
            .filter(|m| matches!(m.role, Role::System))
            .map(|m| m.content.as_str())
            .collect();
        let contents: Vec<Value> = messages.iter()
            .filter(|m| !matches!(m.role, Role::System))
            .map(|m| {
                let role = match m.role { Role::User => "user", _ => "model" };
                json!({ "role": role, "parts": [{ "text": m.content }] })
            }).collect();

        let mut body = json!({
            "contents": contents,
            "generationConfig": { "temperature": opts.temperature.unwrap_or(0.0) }
        });
        if !system_text.is_empty() {
            body.as_object_mut().unwrap().insert(
                "systemInstruction".into(),
                json!({ "parts": [{ "text": system_text.join("\n") }] })
            );
        }

        let resp = self.http.post(url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send().await
            .context("request failed")?;

        if !resp.status().is_success() {
            return Err(anyhow!("gemini {}: {}", resp.status(), resp.text().await.unwrap_or_default()));
        }

        let v: Value = resp.json().await.context("invalid json")?;
        let content = v.pointer("/candidates/0/content/parts/0/text")
            .and_then(|x| x.as_str())
            .ok_or_else(|| anyhow!("missing candidates[0].content.parts[0].text"))?;
        Ok(content.to_string())
    }

    /// Simple helper for one-shot prompts.
    pub async fn simple(&self, prompt: &str) -> Result<String> {
        let msgs = vec![ChatMessage{ role: Role::User, content: prompt.to_string() }];
        self.chat(&msgs, ChatOptions::default()).await
    }
}
