use anyhow::Result;
use async_trait::async_trait;

/// External boundary to the hosted text-generation service.
///
/// One prompt in, one completion out. No streaming, no retries; timeout
/// policy belongs to the caller that constructs the concrete port.
#[async_trait]
pub trait GeneratorPort: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String>;
}

// Lets tests and callers share one port between the engine and themselves.
#[async_trait]
impl<G: GeneratorPort + ?Sized> GeneratorPort for std::sync::Arc<G> {
    async fn generate(&self, prompt: &str) -> Result<String> {
        (**self).generate(prompt).await
    }
}
