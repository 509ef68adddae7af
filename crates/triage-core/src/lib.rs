pub mod classifier;
pub mod handlers;
pub mod ports;
pub mod router;
pub mod transcript;

pub use classifier::Category;
pub use ports::GeneratorPort;
pub use router::Handler;
pub use transcript::{Message, Role};

use anyhow::{bail, Result};
use tracing::info;

/// Headless turn engine: takes the session transcript, returns it with the
/// classification annotation and the branch reply appended.
///
/// The generator port is injected at construction so callers (and tests) pick
/// the concrete backend. Each stage produces staged messages; nothing is
/// joined to the transcript until the whole turn has succeeded, so a failed
/// generator call leaves the caller's transcript untouched.
pub struct TurnEngine<G: GeneratorPort> {
    generator: G,
}

impl<G: GeneratorPort> TurnEngine<G> {
    pub fn new(generator: G) -> Self {
        Self { generator }
    }

    /// Run one turn. `prior` must be non-empty and end with a user message;
    /// the caller appends the new utterance before calling.
    pub async fn run_turn(&self, prior: &[transcript::Message]) -> Result<Vec<transcript::Message>> {
        if prior.is_empty() {
            bail!("transcript is empty; seed it with a greeting and a user message");
        }
        let Some(symptom) = transcript::last_user_text(prior) else {
            bail!("transcript must end with a user-authored message");
        };
        let symptom = symptom.to_string();

        let (category, annotation) = classifier::classify(&self.generator, &symptom).await?;
        let handler = router::route(category);
        info!(%category, ?handler, "routing turn");

        let reply = match handler {
            router::Handler::General => handlers::general_reply(&symptom),
            router::Handler::Emergency => handlers::emergency_reply(&symptom),
            router::Handler::MentalHealth => {
                // The companion sees the annotation as part of the current
                // conversation, staged but not yet committed.
                let mut staged = prior.to_vec();
                staged.push(annotation.clone());
                handlers::mental_health_reply(&self.generator, &staged, &symptom).await?
            }
        };

        let mut transcript = prior.to_vec();
        transcript.push(annotation);
        transcript.push(reply);
        Ok(transcript)
    }
}

// Simple in-crate test double, usable by downstream crates as well
pub mod mocks {
    use super::ports::GeneratorPort;
    use anyhow::{anyhow, Result};
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// Generator that plays back a fixed script of replies (or failures) and
    /// counts how many times it was called.
    pub struct ScriptedGenerator {
        script: Mutex<VecDeque<Result<String, String>>>,
        calls: AtomicUsize,
    }

    impl ScriptedGenerator {
        pub fn new() -> Self {
            Self {
                script: Mutex::new(VecDeque::new()),
                calls: AtomicUsize::new(0),
            }
        }

        pub fn replies<I, S>(replies: I) -> Self
        where
            I: IntoIterator<Item = S>,
            S: Into<String>,
        {
            let gen = Self::new();
            for r in replies {
                gen.push_reply(r);
            }
            gen
        }

        pub fn push_reply(&self, reply: impl Into<String>) {
            self.script.lock().unwrap().push_back(Ok(reply.into()));
        }

        pub fn push_failure(&self, error: impl Into<String>) {
            self.script.lock().unwrap().push_back(Err(error.into()));
        }

        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl Default for ScriptedGenerator {
        fn default() -> Self {
            Self::new()
        }
    }

    #[async_trait]
    impl GeneratorPort for ScriptedGenerator {
        async fn generate(&self, _prompt: &str) -> Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match self.script.lock().unwrap().pop_front() {
                Some(Ok(reply)) => Ok(reply),
                Some(Err(e)) => Err(anyhow!(e)),
                None => Err(anyhow!("scripted generator exhausted")),
            }
        }
    }
}
