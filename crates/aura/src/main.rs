mod config;
mod generator;

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use generator::GeminiGenerator;
use triage_core::transcript::Message;
use triage_core::TurnEngine;

const GREETING: &str = "Hello! I'm Aura. I'm here to listen. How are you feeling today?";
const DISCLAIMER: &str = "Aura is an AI assistant and not a substitute for professional medical \
advice, diagnosis, or treatment. If you are in a crisis, please contact emergency services immediately.";

#[tokio::main]
async fn main() -> Result<()> {
    config::load_dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let api_key = match config::load_api_key() {
        Ok(key) => key,
        Err(_) => {
            eprintln!("Error: GOOGLE_API_KEY environment variable not set");
            eprintln!("Please run: export GOOGLE_API_KEY=your_key_here");
            return Ok(());
        }
    };

    let model = config::model();
    info!(%model, "starting session");
    let client = llm::Client::new(llm::Provider::Gemini, api_key, model)?;
    let engine = TurnEngine::new(GeminiGenerator::new(client));

    run_session(&engine).await
}

/// Session loop: owns the accumulated transcript, seeds the greeting, and
/// merges each turn's result back in only when the whole turn succeeded.
async fn run_session(engine: &TurnEngine<GeminiGenerator>) -> Result<()> {
    let mut stdout = tokio::io::stdout();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    let mut transcript = vec![Message::assistant(GREETING)];

    stdout.write_all(format!("{}\n\n", DISCLAIMER).as_bytes()).await?;
    stdout.write_all(format!("Aura: {}\n", GREETING).as_bytes()).await?;
    stdout.write_all(b"You: ").await?;
    stdout.flush().await?;

    while let Some(line) = lines.next_line().await? {
        let utterance = line.trim();
        if utterance.is_empty() {
            stdout.write_all(b"You: ").await?;
            stdout.flush().await?;
            continue;
        }
        if utterance == "/quit" || utterance == "/exit" {
            break;
        }

        let mut prior = transcript.clone();
        prior.push(Message::user(utterance));

        match engine.run_turn(&prior).await {
            Ok(updated) => {
                // Everything past the prior transcript is new output
                for msg in &updated[prior.len()..] {
                    stdout.write_all(format!("Aura: {}\n", msg.content).as_bytes()).await?;
                }
                transcript = updated;
            }
            Err(e) => {
                // Keep the pre-turn transcript; nothing was committed
                error!(error = %e, "turn failed");
                stdout
                    .write_all(b"Aura: Sorry, something went wrong on my end. Please try again.\n")
                    .await?;
            }
        }

        stdout.write_all(b"You: ").await?;
        stdout.flush().await?;
    }

    Ok(())
}
