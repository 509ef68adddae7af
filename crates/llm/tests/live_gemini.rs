use llm::{ChatMessage, ChatOptions, Client, Role};

fn init_env() {
    // Load .env from workspace root (two levels up from tests)
    let _ = dotenv::from_path("../../.env");
}

#[tokio::test]
#[ignore] // needs GOOGLE_API_KEY, run manually with --ignored
async fn basic_call() {
    init_env();
    let cli = Client::from_env_gemini("gemini-1.5-flash-latest").unwrap();
    let out = cli.simple("Say OK.").await.unwrap();
    println!("Response: {}", out);
    assert!(!out.trim().is_empty());
}

#[tokio::test]
#[ignore] // needs GOOGLE_API_KEY, run manually with --ignored
async fn system_instruction_respected() {
    init_env();
    let cli = Client::from_env_gemini("gemini-1.5-flash-latest").unwrap();
    let msgs = vec![
        ChatMessage { role: Role::System, content: "Reply with exactly one word: OK".into() },
        ChatMessage { role: Role::User, content: "ack".into() },
    ];
    let out = cli.chat(&msgs, ChatOptions { temperature: Some(0.0) }).await.unwrap();
    println!("Response: {}", out);
    assert!(!out.trim().is_empty());
}
