//! Print the resolved endpoints and optionally probe them.
//!
//! Usage:
//!   cargo run --example endpoints
//!   CHAT_COMPLETIONS_ENDPOINT=http://f5-proxy:9000 cargo run --example endpoints
//!   cargo run --example endpoints -- --check --chat "hello" --model llama3.2:3b
//!
//! Set RUST_LOG=debug to see the outgoing requests.

use clap::Parser;
use f5_security_api::{ChatMessage, ChatRequest, SecurityApi};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "endpoints", about = "Show and probe the security API endpoints")]
struct Cli {
    /// Hit the LlamaStack health route
    #[arg(long)]
    check: bool,

    /// Send one chat message to the chat endpoint
    #[arg(long)]
    chat: Option<String>,

    /// Model to use for --chat
    #[arg(long, default_value = "llama3.2:3b")]
    model: String,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let api = SecurityApi::from_env();

    println!("llamastack: {}", api.get_llamastack_endpoint());
    println!("chat:       {}", api.get_chat_endpoint());

    if cli.check {
        match api.get_llamastack_client().health().await {
            Ok(health) => println!("health:     {}", health.status),
            Err(e) => {
                eprintln!("error: {e}");
                std::process::exit(1);
            }
        }
    }

    if let Some(prompt) = cli.chat {
        let request = ChatRequest::new(cli.model, vec![ChatMessage::user(prompt)]);
        match api.get_openai_client().chat_completion(&request).await {
            Ok(resp) => println!("{}", resp.text().unwrap_or_default()),
            Err(e) => {
                eprintln!("error: {e}");
                std::process::exit(1);
            }
        }
    }
}
