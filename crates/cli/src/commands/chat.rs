//! `parley chat`: Interactive or single-message chat mode.

use std::io::Write;
use parley_agent::ChatService;
use parley_config::AppConfig;
use parley_core::message::ConversationId;
use tokio::io::{self, AsyncBufReadExt, BufReader};

pub async fn run(message: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;
    let chat = ChatService::from_config(&config);

    if let Some(msg) = message {
        // Single message mode
        eprint!("  Thinking...");
        let reply = chat.respond(&msg, None).await?;
        eprint!("\r              \r");
        println!("{}", reply.response);
        return Ok(());
    }

    // Interactive mode
    println!();
    println!("  Parley: Interactive Mode");
    println!();
    println!("  Provider:  {}", config.provider);
    println!("  Model:     {}", config.model);
    println!(
        "  Knowledge: {}",
        if config.knowledge.enabled { "wikipedia" } else { "disabled" }
    );
    println!();
    println!("  Type your message and press Enter.");
    println!("  Type 'exit' or Ctrl+C to quit.");
    println!();

    let mut lines = BufReader::new(io::stdin()).lines();
    let mut conversation: Option<ConversationId> = None;

    print!("  You > ");
    std::io::stdout().flush()?;

    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if is_exit(line) {
            break;
        }
        if line.is_empty() {
            print!("  You > ");
            std::io::stdout().flush()?;
            continue;
        }

        eprint!("  ...");
        match chat.respond(line, conversation.clone()).await {
            Ok(reply) => {
                eprint!("\r     \r");
                println!();
                for l in reply.response.lines() {
                    println!("  Parley > {l}");
                }
                for source in &reply.sources {
                    println!("  Source:  {source}");
                }
                println!();
                if reply.conversation_id.is_some() {
                    conversation = reply.conversation_id;
                }
            }
            Err(e) => {
                eprint!("\r     \r");
                eprintln!("  [Error] {e}");
                println!();
            }
        }

        print!("  You > ");
        std::io::stdout().flush()?;
    }

    println!();
    println!("  Goodbye!");
    println!();

    Ok(())
}

fn is_exit(line: &str) -> bool {
    matches!(line, "exit" | "quit" | "/exit" | "/quit" | ":q")
}
