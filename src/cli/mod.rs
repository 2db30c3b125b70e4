//! CLI entry point for Vellum.

use std::io::{BufRead, Write};
use std::path::Path;

use clap::{Parser, Subcommand};

use crate::config::VellumConfig;
use crate::editor::{DisplayState, EditorController, SubmitOutcome};
use crate::gateway::anthropic::AnthropicGateway;
use crate::gateway::relay_client::RelayGateway;
use crate::gateway::ModelGateway;
use crate::relay::{self, RelayState};

/// Vellum CLI
#[derive(Parser, Debug)]
#[command(name = "vellum", version, about = "Vellum — conversational SVG generation")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Interactive generation session
    Chat(ChatArgs),
    /// Run the HTTP relay
    Serve(ServeArgs),
}

/// Arguments for the `chat` subcommand.
#[derive(Parser, Debug)]
pub struct ChatArgs {
    /// Model to use
    #[arg(short, long)]
    pub model: Option<String>,

    /// Go through a relay endpoint instead of calling the backend directly
    #[arg(long)]
    pub relay_url: Option<String>,
}

/// Arguments for the `serve` subcommand.
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(short, long, default_value = "3000")]
    pub port: u16,
}

/// Run the relay server.
pub async fn handle_serve(args: ServeArgs) -> crate::error::Result<()> {
    let config = VellumConfig::from_env();
    if !config.has_credentials() {
        eprintln!("warning: ANTHROPIC_API_KEY is not set; every call will fail upstream");
    }
    relay::serve(RelayState::from_config(&config), args.port).await
}

/// Run the interactive chat loop on stdin/stdout.
pub async fn handle_chat(args: ChatArgs) -> crate::error::Result<()> {
    let mut config = VellumConfig::from_env();
    if let Some(model) = args.model {
        config.model = model;
    }

    let gateway: Box<dyn ModelGateway> =
        match args.relay_url.or_else(|| config.relay_url.clone()) {
            Some(url) => Box::new(RelayGateway::new(url)),
            None => Box::new(AnthropicGateway::from_config(&config)),
        };
    let mut editor = EditorController::new(gateway);

    println!("Describe what graphic you'd like to create (:prev :next :export :quit)");

    let stdin = std::io::stdin();
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim_end();

        match line {
            ":quit" | ":q" => break,
            ":prev" => editor.back(),
            ":next" => editor.forward(),
            _ if line.starts_with(":export") => {
                let dir = line.strip_prefix(":export").unwrap_or("").trim();
                let dir = if dir.is_empty() { "." } else { dir };
                match editor.export() {
                    Some(file) => {
                        let path = file.write_to(Path::new(dir))?;
                        println!("saved {}", path.display());
                    }
                    None => println!("nothing to export yet"),
                }
                continue;
            }
            _ => {
                match editor.submit(line).await {
                    SubmitOutcome::Rejected => continue,
                    SubmitOutcome::Committed { .. } | SubmitOutcome::Failed => {}
                }
                // Echo the assistant's latest turn (status or failure).
                if let Some(turn) = editor.transcript().last() {
                    println!("{}", turn.content);
                }
            }
        }

        render(&editor.display());
    }

    Ok(())
}

fn render(state: &DisplayState) {
    match state {
        DisplayState::Loading => println!("Generating SVG..."),
        DisplayState::Artifact { svg, index, total } => {
            println!("--- version {}/{} ---", index + 1, total);
            println!("{svg}");
        }
        DisplayState::Empty => println!("Describe what graphic you'd like to create..."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_chat_with_relay_url() {
        let cli =
            Cli::try_parse_from(["vellum", "chat", "--relay-url", "http://localhost:3000/api/chat"])
                .unwrap();
        match cli.command {
            Commands::Chat(args) => {
                assert_eq!(
                    args.relay_url.as_deref(),
                    Some("http://localhost:3000/api/chat")
                );
            }
            other => panic!("expected Chat, got {other:?}"),
        }
    }

    #[test]
    fn parse_serve_with_port() {
        let cli = Cli::try_parse_from(["vellum", "serve", "--port", "8080"]).unwrap();
        match cli.command {
            Commands::Serve(args) => assert_eq!(args.port, 8080),
            other => panic!("expected Serve, got {other:?}"),
        }
    }
}
