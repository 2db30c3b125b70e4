//! Vellum CLI binary entry point.

use clap::Parser;
use vellum::cli::{Cli, Commands};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("vellum=info")),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Chat(args) => vellum::cli::handle_chat(args).await,
        Commands::Serve(args) => vellum::cli::handle_serve(args).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
