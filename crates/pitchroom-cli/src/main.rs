//! Pitchroom CLI - Command-line interface for the project-intake pipeline.

use clap::Parser;
use pitchroom_cli::commands;
use pitchroom_cli::{Cli, Command};
use pitchroom_store::FsStore;

#[tokio::main]
async fn main() {
    // Log to stderr so piped CSV output stays clean
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let store = FsStore::new(&cli.store_dir)?;

    match cli.command {
        Command::Submit(args) => commands::execute_submit(args, &store).await?,
        Command::List => commands::execute_list(&store)?,
        Command::Show(args) => commands::execute_show(args, &store)?,
        Command::Status(args) => commands::execute_status(args, &store)?,
        Command::Export(args) => commands::execute_export(args, &store)?,
    }

    Ok(())
}
