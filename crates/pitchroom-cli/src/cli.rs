//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use pitchroom_llm::openai::DEFAULT_ENDPOINT;
use std::path::PathBuf;

/// Pitchroom CLI - Project intake and review workflow.
#[derive(Debug, Parser)]
#[command(name = "pitchroom")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Submission store directory
    #[arg(long, global = true, default_value = "./submissions")]
    pub store_dir: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Submit a pitch document through the extraction pipeline
    Submit(SubmitArgs),

    /// List stored submissions
    List,

    /// Show one submission in full
    Show(ShowArgs),

    /// Set the review stage of a submission
    Status(StatusArgs),

    /// Export all submissions as CSV
    Export(ExportArgs),
}

/// Arguments for the submit command.
#[derive(Debug, Parser)]
pub struct SubmitArgs {
    /// Pitch document (pdf, docx, pptx, xls or xlsx)
    #[arg(short, long)]
    pub file: PathBuf,

    /// Registered project name
    #[arg(short, long)]
    pub project: String,

    /// Contact e-mail
    #[arg(short, long)]
    pub email: String,

    /// Headquarters country
    #[arg(long)]
    pub country_hq: String,

    /// Primary sector or theme
    #[arg(long)]
    pub sector: String,

    /// Date of incorporation
    #[arg(long)]
    pub incorporation_date: Option<String>,

    /// Use the deterministic mock generator instead of the API (no network)
    #[arg(long)]
    pub mock: bool,

    /// Chat-completions endpoint
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Model identifier
    #[arg(long, default_value = "gpt-4o-mini")]
    pub model: String,

    /// API credential
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,
}

/// Arguments for the show command.
#[derive(Debug, Parser)]
pub struct ShowArgs {
    /// Submission identifier (folder name)
    pub id: String,
}

/// Arguments for the status command.
#[derive(Debug, Parser)]
pub struct StatusArgs {
    /// Submission identifier (folder name)
    pub id: String,

    /// Review stage, e.g. "Intro call" or "IC1"
    pub stage: String,
}

/// Arguments for the export command.
#[derive(Debug, Parser)]
pub struct ExportArgs {
    /// Output file; stdout when omitted
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_submit_parses() {
        let cli = Cli::parse_from([
            "pitchroom",
            "submit",
            "--file",
            "deck.pdf",
            "--project",
            "Acme",
            "--email",
            "a@b.test",
            "--country-hq",
            "Kenya",
            "--sector",
            "Energy",
            "--mock",
        ]);
        match cli.command {
            Command::Submit(args) => {
                assert!(args.mock);
                assert_eq!(args.project, "Acme");
                assert_eq!(args.model, "gpt-4o-mini");
            }
            other => panic!("parsed wrong command: {:?}", other),
        }
    }
}
