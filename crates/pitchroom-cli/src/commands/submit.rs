//! Submit command: run one document through the pipeline and store it.

use crate::cli::SubmitArgs;
use crate::notify::LogNotifier;
use anyhow::Context;
use pitchroom_domain::traits::{Notifier, SubmissionStore, TextGenerator};
use pitchroom_domain::{StoredDocument, SubmissionMeta};
use pitchroom_llm::{MockGenerator, OpenAiGenerator};
use pitchroom_pipeline::{IntakePipeline, SummarizerConfig, SummaryOutcome};
use pitchroom_store::FsStore;
use tracing::warn;

/// Execute the submit command.
pub async fn execute_submit(args: SubmitArgs, store: &FsStore) -> anyhow::Result<()> {
    let bytes = std::fs::read(&args.file)
        .with_context(|| format!("Failed to read {}", args.file.display()))?;
    let name = args
        .file
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "upload".to_string());
    let document = StoredDocument { name, bytes };

    let config = SummarizerConfig::default();
    let outcome = if args.mock {
        run_pipeline(MockGenerator::new("{}"), &document, config).await?
    } else {
        let api_key = args
            .api_key
            .context("--api-key or OPENAI_API_KEY is required unless --mock is set")?;
        let generator = OpenAiGenerator::new(&args.endpoint, api_key, &args.model)?;
        run_pipeline(generator, &document, config).await?
    };

    if let Some(error) = &outcome.model_error {
        warn!("extraction degraded: {}", error);
        eprintln!("Warning: field extraction failed ({}); stored with Unknown fields", error);
    }

    let meta = SubmissionMeta {
        project: args.project,
        email: args.email,
        country_hq: args.country_hq,
        sector: args.sector,
        incorporation_date: args.incorporation_date,
    };
    let saved = store.save(&meta, &[document], &outcome.record)?;

    // Failures here are already impossible, but the seam stays fallible for
    // real mail hookups
    let _ = LogNotifier.notify(
        &format!("New submission: {}", meta.project),
        &format!("Stored as {}", saved.id),
    );

    println!("Extracted fields:");
    super::print_record(&outcome.record);
    println!();
    println!("Submission ID: {}", saved.id);
    println!("Edit PIN:      {}", saved.pin);
    Ok(())
}

async fn run_pipeline<G>(
    generator: G,
    document: &StoredDocument,
    config: SummarizerConfig,
) -> anyhow::Result<SummaryOutcome>
where
    G: TextGenerator + Send + Sync + 'static,
{
    let pipeline = IntakePipeline::new(generator, config);
    let outcome = pipeline
        .run(&document.bytes, &document.extension())
        .await
        .with_context(|| format!("Failed to extract text from {}", document.name))?;
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Command};
    use clap::Parser;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_mock_submit_stores_a_complete_record() {
        let tmp = TempDir::new().unwrap();
        let pitch = tmp.path().join("pitch.txt");
        std::fs::write(&pitch, "Solar microgrids for rural clinics.").unwrap();

        let cli = Cli::parse_from([
            "pitchroom",
            "submit",
            "--file",
            pitch.to_str().unwrap(),
            "--project",
            "Acme Solar",
            "--email",
            "founder@acme.test",
            "--country-hq",
            "Kenya",
            "--sector",
            "Energy",
            "--mock",
        ]);
        let Command::Submit(args) = cli.command else {
            panic!("expected submit");
        };

        let store = FsStore::new(tmp.path().join("submissions")).unwrap();
        execute_submit(args, &store).await.unwrap();

        let submissions = store.list().unwrap();
        assert_eq!(submissions.len(), 1);
        assert!(submissions[0].id.starts_with("Acme_Solar_"));
        assert!(submissions[0].record.is_complete());
    }
}
