//! Status command: move a submission along the review ladder.

use crate::cli::StatusArgs;
use anyhow::anyhow;
use pitchroom_domain::traits::SubmissionStore;
use pitchroom_domain::ReviewStage;
use pitchroom_store::FsStore;

/// Execute the status command.
pub fn execute_status(args: StatusArgs, store: &FsStore) -> anyhow::Result<()> {
    let stage = ReviewStage::parse(&args.stage).ok_or_else(|| {
        let stages: Vec<&str> = ReviewStage::ALL.iter().map(|s| s.as_str()).collect();
        anyhow!(
            "Unknown review stage '{}'. Valid stages: {}",
            args.stage,
            stages.join(", ")
        )
    })?;

    store.set_status(&args.id, stage)?;
    println!("{} -> {}", args.id, stage);
    Ok(())
}
