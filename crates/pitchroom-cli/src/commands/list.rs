//! List command: one line per stored submission.

use pitchroom_store::FsStore;

/// Execute the list command.
pub fn execute_list(store: &FsStore) -> anyhow::Result<()> {
    let submissions = store.list()?;
    if submissions.is_empty() {
        println!("No submissions.");
        return Ok(());
    }

    for submission in &submissions {
        println!(
            "{}  {} | {} | {} | {}",
            submission.id,
            submission.meta.project,
            submission.meta.country_hq,
            submission.meta.sector,
            submission.status
        );
    }
    println!("{} submission(s)", submissions.len());
    Ok(())
}
