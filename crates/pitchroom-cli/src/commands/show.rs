//! Show command: print one submission in full.

use crate::cli::ShowArgs;
use pitchroom_store::FsStore;

/// Execute the show command.
pub fn execute_show(args: ShowArgs, store: &FsStore) -> anyhow::Result<()> {
    let submission = store.load(&args.id)?;

    println!("Submission:  {}", submission.id);
    println!("Project:     {}", submission.meta.project);
    println!("Email:       {}", submission.meta.email);
    println!("Country HQ:  {}", submission.meta.country_hq);
    println!("Sector:      {}", submission.meta.sector);
    if let Some(date) = &submission.meta.incorporation_date {
        println!("Incorporated: {}", date);
    }
    println!("Status:      {}", submission.status);
    println!();
    println!("Extracted fields:");
    super::print_record(&submission.record);
    Ok(())
}
