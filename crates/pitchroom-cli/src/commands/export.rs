//! Export command: CSV for the reporting spreadsheet.

use crate::cli::ExportArgs;
use anyhow::Context;
use pitchroom_store::{export_csv, FsStore};

/// Execute the export command.
pub fn execute_export(args: ExportArgs, store: &FsStore) -> anyhow::Result<()> {
    let submissions = store.list()?;
    let csv = export_csv(&submissions);

    match args.out {
        Some(path) => {
            std::fs::write(&path, csv)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("Exported {} submission(s) to {}", submissions.len(), path.display());
        }
        None => print!("{}", csv),
    }
    Ok(())
}
