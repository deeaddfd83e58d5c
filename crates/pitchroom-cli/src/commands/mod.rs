//! Command execution logic.

mod export;
mod list;
mod show;
mod status;
mod submit;

pub use export::execute_export;
pub use list::execute_list;
pub use show::execute_show;
pub use status::execute_status;
pub use submit::execute_submit;

use pitchroom_domain::ExtractionRecord;

/// Print a record as "Field: value" lines, in schema order.
pub(crate) fn print_record(record: &ExtractionRecord) {
    for (field, value) in record.iter() {
        println!("  {}: {}", field.as_str(), value.display());
    }
}
