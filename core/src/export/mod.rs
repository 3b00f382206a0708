//! CSV export
//!
//! The output file is flat, delimited, UTF-8, with one header row. Column
//! names and order come from [`TransactionRecord`]'s field order:
//! `date, category, channel, region, user_id, amount, fee_amount, status,
//! failure_reason, year, month, week, quarter`.

use crate::generator::GeneratorError;
use crate::models::TransactionRecord;
use std::fs;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Serialize records as CSV (with header row) into any writer
pub fn write_csv<W: Write>(records: &[TransactionRecord], writer: W) -> Result<(), GeneratorError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for record in records {
        csv_writer.serialize(record)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Write records to a file, creating parent directories as needed
///
/// The whole dataset is serialized in memory and written in a single call,
/// so no reader observes a partially generated file short of a mid-write
/// I/O failure. Atomic rename is not used; a truncated file must be
/// treated as corrupt by consumers, not as valid partial data.
pub fn export_csv(records: &[TransactionRecord], path: &Path) -> Result<(), GeneratorError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut buffer = Vec::new();
    write_csv(records, &mut buffer)?;
    fs::write(path, &buffer)?;

    info!(path = %path.display(), rows = records.len(), "dataset exported");
    Ok(())
}
