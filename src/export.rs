use anyhow::{Context, Result};

use crate::models::PatientRecord;

/// Render records as CSV text, header row first.
///
/// Absent `Option` fields become empty cells.
pub fn records_to_csv(records: &[PatientRecord]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    for record in records {
        writer
            .serialize(record)
            .context("Failed writing CSV row")?;
    }

    let bytes = writer
        .into_inner()
        .context("Failed flushing CSV buffer")?;
    String::from_utf8(bytes).context("CSV output was not valid UTF-8")
}
