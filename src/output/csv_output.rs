//! CSV export

use crate::output::traits::{OutputResult, Tabular};
use std::path::Path;

/// Writes rows as UTF-8 CSV, replacing any existing file
///
/// Rows must all have the same width; a row of different width fails with
/// `OutputError::Csv`.
pub fn write_csv<R, S>(rows: &[R], path: &Path) -> OutputResult<()>
where
    R: AsRef<[S]>,
    S: AsRef<str>,
{
    let mut writer = csv::Writer::from_path(path)?;

    for row in rows {
        writer.write_record(row.as_ref().iter().map(|field| field.as_ref()))?;
    }

    writer.flush()?;
    tracing::debug!("Wrote {} CSV rows to {}", rows.len(), path.display());
    Ok(())
}

/// Writes the rows of any tabular value as CSV
pub fn export_csv<T: Tabular + ?Sized>(value: &T, path: &Path) -> OutputResult<()> {
    write_csv(&value.rows(), path)
}
