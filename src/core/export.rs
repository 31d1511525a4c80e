// Unibox - core/export.rs
//
// CSV and JSON export of filtered records.
// Core layer: writes to any Write trait object.

use crate::util::constants;
use crate::util::error::ExportError;
use serde::Serialize;
use std::io::Write;
use std::path::Path;

/// Output format for an export or a headless listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    /// File extension, also used as the save-dialog filter.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

fn check_limit(count: usize) -> Result<(), ExportError> {
    if count > constants::MAX_EXPORT_RECORDS {
        return Err(ExportError::TooManyRecords {
            count,
            max: constants::MAX_EXPORT_RECORDS,
        });
    }
    Ok(())
}

/// Export records to CSV, one row per record with a header row taken from
/// the record's field names.
///
/// Returns the number of records written.
pub fn export_csv<R: Serialize, W: Write>(
    records: &[&R],
    writer: W,
    export_path: &Path,
) -> Result<usize, ExportError> {
    check_limit(records.len())?;
    let mut csv_writer = csv::Writer::from_writer(writer);

    for record in records {
        csv_writer
            .serialize(record)
            .map_err(|e| ExportError::Csv {
                path: export_path.to_path_buf(),
                source: e,
            })?;
    }

    csv_writer.flush().map_err(|e| ExportError::Io {
        path: export_path.to_path_buf(),
        source: e,
    })?;

    Ok(records.len())
}

/// Export records to JSON format (array of objects).
pub fn export_json<R: Serialize, W: Write>(
    records: &[&R],
    writer: W,
    export_path: &Path,
) -> Result<usize, ExportError> {
    check_limit(records.len())?;
    serde_json::to_writer_pretty(writer, records).map_err(|e| ExportError::Json {
        path: export_path.to_path_buf(),
        source: e,
    })?;
    Ok(records.len())
}

/// Export in the given format.
pub fn export<R: Serialize, W: Write>(
    format: ExportFormat,
    records: &[&R],
    writer: W,
    export_path: &Path,
) -> Result<usize, ExportError> {
    match format {
        ExportFormat::Csv => export_csv(records, writer, export_path),
        ExportFormat::Json => export_json(records, writer, export_path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fixtures;
    use std::path::PathBuf;

    #[test]
    fn test_csv_export() {
        let conversations = fixtures::conversations();
        let refs: Vec<_> = conversations.iter().take(2).collect();
        let mut buf = Vec::new();
        let count = export_csv(&refs, &mut buf, &PathBuf::from("out.csv")).unwrap();
        assert_eq!(count, 2);

        let output = String::from_utf8(buf).unwrap();
        assert!(output.starts_with("id,contact_name,initials,platform,preview"));
        assert!(output.contains("Sarah Johnson"));
        assert!(output.contains("whatsapp"));
        assert!(output.contains("Alex Chen"));
    }

    #[test]
    fn test_json_export() {
        let contacts = fixtures::contacts();
        let refs: Vec<_> = contacts.iter().take(1).collect();
        let mut buf = Vec::new();
        let count = export_json(&refs, &mut buf, &PathBuf::from("out.json")).unwrap();
        assert_eq!(count, 1);

        let parsed: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(parsed[0]["name"], "Ethan Harper");
        assert_eq!(parsed[0]["priority"], "Top 100");
    }

    #[test]
    fn test_limit_rejects_oversized_export() {
        assert!(check_limit(constants::MAX_EXPORT_RECORDS).is_ok());
        let err = check_limit(constants::MAX_EXPORT_RECORDS + 1).unwrap_err();
        assert!(matches!(err, ExportError::TooManyRecords { .. }));
    }
}
