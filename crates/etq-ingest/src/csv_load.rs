use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::Context;
use csv::ReaderBuilder;

use etq_model::{LoadError, REQUIRED_HEADERS, Record, Result};

fn normalize_header(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Parse raw CSV text into the canonical record list.
///
/// The dialect is comma-delimited with quoted-field support and a mandatory
/// header row; required columns may appear in any order and extra columns
/// are ignored. Rows without an `id` value are dropped as blank separators
/// before validation. Validation is all-or-nothing: the whole batch is
/// accepted, or the first failure is returned and nothing is.
///
/// Cell values are kept verbatim; only header names are trimmed (and the
/// leading BOM stripped) so column matching works on files exported by
/// spreadsheet tools.
pub fn parse_records(raw: &str) -> Result<Vec<Record>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(raw.as_bytes());
    let headers: Vec<String> = reader
        .headers()
        .map_err(|err| LoadError::Malformed(err.to_string()))?
        .iter()
        .map(normalize_header)
        .collect();

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row.map_err(|err| LoadError::Malformed(err.to_string()))?;
        let mut cells = BTreeMap::new();
        for (idx, header) in headers.iter().enumerate() {
            let value = row.get(idx).unwrap_or("");
            cells.insert(header.clone(), value.to_string());
        }
        let record = Record::from_cells(&cells);
        if record.id.is_empty() {
            // Blank separator row, not an error.
            continue;
        }
        records.push(record);
    }

    validate_batch(&headers, &records)?;
    Ok(records)
}

/// Whole-batch validation: header completeness first, then quantities.
fn validate_batch(headers: &[String], records: &[Record]) -> Result<()> {
    for required in REQUIRED_HEADERS {
        if !headers.iter().any(|header| header == required) {
            return Err(LoadError::MissingHeader(required.to_string()));
        }
    }
    for record in records {
        if !record.quantity().is_some_and(|value| value > 0.0) {
            return Err(LoadError::InvalidQuantity {
                id: record.id.clone(),
            });
        }
    }
    Ok(())
}

/// Read and parse a CSV file from disk.
///
/// This is the load boundary used by the binaries; io and validation
/// failures both carry the file path as context.
pub fn load_records(path: &Path) -> anyhow::Result<Vec<Record>> {
    let raw =
        fs::read_to_string(path).with_context(|| format!("read csv: {}", path.display()))?;
    let records =
        parse_records(&raw).with_context(|| format!("validate csv: {}", path.display()))?;
    tracing::info!(count = records.len(), path = %path.display(), "loaded records");
    Ok(records)
}
