use std::path::PathBuf;

use etq_model::Record;

/// Outcome of the `check` command.
#[derive(Debug)]
pub struct CheckReport {
    pub csv_file: PathBuf,
    pub records: Vec<Record>,
    /// Labels the file would print if everything were selected.
    pub total_labels: usize,
    /// Distinct supplier names.
    pub suppliers: usize,
}

impl CheckReport {
    pub fn new(csv_file: PathBuf, records: Vec<Record>) -> Self {
        let total_labels = records.iter().map(Record::copy_count).sum();
        let suppliers = records
            .iter()
            .map(|record| record.supplier.as_str())
            .collect::<std::collections::BTreeSet<_>>()
            .len();
        Self {
            csv_file,
            records,
            total_labels,
            suppliers,
        }
    }
}

/// Outcome of the `print` command.
#[derive(Debug)]
pub struct PrintReport {
    pub out: PathBuf,
    /// Distinct records selected.
    pub selected: usize,
    /// Label blocks written (after replication).
    pub blocks: usize,
}
