use std::iter;

use etq_model::Record;

/// Expand selected records into one entry per printable label.
///
/// Each record appears [`Record::copy_count`] times consecutively, in input
/// order. Records whose quantity no longer reads as a positive number
/// contribute zero copies rather than failing; ingest guarantees that case
/// does not normally reach this point.
pub fn expand<'a>(selected: &[&'a Record]) -> Vec<&'a Record> {
    selected
        .iter()
        .flat_map(|record| iter::repeat_n(*record, record.copy_count()))
        .collect()
}
