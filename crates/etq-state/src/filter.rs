use etq_model::Record;

/// Case-insensitive substring filter across every record field.
///
/// Ordering is preserved and the input is untouched; an empty query
/// returns every record.
pub fn filter_records<'a>(records: &'a [Record], query: &str) -> Vec<&'a Record> {
    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|record| record_matches(record, &needle))
        .collect()
}

fn record_matches(record: &Record, needle: &str) -> bool {
    needle.is_empty()
        || record
            .field_values()
            .iter()
            .any(|value| value.to_lowercase().contains(needle))
}
