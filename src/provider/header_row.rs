use crate::model::Record;
use serde_json::Value;

/// Spreadsheet exports put the real column titles in the first row and
/// leave generated keys like `__EMPTY`, `__EMPTY_1` on every object.
pub const SENTINEL_KEY: &str = "__EMPTY";

pub fn is_header_row(record: &Record) -> bool {
    record.contains_key(SENTINEL_KEY)
}

/// Drops `(`, `)` and `/`, collapses whitespace runs and trims.
pub fn normalize_field_name(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, '(' | ')' | '/'))
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Re-keys every record after a header row by the header's titles.
/// Records without a header row come back untouched.
pub fn apply(mut records: Vec<Record>) -> Vec<Record> {
    if !records.first().is_some_and(is_header_row) {
        return records;
    }
    let header = records.remove(0);
    records
        .into_iter()
        .map(|record| {
            record
                .into_iter()
                .map(|(key, value)| (title_for(&header, &key).unwrap_or(key), value))
                .collect()
        })
        .collect()
}

fn title_for(header: &Record, key: &str) -> Option<String> {
    let title = match header.get(key)? {
        Value::String(title) => normalize_field_name(title),
        Value::Number(number) => number.to_string(),
        _ => return None,
    };
    (!title.is_empty()).then_some(title)
}
