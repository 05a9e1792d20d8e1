use super::date;
use crate::domain::Fields;
use crate::model::Record;
use serde_json::Value;
use std::borrow::Cow;
use time::Date;

/// Inclusive date window, either side may be open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub from: Option<Date>,
    pub to: Option<Date>,
}

impl DateRange {
    pub fn is_all(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }

    /// A bounded range never contains a missing date.
    pub fn contains(&self, date: Option<Date>) -> bool {
        if self.is_all() {
            return true;
        }
        let Some(date) = date else {
            return false;
        };
        self.from.is_none_or(|from| date >= from) && self.to.is_none_or(|to| date <= to)
    }
}

pub fn text_of(value: &Value) -> Option<Cow<'_, str>> {
    match value {
        Value::String(text) => Some(Cow::Borrowed(text)),
        Value::Number(number) => Some(Cow::Owned(number.to_string())),
        Value::Bool(bool) => Some(Cow::Owned(bool.to_string())),
        _ => None,
    }
}

pub fn matches_search(record: &Record, fields: &[&str], term: &str) -> bool {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return true;
    }
    fields.iter().any(|field| {
        record
            .get(*field)
            .and_then(text_of)
            .is_some_and(|text| text.to_lowercase().contains(&term))
    })
}

/// `All` (any case) or no selection lets every record through.
pub fn matches_category(record: &Record, field: Option<&str>, selected: Option<&str>) -> bool {
    let (Some(field), Some(selected)) = (field, selected) else {
        return true;
    };
    if selected.eq_ignore_ascii_case("all") {
        return true;
    }
    record
        .get(field)
        .and_then(text_of)
        .is_some_and(|text| text == selected)
}

pub fn matches_range(record: &Record, field: Option<&str>, range: &DateRange) -> bool {
    match field {
        Some(field) => range.contains(date::parse_value(record.get(field))),
        None => true,
    }
}

pub fn apply(
    records: Vec<Record>,
    fields: &Fields,
    search: Option<&str>,
    status: Option<&str>,
    kind: Option<&str>,
    range: &DateRange,
) -> Vec<Record> {
    records
        .into_iter()
        .filter(|it| search.is_none_or(|term| matches_search(it, fields.search, term)))
        .filter(|it| matches_category(it, fields.status, status))
        .filter(|it| matches_category(it, fields.kind, kind))
        .filter(|it| matches_range(it, fields.range, range))
        .collect()
}
