use super::date;
use crate::domain::Fields;
use crate::model::Record;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::cmp::Ordering;
use time::Date;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

/// Column header click state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortState {
    pub key: Option<String>,
    pub direction: SortDirection,
}

impl SortState {
    /// A new key starts ascending, the current key flips direction.
    pub fn toggle(&mut self, key: &str) {
        if self.key.as_deref() == Some(key) {
            self.direction = match self.direction {
                SortDirection::Asc => SortDirection::Desc,
                SortDirection::Desc => SortDirection::Asc,
            };
        } else {
            self.key = Some(key.to_string());
            self.direction = SortDirection::Asc;
        }
    }
}

#[derive(Debug, PartialEq)]
enum SortValue {
    Null,
    Number(f64),
    Date(Date),
    Text(String),
}

impl SortValue {
    fn rank(&self) -> u8 {
        match self {
            SortValue::Null => 0,
            SortValue::Number(_) => 1,
            SortValue::Date(_) => 2,
            SortValue::Text(_) => 3,
        }
    }

    fn compare(&self, other: &SortValue) -> Ordering {
        match (self, other) {
            (SortValue::Number(a), SortValue::Number(b)) => a.total_cmp(b),
            (SortValue::Date(a), SortValue::Date(b)) => a.cmp(b),
            (SortValue::Text(a), SortValue::Text(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

/// Keeps digits, `.` and `-`, so `"OMR 1,250.00"` reads as 1250.
pub fn currency_amount(text: &str) -> Option<f64> {
    let digits: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();
    digits.parse().ok()
}

fn sort_value(record: &Record, fields: &Fields, key: &str) -> SortValue {
    let value = match record.get(key) {
        None | Some(Value::Null) => return SortValue::Null,
        Some(value) => value,
    };
    if fields.dates.contains(&key) {
        return date::parse_value(Some(value))
            .map(SortValue::Date)
            .unwrap_or(SortValue::Null);
    }
    match value {
        Value::Number(number) => number
            .as_f64()
            .map(SortValue::Number)
            .unwrap_or(SortValue::Null),
        Value::String(text) if fields.currency.contains(&key) => currency_amount(text)
            .map(SortValue::Number)
            .unwrap_or(SortValue::Null),
        Value::String(text) => SortValue::Text(text.to_lowercase()),
        Value::Bool(bool) => SortValue::Text(bool.to_string()),
        _ => SortValue::Null,
    }
}

/// Stable, nulls lowest.
pub fn sort(records: &mut [Record], fields: &Fields, key: &str, direction: SortDirection) {
    let mut keyed: Vec<(SortValue, Record)> = records
        .iter_mut()
        .map(|it| (sort_value(it, fields, key), std::mem::take(it)))
        .collect();
    match direction {
        SortDirection::Asc => keyed.sort_by(|a, b| a.0.compare(&b.0)),
        SortDirection::Desc => keyed.sort_by(|a, b| b.0.compare(&a.0)),
    }
    for (slot, (_, record)) in records.iter_mut().zip(keyed) {
        *slot = record;
    }
}

#[cfg(test)]
mod test {
    use super::{SortDirection, SortState};
    use crate::domain::Domain;
    use crate::model::Record;
    use serde_json::{json, Value};

    fn records(values: Vec<Value>) -> Vec<Record> {
        values
            .into_iter()
            .map(|it| match it {
                Value::Object(record) => record,
                _ => panic!("not an object"),
            })
            .collect()
    }

    fn column<'a>(records: &'a [Record], key: &str) -> Vec<&'a Value> {
        records.iter().map(|it| &it[key]).collect()
    }

    #[test]
    fn toggle_alternates() {
        let mut state = SortState::default();
        state.toggle("Contractor");
        assert_eq!(state.direction, SortDirection::Asc);
        state.toggle("Contractor");
        assert_eq!(state.direction, SortDirection::Desc);
        state.toggle("Contractor");
        assert_eq!(state.direction, SortDirection::Asc);
        state.toggle("Contractor");
        assert_eq!(state.direction, SortDirection::Desc);
        state.toggle("Status");
        assert_eq!(state.key.as_deref(), Some("Status"));
        assert_eq!(state.direction, SortDirection::Asc);
    }

    #[test]
    fn currency_sorts_numerically() {
        let fields = Domain::Contractors.fields();
        let mut res = records(vec![
            json!({"annualValue": "1,250.00"}),
            json!({"annualValue": "980.50"}),
            json!({"annualValue": "OMR 12,000"}),
        ]);
        super::sort(&mut res, fields, "annualValue", SortDirection::Asc);
        assert_eq!(
            column(&res, "annualValue"),
            vec![&json!("980.50"), &json!("1,250.00"), &json!("OMR 12,000")]
        );
    }

    #[test]
    fn dates_sort_chronologically() {
        let fields = Domain::Contractors.fields();
        let mut res = records(vec![
            json!({"endDate": "01/02/2025"}),
            json!({"endDate": "15/12/2024"}),
            json!({"endDate": "02/01/2025"}),
        ]);
        super::sort(&mut res, fields, "endDate", SortDirection::Desc);
        assert_eq!(
            column(&res, "endDate"),
            vec![&json!("01/02/2025"), &json!("02/01/2025"), &json!("15/12/2024")]
        );
    }

    #[test]
    fn nulls_are_lowest() {
        let fields = Domain::Contractors.fields();
        let mut res = records(vec![
            json!({"endDate": "01/02/2025"}),
            json!({"endDate": null}),
            json!({"endDate": "not a date"}),
            json!({"endDate": "15/12/2024"}),
        ]);
        super::sort(&mut res, fields, "endDate", SortDirection::Asc);
        assert_eq!(
            column(&res, "endDate"),
            vec![
                &json!(null),
                &json!("not a date"),
                &json!("15/12/2024"),
                &json!("01/02/2025"),
            ]
        );
        super::sort(&mut res, fields, "endDate", SortDirection::Desc);
        assert_eq!(res[2]["endDate"], json!(null));
        assert_eq!(res[3]["endDate"], json!("not a date"));
    }

    #[test]
    fn text_is_case_insensitive() {
        let fields = Domain::Contractors.fields();
        let mut res = records(vec![
            json!({"contractor": "bahwan"}),
            json!({"contractor": "Kalhat"}),
            json!({"contractor": "Al Naba"}),
        ]);
        super::sort(&mut res, fields, "contractor", SortDirection::Asc);
        assert_eq!(
            column(&res, "contractor"),
            vec![&json!("Al Naba"), &json!("bahwan"), &json!("Kalhat")]
        );
    }

    #[test]
    fn numbers_sort_numerically() {
        let fields = Domain::Water.fields();
        let mut res = records(vec![
            json!({"totalLoss": 9.0}),
            json!({"totalLoss": 10.0}),
            json!({"totalLoss": -2.5}),
        ]);
        super::sort(&mut res, fields, "totalLoss", SortDirection::Asc);
        assert_eq!(
            column(&res, "totalLoss"),
            vec![&json!(-2.5), &json!(9.0), &json!(10.0)]
        );
    }

    #[test]
    fn sort_is_stable() {
        let fields = Domain::Contractors.fields();
        let mut res = records(vec![
            json!({"id": 1, "status": "Active"}),
            json!({"id": 2, "status": "Expired"}),
            json!({"id": 3, "status": "active"}),
        ]);
        super::sort(&mut res, fields, "status", SortDirection::Asc);
        assert_eq!(column(&res, "id"), vec![&json!(1), &json!(3), &json!(2)]);
        super::sort(&mut res, fields, "status", SortDirection::Desc);
        assert_eq!(column(&res, "id"), vec![&json!(2), &json!(1), &json!(3)]);
    }

    #[test]
    fn currency_amount() {
        assert_eq!(super::currency_amount("1,250.00"), Some(1250.0));
        assert_eq!(super::currency_amount("-42"), Some(-42.0));
        assert_eq!(super::currency_amount("n/a"), None);
    }
}
