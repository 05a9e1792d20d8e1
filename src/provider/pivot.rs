use crate::model::Record;
use crate::view::filter::text_of;
use crate::view::sort::currency_amount;
use serde_json::{Map, Value};

/// Turns one-reading-per-row electricity data into one record per meter
/// with a column per month. Meters keep first-seen order, a repeated
/// month overwrites the earlier reading.
pub fn meters_by_month(rows: Vec<Record>) -> Vec<Record> {
    let mut meters: Vec<(String, Record)> = vec![];
    for row in rows {
        let Some(month) = row.get("month").and_then(text_of) else {
            continue;
        };
        let month = month.into_owned();
        let Some(id) = row
            .get("accountNumber")
            .and_then(text_of)
            .or_else(|| row.get("meter").and_then(text_of))
            .map(|it| it.into_owned())
        else {
            continue;
        };
        let index = match meters.iter().position(|(it, _)| *it == id) {
            Some(index) => index,
            None => {
                meters.push((id, header(&row)));
                meters.len() - 1
            }
        };
        meters[index].1.insert(month, consumption(row.get("consumption")));
    }
    meters.into_iter().map(|(_, record)| record).collect()
}

fn header(row: &Record) -> Record {
    let mut record = Map::new();
    for (from, to) in [("meter", "name"), ("type", "type"), ("accountNumber", "accountNumber")] {
        record.insert(to.into(), row.get(from).cloned().unwrap_or(Value::Null));
    }
    record
}

fn consumption(value: Option<&Value>) -> Value {
    match value {
        Some(Value::Number(number)) => Value::Number(number.clone()),
        Some(Value::String(text)) => currency_amount(text).map(Value::from).unwrap_or(Value::Null),
        _ => Value::Null,
    }
}

#[cfg(test)]
mod test {
    use crate::model;
    use crate::Result;
    use serde_json::{json, Value};

    #[test]
    fn pivots_rows_into_meters() -> Result<()> {
        let rows = model::from_json(
            json!([
                {"meter": "PS 01", "type": "PS", "accountNumber": "R52330", "month": "Apr-24", "consumption": 1608},
                {"meter": "LS 02", "type": "LS", "accountNumber": "R52328", "month": "Apr-24", "consumption": "44"},
                {"meter": "PS 01", "type": "PS", "accountNumber": "R52330", "month": "May-24", "consumption": 1940},
                {"meter": "PS 01", "type": "PS", "accountNumber": "R52330", "month": "May-24", "consumption": 1941},
                {"meter": "LS 02", "type": "LS", "accountNumber": "R52328", "consumption": 12},
            ])
            .to_string()
            .as_bytes(),
        )?;
        let res = super::meters_by_month(rows);
        assert_eq!(res.len(), 2);
        assert_eq!(
            Value::Object(res[0].clone()),
            json!({"name": "PS 01", "type": "PS", "accountNumber": "R52330", "Apr-24": 1608, "May-24": 1941})
        );
        assert_eq!(
            Value::Object(res[1].clone()),
            json!({"name": "LS 02", "type": "LS", "accountNumber": "R52328", "Apr-24": 44.0})
        );
        Ok(())
    }

    #[test]
    fn falls_back_to_meter_name() -> Result<()> {
        let rows = model::from_json(
            json!([
                {"meter": "PS 01", "type": "PS", "accountNumber": null, "month": "Apr-24", "consumption": 10},
                {"meter": "PS 01", "type": "PS", "month": "May-24", "consumption": 12},
            ])
            .to_string()
            .as_bytes(),
        )?;
        let res = super::meters_by_month(rows);
        assert_eq!(res.len(), 1);
        assert_eq!(
            Value::Object(res[0].clone()),
            json!({"name": "PS 01", "type": "PS", "accountNumber": null, "Apr-24": 10, "May-24": 12})
        );
        Ok(())
    }
}
