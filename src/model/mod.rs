use crate::Result;
use serde::Serialize;
use serde_json::{Map, Value};

pub mod contractor;
pub mod electricity;
pub mod stp;
pub mod waste;
pub mod water;

/// A flat field-to-scalar row, keys kept in source order.
pub type Record = Map<String, Value>;

pub fn to_records<T: Serialize>(items: &[T]) -> Result<Vec<Record>> {
    items
        .iter()
        .map(|it| -> Result<Record> {
            match serde_json::to_value(it)? {
                Value::Object(record) => Ok(record),
                other => Err(format!("Expected an object, got {other}").into()),
            }
        })
        .collect()
}

/// Reads an array of objects, anything else is an error.
pub fn from_json(bytes: &[u8]) -> Result<Vec<Record>> {
    Ok(serde_json::from_slice::<Vec<Record>>(bytes)?)
}

#[cfg(test)]
mod test {
    use super::water::WaterRecord;
    use crate::Result;
    use serde_json::json;

    #[test]
    fn to_records_keeps_field_order() -> Result<()> {
        let records = super::to_records(&[WaterRecord::new("Jan-25", 100.0, 90.0, 80.0, 10.0, 10.0)])?;
        let keys: Vec<&String> = records[0].keys().collect();
        assert_eq!(
            keys,
            vec![
                "month",
                "l1BulkSupply",
                "l2ZoneDistribution",
                "l3EndUserConsumption",
                "stage1Loss",
                "stage2Loss",
                "totalLoss",
            ]
        );
        Ok(())
    }

    #[test]
    fn from_json_rejects_non_objects() {
        assert!(super::from_json(b"[1, 2]").is_err());
        assert!(super::from_json(b"{\"a\": 1}").is_err());
    }

    #[test]
    fn from_json_reads_array() -> Result<()> {
        let records = super::from_json(br#"[{"a": 1, "b": null}]"#)?;
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["a"], json!(1));
        Ok(())
    }
}
