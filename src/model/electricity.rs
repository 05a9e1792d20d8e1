use serde::Serialize;
use serde_json::{Map, Value};

/// One meter with a sparse set of month-keyed kWh readings.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ElectricityRecord {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub account_number: String,
    #[serde(flatten)]
    pub consumption: Map<String, Value>,
}

impl ElectricityRecord {
    fn new(name: &str, kind: &str, account_number: &str, readings: &[(&str, f64)]) -> Self {
        ElectricityRecord {
            name: name.into(),
            kind: kind.into(),
            account_number: account_number.into(),
            consumption: readings
                .iter()
                .map(|(month, kwh)| (month.to_string(), Value::from(*kwh)))
                .collect(),
        }
    }
}

pub fn sample() -> Vec<ElectricityRecord> {
    vec![
        ElectricityRecord::new(
            "Pumping Station 01",
            "PS",
            "R52330",
            &[
                ("Apr-24", 1608.0),
                ("May-24", 1940.0),
                ("Jun-24", 1783.0),
                ("Jul-24", 1874.0),
                ("Aug-24", 1662.0),
            ],
        ),
        ElectricityRecord::new(
            "Pumping Station 03",
            "PS",
            "R52329",
            &[("Apr-24", 31.0), ("May-24", 47.0), ("Jun-24", 25.0)],
        ),
        ElectricityRecord::new(
            "Lifting Station 02",
            "LS",
            "R52328",
            &[
                ("Apr-24", 44.0),
                ("May-24", 0.0),
                ("Jun-24", 0.0),
                ("Jul-24", 0.0),
                ("Aug-24", 0.0),
            ],
        ),
        ElectricityRecord::new(
            "Irrigation Tank 01",
            "IRR",
            "R52324",
            &[("Jun-24", 2.0), ("Jul-24", 0.0), ("Aug-24", 1.0)],
        ),
        ElectricityRecord::new(
            "Actuator DB 01 (Z8)",
            "DB",
            "R53196",
            &[
                ("Apr-24", 39.0),
                ("May-24", 49.0),
                ("Jun-24", 43.0),
                ("Jul-24", 43.0),
                ("Aug-24", 45.0),
            ],
        ),
        ElectricityRecord::new(
            "Street Light FP 01 (Z8)",
            "Street Light",
            "R53197",
            &[("Apr-24", 2773.0), ("May-24", 3276.0), ("Jun-24", 3268.0)],
        ),
        ElectricityRecord::new(
            "Beachwell",
            "D_Building",
            "R51903",
            &[
                ("Apr-24", 16908.0),
                ("May-24", 46.0),
                ("Jun-24", 19332.0),
                ("Jul-24", 23170.0),
            ],
        ),
    ]
}
