use serde::Serialize;

/// Weights are in tonnes.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WasteRecord {
    pub date: String,
    pub organic: f64,
    pub recyclable: f64,
    pub general: f64,
    pub hazardous: f64,
    pub total_collected: f64,
    pub recycling_rate: f64,
}

pub fn sample() -> Vec<WasteRecord> {
    vec![
        WasteRecord {
            date: "2025-01-01".into(),
            organic: 42.5,
            recyclable: 18.3,
            general: 23.4,
            hazardous: 1.2,
            total_collected: 85.4,
            recycling_rate: 21.4,
        },
        WasteRecord {
            date: "2025-02-01".into(),
            organic: 39.8,
            recyclable: 19.6,
            general: 20.1,
            hazardous: 0.5,
            total_collected: 80.0,
            recycling_rate: 24.5,
        },
        WasteRecord {
            date: "2025-03-01".into(),
            organic: 44.1,
            recyclable: 21.9,
            general: 21.7,
            hazardous: 0.9,
            total_collected: 88.6,
            recycling_rate: 24.7,
        },
        WasteRecord {
            date: "2025-04-01".into(),
            organic: 41.2,
            recyclable: 23.8,
            general: 19.0,
            hazardous: 1.1,
            total_collected: 85.1,
            recycling_rate: 28.0,
        },
        WasteRecord {
            date: "2025-05-01".into(),
            organic: 45.6,
            recyclable: 22.4,
            general: 22.3,
            hazardous: 0.7,
            total_collected: 91.0,
            recycling_rate: 24.6,
        },
    ]
}
