use serde::Serialize;

/// Daily plant log. Volumes are in cubic metres.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StpRecord {
    /// `DD/MM/YYYY`
    pub date: String,
    pub tanker_trips: u32,
    pub tanker_volume: f64,
    pub inlet_sewage: f64,
    pub treated_water: f64,
    pub tse_output: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bod: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cod: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tss: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ph: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chlorine: Option<f64>,
}

impl StpRecord {
    fn new(date: &str, tanker_trips: u32, inlet: f64, treated: f64, tse: f64) -> Self {
        StpRecord {
            date: date.into(),
            tanker_trips,
            tanker_volume: tanker_trips as f64 * 20.0,
            inlet_sewage: inlet,
            treated_water: treated,
            tse_output: tse,
            bod: None,
            cod: None,
            tss: None,
            ph: None,
            chlorine: None,
        }
    }

    fn with_quality(mut self, bod: f64, cod: f64, tss: f64, ph: f64, chlorine: f64) -> Self {
        self.bod = Some(bod);
        self.cod = Some(cod);
        self.tss = Some(tss);
        self.ph = Some(ph);
        self.chlorine = Some(chlorine);
        self
    }
}

pub fn sample() -> Vec<StpRecord> {
    vec![
        StpRecord::new("28/06/2024", 10, 601.0, 586.0, 522.0).with_quality(8.2, 41.0, 6.1, 7.2, 0.6),
        StpRecord::new("29/06/2024", 12, 619.0, 606.0, 537.0),
        StpRecord::new("30/06/2024", 11, 602.0, 590.0, 529.0).with_quality(7.9, 39.0, 5.8, 7.1, 0.5),
        StpRecord::new("01/07/2024", 9, 578.0, 566.0, 504.0),
        StpRecord::new("02/07/2024", 14, 658.0, 640.0, 568.0).with_quality(9.1, 44.0, 6.6, 7.3, 0.7),
        StpRecord::new("03/07/2024", 13, 641.0, 627.0, 555.0),
        StpRecord::new("04/07/2024", 10, 597.0, 583.0, 518.0),
        StpRecord::new("01/08/2024", 11, 612.0, 598.0, 534.0).with_quality(8.4, 40.0, 6.0, 7.2, 0.6),
        StpRecord::new("02/08/2024", 15, 674.0, 659.0, 581.0),
    ]
}
