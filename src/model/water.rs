use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WaterRecord {
    pub month: String,
    /// Bulk supply into the network
    pub l1_bulk_supply: f64,
    /// Zone distribution meters
    pub l2_zone_distribution: f64,
    /// End-user consumption meters
    pub l3_end_user_consumption: f64,
    pub stage1_loss: f64,
    pub stage2_loss: f64,
    pub total_loss: f64,
}

impl WaterRecord {
    /// `total_loss` is the sum of both stage losses, not `l1 - l3`.
    pub fn new(month: &str, l1: f64, l2: f64, l3: f64, stage1: f64, stage2: f64) -> Self {
        WaterRecord {
            month: month.into(),
            l1_bulk_supply: l1,
            l2_zone_distribution: l2,
            l3_end_user_consumption: l3,
            stage1_loss: stage1,
            stage2_loss: stage2,
            total_loss: stage1 + stage2,
        }
    }
}

pub fn sample() -> Vec<WaterRecord> {
    vec![
        WaterRecord::new("Jan-24", 32803.0, 28689.0, 25680.0, 4114.0, 3009.0),
        WaterRecord::new("Feb-24", 27996.0, 25073.0, 21908.0, 2923.0, 3165.0),
        WaterRecord::new("Mar-24", 23860.0, 24007.0, 19626.0, -147.0, 4381.0),
        WaterRecord::new("Apr-24", 31869.0, 28713.0, 23584.0, 3156.0, 5129.0),
        WaterRecord::new("May-24", 30737.0, 28089.0, 23692.0, 2648.0, 4397.0),
        WaterRecord::new("Jun-24", 41953.0, 34626.0, 27865.0, 7327.0, 6761.0),
        WaterRecord::new("Jul-24", 35166.0, 34689.0, 25961.0, 477.0, 8728.0),
        WaterRecord::new("Aug-24", 35420.0, 32753.0, 25246.0, 2667.0, 7507.0),
        WaterRecord::new("Sep-24", 41341.0, 30892.0, 23744.0, 10449.0, 7148.0),
        WaterRecord::new("Oct-24", 31519.0, 39285.0, 30881.0, -7766.0, 8404.0),
        WaterRecord::new("Nov-24", 35290.0, 29913.0, 24719.0, 5377.0, 5194.0),
        WaterRecord::new("Dec-24", 36733.0, 32492.0, 26463.0, 4241.0, 6029.0),
        WaterRecord::new("Jan-25", 32580.0, 35325.0, 27298.0, -2745.0, 8027.0),
        WaterRecord::new("Feb-25", 44043.0, 35811.0, 28226.0, 8232.0, 7585.0),
        WaterRecord::new("Mar-25", 34915.0, 39565.0, 30558.0, -4650.0, 9007.0),
    ]
}
