use serde::Serialize;

/// Simplified contract listing served without a data file.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractorSummary {
    pub id: u32,
    pub contractor: String,
    pub service: String,
    pub status: String,
    pub contract_type: String,
    /// `DD/MM/YYYY`
    pub start_date: Option<String>,
    /// `DD/MM/YYYY`
    pub end_date: Option<String>,
    /// Free text, e.g. `"32,800.00"`
    pub annual_value: Option<String>,
}

impl ContractorSummary {
    #[allow(clippy::too_many_arguments)]
    fn new(
        id: u32,
        contractor: &str,
        service: &str,
        status: &str,
        contract_type: &str,
        start_date: Option<&str>,
        end_date: Option<&str>,
        annual_value: Option<&str>,
    ) -> Self {
        ContractorSummary {
            id,
            contractor: contractor.into(),
            service: service.into(),
            status: status.into(),
            contract_type: contract_type.into(),
            start_date: start_date.map(Into::into),
            end_date: end_date.map(Into::into),
            annual_value: annual_value.map(Into::into),
        }
    }
}

pub fn sample() -> Vec<ContractorSummary> {
    vec![
        ContractorSummary::new(
            1,
            "KONE Assarain LLC",
            "Lift maintenance services",
            "Active",
            "Contract",
            Some("01/01/2025"),
            Some("31/12/2025"),
            Some("11,550.00"),
        ),
        ContractorSummary::new(
            2,
            "Oman Water Treatment Company (OWATCO)",
            "Comprehensive STP operation and maintenance",
            "Active",
            "Contract",
            Some("26/01/2024"),
            Some("25/01/2029"),
            Some("1,135,493.40"),
        ),
        ContractorSummary::new(
            3,
            "Kalhat",
            "Facility management",
            "Active",
            "Contract",
            Some("07/05/2024"),
            Some("06/05/2030"),
            Some("392,060.40"),
        ),
        ContractorSummary::new(
            4,
            "Bahwan Engineering Company LLC",
            "Maintenance of fire alarm and fire fighting equipment",
            "Expired",
            "Contract",
            Some("01/11/2023"),
            Some("31/10/2024"),
            Some("8,925.00"),
        ),
        ContractorSummary::new(
            5,
            "Muscat Electronics LLC",
            "Daikin AC chillers maintenance",
            "Expiring Soon",
            "Contract",
            Some("26/03/2023"),
            Some("25/04/2025"),
            Some("980.50"),
        ),
        ContractorSummary::new(
            6,
            "Gulf Expert",
            "Chillers, BMS and pressurisation units",
            "Active",
            "PO",
            Some("03/06/2025"),
            None,
            None,
        ),
    ]
}
