use strum::{Display, EnumIter, EnumString};

/// One utility category served by the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum Domain {
    Water,
    Electricity,
    Stp,
    ContractorTracker,
    Contractors,
    Waste,
}

/// How a domain's record fields are searched, filtered, sorted and summarized.
pub struct Fields {
    pub search: &'static [&'static str],
    pub status: Option<&'static str>,
    pub kind: Option<&'static str>,
    /// Date field used by range filters, expiry counts and trends.
    pub range: Option<&'static str>,
    pub dates: &'static [&'static str],
    pub currency: &'static [&'static str],
    /// Summed into summary totals. Empty with `sum_unlisted` means every numeric field.
    pub metrics: &'static [&'static str],
    pub sum_unlisted: bool,
    pub ratios: &'static [Ratio],
    pub trend: Option<&'static str>,
    pub monthly: bool,
    pub columns: Columns,
}

pub struct Ratio {
    pub label: &'static str,
    pub part: &'static str,
    pub whole: &'static str,
}

pub enum Columns {
    Fixed(&'static [&'static str]),
    /// Fixed leading columns followed by every other key in first-seen order.
    Leading(&'static [&'static str]),
}

static WATER: Fields = Fields {
    search: &["month"],
    status: None,
    kind: None,
    range: Some("month"),
    dates: &["month"],
    currency: &[],
    metrics: &[
        "l1BulkSupply",
        "l2ZoneDistribution",
        "l3EndUserConsumption",
        "stage1Loss",
        "stage2Loss",
        "totalLoss",
    ],
    sum_unlisted: false,
    ratios: &[Ratio {
        label: "lossRate",
        part: "totalLoss",
        whole: "l1BulkSupply",
    }],
    trend: Some("totalLoss"),
    monthly: false,
    columns: Columns::Fixed(&[
        "month",
        "l1BulkSupply",
        "l2ZoneDistribution",
        "l3EndUserConsumption",
        "stage1Loss",
        "stage2Loss",
        "totalLoss",
    ]),
};

static ELECTRICITY: Fields = Fields {
    search: &["name", "accountNumber"],
    status: None,
    kind: Some("type"),
    range: None,
    dates: &[],
    currency: &[],
    metrics: &[],
    sum_unlisted: true,
    ratios: &[],
    trend: None,
    monthly: false,
    columns: Columns::Leading(&["name", "type", "accountNumber"]),
};

static STP: Fields = Fields {
    search: &["date"],
    status: None,
    kind: None,
    range: Some("date"),
    dates: &["date"],
    currency: &[],
    metrics: &[
        "tankerTrips",
        "tankerVolume",
        "inletSewage",
        "treatedWater",
        "tseOutput",
    ],
    sum_unlisted: false,
    ratios: &[Ratio {
        label: "tseRecovery",
        part: "tseOutput",
        whole: "inletSewage",
    }],
    trend: Some("tseOutput"),
    monthly: true,
    columns: Columns::Fixed(&[
        "date",
        "tankerTrips",
        "tankerVolume",
        "inletSewage",
        "treatedWater",
        "tseOutput",
        "bod",
        "cod",
        "tss",
        "ph",
        "chlorine",
    ]),
};

static CONTRACTOR_TRACKER: Fields = Fields {
    search: &["Contractor", "Service Provided", "Note"],
    status: Some("Status"),
    kind: Some("Contract Type"),
    range: Some("End Date"),
    dates: &["Start Date", "End Date"],
    currency: &["Contract OMR Monthly", "Contract Total OMR Year"],
    metrics: &[],
    sum_unlisted: false,
    ratios: &[],
    trend: None,
    monthly: false,
    columns: Columns::Fixed(&[
        "Contractor",
        "Service Provided",
        "Status",
        "Contract Type",
        "Start Date",
        "End Date",
        "Contract OMR Monthly",
        "Contract Total OMR Year",
        "Note",
    ]),
};

static CONTRACTORS: Fields = Fields {
    search: &["contractor", "service"],
    status: Some("status"),
    kind: Some("contractType"),
    range: Some("endDate"),
    dates: &["startDate", "endDate"],
    currency: &["annualValue"],
    metrics: &[],
    sum_unlisted: false,
    ratios: &[],
    trend: None,
    monthly: false,
    columns: Columns::Fixed(&[
        "id",
        "contractor",
        "service",
        "status",
        "contractType",
        "startDate",
        "endDate",
        "annualValue",
    ]),
};

static WASTE: Fields = Fields {
    search: &["date"],
    status: None,
    kind: None,
    range: Some("date"),
    dates: &["date"],
    currency: &[],
    metrics: &[
        "organic",
        "recyclable",
        "general",
        "hazardous",
        "totalCollected",
    ],
    sum_unlisted: false,
    ratios: &[Ratio {
        label: "recyclingShare",
        part: "recyclable",
        whole: "totalCollected",
    }],
    trend: Some("recyclingRate"),
    monthly: true,
    columns: Columns::Fixed(&[
        "date",
        "organic",
        "recyclable",
        "general",
        "hazardous",
        "totalCollected",
        "recyclingRate",
    ]),
};

impl Domain {
    pub fn fields(&self) -> &'static Fields {
        match self {
            Domain::Water => &WATER,
            Domain::Electricity => &ELECTRICITY,
            Domain::Stp => &STP,
            Domain::ContractorTracker => &CONTRACTOR_TRACKER,
            Domain::Contractors => &CONTRACTORS,
            Domain::Waste => &WASTE,
        }
    }

}
