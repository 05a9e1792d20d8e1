use crate::domain::Domain;
use crate::model::Record;
use crate::Result;
use serde::Serialize;
use time::Date;

pub mod date;
pub mod export;
pub mod filter;
pub mod sort;
pub mod summary;

pub use filter::DateRange;
pub use sort::{SortDirection, SortState};
pub use summary::Summary;

/// Selections made on a dashboard table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewParams {
    pub search: Option<String>,
    pub status: Option<String>,
    pub kind: Option<String>,
    pub sort: SortState,
    pub range: DateRange,
}

#[derive(Debug, Serialize)]
pub struct View {
    pub records: Vec<Record>,
    pub summary: Summary,
}

/// Filtered and sorted, summaries cover the filtered rows only.
pub fn select(domain: Domain, records: Vec<Record>, params: &ViewParams) -> Vec<Record> {
    let fields = domain.fields();
    let mut records = filter::apply(
        records,
        fields,
        params.search.as_deref(),
        params.status.as_deref(),
        params.kind.as_deref(),
        &params.range,
    );
    if let Some(key) = &params.sort.key {
        sort::sort(&mut records, fields, key, params.sort.direction);
    }
    records
}

pub fn build(domain: Domain, records: Vec<Record>, params: &ViewParams, today: Date) -> View {
    let records = select(domain, records, params);
    let summary = summary::compute(&records, domain.fields(), today);
    View { records, summary }
}

pub fn export(domain: Domain, records: Vec<Record>, params: &ViewParams) -> Result<String> {
    to_csv(domain, &select(domain, records, params))
}

pub fn to_csv(domain: Domain, records: &[Record]) -> Result<String> {
    let columns = export::columns(domain.fields(), records);
    export::to_csv(records, &columns)
}
