use super::date;
use crate::domain::Fields;
use crate::model::Record;
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use time::Date;

#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_counts: Option<StatusCounts>,
    pub totals: Map<String, Value>,
    pub ratios: Map<String, Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trend: Option<Trend>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub monthly: Vec<MonthlyTotals>,
}

/// The predicates overlap, a record can count towards more than one.
#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StatusCounts {
    pub active: usize,
    pub expired_by_date: usize,
    /// Literal substring match, "Expiring Soon" does not count.
    pub status_mentions_expire: usize,
}

#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Trend {
    pub metric: String,
    pub latest: f64,
    pub previous: f64,
    pub delta: f64,
    pub percent_change: f64,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct MonthlyTotals {
    pub month: String,
    pub totals: Map<String, Value>,
}

pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// `part / whole` as a percentage, 0 when `whole` is 0.
pub fn percentage(part: f64, whole: f64) -> f64 {
    if whole == 0.0 {
        return 0.0;
    }
    part / whole * 100.0
}

fn number(record: &Record, field: &str) -> Option<f64> {
    record.get(field).and_then(Value::as_f64)
}

pub fn compute(records: &[Record], fields: &Fields, today: Date) -> Summary {
    let totals = totals(records, fields);
    let ratios = fields
        .ratios
        .iter()
        .map(|ratio| {
            let part = sum(records, ratio.part);
            let whole = sum(records, ratio.whole);
            (
                ratio.label.to_string(),
                Value::from(round_to(percentage(part, whole), 1)),
            )
        })
        .collect();
    Summary {
        total: records.len(),
        status_counts: fields
            .status
            .map(|status| status_counts(records, status, fields.range, today)),
        totals,
        ratios,
        trend: match (fields.trend, fields.range) {
            (Some(metric), Some(range)) => trend(records, metric, range),
            _ => None,
        },
        monthly: match (fields.monthly, fields.range) {
            (true, Some(range)) => monthly(records, fields, range),
            _ => vec![],
        },
    }
}

fn sum(records: &[Record], field: &str) -> f64 {
    records.iter().filter_map(|it| number(it, field)).sum()
}

fn metric_names(records: &[Record], fields: &Fields) -> Vec<String> {
    if !fields.sum_unlisted {
        return fields.metrics.iter().map(|it| it.to_string()).collect();
    }
    let mut names: Vec<String> = vec![];
    for record in records {
        for (key, value) in record {
            if value.is_number() && !names.contains(key) {
                names.push(key.clone());
            }
        }
    }
    names
}

fn totals(records: &[Record], fields: &Fields) -> Map<String, Value> {
    metric_names(records, fields)
        .into_iter()
        .map(|name| {
            let total = round_to(sum(records, &name), 2);
            (name, Value::from(total))
        })
        .collect()
}

pub fn status_counts(
    records: &[Record],
    status_field: &str,
    date_field: Option<&str>,
    today: Date,
) -> StatusCounts {
    let status = |record: &Record| {
        record
            .get(status_field)
            .and_then(Value::as_str)
            .map(str::to_lowercase)
            .unwrap_or_default()
    };
    StatusCounts {
        active: records.iter().filter(|it| status(it) == "active").count(),
        expired_by_date: records
            .iter()
            .filter(|it| {
                date_field
                    .and_then(|field| date::parse_value(it.get(field)))
                    .is_some_and(|end| end < today)
            })
            .count(),
        status_mentions_expire: records
            .iter()
            .filter(|it| status(it).contains("expire"))
            .count(),
    }
}

/// Compares the two chronologically latest records that carry both a date and the metric.
pub fn trend(records: &[Record], metric: &str, date_field: &str) -> Option<Trend> {
    let mut points: Vec<(Date, f64)> = records
        .iter()
        .filter_map(|it| Some((date::parse_value(it.get(date_field))?, number(it, metric)?)))
        .collect();
    points.sort_by_key(|(date, _)| *date);
    let [.., (_, previous), (_, latest)] = points.as_slice() else {
        return None;
    };
    let delta = latest - previous;
    Some(Trend {
        metric: metric.to_string(),
        latest: *latest,
        previous: *previous,
        delta: round_to(delta, 1),
        percent_change: round_to(percentage(delta, *previous), 1),
    })
}

fn monthly(records: &[Record], fields: &Fields, date_field: &str) -> Vec<MonthlyTotals> {
    let mut months: BTreeMap<String, Vec<&Record>> = BTreeMap::new();
    for record in records {
        if let Some(date) = date::parse_value(record.get(date_field)) {
            months.entry(date::month_key(date)).or_default().push(record);
        }
    }
    months
        .into_iter()
        .map(|(month, group)| MonthlyTotals {
            month,
            totals: fields
                .metrics
                .iter()
                .map(|metric| {
                    let total: f64 = group.iter().filter_map(|it| number(it, metric)).sum();
                    (metric.to_string(), Value::from(round_to(total, 2)))
                })
                .collect(),
        })
        .collect()
}
