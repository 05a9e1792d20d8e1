use serde_json::Value;
use time::{Date, Month};

/// Parses the date forms found in dashboard data: `DD/MM/YYYY`,
/// `YYYY-MM-DD` (time suffix ignored) and `Mon-YY` month labels.
pub fn parse(text: &str) -> Option<Date> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    if text.contains('/') {
        return parse_day_month_year(text);
    }
    parse_iso(text).or_else(|| parse_month_label(text))
}

pub fn parse_value(value: Option<&Value>) -> Option<Date> {
    match value? {
        Value::String(text) => parse(text),
        _ => None,
    }
}

fn parse_day_month_year(text: &str) -> Option<Date> {
    let mut parts = text.split('/');
    let day: u8 = parts.next()?.trim().parse().ok()?;
    let month: u8 = parts.next()?.trim().parse().ok()?;
    let year: i32 = parts.next()?.trim().parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Date::from_calendar_date(year, Month::try_from(month).ok()?, day).ok()
}

fn parse_iso(text: &str) -> Option<Date> {
    let date = text.get(..10)?;
    if text.len() > 10 && !text[10..].starts_with(['T', ' ']) {
        return None;
    }
    let mut parts = date.split('-');
    let year: i32 = parts.next()?.parse().ok()?;
    let month: u8 = parts.next()?.parse().ok()?;
    let day: u8 = parts.next()?.parse().ok()?;
    Date::from_calendar_date(year, Month::try_from(month).ok()?, day).ok()
}

fn parse_month_label(text: &str) -> Option<Date> {
    let (month, year) = text.split_once(['-', ' '])?;
    let month = month_from_name(month)?;
    let year: i32 = year.trim().parse().ok()?;
    let year = match year {
        0..=99 => 2000 + year,
        1000..=9999 => year,
        _ => return None,
    };
    Date::from_calendar_date(year, month, 1).ok()
}

fn month_from_name(name: &str) -> Option<Month> {
    let name = name.trim().to_lowercase();
    let month = match name.get(..3)? {
        "jan" => Month::January,
        "feb" => Month::February,
        "mar" => Month::March,
        "apr" => Month::April,
        "may" => Month::May,
        "jun" => Month::June,
        "jul" => Month::July,
        "aug" => Month::August,
        "sep" => Month::September,
        "oct" => Month::October,
        "nov" => Month::November,
        "dec" => Month::December,
        _ => return None,
    };
    Some(month)
}

/// `YYYY-MM` bucket used for monthly grouping.
pub fn month_key(date: Date) -> String {
    format!("{:04}-{:02}", date.year(), u8::from(date.month()))
}
