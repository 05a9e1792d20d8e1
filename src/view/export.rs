use super::filter::text_of;
use crate::domain::{Columns, Fields};
use crate::model::Record;
use crate::Result;

pub fn columns(fields: &Fields, records: &[Record]) -> Vec<String> {
    match fields.columns {
        Columns::Fixed(columns) => columns.iter().map(|it| it.to_string()).collect(),
        Columns::Leading(leading) => {
            let mut columns: Vec<String> = leading.iter().map(|it| it.to_string()).collect();
            for record in records {
                for key in record.keys() {
                    if !columns.contains(key) {
                        columns.push(key.clone());
                    }
                }
            }
            columns
        }
    }
}

/// Header line plus one line per record, cells quoted only when needed.
pub fn to_csv(records: &[Record], columns: &[String]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(vec![]);
    writer.write_record(columns)?;
    for record in records {
        writer.write_record(columns.iter().map(|column| {
            record
                .get(column)
                .and_then(text_of)
                .map(|it| it.into_owned())
                .unwrap_or_default()
        }))?;
    }
    Ok(String::from_utf8(writer.into_inner()?)?)
}
