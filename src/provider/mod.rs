use crate::conf::Conf;
use crate::domain::Domain;
use crate::model::{self, Record};
use crate::{Error, Result};
use std::fmt::{Display, Formatter};
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::debug;

pub mod header_row;
pub mod pivot;

/// How a data file is laid out on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Records,
    HeaderRow,
    MeterRows,
}

/// One place a domain's records can come from.
pub enum Source {
    Static(fn() -> Result<Vec<Record>>),
    File { path: PathBuf, shape: Shape },
}

impl Display for Source {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Source::Static(_) => write!(f, "static"),
            Source::File { path, .. } => write!(f, "{}", path.display()),
        }
    }
}

impl Source {
    /// `None` when the file doesn't exist. A file that exists but can't be
    /// read or parsed is an error.
    pub fn load(&self) -> Result<Option<Vec<Record>>> {
        match self {
            Source::Static(records) => records().map(Some),
            Source::File { path, shape } => {
                let bytes = match std::fs::read(path) {
                    Ok(bytes) => bytes,
                    Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
                    Err(e) => return Err(e.into()),
                };
                let records = model::from_json(&bytes)?;
                Ok(Some(match shape {
                    Shape::Records => records,
                    Shape::HeaderRow => header_row::apply(records),
                    Shape::MeterRows => pivot::meters_by_month(records),
                }))
            }
        }
    }
}

fn files(conf: &Conf, file_name: &str, shape: Shape) -> Vec<Source> {
    conf.candidate_paths(file_name)
        .into_iter()
        .map(|path| Source::File { path, shape })
        .collect()
}

/// Ranked, the first source that has data wins.
pub fn sources(domain: Domain, conf: &Conf) -> Vec<Source> {
    match domain {
        Domain::Water => vec![Source::Static(|| model::to_records(&model::water::sample()))],
        Domain::Electricity => {
            let mut sources = files(conf, "electricity-readings.json", Shape::MeterRows);
            sources.push(Source::Static(|| {
                model::to_records(&model::electricity::sample())
            }));
            sources
        }
        Domain::Stp => {
            let mut sources = files(conf, "stp-plant-data.json", Shape::Records);
            sources.push(Source::Static(|| model::to_records(&model::stp::sample())));
            sources
        }
        Domain::ContractorTracker => files(conf, "contractor-tracker-data.json", Shape::HeaderRow),
        Domain::Contractors => vec![Source::Static(|| {
            model::to_records(&model::contractor::sample())
        })],
        Domain::Waste => vec![Source::Static(|| model::to_records(&model::waste::sample()))],
    }
}

pub fn load(domain: Domain, conf: &Conf) -> Result<Vec<Record>> {
    for source in sources(domain, conf) {
        if let Some(records) = source.load()? {
            debug!(%domain, %source, records = records.len(), "Loaded records");
            return Ok(records);
        }
    }
    Err(Error::NotFound(format!("No data source found for {domain}")))
}

#[cfg(test)]
mod test {
    use super::{Shape, Source};
    use crate::domain::Domain;
    use crate::test::temp_conf;
    use crate::{Error, Result};
    use serde_json::json;
    use std::fs;

    #[test]
    fn static_domains_always_load() -> Result<()> {
        let (conf, _dir) = temp_conf()?;
        assert_eq!(super::load(Domain::Water, &conf)?.len(), 15);
        assert_eq!(super::load(Domain::Contractors, &conf)?.len(), 6);
        assert_eq!(super::load(Domain::Waste, &conf)?.len(), 5);
        Ok(())
    }

    #[test]
    fn missing_contractor_file_is_not_found() -> Result<()> {
        let (conf, _dir) = temp_conf()?;
        let res = super::load(Domain::ContractorTracker, &conf);
        assert!(matches!(res, Err(Error::NotFound(_))));
        Ok(())
    }

    #[test]
    fn dev_path_wins_over_public_path() -> Result<()> {
        let (conf, _dir) = temp_conf()?;
        fs::write(
            conf.data_dir.join("stp-plant-data.json"),
            json!([{"date": "01/01/2025", "tseOutput": 1}]).to_string(),
        )?;
        fs::write(
            conf.public_data_dir.join("stp-plant-data.json"),
            json!([{"date": "01/01/2025"}, {"date": "02/01/2025"}]).to_string(),
        )?;
        assert_eq!(super::load(Domain::Stp, &conf)?.len(), 1);
        fs::remove_file(conf.data_dir.join("stp-plant-data.json"))?;
        assert_eq!(super::load(Domain::Stp, &conf)?.len(), 2);
        fs::remove_file(conf.public_data_dir.join("stp-plant-data.json"))?;
        assert_eq!(super::load(Domain::Stp, &conf)?.len(), 9);
        Ok(())
    }

    #[test]
    fn broken_file_stops_the_search() -> Result<()> {
        let (conf, _dir) = temp_conf()?;
        fs::write(conf.data_dir.join("stp-plant-data.json"), "[{\"date\":")?;
        let res = super::load(Domain::Stp, &conf);
        assert!(matches!(res, Err(Error::SerdeJson(_))));
        Ok(())
    }

    #[test]
    fn contractor_file_from_public_path() -> Result<()> {
        let (conf, _dir) = temp_conf()?;
        fs::write(
            conf.public_data_dir.join("contractor-tracker-data.json"),
            json!([
                {"Contractor Tracker": "Contractor", "__EMPTY": "Status"},
                {"Contractor Tracker": "Kalhat", "__EMPTY": "Active"},
            ])
            .to_string(),
        )?;
        let records = super::load(Domain::ContractorTracker, &conf)?;
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["Contractor"], json!("Kalhat"));
        assert_eq!(records[0]["Status"], json!("Active"));
        Ok(())
    }

    #[test]
    fn electricity_rows_are_pivoted() -> Result<()> {
        let (conf, _dir) = temp_conf()?;
        fs::write(
            conf.data_dir.join("electricity-readings.json"),
            json!([
                {"meter": "PS 01", "type": "PS", "accountNumber": "R1", "month": "Apr-24", "consumption": 10},
                {"meter": "PS 01", "type": "PS", "accountNumber": "R1", "month": "May-24", "consumption": 12},
            ])
            .to_string(),
        )?;
        let records = super::load(Domain::Electricity, &conf)?;
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["May-24"], json!(12));
        Ok(())
    }

    #[test]
    fn source_names() {
        let source = Source::File {
            path: "data/x.json".into(),
            shape: Shape::Records,
        };
        assert_eq!(source.to_string(), "data/x.json");
        assert_eq!(Source::Static(|| Ok(vec![])).to_string(), "static");
    }
}
