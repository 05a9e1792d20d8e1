use crate::{Error, Result};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

pub struct Conf {
    pub host: String,
    pub port: u16,
    pub data_dir: PathBuf,
    pub public_data_dir: PathBuf,
    pub waste_delay: Duration,
}

const HOST: &str = "DASHBOARD_HOST";
const PORT: &str = "DASHBOARD_PORT";
const DATA_DIR: &str = "DASHBOARD_DATA_DIR";
const PUBLIC_DATA_DIR: &str = "DASHBOARD_PUBLIC_DATA_DIR";
const WASTE_DELAY_MS: &str = "DASHBOARD_WASTE_DELAY_MS";

impl Default for Conf {
    fn default() -> Self {
        Conf {
            host: "127.0.0.1".into(),
            port: 8000,
            data_dir: "data".into(),
            public_data_dir: "public/data".into(),
            waste_delay: Duration::from_millis(500),
        }
    }
}

impl Conf {
    pub fn from_env() -> Result<Conf> {
        Conf::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Conf> {
        let default = Conf::default();
        Ok(Conf {
            host: lookup(HOST).unwrap_or(default.host),
            port: parse_var(PORT, lookup(PORT))?.unwrap_or(default.port),
            data_dir: lookup(DATA_DIR).map(Into::into).unwrap_or(default.data_dir),
            public_data_dir: lookup(PUBLIC_DATA_DIR)
                .map(Into::into)
                .unwrap_or(default.public_data_dir),
            waste_delay: parse_var::<u64>(WASTE_DELAY_MS, lookup(WASTE_DELAY_MS))?
                .map(Duration::from_millis)
                .unwrap_or(default.waste_delay),
        })
    }

    /// Development path first, deployed path second.
    pub fn candidate_paths(&self, file_name: &str) -> Vec<PathBuf> {
        vec![
            self.data_dir.join(file_name),
            self.public_data_dir.join(file_name),
        ]
    }
}

fn parse_var<T: FromStr>(key: &str, value: Option<String>) -> Result<Option<T>> {
    match value {
        Some(value) => value
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| Error::InvalidInput(format!("{key} is not a valid number: {value}"))),
        None => Ok(None),
    }
}

#[cfg(test)]
mod test {
    use super::Conf;
    use crate::{Error, Result};
    use std::collections::HashMap;
    use std::path::PathBuf;
    use std::time::Duration;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn defaults() -> Result<()> {
        let conf = Conf::from_lookup(lookup(&[]))?;
        assert_eq!(conf.host, "127.0.0.1");
        assert_eq!(conf.port, 8000);
        assert_eq!(conf.data_dir, PathBuf::from("data"));
        assert_eq!(conf.public_data_dir, PathBuf::from("public/data"));
        assert_eq!(conf.waste_delay, Duration::from_millis(500));
        Ok(())
    }

    #[test]
    fn overrides() -> Result<()> {
        let conf = Conf::from_lookup(lookup(&[
            ("DASHBOARD_PORT", "9090"),
            ("DASHBOARD_DATA_DIR", "/srv/dev"),
            ("DASHBOARD_WASTE_DELAY_MS", "0"),
        ]))?;
        assert_eq!(conf.port, 9090);
        assert_eq!(conf.data_dir, PathBuf::from("/srv/dev"));
        assert_eq!(conf.waste_delay, Duration::ZERO);
        Ok(())
    }

    #[test]
    fn invalid_port() {
        let res = Conf::from_lookup(lookup(&[("DASHBOARD_PORT", "eighty")]));
        assert!(matches!(res, Err(Error::InvalidInput(_))));
    }

    #[test]
    fn candidate_paths_are_ranked() {
        let conf = Conf::default();
        assert_eq!(
            conf.candidate_paths("stp-plant-data.json"),
            vec![
                PathBuf::from("data/stp-plant-data.json"),
                PathBuf::from("public/data/stp-plant-data.json"),
            ]
        );
    }
}
