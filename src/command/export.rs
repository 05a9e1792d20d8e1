use crate::conf::Conf;
use crate::domain::Domain;
use crate::view::{self, ViewParams};
use crate::{provider, Error, Result};
use std::io::Write;
use std::str::FromStr;
use tracing::info;

/// `export <domain> [output]`, full unfiltered table. Writes to stdout without an output path.
pub fn run(args: &[String], conf: &Conf) -> Result<()> {
    let domain = match args.first() {
        Some(domain) => Domain::from_str(domain)
            .map_err(|_| Error::CLI(format!("Unknown domain: {domain}")))?,
        None => Err(Error::CLI("Usage: export <domain> [output]".into()))?,
    };
    let records = provider::load(domain, conf)?;
    let count = records.len();
    let csv = view::export(domain, records, &ViewParams::default())?;
    match args.get(1) {
        Some(path) => {
            std::fs::write(path, csv)?;
            info!(%domain, path = %path, records = count, "Exported");
        }
        None => std::io::stdout().write_all(csv.as_bytes())?,
    }
    Ok(())
}
