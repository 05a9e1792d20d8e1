use crate::conf::Conf;
use crate::Result;
use std::fs::{create_dir_all, remove_dir_all};
use std::path::PathBuf;
use std::time::Duration;
use uuid::Uuid;

/// Removes the directory tree when dropped.
pub struct TempDir(PathBuf);

impl Drop for TempDir {
    fn drop(&mut self) {
        let _ = remove_dir_all(&self.0);
    }
}

/// Empty dev and public data dirs, no waste delay.
pub fn temp_conf() -> Result<(Conf, TempDir)> {
    let root = std::env::temp_dir().join(format!("utility-dashboard-{}", Uuid::new_v4()));
    let data_dir = root.join("data");
    let public_data_dir = root.join("public").join("data");
    create_dir_all(&data_dir)?;
    create_dir_all(&public_data_dir)?;
    let conf = Conf {
        data_dir,
        public_data_dir,
        waste_delay: Duration::ZERO,
        ..Conf::default()
    };
    Ok((conf, TempDir(root)))
}
