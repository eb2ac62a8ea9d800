use crate::client::{Error, Result};
use serde::Deserialize;
use std::{fs, path::Path, str::FromStr, time::Duration};

/// Client settings read from a TOML file.
///
/// ```toml
/// token = "c4f4de3d1ecc7edc4e8e5ba4d4e4a5c33e9b2e44"
/// connect_timeout_secs = 5
/// read_timeout_secs = 30.5
/// ```
#[derive(Debug, Deserialize)]
pub struct Config {
    pub token: String,
    pub base_url: Option<String>,
    pub user_agent: Option<String>,
    pub connect_timeout_secs: Option<f64>,
    pub read_timeout_secs: Option<f64>,
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        contents.parse()
    }

    pub fn connect_timeout(&self) -> Result<Option<Duration>> {
        timeout("connect_timeout_secs", self.connect_timeout_secs)
    }

    pub fn read_timeout(&self) -> Result<Option<Duration>> {
        timeout("read_timeout_secs", self.read_timeout_secs)
    }
}

impl FromStr for Config {
    type Err = Error;

    fn from_str(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }
}

fn timeout(name: &str, secs: Option<f64>) -> Result<Option<Duration>> {
    secs.map(|secs| {
        Duration::try_from_secs_f64(secs)
            .map_err(|_| Error::from(format!("`{}` must be a positive number of seconds", name)))
    })
    .transpose()
}
