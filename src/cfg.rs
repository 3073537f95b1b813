use std::collections::HashMap;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use config::{Config, Environment};
use serde::Deserialize;

use crate::error::{Error, Result};

pub const DEFAULT_LOG_DIR: &str = "/opt/sysadmws/gsuite-scripts/log";
pub const LOG_FILE: &str = "sheets.log";

/// The only variables looked up; the rest of the environment is never read.
const VARS: [&str; 2] = ["LOG_DIR", "SA_SECRETS_FILE"];

/// Settings read from the environment (`LOG_DIR`, `SA_SECRETS_FILE`).
#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub log_dir: PathBuf,
    #[serde(default)]
    pub sa_secrets_file: Option<PathBuf>,
}

impl Settings {
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| std::env::var_os(key))
    }

    /// Builds settings from `lookup`, called once per recognized variable.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<OsString>,
    {
        let mut vars = HashMap::new();
        for key in VARS {
            if let Some(value) = lookup(key) {
                let value = value.into_string().map_err(|_| Error::NonUnicodeVar(key))?;
                vars.insert(key.to_string(), value);
            }
        }

        let settings = Config::builder()
            .set_default("log_dir", DEFAULT_LOG_DIR)?
            .add_source(Environment::default().source(Some(vars)))
            .build()?
            .try_deserialize()?;
        Ok(settings)
    }

    pub fn log_path(&self) -> PathBuf {
        self.log_dir.join(LOG_FILE)
    }

    pub fn secrets_file(&self) -> Result<&Path> {
        match self.sa_secrets_file.as_deref() {
            Some(path) if !path.as_os_str().is_empty() => Ok(path),
            _ => Err(Error::MissingSecretsFile),
        }
    }
}
