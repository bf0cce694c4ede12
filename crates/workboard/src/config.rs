//! Configuration: store binding, table names and worker roster
//!
//! Configuration comes from one of three places, in order of preference:
//! an explicit TOML file, a JSON secret provisioned in the
//! `WORKBOARD_SECRET` environment variable, or the built-in defaults.
//!
//! ```toml
//! [store]
//! root = "data"
//! spreadsheet = "Growth Checklist"
//!
//! [tables]
//! order_form = "Order Form"
//! job_board = "Job Board"
//!
//! [board]
//! roster = ["Alex", "Sam"]
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::schema::OTHER_WORKER;

/// Environment variable holding the pre-provisioned JSON secret
pub const SECRET_ENV: &str = "WORKBOARD_SECRET";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid TOML config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid JSON secret: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Full configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BoardConfig {
    pub store: StoreConfig,
    pub tables: TablesConfig,
    pub board: BoardSettings,
}

/// Where the spreadsheet lives
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StoreConfig {
    /// Directory holding spreadsheets
    pub root: PathBuf,
    /// Human-readable spreadsheet name
    pub spreadsheet: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("data"),
            spreadsheet: "Growth Checklist".to_string(),
        }
    }
}

/// Names of the two tables inside the spreadsheet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TablesConfig {
    pub order_form: String,
    pub job_board: String,
}

impl Default for TablesConfig {
    fn default() -> Self {
        Self {
            order_form: "Order Form".to_string(),
            job_board: "Job Board".to_string(),
        }
    }
}

/// Job board settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BoardSettings {
    /// Workers that may be assigned; "Other" is always accepted as well
    pub roster: Vec<String>,
}

impl BoardConfig {
    /// Load from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: BoardConfig = toml::from_str(&text)?;
        config.validate()?;
        debug!(path = %path.display(), "loaded config file");
        Ok(config)
    }

    /// Parse a JSON secret
    pub fn from_secret(json: &str) -> Result<Self, ConfigError> {
        let config: BoardConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read the secret from [`SECRET_ENV`], if set
    pub fn from_env() -> Result<Option<Self>, ConfigError> {
        match std::env::var(SECRET_ENV) {
            Ok(json) => {
                debug!("using config secret from {}", SECRET_ENV);
                Self::from_secret(&json).map(Some)
            }
            Err(_) => Ok(None),
        }
    }

    /// File if given, else the environment secret, else defaults
    pub fn resolve(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            return Self::load(path);
        }
        Ok(Self::from_env()?.unwrap_or_default())
    }

    /// Check names and roster entries
    pub fn validate(&self) -> Result<(), ConfigError> {
        let names = [
            ("store.spreadsheet", &self.store.spreadsheet),
            ("tables.order_form", &self.tables.order_form),
            ("tables.job_board", &self.tables.job_board),
        ];
        for (key, value) in names {
            if value.trim().is_empty() {
                return Err(ConfigError::Invalid(format!("{key} must not be empty")));
            }
        }

        for name in &self.board.roster {
            if name.trim().is_empty() {
                return Err(ConfigError::Invalid("roster entries must not be blank".into()));
            }
            if name == OTHER_WORKER {
                return Err(ConfigError::Invalid(format!(
                    "{OTHER_WORKER:?} is implied and must not be listed in the roster"
                )));
            }
        }
        Ok(())
    }
}
