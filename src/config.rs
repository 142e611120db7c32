//! Runtime knobs for the simulated services.
//!
//! Resolution order: built-in defaults, then the JSON file named by
//! `GLOBALSHIPP_CONFIG`, then `GLOBALSHIPP_LOOKUP_LATENCY_MS`.

use std::{fs, io, path::Path, time::Duration};

use serde::Deserialize;
use thiserror::Error;
use tracing::{info, warn};

use crate::infra::mock_desk::{
    SimulationPolicy, DEFAULT_LATENCY, DEFAULT_NOT_FOUND_PREFIX, DEFAULT_UNAVAILABLE_PREFIX,
};

pub const CONFIG_PATH_ENV: &str = "GLOBALSHIPP_CONFIG";
pub const LATENCY_ENV: &str = "GLOBALSHIPP_LOOKUP_LATENCY_MS";

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub lookup_latency_ms: u64,
    pub not_found_prefix: String,
    pub unavailable_prefix: String,
    /// How long lookup failure notices stay up before clearing themselves.
    pub notice_timeout_secs: u64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            lookup_latency_ms: DEFAULT_LATENCY.as_millis() as u64,
            not_found_prefix: DEFAULT_NOT_FOUND_PREFIX.to_string(),
            unavailable_prefix: DEFAULT_UNAVAILABLE_PREFIX.to_string(),
            notice_timeout_secs: 5,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("GLOBALSHIPP_LOOKUP_LATENCY_MS must be a whole number of milliseconds, got {0:?}")]
    InvalidLatency(String),
    #[error("{0} must not be blank")]
    EmptyPrefix(&'static str),
}

impl SiteConfig {
    /// Never fails: a broken file or env value is logged and skipped.
    pub fn load() -> Self {
        let mut config = match std::env::var(CONFIG_PATH_ENV) {
            Ok(path) => Self::from_file(&path).unwrap_or_else(|err| {
                warn!(error = %err, "ignoring site config file");
                Self::default()
            }),
            Err(_) => Self::default(),
        };

        if let Ok(raw) = std::env::var(LATENCY_ENV) {
            if let Err(err) = config.apply_latency_override(&raw) {
                warn!(error = %err, "ignoring latency override");
            }
        }

        info!(
            latency_ms = config.lookup_latency_ms,
            not_found = %config.not_found_prefix,
            unavailable = %config.unavailable_prefix,
            "site config loaded"
        );
        config
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let data = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&data)
    }

    pub fn from_json(data: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(data)?;
        config.validate()?;
        Ok(config)
    }

    /// A blank sentinel prefix would match every tracking number.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.not_found_prefix.trim().is_empty() {
            return Err(ConfigError::EmptyPrefix("not_found_prefix"));
        }
        if self.unavailable_prefix.trim().is_empty() {
            return Err(ConfigError::EmptyPrefix("unavailable_prefix"));
        }
        Ok(())
    }

    pub fn apply_latency_override(&mut self, raw: &str) -> Result<(), ConfigError> {
        self.lookup_latency_ms = raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidLatency(raw.to_string()))?;
        Ok(())
    }

    pub fn notice_timeout(&self) -> Duration {
        Duration::from_secs(self.notice_timeout_secs)
    }

    pub fn simulation_policy(&self) -> SimulationPolicy {
        SimulationPolicy {
            latency: Duration::from_millis(self.lookup_latency_ms),
            not_found_prefix: self.not_found_prefix.clone(),
            unavailable_prefix: self.unavailable_prefix.clone(),
        }
    }
}
