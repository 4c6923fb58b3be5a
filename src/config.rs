//! Run configuration loaded from JSON.

use crate::road::{ParseError, Road};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while loading a run configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid road in config: {0}")]
    Parse(#[from] ParseError),
}

/// A road and how many ticks to simulate on it.
///
/// # Example
///
/// ```rust
/// use traffic_lights::config::SimulationConfig;
///
/// let config = SimulationConfig::from_json(r#"{ "road": "C..R", "steps": 4 }"#).unwrap();
///
/// assert_eq!(config.steps, 4);
/// assert_eq!(config.road().unwrap().len(), 4);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub road: String,
    #[serde(default)]
    pub steps: usize,
}

impl SimulationConfig {
    pub fn new(road: impl Into<String>, steps: usize) -> Self {
        Self {
            road: road.into(),
            steps,
        }
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.road()?;
        Ok(config)
    }

    /// Read and validate a config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        log::debug!("loaded config from {}", path.as_ref().display());
        Self::from_json(&contents)
    }

    /// The configured road, parsed.
    pub fn road(&self) -> Result<Road, ParseError> {
        self.road.parse()
    }
}
