use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::RangeError;
use crate::range::FloatRange;
use crate::tolerance::Tolerance;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid range `{name}`: {source}")]
    Range {
        name: String,
        #[source]
        source: RangeError,
    },
}

/// Named range definitions sharing one tolerance.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub tolerance: Tolerance,
    pub ranges: Vec<RangeConfig>,
}

/// A missing `start` means 0 and a missing `step` means 1, as with
/// [`FloatRange::until`].
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RangeConfig {
    pub name: String,
    pub start: Option<f64>,
    pub stop: f64,
    pub step: Option<f64>,
}

impl RangeConfig {
    pub fn build(&self, tolerance: Tolerance) -> Result<FloatRange, RangeError> {
        let range = FloatRange::new(
            self.start.unwrap_or(0.0),
            self.stop,
            self.step.unwrap_or(1.0),
        )?;
        Ok(range.with_tolerance(tolerance))
    }
}

impl Config {
    /// Every configured range, in order, failing on the first invalid one.
    pub fn build(&self) -> Result<Vec<(String, FloatRange)>, ConfigError> {
        self.ranges
            .iter()
            .map(|var| {
                let range = var.build(self.tolerance).map_err(|source| ConfigError::Range {
                    name: var.name.clone(),
                    source,
                })?;
                Ok((var.name.clone(), range))
            })
            .collect()
    }
}

/// Parses a JSON config document. Where the document comes from is up to the
/// caller; nothing here touches the filesystem.
///
/// ```
/// let config = float_range::parse_config(r#"{ "ranges": [{ "name": "x", "stop": 3.0 }] }"#)?;
/// let ranges = config.build()?;
/// assert_eq!(ranges[0].1.len(), 3);
/// # Ok::<(), float_range::ConfigError>(())
/// ```
pub fn parse_config(contents: &str) -> Result<Config, ConfigError> {
    let config: Config = serde_json::from_str(contents)?;
    debug!("parsed {} range(s)", config.ranges.len());

    Ok(config)
}
