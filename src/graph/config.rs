//! Configuration for graph construction.
//!
//! The bonding threshold and the element vocabulary are the only tunable
//! parameters of the pipeline. Both can be set programmatically or loaded
//! from a TOML document:
//!
//! ```toml
//! threshold = 1.6
//! vocabulary = ["N", "O", "C"]
//! ```

use serde::{Deserialize, Serialize};

use super::error::Error;
use super::vocab::TypeDictionary;

/// Bonding threshold used when none is configured, in input length units.
pub const DEFAULT_THRESHOLD: f64 = 2.0;

/// Settings shared by every stage of one dataset build.
///
/// # Examples
///
/// ```
/// use atom_graph::GraphConfig;
///
/// let config = GraphConfig::default().with_threshold(1.5);
/// assert!(config.validate().is_ok());
///
/// let parsed = GraphConfig::from_toml_str("threshold = 1.5").unwrap();
/// assert_eq!(parsed, config);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GraphConfig {
    /// Maximum inclusive Euclidean distance at which two atoms may bond.
    pub threshold: f64,

    /// Known element symbols, in one-hot order.
    pub vocabulary: TypeDictionary,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            vocabulary: TypeDictionary::default(),
        }
    }
}

impl GraphConfig {
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_vocabulary(mut self, vocabulary: TypeDictionary) -> Self {
        self.vocabulary = vocabulary;
        self
    }

    /// Checks that the threshold is a usable distance.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidThreshold`] for negative, infinite, or NaN
    /// thresholds.
    pub fn validate(&self) -> Result<(), Error> {
        if !self.threshold.is_finite() || self.threshold < 0.0 {
            return Err(Error::InvalidThreshold(self.threshold));
        }
        Ok(())
    }

    /// Parses and validates a TOML configuration document.
    ///
    /// Missing keys take their default values.
    pub fn from_toml_str(source: &str) -> Result<Self, Error> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }
}
