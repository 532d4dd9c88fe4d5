//! Fitting tolerance configuration
//!
//! Tolerances can be serialized and loaded from RON configuration files.
//! Missing fields fall back to the defaults in [`crate::constants`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_AREA_TOLERANCE, DEFAULT_DETERMINANT_TOLERANCE};

/// Tolerances used to reject degenerate input
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FitConfig {
    /// Relative rounding threshold under which a spread or cofactor counts as zero
    pub determinant_tolerance: f64,
    /// Relative threshold under which a triangle area counts as zero
    pub area_tolerance: f64,
}

impl Default for FitConfig {
    fn default() -> Self {
        Self {
            determinant_tolerance: DEFAULT_DETERMINANT_TOLERANCE,
            area_tolerance: DEFAULT_AREA_TOLERANCE,
        }
    }
}

impl FitConfig {
    /// Set the determinant tolerance
    pub fn with_determinant_tolerance(mut self, tolerance: f64) -> Self {
        self.determinant_tolerance = tolerance.abs();
        self
    }

    /// Set the triangle area tolerance
    pub fn with_area_tolerance(mut self, tolerance: f64) -> Self {
        self.area_tolerance = tolerance.abs();
        self
    }

    /// Parse a configuration from RON text
    pub fn from_ron_str(content: &str) -> Result<Self, ConfigError> {
        ron::from_str(content).map_err(|e| ConfigError::Deserialize(e.to_string()))
    }

    /// Serialize the configuration to pretty-printed RON
    pub fn to_ron_string(&self) -> Result<String, ConfigError> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .map_err(|e| ConfigError::Serialize(e.to_string()))
    }

    /// Load a configuration file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        let config = Self::from_ron_str(&content)?;
        tracing::info!("Loaded fit config from {}", path.display());
        Ok(config)
    }

    /// Save the configuration to a file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let content = self.to_ron_string()?;
        std::fs::write(path, content).map_err(|e| ConfigError::Io(e.to_string()))?;
        tracing::info!("Saved fit config to {}", path.display());
        Ok(())
    }
}

/// Configuration file errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Serialization error: {0}")]
    Serialize(String),
    #[error("Deserialization error: {0}")]
    Deserialize(String),
}
