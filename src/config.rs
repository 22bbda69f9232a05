//! Rota configuration.
//!
//! Load settings from TOML to control the tie-break seed, capacity
//! normalization and description rendering without code changes.
//!
//! # Examples
//!
//! ```
//! use u_rota::config::RotaConfig;
//!
//! let config = RotaConfig::from_toml_str(r#"
//!     seed = 42
//!     date_format = "%d/%m/%Y"
//! "#).unwrap();
//!
//! assert_eq!(config.seed, 42);
//! assert!(config.clamp_capacity);
//! ```
//!
//! Use defaults when the file is missing:
//!
//! ```
//! use u_rota::config::RotaConfig;
//!
//! let config = RotaConfig::load("rota.toml").unwrap_or_default();
//! assert_eq!(config.seed, 0);
//! ```

use std::path::Path;

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default `date_format`: ISO 8601.
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Scheduling and formatting settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct RotaConfig {
    /// Tie-break seed for reproducible regeneration.
    pub seed: u64,

    /// Reduce each job's capacity to its pool size during validation.
    pub clamp_capacity: bool,

    /// `chrono` format string for dates in the description.
    pub date_format: String,

    /// Append the fairness note, additional details and footer to the description.
    pub include_footer: bool,
}

impl Default for RotaConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            clamp_capacity: true,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            include_footer: true,
        }
    }
}

impl RotaConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if the file doesn't exist, contains invalid TOML, or
    /// fails [`validate`](Self::validate).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Sets the seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the date format.
    pub fn with_date_format(mut self, format: impl Into<String>) -> Self {
        self.date_format = format.into();
        self
    }

    /// Enables or disables capacity clamping.
    pub fn with_clamp_capacity(mut self, clamp: bool) -> Self {
        self.clamp_capacity = clamp;
        self
    }

    /// Enables or disables the description footer.
    pub fn with_footer(mut self, include: bool) -> Self {
        self.include_footer = include;
        self
    }

    /// Checks settings that TOML parsing cannot.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.date_format.trim().is_empty() {
            return Err(ConfigError::Invalid("date_format is empty".into()));
        }
        if StrftimeItems::new(&self.date_format).any(|item| matches!(item, Item::Error)) {
            return Err(ConfigError::Invalid(format!(
                "date_format '{}' is not a valid strftime pattern",
                self.date_format
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RotaConfig::new();
        assert_eq!(config.seed, 0);
        assert!(config.clamp_capacity);
        assert!(config.include_footer);
        assert_eq!(config.date_format, DEFAULT_DATE_FORMAT);
    }

    #[test]
    fn test_from_toml_partial() {
        let config = RotaConfig::from_toml_str("seed = 7\ninclude_footer = false").unwrap();
        assert_eq!(config.seed, 7);
        assert!(!config.include_footer);
        assert!(config.clamp_capacity);
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(RotaConfig::from_toml_str("").unwrap(), RotaConfig::default());
    }

    #[test]
    fn test_invalid_toml() {
        let err = RotaConfig::from_toml_str("seed = \"abc\"").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn test_empty_date_format_rejected() {
        let err = RotaConfig::from_toml_str("date_format = \"\"").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_bad_strftime_rejected() {
        let err = RotaConfig::new().with_date_format("%Q").validate().unwrap_err();
        assert!(err.to_string().contains("%Q"));
    }

    #[test]
    fn test_missing_file() {
        let err = RotaConfig::load("/nonexistent/rota.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_builders() {
        let config = RotaConfig::new()
            .with_seed(3)
            .with_date_format("%d.%m.%Y")
            .with_clamp_capacity(false)
            .with_footer(false);
        assert_eq!(config.seed, 3);
        assert_eq!(config.date_format, "%d.%m.%Y");
        assert!(!config.clamp_capacity);
        assert!(!config.include_footer);
    }
}
