//! Configuration loading and validation.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::calculate::{DensityParams, TrendParams, WedgeLayout};

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Tuning for every analytics pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    #[serde(default)]
    pub layout: WedgeLayout,

    #[serde(default)]
    pub density: DensityParams,

    #[serde(default)]
    pub trend: TrendParams,
}

impl AnalyticsConfig {
    /// Validate the analytics parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let layout = &self.layout;
        if layout.max_countries == 0 {
            return Err(invalid("layout.max_countries must be greater than 0"));
        }
        if !(layout.shrink > 0.0 && layout.shrink <= 1.0) {
            return Err(invalid("layout.shrink must be in (0, 1]"));
        }
        if layout.inner_radius < 0.0 || layout.inner_radius > layout.outer_radius {
            return Err(invalid(
                "layout.inner_radius must be non-negative and not exceed outer_radius",
            ));
        }

        let density = &self.density;
        if density.bin_count == 0 {
            return Err(invalid("density.bin_count must be greater than 0"));
        }
        if !(density.bandwidth_divisor > 0.0) {
            return Err(invalid("density.bandwidth_divisor must be greater than 0"));
        }
        if !(density.fallback_bandwidth > 0.0) {
            return Err(invalid("density.fallback_bandwidth must be greater than 0"));
        }
        if density.padding < 0.0 {
            return Err(invalid("density.padding must not be negative"));
        }
        if density.sample_count == 0 {
            return Err(invalid("density.sample_count must be greater than 0"));
        }

        if self.trend.min_points < 2 {
            return Err(invalid("trend.min_points must be at least 2"));
        }

        Ok(())
    }
}

fn invalid(msg: &str) -> ConfigError {
    ConfigError::ValidationError(msg.to_string())
}

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Directory holding `games.jsonl` and `country_games.jsonl`
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub analytics: AnalyticsConfig,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./data")
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
            analytics: AnalyticsConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path` if it exists, otherwise fall back to defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.analytics.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.data_dir, PathBuf::from("./data"));
        assert_eq!(config.log_level, "info");
        assert_eq!(config.analytics.layout.max_countries, 28);
        assert_eq!(config.analytics.layout.shrink, 0.7);
        assert_eq!(config.analytics.density.bin_count, 20);
        assert_eq!(config.analytics.density.bandwidth_divisor, 12.0);
        assert_eq!(config.analytics.trend.min_points, 3);
    }

    #[test]
    fn test_config_validation_ok() {
        assert!(AppConfig::default().validate().is_ok());
    }

    #[test]
    fn test_config_validation_bad_shrink() {
        let mut config = AppConfig::default();
        config.analytics.layout.shrink = 0.0;
        assert!(config.validate().is_err());

        config.analytics.layout.shrink = 1.2;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_bad_radii() {
        let mut config = AppConfig::default();
        config.analytics.layout.inner_radius = 300.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_bad_density() {
        let mut config = AppConfig::default();
        config.analytics.density.bin_count = 0;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.analytics.density.bandwidth_divisor = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_bad_trend() {
        let mut config = AppConfig::default();
        config.analytics.trend.min_points = 1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
            log_level = "debug"

            [analytics.layout]
            max_countries = 12

            [analytics.density]
            bin_count = 30
        "#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();

        assert_eq!(config.log_level, "debug");
        assert_eq!(config.data_dir, PathBuf::from("./data"));
        assert_eq!(config.analytics.layout.max_countries, 12);
        assert_eq!(config.analytics.layout.outer_radius, 220.0);
        assert_eq!(config.analytics.density.bin_count, 30);
        assert_eq!(config.analytics.density.sample_count, 200);
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let toml_str = toml::to_string(&config).unwrap();

        let parsed: AppConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(config.data_dir, parsed.data_dir);
        assert_eq!(config.analytics, parsed.analytics);
    }

    #[test]
    fn test_from_file_rejects_invalid() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[analytics.density]\nbin_count = 0\n").unwrap();

        let err = AppConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let dir = TempDir::new().unwrap();
        let config = AppConfig::load_or_default(&dir.path().join("missing.toml")).unwrap();
        assert_eq!(config.log_level, "info");
    }
}
