//! Configuration management for spark-tracker
//!
//! Config stored at: ~/.config/spark-tracker/config.json

use serde::{Deserialize, Serialize};
use spark_domain::model::{VehicleConfiguration, DEFAULT_FUEL_PRICE};
use spark_types::{ConfigError, OutputFormat, Result, Tier};
use std::path::{Path, PathBuf};

const APP_DIR: &str = "spark-tracker";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Subscription tier (free, basic, pro)
    #[serde(default)]
    pub tier: Tier,

    /// Local fuel price ($/gal)
    #[serde(default = "default_fuel_price")]
    pub fuel_price_per_gallon: f64,

    /// Vehicle used when a command does not name one
    #[serde(default)]
    pub vehicle: VehicleConfiguration,

    /// Default output format (json, table)
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Data directory override for the trip log
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

fn default_fuel_price() -> f64 {
    DEFAULT_FUEL_PRICE
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tier: Tier::default(),
            fuel_price_per_gallon: default_fuel_price(),
            vehicle: VehicleConfiguration::default(),
            output_format: OutputFormat::default(),
            data_dir: None,
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join(APP_DIR);
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Get the directory holding the trip log
    pub fn data_dir(&self) -> Result<PathBuf> {
        if let Some(ref dir) = self.data_dir {
            return Ok(dir.clone());
        }

        let data_dir = dirs::data_dir()
            .ok_or(ConfigError::NotFound)?
            .join(APP_DIR);
        Ok(data_dir)
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load config from an explicit path, or default if it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)
            .map_err(|e| ConfigError::ParseError(format!("{}: {}", path.display(), e)))?;
        if !config.fuel_price_per_gallon.is_finite() || config.fuel_price_per_gallon < 0.0 {
            return Err(ConfigError::ParseError(format!(
                "fuel price must be a non-negative amount, got {}",
                config.fuel_price_per_gallon
            ))
            .into());
        }
        Ok(config)
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
            .map_err(|e| ConfigError::SaveError(format!("{}: {}", path.display(), e)))?;
        log::debug!("saved config to {}", path.display());
        Ok(())
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Spark Tracker Configuration")?;
        writeln!(f, "===========================")?;
        writeln!(f)?;
        writeln!(
            f,
            "Tier:           {} (${:.2}/mo)",
            self.tier,
            self.tier.monthly_price_cents() as f64 / 100.0
        )?;
        match self.tier.weekly_trip_limit() {
            Some(limit) => writeln!(f, "Trip limit:     {} per week", limit)?,
            None => writeln!(f, "Trip limit:     unlimited")?,
        }
        match self.tier.retention_days() {
            Some(days) => writeln!(f, "History:        {} days", days)?,
            None => writeln!(f, "History:        unlimited")?,
        }
        writeln!(f, "Fuel price:     ${:.2}/gal", self.fuel_price_per_gallon)?;
        writeln!(f, "Vehicle:        {}", self.vehicle)?;
        writeln!(f, "Output format:  {}", self.output_format)?;
        writeln!(
            f,
            "Data dir:       {}",
            self.data_dir()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|_| "(error)".to_string())
        )?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:    {}", path.display())?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spark_domain::model::{BodyClass, EngineClass};
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_loads_default() {
        let dir = tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.tier, Tier::Free);
        assert!((config.fuel_price_per_gallon - 3.50).abs() < f64::EPSILON);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = Config {
            tier: Tier::Pro,
            fuel_price_per_gallon: 3.89,
            vehicle: VehicleConfiguration::gas(BodyClass::PickupTruck, EngineClass::V8)
                .unwrap(),
            output_format: OutputFormat::Json,
            data_dir: Some(dir.path().join("data")),
        };
        config.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"tier":"basic"}"#).unwrap();
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.tier, Tier::Basic);
        assert_eq!(config.vehicle, VehicleConfiguration::default());
        assert_eq!(config.output_format, OutputFormat::Table);
    }

    #[test]
    fn test_invalid_vehicle_is_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(
            &path,
            r#"{"vehicle":{"body":"Coupe","engine":"V4","fuel":"Electric"}}"#,
        )
        .unwrap();
        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn test_display_lists_tier_limits() {
        let text = Config::default().to_string();
        assert!(text.contains("Tier:           Free ($0.00/mo)"));
        assert!(text.contains("10 per week"));
        assert!(text.contains("Sedan / V6 / Gas"));
    }
}
