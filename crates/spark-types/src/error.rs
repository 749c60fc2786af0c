//! Error types for spark-tracker

use thiserror::Error;

use crate::tier::{Feature, Tier};

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid vehicle configuration: {0}")]
    InvalidVehicle(String),

    #[error("Invalid trip input: {0}")]
    InvalidInput(String),

    #[error("Trip not found: {0}")]
    TripNotFound(String),

    #[error("{} limit reached: {limit} trips per week", .tier.label())]
    TierLimitReached { tier: Tier, limit: usize },

    #[error("{} requires a higher plan than {}", .feature.label(), .tier.label())]
    FeatureLocked { feature: Feature, tier: Tier },
}

pub type Result<T> = std::result::Result<T, Error>;
