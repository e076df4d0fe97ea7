//! Runtime configuration, read from the environment.
//!
//! A `.env` file in the working directory is loaded first when present.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `STORE_CHANNEL_CAPACITY` | `32` | Request channel size of each collection actor |
//! | `STORE_SEED` | `true` | Pre-populate the demo product and order |

use std::env;
use thiserror::Error;
use tracing::debug;

pub const CHANNEL_CAPACITY_VAR: &str = "STORE_CHANNEL_CAPACITY";
pub const SEED_VAR: &str = "STORE_SEED";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{var} must be a positive integer, got {value:?}")]
    InvalidCapacity { var: &'static str, value: String },

    #[error("{var} must be true or false, got {value:?}")]
    InvalidFlag { var: &'static str, value: String },
}

/// Settings for a [`StoreSystem`](crate::lifecycle::StoreSystem).
#[derive(Debug, Clone, PartialEq)]
pub struct StoreConfig {
    pub channel_capacity: usize,
    pub seed: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            channel_capacity: 32,
            seed: true,
        }
    }
}

impl StoreConfig {
    /// Loads `.env` if present, then reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Ok(path) = dotenvy::dotenv() {
            debug!(path = %path.display(), "Loaded .env");
        }
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup. Unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(CHANNEL_CAPACITY_VAR) {
            config.channel_capacity = match value.trim().parse::<usize>() {
                Ok(capacity) if capacity > 0 => capacity,
                _ => {
                    return Err(ConfigError::InvalidCapacity {
                        var: CHANNEL_CAPACITY_VAR,
                        value,
                    })
                }
            };
        }

        if let Some(value) = lookup(SEED_VAR) {
            config.seed = parse_flag(&value).ok_or_else(|| ConfigError::InvalidFlag {
                var: SEED_VAR,
                value,
            })?;
        }

        Ok(config)
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
