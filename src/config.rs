//! Configuration management for Clean Truck Check.
//!
//! This module handles loading and validating configuration from environment variables.
//! Nothing is required: without a lookup URL the server uses the built-in sample
//! ZIP resolver and mocked vehicle lookup.

use crate::error::{ConfigError, ConfigResult};
use crate::vin::VinRule;
use std::env;
use std::path::PathBuf;

/// Configuration for the Clean Truck Check server.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of an HTTP ZIP→county service (optional)
    pub county_lookup_url: Option<String>,

    /// API key sent to the county service (optional)
    pub county_lookup_api_key: Option<String>,

    /// HTTP request timeout in seconds (default: 10)
    pub request_timeout: u64,

    /// Upper bound for one county or vehicle lookup in milliseconds (default: 5000)
    pub lookup_timeout_ms: u64,

    /// Artificial delay of the mocked backends in milliseconds (default: 1000)
    pub simulated_latency_ms: u64,

    /// VIN acceptance rule for this deployment (default: carb)
    pub vin_rule: VinRule,

    /// JSON file replacing the built-in routing table (optional)
    pub routing_table_path: Option<PathBuf>,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `COUNTY_LOOKUP_URL`: Base URL for the ZIP→county service
    /// - `COUNTY_LOOKUP_API_KEY`: API key for that service
    /// - `REQUEST_TIMEOUT`: HTTP timeout in seconds (default: 10)
    /// - `LOOKUP_TIMEOUT_MS`: Per-lookup timeout (default: 5000)
    /// - `SIMULATED_LATENCY_MS`: Mock backend delay (default: 1000)
    /// - `VIN_RULE`: `carb` or `strict` (default: carb)
    /// - `ROUTING_TABLE_PATH`: JSON routing table file
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // dotenvy::dotenv() doesn't print to stdout, which carries MCP traffic
        let _ = dotenvy::dotenv();

        let county_lookup_url = Self::optional_var("COUNTY_LOOKUP_URL");
        if let Some(url) = &county_lookup_url {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ConfigError::InvalidValue {
                    var: "COUNTY_LOOKUP_URL".to_string(),
                    reason: "Must start with http:// or https://".to_string(),
                });
            }
        }

        let county_lookup_api_key = Self::optional_var("COUNTY_LOOKUP_API_KEY");

        let request_timeout = Self::parse_env_u64("REQUEST_TIMEOUT", 10)?;
        let lookup_timeout_ms = Self::parse_env_u64("LOOKUP_TIMEOUT_MS", 5000)?;
        let simulated_latency_ms = Self::parse_env_u64("SIMULATED_LATENCY_MS", 1000)?;

        if lookup_timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                var: "LOOKUP_TIMEOUT_MS".to_string(),
                reason: "Must be greater than 0".to_string(),
            });
        }

        let vin_rule = match Self::optional_var("VIN_RULE") {
            Some(value) => value
                .parse::<VinRule>()
                .map_err(|reason| ConfigError::InvalidValue {
                    var: "VIN_RULE".to_string(),
                    reason,
                })?,
            None => VinRule::default(),
        };

        let routing_table_path = Self::optional_var("ROUTING_TABLE_PATH").map(PathBuf::from);

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            county_lookup_url,
            county_lookup_api_key,
            request_timeout,
            lookup_timeout_ms,
            simulated_latency_ms,
            vin_rule,
            routing_table_path,
            log_level,
        })
    }

    /// Read a variable, treating unset and blank the same.
    fn optional_var(var_name: &str) -> Option<String> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            county_lookup_url: None,
            county_lookup_api_key: None,
            request_timeout: 10,
            lookup_timeout_ms: 5000,
            simulated_latency_ms: 1000,
            vin_rule: VinRule::Carb,
            routing_table_path: None,
            log_level: "error".to_string(),
        }
    }
}
