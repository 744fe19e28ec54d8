//! Error types for Clean Truck Check.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! VIN format problems are deliberately absent: they are folded into
//! [`ValidationResult`](crate::vin::ValidationResult) values and never raised.

use thiserror::Error;

/// Errors that can occur when resolving a ZIP code to a county.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// ZIP code is not five digits
    #[error("Invalid ZIP code format: {0}")]
    InvalidFormat(String),

    /// ZIP code is well formed but unknown to the resolver
    #[error("ZIP code not found: {0}")]
    NotFound(String),

    /// Transport failure or malformed upstream response
    #[error("Network error: {0}")]
    Network(String),

    /// Resolver did not answer within the configured timeout
    #[error("County lookup timed out after {0} ms")]
    Timeout(u64),
}

/// Errors that can occur when looking up a vehicle record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VehicleLookupError {
    /// VIN did not pass format validation
    #[error("{0}")]
    InvalidVin(String),

    /// No record exists for this VIN
    #[error("Vehicle not found in CARB database")]
    NotFound,

    /// Lookup did not complete within the configured timeout
    #[error("Vehicle lookup timed out after {0} ms")]
    Timeout(u64),

    /// Generic lookup failure
    #[error("Vehicle lookup failed: {0}")]
    Other(String),
}

/// Errors raised while building a routing table.
#[derive(Error, Debug)]
pub enum RoutingTableError {
    /// A county appears in more than one routing set
    #[error("County '{county}' appears in both {first} and {second}")]
    Overlap {
        county: String,
        first: &'static str,
        second: &'static str,
    },

    /// A county name is empty or carries surrounding whitespace
    #[error("Invalid county name in {region}: {name:?}")]
    InvalidCounty { region: &'static str, name: String },

    /// A routing phone number is not in NNN-NNN-NNNN form
    #[error("Invalid routing phone number: {0}")]
    InvalidPhone(String),

    /// Failed to read a routing table file
    #[error("Failed to read routing table: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse a routing table file
    #[error("Failed to parse routing table: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with LookupError
pub type LookupResult<T> = Result<T, LookupError>;

/// Convenience type alias for Results with VehicleLookupError
pub type VehicleLookupResult<T> = Result<T, VehicleLookupError>;

/// Convenience type alias for Results with RoutingTableError
pub type RoutingTableResult<T> = Result<T, RoutingTableError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
