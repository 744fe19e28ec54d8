//! Clean Truck Check - VIN validation and county contact routing for CARB
//! Clean Truck Check, served over the Model Context Protocol.
//!
//! # Architecture
//!
//! - **vin**: VIN normalization and validation under the CARB or strict rule
//! - **routing**: County routing table, phone router, and near-miss suggestions
//! - **domain**: Value objects for counties, ZIP codes, and phone numbers
//! - **models**: Lookup records and the combined routing answer
//! - **resolvers**: ZIP→county and vehicle lookup backends behind async traits
//! - **client**: HTTP client for a ZIP→county lookup service
//! - **services**: Request logic with timeouts, fallbacks, and metrics
//! - **server**: MCP tools over stdio
//! - **config**: Configuration management from environment variables
//! - **error**: Custom error types for precise error handling

pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod metrics;
pub mod models;
pub mod resolvers;
pub mod routing;
pub mod server;
pub mod services;
pub mod vin;

pub use config::Config;
pub use domain::{format_for_display, to_tel_link, PhoneNumber, ZipCode};
pub use error::{ConfigError, LookupError, RoutingTableError, VehicleLookupError};
pub use metrics::{LookupTimer, Metrics, MetricsSummary};
pub use models::{ContactRouting, CountyLookup, VehicleRecord};
pub use routing::{list_all_mappings, resolve_phone, PhoneRouter, Region, RoutingTable};
pub use server::CleanTruckCheckServer;
pub use vin::{validate_vin, ValidationResult, VinRule, VinValidator};
