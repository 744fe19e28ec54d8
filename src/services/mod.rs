//! Application service layer.
//!
//! Services hold the request logic between the MCP handlers and the lookup
//! backends: validation, timeouts, fallbacks, and metrics.

mod routing_service;
mod vehicle_service;

pub use routing_service::{RoutingService, RoutingServiceImpl};
pub use vehicle_service::{VehicleService, VehicleServiceImpl};
