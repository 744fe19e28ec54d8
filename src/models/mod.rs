//! Data models exchanged with lookup backends and callers.
//!
//! This module contains the records returned by the ZIP→county resolver and
//! the vehicle lookup, plus the combined routing answer handed to callers.

pub mod contact_routing;
pub mod county_lookup;
pub mod vehicle;

pub use contact_routing::ContactRouting;
pub use county_lookup::CountyLookup;
pub use vehicle::VehicleRecord;
