//! Lookup backends behind async traits.
//!
//! Services depend on [`CountyResolver`] and [`VehicleLookup`] trait objects so
//! that the HTTP resolver, the built-in sample resolver, and test mocks are
//! interchangeable.

mod http_county_resolver;
mod mock_vehicle_lookup;
mod static_county_resolver;
mod traits;

pub use http_county_resolver::HttpCountyResolver;
pub use mock_vehicle_lookup::MockVehicleLookup;
pub use static_county_resolver::StaticCountyResolver;
pub use traits::{CountyResolver, VehicleLookup};
