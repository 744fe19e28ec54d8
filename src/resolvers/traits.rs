use crate::domain::ZipCode;
use crate::error::{LookupResult, VehicleLookupResult};
use crate::models::{CountyLookup, VehicleRecord};
use async_trait::async_trait;

/// Resolves a ZIP code to the county it lies in.
///
/// Implementations may be slow or fail; callers bound them with a timeout
/// and fall back to the default contact number.
#[async_trait]
pub trait CountyResolver: Send + Sync {
    /// Look up the county for a well-formed ZIP code.
    async fn resolve_county(&self, zip: &ZipCode) -> LookupResult<CountyLookup>;
}

/// Retrieves registration and compliance details for a vehicle.
#[async_trait]
pub trait VehicleLookup: Send + Sync {
    /// Look up a vehicle by its normalized VIN.
    async fn lookup_vehicle(&self, vin: &str) -> VehicleLookupResult<VehicleRecord>;
}
