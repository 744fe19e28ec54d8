//! Vehicle service layer.
//!
//! VIN validation with the deployment's rule, and registry lookups for VINs
//! that pass it.

use crate::error::{VehicleLookupError, VehicleLookupResult};
use crate::metrics::Metrics;
use crate::models::VehicleRecord;
use crate::resolvers::VehicleLookup;
use crate::vin::{ValidationResult, VinValidator};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

/// Rejection message when validation produced no hint (empty input).
const MSG_ENTER_VALID_VIN: &str = "Please enter a valid 17-character VIN";

/// Vehicle service trait for business operations.
#[async_trait]
pub trait VehicleService: Send + Sync {
    /// Validate a VIN candidate. Never fails.
    fn validate(&self, vin: &str) -> ValidationResult;

    /// Validate, then look up the vehicle.
    ///
    /// # Errors
    ///
    /// - `VehicleLookupError::InvalidVin` with the validation message
    /// - `VehicleLookupError::Timeout` when the lookup exceeds the timeout
    /// - any error reported by the lookup backend
    async fn check_vehicle(&self, vin: &str) -> VehicleLookupResult<VehicleRecord>;
}

/// Default implementation of VehicleService.
pub struct VehicleServiceImpl {
    validator: VinValidator,
    lookup: Arc<dyn VehicleLookup>,
    lookup_timeout: Duration,
    metrics: Metrics,
}

impl VehicleServiceImpl {
    /// Create a new vehicle service.
    pub fn new(
        validator: VinValidator,
        lookup: Arc<dyn VehicleLookup>,
        lookup_timeout: Duration,
        metrics: Metrics,
    ) -> Self {
        Self {
            validator,
            lookup,
            lookup_timeout,
            metrics,
        }
    }
}

#[async_trait]
impl VehicleService for VehicleServiceImpl {
    fn validate(&self, vin: &str) -> ValidationResult {
        let result = self.validator.validate(vin);
        self.metrics.record_vin_validation(result.is_valid);
        result
    }

    async fn check_vehicle(&self, vin: &str) -> VehicleLookupResult<VehicleRecord> {
        let validation = self.validate(vin);
        if !validation.is_valid {
            let message = if validation.message.is_empty() {
                MSG_ENTER_VALID_VIN.to_string()
            } else {
                validation.message
            };
            return Err(VehicleLookupError::InvalidVin(message));
        }

        let vin = validation.normalized_value;
        tracing::debug!("Looking up vehicle {}", vin);

        match tokio::time::timeout(self.lookup_timeout, self.lookup.lookup_vehicle(&vin)).await {
            Ok(result) => {
                if let Err(e) = &result {
                    tracing::warn!("Vehicle lookup for {} failed: {}", vin, e);
                }
                result
            }
            Err(_) => {
                tracing::warn!("Vehicle lookup for {} timed out", vin);
                Err(VehicleLookupError::Timeout(
                    self.lookup_timeout.as_millis() as u64,
                ))
            }
        }
    }
}
