use crate::error::{VehicleLookupError, VehicleLookupResult};
use crate::models::VehicleRecord;
use crate::resolvers::traits::VehicleLookup;
use async_trait::async_trait;
use chrono::NaiveDate;
use std::time::Duration;

/// Suffix that makes the mock report a missing vehicle.
const NOT_FOUND_SUFFIX: &str = "ERROR";

/// Stand-in for the CARB registry.
///
/// Every VIN resolves to the same demonstration truck after a fixed delay,
/// except VINs ending in `ERROR`, which are reported as not found.
#[derive(Debug, Clone)]
pub struct MockVehicleLookup {
    latency: Duration,
}

impl MockVehicleLookup {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }

    fn record_for(vin: &str) -> VehicleLookupResult<VehicleRecord> {
        let compliance_date = NaiveDate::from_ymd_opt(2022, 1, 15)
            .ok_or_else(|| VehicleLookupError::Other("invalid compliance date".to_string()))?;

        let chars: Vec<char> = vin.chars().collect();
        let suffix: String = chars[chars.len().saturating_sub(6)..].iter().collect();

        Ok(VehicleRecord {
            vin: vin.to_string(),
            year: "2022".to_string(),
            make: "PETERBILT".to_string(),
            model: "579".to_string(),
            gvwr: "80,000 lbs".to_string(),
            fuel_type: "Diesel".to_string(),
            engine_model: "PACCAR MX-13".to_string(),
            compliance: "Compliant".to_string(),
            compliance_date,
            status: "Active".to_string(),
            certification_number: format!("CARB-2022-{}", suffix),
        })
    }
}

#[async_trait]
impl VehicleLookup for MockVehicleLookup {
    async fn lookup_vehicle(&self, vin: &str) -> VehicleLookupResult<VehicleRecord> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        let vin = vin.trim().to_uppercase();
        if vin.ends_with(NOT_FOUND_SUFFIX) {
            tracing::debug!("Mock lookup has no record for {}", vin);
            return Err(VehicleLookupError::NotFound);
        }

        Self::record_for(&vin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_record() {
        let lookup = MockVehicleLookup::new(Duration::ZERO);
        let record = lookup.lookup_vehicle("1hgcm82633a004352").await.unwrap();

        assert_eq!(record.vin, "1HGCM82633A004352");
        assert_eq!(record.make, "PETERBILT");
        assert_eq!(record.gvwr, "80,000 lbs");
        assert_eq!(record.certification_number, "CARB-2022-004352");
        assert_eq!(record.compliance_date.to_string(), "2022-01-15");
    }

    #[tokio::test]
    async fn test_mock_not_found() {
        let lookup = MockVehicleLookup::new(Duration::ZERO);
        let result = lookup.lookup_vehicle("1HGCM82633A0ERROR").await;
        assert_eq!(result, Err(VehicleLookupError::NotFound));
    }

    #[tokio::test]
    async fn test_short_vin_uses_whole_value_as_suffix() {
        let lookup = MockVehicleLookup::new(Duration::ZERO);
        let record = lookup.lookup_vehicle("1234").await.unwrap();
        assert_eq!(record.certification_number, "CARB-2022-1234");
    }
}
