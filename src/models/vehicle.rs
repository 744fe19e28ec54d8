//! Vehicle record returned by a VIN lookup.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Registration and compliance details for one vehicle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleRecord {
    /// Uppercased VIN
    pub vin: String,

    pub year: String,
    pub make: String,
    pub model: String,

    /// Gross vehicle weight rating, display form (e.g. "80,000 lbs")
    pub gvwr: String,

    pub fuel_type: String,
    pub engine_model: String,

    /// Compliance status (e.g. "Compliant")
    pub compliance: String,

    pub compliance_date: NaiveDate,

    /// Registration status (e.g. "Active")
    pub status: String,

    pub certification_number: String,
}

impl VehicleRecord {
    /// Label/value pairs in display order.
    pub fn display_items(&self) -> Vec<(&'static str, String)> {
        vec![
            ("VIN", self.vin.clone()),
            ("Year", self.year.clone()),
            ("Make", self.make.clone()),
            ("Model", self.model.clone()),
            ("GVWR", self.gvwr.clone()),
            ("Fuel Type", self.fuel_type.clone()),
            ("Engine", self.engine_model.clone()),
            ("Status", self.status.clone()),
            ("CARB Compliance", self.compliance.clone()),
            ("Compliance Date", self.compliance_date.to_string()),
            ("Cert Number", self.certification_number.clone()),
        ]
    }
}
