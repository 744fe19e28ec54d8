//! ZIP→county resolution result.

use crate::domain::ZipCode;
use serde::{Deserialize, Serialize};

/// A resolved county for a ZIP code.
///
/// `county` is kept as the resolver returned it; trimming and the
/// blank-means-default rule are applied by the router.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountyLookup {
    pub zip: ZipCode,
    pub county: String,
}

impl CountyLookup {
    pub fn new(zip: ZipCode, county: impl Into<String>) -> Self {
        Self {
            zip,
            county: county.into(),
        }
    }
}
