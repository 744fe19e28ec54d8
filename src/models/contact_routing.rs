//! Combined routing answer for display.

use crate::domain::PhoneNumber;
use crate::routing::{Region, Route};
use serde::Serialize;

/// Contact number for one request, ready to render.
///
/// Routing never fails: when the ZIP lookup failed, `lookup_error` carries
/// the reason and `phone` is the default number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactRouting {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,

    pub county: Option<String>,
    pub region: Option<Region>,
    pub phone: PhoneNumber,

    /// `(AAA) BBB-CCCC`
    pub display: String,

    /// `tel:` URI for a call link
    pub tel_uri: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub lookup_error: Option<String>,

    /// Known counties close to an unrecognized name
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<String>,
}

impl ContactRouting {
    pub fn from_route(route: Route) -> Self {
        Self {
            zip: None,
            display: route.phone.display_format(),
            tel_uri: route.phone.tel_uri(),
            county: route.county,
            region: route.region,
            phone: route.phone,
            lookup_error: None,
            suggestions: Vec::new(),
        }
    }

    pub fn with_zip(mut self, zip: impl Into<String>) -> Self {
        self.zip = Some(zip.into());
        self
    }

    pub fn with_lookup_error(mut self, error: impl ToString) -> Self {
        self.lookup_error = Some(error.to_string());
        self
    }

    pub fn with_suggestions(mut self, suggestions: Vec<String>) -> Self {
        self.suggestions = suggestions;
        self
    }

    /// Whether the default number was used.
    pub fn is_fallback(&self) -> bool {
        self.region.is_none()
    }
}
