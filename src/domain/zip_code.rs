//! ZipCode value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A five-digit U.S. ZIP code.
///
/// # Example
///
/// ```
/// use clean_truck_check::domain::ZipCode;
///
/// let zip = ZipCode::new(" 95814 ").unwrap();
/// assert_eq!(zip.as_str(), "95814");
/// assert!(ZipCode::new("9581").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ZipCode(String);

impl ZipCode {
    /// Create a new ZipCode, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidZip` unless exactly five ASCII digits remain.
    pub fn new(zip: impl AsRef<str>) -> Result<Self, ValidationError> {
        let raw = zip.as_ref();
        let trimmed = raw.trim();

        if trimmed.len() != 5 || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValidationError::InvalidZip(raw.to_string()));
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Serialize for ZipCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ZipCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ZipCode::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for ZipCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
