//! County value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A trimmed, non-empty county name such as `"Sacramento"`.
///
/// Only surrounding whitespace is removed. Case is preserved because routing
/// compares county names case-sensitively.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct County(String);

impl County {
    /// Create a new County from raw input.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyCounty` if nothing remains after trimming.
    pub fn new(name: impl AsRef<str>) -> Result<Self, ValidationError> {
        let trimmed = name.as_ref().trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyCounty);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Serialize for County {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for County {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        County::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for County {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_county_trims_but_keeps_case() {
        let county = County::new("  san Mateo ").unwrap();
        assert_eq!(county.as_str(), "san Mateo");
    }

    #[test]
    fn test_county_rejects_blank() {
        assert_eq!(County::new(""), Err(ValidationError::EmptyCounty));
        assert_eq!(County::new(" \t "), Err(ValidationError::EmptyCounty));
    }

    #[test]
    fn test_county_deserialization() {
        let county: County = serde_json::from_str("\" Yolo\"").unwrap();
        assert_eq!(county.as_str(), "Yolo");

        let result: Result<County, _> = serde_json::from_str("\"  \"");
        assert!(result.is_err());
    }
}
