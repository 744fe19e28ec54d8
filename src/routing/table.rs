//! Routing table: three disjoint county sets and their contact numbers.
//!
//! The built-in table is the single initialization point for routing data.
//! A JSON file with the same shape as [`RoutingTableSpec`] can replace it
//! without touching lookup code.

use crate::domain::{PhoneNumber, PHONE_COAST, PHONE_DEFAULT, PHONE_INLAND_NORTH};
use crate::error::{RoutingTableError, RoutingTableResult};
use crate::routing::california::CALIFORNIA_COUNTIES;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::Arc;

/// Coastal band: Monterey north to Fort Bragg, including South Bay,
/// the Peninsula, and San Francisco.
const COASTAL_COUNTIES: &[&str] = &[
    "Monterey",
    "San Benito",
    "Santa Cruz",
    "Santa Clara",
    "San Mateo",
    "San Francisco",
    "Marin",
    "Sonoma",
    "Mendocino",
];

/// Bay inner ring routed to the coast number although inland.
const COASTAL_INLAND_TO_RICHMOND: &[&str] = &["Alameda", "Contra Costa"];

/// Fresno and north/east to Nevada. Not exhaustive.
const INLAND_NORTH_COUNTIES: &[&str] = &[
    "Fresno",
    "Madera",
    "Merced",
    "Stanislaus",
    "San Joaquin",
    "Sacramento",
    "Solano",
    "Yolo",
    "Placer",
    "El Dorado",
    "Nevada",
    "Sutter",
    "Yuba",
    "Butte",
    "Colusa",
    "Glenn",
    "Tehama",
    "Shasta",
    "Plumas",
    "Sierra",
    "Lassen",
    "Modoc",
    "Trinity",
    "Humboldt",
    "Lake",
];

static BUILTIN: Lazy<Arc<RoutingTable>> = Lazy::new(|| {
    Arc::new(
        RoutingTable::new(RoutingTableSpec::builtin())
            .expect("Built-in routing table must be disjoint"),
    )
});

/// A county routing band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    #[serde(rename = "Coastal")]
    Coastal,

    #[serde(rename = "Coastal (Inland to Richmond)")]
    CoastalInlandToRichmond,

    #[serde(rename = "Inland North")]
    InlandNorth,
}

impl Region {
    /// All regions in lookup order.
    pub const ALL: [Region; 3] = [
        Region::Coastal,
        Region::CoastalInlandToRichmond,
        Region::InlandNorth,
    ];

    /// Human-readable region tag.
    pub fn label(&self) -> &'static str {
        match self {
            Region::Coastal => "Coastal",
            Region::CoastalInlandToRichmond => "Coastal (Inland to Richmond)",
            Region::InlandNorth => "Inland North",
        }
    }
}

/// Serializable description of a routing table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutingTableSpec {
    #[serde(default = "default_phone")]
    pub default_phone: String,

    #[serde(default = "inland_north_phone")]
    pub inland_north_phone: String,

    #[serde(default = "coast_phone")]
    pub coast_phone: String,

    #[serde(default)]
    pub coastal: Vec<String>,

    #[serde(default)]
    pub coastal_inland_to_richmond: Vec<String>,

    #[serde(default)]
    pub inland_north: Vec<String>,
}

fn default_phone() -> String {
    PHONE_DEFAULT.to_string()
}

fn inland_north_phone() -> String {
    PHONE_INLAND_NORTH.to_string()
}

fn coast_phone() -> String {
    PHONE_COAST.to_string()
}

fn owned(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}

impl RoutingTableSpec {
    /// The hardcoded county sets and phone constants.
    pub fn builtin() -> Self {
        Self {
            default_phone: default_phone(),
            inland_north_phone: inland_north_phone(),
            coast_phone: coast_phone(),
            coastal: owned(COASTAL_COUNTIES),
            coastal_inland_to_richmond: owned(COASTAL_INLAND_TO_RICHMOND),
            inland_north: owned(INLAND_NORTH_COUNTIES),
        }
    }

    fn members(&self, region: Region) -> &[String] {
        match region {
            Region::Coastal => &self.coastal,
            Region::CoastalInlandToRichmond => &self.coastal_inland_to_richmond,
            Region::InlandNorth => &self.inland_north,
        }
    }
}

/// Immutable, validated routing data.
///
/// Construction guarantees that no county belongs to more than one region,
/// that county names are trimmed and non-empty, and that every phone number
/// is in `NNN-NNN-NNNN` form.
#[derive(Debug, Clone)]
pub struct RoutingTable {
    coastal: HashSet<String>,
    coastal_inland_to_richmond: HashSet<String>,
    inland_north: HashSet<String>,
    default_phone: PhoneNumber,
    inland_north_phone: PhoneNumber,
    coast_phone: PhoneNumber,
}

impl RoutingTable {
    /// Validate a table description and build the lookup sets.
    ///
    /// # Errors
    ///
    /// - `RoutingTableError::Overlap` if a county is listed in two regions
    /// - `RoutingTableError::InvalidCounty` for blank or untrimmed names
    /// - `RoutingTableError::InvalidPhone` for malformed phone numbers
    pub fn new(spec: RoutingTableSpec) -> RoutingTableResult<Self> {
        let default_phone = Self::routing_phone(&spec.default_phone)?;
        let inland_north_phone = Self::routing_phone(&spec.inland_north_phone)?;
        let coast_phone = Self::routing_phone(&spec.coast_phone)?;

        let mut seen: HashMap<&str, Region> = HashMap::new();
        for region in Region::ALL {
            for name in spec.members(region) {
                if name.is_empty() || name.trim() != name {
                    return Err(RoutingTableError::InvalidCounty {
                        region: region.label(),
                        name: name.clone(),
                    });
                }

                match seen.get(name.as_str()) {
                    Some(first) if *first != region => {
                        return Err(RoutingTableError::Overlap {
                            county: name.clone(),
                            first: first.label(),
                            second: region.label(),
                        });
                    }
                    Some(_) => {}
                    None => {
                        seen.insert(name.as_str(), region);
                    }
                }
            }
        }

        let collect = |region: Region| -> HashSet<String> {
            spec.members(region).iter().cloned().collect()
        };

        Ok(Self {
            coastal: collect(Region::Coastal),
            coastal_inland_to_richmond: collect(Region::CoastalInlandToRichmond),
            inland_north: collect(Region::InlandNorth),
            default_phone,
            inland_north_phone,
            coast_phone,
        })
    }

    /// Shared handle to the built-in table.
    pub fn builtin() -> Arc<RoutingTable> {
        Arc::clone(&BUILTIN)
    }

    /// Parse and validate a table from JSON text.
    pub fn from_json_str(json: &str) -> RoutingTableResult<Self> {
        let spec: RoutingTableSpec = serde_json::from_str(json)?;
        Self::new(spec)
    }

    /// Read, parse, and validate a table from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> RoutingTableResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    fn routing_phone(raw: &str) -> RoutingTableResult<PhoneNumber> {
        match PhoneNumber::new(raw) {
            Ok(phone) if phone.is_routing_format() => Ok(phone),
            _ => Err(RoutingTableError::InvalidPhone(raw.to_string())),
        }
    }

    /// Region of an already-trimmed county name, checked in routing order:
    /// the coastal band and the Richmond ring first, then inland north.
    pub fn region_of(&self, county: &str) -> Option<Region> {
        if self.coastal.contains(county) {
            Some(Region::Coastal)
        } else if self.coastal_inland_to_richmond.contains(county) {
            Some(Region::CoastalInlandToRichmond)
        } else if self.inland_north.contains(county) {
            Some(Region::InlandNorth)
        } else {
            None
        }
    }

    /// Contact number for a region, or the default number for `None`.
    pub fn phone_for(&self, region: Option<Region>) -> &PhoneNumber {
        match region {
            Some(Region::Coastal) | Some(Region::CoastalInlandToRichmond) => &self.coast_phone,
            Some(Region::InlandNorth) => &self.inland_north_phone,
            None => &self.default_phone,
        }
    }

    pub fn default_phone(&self) -> &PhoneNumber {
        &self.default_phone
    }

    /// Counties in one region, in no particular order.
    pub fn members(&self, region: Region) -> impl Iterator<Item = &str> {
        let set = match region {
            Region::Coastal => &self.coastal,
            Region::CoastalInlandToRichmond => &self.coastal_inland_to_richmond,
            Region::InlandNorth => &self.inland_north,
        };
        set.iter().map(String::as_str)
    }

    /// Total number of routed counties across all regions.
    pub fn len(&self) -> usize {
        self.coastal.len() + self.coastal_inland_to_richmond.len() + self.inland_north.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// California counties that this table sends to the default number.
    pub fn coverage_gaps(&self) -> Vec<&'static str> {
        CALIFORNIA_COUNTIES
            .iter()
            .copied()
            .filter(|county| self.region_of(county).is_none())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(coastal: &[&str], richmond: &[&str], inland: &[&str]) -> RoutingTableSpec {
        RoutingTableSpec {
            coastal: owned(coastal),
            coastal_inland_to_richmond: owned(richmond),
            inland_north: owned(inland),
            ..RoutingTableSpec::builtin()
        }
    }

    #[test]
    fn test_builtin_sizes() {
        let table = RoutingTable::builtin();
        assert_eq!(table.members(Region::Coastal).count(), 9);
        assert_eq!(table.members(Region::CoastalInlandToRichmond).count(), 2);
        assert_eq!(table.members(Region::InlandNorth).count(), 25);
        assert_eq!(table.len(), 36);
    }

    #[test]
    fn test_builtin_spec_is_disjoint() {
        assert!(RoutingTable::new(RoutingTableSpec::builtin()).is_ok());
    }

    #[test]
    fn test_overlap_is_rejected() {
        let result = RoutingTable::new(spec(&["Marin", "Solano"], &[], &["Solano"]));
        match result {
            Err(RoutingTableError::Overlap {
                county,
                first,
                second,
            }) => {
                assert_eq!(county, "Solano");
                assert_eq!(first, "Coastal");
                assert_eq!(second, "Inland North");
            }
            other => panic!("Expected Overlap error, got: {:?}", other),
        }
    }

    #[test]
    fn test_duplicate_within_one_region_is_allowed() {
        let table = RoutingTable::new(spec(&["Marin", "Marin"], &[], &["Yolo"])).unwrap();
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_untrimmed_county_is_rejected() {
        let result = RoutingTable::new(spec(&["Marin "], &[], &[]));
        assert!(matches!(
            result,
            Err(RoutingTableError::InvalidCounty { region: "Coastal", .. })
        ));

        let result = RoutingTable::new(spec(&[], &[""], &[]));
        assert!(matches!(result, Err(RoutingTableError::InvalidCounty { .. })));
    }

    #[test]
    fn test_malformed_phone_is_rejected() {
        let mut bad = RoutingTableSpec::builtin();
        bad.coast_phone = "(415) 900-8563".to_string();
        assert!(matches!(
            RoutingTable::new(bad),
            Err(RoutingTableError::InvalidPhone(_))
        ));
    }

    #[test]
    fn test_region_lookup_order() {
        let table = RoutingTable::builtin();
        assert_eq!(table.region_of("Marin"), Some(Region::Coastal));
        assert_eq!(
            table.region_of("Contra Costa"),
            Some(Region::CoastalInlandToRichmond)
        );
        assert_eq!(table.region_of("Yuba"), Some(Region::InlandNorth));
        assert_eq!(table.region_of("Los Angeles"), None);
        assert_eq!(table.region_of("marin"), None);
    }

    #[test]
    fn test_phone_for_region() {
        let table = RoutingTable::builtin();
        assert_eq!(table.phone_for(Some(Region::Coastal)).as_str(), PHONE_COAST);
        assert_eq!(
            table.phone_for(Some(Region::CoastalInlandToRichmond)).as_str(),
            PHONE_COAST
        );
        assert_eq!(
            table.phone_for(Some(Region::InlandNorth)).as_str(),
            PHONE_INLAND_NORTH
        );
        assert_eq!(table.phone_for(None).as_str(), PHONE_DEFAULT);
    }

    #[test]
    fn test_from_json_uses_default_phones() {
        let json = r#"{
            "coastal": ["Ventura"],
            "inland_north": ["Kern"]
        }"#;
        let table = RoutingTable::from_json_str(json).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.region_of("Kern"), Some(Region::InlandNorth));
        assert_eq!(table.default_phone().as_str(), PHONE_DEFAULT);
    }

    #[test]
    fn test_from_json_county_sets_are_optional() {
        let table = RoutingTable::from_json_str(r#"{"inland_north": ["Kern"]}"#).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.members(Region::Coastal).count(), 0);
        assert_eq!(table.members(Region::CoastalInlandToRichmond).count(), 0);

        let empty = RoutingTable::from_json_str("{}").unwrap();
        assert!(empty.is_empty());
        assert_eq!(empty.region_of("Kern"), None);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(matches!(
            RoutingTable::from_json_str("not json"),
            Err(RoutingTableError::Json(_))
        ));
    }

    #[test]
    fn test_from_json_file_missing() {
        assert!(matches!(
            RoutingTable::from_json_file("/nonexistent/routing.json"),
            Err(RoutingTableError::Io(_))
        ));
    }

    #[test]
    fn test_coverage_gaps() {
        let gaps = RoutingTable::builtin().coverage_gaps();
        assert_eq!(gaps.len(), 22);
        assert!(gaps.contains(&"Los Angeles"));
        assert!(gaps.contains(&"Napa"));
        assert!(!gaps.contains(&"Sacramento"));
    }

    #[test]
    fn test_region_labels_serialize() {
        assert_eq!(
            serde_json::to_string(&Region::CoastalInlandToRichmond).unwrap(),
            "\"Coastal (Inland to Richmond)\""
        );
        assert_eq!(Region::InlandNorth.label(), "Inland North");
    }
}
