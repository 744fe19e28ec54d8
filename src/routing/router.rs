//! Phone router: county name in, contact number out.

use crate::domain::{County, PhoneNumber};
use crate::routing::table::{Region, RoutingTable};
use serde::Serialize;
use std::cmp::Ordering;
use std::sync::Arc;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// One row of the derived county listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountyPhoneMapping {
    pub county: String,
    pub phone: PhoneNumber,
    pub region: Region,
}

/// Result of routing one county name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    /// Trimmed county name, `None` when the input was missing or blank.
    pub county: Option<String>,

    /// Matched region, `None` when the default number was used.
    pub region: Option<Region>,

    pub phone: PhoneNumber,
}

impl Route {
    /// Whether this route fell through to the default number.
    pub fn is_fallback(&self) -> bool {
        self.region.is_none()
    }
}

/// Routes county names to contact numbers using a shared [`RoutingTable`].
///
/// Routing is total: every input, including `None` and unknown names,
/// yields a phone number.
///
/// # Example
///
/// ```
/// use clean_truck_check::routing::PhoneRouter;
///
/// let router = PhoneRouter::builtin();
/// assert_eq!(router.resolve_phone(Some("Sacramento")).as_str(), "916-890-4427");
/// assert_eq!(router.resolve_phone(Some("Contra Costa")).as_str(), "415-900-8563");
/// assert_eq!(router.resolve_phone(None).as_str(), "617-359-6953");
/// ```
#[derive(Debug, Clone)]
pub struct PhoneRouter {
    table: Arc<RoutingTable>,
}

impl PhoneRouter {
    pub fn new(table: Arc<RoutingTable>) -> Self {
        Self { table }
    }

    /// Router over the built-in county sets.
    pub fn builtin() -> Self {
        Self::new(RoutingTable::builtin())
    }

    pub fn table(&self) -> &RoutingTable {
        &self.table
    }

    /// Route a county name.
    ///
    /// Missing or blank input routes to the default number. Otherwise the
    /// name is trimmed and matched case-sensitively: coastal band and
    /// Richmond ring first, then inland north, then the default.
    pub fn resolve(&self, county: Option<&str>) -> Route {
        let county = county.and_then(|c| County::new(c).ok());

        let region = county
            .as_ref()
            .and_then(|c| self.table.region_of(c.as_str()));
        let phone = self.table.phone_for(region).clone();

        Route {
            county: county.map(County::into_inner),
            region,
            phone,
        }
    }

    /// Contact number for a county name. See [`PhoneRouter::resolve`].
    pub fn resolve_phone(&self, county: Option<&str>) -> PhoneNumber {
        self.resolve(county).phone
    }

    /// Every routed county with its number and region tag, sorted by name.
    pub fn list_all_mappings(&self) -> Vec<CountyPhoneMapping> {
        let mut mappings: Vec<CountyPhoneMapping> = Region::ALL
            .iter()
            .flat_map(|region| {
                let phone = self.table.phone_for(Some(*region));
                self.table
                    .members(*region)
                    .map(move |county| CountyPhoneMapping {
                        county: county.to_string(),
                        phone: phone.clone(),
                        region: *region,
                    })
            })
            .collect();

        mappings.sort_by(|a, b| compare_county_names(&a.county, &b.county));
        mappings
    }
}

/// Root-locale style collation over decomposed text.
///
/// Base letters decide first, ignoring accents and case. Ties go to the
/// unaccented form, then to lowercase, then to the raw text.
fn compare_county_names(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| folded(a).cmp(folded(b)))
        .then_with(|| case_pattern(a).cmp(case_pattern(b)))
        .then_with(|| a.cmp(b))
}

fn base_letters(name: &str) -> impl Iterator<Item = char> + '_ {
    name.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

fn folded(name: &str) -> impl Iterator<Item = char> + '_ {
    name.nfd().flat_map(char::to_lowercase)
}

fn case_pattern(name: &str) -> impl Iterator<Item = bool> + '_ {
    name.nfd()
        .filter(|c| !is_combining_mark(*c))
        .map(char::is_uppercase)
}

/// Route a county name with the built-in table.
pub fn resolve_phone(county: Option<&str>) -> PhoneNumber {
    PhoneRouter::builtin().resolve_phone(county)
}

/// List the built-in table's mappings.
pub fn list_all_mappings() -> Vec<CountyPhoneMapping> {
    PhoneRouter::builtin().list_all_mappings()
}
