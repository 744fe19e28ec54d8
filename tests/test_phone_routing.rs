//! Integration tests for county phone routing.
//!
//! Covers the built-in table's bands, the default fallback, display
//! formatting, the derived listing, and loading a table from a file.

use clean_truck_check::domain::{PHONE_COAST, PHONE_DEFAULT, PHONE_INLAND_NORTH};
use clean_truck_check::routing::{CALIFORNIA_COUNTIES, RoutingTableSpec};
use clean_truck_check::{
    format_for_display, list_all_mappings, resolve_phone, to_tel_link, PhoneRouter, Region,
    RoutingTable, RoutingTableError,
};
use std::collections::HashSet;
use std::sync::Arc;

#[test]
fn test_coastal_counties() {
    for county in ["San Francisco", "Monterey", "Marin", "Santa Cruz"] {
        assert_eq!(resolve_phone(Some(county)).as_str(), PHONE_COAST, "{}", county);
    }
}

#[test]
fn test_richmond_area_counties() {
    for county in ["Alameda", "Contra Costa"] {
        assert_eq!(resolve_phone(Some(county)).as_str(), PHONE_COAST, "{}", county);
    }
}

#[test]
fn test_inland_north_counties() {
    for county in ["Sacramento", "Fresno", "Placer", "Yuba"] {
        assert_eq!(
            resolve_phone(Some(county)).as_str(),
            PHONE_INLAND_NORTH,
            "{}",
            county
        );
    }
}

#[test]
fn test_default_counties() {
    for county in [None, Some(""), Some("   "), Some("UnknownCounty"), Some("Los Angeles")] {
        assert_eq!(resolve_phone(county).as_str(), PHONE_DEFAULT, "{:?}", county);
    }
}

#[test]
fn test_routing_is_case_sensitive_but_trims() {
    assert_eq!(resolve_phone(Some("  Sacramento\t")).as_str(), PHONE_INLAND_NORTH);
    assert_eq!(resolve_phone(Some("sacramento")).as_str(), PHONE_DEFAULT);
    assert_eq!(resolve_phone(Some("SAN FRANCISCO")).as_str(), PHONE_DEFAULT);
}

#[test]
fn test_phone_formatting() {
    assert_eq!(format_for_display("617-359-6953"), "(617) 359-6953");
    assert_eq!(format_for_display("916-890-4427"), "(916) 890-4427");
    assert_eq!(format_for_display("415-900-8563"), "(415) 900-8563");
    assert_eq!(format_for_display("+1 916 890 4427"), "+1 916 890 4427");
    assert_eq!(format_for_display("555-1234"), "555-1234");

    assert_eq!(to_tel_link("(916) 890-4427"), "9168904427");
    assert_eq!(to_tel_link("+1 916 890 4427"), "+19168904427");
}

#[test]
fn test_all_county_mappings() {
    let mappings = list_all_mappings();
    assert_eq!(mappings.len(), 36);

    let coastal = mappings
        .iter()
        .filter(|m| m.region != Region::InlandNorth)
        .count();
    let inland = mappings
        .iter()
        .filter(|m| m.region == Region::InlandNorth)
        .count();
    assert_eq!(coastal, 11);
    assert_eq!(inland, 25);

    let names: HashSet<&str> = mappings.iter().map(|m| m.county.as_str()).collect();
    assert_eq!(names.len(), mappings.len());

    for pair in mappings.windows(2) {
        assert!(pair[0].county.to_lowercase() <= pair[1].county.to_lowercase());
    }

    assert_eq!(mappings[0].county, "Alameda");
    assert_eq!(mappings[0].phone.as_str(), PHONE_COAST);
}

#[test]
fn test_every_routed_county_is_californian() {
    let known: HashSet<&str> = CALIFORNIA_COUNTIES.iter().copied().collect();
    for mapping in list_all_mappings() {
        assert!(known.contains(mapping.county.as_str()), "{}", mapping.county);
    }
}

#[test]
fn test_mapping_json_uses_region_labels() {
    let mappings = list_all_mappings();
    let contra_costa = mappings
        .iter()
        .find(|m| m.county == "Contra Costa")
        .unwrap();

    let json = serde_json::to_value(contra_costa).unwrap();
    assert_eq!(json["region"], "Coastal (Inland to Richmond)");
    assert_eq!(json["phone"], "415-900-8563");
}

#[test]
fn test_table_from_file_replaces_builtin() {
    let path = std::env::temp_dir().join(format!(
        "clean-truck-check-routing-{}.json",
        std::process::id()
    ));
    std::fs::write(
        &path,
        r#"{
            "coastal": ["San Diego"],
            "inland_north": ["Sacramento", "Los Angeles"]
        }"#,
    )
    .unwrap();

    let table = RoutingTable::from_json_file(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    let router = PhoneRouter::new(Arc::new(table));
    assert_eq!(router.resolve_phone(Some("San Diego")).as_str(), PHONE_COAST);
    assert_eq!(
        router.resolve_phone(Some("Los Angeles")).as_str(),
        PHONE_INLAND_NORTH
    );
    assert_eq!(router.resolve_phone(Some("Marin")).as_str(), PHONE_DEFAULT);
    assert_eq!(router.list_all_mappings().len(), 3);
}

#[test]
fn test_missing_table_file() {
    let result = RoutingTable::from_json_file("/nonexistent/routing.json");
    assert!(matches!(result, Err(RoutingTableError::Io(_))));
}

#[test]
fn test_overlapping_table_is_rejected() {
    let spec = RoutingTableSpec {
        coastal: vec!["Solano".to_string()],
        coastal_inland_to_richmond: Vec::new(),
        inland_north: vec!["Solano".to_string()],
        ..RoutingTableSpec::builtin()
    };

    match RoutingTable::new(spec) {
        Err(RoutingTableError::Overlap { county, .. }) => assert_eq!(county, "Solano"),
        other => panic!("Expected Overlap error, got: {:?}", other.map(|t| t.len())),
    }
}
