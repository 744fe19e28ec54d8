//! Integration tests for VIN validation under both rules.

use clean_truck_check::{validate_vin, VinRule, VinValidator};

#[test]
fn test_carb_rule_accepts_sample_vin() {
    let result = validate_vin("1HGCM82633A004352", VinRule::Carb);
    assert!(result.is_valid);
    assert_eq!(result.message, "Valid VIN format ✓");
}

#[test]
fn test_carb_rule_accepts_any_seventeen_with_numeric_suffix() {
    // Forbidden letters and symbols are fine under the CARB rule
    for vin in ["IOQIOQIOQIO123456", "-----------000000", "abcdefghijk999999"] {
        let result = validate_vin(vin, VinRule::Carb);
        assert!(result.is_valid, "{} -> {:?}", vin, result);
    }
}

#[test]
fn test_carb_rule_rejects_alpha_suffix() {
    let result = validate_vin("1HGCM82633A00435X", VinRule::Carb);
    assert!(!result.is_valid);
    assert_eq!(result.message, "Last 6 characters must be numeric");
}

#[test]
fn test_length_mismatch_under_both_rules() {
    for rule in [VinRule::Carb, VinRule::Strict] {
        let short = validate_vin("1HGCM82633004352", rule);
        assert!(!short.is_valid);
        assert_eq!(short.message, "16/17 characters");

        let long = validate_vin("1HGCM82633A0043521", rule);
        assert!(!long.is_valid);
        assert_eq!(long.message, "18/17 characters");
    }
}

#[test]
fn test_strict_rule() {
    let ok = validate_vin("1HGCM82633A004352", VinRule::Strict);
    assert!(ok.is_valid);

    let forbidden = validate_vin("1HGCM82633Q004352", VinRule::Strict);
    assert!(!forbidden.is_valid);
    assert_eq!(forbidden.message, "VIN cannot contain I, O, or Q");

    let symbol = validate_vin("1HGCM82633-004352", VinRule::Strict);
    assert!(!symbol.is_valid);
    assert_eq!(symbol.message, "Invalid VIN format");
}

#[test]
fn test_normalization_is_idempotent() {
    let first = validate_vin("  1hgcm82633a004352\n", VinRule::Carb);
    let second = validate_vin(&first.normalized_value, VinRule::Carb);
    assert_eq!(first.normalized_value, "1HGCM82633A004352");
    assert_eq!(first, second);
}

#[test]
fn test_validator_uses_its_rule() {
    let carb = VinValidator::new(VinRule::Carb);
    let strict = VinValidator::new(VinRule::Strict);

    assert!(carb.validate("IOQIOQIOQIO123456").is_valid);
    assert!(!strict.validate("IOQIOQIOQIO123456").is_valid);
    assert_eq!(VinValidator::default().rule(), VinRule::Carb);
}

#[test]
fn test_rule_parsing() {
    assert_eq!("carb".parse::<VinRule>().unwrap(), VinRule::Carb);
    assert_eq!("STRICT".parse::<VinRule>().unwrap(), VinRule::Strict);
    assert!("iso".parse::<VinRule>().is_err());
}
