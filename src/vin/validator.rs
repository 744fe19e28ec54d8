//! VIN validator with progressive, non-throwing feedback.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of characters in a VIN.
pub const VIN_LENGTH: usize = 17;

/// Length of the numeric serial suffix checked by the CARB rule.
const CARB_SUFFIX_LENGTH: usize = 6;

const MSG_VALID: &str = "Valid VIN format ✓";
const MSG_FORBIDDEN_CHARS: &str = "VIN cannot contain I, O, or Q";
const MSG_INVALID_FORMAT: &str = "Invalid VIN format";
const MSG_NON_NUMERIC_SUFFIX: &str = "Last 6 characters must be numeric";

static FORBIDDEN_CHARS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[IOQ]").expect("Failed to compile forbidden VIN character regex"));

static STRICT_VIN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-HJ-NPR-Z0-9]{17}$").expect("Failed to compile strict VIN regex")
});

static CARB_SUFFIX_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{6}$").expect("Failed to compile VIN suffix regex"));

/// Which acceptance rule a deployment applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VinRule {
    /// 17 characters, last six numeric, first eleven unconstrained.
    #[default]
    Carb,

    /// 17 characters from `[A-HJ-NPR-Z0-9]`.
    Strict,
}

impl FromStr for VinRule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "carb" | "lenient" => Ok(VinRule::Carb),
            "strict" => Ok(VinRule::Strict),
            other => Err(format!("Unknown VIN rule '{}', expected 'carb' or 'strict'", other)),
        }
    }
}

impl fmt::Display for VinRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VinRule::Carb => write!(f, "carb"),
            VinRule::Strict => write!(f, "strict"),
        }
    }
}

/// Outcome of validating one VIN candidate.
///
/// `message` is meant for an inline hint: empty for empty input, a
/// `"<len>/17 characters"` progress string while typing, a reason on
/// rejection, or a confirmation on success.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub normalized_value: String,
    pub is_valid: bool,
    pub message: String,
}

impl ValidationResult {
    fn invalid(normalized_value: String, message: impl Into<String>) -> Self {
        Self {
            normalized_value,
            is_valid: false,
            message: message.into(),
        }
    }

    fn valid(normalized_value: String) -> Self {
        Self {
            normalized_value,
            is_valid: true,
            message: MSG_VALID.to_string(),
        }
    }
}

/// Validates VIN candidates against one fixed rule.
#[derive(Debug, Clone, Copy, Default)]
pub struct VinValidator {
    rule: VinRule,
}

impl VinValidator {
    pub fn new(rule: VinRule) -> Self {
        Self { rule }
    }

    pub fn rule(&self) -> VinRule {
        self.rule
    }

    /// Validate a raw candidate. Never fails; see [`validate_vin`].
    pub fn validate(&self, raw: &str) -> ValidationResult {
        validate_vin(raw, self.rule)
    }
}

/// Validate a raw VIN candidate under `rule`.
///
/// The candidate is trimmed and uppercased first. Length is counted in
/// characters after normalization.
///
/// # Example
///
/// ```
/// use clean_truck_check::vin::{validate_vin, VinRule};
///
/// let result = validate_vin("1hgcm82633a004352 ", VinRule::Carb);
/// assert!(result.is_valid);
/// assert_eq!(result.normalized_value, "1HGCM82633A004352");
///
/// let partial = validate_vin("1HGCM826", VinRule::Carb);
/// assert_eq!(partial.message, "8/17 characters");
/// ```
pub fn validate_vin(raw: &str, rule: VinRule) -> ValidationResult {
    let normalized = raw.trim().to_uppercase();
    // Counted in UTF-16 code units, like the browser field that feeds it.
    let length = normalized.encode_utf16().count();

    if length == 0 {
        return ValidationResult::invalid(normalized, "");
    }

    if length != VIN_LENGTH {
        let message = format!("{}/{} characters", length, VIN_LENGTH);
        return ValidationResult::invalid(normalized, message);
    }

    match rule {
        VinRule::Strict => {
            if FORBIDDEN_CHARS_RE.is_match(&normalized) {
                return ValidationResult::invalid(normalized, MSG_FORBIDDEN_CHARS);
            }
            if !STRICT_VIN_RE.is_match(&normalized) {
                return ValidationResult::invalid(normalized, MSG_INVALID_FORMAT);
            }
        }
        VinRule::Carb => {
            let start = normalized
                .char_indices()
                .rev()
                .nth(CARB_SUFFIX_LENGTH - 1)
                .map_or(0, |(i, _)| i);
            if !CARB_SUFFIX_RE.is_match(&normalized[start..]) {
                return ValidationResult::invalid(normalized, MSG_NON_NUMERIC_SUFFIX);
            }
        }
    }

    ValidationResult::valid(normalized)
}
