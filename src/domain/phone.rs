//! PhoneNumber value object and contact-number helpers.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Fallback number for unknown or missing counties.
pub const PHONE_DEFAULT: &str = "617-359-6953";

/// Number for the Central Valley and points north/east.
pub const PHONE_INLAND_NORTH: &str = "916-890-4427";

/// Number for the coastal band and the Richmond inner ring.
pub const PHONE_COAST: &str = "415-900-8563";

/// A type-safe wrapper for phone numbers.
///
/// Construction accepts any mix of digits and common formatting characters.
/// Routing tables additionally require the `NNN-NNN-NNNN` form, checked with
/// [`PhoneNumber::is_routing_format`].
///
/// # Example
///
/// ```
/// use clean_truck_check::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("916-890-4427").unwrap();
/// assert_eq!(phone.display_format(), "(916) 890-4427");
/// assert_eq!(phone.tel_uri(), "tel:9168904427");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber, validating the format.
    ///
    /// # Validation Rules
    ///
    /// - Must contain at least one digit
    /// - Can contain: digits, spaces, hyphens, parentheses, plus sign, periods
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the phone format is invalid.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();

        if !Self::is_valid(&phone) {
            return Err(ValidationError::InvalidPhone(phone));
        }

        Ok(Self(phone))
    }

    fn is_valid(phone: &str) -> bool {
        if !phone.chars().any(|c| c.is_ascii_digit()) {
            return false;
        }

        phone
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '-' | '(' | ')' | '+' | '.'))
    }

    /// Whether the number is in the fixed `NNN-NNN-NNNN` display form.
    pub fn is_routing_format(&self) -> bool {
        let bytes = self.0.as_bytes();
        bytes.len() == 12
            && bytes.iter().enumerate().all(|(i, b)| match i {
                3 | 7 => *b == b'-',
                _ => b.is_ascii_digit(),
            })
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Get the phone number with only digits (no formatting).
    pub fn digits_only(&self) -> String {
        self.0.chars().filter(|c| c.is_ascii_digit()).collect()
    }

    /// `(AAA) BBB-CCCC` form, see [`format_for_display`].
    pub fn display_format(&self) -> String {
        format_for_display(&self.0)
    }

    /// Dialable form, see [`to_tel_link`].
    pub fn tel_link(&self) -> String {
        to_tel_link(&self.0)
    }

    /// `tel:` URI for a tap-to-call link.
    pub fn tel_uri(&self) -> String {
        format!("tel:{}", self.tel_link())
    }
}

/// Format a phone number for display.
///
/// Strips every non-digit; when exactly ten digits remain the result is
/// `(AAA) BBB-CCCC`. Anything else is returned unchanged.
pub fn format_for_display(phone: &str) -> String {
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();

    if digits.len() != 10 {
        return phone.to_string();
    }

    format!("({}) {}-{}", &digits[0..3], &digits[3..6], &digits[6..10])
}

/// Reduce a phone number to digits plus an optional leading `+`.
///
/// This never rejects input: a string without digits yields an empty link.
pub fn to_tel_link(phone: &str) -> String {
    let trimmed = phone.trim_start();
    let mut link = String::with_capacity(trimmed.len());

    if trimmed.starts_with('+') {
        link.push('+');
    }
    link.extend(trimmed.chars().filter(|c| c.is_ascii_digit()));

    link
}

// Serde support - serialize as string
impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PhoneNumber::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
