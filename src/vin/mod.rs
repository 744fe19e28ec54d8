//! VIN format validation.
//!
//! Two rule strengths exist and are never merged: the CARB rule used by the
//! contact pages (17 characters, last six numeric) and the strict structural
//! rule (17 characters drawn from the VIN alphabet, no I, O, or Q).

pub mod validator;

pub use validator::{validate_vin, ValidationResult, VinRule, VinValidator, VIN_LENGTH};
