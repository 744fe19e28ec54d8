//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for the values that flow through
//! routing: county names, ZIP codes, and contact phone numbers. These value
//! objects validate at construction time so that lookup code only ever sees
//! well-formed input.

pub mod county;
pub mod errors;
pub mod phone;
pub mod zip_code;

pub use county::County;
pub use errors::ValidationError;
pub use phone::{
    format_for_display, to_tel_link, PhoneNumber, PHONE_COAST, PHONE_DEFAULT, PHONE_INLAND_NORTH,
};
pub use zip_code::ZipCode;
