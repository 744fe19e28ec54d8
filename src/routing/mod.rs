//! County to contact-number routing.
//!
//! Routing is a closed-world table with an open-world fallback: three
//! disjoint county sets each map to one contact number, and every county
//! outside them (or no county at all) gets the default number.
//!
//! - **table**: the county sets, their phone numbers, and the disjointness check
//! - **router**: ordered lookup and the derived mapping listing
//! - **suggest**: near-miss diagnostics for names that fell through to the default
//! - **california**: the full county list used for coverage reporting

pub mod california;
pub mod router;
pub mod suggest;
pub mod table;

pub use california::CALIFORNIA_COUNTIES;
pub use router::{list_all_mappings, resolve_phone, CountyPhoneMapping, PhoneRouter, Route};
pub use table::{Region, RoutingTable, RoutingTableSpec};
