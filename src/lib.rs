//! Demographic decoding for 18-digit resident identity numbers
//!
//! Layout of an identifier like `110101199003076499`: the first 4 digits
//! are the administrative region code, digits 7-14 are the birth date as
//! `YYYYMMDD`, and digit 17 encodes gender by parity.

pub mod error;
pub mod models;
pub mod region_names;
pub mod resolver;

pub use error::IdCardError;
pub use models::{Gender, IdProfile};
pub use region_names::RegionTable;
pub use resolver::IdCardResolver;
