//! Civil calendar handling for the ganzhi engine.
//!
//! This crate provides:
//! - `CivilDate` / `ClockTime` value types, validated on construction
//! - `YYYY-MM-DD` and `HH:mm` parsing
//! - Julian Day Number ↔ proleptic Gregorian conversion
//! - A local-clock "today" read, the engine's only source of non-determinism

pub mod civil;
pub mod error;
pub mod julian;

pub use civil::{CivilDate, ClockTime};
pub use error::TimeError;
pub use julian::{JDN_1900_01_01, JDN_2000_01_01, civil_to_jdn, jdn_to_civil};
