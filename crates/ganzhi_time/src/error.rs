//! Error types for civil date/time parsing and validation.

use thiserror::Error;

/// Errors from parsing or validating civil calendar input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// Date string is not of the form `YYYY-MM-DD`.
    #[error("expected date as YYYY-MM-DD, got {0:?}")]
    DateFormat(String),
    /// Time string is not of the form `HH:mm`.
    #[error("expected time as HH:mm, got {0:?}")]
    TimeFormat(String),
    /// Month/day combination does not exist in the proleptic Gregorian calendar.
    #[error("no such civil date: {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },
    /// Hour or minute outside 00:00..=23:59.
    #[error("no such clock time: {hour:02}:{minute:02}")]
    InvalidTime { hour: u32, minute: u32 },
}
