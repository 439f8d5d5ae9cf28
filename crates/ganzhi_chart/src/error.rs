//! Error types for chart construction and configuration.

use ganzhi_time::TimeError;
use thiserror::Error;

/// Errors surfaced by the chart entry points.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChartError {
    /// Birth date or time failed to parse or names a nonexistent day/minute.
    #[error("invalid calendar input: {0}")]
    InvalidCalendarInput(#[from] TimeError),
    /// Configuration document is not valid TOML for `ChartConfig`.
    #[error("config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),
    /// Configuration parsed but holds an unusable value.
    #[error("invalid config: {0}")]
    InvalidConfig(&'static str),
}
