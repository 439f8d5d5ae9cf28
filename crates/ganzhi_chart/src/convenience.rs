//! String-in entry points: parse, validate, assemble, and read a chart.
//!
//! Validation happens here once; everything downstream assumes a real
//! calendar date and clock time.

use ganzhi_time::{CivilDate, ClockTime};
use tracing::warn;

use crate::chart::{BaziChart, ChartReading};
use crate::config::ChartConfig;
use crate::error::ChartError;

/// Parse `YYYY-MM-DD` and optional `HH:mm`. An empty or blank time counts as absent.
pub fn parse_birth_input(
    birth_date: &str,
    birth_time: Option<&str>,
) -> Result<(CivilDate, Option<ClockTime>), ChartError> {
    let date = birth_date.parse::<CivilDate>().inspect_err(|e| {
        warn!(input = birth_date, error = %e, "rejected birth date");
    })?;
    let time = match birth_time.map(str::trim).filter(|s| !s.is_empty()) {
        Some(s) => Some(s.parse::<ClockTime>().inspect_err(|e| {
            warn!(input = s, error = %e, "rejected birth time");
        })?),
        None => None,
    };
    Ok((date, time))
}

/// Build a chart and read it against the local clock's today.
///
/// The clock is read once per call.
pub fn calculate_bazi_chart(
    birth_date: &str,
    birth_time: Option<&str>,
) -> Result<ChartReading, ChartError> {
    calculate_bazi_chart_on(birth_date, birth_time, CivilDate::today())
}

/// Build a chart and read it on an explicit `today`.
pub fn calculate_bazi_chart_on(
    birth_date: &str,
    birth_time: Option<&str>,
    today: CivilDate,
) -> Result<ChartReading, ChartError> {
    calculate_bazi_chart_with(birth_date, birth_time, today, &ChartConfig::default())
}

/// Build a chart under `config` and read it on an explicit `today`.
///
/// `config` is validated here, so structs built in code get the same
/// weight checks as ones loaded from TOML.
pub fn calculate_bazi_chart_with(
    birth_date: &str,
    birth_time: Option<&str>,
    today: CivilDate,
    config: &ChartConfig,
) -> Result<ChartReading, ChartError> {
    config.validate().inspect_err(|e| {
        warn!(error = %e, "rejected chart config");
    })?;
    let (date, time) = parse_birth_input(birth_date, birth_time)?;
    Ok(BaziChart::assemble(date, time, config).reading_on(today))
}
