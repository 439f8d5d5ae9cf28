//! Civil (proleptic Gregorian) calendar date and 24-hour clock time.
//!
//! `CivilDate` and `ClockTime` are validated on construction, so any value of
//! these types names a real calendar day / wall-clock minute. Parsing accepts
//! the wire forms used by callers: `YYYY-MM-DD` and `HH:mm`.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::{Datelike, Local, NaiveDate};
use serde::{Serialize, Serializer};

use crate::error::TimeError;
use crate::julian::{civil_to_jdn, jdn_to_civil};

/// A civil calendar date with no time zone.
///
/// Serializes as its `YYYY-MM-DD` display form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CivilDate {
    year: i32,
    month: u32,
    day: u32,
}

impl CivilDate {
    /// Build a date, rejecting month/day combinations that do not exist.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, TimeError> {
        if NaiveDate::from_ymd_opt(year, month, day).is_none() {
            return Err(TimeError::InvalidDate { year, month, day });
        }
        Ok(Self { year, month, day })
    }

    /// The date for a Julian Day Number.
    pub fn from_jdn(jdn: i64) -> Self {
        let (year, month, day) = jdn_to_civil(jdn);
        Self { year, month, day }
    }

    /// Today's date on the local system clock.
    pub fn today() -> Self {
        Self::from(Local::now().date_naive())
    }

    pub const fn year(self) -> i32 {
        self.year
    }

    pub const fn month(self) -> u32 {
        self.month
    }

    pub const fn day(self) -> u32 {
        self.day
    }

    /// Julian Day Number of this date.
    pub fn jdn(self) -> i64 {
        civil_to_jdn(self.year, self.month, self.day)
    }

    /// The following civil day.
    pub fn succ(self) -> Self {
        Self::from_jdn(self.jdn() + 1)
    }

    /// The date `days` civil days away (negative moves backwards).
    pub fn add_days(self, days: i64) -> Self {
        Self::from_jdn(self.jdn() + days)
    }
}

impl From<NaiveDate> for CivilDate {
    fn from(d: NaiveDate) -> Self {
        Self {
            year: d.year(),
            month: d.month(),
            day: d.day(),
        }
    }
}

impl FromStr for CivilDate {
    type Err = TimeError;

    /// Parse `YYYY-MM-DD`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let parts: Vec<&str> = s.split('-').collect();
        if parts.len() != 3 || !fixed_width_digits(&parts, &[4, 2, 2]) {
            return Err(TimeError::DateFormat(s.to_string()));
        }
        let bad = || TimeError::DateFormat(s.to_string());
        let year: i32 = parts[0].parse().map_err(|_| bad())?;
        let month: u32 = parts[1].parse().map_err(|_| bad())?;
        let day: u32 = parts[2].parse().map_err(|_| bad())?;
        Self::new(year, month, day)
    }
}

impl Display for CivilDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl Serialize for CivilDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Each field is ASCII digits of exactly the given width (no sign, no padding).
fn fixed_width_digits(parts: &[&str], widths: &[usize]) -> bool {
    parts
        .iter()
        .zip(widths)
        .all(|(p, &w)| p.len() == w && p.bytes().all(|b| b.is_ascii_digit()))
}

/// A 24-hour wall-clock time, minute precision.
///
/// Serializes as its `HH:mm` display form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime {
    hour: u32,
    minute: u32,
}

impl ClockTime {
    /// Build a time, rejecting anything outside 00:00..=23:59.
    pub fn new(hour: u32, minute: u32) -> Result<Self, TimeError> {
        if hour > 23 || minute > 59 {
            return Err(TimeError::InvalidTime { hour, minute });
        }
        Ok(Self { hour, minute })
    }

    pub const fn hour(self) -> u32 {
        self.hour
    }

    pub const fn minute(self) -> u32 {
        self.minute
    }
}

impl FromStr for ClockTime {
    type Err = TimeError;

    /// Parse `HH:mm`. A trailing `:ss` is accepted and discarded.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let parts: Vec<&str> = s.split(':').collect();
        if !(2..=3).contains(&parts.len()) || !fixed_width_digits(&parts, &[2, 2, 2]) {
            return Err(TimeError::TimeFormat(s.to_string()));
        }
        let bad = || TimeError::TimeFormat(s.to_string());
        let hour: u32 = parts[0].parse().map_err(|_| bad())?;
        let minute: u32 = parts[1].parse().map_err(|_| bad())?;
        if let Some(sec) = parts.get(2) {
            let sec: u32 = sec.parse().map_err(|_| bad())?;
            if sec > 59 {
                return Err(bad());
            }
        }
        Self::new(hour, minute)
    }
}

impl Display for ClockTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl Serialize for ClockTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_plain_date() {
        let d: CivilDate = "1990-06-15".parse().unwrap();
        assert_eq!((d.year(), d.month(), d.day()), (1990, 6, 15));
    }

    #[test]
    fn reject_off_wire_dates() {
        for s in ["2000-2-4", "2000-02-4", "+2000-01-01", "20000-01-01", "2000-+1-01", "200-01-01"] {
            assert_eq!(
                s.parse::<CivilDate>(),
                Err(TimeError::DateFormat(s.to_string())),
                "{s}"
            );
        }
    }

    #[test]
    fn reject_feb_30() {
        assert_eq!(
            "2023-02-30".parse::<CivilDate>(),
            Err(TimeError::InvalidDate {
                year: 2023,
                month: 2,
                day: 30
            })
        );
    }

    #[test]
    fn accept_leap_day() {
        assert!(CivilDate::new(2024, 2, 29).is_ok());
        assert!(CivilDate::new(1900, 2, 29).is_err());
    }

    #[test]
    fn reject_garbage_date() {
        assert!(matches!(
            "15/06/1990".parse::<CivilDate>(),
            Err(TimeError::DateFormat(_))
        ));
        assert!(matches!(
            "1990-06".parse::<CivilDate>(),
            Err(TimeError::DateFormat(_))
        ));
        assert!(matches!(
            "1990-xx-01".parse::<CivilDate>(),
            Err(TimeError::DateFormat(_))
        ));
    }

    #[test]
    fn display_pads() {
        let d = CivilDate::new(804, 3, 7).unwrap();
        assert_eq!(d.to_string(), "0804-03-07");
    }

    #[test]
    fn succ_crosses_year() {
        let d = CivilDate::new(1999, 12, 31).unwrap();
        assert_eq!(d.succ(), CivilDate::new(2000, 1, 1).unwrap());
    }

    #[test]
    fn add_days_backwards() {
        let d = CivilDate::new(2024, 3, 1).unwrap();
        assert_eq!(d.add_days(-1), CivilDate::new(2024, 2, 29).unwrap());
    }

    #[test]
    fn parse_time() {
        let t: ClockTime = "14:30".parse().unwrap();
        assert_eq!((t.hour(), t.minute()), (14, 30));
    }

    #[test]
    fn parse_time_with_seconds() {
        let t: ClockTime = "23:05:59".parse().unwrap();
        assert_eq!(t.to_string(), "23:05");
    }

    #[test]
    fn reject_bad_times() {
        assert_eq!(
            "24:00".parse::<ClockTime>(),
            Err(TimeError::InvalidTime {
                hour: 24,
                minute: 0
            })
        );
        assert!("12:60".parse::<ClockTime>().is_err());
        assert!("1230".parse::<ClockTime>().is_err());
        assert!("12:".parse::<ClockTime>().is_err());
    }

    #[test]
    fn reject_off_wire_times() {
        for s in ["+14:30", "9:30", "09:5", "14:30:5", "14:+3", "014:30"] {
            assert_eq!(
                s.parse::<ClockTime>(),
                Err(TimeError::TimeFormat(s.to_string())),
                "{s}"
            );
        }
    }

    #[test]
    fn serialize_as_wire_strings() {
        let d = CivilDate::new(804, 3, 7).unwrap();
        let t = ClockTime::new(9, 5).unwrap();
        assert_eq!(serde_json::to_string(&d).unwrap(), "\"0804-03-07\"");
        assert_eq!(serde_json::to_string(&t).unwrap(), "\"09:05\"");
        assert_eq!(
            serde_json::to_value(Some(t)).unwrap(),
            serde_json::Value::String("09:05".to_string())
        );
    }

    #[test]
    fn from_naive_date() {
        let nd = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        assert_eq!(CivilDate::from(nd).to_string(), "2026-10-19");
    }
}
