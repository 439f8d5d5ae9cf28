//! Four Pillars (Bazi) chart assembly and rendering.
//!
//! This crate provides:
//! - `BaziChart`: the four pillars, zodiac, Day Master, and elemental balance
//! - `ChartReading`: a chart plus the year transit for the day it was read
//! - `ChartRecord`: a flat serializable record for persistence
//! - Compact display strings and the two narrative renderings
//! - `calculate_bazi_chart*`: string-in entry points that validate input once
//!
//! # Quick start
//!
//! ```rust,ignore
//! use ganzhi_chart::*;
//!
//! let reading = calculate_bazi_chart("1990-06-15", Some("14:30"))?;
//! println!("{}", four_pillars_display(&reading.chart));
//! println!("{}", strategic_context(&reading));
//! ```

pub mod balance;
pub mod chart;
pub mod config;
pub mod convenience;
pub mod error;
pub mod narrative;
pub mod record;
pub mod transit;

pub use balance::ElementBalance;
pub use chart::{BaziChart, ChartReading, DayMaster};
pub use config::{ChartConfig, DEFAULT_BRANCH_WEIGHT, DEFAULT_STEM_WEIGHT};
pub use convenience::{
    calculate_bazi_chart, calculate_bazi_chart_on, calculate_bazi_chart_with, parse_birth_input,
};
pub use error::ChartError;
pub use narrative::{controller_hint, element_advice, strategic_context, technical_summary};
pub use record::{
    ChartRecord, DayMasterRecord, ElementScores, Label, PillarRecord, day_master_display,
    four_pillars_display, pillars_joined, zodiac_display,
};
pub use transit::{current_transit, transit_pillar};

// Re-export the value types callers see on a chart.
pub use ganzhi_base::{
    Branch, Element, ElementRelation, Language, MonthStemRule, Pillar, Polarity, Stem,
    ZodiacAnimal,
};
pub use ganzhi_time::{CivilDate, ClockTime, TimeError};
