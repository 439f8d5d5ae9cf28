//! Sexagenary (gan-zhi) symbol tables and Four Pillars calculators.
//!
//! This crate provides:
//! - The 10 Heavenly Stems, 12 Earthly Branches, 5 elements, and zodiac animals
//! - The fixed traditional-month boundary table (jie solar terms)
//! - Year, month, day, and hour pillar calculators
//!
//! Everything here is pure arithmetic over civil calendar integers. No
//! function in this crate fails or reads the clock.

pub mod branch;
pub mod element;
pub mod four_pillars;
pub mod language;
pub mod pillar;
pub mod solar_term;
pub mod stem;

pub use branch::{ALL_ANIMALS, ALL_BRANCHES, BRANCH_HANZI, BRANCH_PINYIN, Branch, ZodiacAnimal};
pub use element::{ALL_ELEMENTS, Element, ElementRelation, Polarity};
pub use four_pillars::{
    DAY_EPOCH_BRANCH, DAY_EPOCH_STEM, MonthStemRule, YEAR_EPOCH, adjusted_year, day_pillar,
    day_pillar_from_jdn, hour_branch_index, hour_pillar, month_pillar, month_pillar_with_rule,
    year_pillar,
};
pub use language::Language;
pub use pillar::{Pillar, SEXAGENARY_CYCLE};
pub use solar_term::{
    JANUARY_FOLD_INDEX, SOLAR_TERMS, SolarTerm, YEAR_BOUNDARY, before_year_boundary,
    traditional_month_index,
};
pub use stem::{ALL_STEMS, STEM_HANZI, STEM_PINYIN, Stem};
