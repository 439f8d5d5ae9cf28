//! Year, month, day, and hour pillar calculators.
//!
//! All four are total functions over plausible calendar input: every index
//! is reduced with `rem_euclid`, so negative offsets (years before 4 CE,
//! days before 1900) land in range. Calendar well-formedness is the
//! caller's job; see `ganzhi_time::CivilDate`.

use serde::{Deserialize, Serialize};

use ganzhi_time::{JDN_1900_01_01, civil_to_jdn};

use crate::pillar::Pillar;
use crate::solar_term::{before_year_boundary, traditional_month_index};

/// Civil year whose traditional year is Jia Zi (stem 0, branch 0).
pub const YEAR_EPOCH: i32 = 4;

/// Stem index of the day 1900-01-01 (Jia).
pub const DAY_EPOCH_STEM: i64 = 0;

/// Branch index of the day 1900-01-01 (Xu).
pub const DAY_EPOCH_BRANCH: i64 = 10;

/// How the month stem is derived from the year stem.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MonthStemRule {
    /// `(yearStem mod 5) * 2 + monthIndex`. Jia/Ji years open on a Jia month.
    #[default]
    Offset,
    /// Traditional Five Tiger table: Jia/Ji years open on Bing Yin,
    /// two stems after `Offset`.
    Classical,
}

impl MonthStemRule {
    /// Stem index of traditional month 0 for a year stem.
    pub const fn first_month_stem(self, year_stem: u8) -> u8 {
        let base = (year_stem % 5) * 2;
        match self {
            Self::Offset => base,
            Self::Classical => (base + 2) % 10,
        }
    }
}

/// Traditional year for a civil date: the civil year, minus one before Feb 4.
pub const fn adjusted_year(year: i32, month: u32, day: u32) -> i32 {
    if before_year_boundary(month, day) { year - 1 } else { year }
}

/// Year pillar for a civil date.
pub fn year_pillar(year: i32, month: u32, day: u32) -> Pillar {
    let offset = adjusted_year(year, month, day) - YEAR_EPOCH;
    Pillar::new(offset.rem_euclid(10) as u8, offset.rem_euclid(12) as u8)
}

/// Month pillar for a civil date, using [`MonthStemRule::Offset`].
pub fn month_pillar(year: i32, month: u32, day: u32) -> Pillar {
    month_pillar_with_rule(year, month, day, MonthStemRule::Offset)
}

/// Month pillar for a civil date under an explicit stem rule.
///
/// Branch: traditional month 0 is Yin (index 2). Stem: the rule's first-month
/// stem for the traditional year, advanced by the month index.
pub fn month_pillar_with_rule(year: i32, month: u32, day: u32, rule: MonthStemRule) -> Pillar {
    let month_idx = traditional_month_index(month, day);
    let branch = (month_idx + 2) % 12;

    let year_stem = (adjusted_year(year, month, day) - YEAR_EPOCH).rem_euclid(10) as u8;
    let stem = (rule.first_month_stem(year_stem) + month_idx) % 10;

    Pillar::new(stem, branch)
}

/// Day pillar for a civil date.
///
/// Counts civil days from 1900-01-01 (Jia Xu) via the Julian Day Number, so
/// the pillar steps once per day with no month or year resets.
pub fn day_pillar(year: i32, month: u32, day: u32) -> Pillar {
    day_pillar_from_jdn(civil_to_jdn(year, month, day))
}

/// Day pillar for a Julian Day Number.
pub fn day_pillar_from_jdn(jdn: i64) -> Pillar {
    let diff = jdn - JDN_1900_01_01;
    let stem = (DAY_EPOCH_STEM + diff).rem_euclid(10);
    let branch = (DAY_EPOCH_BRANCH + diff).rem_euclid(12);
    Pillar::new(stem as u8, branch as u8)
}

/// Branch index of the two-hour block containing `hour` (0-23).
///
/// Zi spans 23:00-00:59, then each branch covers two hours:
/// 01-02 Chou, 03-04 Yin, ... 21-22 Hai.
pub const fn hour_branch_index(hour: u32) -> u8 {
    (((hour + 1) / 2) % 12) as u8
}

/// Hour pillar from the day stem and hour of day (0-23).
///
/// Stem by the Five Rat rule: Jia/Ji days open on a Jia Zi hour.
pub fn hour_pillar(day_stem_index: u8, hour: u32) -> Pillar {
    let branch = hour_branch_index(hour);
    let stem = ((day_stem_index % 5) * 2 + branch) % 10;
    Pillar::new(stem, branch)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::branch::Branch;
    use crate::stem::Stem;

    #[test]
    fn adjusted_year_boundary() {
        assert_eq!(adjusted_year(2000, 2, 3), 1999);
        assert_eq!(adjusted_year(2000, 2, 4), 2000);
        assert_eq!(adjusted_year(2000, 1, 1), 1999);
        assert_eq!(adjusted_year(2000, 12, 31), 2000);
    }

    #[test]
    fn year_2000_is_geng_chen() {
        let p = year_pillar(2000, 2, 4);
        assert_eq!((p.stem(), p.branch()), (Stem::Geng, Branch::Chen));
    }

    #[test]
    fn year_1984_is_jia_zi() {
        let p = year_pillar(1984, 6, 1);
        assert_eq!((p.stem_index(), p.branch_index()), (0, 0));
    }

    #[test]
    fn year_before_epoch() {
        // 3 CE: offset -1 -> Gui Hai.
        let p = year_pillar(3, 6, 1);
        assert_eq!((p.stem_index(), p.branch_index()), (9, 11));
    }

    #[test]
    fn month_mid_june_1990() {
        let p = month_pillar(1990, 6, 15);
        assert_eq!((p.stem_index(), p.branch_index()), (6, 6));
        let c = month_pillar_with_rule(1990, 6, 15, MonthStemRule::Classical);
        assert_eq!((c.stem(), c.branch()), (Stem::Ren, Branch::Wu));
    }

    #[test]
    fn month_uses_previous_year_stem_in_january() {
        // 2024-01-06: traditional year 2023 (Gui), month 11 (Chou).
        let p = month_pillar(2024, 1, 6);
        assert_eq!((p.stem(), p.branch()), (Stem::Gui, Branch::Chou));
        // 2024-01-05 folds back to month 10 (Zi).
        let p = month_pillar(2024, 1, 5);
        assert_eq!((p.stem(), p.branch()), (Stem::Ren, Branch::Zi));
    }

    #[test]
    fn classical_first_month_of_jia_year() {
        let p = month_pillar_with_rule(1984, 2, 4, MonthStemRule::Classical);
        assert_eq!((p.stem(), p.branch()), (Stem::Bing, Branch::Yin));
    }

    #[test]
    fn day_anchor() {
        let p = day_pillar(1900, 1, 1);
        assert_eq!((p.stem_index(), p.branch_index()), (0, 10));
    }

    #[test]
    fn day_before_anchor() {
        let p = day_pillar(1899, 12, 31);
        assert_eq!((p.stem(), p.branch()), (Stem::Gui, Branch::You));
    }

    #[test]
    fn day_known_dates() {
        let p = day_pillar(2000, 1, 1);
        assert_eq!((p.stem(), p.branch()), (Stem::Wu, Branch::Wu));
        let p = day_pillar(2024, 2, 10);
        assert_eq!((p.stem(), p.branch()), (Stem::Jia, Branch::Chen));
    }

    #[test]
    fn hour_branches() {
        assert_eq!(hour_branch_index(23), 0);
        assert_eq!(hour_branch_index(0), 0);
        assert_eq!(hour_branch_index(1), 1);
        assert_eq!(hour_branch_index(2), 1);
        assert_eq!(hour_branch_index(14), 7);
        assert_eq!(hour_branch_index(15), 8);
        assert_eq!(hour_branch_index(21), 11);
        assert_eq!(hour_branch_index(22), 11);
    }

    #[test]
    fn hour_five_rat() {
        // Jia day, Zi hour -> Jia Zi; Yi day, Zi hour -> Bing Zi.
        assert_eq!(hour_pillar(0, 0), Pillar::new(0, 0));
        assert_eq!(hour_pillar(1, 23), Pillar::new(2, 0));
        // Xin day 14:30 -> Yi Wei.
        let p = hour_pillar(7, 14);
        assert_eq!((p.stem(), p.branch()), (Stem::Yi, Branch::Wei));
    }
}
