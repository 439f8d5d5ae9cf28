//! Traditional-month boundaries (the twelve jie solar terms) as fixed civil dates.
//!
//! The real terms fall at exact solar longitudes and drift by up to a day
//! from year to year. This table pins each one to a fixed `(month, day)`,
//! which is what every pillar calculator in this crate consumes. Swapping in
//! an ephemeris only needs to change how a traditional-month index is
//! resolved; the pillar formulas stay the same.

/// One traditional-month boundary as a civil `(month, day)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolarTerm {
    /// Civil month, 1-12.
    pub month: u32,
    /// Civil day of month on which the traditional month starts.
    pub day: u32,
    /// Pinyin name of the jie term.
    pub name: &'static str,
    /// Chinese name of the jie term.
    pub hanzi: &'static str,
}

/// Start dates of traditional months 0..=11, in month order.
///
/// Index 0 (Li Chun, Feb 4) opens the traditional year and the Tiger month;
/// index 11 (Xiao Han, Jan 6) opens the Ox month, the last of the year.
pub const SOLAR_TERMS: [SolarTerm; 12] = [
    SolarTerm { month: 2, day: 4, name: "Lichun", hanzi: "立春" },
    SolarTerm { month: 3, day: 6, name: "Jingzhe", hanzi: "惊蛰" },
    SolarTerm { month: 4, day: 5, name: "Qingming", hanzi: "清明" },
    SolarTerm { month: 5, day: 6, name: "Lixia", hanzi: "立夏" },
    SolarTerm { month: 6, day: 6, name: "Mangzhong", hanzi: "芒种" },
    SolarTerm { month: 7, day: 7, name: "Xiaoshu", hanzi: "小暑" },
    SolarTerm { month: 8, day: 7, name: "Liqiu", hanzi: "立秋" },
    SolarTerm { month: 9, day: 8, name: "Bailu", hanzi: "白露" },
    SolarTerm { month: 10, day: 8, name: "Hanlu", hanzi: "寒露" },
    SolarTerm { month: 11, day: 7, name: "Lidong", hanzi: "立冬" },
    SolarTerm { month: 12, day: 7, name: "Daxue", hanzi: "大雪" },
    SolarTerm { month: 1, day: 6, name: "Xiaohan", hanzi: "小寒" },
];

/// Traditional-month index that January dates before Xiao Han fold back to.
pub const JANUARY_FOLD_INDEX: u8 = 10;

impl SolarTerm {
    /// Whether `(month, day)` falls on or after this boundary within a civil year.
    pub const fn reached_by(&self, month: u32, day: u32) -> bool {
        month > self.month || (month == self.month && day >= self.day)
    }
}

/// First day of the traditional year (Li Chun), as `(month, day)`.
pub const YEAR_BOUNDARY: (u32, u32) = (SOLAR_TERMS[0].month, SOLAR_TERMS[0].day);

/// Whether a civil date falls before Feb 4 and so belongs to the previous
/// traditional year. The boundary day itself is inclusive.
pub const fn before_year_boundary(month: u32, day: u32) -> bool {
    !SOLAR_TERMS[0].reached_by(month, day)
}

/// Traditional-month index (0 = Tiger month starting Feb 4 .. 11 = Ox month).
///
/// From Feb 4 onward this is the latest of the first eleven boundaries on or
/// before the date. Jan 1 - Feb 3 belong to the tail of the previous
/// traditional year: on or after the January boundary they are month 11,
/// earlier January dates fold back to month 10.
pub fn traditional_month_index(month: u32, day: u32) -> u8 {
    if before_year_boundary(month, day) {
        let last = &SOLAR_TERMS[11];
        return if month == last.month && !last.reached_by(month, day) {
            JANUARY_FOLD_INDEX
        } else {
            11
        };
    }
    SOLAR_TERMS[..11]
        .iter()
        .rposition(|term| term.reached_by(month, day))
        .map_or(0, |i| i as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_in_month_order() {
        for (i, term) in SOLAR_TERMS.iter().enumerate() {
            assert_eq!(term.month, (i as u32 + 1) % 12 + 1, "{}", term.name);
        }
    }

    #[test]
    fn boundary_day_is_inclusive() {
        assert!(!before_year_boundary(2, 4));
        assert!(before_year_boundary(2, 3));
        assert!(before_year_boundary(1, 31));
        assert!(!before_year_boundary(12, 31));
    }

    #[test]
    fn each_boundary_opens_its_month() {
        for (i, term) in SOLAR_TERMS.iter().enumerate() {
            assert_eq!(traditional_month_index(term.month, term.day), i as u8, "{}", term.name);
        }
    }

    #[test]
    fn day_before_each_boundary() {
        assert_eq!(traditional_month_index(3, 5), 0);
        assert_eq!(traditional_month_index(6, 5), 3);
        assert_eq!(traditional_month_index(12, 6), 9);
        assert_eq!(traditional_month_index(2, 3), 11);
        assert_eq!(traditional_month_index(1, 5), 10);
    }

    #[test]
    fn december_to_february() {
        assert_eq!(traditional_month_index(12, 1), 9);
        assert_eq!(traditional_month_index(12, 7), 10);
        assert_eq!(traditional_month_index(12, 31), 10);
        assert_eq!(traditional_month_index(1, 1), 10);
        assert_eq!(traditional_month_index(1, 6), 11);
        assert_eq!(traditional_month_index(1, 31), 11);
        assert_eq!(traditional_month_index(2, 1), 11);
        assert_eq!(traditional_month_index(2, 4), 0);
        assert_eq!(traditional_month_index(2, 5), 0);
    }

    #[test]
    fn mid_year() {
        assert_eq!(traditional_month_index(6, 15), 4);
        assert_eq!(traditional_month_index(10, 19), 8);
    }
}
