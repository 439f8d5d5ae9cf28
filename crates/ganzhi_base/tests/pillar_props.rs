//! Property tests: index ranges, cycle parity, and stepping invariants.

use ganzhi_base::{
    MonthStemRule, day_pillar, hour_branch_index, hour_pillar, month_pillar_with_rule,
    year_pillar,
};
use ganzhi_time::CivilDate;
use proptest::prelude::*;

fn any_date() -> impl Strategy<Value = CivilDate> {
    (1_000_000i64..2_600_000).prop_map(CivilDate::from_jdn)
}

fn any_rule() -> impl Strategy<Value = MonthStemRule> {
    prop_oneof![Just(MonthStemRule::Offset), Just(MonthStemRule::Classical)]
}

proptest! {
    #[test]
    fn indices_in_range(d in any_date(), hour in 0u32..24, rule in any_rule()) {
        let (y, m, dd) = (d.year(), d.month(), d.day());
        let day = day_pillar(y, m, dd);
        for p in [
            year_pillar(y, m, dd),
            month_pillar_with_rule(y, m, dd, rule),
            day,
            hour_pillar(day.stem_index(), hour),
        ] {
            prop_assert!(p.stem_index() <= 9);
            prop_assert!(p.branch_index() <= 11);
            prop_assert!(p.sexagenary_index().is_some());
        }
    }

    #[test]
    fn day_advances_one_step(d in any_date()) {
        let a = day_pillar(d.year(), d.month(), d.day());
        let n = d.succ();
        let b = day_pillar(n.year(), n.month(), n.day());
        let (ia, ib) = (a.sexagenary_index().unwrap(), b.sexagenary_index().unwrap());
        prop_assert_eq!(ib, (ia + 1) % 60);
    }

    #[test]
    fn day_repeats_every_sixty_days(d in any_date()) {
        let later = d.add_days(60);
        prop_assert_eq!(
            day_pillar(d.year(), d.month(), d.day()),
            day_pillar(later.year(), later.month(), later.day())
        );
    }

    #[test]
    fn year_repeats_every_sixty_years(year in -3000i32..3000, month in 1u32..=12, day in 1u32..=28) {
        prop_assert_eq!(year_pillar(year, month, day), year_pillar(year + 60, month, day));
    }

    #[test]
    fn hour_branch_pairs(block in 0u32..12) {
        // Both hours of a two-hour block share a branch.
        let first = (block * 2 + 23) % 24;
        let second = (first + 1) % 24;
        prop_assert_eq!(hour_branch_index(first), hour_branch_index(second));
        prop_assert_eq!(hour_branch_index(first) as u32, block);
    }
}
