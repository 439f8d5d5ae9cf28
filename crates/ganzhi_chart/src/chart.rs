//! Chart assembly: the four pillars plus derived natal attributes.
//!
//! A [`BaziChart`] is a pure function of (birth date, optional birth time,
//! config). It carries no transit pillar: that depends on the
//! day the chart is read, and lives on [`ChartReading`] instead.

use ganzhi_base::{
    Element, Pillar, Polarity, Stem, ZodiacAnimal, day_pillar, hour_pillar,
    month_pillar_with_rule, year_pillar,
};
use ganzhi_time::{CivilDate, ClockTime};
use serde::Serialize;
use tracing::debug;

use crate::balance::ElementBalance;
use crate::config::ChartConfig;
use crate::transit::transit_pillar;

/// The Day Pillar's stem, read as the subject's core identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayMaster {
    pub stem: Stem,
    pub element: Element,
    pub polarity: Polarity,
}

impl DayMaster {
    pub const fn from_stem(stem: Stem) -> Self {
        Self {
            stem,
            element: stem.element(),
            polarity: stem.polarity(),
        }
    }
}

/// A natal Four Pillars chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BaziChart {
    /// Civil birth date the chart was built from.
    pub birth_date: CivilDate,
    /// Birth time, if supplied.
    pub birth_time: Option<ClockTime>,
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
    /// Present only when a birth time was supplied.
    pub hour: Option<Pillar>,
    /// Animal of the year branch.
    pub zodiac: ZodiacAnimal,
    pub day_master: DayMaster,
    /// Weighted element tally over the 3 or 4 pillars present.
    pub balance: ElementBalance,
    pub dominant: Element,
    pub weakest: Element,
}

impl BaziChart {
    /// Build the chart for a validated birth date and optional time.
    pub fn assemble(date: CivilDate, time: Option<ClockTime>, config: &ChartConfig) -> Self {
        let (y, m, d) = (date.year(), date.month(), date.day());

        let year = year_pillar(y, m, d);
        let month = month_pillar_with_rule(y, m, d, config.month_stem_rule);
        let day = day_pillar(y, m, d);
        let hour = time.map(|t| hour_pillar(day.stem_index(), t.hour()));

        let mut pillars = vec![year, month, day];
        pillars.extend(hour);
        let balance = ElementBalance::from_pillars(&pillars, config);

        debug!(
            birth_date = %date,
            year = %year,
            month = %month,
            day = %day,
            hour = ?hour.map(|p| p.to_string()),
            "assembled chart"
        );

        Self {
            birth_date: date,
            birth_time: time,
            year,
            month,
            day,
            hour,
            zodiac: year.branch().animal(),
            day_master: DayMaster::from_stem(day.stem()),
            balance,
            dominant: balance.dominant(),
            weakest: balance.weakest(),
        }
    }

    /// Pillars present, in year/month/day/hour order.
    pub fn pillars(&self) -> Vec<Pillar> {
        let mut v = vec![self.year, self.month, self.day];
        v.extend(self.hour);
        v
    }

    pub fn pillar_count(&self) -> usize {
        if self.hour.is_some() { 4 } else { 3 }
    }

    /// Snapshot of this chart read on `today`.
    pub fn reading_on(self, today: CivilDate) -> ChartReading {
        ChartReading {
            transit: transit_pillar(today),
            chart: self,
            as_of: today,
        }
    }

    /// Snapshot of this chart read on the local clock's today.
    pub fn reading(self) -> ChartReading {
        self.reading_on(CivilDate::today())
    }
}

/// A chart together with the year transit for the day it was read.
///
/// Only `chart` is stable; `as_of` and `transit` change whenever the chart
/// is read on a different date across a traditional-year boundary, so
/// persist [`crate::ChartRecord`] rather than this.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChartReading {
    pub chart: BaziChart,
    /// Date the transit was computed for.
    pub as_of: CivilDate,
    /// Year pillar of `as_of`.
    pub transit: Pillar,
}
