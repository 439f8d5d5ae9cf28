//! Current year transit (liu nian).
//!
//! The transit is the year pillar of the date a chart is read, not of the
//! birth date. It is recomputed on every read and never stored.

use ganzhi_base::{Pillar, year_pillar};
use ganzhi_time::CivilDate;

/// Year-transit pillar for `date`.
pub fn transit_pillar(date: CivilDate) -> Pillar {
    year_pillar(date.year(), date.month(), date.day())
}

/// Year-transit pillar for the local clock's today, with the date used.
pub fn current_transit() -> (CivilDate, Pillar) {
    let today = CivilDate::today();
    (today, transit_pillar(today))
}
