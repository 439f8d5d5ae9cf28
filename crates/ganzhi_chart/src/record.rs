//! Flat, persistable record of a chart, and the compact display strings.
//!
//! The record carries both label variants for every symbol so downstream
//! stores and templates need no symbol tables. It is built from the natal
//! chart alone; transit values are never part of it.

use ganzhi_base::{Element, Language, Pillar, ZodiacAnimal};
use serde::{Deserialize, Serialize};

use crate::balance::ElementBalance;
use crate::chart::{BaziChart, DayMaster};

/// Chinese/English label pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    pub zh: String,
    pub en: String,
}

impl Label {
    fn new(zh: &str, en: &str) -> Self {
        Self {
            zh: zh.to_string(),
            en: en.to_string(),
        }
    }
}

impl From<Element> for Label {
    fn from(e: Element) -> Self {
        Self::new(e.hanzi(), e.name())
    }
}

impl From<ZodiacAnimal> for Label {
    fn from(a: ZodiacAnimal) -> Self {
        Self::new(a.hanzi(), a.name())
    }
}

/// One pillar with every derived attribute spelled out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PillarRecord {
    pub stem_index: u8,
    pub branch_index: u8,
    pub stem: String,
    pub stem_en: String,
    pub branch: String,
    pub branch_en: String,
    pub element: String,
    pub element_en: String,
    pub polarity: String,
    pub branch_element: String,
    pub branch_element_en: String,
}

impl From<Pillar> for PillarRecord {
    fn from(p: Pillar) -> Self {
        Self {
            stem_index: p.stem_index(),
            branch_index: p.branch_index(),
            stem: p.stem().hanzi().to_string(),
            stem_en: p.stem().pinyin().to_string(),
            branch: p.branch().hanzi().to_string(),
            branch_en: p.branch().pinyin().to_string(),
            element: p.stem_element().hanzi().to_string(),
            element_en: p.stem_element().name().to_string(),
            polarity: p.polarity().name().to_string(),
            branch_element: p.branch_element().hanzi().to_string(),
            branch_element_en: p.branch_element().name().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayMasterRecord {
    pub stem: String,
    pub stem_en: String,
    pub element: String,
    pub element_en: String,
    pub polarity: String,
}

impl From<DayMaster> for DayMasterRecord {
    fn from(dm: DayMaster) -> Self {
        Self {
            stem: dm.stem.hanzi().to_string(),
            stem_en: dm.stem.pinyin().to_string(),
            element: dm.element.hanzi().to_string(),
            element_en: dm.element.name().to_string(),
            polarity: dm.polarity.name().to_string(),
        }
    }
}

/// Per-element scores, one named field each.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ElementScores {
    pub wood: f64,
    pub fire: f64,
    pub earth: f64,
    pub metal: f64,
    pub water: f64,
}

impl From<&ElementBalance> for ElementScores {
    fn from(b: &ElementBalance) -> Self {
        Self {
            wood: b.score(Element::Wood),
            fire: b.score(Element::Fire),
            earth: b.score(Element::Earth),
            metal: b.score(Element::Metal),
            water: b.score(Element::Water),
        }
    }
}

/// Structured, persistable chart record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartRecord {
    /// `YYYY-MM-DD`.
    pub birth_date: String,
    /// `HH:mm`, when supplied.
    pub birth_time: Option<String>,
    /// Compact display string, e.g. `庚午 壬午 辛亥 乙未`.
    pub four_pillars: String,
    pub year_pillar: PillarRecord,
    pub month_pillar: PillarRecord,
    pub day_pillar: PillarRecord,
    pub hour_pillar: Option<PillarRecord>,
    pub zodiac: Label,
    pub day_master: DayMasterRecord,
    pub element_balance: ElementScores,
    pub dominant_element: Label,
    pub weakest_element: Label,
}

impl From<&BaziChart> for ChartRecord {
    fn from(c: &BaziChart) -> Self {
        Self {
            birth_date: c.birth_date.to_string(),
            birth_time: c.birth_time.map(|t| t.to_string()),
            four_pillars: four_pillars_display(c),
            year_pillar: c.year.into(),
            month_pillar: c.month.into(),
            day_pillar: c.day.into(),
            hour_pillar: c.hour.map(PillarRecord::from),
            zodiac: c.zodiac.into(),
            day_master: c.day_master.into(),
            element_balance: (&c.balance).into(),
            dominant_element: c.dominant.into(),
            weakest_element: c.weakest.into(),
        }
    }
}

/// Pillars as space-separated character pairs; hour omitted when absent.
pub fn four_pillars_display(chart: &BaziChart) -> String {
    pillars_joined(chart, Language::Chinese, " ")
}

/// Pillars rendered in `lang`, joined by `sep`.
pub fn pillars_joined(chart: &BaziChart, lang: Language, sep: &str) -> String {
    chart
        .pillars()
        .iter()
        .map(|p| p.label(lang))
        .collect::<Vec<_>>()
        .join(sep)
}

/// e.g. `辛 Xin (Metal Yin)`.
pub fn day_master_display(chart: &BaziChart) -> String {
    let dm = chart.day_master;
    format!(
        "{} {} ({} {})",
        dm.stem.hanzi(),
        dm.stem.pinyin(),
        dm.element.name(),
        dm.polarity.name()
    )
}

/// e.g. `马 Horse`.
pub fn zodiac_display(chart: &BaziChart) -> String {
    format!("{} {}", chart.zodiac.hanzi(), chart.zodiac.name())
}
