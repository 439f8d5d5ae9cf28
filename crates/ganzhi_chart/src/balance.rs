//! Weighted elemental balance across a chart's pillars.

use ganzhi_base::{ALL_ELEMENTS, Element, Pillar};
use serde::{Serialize, Serializer};

use crate::config::ChartConfig;
use crate::record::ElementScores;

/// One score per element, indexed in [`ALL_ELEMENTS`] order.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ElementBalance {
    scores: [f64; 5],
}

impl ElementBalance {
    /// Tally `pillars`: each stem adds `stem_weight` to its element and each
    /// branch adds `branch_weight` to its main-qi element.
    pub fn from_pillars(pillars: &[Pillar], config: &ChartConfig) -> Self {
        let mut scores = [0.0; 5];
        for p in pillars {
            scores[p.stem_element().index() as usize] += config.stem_weight;
            scores[p.branch_element().index() as usize] += config.branch_weight;
        }
        Self { scores }
    }

    pub fn score(&self, element: Element) -> f64 {
        self.scores[element.index() as usize]
    }

    pub fn total(&self) -> f64 {
        self.scores.iter().sum()
    }

    /// `(element, score)` in table order: Wood, Fire, Earth, Metal, Water.
    pub fn entries(&self) -> [(Element, f64); 5] {
        ALL_ELEMENTS.map(|e| (e, self.score(e)))
    }

    /// Entries sorted by descending score.
    ///
    /// The sort is stable over table order, so equal scores keep
    /// Wood, Fire, Earth, Metal, Water order among themselves.
    pub fn ranked(&self) -> [(Element, f64); 5] {
        let mut entries = self.entries();
        entries.sort_by(|a, b| b.1.total_cmp(&a.1));
        entries
    }

    /// Highest-scoring element; ties go to the earliest in table order.
    pub fn dominant(&self) -> Element {
        self.ranked()[0].0
    }

    /// Lowest-scoring element; ties go to the latest in table order.
    pub fn weakest(&self) -> Element {
        self.ranked()[4].0
    }
}

impl Serialize for ElementBalance {
    /// Same shape as [`ElementScores`]: lowercase element keys in table order.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        ElementScores::from(self).serialize(serializer)
    }
}
