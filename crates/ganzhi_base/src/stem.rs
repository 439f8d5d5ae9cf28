//! The ten Heavenly Stems (tian gan).
//!
//! Each element owns two consecutive stems, Yang first then Yin:
//! Jia/Yi = Wood, Bing/Ding = Fire, Wu/Ji = Earth, Geng/Xin = Metal, Ren/Gui = Water.

use serde::Serialize;

use crate::element::{Element, Polarity};
use crate::language::Language;

/// One of the 10 Heavenly Stems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[allow(missing_docs)]
pub enum Stem {
    Jia,
    Yi,
    Bing,
    Ding,
    Wu,
    Ji,
    Geng,
    Xin,
    Ren,
    Gui,
}

/// All 10 stems in cycle order (index 0 = Jia).
pub const ALL_STEMS: [Stem; 10] = [
    Stem::Jia,
    Stem::Yi,
    Stem::Bing,
    Stem::Ding,
    Stem::Wu,
    Stem::Ji,
    Stem::Geng,
    Stem::Xin,
    Stem::Ren,
    Stem::Gui,
];

/// Chinese characters, cycle order.
pub const STEM_HANZI: [&str; 10] = ["甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬", "癸"];

/// Pinyin names, cycle order.
pub const STEM_PINYIN: [&str; 10] = [
    "Jia", "Yi", "Bing", "Ding", "Wu", "Ji", "Geng", "Xin", "Ren", "Gui",
];

impl Stem {
    /// 0-based index (Jia=0 .. Gui=9).
    pub const fn index(self) -> u8 {
        match self {
            Self::Jia => 0,
            Self::Yi => 1,
            Self::Bing => 2,
            Self::Ding => 3,
            Self::Wu => 4,
            Self::Ji => 5,
            Self::Geng => 6,
            Self::Xin => 7,
            Self::Ren => 8,
            Self::Gui => 9,
        }
    }

    /// Stem at a cycle position, taken modulo 10.
    pub const fn from_index(idx: u8) -> Self {
        ALL_STEMS[(idx % 10) as usize]
    }

    pub const fn hanzi(self) -> &'static str {
        STEM_HANZI[self.index() as usize]
    }

    pub const fn pinyin(self) -> &'static str {
        STEM_PINYIN[self.index() as usize]
    }

    pub const fn label(self, lang: Language) -> &'static str {
        match lang {
            Language::Chinese => self.hanzi(),
            Language::English => self.pinyin(),
        }
    }

    /// Element of the stem: two stems per element, in productive-cycle order.
    pub const fn element(self) -> Element {
        Element::from_index(self.index() / 2)
    }

    pub const fn polarity(self) -> Polarity {
        Polarity::from_stem_index(self.index())
    }
}
