//! Pillar: one (stem, branch) pair with its derived element metadata.

use std::fmt::{Display, Formatter};

use serde::Serialize;

use crate::branch::Branch;
use crate::element::{Element, Polarity};
use crate::language::Language;
use crate::stem::Stem;

/// Length of the combined stem/branch supercycle, lcm(10, 12).
pub const SEXAGENARY_CYCLE: u8 = 60;

/// An immutable (stem, branch) pair.
///
/// The element and polarity fields are derived from `stem` and `branch` at
/// construction and carried along so serialized pillars are self-describing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Pillar {
    stem: Stem,
    branch: Branch,
    stem_element: Element,
    polarity: Polarity,
    branch_element: Element,
}

impl Pillar {
    /// Build a pillar from raw indices, each reduced modulo its cycle length.
    pub const fn new(stem_index: u8, branch_index: u8) -> Self {
        Self::from_symbols(Stem::from_index(stem_index), Branch::from_index(branch_index))
    }

    pub const fn from_symbols(stem: Stem, branch: Branch) -> Self {
        Self {
            stem,
            branch,
            stem_element: stem.element(),
            polarity: stem.polarity(),
            branch_element: branch.element(),
        }
    }

    /// Pillar at a position (0..59) of the sexagenary cycle; 0 = Jia Zi.
    pub const fn from_sexagenary(index: u8) -> Self {
        let i = index % SEXAGENARY_CYCLE;
        Self::new(i % 10, i % 12)
    }

    pub const fn stem(&self) -> Stem {
        self.stem
    }

    pub const fn branch(&self) -> Branch {
        self.branch
    }

    pub const fn stem_index(&self) -> u8 {
        self.stem.index()
    }

    pub const fn branch_index(&self) -> u8 {
        self.branch.index()
    }

    pub const fn stem_element(&self) -> Element {
        self.stem_element
    }

    pub const fn polarity(&self) -> Polarity {
        self.polarity
    }

    pub const fn branch_element(&self) -> Element {
        self.branch_element
    }

    /// Position of this pair in the 60-cycle, if the pair occurs in it.
    ///
    /// Only pairs whose stem and branch share parity occur; every pillar the
    /// calculators produce does.
    pub const fn sexagenary_index(&self) -> Option<u8> {
        let s = self.stem.index();
        let b = self.branch.index();
        if s % 2 != b % 2 {
            return None;
        }
        // n ≡ s (mod 10), n ≡ b (mod 12)  =>  n = 6s - 5b (mod 60)
        let n = (6 * s as i16 - 5 * b as i16).rem_euclid(SEXAGENARY_CYCLE as i16);
        Some(n as u8)
    }

    /// Both characters in one language, e.g. `庚午` or `Geng Wu`.
    pub fn label(&self, lang: Language) -> String {
        match lang {
            Language::Chinese => format!("{}{}", self.stem.hanzi(), self.branch.hanzi()),
            Language::English => format!("{} {}", self.stem.pinyin(), self.branch.pinyin()),
        }
    }

    /// English rendering, e.g. `Geng Wu`.
    pub fn english(&self) -> String {
        self.label(Language::English)
    }
}

impl Display for Pillar {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.stem.hanzi(), self.branch.hanzi())
    }
}
