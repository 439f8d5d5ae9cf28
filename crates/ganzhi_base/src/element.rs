//! The five elements (wu xing), stem polarity, and element relationships.
//!
//! Elements are ordered along the productive cycle:
//! Wood → Fire → Earth → Metal → Water → Wood.
//! The destructive (controlling) cycle skips one step along that ring:
//! Wood → Earth → Water → Fire → Metal → Wood.

use serde::Serialize;

use crate::language::Language;

/// One of the five element categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Element {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

/// All five elements in productive-cycle order (index 0 = Wood).
///
/// This is also the iteration order of every elemental-balance table.
pub const ALL_ELEMENTS: [Element; 5] = [
    Element::Wood,
    Element::Fire,
    Element::Earth,
    Element::Metal,
    Element::Water,
];

const ELEMENT_HANZI: [&str; 5] = ["木", "火", "土", "金", "水"];
const ELEMENT_ENGLISH: [&str; 5] = ["Wood", "Fire", "Earth", "Metal", "Water"];

impl Element {
    /// 0-based index (Wood=0 .. Water=4).
    pub const fn index(self) -> u8 {
        match self {
            Self::Wood => 0,
            Self::Fire => 1,
            Self::Earth => 2,
            Self::Metal => 3,
            Self::Water => 4,
        }
    }

    /// Element at a cycle position, taken modulo 5.
    pub const fn from_index(idx: u8) -> Self {
        ALL_ELEMENTS[(idx % 5) as usize]
    }

    /// Chinese character, e.g. `木`.
    pub const fn hanzi(self) -> &'static str {
        ELEMENT_HANZI[self.index() as usize]
    }

    /// English name, e.g. `Wood`.
    pub const fn name(self) -> &'static str {
        ELEMENT_ENGLISH[self.index() as usize]
    }

    pub const fn label(self, lang: Language) -> &'static str {
        match lang {
            Language::Chinese => self.hanzi(),
            Language::English => self.name(),
        }
    }

    /// The element this one feeds in the productive cycle.
    pub const fn generates(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// The element that feeds this one.
    pub const fn generated_by(self) -> Self {
        Self::from_index(self.index() + 4)
    }

    /// The element this one restrains in the destructive cycle.
    pub const fn controls(self) -> Self {
        Self::from_index(self.index() + 2)
    }

    /// The element that restrains this one.
    pub const fn controlled_by(self) -> Self {
        Self::from_index(self.index() + 3)
    }
}

/// Yin/Yang polarity of a stem. Even stem index = Yang, odd = Yin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Polarity {
    Yang,
    Yin,
}

impl Polarity {
    /// Polarity for a stem index.
    pub const fn from_stem_index(idx: u8) -> Self {
        if idx % 2 == 0 { Self::Yang } else { Self::Yin }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Yang => "Yang",
            Self::Yin => "Yin",
        }
    }

    pub const fn hanzi(self) -> &'static str {
        match self {
            Self::Yang => "阳",
            Self::Yin => "阴",
        }
    }

    pub const fn label(self, lang: Language) -> &'static str {
        match lang {
            Language::Chinese => self.hanzi(),
            Language::English => self.name(),
        }
    }
}

/// How one element stands toward another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ElementRelation {
    /// Same element.
    Same,
    /// `other` is fed by the subject.
    Generates,
    /// `other` feeds the subject.
    GeneratedBy,
    /// Subject restrains `other`.
    Controls,
    /// `other` restrains the subject.
    ControlledBy,
}

impl ElementRelation {
    /// Relation of `subject` toward `other`.
    ///
    /// Any two elements stand in exactly one of the five relations.
    pub const fn between(subject: Element, other: Element) -> Self {
        match (other.index() + 5 - subject.index()) % 5 {
            0 => Self::Same,
            1 => Self::Generates,
            2 => Self::Controls,
            3 => Self::ControlledBy,
            _ => Self::GeneratedBy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_sequential() {
        for (i, e) in ALL_ELEMENTS.iter().enumerate() {
            assert_eq!(e.index() as usize, i);
        }
    }

    #[test]
    fn productive_cycle() {
        assert_eq!(Element::Wood.generates(), Element::Fire);
        assert_eq!(Element::Water.generates(), Element::Wood);
        assert_eq!(Element::Earth.generated_by(), Element::Fire);
    }

    #[test]
    fn destructive_cycle() {
        assert_eq!(Element::Wood.controls(), Element::Earth);
        assert_eq!(Element::Earth.controls(), Element::Water);
        assert_eq!(Element::Water.controls(), Element::Fire);
        assert_eq!(Element::Fire.controls(), Element::Metal);
        assert_eq!(Element::Metal.controls(), Element::Wood);
    }

    #[test]
    fn controlled_by_inverts_controls() {
        for e in ALL_ELEMENTS {
            assert_eq!(e.controls().controlled_by(), e);
            assert_eq!(e.generates().generated_by(), e);
        }
    }

    #[test]
    fn relation_between() {
        use ElementRelation::*;
        assert_eq!(ElementRelation::between(Element::Metal, Element::Metal), Same);
        assert_eq!(ElementRelation::between(Element::Metal, Element::Water), Generates);
        assert_eq!(ElementRelation::between(Element::Metal, Element::Earth), GeneratedBy);
        assert_eq!(ElementRelation::between(Element::Metal, Element::Wood), Controls);
        assert_eq!(ElementRelation::between(Element::Metal, Element::Fire), ControlledBy);
    }

    #[test]
    fn polarity_alternates() {
        assert_eq!(Polarity::from_stem_index(0), Polarity::Yang);
        assert_eq!(Polarity::from_stem_index(7), Polarity::Yin);
    }

    #[test]
    fn labels() {
        assert_eq!(Element::Metal.label(Language::Chinese), "金");
        assert_eq!(Element::Metal.label(Language::English), "Metal");
        assert_eq!(Polarity::Yin.label(Language::Chinese), "阴");
    }
}
