//! The twelve Earthly Branches (di zhi) and their zodiac animals.
//!
//! Branch elements are the main qi (ben qi) of each branch.

use serde::Serialize;

use crate::element::Element;
use crate::language::Language;

/// One of the 12 Earthly Branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[allow(missing_docs)]
pub enum Branch {
    Zi,
    Chou,
    Yin,
    Mao,
    Chen,
    Si,
    Wu,
    Wei,
    Shen,
    You,
    Xu,
    Hai,
}

/// All 12 branches in cycle order (index 0 = Zi).
pub const ALL_BRANCHES: [Branch; 12] = [
    Branch::Zi,
    Branch::Chou,
    Branch::Yin,
    Branch::Mao,
    Branch::Chen,
    Branch::Si,
    Branch::Wu,
    Branch::Wei,
    Branch::Shen,
    Branch::You,
    Branch::Xu,
    Branch::Hai,
];

/// Chinese characters, cycle order.
pub const BRANCH_HANZI: [&str; 12] = [
    "子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥",
];

/// Pinyin names, cycle order.
pub const BRANCH_PINYIN: [&str; 12] = [
    "Zi", "Chou", "Yin", "Mao", "Chen", "Si", "Wu", "Wei", "Shen", "You", "Xu", "Hai",
];

impl Branch {
    /// 0-based index (Zi=0 .. Hai=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Zi => 0,
            Self::Chou => 1,
            Self::Yin => 2,
            Self::Mao => 3,
            Self::Chen => 4,
            Self::Si => 5,
            Self::Wu => 6,
            Self::Wei => 7,
            Self::Shen => 8,
            Self::You => 9,
            Self::Xu => 10,
            Self::Hai => 11,
        }
    }

    /// Branch at a cycle position, taken modulo 12.
    pub const fn from_index(idx: u8) -> Self {
        ALL_BRANCHES[(idx % 12) as usize]
    }

    pub const fn hanzi(self) -> &'static str {
        BRANCH_HANZI[self.index() as usize]
    }

    pub const fn pinyin(self) -> &'static str {
        BRANCH_PINYIN[self.index() as usize]
    }

    pub const fn label(self, lang: Language) -> &'static str {
        match lang {
            Language::Chinese => self.hanzi(),
            Language::English => self.pinyin(),
        }
    }

    /// Main-qi element of the branch.
    pub const fn element(self) -> Element {
        match self {
            Self::Zi | Self::Hai => Element::Water,
            Self::Yin | Self::Mao => Element::Wood,
            Self::Si | Self::Wu => Element::Fire,
            Self::Shen | Self::You => Element::Metal,
            Self::Chou | Self::Chen | Self::Wei | Self::Xu => Element::Earth,
        }
    }

    pub const fn animal(self) -> ZodiacAnimal {
        ALL_ANIMALS[self.index() as usize]
    }
}

/// Zodiac animal attached to each branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[allow(missing_docs)]
pub enum ZodiacAnimal {
    Rat,
    Ox,
    Tiger,
    Rabbit,
    Dragon,
    Snake,
    Horse,
    Goat,
    Monkey,
    Rooster,
    Dog,
    Pig,
}

/// All 12 animals in branch order (index 0 = Rat).
pub const ALL_ANIMALS: [ZodiacAnimal; 12] = [
    ZodiacAnimal::Rat,
    ZodiacAnimal::Ox,
    ZodiacAnimal::Tiger,
    ZodiacAnimal::Rabbit,
    ZodiacAnimal::Dragon,
    ZodiacAnimal::Snake,
    ZodiacAnimal::Horse,
    ZodiacAnimal::Goat,
    ZodiacAnimal::Monkey,
    ZodiacAnimal::Rooster,
    ZodiacAnimal::Dog,
    ZodiacAnimal::Pig,
];

const ANIMAL_HANZI: [&str; 12] = [
    "鼠", "牛", "虎", "兔", "龙", "蛇", "马", "羊", "猴", "鸡", "狗", "猪",
];

const ANIMAL_ENGLISH: [&str; 12] = [
    "Rat", "Ox", "Tiger", "Rabbit", "Dragon", "Snake", "Horse", "Goat", "Monkey", "Rooster",
    "Dog", "Pig",
];

impl ZodiacAnimal {
    /// 0-based index, equal to the index of its branch.
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn hanzi(self) -> &'static str {
        ANIMAL_HANZI[self.index() as usize]
    }

    pub const fn name(self) -> &'static str {
        ANIMAL_ENGLISH[self.index() as usize]
    }

    pub const fn label(self, lang: Language) -> &'static str {
        match lang {
            Language::Chinese => self.hanzi(),
            Language::English => self.name(),
        }
    }
}
