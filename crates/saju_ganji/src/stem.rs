//! The ten heavenly stems (cheongan).
//!
//! Stems pair an element with a polarity: Gap is yang wood, Eul is eum wood,
//! and so on through Gye, eum water. Their cycle of ten combines with the
//! twelve branches into the sexagenary cycle.

use crate::element::{Element, Polarity};

/// The 10 heavenly stems in cycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stem {
    Gap,
    Eul,
    Byeong,
    Jeong,
    Mu,
    Gi,
    Gyeong,
    Sin,
    Im,
    Gye,
}

/// All 10 stems in cycle order (Gap=0 .. Gye=9).
pub const ALL_STEMS: [Stem; 10] = [
    Stem::Gap,
    Stem::Eul,
    Stem::Byeong,
    Stem::Jeong,
    Stem::Mu,
    Stem::Gi,
    Stem::Gyeong,
    Stem::Sin,
    Stem::Im,
    Stem::Gye,
];

impl Stem {
    /// Hangul name.
    pub const fn korean(self) -> &'static str {
        match self {
            Self::Gap => "갑",
            Self::Eul => "을",
            Self::Byeong => "병",
            Self::Jeong => "정",
            Self::Mu => "무",
            Self::Gi => "기",
            Self::Gyeong => "경",
            Self::Sin => "신",
            Self::Im => "임",
            Self::Gye => "계",
        }
    }

    /// Hanja character.
    pub const fn hanja(self) -> &'static str {
        match self {
            Self::Gap => "甲",
            Self::Eul => "乙",
            Self::Byeong => "丙",
            Self::Jeong => "丁",
            Self::Mu => "戊",
            Self::Gi => "己",
            Self::Gyeong => "庚",
            Self::Sin => "辛",
            Self::Im => "壬",
            Self::Gye => "癸",
        }
    }

    /// Revised-romanization name.
    pub const fn romanized(self) -> &'static str {
        match self {
            Self::Gap => "Gap",
            Self::Eul => "Eul",
            Self::Byeong => "Byeong",
            Self::Jeong => "Jeong",
            Self::Mu => "Mu",
            Self::Gi => "Gi",
            Self::Gyeong => "Gyeong",
            Self::Sin => "Sin",
            Self::Im => "Im",
            Self::Gye => "Gye",
        }
    }

    /// 0-based cycle index (Gap=0 .. Gye=9).
    pub const fn index(self) -> u8 {
        match self {
            Self::Gap => 0,
            Self::Eul => 1,
            Self::Byeong => 2,
            Self::Jeong => 3,
            Self::Mu => 4,
            Self::Gi => 5,
            Self::Gyeong => 6,
            Self::Sin => 7,
            Self::Im => 8,
            Self::Gye => 9,
        }
    }

    /// Element of the stem. Pairs share an element: Gap/Eul wood through
    /// Im/Gye water.
    pub const fn element(self) -> Element {
        match self {
            Self::Gap | Self::Eul => Element::Wood,
            Self::Byeong | Self::Jeong => Element::Fire,
            Self::Mu | Self::Gi => Element::Earth,
            Self::Gyeong | Self::Sin => Element::Metal,
            Self::Im | Self::Gye => Element::Water,
        }
    }

    /// Polarity: even cycle indices are yang, odd are eum.
    pub const fn polarity(self) -> Polarity {
        match self {
            Self::Gap | Self::Byeong | Self::Mu | Self::Gyeong | Self::Im => Polarity::Yang,
            Self::Eul | Self::Jeong | Self::Gi | Self::Sin | Self::Gye => Polarity::Eum,
        }
    }

    /// Whether the stem is yang.
    pub const fn is_yang(self) -> bool {
        matches!(self.polarity(), Polarity::Yang)
    }

    /// Stem at a signed cycle offset from this one.
    pub fn offset(self, n: i64) -> Stem {
        let idx = (self.index() as i64 + n).rem_euclid(10);
        ALL_STEMS[idx as usize]
    }

    /// The yang or eum stem of an element (yang is the first of the pair).
    pub const fn of(element: Element, polarity: Polarity) -> Stem {
        match (element, polarity) {
            (Element::Wood, Polarity::Yang) => Self::Gap,
            (Element::Wood, Polarity::Eum) => Self::Eul,
            (Element::Fire, Polarity::Yang) => Self::Byeong,
            (Element::Fire, Polarity::Eum) => Self::Jeong,
            (Element::Earth, Polarity::Yang) => Self::Mu,
            (Element::Earth, Polarity::Eum) => Self::Gi,
            (Element::Metal, Polarity::Yang) => Self::Gyeong,
            (Element::Metal, Polarity::Eum) => Self::Sin,
            (Element::Water, Polarity::Yang) => Self::Im,
            (Element::Water, Polarity::Eum) => Self::Gye,
        }
    }
}
