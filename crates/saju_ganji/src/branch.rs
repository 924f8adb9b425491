//! The twelve earthly branches (jiji).
//!
//! Branches carry hidden stems (jijanggan): two for the cardinal-style
//! branches, three for the rest, with the principal stem listed last. The
//! month cycle runs In through Chuk, offset from the plain cycle that starts
//! at Ja.

use crate::element::Element;
use crate::stem::Stem;

/// The 12 earthly branches in cycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Branch {
    Ja,
    Chuk,
    In,
    Myo,
    Jin,
    Sa,
    O,
    Mi,
    Sin,
    Yu,
    Sul,
    Hae,
}

/// All 12 branches in cycle order (Ja=0 .. Hae=11).
pub const ALL_BRANCHES: [Branch; 12] = [
    Branch::Ja,
    Branch::Chuk,
    Branch::In,
    Branch::Myo,
    Branch::Jin,
    Branch::Sa,
    Branch::O,
    Branch::Mi,
    Branch::Sin,
    Branch::Yu,
    Branch::Sul,
    Branch::Hae,
];

impl Branch {
    /// Hangul name.
    pub const fn korean(self) -> &'static str {
        match self {
            Self::Ja => "자",
            Self::Chuk => "축",
            Self::In => "인",
            Self::Myo => "묘",
            Self::Jin => "진",
            Self::Sa => "사",
            Self::O => "오",
            Self::Mi => "미",
            Self::Sin => "신",
            Self::Yu => "유",
            Self::Sul => "술",
            Self::Hae => "해",
        }
    }

    /// Hanja character.
    pub const fn hanja(self) -> &'static str {
        match self {
            Self::Ja => "子",
            Self::Chuk => "丑",
            Self::In => "寅",
            Self::Myo => "卯",
            Self::Jin => "辰",
            Self::Sa => "巳",
            Self::O => "午",
            Self::Mi => "未",
            Self::Sin => "申",
            Self::Yu => "酉",
            Self::Sul => "戌",
            Self::Hae => "亥",
        }
    }

    /// Revised-romanization name.
    pub const fn romanized(self) -> &'static str {
        match self {
            Self::Ja => "Ja",
            Self::Chuk => "Chuk",
            Self::In => "In",
            Self::Myo => "Myo",
            Self::Jin => "Jin",
            Self::Sa => "Sa",
            Self::O => "O",
            Self::Mi => "Mi",
            Self::Sin => "Sin",
            Self::Yu => "Yu",
            Self::Sul => "Sul",
            Self::Hae => "Hae",
        }
    }

    /// 0-based cycle index (Ja=0 .. Hae=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Ja => 0,
            Self::Chuk => 1,
            Self::In => 2,
            Self::Myo => 3,
            Self::Jin => 4,
            Self::Sa => 5,
            Self::O => 6,
            Self::Mi => 7,
            Self::Sin => 8,
            Self::Yu => 9,
            Self::Sul => 10,
            Self::Hae => 11,
        }
    }

    /// Principal hidden stem. Note Ja maps to Gye and O to Jeong, the eum
    /// stem of the element in both cases.
    pub const fn main_stem(self) -> Stem {
        match self {
            Self::Ja => Stem::Gye,
            Self::Chuk => Stem::Gi,
            Self::In => Stem::Gap,
            Self::Myo => Stem::Eul,
            Self::Jin => Stem::Mu,
            Self::Sa => Stem::Byeong,
            Self::O => Stem::Jeong,
            Self::Mi => Stem::Gi,
            Self::Sin => Stem::Gyeong,
            Self::Yu => Stem::Sin,
            Self::Sul => Stem::Mu,
            Self::Hae => Stem::Im,
        }
    }

    /// Hidden stems in traditional order, principal stem last.
    pub const fn hidden_stems(self) -> &'static [Stem] {
        match self {
            Self::Ja => &[Stem::Im, Stem::Gye],
            Self::Chuk => &[Stem::Gye, Stem::Sin, Stem::Gi],
            Self::In => &[Stem::Mu, Stem::Byeong, Stem::Gap],
            Self::Myo => &[Stem::Gap, Stem::Eul],
            Self::Jin => &[Stem::Eul, Stem::Gye, Stem::Mu],
            Self::Sa => &[Stem::Mu, Stem::Gyeong, Stem::Byeong],
            Self::O => &[Stem::Byeong, Stem::Gi, Stem::Jeong],
            Self::Mi => &[Stem::Jeong, Stem::Eul, Stem::Gi],
            Self::Sin => &[Stem::Mu, Stem::Im, Stem::Gyeong],
            Self::Yu => &[Stem::Gyeong, Stem::Sin],
            Self::Sul => &[Stem::Sin, Stem::Jeong, Stem::Mu],
            Self::Hae => &[Stem::Mu, Stem::Gap, Stem::Im],
        }
    }

    /// Element of the three-harmony (samhap) triad this branch belongs to.
    pub const fn samhap_element(self) -> Element {
        match self {
            Self::In | Self::O | Self::Sul => Element::Fire,
            Self::Hae | Self::Myo | Self::Mi => Element::Wood,
            Self::Sin | Self::Ja | Self::Jin => Element::Water,
            Self::Sa | Self::Yu | Self::Chuk => Element::Metal,
        }
    }

    /// The other two branches of this branch's samhap triad.
    pub const fn samhap_partners(self) -> [Branch; 2] {
        match self {
            Self::In => [Self::O, Self::Sul],
            Self::O => [Self::In, Self::Sul],
            Self::Sul => [Self::In, Self::O],
            Self::Hae => [Self::Myo, Self::Mi],
            Self::Myo => [Self::Hae, Self::Mi],
            Self::Mi => [Self::Hae, Self::Myo],
            Self::Sin => [Self::Ja, Self::Jin],
            Self::Ja => [Self::Sin, Self::Jin],
            Self::Jin => [Self::Sin, Self::Ja],
            Self::Sa => [Self::Yu, Self::Chuk],
            Self::Yu => [Self::Sa, Self::Chuk],
            Self::Chuk => [Self::Sa, Self::Yu],
        }
    }

    /// Position in the month cycle that runs In=0 through Chuk=11.
    pub const fn month_order(self) -> u8 {
        (self.index() + 10) % 12
    }

    /// Branch at a signed cycle offset from this one.
    pub fn offset(self, n: i64) -> Branch {
        let idx = (self.index() as i64 + n).rem_euclid(12);
        ALL_BRANCHES[idx as usize]
    }
}
