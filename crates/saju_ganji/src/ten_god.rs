//! The ten gods (sipseong): the relation of any stem to the day stem.
//!
//! Five element relations times two polarity matches give the ten. Branches
//! relate through their principal hidden stem.

use crate::branch::Branch;
use crate::stem::Stem;

/// The ten gods in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TenGod {
    /// Same element, same polarity.
    Bigyeon,
    /// Same element, opposite polarity.
    Geopjae,
    /// Element the day stem produces, same polarity.
    Siksin,
    /// Element the day stem produces, opposite polarity.
    Sanggwan,
    /// Element the day stem controls, same polarity.
    Pyeonjae,
    /// Element the day stem controls, opposite polarity.
    Jeongjae,
    /// Element controlling the day stem, same polarity.
    Pyeongwan,
    /// Element controlling the day stem, opposite polarity.
    Jeonggwan,
    /// Element producing the day stem, same polarity.
    Pyeonin,
    /// Element producing the day stem, opposite polarity.
    Jeongin,
}

/// All ten gods in canonical order.
pub const ALL_TEN_GODS: [TenGod; 10] = [
    TenGod::Bigyeon,
    TenGod::Geopjae,
    TenGod::Siksin,
    TenGod::Sanggwan,
    TenGod::Pyeonjae,
    TenGod::Jeongjae,
    TenGod::Pyeongwan,
    TenGod::Jeonggwan,
    TenGod::Pyeonin,
    TenGod::Jeongin,
];

impl TenGod {
    /// Hangul name.
    pub const fn korean(self) -> &'static str {
        match self {
            Self::Bigyeon => "비견",
            Self::Geopjae => "겁재",
            Self::Siksin => "식신",
            Self::Sanggwan => "상관",
            Self::Pyeonjae => "편재",
            Self::Jeongjae => "정재",
            Self::Pyeongwan => "편관",
            Self::Jeonggwan => "정관",
            Self::Pyeonin => "편인",
            Self::Jeongin => "정인",
        }
    }
}

/// Ten-god relation of `other` to the day stem.
pub fn ten_god_for_stem(day_stem: Stem, other: Stem) -> TenGod {
    let same_pol = day_stem.polarity() == other.polarity();
    let d = day_stem.element();
    let o = other.element();
    if o == d {
        return if same_pol { TenGod::Bigyeon } else { TenGod::Geopjae };
    }
    if o == d.produces() {
        return if same_pol { TenGod::Siksin } else { TenGod::Sanggwan };
    }
    if o == d.controls() {
        return if same_pol { TenGod::Pyeonjae } else { TenGod::Jeongjae };
    }
    if o == d.controlled_by() {
        return if same_pol { TenGod::Pyeongwan } else { TenGod::Jeonggwan };
    }
    // Only the producing relation remains.
    if same_pol { TenGod::Pyeonin } else { TenGod::Jeongin }
}

/// Ten-god relation of a branch through its principal stem.
pub fn ten_god_for_branch(day_stem: Stem, branch: Branch) -> TenGod {
    ten_god_for_stem(day_stem, branch.main_stem())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stem::ALL_STEMS;

    /// A Gap day maps the ten stems onto the ten gods in canonical order.
    #[test]
    fn gap_day_row_is_canonical_order() {
        for (stem, god) in ALL_STEMS.iter().zip(ALL_TEN_GODS) {
            assert_eq!(ten_god_for_stem(Stem::Gap, *stem), god, "{}", stem.romanized());
        }
    }

    /// Spot row for a Byeong day stem.
    #[test]
    fn byeong_day_row() {
        assert_eq!(ten_god_for_stem(Stem::Byeong, Stem::Eul), TenGod::Jeongin);
        assert_eq!(ten_god_for_stem(Stem::Byeong, Stem::Byeong), TenGod::Bigyeon);
        assert_eq!(ten_god_for_stem(Stem::Byeong, Stem::Jeong), TenGod::Geopjae);
        assert_eq!(ten_god_for_stem(Stem::Byeong, Stem::Mu), TenGod::Siksin);
        assert_eq!(ten_god_for_stem(Stem::Byeong, Stem::Im), TenGod::Pyeongwan);
    }

    /// Branch relations run through the principal stem, so Ja and O flip
    /// polarity against their element's yang stem.
    #[test]
    fn branch_relations_use_principal_stem() {
        assert_eq!(ten_god_for_branch(Stem::Byeong, Branch::Mi), TenGod::Sanggwan);
        assert_eq!(ten_god_for_branch(Stem::Byeong, Branch::Sin), TenGod::Pyeonjae);
        assert_eq!(ten_god_for_branch(Stem::Byeong, Branch::Yu), TenGod::Jeongjae);
        assert_eq!(ten_god_for_branch(Stem::Byeong, Branch::Sul), TenGod::Siksin);
        assert_eq!(ten_god_for_branch(Stem::Im, Branch::O), TenGod::Jeongjae);
        assert_eq!(ten_god_for_branch(Stem::Im, Branch::Ja), TenGod::Geopjae);
    }

    /// Every (day, other) pair lands on exactly one god; each row uses all
    /// ten gods once.
    #[test]
    fn every_row_is_a_permutation() {
        for day in ALL_STEMS {
            let mut seen = std::collections::HashSet::new();
            for other in ALL_STEMS {
                assert!(seen.insert(ten_god_for_stem(day, other)));
            }
            assert_eq!(seen.len(), 10, "{}", day.romanized());
        }
    }
}
