//! Day luck (irun): day pillars over a range, related to a natal stem.

use saju_ganji::{Pillar, Stem, TenGod, day_pillar, ten_god_for_branch, ten_god_for_stem};
use saju_time::{CivilDate, CivilDateTime};

/// One day of day luck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DayLuckEntry {
    pub date: CivilDate,
    pub pillar: Pillar,
    /// Ten god of the day stem against the natal day stem.
    pub stem_god: TenGod,
    /// Ten god of the day branch against the natal day stem.
    pub branch_god: TenGod,
}

/// Day-luck entries for every civil day whose noon falls in
/// `[start, end)`. Days are sampled at noon so the 23:00 rollover
/// never pulls a date into the next pillar.
pub fn day_luck(
    start: CivilDateTime,
    end: CivilDateTime,
    natal_day_stem: Stem,
) -> Vec<DayLuckEntry> {
    let mut cur = CivilDateTime::from_date_time(start.date(), 12, 0, 0);
    if cur < start {
        cur = cur.add_days(1);
    }
    let mut out = Vec::new();
    while cur < end {
        let pillar = day_pillar(cur);
        out.push(DayLuckEntry {
            date: cur.date(),
            pillar,
            stem_god: ten_god_for_stem(natal_day_stem, pillar.stem),
            branch_god: ten_god_for_branch(natal_day_stem, pillar.branch),
        });
        cur = cur.add_days(1);
    }
    out
}

#[cfg(test)]
mod tests {
    use saju_ganji::Branch;

    use super::*;

    fn at(year: i32, month: u32, day: u32, hour: u32) -> CivilDateTime {
        CivilDateTime::new(year, month, day, hour, 0, 0).unwrap()
    }

    #[test]
    fn covers_days_whose_noon_is_in_range() {
        let days = day_luck(at(1984, 2, 1, 0), at(1984, 2, 4, 0), Stem::Byeong);
        assert_eq!(days.len(), 3);
        assert_eq!(days[0].date, CivilDate::from_ymd_unchecked(1984, 2, 1));
        assert_eq!(days[2].date, CivilDate::from_ymd_unchecked(1984, 2, 3));
    }

    #[test]
    fn afternoon_start_skips_the_first_date() {
        let days = day_luck(at(1984, 2, 1, 14), at(1984, 2, 4, 0), Stem::Byeong);
        assert_eq!(days.len(), 2);
        assert_eq!(days[0].date, CivilDate::from_ymd_unchecked(1984, 2, 2));
    }

    #[test]
    fn empty_range_yields_nothing() {
        assert!(day_luck(at(1984, 2, 1, 13), at(1984, 2, 1, 14), Stem::Byeong).is_empty());
    }

    #[test]
    fn relates_each_day_to_the_natal_stem() {
        let days = day_luck(at(1984, 2, 2, 0), at(1984, 2, 3, 0), Stem::Byeong);
        assert_eq!(days[0].pillar, Pillar::new(Stem::Byeong, Branch::In));
        assert_eq!(days[0].stem_god, TenGod::Bigyeon);
        assert_eq!(days[0].branch_god, TenGod::Pyeonin);
    }
}
