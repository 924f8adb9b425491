//! Year luck (seun) over calendar years, and completed ages.

use saju_ganji::{Pillar, year_pillar};
use saju_time::CivilDate;

/// One calendar year of year luck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct YearLuckEntry {
    pub year: i32,
    pub pillar: Pillar,
}

/// Year-luck pillars for `count` calendar years from `start_year`.
///
/// Entries are keyed by calendar year; an instant before Ipchun still
/// belongs sexagenarily to the previous entry.
pub fn year_luck(start_year: i32, count: usize) -> Vec<YearLuckEntry> {
    (0..count)
        .map(|i| {
            let year = start_year + i as i32;
            YearLuckEntry {
                year,
                pillar: year_pillar(year),
            }
        })
        .collect()
}

/// Completed age (man-nai) on a date: full years lived since birth,
/// one less while the year's birthday is still ahead.
pub fn completed_age(birth: CivilDate, on: CivilDate) -> i32 {
    let mut age = on.year - birth.year;
    if (on.month, on.day) < (birth.month, birth.day) {
        age -= 1;
    }
    age
}

#[cfg(test)]
mod tests {
    use saju_ganji::{Branch, Stem};

    use super::*;

    #[test]
    fn years_step_through_the_cycle() {
        let luck = year_luck(1984, 3);
        assert_eq!(luck[0].year, 1984);
        assert_eq!(luck[0].pillar, Pillar::new(Stem::Gap, Branch::Ja));
        assert_eq!(luck[1].pillar, Pillar::new(Stem::Eul, Branch::Chuk));
        assert_eq!(luck[2].pillar, Pillar::new(Stem::Byeong, Branch::In));
    }

    #[test]
    fn age_turns_on_the_birthday() {
        let birth = CivilDate::from_ymd_unchecked(1984, 2, 2);
        let eve = CivilDate::from_ymd_unchecked(2024, 2, 1);
        let day = CivilDate::from_ymd_unchecked(2024, 2, 2);
        assert_eq!(completed_age(birth, eve), 39);
        assert_eq!(completed_age(birth, day), 40);
    }

    #[test]
    fn age_is_zero_through_the_first_year() {
        let birth = CivilDate::from_ymd_unchecked(1984, 2, 2);
        let winter = CivilDate::from_ymd_unchecked(1984, 12, 31);
        assert_eq!(completed_age(birth, winter), 0);
    }
}
