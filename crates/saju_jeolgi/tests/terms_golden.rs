//! Golden term instants for selected years.
//!
//! Expected values come from the Meeus series sun with the statutory Korean
//! wall clock applied, so the 1955 entries reflect UTC+08:30 and the 1984
//! table embeds no daylight saving (the 1987-1988 tables would).

use saju_jeolgi::{SolarTerm, TermCalculator};
use saju_time::CivilDateTime;

fn wall(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> CivilDateTime {
    CivilDateTime::new(year, month, day, hour, minute, second).unwrap()
}

/// All twelve sectional instants of 1984 plus the prior Daeseol.
#[test]
fn sectional_table_1984() {
    let mut calc = TermCalculator::new();
    let table = calc.sectional(1984).unwrap();

    assert_eq!(table.previous_daeseol, wall(1983, 12, 8, 1, 32, 43));

    let expected = [
        (SolarTerm::Ipchun, wall(1984, 2, 5, 0, 24, 51)),
        (SolarTerm::Gyeongchip, wall(1984, 3, 5, 18, 31, 6)),
        (SolarTerm::Cheongmyeong, wall(1984, 4, 4, 23, 27, 0)),
        (SolarTerm::Ipha, wall(1984, 5, 5, 16, 53, 13)),
        (SolarTerm::Mangjong, wall(1984, 6, 5, 21, 8, 43)),
        (SolarTerm::Soseo, wall(1984, 7, 7, 7, 26, 57)),
        (SolarTerm::Ipchu, wall(1984, 8, 7, 17, 13, 7)),
        (SolarTerm::Baekro, wall(1984, 9, 7, 20, 2, 6)),
        (SolarTerm::Hanro, wall(1984, 10, 8, 11, 32, 41)),
        (SolarTerm::Ipdong, wall(1984, 11, 7, 14, 35, 49)),
        (SolarTerm::Daeseol, wall(1984, 12, 7, 7, 21, 15)),
        (SolarTerm::Sohan, wall(1984, 1, 6, 12, 44, 7)),
    ];
    for (term, instant) in expected {
        assert_eq!(table.instant(term), Some(instant), "{}", term.romanized());
    }
}

/// The mid terms of 1984 from the full table.
#[test]
fn full_table_1984_mid_terms() {
    let mut calc = TermCalculator::new();
    let table = calc.full(1984).unwrap();

    let expected = [
        (SolarTerm::Usu, wall(1984, 2, 19, 20, 20, 10)),
        (SolarTerm::Chunbun, wall(1984, 3, 20, 19, 27, 3)),
        (SolarTerm::Gogu, wall(1984, 4, 20, 6, 37, 48)),
        (SolarTerm::Soman, wall(1984, 5, 21, 5, 53, 59)),
        (SolarTerm::Haji, wall(1984, 6, 21, 13, 55, 55)),
        (SolarTerm::Daeseo, wall(1984, 7, 23, 0, 49, 49)),
        (SolarTerm::Cheoseo, wall(1984, 8, 23, 7, 50, 5)),
        (SolarTerm::Chubun, wall(1984, 9, 23, 5, 21, 23)),
        (SolarTerm::Sanggang, wall(1984, 10, 23, 14, 33, 54)),
        (SolarTerm::Soseol, wall(1984, 11, 22, 12, 0, 50)),
        (SolarTerm::Dongji, wall(1984, 12, 22, 1, 16, 55)),
        (SolarTerm::Daehan, wall(1984, 1, 21, 6, 7, 22)),
    ];
    for (term, instant) in expected {
        assert_eq!(table.instant(term), instant, "{}", term.romanized());
    }
}

/// The full 24-term table of 2024.
#[test]
fn full_table_2024() {
    let mut calc = TermCalculator::new();
    let table = calc.full(2024).unwrap();

    let expected = [
        (SolarTerm::Ipchun, wall(2024, 2, 4, 17, 20, 11)),
        (SolarTerm::Usu, wall(2024, 2, 19, 13, 10, 38)),
        (SolarTerm::Gyeongchip, wall(2024, 3, 5, 11, 14, 58)),
        (SolarTerm::Chunbun, wall(2024, 3, 20, 12, 3, 2)),
        (SolarTerm::Cheongmyeong, wall(2024, 4, 4, 15, 54, 18)),
        (SolarTerm::Gogu, wall(2024, 4, 19, 22, 56, 10)),
        (SolarTerm::Ipha, wall(2024, 5, 5, 9, 3, 4)),
        (SolarTerm::Soman, wall(2024, 5, 20, 21, 56, 18)),
        (SolarTerm::Mangjong, wall(2024, 6, 5, 13, 5, 2)),
        (SolarTerm::Haji, wall(2024, 6, 21, 5, 48, 14)),
        (SolarTerm::Soseo, wall(2024, 7, 6, 23, 17, 35)),
        (SolarTerm::Daeseo, wall(2024, 7, 22, 16, 41, 11)),
        (SolarTerm::Ipchu, wall(2024, 8, 7, 9, 7, 33)),
        (SolarTerm::Cheoseo, wall(2024, 8, 22, 23, 49, 43)),
        (SolarTerm::Baekro, wall(2024, 9, 7, 12, 8, 38)),
        (SolarTerm::Chubun, wall(2024, 9, 22, 21, 36, 1)),
        (SolarTerm::Hanro, wall(2024, 10, 8, 3, 56, 1)),
        (SolarTerm::Sanggang, wall(2024, 10, 23, 7, 5, 57)),
        (SolarTerm::Ipdong, wall(2024, 11, 7, 7, 15, 59)),
        (SolarTerm::Soseol, wall(2024, 11, 22, 4, 48, 2)),
        (SolarTerm::Daeseol, wall(2024, 12, 7, 0, 13, 54)),
        (SolarTerm::Dongji, wall(2024, 12, 21, 18, 13, 9)),
        (SolarTerm::Sohan, wall(2024, 1, 6, 5, 43, 6)),
        (SolarTerm::Daehan, wall(2024, 1, 20, 23, 5, 36)),
    ];
    for (term, instant) in expected {
        assert_eq!(table.instant(term), instant, "{}", term.romanized());
    }
}

/// 1955 runs on the UTC+08:30 standard; the table reflects that clock.
#[test]
fn sectional_table_1955_half_hour_standard() {
    let mut calc = TermCalculator::new();
    let table = calc.sectional(1955).unwrap();

    assert_eq!(table.previous_daeseol, wall(1954, 12, 7, 23, 54, 57));

    let expected = [
        (SolarTerm::Ipchun, wall(1955, 2, 4, 22, 46, 12)),
        (SolarTerm::Gyeongchip, wall(1955, 3, 6, 17, 0, 37)),
        (SolarTerm::Cheongmyeong, wall(1955, 4, 5, 22, 8, 18)),
        (SolarTerm::Ipha, wall(1955, 5, 6, 16, 46, 51)),
        (SolarTerm::Mangjong, wall(1955, 6, 6, 21, 11, 52)),
        (SolarTerm::Soseo, wall(1955, 7, 8, 7, 34, 3)),
        (SolarTerm::Ipchu, wall(1955, 8, 8, 17, 17, 26)),
        (SolarTerm::Baekro, wall(1955, 9, 8, 19, 57, 48)),
        (SolarTerm::Hanro, wall(1955, 10, 9, 10, 16, 30)),
        (SolarTerm::Ipdong, wall(1955, 11, 8, 13, 7, 48)),
        (SolarTerm::Daeseol, wall(1955, 12, 8, 5, 44, 32)),
        (SolarTerm::Sohan, wall(1955, 1, 6, 11, 2, 51)),
    ];
    for (term, instant) in expected {
        assert_eq!(table.instant(term), Some(instant), "{}", term.romanized());
    }
}

/// 1987 sectional instants; the summer entries fall inside daylight saving.
#[test]
fn sectional_table_1987_daylight_saving() {
    let mut calc = TermCalculator::new();
    let table = calc.sectional(1987).unwrap();

    assert_eq!(table.previous_daeseol, wall(1986, 12, 7, 18, 56, 40));

    let expected = [
        (SolarTerm::Ipchun, wall(1987, 2, 4, 17, 48, 38)),
        (SolarTerm::Gyeongchip, wall(1987, 3, 6, 11, 53, 51)),
        (SolarTerm::Cheongmyeong, wall(1987, 4, 5, 16, 48, 19)),
        (SolarTerm::Ipha, wall(1987, 5, 6, 10, 13, 1)),
        (SolarTerm::Mangjong, wall(1987, 6, 6, 15, 27, 20)),
        (SolarTerm::Soseo, wall(1987, 7, 8, 1, 45, 2)),
        (SolarTerm::Ipchu, wall(1987, 8, 8, 11, 31, 24)),
        (SolarTerm::Baekro, wall(1987, 9, 8, 14, 21, 16)),
        (SolarTerm::Hanro, wall(1987, 10, 9, 5, 53, 7)),
        (SolarTerm::Ipdong, wall(1987, 11, 8, 7, 57, 30)),
        (SolarTerm::Daeseol, wall(1987, 12, 8, 0, 43, 52)),
        (SolarTerm::Sohan, wall(1987, 1, 6, 6, 8, 20)),
    ];
    for (term, instant) in expected {
        assert_eq!(table.instant(term), Some(instant), "{}", term.romanized());
    }
}

/// Sohan of 1985 lands on January 5 evening.
#[test]
fn sohan_1985() {
    let mut calc = TermCalculator::new();
    let table = calc.sectional(1985).unwrap();
    assert_eq!(
        table.instant(SolarTerm::Sohan),
        Some(wall(1985, 1, 5, 18, 32, 44))
    );
}

/// Neighbour lookup brackets a night-time instant in early February 1984.
#[test]
fn nearby_brackets_early_february() {
    let mut calc = TermCalculator::new();
    let (prev, next) = calc.nearby(wall(1984, 2, 1, 23, 14, 13)).unwrap();

    let prev = prev.unwrap();
    assert_eq!(prev.term, SolarTerm::Daehan);
    assert_eq!(prev.wall, wall(1984, 1, 21, 6, 7, 22));

    let next = next.unwrap();
    assert_eq!(next.term, SolarTerm::Ipchun);
    assert_eq!(next.wall, wall(1984, 2, 5, 0, 24, 51));
}

/// An instant exactly on a term counts as having passed it.
#[test]
fn nearby_at_exact_instant_is_inclusive() {
    let mut calc = TermCalculator::new();
    let (prev, next) = calc.nearby(wall(2024, 1, 6, 5, 43, 6)).unwrap();

    let prev = prev.unwrap();
    assert_eq!(prev.term, SolarTerm::Sohan);
    assert_eq!(prev.wall, wall(2024, 1, 6, 5, 43, 6));

    let next = next.unwrap();
    assert_eq!(next.term, SolarTerm::Daehan);
    assert_eq!(next.wall, wall(2024, 1, 20, 23, 5, 36));
}
