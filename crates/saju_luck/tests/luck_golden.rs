//! Luck-cycle goldens layered on the 1984-02-02 Seoul chart.

use saju_chart::{BirthInput, Chart, ChartCalculator, ChartConfig, Gender};
use saju_ganji::{Branch, Pillar, Stem, TenGod};
use saju_jeolgi::SolarTerm;
use saju_luck::{day_luck, decade_luck, month_luck, year_luck};
use saju_time::CivilDateTime;

fn wall(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> CivilDateTime {
    CivilDateTime::new(year, month, day, hour, minute, second).unwrap()
}

fn seoul_calculator() -> ChartCalculator {
    ChartCalculator::new(ChartConfig::default()).unwrap()
}

fn raw_clock_calculator() -> ChartCalculator {
    let config = ChartConfig {
        apply_solar_correction: false,
        ..ChartConfig::default()
    };
    ChartCalculator::new(config).unwrap()
}

fn chart_1984(calc: &mut ChartCalculator) -> Chart {
    let input = BirthInput::solar(1984, 2, 2, 0, 0);
    calc.chart(&input, None).unwrap()
}

/// An eum year stem sends a man backward through the months; the start
/// age reads the gap back to Sohan at three days per year.
#[test]
fn decade_1984_male_walks_backward() {
    let mut calc = seoul_calculator();
    let chart = chart_1984(&mut calc);
    let luck = decade_luck(&mut calc, &chart, Gender::Male, 4).unwrap();

    assert!(!luck.forward);
    assert_eq!(luck.start_age, 9);
    let pillars: Vec<(u32, Pillar)> = luck
        .entries
        .iter()
        .map(|e| (e.start_age, e.pillar))
        .collect();
    assert_eq!(
        pillars,
        vec![
            (9, Pillar::new(Stem::Gap, Branch::Ja)),
            (19, Pillar::new(Stem::Gye, Branch::Hae)),
            (29, Pillar::new(Stem::Im, Branch::Sul)),
            (39, Pillar::new(Stem::Sin, Branch::Yu)),
        ]
    );
}

/// The same chart walks forward for a woman, starting one year on from
/// the short gap to Ipchun.
#[test]
fn decade_1984_female_walks_forward() {
    let mut calc = seoul_calculator();
    let chart = chart_1984(&mut calc);
    let luck = decade_luck(&mut calc, &chart, Gender::Female, 3).unwrap();

    assert!(luck.forward);
    assert_eq!(luck.start_age, 1);
    assert_eq!(luck.entries[0].start_age, 1);
    assert_eq!(luck.entries[0].pillar, Pillar::new(Stem::Byeong, Branch::In));
    assert_eq!(luck.entries[1].start_age, 11);
    assert_eq!(luck.entries[1].pillar, Pillar::new(Stem::Jeong, Branch::Myo));
}

/// A forward walk born after its year's Daeseol finds no later
/// sectional term in the table and starts at zero.
#[test]
fn decade_after_daeseol_starts_at_zero() {
    let mut calc = raw_clock_calculator();
    let input = BirthInput::solar(1984, 12, 25, 12, 0);
    let chart = calc.chart(&input, None).unwrap();
    assert_eq!(chart.pillars.month, Pillar::new(Stem::Byeong, Branch::Ja));

    let luck = decade_luck(&mut calc, &chart, Gender::Male, 2).unwrap();
    assert!(luck.forward);
    assert_eq!(luck.start_age, 0);
    assert_eq!(luck.entries[0].start_age, 0);
    assert_eq!(luck.entries[0].pillar, Pillar::new(Stem::Jeong, Branch::Chuk));
    assert_eq!(luck.entries[1].start_age, 10);
    assert_eq!(luck.entries[1].pillar, Pillar::new(Stem::Mu, Branch::In));
}

#[test]
fn year_luck_1984_runs_from_gapja() {
    let luck = year_luck(1984, 5);
    let pillars: Vec<Pillar> = luck.iter().map(|e| e.pillar).collect();
    assert_eq!(
        pillars,
        vec![
            Pillar::new(Stem::Gap, Branch::Ja),
            Pillar::new(Stem::Eul, Branch::Chuk),
            Pillar::new(Stem::Byeong, Branch::In),
            Pillar::new(Stem::Jeong, Branch::Myo),
            Pillar::new(Stem::Mu, Branch::Jin),
        ]
    );
    assert_eq!(luck[4].year, 1988);
}

/// The 1984 month table: terms, month stems across the Ipchun year
/// flip, and the January and December boundary instants.
#[test]
fn month_luck_1984_walls_and_pillars() {
    let mut calc = raw_clock_calculator();
    let months = month_luck(&mut calc, 1984).unwrap();
    assert_eq!(months.len(), 12);

    let terms: Vec<SolarTerm> = months.iter().map(|e| e.term).collect();
    assert_eq!(
        terms,
        vec![
            SolarTerm::Sohan,
            SolarTerm::Ipchun,
            SolarTerm::Gyeongchip,
            SolarTerm::Cheongmyeong,
            SolarTerm::Ipha,
            SolarTerm::Mangjong,
            SolarTerm::Soseo,
            SolarTerm::Ipchu,
            SolarTerm::Baekro,
            SolarTerm::Hanro,
            SolarTerm::Ipdong,
            SolarTerm::Daeseol,
        ]
    );

    let pillars: Vec<Pillar> = months.iter().map(|e| e.pillar).collect();
    assert_eq!(
        pillars,
        vec![
            Pillar::new(Stem::Eul, Branch::Chuk),
            Pillar::new(Stem::Byeong, Branch::In),
            Pillar::new(Stem::Jeong, Branch::Myo),
            Pillar::new(Stem::Mu, Branch::Jin),
            Pillar::new(Stem::Gi, Branch::Sa),
            Pillar::new(Stem::Gyeong, Branch::O),
            Pillar::new(Stem::Sin, Branch::Mi),
            Pillar::new(Stem::Im, Branch::Sin),
            Pillar::new(Stem::Gye, Branch::Yu),
            Pillar::new(Stem::Gap, Branch::Sul),
            Pillar::new(Stem::Eul, Branch::Hae),
            Pillar::new(Stem::Byeong, Branch::Ja),
        ]
    );

    assert_eq!(months[0].enters, wall(1984, 1, 6, 12, 44, 7));
    assert_eq!(months[0].mid, wall(1984, 1, 21, 6, 7, 22));
    assert_eq!(months[0].ends, wall(1984, 2, 5, 0, 24, 51));
    assert_eq!(months[11].enters, wall(1984, 12, 7, 7, 21, 15));
    assert_eq!(months[11].mid, wall(1984, 12, 22, 1, 16, 55));
    assert_eq!(months[11].ends, wall(1985, 1, 5, 18, 32, 44));
    for pair in months.windows(2) {
        assert_eq!(pair[0].ends, pair[1].enters);
    }
}

/// Three days against the natal Byeong day stem.
#[test]
fn day_luck_relates_early_february_1984() {
    let days = day_luck(
        wall(1984, 2, 1, 0, 0, 0),
        wall(1984, 2, 4, 0, 0, 0),
        Stem::Byeong,
    );
    let got: Vec<(Pillar, TenGod, TenGod)> = days
        .iter()
        .map(|d| (d.pillar, d.stem_god, d.branch_god))
        .collect();
    assert_eq!(
        got,
        vec![
            (
                Pillar::new(Stem::Eul, Branch::Chuk),
                TenGod::Jeongin,
                TenGod::Sanggwan,
            ),
            (
                Pillar::new(Stem::Byeong, Branch::In),
                TenGod::Bigyeon,
                TenGod::Pyeonin,
            ),
            (
                Pillar::new(Stem::Jeong, Branch::Myo),
                TenGod::Geopjae,
                TenGod::Jeongin,
            ),
        ]
    );
}
