//! Decade luck (daeun): walk direction, start age, and the pillar walk.

use saju_astro::SolarLongitudeProvider;
use saju_chart::{Chart, ChartCalculator, ChartError, Gender};
use saju_ganji::{Pillar, Polarity, Stem};

/// One decade pillar and the completed age it takes effect at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DecadeEntry {
    pub start_age: u32,
    pub pillar: Pillar,
}

/// The decade-luck walk of a chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecadeLuck {
    /// True when the walk steps forward through the sexagenary months.
    pub forward: bool,
    /// Completed age at which the first decade takes effect.
    pub start_age: u32,
    pub entries: Vec<DecadeEntry>,
}

/// Walk direction: yang-year men and eum-year women run forward, the
/// other two pairings backward.
pub fn is_forward(year_stem: Stem, gender: Gender) -> bool {
    let yang = year_stem.polarity() == Polarity::Yang;
    match gender {
        Gender::Male => yang,
        Gender::Female => !yang,
    }
}

/// Decade luck of a chart: `count` pillars stepped from the month
/// pillar, starting at an age read off the gap to the adjacent
/// sectional term at three days per year of age.
///
/// Forward walks measure to the next sectional term after birth,
/// backward walks to the last one at or before it. All instants are on
/// the chart's basis.
pub fn decade_luck<P: SolarLongitudeProvider>(
    calc: &mut ChartCalculator<P>,
    chart: &Chart,
    gender: Gender,
    count: usize,
) -> Result<DecadeLuck, ChartError> {
    let forward = is_forward(chart.pillars.year.stem, gender);
    let terms = calc.sectional_on_basis(chart.basis.year)?;
    let basis = chart.basis.to_epoch_seconds_i64();

    let seconds = if forward {
        // A birth after its year's final sectional term has no
        // successor in the 13-entry table; the negative gap then
        // clamps the start age to zero.
        let next = terms
            .iter()
            .map(|ti| ti.wall)
            .find(|w| w.to_epoch_seconds_i64() > basis)
            .or_else(|| terms.last().map(|ti| ti.wall))
            .ok_or(ChartError::Internal("empty sectional table"))?;
        next.to_epoch_seconds_i64() - basis
    } else {
        // The list leads with the prior Daeseol, so an in-year instant
        // always has a predecessor.
        let mut prev = terms
            .first()
            .map(|ti| ti.wall)
            .ok_or(ChartError::Internal("empty sectional table"))?;
        for ti in &terms {
            if ti.wall.to_epoch_seconds_i64() <= basis {
                prev = ti.wall;
            } else {
                break;
            }
        }
        basis - prev.to_epoch_seconds_i64()
    };

    let days = seconds as f64 / 86400.0;
    let start_age = ((days / 3.0 + 0.5).floor() as i64).max(0) as u32;

    let step = if forward { 1 } else { -1 };
    let entries = (1..=count as i64)
        .map(|i| DecadeEntry {
            start_age: start_age + (i as u32 - 1) * 10,
            pillar: chart.pillars.month.offset(step * i),
        })
        .collect();

    Ok(DecadeLuck {
        forward,
        start_age,
        entries,
    })
}
