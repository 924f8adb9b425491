//! Month luck (worun): the twelve sectional months of a calendar year.

use saju_astro::SolarLongitudeProvider;
use saju_chart::{ChartCalculator, ChartError};
use saju_ganji::Pillar;
use saju_jeolgi::{SolarTerm, terms_for_month};
use saju_time::CivilDateTime;

/// One sectional month of a calendar year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MonthLuckEntry {
    /// Calendar month the opening term falls in.
    pub month: u32,
    pub pillar: Pillar,
    /// Sectional term opening the month.
    pub term: SolarTerm,
    /// Wall instant the month enters.
    pub enters: CivilDateTime,
    /// Wall instant of the month's mid term.
    pub mid: CivilDateTime,
    /// Wall instant the next month enters.
    pub ends: CivilDateTime,
}

/// The twelve month-luck entries of a calendar year in calendar order,
/// the Sohan month of January first.
///
/// Boundary instants are reported on the wall clock; the pillar of
/// each month is read just inside its boundary on the calculator's
/// basis, so month stems stay consistent with chart pillars and the
/// year flip at Ipchun.
pub fn month_luck<P: SolarLongitudeProvider>(
    calc: &mut ChartCalculator<P>,
    year: i32,
) -> Result<Vec<MonthLuckEntry>, ChartError> {
    let mut opens = *calc.terms().sectional(year)?.entries();
    opens.sort_by_key(|&(_, wall)| wall);
    let next_start = calc
        .terms()
        .sectional(year + 1)?
        .instant(SolarTerm::Sohan)
        .ok_or(ChartError::Internal("sectional table lost Sohan"))?;
    let mids = *calc.terms().full(year)?.entries();

    let mut out = Vec::with_capacity(opens.len());
    for (pos, &(term, enters)) in opens.iter().enumerate() {
        let at = calc.basis(enters).add_seconds(1);
        let pillar = calc.four_pillars_on_basis(at)?.month;
        let (_, mid_term) = terms_for_month(term.month_branch());
        let ends = match opens.get(pos + 1) {
            Some(&(_, next)) => next,
            None => next_start,
        };
        out.push(MonthLuckEntry {
            month: enters.month,
            pillar,
            term,
            enters,
            mid: mids[mid_term.index() as usize].1,
            ends,
        });
    }
    Ok(out)
}
