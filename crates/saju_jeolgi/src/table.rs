//! Computed term tables for calendar years, in Korean wall-clock time.
//!
//! Every instant is searched in UTC and converted to the statutory wall
//! clock of its own date, so tables straddling a standard-time or
//! daylight-saving change stay internally consistent. Tables are cached per
//! year; a sectional table carries the previous December's Daeseol so the
//! thirteen entries cover a full month cycle.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use saju_astro::{ApparentSun, AstroError, CrossingConfig, SolarLongitudeProvider, find_crossing};
use saju_time::{CivilDateTime, wall_clock_utc_offset_min};

use crate::term::{ALL_TERMS, SECTIONAL_TERMS, SolarTerm};

/// A term paired with its wall-clock instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TermInstant {
    pub term: SolarTerm,
    pub wall: CivilDateTime,
}

/// The 12 sectional terms of a year plus the previous December's Daeseol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionalTable {
    pub year: i32,
    /// Daeseol of December of `year - 1`; the month boundary any January
    /// instant before Sohan falls under.
    pub previous_daeseol: CivilDateTime,
    entries: [(SolarTerm, CivilDateTime); 12],
}

impl SectionalTable {
    /// Wall-clock instant of a sectional term, or `None` for mid terms.
    pub fn instant(&self, term: SolarTerm) -> Option<CivilDateTime> {
        self.entries.iter().find(|(t, _)| *t == term).map(|&(_, w)| w)
    }

    /// The 12 sectional entries in annual order (Ipchun first).
    pub fn entries(&self) -> &[(SolarTerm, CivilDateTime); 12] {
        &self.entries
    }
}

/// All 24 terms of a year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FullTable {
    pub year: i32,
    entries: [(SolarTerm, CivilDateTime); 24],
}

impl FullTable {
    /// Wall-clock instant of a term.
    pub fn instant(&self, term: SolarTerm) -> CivilDateTime {
        self.entries[term.index() as usize].1
    }

    /// The 24 entries in annual order (Ipchun first).
    pub fn entries(&self) -> &[(SolarTerm, CivilDateTime); 24] {
        &self.entries
    }
}

/// Computes and caches term tables over a solar longitude source.
#[derive(Debug)]
pub struct TermCalculator<P: SolarLongitudeProvider = ApparentSun> {
    provider: P,
    config: CrossingConfig,
    sectional: HashMap<i32, SectionalTable>,
    full: HashMap<i32, FullTable>,
}

impl TermCalculator<ApparentSun> {
    /// Calculator over the Meeus series sun with default search settings.
    pub fn new() -> Self {
        Self::with_provider(ApparentSun, CrossingConfig::default())
    }
}

impl Default for TermCalculator<ApparentSun> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: SolarLongitudeProvider> TermCalculator<P> {
    pub fn with_provider(provider: P, config: CrossingConfig) -> Self {
        Self {
            provider,
            config,
            sectional: HashMap::new(),
            full: HashMap::new(),
        }
    }

    /// Sectional table for a year, cached.
    pub fn sectional(&mut self, year: i32) -> Result<&SectionalTable, AstroError> {
        match self.sectional.entry(year) {
            Entry::Occupied(e) => Ok(e.into_mut()),
            Entry::Vacant(e) => {
                let table = build_sectional(&self.provider, &self.config, year)?;
                Ok(e.insert(table))
            }
        }
    }

    /// Full 24-term table for a year, cached.
    pub fn full(&mut self, year: i32) -> Result<&FullTable, AstroError> {
        match self.full.entry(year) {
            Entry::Occupied(e) => Ok(e.into_mut()),
            Entry::Vacant(e) => {
                let table = build_full(&self.provider, &self.config, year)?;
                Ok(e.insert(table))
            }
        }
    }

    /// Previous and next term around a wall-clock instant, scanning the
    /// full tables of the surrounding three years.
    pub fn nearby(
        &mut self,
        at: CivilDateTime,
    ) -> Result<(Option<TermInstant>, Option<TermInstant>), AstroError> {
        let mut all: Vec<(SolarTerm, CivilDateTime)> = Vec::with_capacity(72);
        for year in [at.year - 1, at.year, at.year + 1] {
            all.extend(self.full(year)?.entries().iter().copied());
        }
        all.sort_by_key(|&(_, wall)| wall);

        let mut prev = None;
        let mut next = None;
        for (term, wall) in all {
            if wall <= at {
                prev = Some(TermInstant { term, wall });
            } else {
                next = Some(TermInstant { term, wall });
                break;
            }
        }
        Ok((prev, next))
    }
}

/// Search one term of a year and express it on the wall clock of its date.
fn term_wall<P: SolarLongitudeProvider>(
    provider: &P,
    config: &CrossingConfig,
    year: i32,
    term: SolarTerm,
) -> Result<CivilDateTime, AstroError> {
    let (month, day) = term.seed_month_day();
    let seed_wall = CivilDateTime::from_parts_unchecked(year, month, day, 9, 0, 0);
    let seed_offset = wall_clock_utc_offset_min(seed_wall.date());
    let seed_utc = seed_wall.add_minutes(-(seed_offset as i64));

    let utc = find_crossing(provider, term.longitude_deg(), seed_utc, config)?;
    let offset = wall_clock_utc_offset_min(utc.date());
    Ok(utc.add_minutes(offset as i64))
}

fn build_sectional<P: SolarLongitudeProvider>(
    provider: &P,
    config: &CrossingConfig,
    year: i32,
) -> Result<SectionalTable, AstroError> {
    let previous_daeseol = term_wall(provider, config, year - 1, SolarTerm::Daeseol)?;
    let mut entries = [(SolarTerm::Ipchun, CivilDateTime::from_parts_unchecked(1, 1, 1, 0, 0, 0)); 12];
    for (slot, term) in entries.iter_mut().zip(SECTIONAL_TERMS) {
        *slot = (term, term_wall(provider, config, year, term)?);
    }
    Ok(SectionalTable { year, previous_daeseol, entries })
}

fn build_full<P: SolarLongitudeProvider>(
    provider: &P,
    config: &CrossingConfig,
    year: i32,
) -> Result<FullTable, AstroError> {
    let mut entries = [(SolarTerm::Ipchun, CivilDateTime::from_parts_unchecked(1, 1, 1, 0, 0, 0)); 24];
    for (slot, term) in entries.iter_mut().zip(ALL_TERMS) {
        *slot = (term, term_wall(provider, config, year, term)?);
    }
    Ok(FullTable { year, entries })
}
