//! Chart assembly: basis conversion, the four pillars, and the full
//! chart with pattern, command and warning annotations.

use saju_astro::{ApparentSun, CrossingConfig, SolarLongitudeProvider};
use saju_ganji::{Branch, Pillar, Stem, day_pillar, hour_pillar, month_pillar, year_pillar};
use saju_jeolgi::{SolarTerm, TermCalculator, TermInstant, terms_for_month};
use saju_time::{CivilDateTime, LunarCalendarConverter, wall_to_true_solar};

use crate::boundary::{BoundaryWarnings, boundary_warnings};
use crate::command::{GoverningStem, SeasonalCommand, governing_stem, seasonal_command};
use crate::error::ChartError;
use crate::input::{BirthInput, ChartConfig};
use crate::pattern::{PatternInputs, PatternResult, classify};

/// The four pillars of a birth moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FourPillars {
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
    pub hour: Pillar,
}

impl FourPillars {
    /// Visible stems in year, month, day, hour order.
    pub fn stems(&self) -> [Stem; 4] {
        [
            self.year.stem,
            self.month.stem,
            self.day.stem,
            self.hour.stem,
        ]
    }

    /// Visible branches in year, month, day, hour order.
    pub fn branches(&self) -> [Branch; 4] {
        [
            self.year.branch,
            self.month.branch,
            self.day.branch,
            self.hour.branch,
        ]
    }
}

/// A fully assembled chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    /// Birth reading as entered, on the solar calendar wall clock.
    pub wall: CivilDateTime,
    /// Instant the pillars were computed at: true solar time when the
    /// correction is on, otherwise the wall reading itself.
    pub basis: CivilDateTime,
    pub pillars: FourPillars,
    /// Sectional term opening the birth month, on the basis.
    pub term_start: CivilDateTime,
    /// Mid term of the birth month, on the basis.
    pub term_mid: CivilDateTime,
    /// Whole days from `term_start` to `basis`, clamped to `0..=29`.
    pub days_into_term: u32,
    pub pattern: PatternResult,
    pub governing: GoverningStem,
    pub seasonal: &'static SeasonalCommand,
    pub warnings: BoundaryWarnings,
}

fn basis_instant(config: &ChartConfig, wall: CivilDateTime) -> CivilDateTime {
    if config.apply_solar_correction {
        wall_to_true_solar(wall, config.longitude_deg, true)
    } else {
        wall
    }
}

/// Chart calculator owning the term cache and chart settings.
pub struct ChartCalculator<P: SolarLongitudeProvider = ApparentSun> {
    terms: TermCalculator<P>,
    config: ChartConfig,
}

impl ChartCalculator<ApparentSun> {
    /// Calculator over the built-in sun.
    pub fn new(config: ChartConfig) -> Result<Self, ChartError> {
        config.validate().map_err(ChartError::Config)?;
        Ok(Self {
            terms: TermCalculator::new(),
            config,
        })
    }
}

impl<P: SolarLongitudeProvider> ChartCalculator<P> {
    /// Calculator over a custom longitude provider.
    pub fn with_provider(
        provider: P,
        crossing: CrossingConfig,
        config: ChartConfig,
    ) -> Result<Self, ChartError> {
        config.validate().map_err(ChartError::Config)?;
        Ok(Self {
            terms: TermCalculator::with_provider(provider, crossing),
            config,
        })
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// The shared term calculator, for callers layering further tables
    /// on the same cache.
    pub fn terms(&mut self) -> &mut TermCalculator<P> {
        &mut self.terms
    }

    /// A wall reading converted to the chart's time basis.
    pub fn basis(&self, wall: CivilDateTime) -> CivilDateTime {
        basis_instant(&self.config, wall)
    }

    /// The thirteen sectional instants covering `year` (the twelve of
    /// the year plus the prior Daeseol), on the basis, sorted.
    pub fn sectional_on_basis(&mut self, year: i32) -> Result<Vec<TermInstant>, ChartError> {
        let config = self.config;
        let table = self.terms.sectional(year)?;
        let mut out = Vec::with_capacity(13);
        out.push(TermInstant {
            term: SolarTerm::Daeseol,
            wall: basis_instant(&config, table.previous_daeseol),
        });
        for &(term, wall) in table.entries() {
            out.push(TermInstant {
                term,
                wall: basis_instant(&config, wall),
            });
        }
        out.sort_by_key(|ti| ti.wall);
        Ok(out)
    }

    /// All 24 term instants of `year` on the basis, in annual order.
    pub fn full_on_basis(&mut self, year: i32) -> Result<[TermInstant; 24], ChartError> {
        let config = self.config;
        let table = self.terms.full(year)?;
        let mut out = [TermInstant {
            term: SolarTerm::Ipchun,
            wall: CivilDateTime::from_parts_unchecked(2000, 1, 1, 0, 0, 0),
        }; 24];
        for (slot, &(term, wall)) in out.iter_mut().zip(table.entries()) {
            *slot = TermInstant {
                term,
                wall: basis_instant(&config, wall),
            };
        }
        Ok(out)
    }

    /// Four pillars of a wall-clock reading.
    pub fn four_pillars(&mut self, wall: CivilDateTime) -> Result<FourPillars, ChartError> {
        let at = self.basis(wall);
        self.four_pillars_on_basis(at)
    }

    /// Four pillars of an instant already on the basis. The year flips
    /// at Ipchun, the month at each sectional term, the day at 23:00.
    pub fn four_pillars_on_basis(&mut self, at: CivilDateTime) -> Result<FourPillars, ChartError> {
        let entries = self.sectional_on_basis(at.year)?;

        let ipchun = entries
            .iter()
            .find(|ti| ti.term == SolarTerm::Ipchun)
            .ok_or(ChartError::Internal("sectional table lost Ipchun"))?
            .wall;
        let sexagenary_year = if at < ipchun { at.year - 1 } else { at.year };
        let year = year_pillar(sexagenary_year);

        // The sorted list leads with the prior Daeseol, so any in-year
        // instant matches at least one entry.
        let mut month_branch = Branch::Ja;
        for ti in &entries {
            if ti.wall <= at {
                month_branch = ti.term.month_branch();
            } else {
                break;
            }
        }
        let month = month_pillar(year.stem, month_branch);

        let day = day_pillar(at);
        let hour = hour_pillar(day.stem, at);
        Ok(FourPillars {
            year,
            month,
            day,
            hour,
        })
    }

    /// Assemble a full chart for a birth input.
    pub fn chart(
        &mut self,
        input: &BirthInput,
        converter: Option<&dyn LunarCalendarConverter>,
    ) -> Result<Chart, ChartError> {
        let wall = input.resolve(converter)?;
        let basis = self.basis(wall);
        let pillars = self.four_pillars_on_basis(basis)?;
        let full = self.full_on_basis(basis.year)?;

        let (opening, mid) = terms_for_month(pillars.month.branch);
        let term_start = full[opening.index() as usize].wall;
        let term_mid = full[mid.index() as usize].wall;
        // A January instant in the Ja month precedes this year's
        // Daeseol; the clamp pins that case to day zero.
        let delta = basis.to_epoch_seconds_i64() - term_start.to_epoch_seconds_i64();
        let days_into_term = delta.div_euclid(86400).clamp(0, 29) as u32;

        let pattern = classify(&PatternInputs {
            day_stem: pillars.day.stem,
            month_branch: pillars.month.branch,
            month_stem: pillars.month.stem,
            stems: pillars.stems(),
            branches: pillars.branches(),
            at: basis,
            term_start,
            term_mid,
            days_into_term,
        });
        let governing = governing_stem(pillars.month.branch, days_into_term);
        let seasonal = seasonal_command(pillars.month.branch, basis, &full)
            .ok_or(ChartError::Internal("seasonal command table has a gap"))?;
        let warnings = boundary_warnings(basis, &full);

        Ok(Chart {
            wall,
            basis,
            pillars,
            term_start,
            term_mid,
            days_into_term,
            pattern,
            governing,
            seasonal,
            warnings,
        })
    }
}
