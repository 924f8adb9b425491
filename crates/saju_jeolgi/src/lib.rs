//! The 24 solar terms of the Korean calendar, computed and tabulated.
//!
//! This crate provides:
//! - The [`SolarTerm`] enum with names, target longitudes and seed dates
//! - Cached per-year term tables ([`SectionalTable`], [`FullTable`]) in
//!   Korean wall-clock time
//! - Neighbour lookup around an instant via [`TermCalculator::nearby`]
//!
//! Sectional (jeol) terms open the twelve sexagenary months; mid (jung)
//! terms sit inside them. Searches delegate to [`saju_astro`] and stay
//! deterministic for a given longitude provider.

pub mod table;
pub mod term;

pub use table::{FullTable, SectionalTable, TermCalculator, TermInstant};
pub use term::{ALL_TERMS, SECTIONAL_TERMS, SolarTerm, terms_for_month};
