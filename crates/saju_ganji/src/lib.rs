//! Sexagenary cycle primitives: stems, branches, pillars, and the ten gods.
//!
//! This crate provides:
//! - The 10 heavenly stems and 12 earthly branches with element, polarity,
//!   hidden stems, and samhap triads
//! - The 60-pillar cycle and calendar reckoning into it (year, month stem,
//!   day with the 23:00 rollover, hour)
//! - Ten-god relations between stems, and branches via principal stems
//!
//! Everything here is pure table work; solar-term boundaries live in
//! `saju_jeolgi` and chart assembly in `saju_chart`.

pub mod branch;
pub mod cycle;
pub mod element;
pub mod pillar;
pub mod stem;
pub mod ten_god;

pub use branch::{ALL_BRANCHES, Branch};
pub use cycle::{
    day_pillar, day_pillar_for_date, hour_branch, hour_pillar, hour_stem, month_pillar,
    month_stem, year_pillar,
};
pub use element::{ALL_ELEMENTS, Element, Polarity};
pub use pillar::Pillar;
pub use stem::{ALL_STEMS, Stem};
pub use ten_god::{ALL_TEN_GODS, TenGod, ten_god_for_branch, ten_god_for_stem};
