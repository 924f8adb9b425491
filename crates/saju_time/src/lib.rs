//! Civil time for the Korean calendar engine.
//!
//! This crate owns the time handling the rest of the workspace builds
//! on: proleptic-Gregorian dates and naive wall-clock timestamps, the
//! history of Korean standard-time eras and daylight saving runs, and
//! the conversion from a wall-clock reading to true solar time at a
//! birth longitude.
//!
//! All timestamps are naive. A [`CivilDateTime`] is just a clock
//! reading; whether it is wall time, UTC, or solar time depends on
//! which function produced it.

pub mod civil;
pub mod error;
pub mod lunar;
pub mod solar_time;
pub mod standard_time;

pub use civil::{CivilDate, CivilDateTime, days_in_month, is_leap_year};
pub use error::TimeError;
pub use lunar::LunarCalendarConverter;
pub use solar_time::{
    CorrectionDetail, correction_detail, correction_minutes, equation_of_time_minutes,
    wall_to_true_solar,
};
pub use standard_time::{
    DaylightRecord, StandardTimeEra, TimezoneInfo, daylight_record_for, describe_timezone,
    standard_era_for, standard_meridian_deg, wall_clock_utc_offset_min,
};
