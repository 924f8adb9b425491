//! Solar position and event search for calendar work.
//!
//! This crate provides:
//! - Apparent geocentric solar longitude from the Meeus low-accuracy series
//! - Delta-T (TT minus UT) polynomial fits for the years the series covers
//! - A bracketing scan plus bisection search for the instant the sun reaches
//!   a target longitude, generic over the longitude source
//!
//! All instants are naive UTC expressed in epoch seconds (J2000 epoch) or as
//! [`saju_time::CivilDateTime`] values.

pub mod crossing;
pub mod crossing_types;
pub mod delta_t;
pub mod error;
pub mod solar;

pub use crossing::{find_crossing, find_crossing_epoch};
pub use crossing_types::CrossingConfig;
pub use delta_t::delta_t_seconds;
pub use error::AstroError;
pub use solar::{
    ApparentSun, SolarLongitudeProvider, apparent_solar_longitude_deg, normalize_degrees,
};
