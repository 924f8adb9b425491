//! Apparent geocentric solar longitude from the Meeus low-accuracy series.
//!
//! The series ("Astronomical Algorithms", ch. 25) carries the mean longitude
//! and mean anomaly to T^2, the equation of center to three sine terms, and
//! corrects for nutation and aberration through the 0.00569/0.00478 omega
//! terms. That is accurate to roughly 0.01 deg, i.e. a solar-term instant is
//! good to a few minutes of clock time. UT to TT conversion uses the
//! polynomial fits in [`crate::delta_t`].

use saju_time::CivilDateTime;

use crate::delta_t::delta_t_seconds;

/// Source of apparent solar ecliptic longitude at a UTC instant.
///
/// The crossing search in [`crate::crossing`] is generic over this trait so
/// tests can substitute synthetic models for the real sun.
pub trait SolarLongitudeProvider {
    /// Apparent geocentric solar longitude in degrees, normalized to
    /// `[0, 360)`, at the given UTC instant in epoch seconds (J2000 epoch,
    /// see [`saju_time::CivilDateTime::to_epoch_seconds`]).
    fn apparent_longitude_deg(&self, epoch_seconds_utc: f64) -> f64;
}

/// The Meeus series sun. Stateless; construct freely.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApparentSun;

impl SolarLongitudeProvider for ApparentSun {
    fn apparent_longitude_deg(&self, epoch_seconds_utc: f64) -> f64 {
        apparent_solar_longitude_deg(epoch_seconds_utc)
    }
}

/// Normalize an angle in degrees to `[0, 360)`.
pub fn normalize_degrees(deg: f64) -> f64 {
    deg.rem_euclid(360.0)
}

/// Apparent solar longitude in degrees for a UTC instant in epoch seconds.
pub fn apparent_solar_longitude_deg(epoch_seconds_utc: f64) -> f64 {
    // Delta-T wants the calendar year; the second-level truncation cannot
    // move the year enough to matter at fit accuracy.
    let year = CivilDateTime::from_epoch_seconds_floor(epoch_seconds_utc).year;
    let t_tt = epoch_seconds_utc + delta_t_seconds(year);
    let t = t_tt / (86400.0 * 36525.0);

    let l0 = normalize_degrees(280.46646 + 36000.76983 * t + 0.0003032 * t * t);
    let m = normalize_degrees(357.52911 + 35999.05029 * t - 0.0001537 * t * t);
    let m_rad = m.to_radians();
    let center = (1.914602 - 0.004817 * t - 0.000014 * t * t) * m_rad.sin()
        + (0.019993 - 0.000101 * t) * (2.0 * m_rad).sin()
        + 0.000289 * (3.0 * m_rad).sin();
    let omega = 125.04 - 1934.136 * t;
    let lambda = l0 + center - 0.00569 - 0.00478 * omega.to_radians().sin();
    normalize_degrees(lambda)
}
