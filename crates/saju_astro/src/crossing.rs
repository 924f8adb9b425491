//! Search for the instant the apparent sun reaches a target ecliptic
//! longitude.
//!
//! Algorithm: coarse scan in 6-hour steps over a +-7 day window around a seed
//! instant to bracket a sign change of the wrapped longitude offset, then
//! fixed-count bisection far past f64 resolution. When the scan brackets
//! nothing the search bisects a narrow +-1 day window around the seed
//! instead; seed tables place every seed within a day or two of the event, so
//! that branch only fires for degenerate targets.

use saju_time::CivilDateTime;

use crate::crossing_types::CrossingConfig;
use crate::error::AstroError;
use crate::solar::SolarLongitudeProvider;

/// Wrap an angle difference in degrees into `[-180, 180)`.
pub(crate) fn wrap_to_pm180(deg: f64) -> f64 {
    (deg + 180.0).rem_euclid(360.0) - 180.0
}

fn wrapped_offset<P: SolarLongitudeProvider + ?Sized>(
    provider: &P,
    t: f64,
    target_deg: f64,
) -> f64 {
    wrap_to_pm180(provider.apparent_longitude_deg(t) - target_deg)
}

/// Find the crossing instant as continuous UTC epoch seconds.
///
/// `seed_utc` should lie within `config.scan_days` of the event. The returned
/// value is the bisection midpoint; callers wanting a civil timestamp
/// truncate with [`find_crossing`].
pub fn find_crossing_epoch<P: SolarLongitudeProvider + ?Sized>(
    provider: &P,
    target_deg: f64,
    seed_utc: CivilDateTime,
    config: &CrossingConfig,
) -> Result<f64, AstroError> {
    config.validate().map_err(AstroError::InvalidConfig)?;

    let seed = seed_utc.to_epoch_seconds();
    let window = config.scan_days * 86400.0;
    let step = config.step_hours * 3600.0;

    let scan_end = seed + window;
    let mut a = seed - window;
    let mut b = scan_end;
    let mut found = false;

    let mut scan = a;
    let mut f_scan = wrapped_offset(provider, scan, target_deg);
    while scan < scan_end {
        let next = scan + step;
        let f_next = wrapped_offset(provider, next, target_deg);
        if f_scan == 0.0
            || f_next == 0.0
            || (f_scan < 0.0 && f_next > 0.0)
            || (f_scan > 0.0 && f_next < 0.0)
        {
            a = scan;
            b = next;
            found = true;
            break;
        }
        scan = next;
        f_scan = f_next;
    }
    if !found {
        a = seed - config.fallback_days * 86400.0;
        b = seed + config.fallback_days * 86400.0;
    }

    let mut f_a = wrapped_offset(provider, a, target_deg);
    for _ in 0..config.max_iterations {
        let mid = a + (b - a) / 2.0;
        let f_mid = wrapped_offset(provider, mid, target_deg);
        if f_mid == 0.0 {
            a = mid;
            b = mid;
            break;
        }
        if (f_a <= 0.0 && f_mid >= 0.0) || (f_a >= 0.0 && f_mid <= 0.0) {
            b = mid;
        } else {
            a = mid;
            f_a = f_mid;
        }
    }
    Ok(a + (b - a) / 2.0)
}

/// Find the crossing instant truncated to a whole UTC second.
pub fn find_crossing<P: SolarLongitudeProvider + ?Sized>(
    provider: &P,
    target_deg: f64,
    seed_utc: CivilDateTime,
    config: &CrossingConfig,
) -> Result<CivilDateTime, AstroError> {
    let t = find_crossing_epoch(provider, target_deg, seed_utc, config)?;
    Ok(CivilDateTime::from_epoch_seconds_floor(t))
}
