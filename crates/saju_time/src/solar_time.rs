//! Wall clock to true solar time.
//!
//! The chain is wall clock -> UTC (historical offset table) -> local
//! mean time (4 minutes per degree of longitude) -> true solar time
//! (equation of time). Results are truncated to the whole second at or
//! before the instant.

use crate::civil::{CivilDate, CivilDateTime};
use crate::standard_time::{daylight_record_for, standard_era_for, wall_clock_utc_offset_min};

/// Equation of time in minutes for the given UTC date.
///
/// Positive means the true sun runs ahead of the mean sun. Uses the
/// common single-year approximation with B anchored at day 81, good to
/// well under half a minute.
pub fn equation_of_time_minutes(utc_date: CivilDate) -> f64 {
    let doy = utc_date.day_of_year() as f64;
    let b = ((360.0 / 365.0) * (doy - 81.0)).to_radians();
    9.87 * (2.0 * b).sin() - 7.53 * b.cos() - 1.5 * b.sin()
}

/// Convert a Korean wall-clock reading to true solar time at
/// `longitude_deg` (degrees east).
///
/// The wall clock is interpreted with the standard-time offset and
/// daylight saving in force on its calendar date. With `apply_eot`
/// false the result is local mean time instead.
pub fn wall_to_true_solar(
    wall: CivilDateTime,
    longitude_deg: f64,
    apply_eot: bool,
) -> CivilDateTime {
    let offset_min = wall_clock_utc_offset_min(wall.date());
    let utc = wall.add_minutes(-(offset_min as i64));
    let mut t = utc.to_epoch_seconds() + longitude_deg * 240.0;
    if apply_eot {
        t += equation_of_time_minutes(utc.date()) * 60.0;
    }
    CivilDateTime::from_epoch_seconds_floor(t)
}

/// Minutes to subtract from a wall-clock reading to get mean solar
/// time at `longitude_deg`. Positive means the wall clock runs ahead
/// of the sun. Equation of time excluded.
pub fn correction_minutes(date: CivilDate, longitude_deg: f64) -> f64 {
    let meridian = standard_era_for(date).meridian_deg;
    let dst_min = daylight_record_for(date).map_or(0, |r| r.advance_min);
    (meridian - longitude_deg) * 4.0 + dst_min as f64
}

/// Breakdown of the wall-clock correction on one date, phrased as the
/// minutes *added* to the wall clock to reach mean solar time.
#[derive(Debug, Clone, PartialEq)]
pub struct CorrectionDetail {
    pub date: CivilDate,
    pub era_label: &'static str,
    pub meridian_deg: f64,
    pub longitude_deg: f64,
    /// (longitude - meridian) * 4, in minutes.
    pub longitude_minutes: f64,
    pub dst_active: bool,
    /// Minus the daylight advance when active, otherwise 0.
    pub dst_minutes: i32,
    /// `longitude_minutes + dst_minutes`.
    pub total_minutes: f64,
}

/// Per-component correction report for `date` and `longitude_deg`.
pub fn correction_detail(date: CivilDate, longitude_deg: f64) -> CorrectionDetail {
    let era = standard_era_for(date);
    let dst = daylight_record_for(date);
    let longitude_minutes = (longitude_deg - era.meridian_deg) * 4.0;
    let dst_minutes = dst.map_or(0, |r| -r.advance_min);
    CorrectionDetail {
        date,
        era_label: era.label,
        meridian_deg: era.meridian_deg,
        longitude_deg,
        longitude_minutes,
        dst_active: dst.is_some(),
        dst_minutes,
        total_minutes: longitude_minutes + dst_minutes as f64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> CivilDate {
        CivilDate::from_ymd_unchecked(y, m, d)
    }

    fn wall(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> CivilDateTime {
        CivilDateTime::from_parts_unchecked(y, mo, d, h, mi, 0)
    }

    #[test]
    fn eot_zero_crossing_anchor() {
        // Day 81 zeroes B, leaving only the -7.53 cosine term.
        let v = equation_of_time_minutes(date(2023, 3, 22));
        assert!((v - (-7.53)).abs() < 1e-12);
    }

    #[test]
    fn eot_seasonal_extremes() {
        // Mid-February trough and early-November peak.
        let feb = equation_of_time_minutes(date(2023, 2, 11));
        assert!((feb - (-14.5771415506)).abs() < 1e-9);
        let nov = equation_of_time_minutes(date(2023, 11, 4));
        assert!((nov - 16.3291430874).abs() < 1e-9);
    }

    #[test]
    fn mean_solar_time_follows_offset_history() {
        // Noon on the wall clock at 127.0E, equation of time excluded.
        let cases = [
            (wall(1895, 6, 15, 12, 0), (12, 28)),
            (wall(1900, 6, 15, 12, 0), (11, 58)),
            (wall(1920, 6, 15, 12, 0), (11, 28)),
            (wall(1948, 7, 15, 12, 0), (10, 28)),
            (wall(1955, 6, 15, 12, 0), (10, 58)),
            (wall(2024, 6, 15, 12, 0), (11, 28)),
        ];
        for (w, (h, m)) in cases {
            let solar = wall_to_true_solar(w, 127.0, false);
            assert_eq!((solar.hour, solar.minute), (h, m), "input {w}");
        }
    }

    #[test]
    fn true_solar_time_includes_eot() {
        let solar = wall_to_true_solar(wall(1984, 2, 2, 0, 0), 126.978, true);
        assert_eq!(
            solar,
            CivilDateTime::from_parts_unchecked(1984, 2, 1, 23, 14, 13)
        );

        // Daylight saving summer 1987.
        let solar = wall_to_true_solar(wall(1987, 7, 1, 14, 30), 126.978, true);
        assert_eq!(
            solar,
            CivilDateTime::from_parts_unchecked(1987, 7, 1, 12, 54, 26)
        );
        let solar = wall_to_true_solar(wall(1987, 7, 1, 14, 30), 129.0756, true);
        assert_eq!(
            solar,
            CivilDateTime::from_parts_unchecked(1987, 7, 1, 13, 2, 49)
        );

        // 127.5E era with daylight saving, 1955.
        let solar = wall_to_true_solar(wall(1955, 6, 15, 11, 30), 126.978, true);
        assert_eq!(
            solar,
            CivilDateTime::from_parts_unchecked(1955, 6, 15, 10, 27, 43)
        );
    }

    #[test]
    fn correction_combines_longitude_and_dst() {
        assert!((correction_minutes(date(2024, 6, 15), 126.978) - 32.088).abs() < 1e-9);
        assert!((correction_minutes(date(1955, 6, 15), 126.978) - 62.088).abs() < 1e-9);
        assert!((correction_minutes(date(1900, 6, 15), 127.0) - 2.0).abs() < 1e-9);
        assert!((correction_minutes(date(1987, 7, 15), 129.0756) - 83.6976).abs() < 1e-9);
    }

    #[test]
    fn correction_detail_signs() {
        let detail = correction_detail(date(1987, 7, 15), 126.978);
        assert_eq!(detail.era_label, "Tokyo standard time (current)");
        assert!((detail.longitude_minutes - (-32.088)).abs() < 1e-9);
        assert!(detail.dst_active);
        assert_eq!(detail.dst_minutes, -60);
        assert!((detail.total_minutes - (-92.088)).abs() < 1e-9);

        let detail = correction_detail(date(2024, 6, 15), 126.978);
        assert!(!detail.dst_active);
        assert_eq!(detail.dst_minutes, 0);
        assert!((detail.total_minutes - (-32.088)).abs() < 1e-9);
    }
}
