//! Warnings for births close to a solar-term or hour-branch boundary.
//!
//! A reading minutes away from a boundary can flip a pillar, so the
//! chart flags proximity instead of silently committing to one side.

use saju_jeolgi::{SolarTerm, TermInstant};
use saju_time::CivilDateTime;

/// Flag terms within this many minutes of the birth instant.
const TERM_WINDOW_MIN: f64 = 120.0;
/// Flag hour-branch starts within this many minutes of the birth clock.
const HOUR_WINDOW_MIN: i64 = 30;

/// Hour-branch starts as minutes of day, Ja (23:00) first.
const HOUR_BOUNDARIES: [u32; 12] = [
    1380, 60, 180, 300, 420, 540, 660, 780, 900, 1020, 1140, 1260,
];

/// A solar term within two hours of the birth instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TermBoundary {
    pub term: SolarTerm,
    /// Term instant on the chart's time basis.
    pub instant: CivilDateTime,
    /// Absolute distance in minutes, seconds included.
    pub minutes: f64,
}

/// An hour-branch start within half an hour of the birth clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HourBoundary {
    /// Boundary as minutes of day; 1380 is the 23:00 Ja start.
    pub boundary_min: u32,
    /// Absolute distance in whole minutes; seconds are ignored.
    pub minutes: u32,
}

/// Boundary warnings for one birth instant, at most one of each kind.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoundaryWarnings {
    pub term: Option<TermBoundary>,
    pub hour: Option<HourBoundary>,
}

/// Check `at` against a year's term instants (annual order) and the
/// twelve hour-branch starts. The first hit of each kind wins.
pub fn boundary_warnings(at: CivilDateTime, terms: &[TermInstant; 24]) -> BoundaryWarnings {
    let mut warnings = BoundaryWarnings::default();

    for ti in terms {
        let seconds = (at.to_epoch_seconds_i64() - ti.wall.to_epoch_seconds_i64()).abs();
        let minutes = seconds as f64 / 60.0;
        if minutes <= TERM_WINDOW_MIN {
            warnings.term = Some(TermBoundary {
                term: ti.term,
                instant: ti.wall,
                minutes,
            });
            break;
        }
    }

    let minute_of_day = (at.hour * 60 + at.minute) as i64;
    for &boundary in &HOUR_BOUNDARIES {
        let wrapped = (minute_of_day - boundary as i64 + 720).rem_euclid(1440) - 720;
        let diff = wrapped.abs();
        if diff <= HOUR_WINDOW_MIN {
            warnings.hour = Some(HourBoundary {
                boundary_min: boundary,
                minutes: diff as u32,
            });
            break;
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use saju_jeolgi::ALL_TERMS;

    use super::*;

    fn wall(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> CivilDateTime {
        CivilDateTime::new(year, month, day, hour, minute, second).unwrap()
    }

    /// A term table with every instant pushed far away except one.
    fn terms_with(term: SolarTerm, instant: CivilDateTime) -> [TermInstant; 24] {
        let far = wall(2100, 1, 1, 0, 0, 0);
        let mut out = [TermInstant {
            term: SolarTerm::Ipchun,
            wall: far,
        }; 24];
        for (slot, &t) in out.iter_mut().zip(ALL_TERMS.iter()) {
            slot.term = t;
        }
        out[term.index() as usize].wall = instant;
        out
    }

    #[test]
    fn term_inside_the_window_is_flagged() {
        let terms = terms_with(SolarTerm::Ipchun, wall(1984, 2, 5, 0, 24, 51));
        let got = boundary_warnings(wall(1984, 2, 5, 1, 30, 51), &terms);
        let term = got.term.unwrap();
        assert_eq!(term.term, SolarTerm::Ipchun);
        assert_eq!(term.instant, wall(1984, 2, 5, 0, 24, 51));
        assert!((term.minutes - 66.0).abs() < 1e-9);
    }

    #[test]
    fn term_just_outside_the_window_is_not() {
        let terms = terms_with(SolarTerm::Ipchun, wall(1984, 2, 5, 0, 24, 51));
        let got = boundary_warnings(wall(1984, 2, 5, 2, 24, 52), &terms);
        assert!(got.term.is_none());
    }

    #[test]
    fn hour_boundary_before_the_ja_start_is_flagged() {
        let terms = terms_with(SolarTerm::Ipchun, wall(2100, 1, 1, 0, 0, 0));
        let got = boundary_warnings(wall(1984, 2, 1, 22, 40, 0), &terms);
        let hour = got.hour.unwrap();
        assert_eq!(hour.boundary_min, 1380);
        assert_eq!(hour.minutes, 20);
    }

    #[test]
    fn hour_boundary_wraps_past_midnight() {
        // 00:40 is twenty minutes before the 01:00 Chuk start; midnight
        // itself is not a branch boundary.
        let terms = terms_with(SolarTerm::Ipchun, wall(2100, 1, 1, 0, 0, 0));
        let got = boundary_warnings(wall(1984, 2, 1, 0, 40, 0), &terms);
        let hour = got.hour.unwrap();
        assert_eq!(hour.boundary_min, 60);
        assert_eq!(hour.minutes, 20);
    }

    #[test]
    fn midnight_is_not_a_boundary() {
        let terms = terms_with(SolarTerm::Ipchun, wall(2100, 1, 1, 0, 0, 0));
        let got = boundary_warnings(wall(1984, 2, 1, 23, 50, 0), &terms);
        assert!(got.hour.is_none());
    }

    #[test]
    fn hour_check_ignores_seconds() {
        let terms = terms_with(SolarTerm::Ipchun, wall(2100, 1, 1, 0, 0, 0));
        // 23:30:59 counts as exactly thirty minutes.
        let got = boundary_warnings(wall(1984, 2, 1, 23, 30, 59), &terms);
        assert_eq!(got.hour.unwrap().minutes, 30);
    }
}
