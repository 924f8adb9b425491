//! Korean civil-time history: standard-meridian eras and daylight
//! saving runs.
//!
//! Korea changed its standard meridian four times (120E before 1898,
//! 127.5E, 135E under Japanese rule, 127.5E restored in 1954, 135E
//! again since 1961) and ran daylight saving in thirteen summers.
//! Both tables are date-granular: a change takes effect at midnight of
//! its start date, and a daylight run covers its end date inclusively.

use crate::civil::CivilDate;

/// One stretch of history with a fixed standard meridian and UTC
/// offset. `start` and `end` are both inclusive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StandardTimeEra {
    pub start: CivilDate,
    pub end: CivilDate,
    /// Standard meridian in degrees east.
    pub meridian_deg: f64,
    /// Wall-clock offset from UTC in minutes, daylight saving excluded.
    pub utc_offset_min: i32,
    pub label: &'static str,
}

impl StandardTimeEra {
    fn contains(&self, date: CivilDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// One daylight saving run. Clocks were advanced by `advance_min` from
/// midnight of `start` through the whole of `end`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DaylightRecord {
    pub year: i32,
    pub start: CivilDate,
    pub end: CivilDate,
    pub advance_min: i32,
}

impl DaylightRecord {
    fn contains(&self, date: CivilDate) -> bool {
        self.start <= date && date <= self.end
    }
}

const fn d(year: i32, month: u32, day: u32) -> CivilDate {
    CivilDate::from_ymd_unchecked(year, month, day)
}

const fn era(
    start: CivilDate,
    end: CivilDate,
    meridian_deg: f64,
    utc_offset_min: i32,
    label: &'static str,
) -> StandardTimeEra {
    StandardTimeEra {
        start,
        end,
        meridian_deg,
        utc_offset_min,
        label,
    }
}

const fn dst(year: i32, start: CivilDate, end: CivilDate) -> DaylightRecord {
    DaylightRecord {
        year,
        start,
        end,
        advance_min: 60,
    }
}

const STANDARD_ERAS: [StandardTimeEra; 5] = [
    era(d(1, 1, 1), d(1897, 12, 31), 120.0, 480, "Beijing standard time"),
    era(
        d(1898, 1, 1),
        d(1910, 3, 31),
        127.5,
        510,
        "Hanseong (Seoul) standard time",
    ),
    era(d(1910, 4, 1), d(1954, 3, 20), 135.0, 540, "Tokyo standard time"),
    era(
        d(1954, 3, 21),
        d(1961, 8, 9),
        127.5,
        510,
        "Seoul standard time (restored)",
    ),
    era(
        d(1961, 8, 10),
        d(9999, 12, 31),
        135.0,
        540,
        "Tokyo standard time (current)",
    ),
];

const DAYLIGHT_RECORDS: [DaylightRecord; 13] = [
    dst(1948, d(1948, 6, 1), d(1948, 9, 12)),
    dst(1949, d(1949, 4, 3), d(1949, 9, 10)),
    dst(1950, d(1950, 4, 1), d(1950, 9, 9)),
    dst(1951, d(1951, 5, 6), d(1951, 9, 8)),
    dst(1954, d(1954, 3, 21), d(1954, 5, 5)),
    dst(1955, d(1955, 5, 5), d(1955, 9, 9)),
    dst(1956, d(1956, 5, 20), d(1956, 9, 30)),
    dst(1957, d(1957, 5, 5), d(1957, 9, 22)),
    dst(1958, d(1958, 5, 4), d(1958, 9, 21)),
    dst(1959, d(1959, 5, 3), d(1959, 9, 20)),
    dst(1960, d(1960, 5, 1), d(1960, 9, 18)),
    dst(1987, d(1987, 5, 10), d(1987, 10, 11)),
    dst(1988, d(1988, 5, 8), d(1988, 10, 9)),
];

/// Standard-time era in force on `date`.
pub fn standard_era_for(date: CivilDate) -> &'static StandardTimeEra {
    for era in &STANDARD_ERAS {
        if era.contains(date) {
            return era;
        }
    }
    &STANDARD_ERAS[STANDARD_ERAS.len() - 1]
}

/// Daylight saving run covering `date`, if any.
pub fn daylight_record_for(date: CivilDate) -> Option<&'static DaylightRecord> {
    DAYLIGHT_RECORDS.iter().find(|r| r.contains(date))
}

/// Standard meridian in force on `date`, degrees east.
pub fn standard_meridian_deg(date: CivilDate) -> f64 {
    standard_era_for(date).meridian_deg
}

/// Total wall-clock offset from UTC on `date`, in minutes. Era offset
/// plus daylight advance when one is running.
pub fn wall_clock_utc_offset_min(date: CivilDate) -> i32 {
    let mut offset = standard_era_for(date).utc_offset_min;
    if let Some(record) = daylight_record_for(date) {
        offset += record.advance_min;
    }
    offset
}

/// Standard-time situation on one date, for reporting.
#[derive(Debug, Clone, PartialEq)]
pub struct TimezoneInfo {
    /// Date the report describes.
    pub date: CivilDate,
    /// Era label, e.g. "Seoul standard time (restored)".
    pub label: &'static str,
    /// Standard meridian in degrees east.
    pub meridian_deg: f64,
    /// Era offset from UTC in minutes.
    pub base_offset_min: i32,
    /// Whether a daylight saving run covers the date.
    pub dst_active: bool,
    /// Daylight advance in minutes (0 when inactive).
    pub dst_advance_min: i32,
    /// Era offset plus daylight advance.
    pub total_offset_min: i32,
}

impl TimezoneInfo {
    /// Offset formatted as `UTC+hh:mm`.
    pub fn utc_string(&self) -> String {
        let sign = if self.total_offset_min >= 0 { '+' } else { '-' };
        let abs = self.total_offset_min.abs();
        format!("UTC{}{:02}:{:02}", sign, abs / 60, abs % 60)
    }
}

/// Full standard-time report for `date`.
pub fn describe_timezone(date: CivilDate) -> TimezoneInfo {
    let era = standard_era_for(date);
    let dst = daylight_record_for(date);
    let dst_advance_min = dst.map_or(0, |r| r.advance_min);
    TimezoneInfo {
        date,
        label: era.label,
        meridian_deg: era.meridian_deg,
        base_offset_min: era.utc_offset_min,
        dst_active: dst.is_some(),
        dst_advance_min,
        total_offset_min: era.utc_offset_min + dst_advance_min,
    }
}
