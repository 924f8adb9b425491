//! Proleptic-Gregorian civil dates and naive wall-clock timestamps.
//!
//! A [`CivilDateTime`] carries no zone information. Which clock it is
//! read on (standard wall clock, UTC, local mean time, true solar
//! time) is decided by the function producing or consuming it.

use std::fmt::{Display, Formatter};

use crate::error::TimeError;

/// Julian day number of 2000-01-01 (the J2000 epoch date).
pub const J2000_JDN: i64 = 2451545;

/// A calendar date in the proleptic Gregorian calendar, years 1..=9999.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CivilDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl CivilDate {
    /// Create a date, rejecting impossible calendar combinations.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, TimeError> {
        if !(1..=9999).contains(&year)
            || !(1..=12).contains(&month)
            || day < 1
            || day > days_in_month(year, month)
        {
            return Err(TimeError::InvalidDate { year, month, day });
        }
        Ok(Self { year, month, day })
    }

    /// Create a date without validation. For table constants whose
    /// values are known-good at compile time.
    pub const fn from_ymd_unchecked(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    /// Julian day number of this date. The JDN labels the whole civil
    /// day; as a Julian Date it corresponds to 12:00 of the day.
    pub fn jdn(&self) -> i64 {
        let (y, m) = if self.month <= 2 {
            (self.year as i64 - 1, self.month as i64 + 12)
        } else {
            (self.year as i64, self.month as i64)
        };
        let a = y / 100;
        let b = 2 - a + a / 4;
        let e = (365.25 * (y + 4716) as f64) as i64;
        let f = (30.6001 * (m + 1) as f64) as i64;
        e + f + self.day as i64 + b - 1524
    }

    /// Inverse of [`CivilDate::jdn`].
    pub fn from_jdn(jdn: i64) -> Self {
        let l = jdn + 68569;
        let n = (4 * l) / 146097;
        let l = l - (146097 * n + 3) / 4;
        let i = (4000 * (l + 1)) / 1461001;
        let l = l - (1461 * i) / 4 + 31;
        let j = (80 * l) / 2447;
        let day = l - (2447 * j) / 80;
        let l = j / 11;
        let month = j + 2 - 12 * l;
        let year = 100 * (n - 49) + i + l;
        Self {
            year: year as i32,
            month: month as u32,
            day: day as u32,
        }
    }

    /// Ordinal day within the year, 1-based (Jan 1 is 1).
    pub fn day_of_year(&self) -> u32 {
        let jan1 = Self {
            year: self.year,
            month: 1,
            day: 1,
        };
        (self.jdn() - jan1.jdn() + 1) as u32
    }

    /// Date `n` days later (negative `n` goes backward).
    pub fn add_days(&self, n: i64) -> Self {
        Self::from_jdn(self.jdn() + n)
    }
}

impl Display for CivilDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// True when `year` is a Gregorian leap year.
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in the given month.
pub const fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

/// A naive date-time with whole-second resolution.
///
/// Field order makes the derived ordering chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CivilDateTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl CivilDateTime {
    /// Create a date-time, validating both halves.
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Result<Self, TimeError> {
        CivilDate::new(year, month, day)?;
        if hour > 23 || minute > 59 || second > 59 {
            return Err(TimeError::InvalidTime {
                hour,
                minute,
                second,
            });
        }
        Ok(Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        })
    }

    /// Create without validation. For table constants.
    pub const fn from_parts_unchecked(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// The calendar-date half.
    pub fn date(&self) -> CivilDate {
        CivilDate {
            year: self.year,
            month: self.month,
            day: self.day,
        }
    }

    /// Combine a date with a time of day.
    pub fn from_date_time(date: CivilDate, hour: u32, minute: u32, second: u32) -> Self {
        Self {
            year: date.year,
            month: date.month,
            day: date.day,
            hour,
            minute,
            second,
        }
    }

    /// Seconds of this timestamp past midnight.
    pub fn seconds_of_day(&self) -> i64 {
        self.hour as i64 * 3600 + self.minute as i64 * 60 + self.second as i64
    }

    /// Whole seconds since 2000-01-01T12:00:00 on the same clock.
    pub fn to_epoch_seconds_i64(&self) -> i64 {
        (self.date().jdn() - J2000_JDN) * 86400 + self.seconds_of_day() - 43200
    }

    /// Seconds since 2000-01-01T12:00:00 as a float, for root finding.
    pub fn to_epoch_seconds(&self) -> f64 {
        self.to_epoch_seconds_i64() as f64
    }

    /// Inverse of [`CivilDateTime::to_epoch_seconds_i64`].
    pub fn from_epoch_seconds_i64(seconds: i64) -> Self {
        let t = seconds + 43200;
        let days = t.div_euclid(86400);
        let sod = t.rem_euclid(86400);
        let date = CivilDate::from_jdn(J2000_JDN + days);
        Self {
            year: date.year,
            month: date.month,
            day: date.day,
            hour: (sod / 3600) as u32,
            minute: (sod % 3600 / 60) as u32,
            second: (sod % 60) as u32,
        }
    }

    /// Float epoch seconds truncated to the whole second at or before
    /// the instant.
    pub fn from_epoch_seconds_floor(seconds: f64) -> Self {
        Self::from_epoch_seconds_i64(seconds.floor() as i64)
    }

    /// Timestamp `n` seconds later (negative `n` goes backward).
    pub fn add_seconds(&self, n: i64) -> Self {
        Self::from_epoch_seconds_i64(self.to_epoch_seconds_i64() + n)
    }

    /// Timestamp `n` minutes later.
    pub fn add_minutes(&self, n: i64) -> Self {
        self.add_seconds(n * 60)
    }

    /// Timestamp `n` days later.
    pub fn add_days(&self, n: i64) -> Self {
        self.add_seconds(n * 86400)
    }
}

impl Display for CivilDateTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}
