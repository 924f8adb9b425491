//! Birth input and chart configuration.

use saju_time::{CivilDateTime, LunarCalendarConverter};

use crate::error::ChartError;

/// Longitude of Seoul in degrees east, the default chart meridian.
pub const SEOUL_LONGITUDE_DEG: f64 = 126.978;

/// Gender of the subject; decides the decade-luck direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
}

/// Calendar system the raw birth date is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputCalendar {
    Solar,
    /// Lunar date; `leap_month` marks an intercalary month.
    Lunar { leap_month: bool },
}

/// A birth moment as the user stated it, before any conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthInput {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    pub calendar: InputCalendar,
}

impl BirthInput {
    /// A solar-calendar birth input with zero seconds.
    pub fn solar(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second: 0,
            calendar: InputCalendar::Solar,
        }
    }

    /// Resolve to a solar wall-clock reading, converting lunar input
    /// through `converter`. Lunar input without a converter is an
    /// [`ChartError::UnsupportedCalendar`].
    pub fn resolve(
        &self,
        converter: Option<&dyn LunarCalendarConverter>,
    ) -> Result<CivilDateTime, ChartError> {
        match self.calendar {
            InputCalendar::Solar => Ok(CivilDateTime::new(
                self.year,
                self.month,
                self.day,
                self.hour,
                self.minute,
                self.second,
            )?),
            InputCalendar::Lunar { leap_month } => {
                let converter = converter.ok_or(ChartError::UnsupportedCalendar)?;
                let date = converter.lunar_to_solar(self.year, self.month, self.day, leap_month)?;
                Ok(CivilDateTime::new(
                    date.year,
                    date.month,
                    date.day,
                    self.hour,
                    self.minute,
                    self.second,
                )?)
            }
        }
    }
}

/// Chart-level settings, threaded explicitly into the calculator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartConfig {
    /// Birth longitude in degrees east.
    pub longitude_deg: f64,
    /// Convert wall-clock readings to true solar time before any
    /// pillar or table lookup. Off means the wall clock is used as-is.
    pub apply_solar_correction: bool,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            longitude_deg: SEOUL_LONGITUDE_DEG,
            apply_solar_correction: true,
        }
    }
}

impl ChartConfig {
    /// Check the settings are usable.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.longitude_deg.is_finite() {
            return Err("longitude_deg must be finite");
        }
        if !(-180.0..=180.0).contains(&self.longitude_deg) {
            return Err("longitude_deg must lie within -180..=180");
        }
        Ok(())
    }
}
