//! Lunar-calendar conversion seam.
//!
//! The engine itself works on solar (Gregorian) dates. Callers whose
//! input is a Korean lunar date plug a converter in through this
//! trait; no table ships here.

use crate::civil::CivilDate;
use crate::error::TimeError;

/// Converts Korean lunar calendar dates to solar dates.
pub trait LunarCalendarConverter {
    /// Solar date for the given lunar year/month/day. `leap_month`
    /// selects the intercalary month when the lunar year has one.
    ///
    /// Returns [`TimeError::InvalidDate`] when the lunar date does not
    /// exist or falls outside the converter's table.
    fn lunar_to_solar(
        &self,
        year: i32,
        month: u32,
        day: u32,
        leap_month: bool,
    ) -> Result<CivilDate, TimeError>;
}
