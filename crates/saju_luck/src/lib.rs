//! Luck cycles over a natal chart: decade, year, month, and day.
//!
//! This crate layers the moving cycles on [`saju_chart`]:
//! - Decade luck walks the month pillar forward or backward from a
//!   start age read off the sectional-term gap
//! - Year luck follows the sexagenary years
//! - Month luck tabulates the twelve sectional months of a calendar
//!   year with their entering, mid, and closing instants
//! - Day luck relates each day pillar back to the natal day stem

pub mod day;
pub mod decade;
pub mod month;
pub mod year;

pub use day::{DayLuckEntry, day_luck};
pub use decade::{DecadeEntry, DecadeLuck, decade_luck, is_forward};
pub use month::{MonthLuckEntry, month_luck};
pub use year::{YearLuckEntry, completed_age, year_luck};
