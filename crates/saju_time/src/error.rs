//! Error types for civil-time handling.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from civil date/time construction and parsing.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// Calendar date does not exist (bad month, bad day-of-month, or
    /// year outside 1..=9999).
    InvalidDate { year: i32, month: u32, day: u32 },
    /// Time of day out of range (hour > 23, minute > 59, second > 59).
    InvalidTime { hour: u32, minute: u32, second: u32 },
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate { year, month, day } => {
                write!(f, "invalid calendar date: {year:04}-{month:02}-{day:02}")
            }
            Self::InvalidTime {
                hour,
                minute,
                second,
            } => {
                write!(f, "invalid time of day: {hour:02}:{minute:02}:{second:02}")
            }
        }
    }
}

impl Error for TimeError {}
