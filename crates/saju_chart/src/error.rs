//! Error types for chart assembly.

use std::error::Error;
use std::fmt::{Display, Formatter};

use saju_astro::AstroError;
use saju_time::TimeError;

/// Errors from chart input handling and assembly.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ChartError {
    /// Error from civil date/time handling.
    Time(TimeError),
    /// Error from the solar term search.
    Astro(AstroError),
    /// Chart configuration failed validation.
    Config(&'static str),
    /// Lunar calendar input with no converter supplied.
    UnsupportedCalendar,
    /// A computed table violated one of its own guarantees.
    Internal(&'static str),
}

impl Display for ChartError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Time(e) => write!(f, "time error: {e}"),
            Self::Astro(e) => write!(f, "astro error: {e}"),
            Self::Config(msg) => write!(f, "invalid chart config: {msg}"),
            Self::UnsupportedCalendar => {
                write!(f, "lunar calendar input requires a lunar-to-solar converter")
            }
            Self::Internal(msg) => write!(f, "internal invariant broken: {msg}"),
        }
    }
}

impl Error for ChartError {}

impl From<TimeError> for ChartError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}

impl From<AstroError> for ChartError {
    fn from(e: AstroError) -> Self {
        Self::Astro(e)
    }
}
