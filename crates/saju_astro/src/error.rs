//! Error types for solar position and event search.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from the solar longitude crossing search.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AstroError {
    /// Search configuration failed validation.
    InvalidConfig(&'static str),
}

impl Display for AstroError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidConfig(msg) => write!(f, "invalid search config: {msg}"),
        }
    }
}

impl Error for AstroError {}
