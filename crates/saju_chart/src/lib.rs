//! Four-pillar chart assembly for the Korean calendar.
//!
//! This crate turns a birth reading into a chart:
//! - Birth input (solar, or lunar through an injected converter) and
//!   chart configuration
//! - Conversion of wall readings to the chart's time basis and the
//!   four pillars against cached term tables
//! - The rule-based month-pattern (gyeok) classifier
//! - Governing-stem and seasonal-command tables, plus warnings for
//!   births close to a term or hour boundary
//!
//! All astronomy goes through [`saju_jeolgi`]'s term calculator; the
//! classifier and tables are pure functions over chart values.

pub mod boundary;
pub mod chart;
pub mod command;
pub mod error;
pub mod input;
pub mod pattern;

pub use boundary::{BoundaryWarnings, HourBoundary, TermBoundary, boundary_warnings};
pub use chart::{Chart, ChartCalculator, FourPillars};
pub use command::{
    GoverningStem, SEASONAL_COMMANDS, SeasonalCommand, TermPhase, governing_stem,
    seasonal_command,
};
pub use error::ChartError;
pub use input::{BirthInput, ChartConfig, Gender, InputCalendar, SEOUL_LONGITUDE_DEG};
pub use pattern::{
    BranchGroup, Pattern, PatternInputs, PatternResult, cardinal_month, classify,
    expansive_month, peer_month, storage_month,
};
