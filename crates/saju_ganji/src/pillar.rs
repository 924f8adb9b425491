//! A stem-branch pair and the sexagenary cycle.

use std::fmt::{Display, Formatter};

use crate::branch::{ALL_BRANCHES, Branch};
use crate::stem::{ALL_STEMS, Stem};

/// One pillar: a heavenly stem over an earthly branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pillar {
    pub stem: Stem,
    pub branch: Branch,
}

impl Pillar {
    pub const fn new(stem: Stem, branch: Branch) -> Self {
        Self { stem, branch }
    }

    /// Pillar at a position of the 60-cycle. Any signed value is wrapped, so
    /// callers can pass raw day numbers or year offsets directly.
    pub fn from_cycle_index(index: i64) -> Self {
        let i = index.rem_euclid(60);
        Self {
            stem: ALL_STEMS[(i % 10) as usize],
            branch: ALL_BRANCHES[(i % 12) as usize],
        }
    }

    /// Pillar at a signed cycle offset from this one. Stem and branch advance
    /// together, staying inside the 60-cycle.
    pub fn offset(self, n: i64) -> Self {
        Self {
            stem: self.stem.offset(n),
            branch: self.branch.offset(n),
        }
    }

    /// Hangul pair, e.g. "갑자".
    pub fn korean(self) -> String {
        format!("{}{}", self.stem.korean(), self.branch.korean())
    }

    /// Hanja pair, e.g. "甲子".
    pub fn hanja(self) -> String {
        format!("{}{}", self.stem.hanja(), self.branch.hanja())
    }

    /// Romanized pair, e.g. "GapJa".
    pub fn romanized(self) -> String {
        format!("{}{}", self.stem.romanized(), self.branch.romanized())
    }
}

impl Display for Pillar {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.stem.korean(), self.branch.korean())
    }
}
