//! Calendar reckoning into the sexagenary cycle.
//!
//! Year pillars follow the (year - 4) rule, so 1984 opens a cycle at GapJa.
//! Day pillars anchor on Julian day number + 49, and the day rolls at 23:00:
//! the first Ja hour belongs to the next calendar day. Month stems and hour
//! stems both derive from the five-group rule, advancing two stems per group.

use saju_time::{CivilDate, CivilDateTime};

use crate::branch::{ALL_BRANCHES, Branch};
use crate::pillar::Pillar;
use crate::stem::{ALL_STEMS, Stem};

/// Pillar of a calendar year. Callers decide which year a birth instant
/// belongs to; the Ipchun boundary is not this function's concern.
pub fn year_pillar(year: i32) -> Pillar {
    Pillar::from_cycle_index(year as i64 - 4)
}

/// Stem of a month from the year stem. The In-month stem steps two places
/// per year-stem group of five (Gap and Gi years open at Byeong).
pub fn month_stem(year_stem: Stem, month_branch: Branch) -> Stem {
    let start = ((year_stem.index() % 5) * 2 + 2) % 10;
    ALL_STEMS[((start + month_branch.month_order()) % 10) as usize]
}

/// Month pillar from the year stem and month branch.
pub fn month_pillar(year_stem: Stem, month_branch: Branch) -> Pillar {
    Pillar::new(month_stem(year_stem, month_branch), month_branch)
}

/// Day pillar of a calendar date, ignoring the 23:00 rollover.
pub fn day_pillar_for_date(date: CivilDate) -> Pillar {
    Pillar::from_cycle_index(date.jdn() + 49)
}

/// Day pillar at a civil instant. From 23:00 the pillar is the next
/// calendar day's.
pub fn day_pillar(at: CivilDateTime) -> Pillar {
    let mut jdn = at.date().jdn();
    if at.hour >= 23 {
        jdn += 1;
    }
    Pillar::from_cycle_index(jdn + 49)
}

/// Hour branch: twelve two-hour blocks, Ja opening at 23:00.
pub fn hour_branch(at: CivilDateTime) -> Branch {
    let mins = (at.hour * 60 + at.minute) as i64;
    let idx = (mins - 1380).rem_euclid(1440) / 120;
    ALL_BRANCHES[idx as usize]
}

/// Stem of an hour from the day stem. The Ja-hour stem steps two places per
/// day-stem group of five (Gap and Gi days open their Ja hour at Gap).
pub fn hour_stem(day_stem: Stem, hour_branch: Branch) -> Stem {
    let start = (day_stem.index() % 5) * 2;
    ALL_STEMS[((start + hour_branch.index()) % 10) as usize]
}

/// Hour pillar at a civil instant, given the (already rolled) day stem.
pub fn hour_pillar(day_stem: Stem, at: CivilDateTime) -> Pillar {
    let branch = hour_branch(at);
    Pillar::new(hour_stem(day_stem, branch), branch)
}
