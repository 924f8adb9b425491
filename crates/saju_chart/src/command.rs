//! Month-command tables: the governing stem of each month phase and
//! the eight seasonal command windows.

use saju_ganji::{Branch, Stem};
use saju_jeolgi::{SolarTerm, TermInstant};
use saju_time::CivilDateTime;

/// Which half of the solar-term month an instant falls in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermPhase {
    /// Days 0..=14 past the sectional term.
    Early,
    /// Day 15 onward.
    Late,
}

/// The stem governing one phase of a month (saryeong).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GoverningStem {
    pub stem: Stem,
    pub phase: TermPhase,
}

/// Governing stem of `month_branch` for a birth `days_into_term` days
/// past its sectional term. Day fifteen switches to the late stem.
pub fn governing_stem(month_branch: Branch, days_into_term: u32) -> GoverningStem {
    let (early, late) = match month_branch {
        Branch::Ja => (Stem::Im, Stem::Gye),
        Branch::Chuk => (Stem::Gye, Stem::Sin),
        Branch::In => (Stem::Byeong, Stem::Gap),
        Branch::Myo => (Stem::Gap, Stem::Eul),
        Branch::Jin => (Stem::Eul, Stem::Gye),
        Branch::Sa => (Stem::Gyeong, Stem::Byeong),
        Branch::O => (Stem::Byeong, Stem::Jeong),
        Branch::Mi => (Stem::Eul, Stem::Jeong),
        Branch::Sin => (Stem::Im, Stem::Gyeong),
        Branch::Yu => (Stem::Gyeong, Stem::Sin),
        Branch::Sul => (Stem::Sin, Stem::Jeong),
        Branch::Hae => (Stem::Gap, Stem::Im),
    };
    if days_into_term < 15 {
        GoverningStem {
            stem: early,
            phase: TermPhase::Early,
        }
    } else {
        GoverningStem {
            stem: late,
            phase: TermPhase::Late,
        }
    }
}

/// A seasonal command window (dangnyeong): the month branches it spans,
/// the solar terms bounding it, and the stem in command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeasonalCommand {
    pub months: [Branch; 2],
    pub from: SolarTerm,
    pub until: SolarTerm,
    pub mission: Stem,
}

/// The eight command windows around the year, solstice-anchored.
pub const SEASONAL_COMMANDS: [SeasonalCommand; 8] = [
    SeasonalCommand {
        months: [Branch::Ja, Branch::Chuk],
        from: SolarTerm::Dongji,
        until: SolarTerm::Ipchun,
        mission: Stem::Gye,
    },
    SeasonalCommand {
        months: [Branch::In, Branch::Myo],
        from: SolarTerm::Ipchun,
        until: SolarTerm::Chunbun,
        mission: Stem::Gap,
    },
    SeasonalCommand {
        months: [Branch::Myo, Branch::Jin],
        from: SolarTerm::Chunbun,
        until: SolarTerm::Ipha,
        mission: Stem::Eul,
    },
    SeasonalCommand {
        months: [Branch::Sa, Branch::O],
        from: SolarTerm::Ipha,
        until: SolarTerm::Haji,
        mission: Stem::Byeong,
    },
    SeasonalCommand {
        months: [Branch::O, Branch::Mi],
        from: SolarTerm::Haji,
        until: SolarTerm::Ipchu,
        mission: Stem::Jeong,
    },
    SeasonalCommand {
        months: [Branch::Sin, Branch::Yu],
        from: SolarTerm::Ipchu,
        until: SolarTerm::Chubun,
        mission: Stem::Gyeong,
    },
    SeasonalCommand {
        months: [Branch::Yu, Branch::Sul],
        from: SolarTerm::Chubun,
        until: SolarTerm::Ipdong,
        mission: Stem::Sin,
    },
    SeasonalCommand {
        months: [Branch::Hae, Branch::Ja],
        from: SolarTerm::Ipdong,
        until: SolarTerm::Dongji,
        mission: Stem::Im,
    },
];

/// The mid term splitting a branch that appears in two windows.
const fn boundary_term(branch: Branch) -> Option<SolarTerm> {
    match branch {
        Branch::O => Some(SolarTerm::Haji),
        Branch::Myo => Some(SolarTerm::Chunbun),
        Branch::Yu => Some(SolarTerm::Chubun),
        Branch::Ja => Some(SolarTerm::Dongji),
        Branch::Hae => Some(SolarTerm::Ipdong),
        _ => None,
    }
}

/// Command window in force for a birth in `month_branch` at `at`,
/// resolved against that year's term instants in annual order. Branches
/// listed in two windows split at their boundary term, keeping the
/// table's own entry order on each side.
pub fn seasonal_command(
    month_branch: Branch,
    at: CivilDateTime,
    terms: &[TermInstant; 24],
) -> Option<&'static SeasonalCommand> {
    let mut matched = SEASONAL_COMMANDS
        .iter()
        .filter(|c| c.months.contains(&month_branch));
    let first = matched.next()?;
    if let (Some(second), Some(term)) = (matched.next(), boundary_term(month_branch)) {
        let boundary = terms[term.index() as usize].wall;
        if at >= boundary {
            return Some(second);
        }
    }
    Some(first)
}
