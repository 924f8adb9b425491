//! Rule-based classification of the month pattern (gyeok).
//!
//! The month branch picks one of three rule families (cardinal,
//! expansive, storage), after a shared gate for peer months where the
//! day stem matches the month's principal element. Each family is a
//! pure function over the visible stems and branches plus the position
//! of the birth instant inside its solar-term month, so the families
//! can be exercised directly with hand-built inputs.

use saju_ganji::{
    Branch, Element, Polarity, Stem, TenGod, ten_god_for_branch, ten_god_for_stem,
};
use saju_time::CivilDateTime;

/// Which rule family a month branch dispatches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BranchGroup {
    /// Ja, O, Myo, Yu: single-element months.
    Cardinal,
    /// In, Sin, Sa, Hae: months that open a triad.
    Expansive,
    /// Jin, Sul, Chuk, Mi: earth months that store a triad.
    Storage,
}

impl BranchGroup {
    pub const fn of(branch: Branch) -> Self {
        match branch {
            Branch::Ja | Branch::O | Branch::Myo | Branch::Yu => Self::Cardinal,
            Branch::In | Branch::Sin | Branch::Sa | Branch::Hae => Self::Expansive,
            Branch::Jin | Branch::Sul | Branch::Chuk | Branch::Mi => Self::Storage,
        }
    }
}

/// A classified month pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    /// Peer month backed by the upright official.
    Geonrok,
    /// Peer month with no official in sight.
    Wolbi,
    /// Rival-polarity peer month backed by the sided official.
    Yangin,
    /// Rival-polarity peer month with no official in sight.
    Wolgeop,
    /// Named after the ten god of the deciding stem.
    TenGod(TenGod),
    /// Buried-triad month named after the ten god of the triad stem.
    MidQi(TenGod),
}

impl Pattern {
    /// Hangul pattern name, e.g. `건록격` or `식신격`.
    pub fn korean(&self) -> String {
        match self {
            Self::Geonrok => "건록격".to_string(),
            Self::Wolbi => "월비격".to_string(),
            Self::Yangin => "양인격".to_string(),
            Self::Wolgeop => "월겁격".to_string(),
            Self::TenGod(god) => format!("{}격", god.korean()),
            Self::MidQi(god) => format!("중기격({})", god.korean()),
        }
    }
}

/// A pattern verdict with the rule and stem that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternResult {
    pub pattern: Pattern,
    /// Which rule fired and on which stem, for display and regression
    /// pinning. Tagged with the rule family in brackets.
    pub rationale: String,
}

/// Everything the classifier looks at, already reduced to chart terms.
///
/// `stems` and `branches` hold the four visible pillars in year, month,
/// day, hour order; every scan below walks them in that order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PatternInputs {
    pub day_stem: Stem,
    pub month_branch: Branch,
    pub month_stem: Stem,
    pub stems: [Stem; 4],
    pub branches: [Branch; 4],
    /// Birth instant on the chart's time basis.
    pub at: CivilDateTime,
    /// Sectional term opening the birth month, same basis.
    pub term_start: CivilDateTime,
    /// Mid term of the birth month, same basis.
    pub term_mid: CivilDateTime,
    /// Whole days from `term_start` to `at`, clamped to `0..=29`.
    pub days_into_term: u32,
}

fn element_stems(element: Element) -> [Stem; 2] {
    [
        Stem::of(element, Polarity::Yang),
        Stem::of(element, Polarity::Eum),
    ]
}

/// Classify the month pattern of a chart.
pub fn classify(inputs: &PatternInputs) -> PatternResult {
    if let Some(result) = peer_month(inputs) {
        return result;
    }
    match BranchGroup::of(inputs.month_branch) {
        BranchGroup::Cardinal => cardinal_month(inputs),
        BranchGroup::Expansive => expansive_month(inputs),
        BranchGroup::Storage => storage_month(inputs),
    }
}

/// Gate for non-storage months whose principal stem shares the day
/// stem's element. Same polarity looks for the upright official
/// (Jeonggwan), rival polarity for the sided one (Pyeongwan), first
/// among the visible stems and then among the branch principals.
pub fn peer_month(inputs: &PatternInputs) -> Option<PatternResult> {
    if BranchGroup::of(inputs.month_branch) == BranchGroup::Storage {
        return None;
    }
    let day = inputs.day_stem;
    let principal = inputs.month_branch.main_stem();
    if day.element() != principal.element() {
        return None;
    }

    let authority = day.element().controlled_by();
    let jeonggwan = Stem::of(authority, day.polarity().opposite());
    let pyeongwan = Stem::of(authority, day.polarity());

    Some(if day.polarity() == principal.polarity() {
        if inputs.stems.contains(&jeonggwan) {
            PatternResult {
                pattern: Pattern::Geonrok,
                rationale: format!(
                    "[peer] month peer, Jeonggwan {} among stems",
                    jeonggwan.romanized()
                ),
            }
        } else if inputs
            .branches
            .iter()
            .any(|&b| ten_god_for_branch(day, b) == TenGod::Jeonggwan)
        {
            PatternResult {
                pattern: Pattern::Geonrok,
                rationale: "[peer] month peer, Jeonggwan among branch principals".to_string(),
            }
        } else {
            PatternResult {
                pattern: Pattern::Wolbi,
                rationale: "[peer] month peer, no Jeonggwan in sight".to_string(),
            }
        }
    } else if inputs.stems.contains(&pyeongwan) {
        PatternResult {
            pattern: Pattern::Yangin,
            rationale: format!(
                "[peer] month rival, Pyeongwan {} among stems",
                pyeongwan.romanized()
            ),
        }
    } else if inputs
        .branches
        .iter()
        .any(|&b| ten_god_for_branch(day, b) == TenGod::Pyeongwan)
    {
        PatternResult {
            pattern: Pattern::Yangin,
            rationale: "[peer] month rival, Pyeongwan among branch principals".to_string(),
        }
    } else {
        PatternResult {
            pattern: Pattern::Wolgeop,
            rationale: "[peer] month rival, no Pyeongwan in sight".to_string(),
        }
    })
}

/// Ja, O, Myo and Yu months: scan the visible stems for the month's
/// element, preferring the polarity opposite the day stem, and name the
/// pattern after that stem's ten god. With nothing visible the branch
/// principal decides.
pub fn cardinal_month(inputs: &PatternInputs) -> PatternResult {
    let day = inputs.day_stem;
    let principal = inputs.month_branch.main_stem();
    let candidates: Vec<Stem> = inputs
        .stems
        .iter()
        .copied()
        .filter(|s| s.element() == principal.element())
        .collect();
    let pick = candidates
        .iter()
        .copied()
        .find(|s| s.polarity() != day.polarity())
        .or_else(|| candidates.first().copied());

    match pick {
        Some(stem) => PatternResult {
            pattern: Pattern::TenGod(ten_god_for_stem(day, stem)),
            rationale: format!("[cardinal] month-element stem {} visible", stem.romanized()),
        },
        None => PatternResult {
            pattern: Pattern::TenGod(ten_god_for_stem(day, principal)),
            rationale: format!(
                "[cardinal] no month-element stem visible, principal {}",
                principal.romanized()
            ),
        },
    }
}

/// In, Sin, Sa and Hae months: the first visible stem of the month's
/// element decides. When that element also matches the day stem the
/// official sub-rule can upgrade to Geonrok or Yangin. With no such
/// stem, a complete triad inside the first half of the month can name a
/// mid-qi pattern; otherwise the month stem decides.
pub fn expansive_month(inputs: &PatternInputs) -> PatternResult {
    let day = inputs.day_stem;
    let principal = inputs.month_branch.main_stem();
    let month_element = principal.element();

    if let Some(pick) = inputs
        .stems
        .iter()
        .copied()
        .find(|s| s.element() == month_element)
    {
        if month_element == day.element() {
            let authority = day.element().controlled_by();
            let jeonggwan = Stem::of(authority, day.polarity().opposite());
            let pyeongwan = Stem::of(authority, day.polarity());
            if pick.polarity() == day.polarity() {
                if inputs.stems.contains(&jeonggwan) {
                    return PatternResult {
                        pattern: Pattern::Geonrok,
                        rationale: format!(
                            "[expansive] base stem {} with Jeonggwan {} visible",
                            pick.romanized(),
                            jeonggwan.romanized()
                        ),
                    };
                }
            } else if inputs.stems.contains(&pyeongwan) {
                return PatternResult {
                    pattern: Pattern::Yangin,
                    rationale: format!(
                        "[expansive] base stem {} with Pyeongwan {} visible",
                        pick.romanized(),
                        pyeongwan.romanized()
                    ),
                };
            }
        }
        return PatternResult {
            pattern: Pattern::TenGod(ten_god_for_stem(day, pick)),
            rationale: format!("[expansive] base stem {} visible", pick.romanized()),
        };
    }

    let triad_element = inputs.month_branch.samhap_element();
    let [first, second] = inputs.month_branch.samhap_partners();
    let triad_complete = inputs.branches.contains(&first) && inputs.branches.contains(&second);
    if triad_complete && inputs.term_start <= inputs.at && inputs.at < inputs.term_mid {
        let pick = element_stems(triad_element)
            .into_iter()
            .find(|s| inputs.stems.contains(s));
        if let Some(stem) = pick {
            if triad_element != day.element() {
                return PatternResult {
                    pattern: Pattern::MidQi(ten_god_for_stem(day, stem)),
                    rationale: format!(
                        "[expansive] full triad in the first half, triad stem {} visible",
                        stem.romanized()
                    ),
                };
            }
        }
    }

    PatternResult {
        pattern: Pattern::TenGod(ten_god_for_stem(day, inputs.month_stem)),
        rationale: format!(
            "[expansive] no base stem visible, month stem {}",
            inputs.month_stem.romanized()
        ),
    }
}

/// Jin, Sul, Chuk and Mi months. A visible triad partner opens the
/// stored element unless it matches the day stem; otherwise the month
/// splits at day twelve between the lingering stem's element and the
/// commanding earth stems.
pub fn storage_month(inputs: &PatternInputs) -> PatternResult {
    let day = inputs.day_stem;
    let principal = inputs.month_branch.main_stem();
    let hidden = inputs.month_branch.hidden_stems();
    let triad_element = inputs.month_branch.samhap_element();
    let [first, second] = inputs.month_branch.samhap_partners();

    if inputs.branches.contains(&first) || inputs.branches.contains(&second) {
        if triad_element == day.element() {
            return PatternResult {
                pattern: Pattern::TenGod(ten_god_for_stem(day, principal)),
                rationale: format!(
                    "[storage] partial triad shares the day element, principal {}",
                    principal.romanized()
                ),
            };
        }
        let mid = hidden.get(1).copied().unwrap_or(principal);
        let pick = element_stems(triad_element)
            .into_iter()
            .find(|s| inputs.stems.contains(s))
            .unwrap_or(mid);
        return PatternResult {
            pattern: Pattern::TenGod(ten_god_for_stem(day, pick)),
            rationale: format!("[storage] partial triad, triad stem {}", pick.romanized()),
        };
    }

    if inputs.days_into_term <= 11 {
        let lingering = hidden.first().copied().unwrap_or(principal);
        let candidates: Vec<Stem> = inputs
            .stems
            .iter()
            .copied()
            .filter(|s| s.element() == lingering.element())
            .collect();
        let pick = candidates
            .iter()
            .copied()
            .find(|s| s.polarity() != day.polarity())
            .or_else(|| candidates.first().copied())
            .unwrap_or(lingering);
        return PatternResult {
            pattern: Pattern::TenGod(ten_god_for_stem(day, pick)),
            rationale: format!("[storage] first twelve days, lingering stem {}", pick.romanized()),
        };
    }

    let earth: Vec<Stem> = [Stem::Mu, Stem::Gi]
        .into_iter()
        .filter(|s| inputs.stems.contains(s))
        .collect();
    let pick = earth
        .iter()
        .copied()
        .find(|s| s.polarity() != day.polarity())
        .or_else(|| earth.first().copied())
        .unwrap_or(principal);
    PatternResult {
        pattern: Pattern::TenGod(ten_god_for_stem(day, pick)),
        rationale: format!("[storage] past twelve days, commanding earth {}", pick.romanized()),
    }
}
