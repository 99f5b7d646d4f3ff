//! Campaign calendar — owns the current day and the day-to-phase rule.
//!
//! Two phase rules exist, chosen once at construction:
//!   - `DiscreteAnchor`: a hand-tuned 28-day cycle with the dramatic
//!     beats pinned to fixed days (new moon on 1 and 15, full moon on
//!     8 and 22, intermediate phases in two-day blocks between them).
//!   - `ContinuousModulo`: a 29-day cycle approximating the synodic
//!     month; the day is reduced modulo 29.53 and split into eight
//!     equal bands.
//!
//! Day numbers are 1-based. Advancing past the last day wraps to 1,
//! retreating from day 1 wraps to the last day.

use crate::moon::{MoonPhase, PHASE_COUNT};
use crate::types::{CampaignDay, PhaseIndex};
use serde::{Deserialize, Serialize};

/// Every campaign starts here.
pub const FIRST_DAY: CampaignDay = 1;

/// Mean length of the synodic month, used by the continuous rule.
pub const SYNODIC_MONTH_DAYS: f64 = 29.53;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PhasePolicy {
    DiscreteAnchor,
    ContinuousModulo,
}

impl PhasePolicy {
    /// Number of days in one cycle under this rule.
    pub fn cycle_length(&self) -> CampaignDay {
        match self {
            Self::DiscreteAnchor => 28,
            Self::ContinuousModulo => 29,
        }
    }

    /// Whether `day` is a valid day of this cycle.
    pub fn contains(&self, day: CampaignDay) -> bool {
        (FIRST_DAY..=self.cycle_length()).contains(&day)
    }

    /// Phase index (0..=7) for a day of the cycle.
    pub fn phase_index(&self, day: CampaignDay) -> PhaseIndex {
        match self {
            Self::DiscreteAnchor => discrete_phase_index(day),
            Self::ContinuousModulo => continuous_phase_index(day),
        }
    }

    /// Phase for a day of the cycle.
    pub fn phase_for(&self, day: CampaignDay) -> MoonPhase {
        MoonPhase::from_index(self.phase_index(day))
    }

    /// Resolve a requested jump. `DiscreteAnchor` accepts only days
    /// already inside the cycle; `ContinuousModulo` wraps any integer
    /// into it (day 0 becomes the last day, day `len + 1` becomes 1).
    pub fn jump_target(&self, requested: i64) -> Option<CampaignDay> {
        match self {
            Self::DiscreteAnchor => CampaignDay::try_from(requested)
                .ok()
                .filter(|day| self.contains(*day)),
            Self::ContinuousModulo => {
                let len = i64::from(self.cycle_length());
                // Reduce before the 1-based shift; subtracting from the
                // raw request first would overflow at i64::MIN.
                let wrapped = (requested.rem_euclid(len) + len - 1) % len + 1;
                Some(wrapped as CampaignDay)
            }
        }
    }
}

/// The anchor schedule. New and full moons sit on fixed days; the
/// waxing and waning phases fill the gaps in two-day blocks.
fn discrete_phase_index(day: CampaignDay) -> PhaseIndex {
    match day {
        1 | 15 => 0,
        2 | 3 | 16 | 17 => 1,
        4 | 5 | 18 | 19 => 2,
        6 | 7 | 20 | 21 => 3,
        8 | 22 => 4,
        9 | 10 | 23 | 24 => 5,
        11 | 12 | 25 | 26 => 6,
        13 | 14 | 27 | 28 => 7,
        _ => 0,
    }
}

fn continuous_phase_index(day: CampaignDay) -> PhaseIndex {
    let position = f64::from(day) % SYNODIC_MONTH_DAYS;
    let band = SYNODIC_MONTH_DAYS / PHASE_COUNT as f64;
    ((position / band) as PhaseIndex).min(PHASE_COUNT - 1)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Calendar {
    current: CampaignDay,
    policy:  PhasePolicy,
}

impl Calendar {
    pub fn new(policy: PhasePolicy) -> Self {
        Self {
            current: FIRST_DAY,
            policy,
        }
    }

    /// Start at `day`, falling back to day 1 if it lies outside the cycle.
    pub fn with_day(policy: PhasePolicy, day: CampaignDay) -> Self {
        let current = if policy.contains(day) { day } else { FIRST_DAY };
        Self { current, policy }
    }

    pub fn current(&self) -> CampaignDay {
        self.current
    }

    pub fn policy(&self) -> PhasePolicy {
        self.policy
    }

    pub fn cycle_length(&self) -> CampaignDay {
        self.policy.cycle_length()
    }

    /// All days of the cycle in order, for rendering the grid.
    pub fn days(&self) -> std::ops::RangeInclusive<CampaignDay> {
        FIRST_DAY..=self.cycle_length()
    }

    /// Step forward one day, wrapping past the end of the cycle.
    /// Returns the new day.
    pub fn advance_day(&mut self) -> CampaignDay {
        self.current = if self.current >= self.cycle_length() {
            FIRST_DAY
        } else {
            self.current + 1
        };
        self.current
    }

    /// Step backward one day, wrapping below day 1. Returns the new day.
    pub fn retreat_day(&mut self) -> CampaignDay {
        self.current = if self.current <= FIRST_DAY {
            self.cycle_length()
        } else {
            self.current - 1
        };
        self.current
    }

    /// Jump to a requested day. Returns false (leaving the current day
    /// untouched) when the policy rejects the request.
    pub fn jump_to_day(&mut self, requested: i64) -> bool {
        match self.policy.jump_target(requested) {
            Some(day) => {
                self.current = day;
                true
            }
            None => false,
        }
    }

    pub fn current_phase(&self) -> MoonPhase {
        self.phase_for(self.current)
    }

    pub fn phase_for(&self, day: CampaignDay) -> MoonPhase {
        self.policy.phase_for(day)
    }
}
