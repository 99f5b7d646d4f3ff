//! Shared primitive types used across the entire tracker.

/// A day number within the campaign cycle. Valid values are 1..=cycle length;
/// day 0 never occurs.
pub type CampaignDay = u32;

/// Index into the eight-phase lunar cycle, 0 (new moon) through 7.
pub type PhaseIndex = usize;
