//! The eight-phase lunar cycle and its presentation strings.
//!
//! Phase order is fixed: new moon first, then waxing toward full,
//! then waning back toward new. Indices 0..=7 map onto that order
//! everywhere in the tracker.

use crate::types::PhaseIndex;
use serde::{Deserialize, Serialize};

/// Number of phases in one lunar cycle.
pub const PHASE_COUNT: usize = 8;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MoonPhase {
    New,
    WaxingCrescent,
    FirstQuarter,
    WaxingGibbous,
    Full,
    WaningGibbous,
    LastQuarter,
    WaningCrescent,
}

impl MoonPhase {
    /// All phases in cycle order. Index into this array IS the phase index.
    pub const CYCLE: [MoonPhase; PHASE_COUNT] = [
        Self::New,
        Self::WaxingCrescent,
        Self::FirstQuarter,
        Self::WaxingGibbous,
        Self::Full,
        Self::WaningGibbous,
        Self::LastQuarter,
        Self::WaningCrescent,
    ];

    /// Phase at `index`, wrapping past the end of the cycle.
    pub fn from_index(index: PhaseIndex) -> Self {
        Self::CYCLE[index % PHASE_COUNT]
    }

    /// Position of this phase in the cycle, 0..=7.
    pub fn index(&self) -> PhaseIndex {
        match self {
            Self::New => 0,
            Self::WaxingCrescent => 1,
            Self::FirstQuarter => 2,
            Self::WaxingGibbous => 3,
            Self::Full => 4,
            Self::WaningGibbous => 5,
            Self::LastQuarter => 6,
            Self::WaningCrescent => 7,
        }
    }

    /// Display name, as shown in the header panel.
    pub fn name(&self) -> &'static str {
        match self {
            Self::New => "New Moon",
            Self::WaxingCrescent => "Waxing Crescent",
            Self::FirstQuarter => "First Quarter",
            Self::WaxingGibbous => "Waxing Gibbous",
            Self::Full => "Full Moon",
            Self::WaningGibbous => "Waning Gibbous",
            Self::LastQuarter => "Last Quarter",
            Self::WaningCrescent => "Waning Crescent",
        }
    }

    /// Stable tag the renderer keys its moon artwork off.
    pub fn visual_tag(&self) -> &'static str {
        match self {
            Self::New => "new",
            Self::WaxingCrescent => "waxing-crescent",
            Self::FirstQuarter => "first-quarter",
            Self::WaxingGibbous => "waxing-gibbous",
            Self::Full => "full",
            Self::WaningGibbous => "waning-gibbous",
            Self::LastQuarter => "last-quarter",
            Self::WaningCrescent => "waning-crescent",
        }
    }

    /// Atmospheric description shown under the moon artwork.
    pub fn flavor_text(&self) -> &'static str {
        match self {
            Self::New => "The night is dark and silent. Strahd's power wanes.",
            Self::WaxingCrescent => "A faint sliver of moonlight appears.",
            Self::FirstQuarter => "Partial moonlight illuminates the cursed land.",
            Self::WaxingGibbous => "The moon shines brightly, shadows grow deeper.",
            Self::Full => "The full moon bathes Barovia in silver light. Strahd's power peaks!",
            Self::WaningGibbous => "The moonlight slowly dims, darkness returns.",
            Self::LastQuarter => "Half of the moon is visible in the sky.",
            Self::WaningCrescent => "Only a faint crescent glows in the darkness.",
        }
    }
}
