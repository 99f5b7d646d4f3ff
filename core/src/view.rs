//! Render-ready projection of the campaign state.
//!
//! The engine builds one of these on demand; the embedding layer
//! (desktop shell, runner, tests) draws from it without reaching
//! into engine internals.

use crate::journal::Quest;
use crate::moon::MoonPhase;
use crate::types::CampaignDay;
use serde::Serialize;

/// The current moon, ready for the header panel.
#[derive(Debug, Clone, Serialize)]
pub struct PhaseView {
    pub name:        &'static str,
    pub visual_tag:  &'static str,
    pub flavor_text: &'static str,
}

impl From<MoonPhase> for PhaseView {
    fn from(phase: MoonPhase) -> Self {
        Self {
            name:        phase.name(),
            visual_tag:  phase.visual_tag(),
            flavor_text: phase.flavor_text(),
        }
    }
}

/// One cell of the calendar grid.
#[derive(Debug, Clone, Serialize)]
pub struct DayCell {
    pub day:        CampaignDay,
    pub moon_name:  &'static str,
    pub moon_tag:   &'static str,
    pub is_current: bool,
    /// Rendered event labels for this day, oldest first.
    pub events: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CampaignView {
    pub day:           CampaignDay,
    pub phase:         PhaseView,
    pub cycle:         Vec<DayCell>,
    /// Note text for the day the view was opened on ("" when unset).
    pub note:          String,
    pub quests:        Vec<Quest>,
    pub done_quests:   Vec<Quest>,
    pub map_transform: String,
}
