//! Notifications the engine hands back after each intent.
//!
//! These exist for the embedding layer (renderer, runner, tests) to
//! react to; nothing inside the engine consumes them. A silently
//! rejected intent produces no notification at all.

use crate::journal::QuestList;
use crate::moon::MoonPhase;
use crate::types::CampaignDay;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CampaignEvent {
    // ── Calendar ──────────────────────────────────
    DayChanged {
        day:   CampaignDay,
        phase: MoonPhase,
    },

    // ── Notes and events ──────────────────────────
    NoteSaved {
        day: CampaignDay,
    },
    EventAdded {
        day:   CampaignDay,
        count: usize,
    },
    EventRemoved {
        day:   CampaignDay,
        count: usize,
    },

    // ── Quest board ───────────────────────────────
    QuestAdded {
        day: Option<CampaignDay>,
    },
    QuestCompleted {
        index: usize,
    },
    QuestReopened {
        index: usize,
    },
    QuestDeleted {
        list: QuestList,
    },

    // ── Dice ──────────────────────────────────────
    DiceRolled {
        sides:  u32,
        result: u32,
    },

    // ── Map viewport ──────────────────────────────
    ViewportChanged {
        transform: String,
    },
    ViewportReset,
}
