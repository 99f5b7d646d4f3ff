use crate::journal::QuestList;
use crate::types::CampaignDay;
use crate::viewport::WheelDirection;
use serde::{Deserialize, Serialize};

/// Every user intent the tracker accepts.
/// Day-valued payloads arrive as raw integers where the UI lets the
/// user type freely; the engine decides what is in range.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "intent", rename_all = "snake_case")]
pub enum Intent {
    // ── Calendar ──────────────────────────────────
    AdvanceDay,
    RetreatDay,
    JumpToDay {
        day: i64,
    },

    // ── Notes and events ──────────────────────────
    SetNote {
        day:  CampaignDay,
        text: String,
    },
    AddEvent {
        day:  CampaignDay,
        text: String,
        #[serde(default)]
        icon: Option<String>,
    },
    RemoveEvent {
        day:   CampaignDay,
        index: usize,
    },

    // ── Quest board ───────────────────────────────
    AddQuest {
        text: String,
        #[serde(default)]
        day:  Option<i64>,
    },
    CompleteQuest {
        index: usize,
    },
    ReopenQuest {
        index: usize,
    },
    DeleteQuest {
        list:  QuestList,
        index: usize,
    },

    // ── Dice ──────────────────────────────────────
    RollDice {
        sides: u32,
    },

    // ── Map viewport ──────────────────────────────
    MapPress {
        x: f64,
        y: f64,
    },
    MapMove {
        x: f64,
        y: f64,
    },
    MapRelease {
        width:  f64,
        height: f64,
    },
    MapWheel {
        x: f64,
        y: f64,
        direction: WheelDirection,
    },
    CloseMap,
}
