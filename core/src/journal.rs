//! Journal — per-day notes, per-day events, and the two quest lists.
//!
//! Position is the identity here: events and quests are addressed by
//! index in insertion order, and every quest transfer appends at the
//! end of the receiving list. A day with no events holds no entry at
//! all; removing the last event of a day removes the day.

use crate::types::CampaignDay;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single scheduled event on a campaign day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DayEvent {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl DayEvent {
    /// One-line rendering: the icon (when present) in front of the text.
    pub fn label(&self) -> String {
        match self.icon.as_deref().filter(|icon| !icon.is_empty()) {
            Some(icon) => format!("{icon} {}", self.text),
            None => self.text.clone(),
        }
    }
}

/// A quest board entry, optionally tied to a day of the cycle.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Quest {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day:  Option<CampaignDay>,
}

/// Which quest list an operation addresses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum QuestList {
    Active,
    Done,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Journal {
    notes:  BTreeMap<CampaignDay, String>,
    events: BTreeMap<CampaignDay, Vec<DayEvent>>,
    active: Vec<Quest>,
    done:   Vec<Quest>,
}

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a journal from its persisted pieces. Empty event lists
    /// left behind by older data are dropped.
    pub fn from_parts(
        notes: BTreeMap<CampaignDay, String>,
        mut events: BTreeMap<CampaignDay, Vec<DayEvent>>,
        active: Vec<Quest>,
        done: Vec<Quest>,
    ) -> Self {
        events.retain(|_, list| !list.is_empty());
        Self {
            notes,
            events,
            active,
            done,
        }
    }

    // ── Notes ──────────────────────────────────────────────────

    /// Store `text` as the note for `day`, replacing any previous note.
    /// An empty string is stored as written, not treated as a delete.
    pub fn set_note(&mut self, day: CampaignDay, text: impl Into<String>) {
        self.notes.insert(day, text.into());
    }

    /// The note for `day`, or "" when none has been written.
    pub fn note(&self, day: CampaignDay) -> &str {
        self.notes.get(&day).map(String::as_str).unwrap_or("")
    }

    pub fn notes(&self) -> &BTreeMap<CampaignDay, String> {
        &self.notes
    }

    // ── Events ─────────────────────────────────────────────────

    /// Append an event to `day`. The text is trimmed first; an entry
    /// that is empty after trimming is rejected. An empty icon counts
    /// as no icon. Returns whether the event was added.
    pub fn add_event(&mut self, day: CampaignDay, text: &str, icon: Option<&str>) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }
        let icon = icon.filter(|icon| !icon.is_empty()).map(str::to_string);
        self.events.entry(day).or_default().push(DayEvent {
            text: text.to_string(),
            icon,
        });
        true
    }

    /// Remove the event at `index` within `day`, shifting later events
    /// down. Returns false when the day or index does not exist.
    pub fn remove_event(&mut self, day: CampaignDay, index: usize) -> bool {
        let Some(list) = self.events.get_mut(&day) else {
            return false;
        };
        if index >= list.len() {
            return false;
        }
        list.remove(index);
        if list.is_empty() {
            self.events.remove(&day);
        }
        true
    }

    /// Events scheduled on `day`, oldest first.
    pub fn events(&self, day: CampaignDay) -> &[DayEvent] {
        self.events.get(&day).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn day_events(&self) -> &BTreeMap<CampaignDay, Vec<DayEvent>> {
        &self.events
    }

    // ── Quests ─────────────────────────────────────────────────

    /// Add a quest to the active list. The text is trimmed first and
    /// an empty result is rejected. Returns whether it was added.
    pub fn add_quest(&mut self, text: &str, day: Option<CampaignDay>) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }
        self.active.push(Quest {
            text: text.to_string(),
            day,
        });
        true
    }

    /// Move the active quest at `index` to the end of the done list.
    pub fn complete_quest(&mut self, index: usize) -> bool {
        if index >= self.active.len() {
            return false;
        }
        let quest = self.active.remove(index);
        self.done.push(quest);
        true
    }

    /// Move the done quest at `index` back to the end of the active list.
    pub fn reopen_quest(&mut self, index: usize) -> bool {
        if index >= self.done.len() {
            return false;
        }
        let quest = self.done.remove(index);
        self.active.push(quest);
        true
    }

    /// Delete a quest from either list without transferring it.
    pub fn delete_quest(&mut self, list: QuestList, index: usize) -> bool {
        let list = match list {
            QuestList::Active => &mut self.active,
            QuestList::Done => &mut self.done,
        };
        if index >= list.len() {
            return false;
        }
        list.remove(index);
        true
    }

    pub fn active_quests(&self) -> &[Quest] {
        &self.active
    }

    pub fn done_quests(&self) -> &[Quest] {
        &self.done
    }
}
