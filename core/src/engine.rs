//! The campaign engine — one object owning the whole tracker state.
//!
//! RULES:
//!   - Every user action enters as an `Intent` through `dispatch`.
//!   - Dispatch is infallible. An intent that cannot apply (bad index,
//!     day out of range, zero-sided die) degrades to a silent no-op;
//!     nothing here returns an error or panics.
//!   - State mutates in memory first. Persistence follows, and a
//!     failed write is logged and swallowed — the in-memory state
//!     stays authoritative.
//!   - All randomness flows through the seeded `DiceRoller`.

use crate::{
    calendar::{Calendar, PhasePolicy, FIRST_DAY},
    dice::DiceRoller,
    error::TrackerResult,
    event::CampaignEvent,
    intent::Intent,
    journal::{DayEvent, Journal, QuestList},
    store::{self, SqliteStore, StateStore},
    types::CampaignDay,
    view::{CampaignView, DayCell, PhaseView},
    viewport::{Viewport, WheelDirection},
};
use serde::{de::DeserializeOwned, Serialize};
use std::collections::BTreeMap;

pub struct CampaignEngine {
    pub calendar: Calendar,
    pub journal:  Journal,
    pub viewport: Viewport,
    dice:  DiceRoller,
    store: Box<dyn StateStore>,
}

impl CampaignEngine {
    /// Build an engine over `store`, restoring whatever state it
    /// holds. Each field falls back to its default independently, and
    /// `dayEvents` recovers day by day, so one damaged entry never
    /// discards the rest.
    pub fn new(policy: PhasePolicy, seed: u64, store: Box<dyn StateStore>) -> Self {
        let day = load_day(store.as_ref(), policy);
        let journal = Journal::from_parts(
            read_json(store.as_ref(), store::KEY_DAY_NOTES),
            load_day_events(store.as_ref()),
            read_json(store.as_ref(), store::KEY_QUESTS),
            read_json(store.as_ref(), store::KEY_DONE_QUESTS),
        );
        log::debug!(
            "campaign restored: day {day}, {} active quests",
            journal.active_quests().len()
        );
        Self {
            calendar: Calendar::with_day(policy, day),
            journal,
            viewport: Viewport::new(),
            dice: DiceRoller::new(seed),
            store,
        }
    }

    /// Build an engine over a fresh in-memory database (used in tests).
    pub fn in_memory(policy: PhasePolicy, seed: u64) -> TrackerResult<Self> {
        let store = SqliteStore::in_memory()?;
        store.migrate()?;
        Ok(Self::new(policy, seed, Box::new(store)))
    }

    /// Apply one intent and return the notifications it produced.
    /// An empty vec means the intent was a no-op.
    pub fn dispatch(&mut self, intent: Intent) -> Vec<CampaignEvent> {
        match intent {
            Intent::AdvanceDay => self.advance_day(),
            Intent::RetreatDay => self.retreat_day(),
            Intent::JumpToDay { day } => self.jump_to_day(day),
            Intent::SetNote { day, text } => self.set_note(day, text),
            Intent::AddEvent { day, text, icon } => self.add_event(day, &text, icon.as_deref()),
            Intent::RemoveEvent { day, index } => self.remove_event(day, index),
            Intent::AddQuest { text, day } => self.add_quest(&text, day),
            Intent::CompleteQuest { index } => self.complete_quest(index),
            Intent::ReopenQuest { index } => self.reopen_quest(index),
            Intent::DeleteQuest { list, index } => self.delete_quest(list, index),
            Intent::RollDice { sides } => self.roll_dice(sides),
            Intent::MapPress { x, y } => self.map_press(x, y),
            Intent::MapMove { x, y } => self.map_move(x, y),
            Intent::MapRelease { width, height } => self.map_release(width, height),
            Intent::MapWheel { x, y, direction } => self.map_wheel(x, y, direction),
            Intent::CloseMap => self.close_map(),
        }
    }

    // ── Calendar ───────────────────────────────────────────────

    pub fn advance_day(&mut self) -> Vec<CampaignEvent> {
        self.calendar.advance_day();
        self.persist();
        vec![self.day_changed()]
    }

    pub fn retreat_day(&mut self) -> Vec<CampaignEvent> {
        self.calendar.retreat_day();
        self.persist();
        vec![self.day_changed()]
    }

    pub fn jump_to_day(&mut self, requested: i64) -> Vec<CampaignEvent> {
        if !self.calendar.jump_to_day(requested) {
            log::debug!(
                "ignoring jump to day {requested}: outside the {}-day cycle",
                self.calendar.cycle_length()
            );
            return Vec::new();
        }
        self.persist();
        vec![self.day_changed()]
    }

    // ── Notes and events ───────────────────────────────────────

    pub fn set_note(&mut self, day: CampaignDay, text: impl Into<String>) -> Vec<CampaignEvent> {
        self.journal.set_note(day, text);
        self.persist();
        vec![CampaignEvent::NoteSaved { day }]
    }

    pub fn add_event(
        &mut self,
        day: CampaignDay,
        text: &str,
        icon: Option<&str>,
    ) -> Vec<CampaignEvent> {
        if !self.journal.add_event(day, text, icon) {
            return Vec::new();
        }
        self.persist();
        vec![CampaignEvent::EventAdded {
            day,
            count: self.journal.events(day).len(),
        }]
    }

    pub fn remove_event(&mut self, day: CampaignDay, index: usize) -> Vec<CampaignEvent> {
        if !self.journal.remove_event(day, index) {
            return Vec::new();
        }
        self.persist();
        vec![CampaignEvent::EventRemoved {
            day,
            count: self.journal.events(day).len(),
        }]
    }

    // ── Quest board ────────────────────────────────────────────

    pub fn add_quest(&mut self, text: &str, day: Option<i64>) -> Vec<CampaignEvent> {
        // A nonsense day on an otherwise good quest is dropped, not fatal.
        let day = day
            .and_then(|raw| CampaignDay::try_from(raw).ok())
            .filter(|day| self.calendar.policy().contains(*day));
        if !self.journal.add_quest(text, day) {
            return Vec::new();
        }
        self.persist();
        vec![CampaignEvent::QuestAdded { day }]
    }

    pub fn complete_quest(&mut self, index: usize) -> Vec<CampaignEvent> {
        if !self.journal.complete_quest(index) {
            return Vec::new();
        }
        self.persist();
        vec![CampaignEvent::QuestCompleted { index }]
    }

    pub fn reopen_quest(&mut self, index: usize) -> Vec<CampaignEvent> {
        if !self.journal.reopen_quest(index) {
            return Vec::new();
        }
        self.persist();
        vec![CampaignEvent::QuestReopened { index }]
    }

    pub fn delete_quest(&mut self, list: QuestList, index: usize) -> Vec<CampaignEvent> {
        if !self.journal.delete_quest(list, index) {
            return Vec::new();
        }
        self.persist();
        vec![CampaignEvent::QuestDeleted { list }]
    }

    // ── Dice ───────────────────────────────────────────────────

    /// Rolls are ephemeral: nothing is persisted.
    pub fn roll_dice(&mut self, sides: u32) -> Vec<CampaignEvent> {
        if sides == 0 {
            return Vec::new();
        }
        let result = self.dice.roll(sides);
        vec![CampaignEvent::DiceRolled { sides, result }]
    }

    // ── Map viewport ───────────────────────────────────────────

    pub fn map_press(&mut self, x: f64, y: f64) -> Vec<CampaignEvent> {
        self.viewport.press(x, y);
        Vec::new()
    }

    pub fn map_move(&mut self, x: f64, y: f64) -> Vec<CampaignEvent> {
        if self.viewport.motion(x, y) {
            vec![self.viewport_changed()]
        } else {
            Vec::new()
        }
    }

    pub fn map_release(&mut self, width: f64, height: f64) -> Vec<CampaignEvent> {
        if self.viewport.release(width, height) {
            vec![self.viewport_changed()]
        } else {
            Vec::new()
        }
    }

    pub fn map_wheel(&mut self, x: f64, y: f64, direction: WheelDirection) -> Vec<CampaignEvent> {
        if self.viewport.wheel(x, y, direction) {
            vec![self.viewport_changed()]
        } else {
            Vec::new()
        }
    }

    pub fn close_map(&mut self) -> Vec<CampaignEvent> {
        self.viewport.reset();
        vec![CampaignEvent::ViewportReset]
    }

    // ── View ───────────────────────────────────────────────────

    /// Project the state for rendering, with the notes panel opened
    /// on the current day.
    pub fn view(&self) -> CampaignView {
        self.view_for(self.calendar.current())
    }

    /// Same as `view`, but with the notes panel opened on `open_day`.
    pub fn view_for(&self, open_day: CampaignDay) -> CampaignView {
        let current = self.calendar.current();
        let cycle = self
            .calendar
            .days()
            .map(|day| {
                let phase = self.calendar.phase_for(day);
                DayCell {
                    day,
                    moon_name: phase.name(),
                    moon_tag: phase.visual_tag(),
                    is_current: day == current,
                    events: self
                        .journal
                        .events(day)
                        .iter()
                        .map(DayEvent::label)
                        .collect(),
                }
            })
            .collect();
        CampaignView {
            day: current,
            phase: PhaseView::from(self.calendar.current_phase()),
            cycle,
            note: self.journal.note(open_day).to_string(),
            quests: self.journal.active_quests().to_vec(),
            done_quests: self.journal.done_quests().to_vec(),
            map_transform: self.viewport.css_transform(),
        }
    }

    // ── Persistence ────────────────────────────────────────────

    /// Write the full campaign state through the store. One code path
    /// for every mutation, mirroring how the original files were laid
    /// out: five keys, written together.
    fn persist(&self) {
        self.put_field(store::KEY_CAMPAIGN_DAY, &self.calendar.current().to_string());
        self.put_json(store::KEY_DAY_NOTES, self.journal.notes());
        self.put_json(store::KEY_DAY_EVENTS, self.journal.day_events());
        self.put_json(store::KEY_QUESTS, self.journal.active_quests());
        self.put_json(store::KEY_DONE_QUESTS, self.journal.done_quests());
    }

    fn put_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
        match serde_json::to_string(value) {
            Ok(json) => self.put_field(key, &json),
            Err(err) => log::warn!("cannot serialize '{key}': {err}"),
        }
    }

    fn put_field(&self, key: &str, value: &str) {
        if let Err(err) = self.store.put(key, value) {
            log::warn!("state write failed for '{key}': {err}; in-memory state kept");
        }
    }

    fn day_changed(&self) -> CampaignEvent {
        CampaignEvent::DayChanged {
            day:   self.calendar.current(),
            phase: self.calendar.current_phase(),
        }
    }

    fn viewport_changed(&self) -> CampaignEvent {
        CampaignEvent::ViewportChanged {
            transform: self.viewport.css_transform(),
        }
    }
}

// ── Startup loading ────────────────────────────────────────────

fn load_day(store: &dyn StateStore, policy: PhasePolicy) -> CampaignDay {
    let Some(raw) = read_field(store, store::KEY_CAMPAIGN_DAY) else {
        return FIRST_DAY;
    };
    match raw.trim().parse::<CampaignDay>() {
        Ok(day) if policy.contains(day) => day,
        _ => {
            log::warn!("discarding persisted day {raw:?}; starting at day 1");
            FIRST_DAY
        }
    }
}

/// `dayEvents` loads day by day: entries that still parse keep their
/// events, and a damaged entry costs that day alone.
fn load_day_events(store: &dyn StateStore) -> BTreeMap<CampaignDay, Vec<DayEvent>> {
    let Some(raw) = read_field(store, store::KEY_DAY_EVENTS) else {
        return BTreeMap::new();
    };
    let parsed: BTreeMap<String, serde_json::Value> = match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(err) => {
            log::warn!("discarding malformed '{}': {err}", store::KEY_DAY_EVENTS);
            return BTreeMap::new();
        }
    };
    let mut events = BTreeMap::new();
    for (key, value) in parsed {
        let Ok(day) = key.parse::<CampaignDay>() else {
            log::warn!(
                "dropping key {key:?} from '{}': not a day number",
                store::KEY_DAY_EVENTS
            );
            continue;
        };
        match serde_json::from_value::<Vec<DayEvent>>(value) {
            Ok(list) => {
                events.insert(day, list);
            }
            Err(err) => log::warn!("dropping day {day} from '{}': {err}", store::KEY_DAY_EVENTS),
        }
    }
    events
}

fn read_json<T: DeserializeOwned + Default>(store: &dyn StateStore, key: &str) -> T {
    let Some(raw) = read_field(store, key) else {
        return T::default();
    };
    match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(err) => {
            log::warn!("discarding malformed '{key}': {err}");
            T::default()
        }
    }
}

fn read_field(store: &dyn StateStore, key: &str) -> Option<String> {
    match store.get(key) {
        Ok(value) => value,
        Err(err) => {
            log::warn!("state read failed for '{key}': {err}; using default");
            None
        }
    }
}
