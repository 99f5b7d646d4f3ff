//! campaign-core: state engine for a Barovian campaign tracker.
//!
//! Tracks the campaign calendar and its moon, per-day notes and
//! events, the quest board, dice, and the map viewport. Rendering and
//! input capture live in the embedding layer; this crate is the state
//! underneath, driven entirely through `Intent` values.

pub mod calendar;
pub mod dice;
pub mod engine;
pub mod error;
pub mod event;
pub mod intent;
pub mod journal;
pub mod moon;
pub mod store;
pub mod types;
pub mod view;
pub mod viewport;
