//! Calendar tests — day stepping, jumps, and both phase rules.

use campaign_core::calendar::{Calendar, PhasePolicy};
use campaign_core::moon::MoonPhase;

const BOTH: [PhasePolicy; 2] = [PhasePolicy::DiscreteAnchor, PhasePolicy::ContinuousModulo];

/// The 28-day schedule pins its anchors: new moon on days 1 and 15,
/// full moon on days 8 and 22.
#[test]
fn discrete_schedule_hits_the_anchor_days() {
    let policy = PhasePolicy::DiscreteAnchor;
    assert_eq!(policy.phase_for(1), MoonPhase::New);
    assert_eq!(policy.phase_for(15), MoonPhase::New);
    assert_eq!(policy.phase_for(8), MoonPhase::Full);
    assert_eq!(policy.phase_for(22), MoonPhase::Full);
    assert_eq!(policy.phase_for(1).name(), "New Moon");
    assert_eq!(policy.phase_for(8).name(), "Full Moon");
}

/// Between the anchors the phases fill two-day blocks, waxing toward
/// each full moon and waning back toward each new moon.
#[test]
fn discrete_schedule_fills_the_blocks_between_anchors() {
    let policy = PhasePolicy::DiscreteAnchor;
    let blocks: &[(&[u32], MoonPhase)] = &[
        (&[2, 3, 16, 17], MoonPhase::WaxingCrescent),
        (&[4, 5, 18, 19], MoonPhase::FirstQuarter),
        (&[6, 7, 20, 21], MoonPhase::WaxingGibbous),
        (&[9, 10, 23, 24], MoonPhase::WaningGibbous),
        (&[11, 12, 25, 26], MoonPhase::LastQuarter),
        (&[13, 14, 27, 28], MoonPhase::WaningCrescent),
    ];
    for (days, phase) in blocks {
        for day in days.iter() {
            assert_eq!(policy.phase_for(*day), *phase, "wrong phase on day {day}");
        }
    }
}

/// The continuous rule reduces the day modulo 29.53 and splits the
/// result into eight equal bands: day 1 is still new, day 15 full,
/// day 29 lands in the final waning band.
#[test]
fn continuous_rule_lands_in_the_expected_bands() {
    let policy = PhasePolicy::ContinuousModulo;
    assert_eq!(policy.cycle_length(), 29);
    assert_eq!(policy.phase_for(1), MoonPhase::New);
    assert_eq!(policy.phase_for(15), MoonPhase::Full);
    assert_eq!(policy.phase_for(29), MoonPhase::WaningCrescent);
}

/// Phase derivation is a pure function of the day: asking twice gives
/// the same index, and the index never leaves 0..=7, under both rules.
#[test]
fn phase_derivation_is_stable_and_in_range() {
    for policy in BOTH {
        for day in 1..=policy.cycle_length() {
            assert_eq!(policy.phase_index(day), policy.phase_index(day));
            assert!(policy.phase_index(day) < 8, "index out of range on day {day}");
        }
    }
}

/// Advancing from the last day wraps to day 1; retreating from day 1
/// wraps to the last day (28 or 29 depending on the rule).
#[test]
fn advance_and_retreat_wrap_at_the_cycle_edges() {
    for policy in BOTH {
        let len = policy.cycle_length();
        let mut calendar = Calendar::with_day(policy, len);
        assert_eq!(calendar.advance_day(), 1, "wrap forward from day {len}");
        assert_eq!(calendar.retreat_day(), len, "wrap backward from day 1");
    }
}

/// One step forward then one step back lands on the starting day, and
/// the other way around, from every day of the cycle.
#[test]
fn advance_and_retreat_are_inverses_everywhere() {
    for policy in BOTH {
        for day in 1..=policy.cycle_length() {
            let mut calendar = Calendar::with_day(policy, day);
            calendar.advance_day();
            calendar.retreat_day();
            assert_eq!(calendar.current(), day, "advance/retreat failed from day {day}");

            calendar.retreat_day();
            calendar.advance_day();
            assert_eq!(calendar.current(), day, "retreat/advance failed from day {day}");
        }
    }
}

/// The discrete rule accepts only days already inside 1..=28. Day 0,
/// day 29, and negative days leave the calendar untouched.
#[test]
fn discrete_jump_rejects_days_outside_the_cycle() {
    let mut calendar = Calendar::with_day(PhasePolicy::DiscreteAnchor, 10);
    for requested in [0i64, 29, -1, 1_000_000, i64::MIN, i64::MAX] {
        assert!(
            !calendar.jump_to_day(requested),
            "jump to {requested} should be rejected"
        );
        assert_eq!(calendar.current(), 10);
    }
    assert!(calendar.jump_to_day(28));
    assert_eq!(calendar.current(), 28);
}

/// The continuous rule wraps any integer into 1..=29: day 30 becomes
/// day 1, day 0 becomes day 29, day -1 becomes day 28.
#[test]
fn continuous_jump_wraps_any_integer() {
    let mut calendar = Calendar::new(PhasePolicy::ContinuousModulo);
    assert!(calendar.jump_to_day(30));
    assert_eq!(calendar.current(), 1);
    assert!(calendar.jump_to_day(0));
    assert_eq!(calendar.current(), 29);
    assert!(calendar.jump_to_day(-1));
    assert_eq!(calendar.current(), 28);
    assert!(calendar.jump_to_day(60));
    assert_eq!(calendar.current(), 2);
}

/// The continuous wrap stays total at the integer extremes.
/// -2^63 lands on day 17 and 2^63 - 1 on day 11 of the 29-day cycle.
#[test]
fn continuous_jump_wraps_the_integer_extremes() {
    let policy = PhasePolicy::ContinuousModulo;
    assert_eq!(policy.jump_target(i64::MIN), Some(17));
    assert_eq!(policy.jump_target(i64::MAX), Some(11));

    let mut calendar = Calendar::new(policy);
    assert!(calendar.jump_to_day(i64::MIN));
    assert_eq!(calendar.current(), 17);
    assert!(calendar.jump_to_day(i64::MAX));
    assert_eq!(calendar.current(), 11);
}

/// A starting day outside the cycle falls back to day 1.
#[test]
fn out_of_cycle_start_falls_back_to_day_one() {
    let calendar = Calendar::with_day(PhasePolicy::DiscreteAnchor, 99);
    assert_eq!(calendar.current(), 1);
    let calendar = Calendar::with_day(PhasePolicy::DiscreteAnchor, 0);
    assert_eq!(calendar.current(), 1);
}
