//! Viewport tests — pan, zoom, and the drag-vs-click gesture.

use campaign_core::viewport::{Gesture, Viewport, WheelDirection};

/// A press with no motion is a click: the view zooms to 2x centered on
/// the clicked point. Clicking (300, 200) in an 800x600 viewport gives
/// translate (400 - 600, 300 - 400) = (-200, -100).
#[test]
fn click_zooms_to_double_scale_centered_on_the_point() {
    let mut viewport = Viewport::new();
    viewport.press(300.0, 200.0);
    assert!(viewport.release(800.0, 600.0), "a click must change the transform");
    assert_eq!(viewport.scale(), 2.0);
    assert_eq!(viewport.translate(), (-200.0, -100.0));
    assert_eq!(viewport.gesture(), Gesture::Idle);
}

/// A second click anywhere returns to the identity view.
#[test]
fn second_click_resets_to_identity() {
    let mut viewport = Viewport::new();
    viewport.press(300.0, 200.0);
    viewport.release(800.0, 600.0);

    viewport.press(10.0, 10.0);
    assert!(viewport.release(800.0, 600.0));
    assert_eq!(viewport.scale(), 1.0);
    assert_eq!(viewport.translate(), (0.0, 0.0));
}

/// During a drag the translate follows the pointer so the grabbed
/// point stays under it; release changes nothing further.
#[test]
fn drag_pans_with_the_pointer() {
    let mut viewport = Viewport::new();
    viewport.press(10.0, 10.0);

    assert!(viewport.motion(30.0, 25.0));
    assert_eq!(viewport.translate(), (20.0, 15.0));
    assert_eq!(viewport.gesture(), Gesture::Dragging);

    assert!(viewport.motion(50.0, 40.0));
    assert_eq!(viewport.translate(), (40.0, 30.0));

    assert!(!viewport.release(800.0, 600.0), "drag release must not toggle zoom");
    assert_eq!(viewport.translate(), (40.0, 30.0));
    assert_eq!(viewport.scale(), 1.0);
}

/// Dragging with a zoom already applied starts from the zoomed offset,
/// not from zero.
#[test]
fn drag_composes_with_an_existing_zoom() {
    let mut viewport = Viewport::new();
    viewport.press(300.0, 200.0);
    viewport.release(800.0, 600.0); // 2x, translate (-200, -100)

    viewport.press(100.0, 100.0); // anchor = (300, 200)
    viewport.motion(110.0, 90.0);
    assert_eq!(viewport.translate(), (-190.0, -110.0));
    assert_eq!(viewport.scale(), 2.0);
}

/// The click toggle is suppressed after a drag, and the suppression
/// lasts exactly one gesture: the next clean click zooms again.
#[test]
fn click_suppression_after_a_drag_lasts_one_gesture() {
    let mut viewport = Viewport::new();
    viewport.press(50.0, 50.0);
    viewport.motion(60.0, 60.0);
    assert!(!viewport.release(800.0, 600.0));
    assert_eq!(viewport.scale(), 1.0, "drag must not zoom");

    viewport.press(50.0, 50.0);
    assert!(viewport.release(800.0, 600.0));
    assert_eq!(viewport.scale(), 2.0, "clean click right after a drag must zoom");
}

/// Wheel from identity at (100, 50): scale becomes 1.1 and translate
/// (-10, -5), keeping the content under the pointer fixed.
#[test]
fn wheel_zoom_keeps_the_pointer_fixed() {
    let mut viewport = Viewport::new();
    assert!(viewport.wheel(100.0, 50.0, WheelDirection::In));
    assert!((viewport.scale() - 1.1).abs() < 1e-12);

    let (tx, ty) = viewport.translate();
    assert!((tx + 10.0).abs() < 1e-9, "tx = {tx}");
    assert!((ty + 5.0).abs() < 1e-9, "ty = {ty}");
}

/// One notch in followed by one notch out restores the identity scale
/// (the factors are exact reciprocals).
#[test]
fn wheel_in_then_out_restores_the_scale() {
    let mut viewport = Viewport::new();
    viewport.wheel(100.0, 50.0, WheelDirection::In);
    viewport.wheel(100.0, 50.0, WheelDirection::Out);
    assert!((viewport.scale() - 1.0).abs() < 1e-12, "scale = {}", viewport.scale());
}

/// Repeated wheel-in pins the scale at 4.0, wheel-out at 0.5; at a
/// clamp boundary the transform stops moving entirely.
#[test]
fn wheel_scale_clamps_and_goes_quiet_at_the_limits() {
    let mut viewport = Viewport::new();
    for _ in 0..40 {
        viewport.wheel(100.0, 50.0, WheelDirection::In);
    }
    assert_eq!(viewport.scale(), 4.0);
    let frozen = viewport.translate();
    assert!(
        !viewport.wheel(100.0, 50.0, WheelDirection::In),
        "wheel-in at max scale must be a no-op"
    );
    assert_eq!(viewport.translate(), frozen, "translate must not creep at the clamp");

    for _ in 0..80 {
        viewport.wheel(100.0, 50.0, WheelDirection::Out);
    }
    assert_eq!(viewport.scale(), 0.5);
    assert!(!viewport.wheel(100.0, 50.0, WheelDirection::Out));
}

/// Motion and release with no press in flight are ignored.
#[test]
fn stray_motion_and_release_are_ignored() {
    let mut viewport = Viewport::new();
    assert!(!viewport.motion(50.0, 50.0));
    assert_eq!(viewport.translate(), (0.0, 0.0));
    assert!(!viewport.release(800.0, 600.0));
    assert_eq!(viewport.scale(), 1.0);
}

/// Reset drops both the transform and any gesture in flight, and the
/// CSS string renders the identity exactly.
#[test]
fn reset_returns_to_identity_and_cancels_gestures() {
    let mut viewport = Viewport::new();
    viewport.press(10.0, 10.0);
    viewport.motion(30.0, 30.0);
    viewport.wheel(100.0, 50.0, WheelDirection::In);

    viewport.reset();
    assert_eq!(viewport.scale(), 1.0);
    assert_eq!(viewport.translate(), (0.0, 0.0));
    assert_eq!(viewport.gesture(), Gesture::Idle);
    assert_eq!(viewport.css_transform(), "translate(0px, 0px) scale(1)");
}

/// The CSS string carries plain numbers: integral values render bare,
/// fractional values keep their digits.
#[test]
fn css_transform_renders_plain_numbers() {
    let mut viewport = Viewport::new();
    viewport.press(300.0, 200.0);
    viewport.release(800.0, 600.0);
    assert_eq!(viewport.css_transform(), "translate(-200px, -100px) scale(2)");
}
