//! Map viewport — the pan/zoom transform and the drag-vs-click gesture.
//!
//! The transform is `translate(tx, ty) scale(s)` applied in that order,
//! so a content point `p` lands on screen at `p * s + t`. All the
//! anchor math below follows from keeping a chosen point fixed under
//! that mapping while `s` changes.
//!
//! A press starts a gesture but decides nothing. The decision falls at
//! release: any motion in between makes it a drag (the pan was already
//! applied move by move, release itself changes nothing), no motion at
//! all makes it a click, which toggles zoom at the pressed point.

use serde::{Deserialize, Serialize};

pub const MIN_SCALE: f64 = 0.5;
pub const MAX_SCALE: f64 = 4.0;

/// Scale applied by a click when the view is at rest.
pub const CLICK_ZOOM_SCALE: f64 = 2.0;

/// Multiplicative step per wheel notch.
pub const WHEEL_STEP: f64 = 1.1;

/// Where the current gesture stands between press and release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    Idle,
    Pressed,
    Dragging,
}

/// Wheel notch direction, as reported by the input source.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WheelDirection {
    In,
    Out,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    scale:       f64,
    translate_x: f64,
    translate_y: f64,
    gesture:     Gesture,
    // Pointer position minus translate, captured at press. Panning to
    // pointer p sets translate = p - anchor.
    anchor_x: f64,
    anchor_y: f64,
    // Raw press position, the zoom target if the gesture ends as a click.
    press_x: f64,
    press_y: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            scale:       1.0,
            translate_x: 0.0,
            translate_y: 0.0,
            gesture:     Gesture::Idle,
            anchor_x:    0.0,
            anchor_y:    0.0,
            press_x:     0.0,
            press_y:     0.0,
        }
    }
}

impl Viewport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn translate(&self) -> (f64, f64) {
        (self.translate_x, self.translate_y)
    }

    pub fn gesture(&self) -> Gesture {
        self.gesture
    }

    /// Begin a gesture at pointer position (x, y). A press while a
    /// gesture is already open simply restarts it.
    pub fn press(&mut self, x: f64, y: f64) {
        self.gesture = Gesture::Pressed;
        self.anchor_x = x - self.translate_x;
        self.anchor_y = y - self.translate_y;
        self.press_x = x;
        self.press_y = y;
    }

    /// Pointer motion. Outside a gesture this is ignored; inside one it
    /// commits the gesture to a drag and pans so the anchor stays under
    /// the pointer. Returns whether the transform changed.
    pub fn motion(&mut self, x: f64, y: f64) -> bool {
        if self.gesture == Gesture::Idle {
            return false;
        }
        self.gesture = Gesture::Dragging;
        let new_x = x - self.anchor_x;
        let new_y = y - self.anchor_y;
        let changed = new_x != self.translate_x || new_y != self.translate_y;
        self.translate_x = new_x;
        self.translate_y = new_y;
        changed
    }

    /// End the gesture. A drag is already fully applied, so only the
    /// click path (no motion since press) changes the transform, by
    /// toggling zoom at the pressed point. `width` and `height` are
    /// the viewport dimensions the click centers against. Returns
    /// whether the transform changed.
    pub fn release(&mut self, width: f64, height: f64) -> bool {
        let was = self.gesture;
        self.gesture = Gesture::Idle;
        match was {
            Gesture::Pressed => {
                self.toggle_zoom_at(self.press_x, self.press_y, width, height);
                true
            }
            Gesture::Dragging | Gesture::Idle => false,
        }
    }

    /// A click toggles between the identity view and a fixed 2x zoom
    /// centered on the clicked point.
    fn toggle_zoom_at(&mut self, x: f64, y: f64, width: f64, height: f64) {
        if self.scale != 1.0 {
            self.scale = 1.0;
            self.translate_x = 0.0;
            self.translate_y = 0.0;
        } else {
            self.scale = CLICK_ZOOM_SCALE;
            self.translate_x = width / 2.0 - x * CLICK_ZOOM_SCALE;
            self.translate_y = height / 2.0 - y * CLICK_ZOOM_SCALE;
        }
    }

    /// Zoom one wheel notch toward or away from pointer position
    /// (x, y), keeping the content under the pointer fixed. The scale
    /// is clamped to [MIN_SCALE, MAX_SCALE]; at the clamp boundary
    /// nothing moves. Returns whether the transform changed.
    pub fn wheel(&mut self, x: f64, y: f64, direction: WheelDirection) -> bool {
        let factor = match direction {
            WheelDirection::In => WHEEL_STEP,
            WheelDirection::Out => 1.0 / WHEEL_STEP,
        };
        let new_scale = (self.scale * factor).clamp(MIN_SCALE, MAX_SCALE);
        if new_scale == self.scale {
            return false;
        }
        let ratio = new_scale / self.scale;
        self.translate_x = x - (x - self.translate_x) * ratio;
        self.translate_y = y - (y - self.translate_y) * ratio;
        self.scale = new_scale;
        true
    }

    /// Back to the identity view, dropping any gesture in flight.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// The transform as a CSS `transform` value.
    pub fn css_transform(&self) -> String {
        format!(
            "translate({}px, {}px) scale({})",
            self.translate_x, self.translate_y, self.scale
        )
    }
}
