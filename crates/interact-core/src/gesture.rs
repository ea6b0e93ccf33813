// File: crates/interact-core/src/gesture.rs
// Summary: Turns raw cursor/button input into moved/dragged/pressed/released/clicked/exited events.

use crate::event::PointerEvent;
use crate::geometry::Point;

/// Default click tolerance in pixels.
pub const DEFAULT_CLICK_SLOP: i32 = 3;

/// Tracks the primary button so hosts without native click events can tell a click from a drag.
#[derive(Clone, Debug)]
pub struct GestureTracker {
    click_slop: i32,
    button_down: bool,
    press_at: Option<Point>,
    last: Option<Point>,
    travelled: bool,
}

impl GestureTracker {
    pub fn new(click_slop: i32) -> Self {
        Self { click_slop: click_slop.max(0), button_down: false, press_at: None, last: None, travelled: false }
    }

    pub fn is_button_down(&self) -> bool { self.button_down }

    pub fn last_position(&self) -> Option<Point> { self.last }

    pub fn cursor_moved(&mut self, p: Point) -> PointerEvent {
        self.last = Some(p);
        if !self.button_down {
            return PointerEvent::Moved(p);
        }
        match self.press_at {
            Some(origin) if origin.chebyshev(p) > self.click_slop => self.travelled = true,
            Some(_) => {}
            // pressed before any position was known: anchor on the first drag sample
            None => self.press_at = Some(p),
        }
        PointerEvent::Dragged(p)
    }

    /// `None` when the button is already down (duplicate press).
    pub fn button_pressed(&mut self) -> Option<PointerEvent> {
        if self.button_down {
            return None;
        }
        self.button_down = true;
        self.press_at = self.last;
        self.travelled = false;
        Some(PointerEvent::Pressed)
    }

    /// `Released`, then `Clicked` when the press never left the slop box. Empty without a prior press.
    pub fn button_released(&mut self) -> Vec<PointerEvent> {
        if !self.button_down {
            return Vec::new();
        }
        self.button_down = false;
        self.press_at = None;
        let mut events = vec![PointerEvent::Released];
        if !self.travelled {
            events.push(PointerEvent::Clicked);
        }
        self.travelled = false;
        events
    }

    pub fn cursor_left(&mut self) -> PointerEvent {
        self.last = None;
        if self.button_down {
            self.travelled = true;
        }
        PointerEvent::Exited
    }
}

impl Default for GestureTracker {
    fn default() -> Self {
        Self::new(DEFAULT_CLICK_SLOP)
    }
}
