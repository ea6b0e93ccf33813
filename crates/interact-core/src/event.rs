// File: crates/interact-core/src/event.rs
// Summary: Ordered pointer event stream consumed by the interaction state machine.

use crate::geometry::Point;

/// Pointer event in widget-local pixels, delivered in arrival order on the UI thread.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEvent {
    Moved(Point),
    /// Move while the primary button is held.
    Dragged(Point),
    Pressed,
    Released,
    /// Press and release without travelling beyond the click slop.
    Clicked,
    Exited,
}
