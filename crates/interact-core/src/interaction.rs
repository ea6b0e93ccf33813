// File: crates/interact-core/src/interaction.rs
// Summary: Hover/selection/drag state machine driven by the ordered pointer event stream.

use crate::event::PointerEvent;
use crate::geometry::Point;
use crate::history::CandleRef;
use crate::host::ChartHost;
use crate::resolver::resolve_candle_at;

/// Whether the host must redraw after an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use]
pub enum Repaint {
    Needed,
    Skip,
}

impl Repaint {
    pub fn is_needed(self) -> bool {
        matches!(self, Repaint::Needed)
    }

    fn when(changed: bool) -> Self {
        if changed { Repaint::Needed } else { Repaint::Skip }
    }
}

/// Interaction state owned by the host widget and updated through [`InteractionState::handle`].
///
/// Hover and selection are independent: selection only changes on click and survives
/// hover changes and drags.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InteractionState {
    hover: Option<CandleRef>,
    selection: Option<CandleRef>,
    dragging: bool,
    pointer: Option<Point>,
}

impl InteractionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one event. Returns `Repaint::Needed` iff hover, selection or the drag flag changed.
    pub fn handle<H: ChartHost + ?Sized>(&mut self, host: &H, event: PointerEvent) -> Repaint {
        let before = self.decorations();
        match event {
            PointerEvent::Pressed => self.dragging = true,
            PointerEvent::Released => self.dragging = false,
            PointerEvent::Dragged(p) => {
                self.dragging = true;
                self.pointer_moved(host, p);
            }
            PointerEvent::Moved(p) => self.pointer_moved(host, p),
            // hover is kept until the next move recomputes it
            PointerEvent::Exited => self.pointer = None,
            PointerEvent::Clicked => {
                self.dragging = false;
                self.toggle_selection();
            }
        }
        let repaint = Repaint::when(self.decorations() != before);
        tracing::trace!(
            ?event,
            hover = ?self.hover,
            selection = ?self.selection,
            dragging = self.dragging,
            ?repaint,
            "pointer event"
        );
        repaint
    }

    /// Candle under the pointer as of the last resolvable move.
    pub fn hover(&self) -> Option<CandleRef> { self.hover }

    pub fn selection(&self) -> Option<CandleRef> { self.selection }

    pub fn pointer(&self) -> Option<Point> { self.pointer }

    /// Raw drag flag: button pressed (or dragged) and not yet released/clicked.
    pub fn is_dragging(&self) -> bool { self.dragging }

    /// Dragging the chart body, as opposed to the scrollbar strip below it.
    pub fn is_dragging_chart<H: ChartHost + ?Sized>(&self, host: &H) -> bool {
        self.dragging
            && self
                .pointer
                .is_some_and(|p| p.y < host.height() - host.scroll_height())
    }

    fn decorations(&self) -> (Option<CandleRef>, Option<CandleRef>, bool) {
        (self.hover, self.selection, self.dragging)
    }

    fn pointer_moved<H: ChartHost + ?Sized>(&mut self, host: &H, p: Point) {
        // tracked even over the strip so the drag guard sees where the pointer is
        self.pointer = Some(p);
        let resolved = resolve_candle_at(host, p);
        if !resolved.is_disabled() {
            self.hover = resolved.candle();
        }
    }

    fn toggle_selection(&mut self) {
        let current = self.hover;
        let next = if current != self.selection { current } else { None };
        if next != self.selection {
            tracing::debug!(from = ?self.selection, to = ?next, "selection changed");
            self.selection = next;
        }
    }
}
