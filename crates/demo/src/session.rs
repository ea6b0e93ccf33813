// File: crates/demo/src/session.rs
// Summary: Drives raw host input through the gesture tracker and state machine, panning the view on chart drags.

use anyhow::Result;
use interact_core::{ChartController, ChartView, GestureTracker, InteractionState, Point, PointerEvent};

/// Raw input as a windowing system reports it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RawInput {
    CursorMoved(i32, i32),
    ButtonDown,
    ButtonUp,
    CursorLeft,
}

/// Host-side glue: owns the view, the interaction state and the gesture tracker.
pub struct Session {
    pub view: ChartView,
    pub state: InteractionState,
    gestures: GestureTracker,
    last_drag: Option<Point>,
}

impl Session {
    pub fn new(view: ChartView, controller: &ChartController) -> Self {
        Self {
            view,
            state: InteractionState::new(),
            gestures: GestureTracker::new(controller.click_slop),
            last_drag: None,
        }
    }

    /// Feed one raw input. Returns true when the frame must be redrawn.
    pub fn input(&mut self, raw: RawInput) -> bool {
        let events: Vec<PointerEvent> = match raw {
            RawInput::CursorMoved(x, y) => vec![self.gestures.cursor_moved(Point::new(x, y))],
            RawInput::ButtonDown => self.gestures.button_pressed().into_iter().collect(),
            RawInput::ButtonUp => self.gestures.button_released(),
            RawInput::CursorLeft => vec![self.gestures.cursor_left()],
        };
        events.into_iter().fold(false, |redraw, ev| self.dispatch(ev) || redraw)
    }

    /// Zoom the time scale around the pointer. False when the pointer is outside the widget.
    pub fn zoom(&mut self, factor: f32) -> bool {
        let Some(p) = self.state.pointer() else { return false };
        self.view.zoom_at(p.x, factor);
        self.view.autoscale_visible();
        true
    }

    pub fn resize(&mut self, width: i32, height: i32) {
        self.view.resize(width, height);
        self.view.autoscale_visible();
    }

    fn dispatch(&mut self, event: PointerEvent) -> bool {
        // handle first so the drag guard sees this event's pointer, not the previous one
        let repaint = self.state.handle(&self.view, event);
        let panned = match event {
            PointerEvent::Dragged(p) => {
                let panned = self.pan_towards(p);
                if panned {
                    // re-resolve hover against the scrolled view
                    let _ = self.state.handle(&self.view, event);
                }
                panned
            }
            _ => {
                self.last_drag = None;
                false
            }
        };
        tracing::info!(
            ?event,
            hover = ?self.state.hover().map(|c| c.index()),
            selection = ?self.state.selection().map(|c| c.index()),
            dragging_chart = self.state.is_dragging_chart(&self.view),
            repaint = repaint.is_needed(),
            "handled pointer event"
        );
        repaint.is_needed() || panned
    }

    fn pan_towards(&mut self, p: Point) -> bool {
        let prev = self.last_drag.replace(p);
        if !self.state.is_dragging_chart(&self.view) {
            return false;
        }
        let Some(prev) = prev else { return false };
        let before = self.view.time.scroll_offset;
        self.view.pan_px(p.x - prev.x);
        let moved = self.view.time.scroll_offset != before;
        if moved {
            self.view.autoscale_visible();
        }
        moved
    }
}

/// Hover and click a candle, drag the chart, drag on the scrollbar strip, click a candle again, leave.
pub fn demo_script(width: i32, height: i32, scroll_height: i32) -> Vec<RawInput> {
    let mid_y = (height - scroll_height) / 2;
    let strip_y = height - scroll_height / 2 - 1;
    let x0 = width * 2 / 3;
    vec![
        RawInput::CursorMoved(x0, mid_y),
        RawInput::CursorMoved(x0 + 1, mid_y + 5),
        RawInput::ButtonDown,
        RawInput::ButtonUp,
        RawInput::CursorMoved(x0 - 40, mid_y),
        RawInput::ButtonDown,
        RawInput::CursorMoved(x0 - 10, mid_y),
        RawInput::CursorMoved(x0 + 60, mid_y),
        RawInput::ButtonUp,
        RawInput::CursorMoved(x0, strip_y),
        RawInput::ButtonDown,
        RawInput::CursorMoved(x0 + 80, strip_y),
        RawInput::ButtonUp,
        RawInput::CursorMoved(x0, mid_y),
        RawInput::ButtonDown,
        RawInput::ButtonUp,
        RawInput::CursorLeft,
    ]
}

/// Replay `script`, calling `on_frame(step, session)` after every input that needs a redraw.
pub fn replay<F>(session: &mut Session, script: &[RawInput], mut on_frame: F) -> Result<usize>
where
    F: FnMut(usize, &Session) -> Result<()>,
{
    let mut frames = 0;
    for (step, &raw) in script.iter().enumerate() {
        if session.input(raw) {
            on_frame(step, session)?;
            frames += 1;
        }
    }
    Ok(frames)
}
