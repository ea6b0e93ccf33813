// File: crates/interact-core/src/decoration.rs
// Summary: Renderer hook contract for hover/selection decorations; renderers draw, the core decides what.

use crate::controller::{ChartController, Rgba};
use crate::geometry::Point;
use crate::history::CandleRef;
use crate::host::ChartHost;
use crate::interaction::InteractionState;

/// Drawing capability supplied by a concrete renderer. Painters never mutate interaction state.
pub trait DecorationPainter {
    /// Crosshair guide line across the widget.
    fn draw_guide_line(&mut self, from: Point, to: Point, color: Rgba);
    fn draw_selected(&mut self, candle: CandleRef, location: Point);
    fn draw_hovered(&mut self, candle: CandleRef, location: Point);
}

/// Invoke `painter` for the current state: guide lines first, then the selection, then the hover.
pub fn paint_decorations<H, P>(
    state: &InteractionState,
    host: &H,
    controller: &ChartController,
    painter: &mut P,
) where
    H: ChartHost + ?Sized,
    P: DecorationPainter + ?Sized,
{
    let hovered = state.hover().and_then(|c| host.candle_location(c).map(|at| (c, at)));

    if let Some((_, at)) = hovered {
        let color = controller.selection_line_color;
        if controller.vertical_selection_line {
            painter.draw_guide_line(Point::new(at.x, 0), Point::new(at.x, host.height()), color);
        }
        if controller.horizontal_selection_line {
            painter.draw_guide_line(Point::new(0, at.y), Point::new(host.width(), at.y), color);
        }
    }

    if let Some(selected) = state.selection() {
        if let Some(at) = host.candle_location(selected) {
            painter.draw_selected(selected, at);
        }
    }
    if let Some((candle, at)) = hovered {
        painter.draw_hovered(candle, at);
    }
}
