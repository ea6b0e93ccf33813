// File: crates/interact-core/src/host.rs
// Summary: Boundary between the interaction core and the widget that hosts it.

use crate::geometry::Point;
use crate::history::CandleRef;

/// Everything the resolver and state machine need from the hosting widget.
///
/// Implementations own scroll/zoom state and the candle store; the core only reads through
/// this trait and never mutates the host.
pub trait ChartHost {
    /// Widget pixel X to the logical X used for candle lookup.
    fn pixel_to_logical_x(&self, px: i32) -> i32;

    /// Candle whose time slot contains `logical_x`, over the current history window.
    fn candle_at_logical_x(&self, logical_x: i32) -> Option<CandleRef>;

    /// Screen anchor of a candle for decoration drawing, or `None` when it is off screen.
    fn candle_location(&self, candle: CandleRef) -> Option<Point>;

    fn width(&self) -> i32;
    fn height(&self) -> i32;

    /// Height of the bottom scrollbar strip.
    fn scroll_height(&self) -> i32;

    /// Region where pointer moves must not touch hover state.
    /// Defaults to the scrollbar strip `[height - scroll_height, height)` and everything below it.
    fn is_in_disabled_region(&self, p: Point) -> bool {
        p.y >= self.height() - self.scroll_height()
    }
}

impl<H: ChartHost + ?Sized> ChartHost for &H {
    fn pixel_to_logical_x(&self, px: i32) -> i32 { (**self).pixel_to_logical_x(px) }
    fn candle_at_logical_x(&self, logical_x: i32) -> Option<CandleRef> { (**self).candle_at_logical_x(logical_x) }
    fn candle_location(&self, candle: CandleRef) -> Option<Point> { (**self).candle_location(candle) }
    fn width(&self) -> i32 { (**self).width() }
    fn height(&self) -> i32 { (**self).height() }
    fn scroll_height(&self) -> i32 { (**self).scroll_height() }
    fn is_in_disabled_region(&self, p: Point) -> bool { (**self).is_in_disabled_region(p) }
}
