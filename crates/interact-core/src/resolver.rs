// File: crates/interact-core/src/resolver.rs
// Summary: Pure pointer-to-candle resolution over a chart host.

use crate::geometry::Point;
use crate::history::CandleRef;
use crate::host::ChartHost;

/// Outcome of resolving a pointer coordinate.
///
/// `Disabled` is distinct from `Miss`: a disabled coordinate must leave hover untouched,
/// while a miss means "no candle here" and clears it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolved {
    /// Coordinate lies in a disabled/overlay region (e.g. the scrollbar strip).
    Disabled,
    /// Coordinate is resolvable but no candle covers it.
    Miss,
    Hit(CandleRef),
}

impl Resolved {
    pub fn candle(self) -> Option<CandleRef> {
        match self {
            Resolved::Hit(c) => Some(c),
            Resolved::Disabled | Resolved::Miss => None,
        }
    }

    pub fn is_disabled(self) -> bool {
        matches!(self, Resolved::Disabled)
    }
}

#[inline]
pub fn is_in_disabled_region<H: ChartHost + ?Sized>(host: &H, point: Point) -> bool {
    host.is_in_disabled_region(point)
}

/// Map a widget-local pointer coordinate to the candle under it.
///
/// Any coordinate is accepted; out-of-range input resolves to `Miss`. The host's candle
/// lookup is not consulted for disabled coordinates.
pub fn resolve_candle_at<H: ChartHost + ?Sized>(host: &H, point: Point) -> Resolved {
    if host.is_in_disabled_region(point) {
        return Resolved::Disabled;
    }
    let logical_x = host.pixel_to_logical_x(point.x);
    match host.candle_at_logical_x(logical_x) {
        Some(candle) => Resolved::Hit(candle),
        None => Resolved::Miss,
    }
}
