// File: crates/interact-core/src/geometry.rs
// Summary: Integer pixel geometry: pointer points, rects and the plot/scrollbar layout.

/// Widget-local pixel coordinate. Origin is top-left, y grows downward.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Chebyshev distance; used for click slop so diagonal jitter counts like straight jitter.
    pub fn chebyshev(self, other: Point) -> i32 {
        (self.x - other.x).abs().max((self.y - other.y).abs())
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RectI32 {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl RectI32 {
    pub const fn from_ltrb(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }
    pub const fn width(&self) -> i32 { self.right - self.left }
    pub const fn height(&self) -> i32 { self.bottom - self.top }
}

/// Widget size plus the height of the bottom scrollbar strip.
/// Contract: `scroll_height` is clamped into `0..=height`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlotGeometry {
    pub width: i32,
    pub height: i32,
    pub scroll_height: i32,
}

impl PlotGeometry {
    pub fn new(width: i32, height: i32, scroll_height: i32) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        Self { width, height, scroll_height: clamp(scroll_height, 0, height) }
    }

    /// First pixel row of the scrollbar strip.
    pub const fn plot_bottom(&self) -> i32 { self.height - self.scroll_height }

    pub const fn plot_rect(&self) -> RectI32 {
        RectI32::from_ltrb(0, 0, self.width, self.plot_bottom())
    }

    pub const fn scrollbar_rect(&self) -> RectI32 {
        RectI32::from_ltrb(0, self.plot_bottom(), self.width, self.height)
    }
}

impl Default for PlotGeometry {
    fn default() -> Self {
        Self::new(1024, 640, 16)
    }
}

#[inline]
pub fn clamp<T: PartialOrd>(v: T, lo: T, hi: T) -> T {
    if v < lo { lo } else if v > hi { hi } else { v }
}
