// File: crates/interact-core/src/scale.rs
// Summary: Time (X) and value (Y) scale transforms with zoom/pan hooks, in integer pixels.

use crate::geometry::clamp;

pub const MIN_BAR_WIDTH: i32 = 2;
pub const MAX_BAR_WIDTH: i32 = 200;

/// Horizontal scale: every candle owns a slot of `bar_width` pixels in logical space,
/// and the viewport starts `scroll_offset` pixels into that space.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimeScale {
    pub scroll_offset: i32,
    pub bar_width: i32,
}

impl TimeScale {
    pub fn new(scroll_offset: i32, bar_width: i32) -> Self {
        Self {
            scroll_offset: scroll_offset.max(0),
            bar_width: clamp(bar_width, MIN_BAR_WIDTH, MAX_BAR_WIDTH),
        }
    }

    /// Widget pixel X to logical X (pixels from the first candle's slot).
    #[inline]
    pub fn to_logical_x(&self, px: i32) -> i32 {
        px.saturating_add(self.scroll_offset)
    }

    /// Index of the slot covering logical X. Slots are half-open: `[i*w, (i+1)*w)`.
    #[inline]
    pub fn index_at_logical_x(&self, logical_x: i32) -> Option<usize> {
        if logical_x < 0 {
            return None;
        }
        Some((logical_x / self.bar_width) as usize)
    }

    /// Screen X of the centre of slot `index`.
    pub fn center_px(&self, index: usize) -> i32 {
        let w = self.bar_width as i64;
        let px = index as i64 * w + w / 2 - self.scroll_offset as i64;
        px.clamp(i32::MIN as i64, i32::MAX as i64) as i32
    }

    /// Screen X of the left edge of slot `index`.
    pub fn left_px(&self, index: usize) -> i32 {
        self.center_px(index).saturating_sub(self.bar_width / 2)
    }

    /// Largest scroll offset that still keeps the last candle at the right edge.
    pub fn max_offset(&self, candles: usize, plot_width: i32) -> i32 {
        let content = candles as i64 * self.bar_width as i64;
        (content - plot_width.max(0) as i64).clamp(0, i32::MAX as i64) as i32
    }

    /// Drag by `dx_px`: dragging right reveals older candles.
    pub fn pan_px(&mut self, dx_px: i32, candles: usize, plot_width: i32) {
        let max = self.max_offset(candles, plot_width);
        self.scroll_offset = clamp(self.scroll_offset.saturating_sub(dx_px), 0, max);
    }

    /// Rescale bar width by `factor`, keeping the logical position under `cursor_px` fixed.
    pub fn zoom_at(&mut self, cursor_px: i32, factor: f32, candles: usize, plot_width: i32) {
        let anchor = self.to_logical_x(cursor_px) as f64 / self.bar_width as f64;
        let new_width = (self.bar_width as f32 * factor).round() as i32;
        self.bar_width = clamp(new_width, MIN_BAR_WIDTH, MAX_BAR_WIDTH);
        let offset = (anchor * self.bar_width as f64).round() as i64 - cursor_px as i64;
        let max = self.max_offset(candles, plot_width) as i64;
        self.scroll_offset = offset.clamp(0, max) as i32;
    }
}

impl Default for TimeScale {
    fn default() -> Self {
        Self::new(0, 8)
    }
}

/// Vertical value scale mapping a price range to [top, bottom] pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueScale {
    pub top_px: i32,
    pub bottom_px: i32,
    pub vmin: f64,
    pub vmax: f64,
}

impl ValueScale {
    pub fn new(top_px: i32, bottom_px: i32, vmin: f64, vmax: f64) -> Self {
        let mut s = Self { top_px, bottom_px, vmin, vmax };
        if (s.vmax - s.vmin).abs() < 1e-12 { s.vmax = s.vmin + 1.0; }
        s
    }

    #[inline]
    pub fn to_px(&self, y: f64) -> i32 {
        let span = (self.vmax - self.vmin).max(1e-12);
        let h = (self.bottom_px - self.top_px) as f64;
        (self.bottom_px as f64 - (y - self.vmin) / span * h).round() as i32
    }

    /// Fit to `[lo, hi]` with a fractional `margin` on both ends.
    pub fn fit(&mut self, lo: f64, hi: f64, margin: f64) {
        let m = (hi - lo).abs() * margin;
        *self = Self::new(self.top_px, self.bottom_px, lo - m, hi + m);
    }
}
