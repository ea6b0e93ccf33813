// File: crates/interact-core/src/view.rs
// Summary: Reference chart host: candle history + scales + plot geometry, with pan/zoom/autoscale.

use std::fmt;
use std::ops::Range;

use crate::geometry::{Point, PlotGeometry};
use crate::history::{Candle, CandleHistory, CandleRef};
use crate::host::ChartHost;
use crate::scale::{TimeScale, ValueScale};

/// Host-specific override for where hover resolution is switched off.
pub type DisabledRegion = Box<dyn Fn(Point) -> bool>;

pub struct ChartView {
    pub history: CandleHistory,
    pub time: TimeScale,
    pub values: ValueScale,
    geometry: PlotGeometry,
    disabled: Option<DisabledRegion>,
}

impl ChartView {
    /// New view scrolled to the most recent candles and autoscaled to them.
    pub fn new(history: CandleHistory, geometry: PlotGeometry, bar_width: i32) -> Self {
        let mut view = Self {
            history,
            time: TimeScale::new(0, bar_width),
            values: ValueScale::new(0, geometry.plot_bottom(), 0.0, 1.0),
            geometry,
            disabled: None,
        };
        view.scroll_to_end();
        view.autoscale_visible();
        view
    }

    /// Replace the default scrollbar-strip check with a host-provided predicate.
    pub fn with_disabled_region(mut self, region: impl Fn(Point) -> bool + 'static) -> Self {
        self.disabled = Some(Box::new(region));
        self
    }

    pub fn geometry(&self) -> PlotGeometry { self.geometry }

    pub fn candle(&self, candle: CandleRef) -> Option<&Candle> {
        self.history.get(candle)
    }

    pub fn resize(&mut self, width: i32, height: i32) {
        self.geometry = PlotGeometry::new(width, height, self.geometry.scroll_height);
        self.values.top_px = 0;
        self.values.bottom_px = self.geometry.plot_bottom();
        let max = self.max_scroll_offset();
        self.time.scroll_offset = self.time.scroll_offset.min(max);
    }

    pub fn max_scroll_offset(&self) -> i32 {
        self.time.max_offset(self.history.len(), self.geometry.width)
    }

    pub fn scroll_to_end(&mut self) {
        self.time.scroll_offset = self.max_scroll_offset();
    }

    /// Indices of candles whose slot intersects the plot width.
    pub fn visible_range(&self) -> Range<usize> {
        let w = self.time.bar_width as i64;
        let offset = self.time.scroll_offset as i64;
        let start = (offset / w) as usize;
        let end = ((offset + self.geometry.width as i64 + w - 1) / w) as usize;
        let end = end.min(self.history.len());
        start.min(end)..end
    }

    pub fn pan_px(&mut self, dx: i32) {
        self.time.pan_px(dx, self.history.len(), self.geometry.width);
    }

    pub fn zoom_at(&mut self, cursor_px: i32, factor: f32) {
        self.time.zoom_at(cursor_px, factor, self.history.len(), self.geometry.width);
        tracing::debug!(
            bar_width = self.time.bar_width,
            scroll_offset = self.time.scroll_offset,
            "zoomed time scale"
        );
    }

    /// Fit the value scale to the visible candles. Returns false when nothing is visible.
    pub fn autoscale_visible(&mut self) -> bool {
        match self.history.price_range(self.visible_range()) {
            Some((lo, hi)) => {
                self.values.fit(lo, hi, 0.02);
                true
            }
            None => false,
        }
    }
}

impl ChartHost for ChartView {
    fn pixel_to_logical_x(&self, px: i32) -> i32 {
        self.time.to_logical_x(px)
    }

    fn candle_at_logical_x(&self, logical_x: i32) -> Option<CandleRef> {
        self.time
            .index_at_logical_x(logical_x)
            .and_then(|i| self.history.candle_ref(i))
    }

    fn candle_location(&self, candle: CandleRef) -> Option<Point> {
        let c = self.history.get(candle)?;
        let x = self.time.center_px(candle.index());
        if x < 0 || x >= self.geometry.width {
            return None;
        }
        Some(Point::new(x, self.values.to_px(c.c)))
    }

    fn width(&self) -> i32 { self.geometry.width }
    fn height(&self) -> i32 { self.geometry.height }
    fn scroll_height(&self) -> i32 { self.geometry.scroll_height }

    fn is_in_disabled_region(&self, p: Point) -> bool {
        match &self.disabled {
            Some(region) => region(p),
            None => p.y >= self.geometry.plot_bottom(),
        }
    }
}

impl fmt::Debug for ChartView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChartView")
            .field("candles", &self.history.len())
            .field("time", &self.time)
            .field("values", &self.values)
            .field("geometry", &self.geometry)
            .field("custom_disabled_region", &self.disabled.is_some())
            .finish()
    }
}
