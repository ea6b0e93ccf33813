// File: crates/interact-core/tests/common/mod.rs
// Purpose: Scripted chart host shared by the integration tests.

#![allow(dead_code)]

use std::cell::Cell;

use interact_core::{Candle, CandleHistory, CandleRef, ChartHost, Point};

pub fn candles(n: usize) -> CandleHistory {
    (0..n)
        .map(|i| {
            let o = 100.0 + i as f64;
            Candle { t: i as f64, o, h: o + 2.0, l: o - 2.0, c: o + 1.0, v: 10.0 }
        })
        .collect()
}

/// Host with one candle per `bar_width` pixels, a scroll offset and a bottom scrollbar strip.
/// Counts candle lookups so tests can assert none happen for disabled coordinates.
pub struct ScriptedHost {
    pub history: CandleHistory,
    pub width: i32,
    pub height: i32,
    pub scroll_height: i32,
    pub bar_width: i32,
    pub offset: i32,
    pub lookups: Cell<usize>,
}

impl ScriptedHost {
    pub fn new(n: usize) -> Self {
        Self {
            history: candles(n),
            width: 800,
            height: 400,
            scroll_height: 20,
            bar_width: 1,
            offset: 0,
            lookups: Cell::new(0),
        }
    }

    pub fn candle(&self, index: usize) -> CandleRef {
        self.history.candle_ref(index).expect("index in range")
    }
}

impl ChartHost for ScriptedHost {
    fn pixel_to_logical_x(&self, px: i32) -> i32 {
        px + self.offset
    }

    fn candle_at_logical_x(&self, logical_x: i32) -> Option<CandleRef> {
        self.lookups.set(self.lookups.get() + 1);
        if logical_x < 0 {
            return None;
        }
        self.history.candle_ref((logical_x / self.bar_width) as usize)
    }

    fn candle_location(&self, candle: CandleRef) -> Option<Point> {
        let x = candle.index() as i32 * self.bar_width - self.offset;
        (0..self.width).contains(&x).then(|| Point::new(x, 50))
    }

    fn width(&self) -> i32 { self.width }
    fn height(&self) -> i32 { self.height }
    fn scroll_height(&self) -> i32 { self.scroll_height }
}
