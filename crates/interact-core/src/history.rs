// File: crates/interact-core/src/history.rs
// Summary: Time-ordered candle store and the opaque candle references handed to the interaction core.

use std::ops::Range;

use chrono::{DateTime, Utc};

use crate::error::CandleError;

/// Smallest `t` treated as an epoch-seconds timestamp rather than a bar index (2001-09-09).
const EPOCH_SECONDS_FLOOR: f64 = 1.0e9;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Candle {
    pub t: f64, // open time (epoch seconds) or bar index
    pub o: f64,
    pub h: f64,
    pub l: f64,
    pub c: f64,
    pub v: f64,
}

impl Candle {
    /// Try to construct a candle enforcing OHLC invariants:
    /// l <= min(o,c) and h >= max(o,c), and l <= h.
    pub fn try_new(t: f64, o: f64, h: f64, l: f64, c: f64, v: f64) -> Result<Self, CandleError> {
        if ![t, o, h, l, c, v].iter().all(|x| x.is_finite()) {
            return Err(CandleError::NonFinite { t });
        }
        let lo = o.min(c);
        let hi = o.max(c);
        if l > lo { return Err(CandleError::LowAboveBody { low: l, body_low: lo }); }
        if h < hi { return Err(CandleError::HighBelowBody { high: h, body_high: hi }); }
        if l > h { return Err(CandleError::LowAboveHigh { low: l, high: h }); }
        Ok(Self { t, o, h, l, c, v })
    }

    pub fn is_bullish(&self) -> bool { self.c >= self.o }

    /// Open time as UTC, when `t` looks like epoch seconds.
    pub fn open_time(&self) -> Option<DateTime<Utc>> {
        if self.t < EPOCH_SECONDS_FLOOR {
            return None;
        }
        let secs = self.t.trunc() as i64;
        let nanos = ((self.t - self.t.trunc()) * 1e9) as u32;
        DateTime::from_timestamp(secs, nanos)
    }
}

/// Handle to one bar of a [`CandleHistory`]. Two refs are equal iff they denote the same bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CandleRef(usize);

impl CandleRef {
    pub const fn index(self) -> usize { self.0 }
}

/// Ordered, read-only (from the interaction core's view) sequence of candles.
#[derive(Clone, Debug, Default)]
pub struct CandleHistory {
    candles: Vec<Candle>,
}

impl CandleHistory {
    pub fn new(candles: Vec<Candle>) -> Self {
        Self { candles }
    }

    pub fn len(&self) -> usize { self.candles.len() }
    pub fn is_empty(&self) -> bool { self.candles.is_empty() }

    pub fn push(&mut self, candle: Candle) {
        self.candles.push(candle);
    }

    /// Reference to the bar at `index`, or `None` past either end.
    pub fn candle_ref(&self, index: usize) -> Option<CandleRef> {
        (index < self.candles.len()).then_some(CandleRef(index))
    }

    pub fn get(&self, candle: CandleRef) -> Option<&Candle> {
        self.candles.get(candle.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (CandleRef, &Candle)> {
        self.candles.iter().enumerate().map(|(i, c)| (CandleRef(i), c))
    }

    pub fn as_slice(&self) -> &[Candle] { &self.candles }

    /// Lowest low and highest high over `range` (clipped to the history).
    pub fn price_range(&self, range: Range<usize>) -> Option<(f64, f64)> {
        let end = range.end.min(self.candles.len());
        let start = range.start.min(end);
        self.candles[start..end].iter().fold(None, |acc, c| match acc {
            None => Some((c.l, c.h)),
            Some((lo, hi)) => Some((lo.min(c.l), hi.max(c.h))),
        })
    }
}

impl FromIterator<Candle> for CandleHistory {
    fn from_iter<I: IntoIterator<Item = Candle>>(iter: I) -> Self {
        Self { candles: iter.into_iter().collect() }
    }
}
