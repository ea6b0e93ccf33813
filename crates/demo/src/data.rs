// File: crates/demo/src/data.rs
// Summary: OHLC CSV loading (header aliases, epoch/date parsing) and a synthetic fallback history.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use interact_core::{Candle, CandleHistory};

/// Resolve path, trying .csv/.cvs swap if needed.
pub fn resolve_path(raw: &str) -> Result<PathBuf> {
    let p = Path::new(raw);
    if p.exists() {
        return Ok(p.to_path_buf());
    }
    if let Some(alt) = swap_ext(p).filter(|alt| alt.exists()) {
        tracing::info!(requested = %p.display(), using = %alt.display(), "extension swapped between .csv/.cvs");
        return Ok(alt);
    }
    anyhow::bail!("file not found: {}", p.display());
}

fn swap_ext(p: &Path) -> Option<PathBuf> {
    let ext = p.extension()?.to_string_lossy().to_lowercase();
    let other = match ext.as_str() {
        "cvs" => "csv",
        "csv" => "cvs",
        _ => return None,
    };
    Some(p.with_extension(other))
}

/// Load Binance-like OHLC(V) CSV. Rows that fail to parse or break OHLC invariants are skipped.
pub fn load_ohlc_csv(path: &Path) -> Result<CandleHistory> {
    let rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;
    read_ohlc(rdr).with_context(|| format!("reading {}", path.display()))
}

pub fn read_ohlc<R: std::io::Read>(mut rdr: csv::Reader<R>) -> Result<CandleHistory> {
    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect::<Vec<_>>();
    tracing::debug!(?headers, "csv headers");

    let idx = |names: &[&str]| headers.iter().position(|h| names.contains(&h.as_str()));
    let i_time = idx(&["time", "timestamp", "open_time", "date", "datetime"]);
    let i_open = idx(&["open", "o"]);
    let i_high = idx(&["high", "h"]);
    let i_low = idx(&["low", "l"]);
    let i_close = idx(&["close", "c", "adj_close", "close_price"]);
    let i_volume = idx(&["volume", "vol", "v"]);

    let (Some(i_open), Some(i_high), Some(i_low), Some(i_close)) = (i_open, i_high, i_low, i_close) else {
        anyhow::bail!("missing one of open/high/low/close columns in {headers:?}");
    };

    let mut out = CandleHistory::default();
    let mut skipped = 0usize;
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let num = |i: usize| rec.get(i).and_then(|s| s.trim().parse::<f64>().ok());
        let t = i_time
            .and_then(|i| rec.get(i))
            .and_then(parse_time_to_f64)
            .unwrap_or(row as f64);
        let v = i_volume.and_then(num).unwrap_or(0.0);

        let candle = match (num(i_open), num(i_high), num(i_low), num(i_close)) {
            (Some(o), Some(h), Some(l), Some(c)) => Candle::try_new(t, o, h, l, c, v).map_err(|e| e.to_string()),
            _ => Err("unparseable price".to_string()),
        };
        match candle {
            Ok(c) => out.push(c),
            Err(reason) => {
                skipped += 1;
                tracing::warn!(row, %reason, "skipping csv row");
            }
        }
    }
    tracing::info!(candles = out.len(), skipped, "loaded ohlc csv");
    Ok(out)
}

/// Epoch seconds from integer seconds/milliseconds, RFC 3339, or `%Y-%m-%d[ %H:%M:%S]`.
pub fn parse_time_to_f64(s: &str) -> Option<f64> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(n) = s.parse::<i64>() {
        // epoch ms -> sec
        if n > 10_i64.pow(12) {
            return Some(n as f64 / 1000.0);
        }
        return Some(n as f64);
    }
    if let Ok(x) = s.parse::<f64>() {
        return Some(x);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.timestamp() as f64);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
        return Some(dt.and_utc().timestamp() as f64);
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc().timestamp() as f64)
}

/// Deterministic hourly random-walk history for running without a CSV.
pub fn synthetic_history(n: usize) -> CandleHistory {
    let start = 1_700_000_000.0;
    let mut price = 100.0f64;
    (0..n)
        .map(|i| {
            let x = i as f64;
            let o = price;
            let c = (o + (x * 0.37).sin() * 1.2 + (x * 0.05).cos() * 0.4).max(1.0);
            let wick = 0.3 + (x * 1.7).sin().abs();
            price = c;
            Candle { t: start + x * 3600.0, o, h: o.max(c) + wick, l: (o.min(c) - wick).max(0.5), c, v: 100.0 + (x * 0.9).cos().abs() * 50.0 }
        })
        .collect()
}
