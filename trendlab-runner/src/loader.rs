//! Reference CSV bar loader (spec.md §6).
//!
//! Header `timestamp,open,high,low,close,volume`. Timestamp is either a
//! decimal integer (epoch seconds) or `YYYY-MM-DD HH:MM:SS` parsed as local
//! civil time. Malformed rows, non-monotone timestamps, and impossible OHLC
//! are skipped and counted rather than aborting the whole load — an
//! empty or header-only file yields an empty, valid simulation.

use chrono::NaiveDateTime;
use std::path::Path;

use trendlab_core::domain::Bar;

use crate::error::LoadError;

#[derive(Debug, serde::Deserialize)]
struct Row {
    timestamp: String,
    open: f64,
    high: f64,
    low: f64,
    close: f64,
    volume: f64,
}

/// Outcome of loading a CSV file: the bars that parsed and validated, plus a
/// count of rows that were skipped (and why, via stderr warnings).
#[derive(Debug, Default)]
pub struct LoadedBars {
    pub bars: Vec<Bar>,
    pub skipped_rows: usize,
}

fn parse_timestamp(raw: &str) -> Option<i64> {
    if let Ok(epoch) = raw.trim().parse::<i64>() {
        return Some(epoch);
    }
    NaiveDateTime::parse_from_str(raw.trim(), "%Y-%m-%d %H:%M:%S")
        .ok()
        .map(|dt| dt.and_utc().timestamp())
}

/// Load and validate bars from a CSV file at `path`.
pub fn load_csv<P: AsRef<Path>>(path: P) -> Result<LoadedBars, LoadError> {
    let path_ref = path.as_ref();
    let path_str = path_ref.display().to_string();

    let file = std::fs::File::open(path_ref).map_err(|source| LoadError::Open {
        path: path_str.clone(),
        source,
    })?;
    let mut reader = csv::ReaderBuilder::new().has_headers(true).from_reader(file);

    let mut bars = Vec::new();
    let mut skipped_rows = 0usize;
    let mut prev_timestamp: Option<i64> = None;

    for result in reader.deserialize::<Row>() {
        let row = match result {
            Ok(row) => row,
            Err(e) => {
                eprintln!("trendlab-runner: skipping malformed row: {e}");
                skipped_rows += 1;
                continue;
            }
        };

        let Some(timestamp) = parse_timestamp(&row.timestamp) else {
            eprintln!("trendlab-runner: skipping row with unparseable timestamp '{}'", row.timestamp);
            skipped_rows += 1;
            continue;
        };

        let bar = Bar {
            timestamp,
            open: row.open,
            high: row.high,
            low: row.low,
            close: row.close,
            volume: row.volume,
        };

        if let Err(e) = bar.validate_ohlc() {
            eprintln!("trendlab-runner: skipping bar with impossible OHLC at {timestamp}: {e}");
            skipped_rows += 1;
            continue;
        }

        if let Some(prev) = prev_timestamp {
            if let Err(e) = bar.validate_monotone(prev) {
                eprintln!("trendlab-runner: non-monotone timestamp at {timestamp}: {e}, continuing");
            }
        }

        prev_timestamp = Some(bar.timestamp);
        bars.push(bar);
    }

    Ok(LoadedBars { bars, skipped_rows })
}
