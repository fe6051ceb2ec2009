//! Bar — the fundamental market data unit.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single OHLCV observation at a fixed interval.
///
/// Bars are produced by an external loader and consumed strictly in order;
/// the core never reorders or buffers more than one bar at a time beyond
/// what indicators retain internally.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub timestamp: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

/// Reasons a bar fails validation.
#[derive(Debug, Error, PartialEq)]
pub enum BarError {
    #[error("timestamp {new} does not strictly increase past {prev}")]
    NonMonotoneTimestamp { prev: i64, new: i64 },
    #[error("impossible OHLC: open={open} high={high} low={low} close={close}")]
    ImpossibleOhlc {
        open: f64,
        high: f64,
        low: f64,
        close: f64,
    },
}

impl Bar {
    /// Checks the OHLC invariants from the data model: `high >= max(open, close, low)`,
    /// `low <= min(open, close, high)`, `open > 0`.
    ///
    /// Does not check timestamp order — callers track the previous timestamp
    /// themselves since that check is relative to the stream, not the bar alone.
    pub fn validate_ohlc(&self) -> Result<(), BarError> {
        let max_ok = self.high >= self.open && self.high >= self.close && self.high >= self.low;
        let min_ok = self.low <= self.open && self.low <= self.close && self.low <= self.high;
        if !max_ok || !min_ok || self.open <= 0.0 {
            return Err(BarError::ImpossibleOhlc {
                open: self.open,
                high: self.high,
                low: self.low,
                close: self.close,
            });
        }
        Ok(())
    }

    /// Checks that `self.timestamp` strictly increases past `prev`.
    pub fn validate_monotone(&self, prev: i64) -> Result<(), BarError> {
        if self.timestamp <= prev {
            return Err(BarError::NonMonotoneTimestamp {
                prev,
                new: self.timestamp,
            });
        }
        Ok(())
    }

    /// True-range for this bar given the previous bar's close.
    ///
    /// On the first bar of a stream, pass `None` and the true range degenerates
    /// to `high - low` (spec-mandated seed for `Atr`).
    pub fn true_range(&self, prev_close: Option<f64>) -> f64 {
        match prev_close {
            None => self.high - self.low,
            Some(pc) => {
                let a = self.high - self.low;
                let b = (self.high - pc).abs();
                let c = (self.low - pc).abs();
                a.max(b).max(c)
            }
        }
    }
}
