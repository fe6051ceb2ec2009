//! Streaming indicators: O(1) per-bar cost, allocation confined to construction.
//!
//! Every indicator in this module implements [`Indicator`]: push one new
//! observation with `update`, check `ready` before reading `value`. Reading
//! `value` while `!ready` is undefined by contract (§7) — debug builds
//! assert it, release builds return whatever the accumulator currently
//! holds (usually a meaningless partial average, never a panic).

pub mod atr;
pub mod bollinger;
pub mod ema;
pub mod rolling_stats;
pub mod roc;
pub mod rsi;
pub mod sma;

pub use atr::Atr;
pub use bollinger::{Bollinger, BollingerValue};
pub use ema::Ema;
pub use roc::Roc;
pub use rolling_stats::RollingStats;
pub use rsi::Rsi;
pub use sma::Sma;

/// Shared contract for single-scalar streaming indicators.
pub trait Indicator {
    /// The type of value produced: `f64` for most indicators, a small named
    /// tuple for multi-series ones like Bollinger.
    type Value;

    /// Feed one new observation. Must be called once per bar, in order.
    fn update(&mut self, x: f64) -> Self::Value;

    /// True once enough observations have been seen to trust `value()`.
    fn ready(&self) -> bool;

    /// The indicator's current value. Contract: undefined while `!ready()`.
    fn value(&self) -> Self::Value;
}

/// Epsilon below which a standard deviation is treated as zero (avoids
/// division blow-up in z-scores and %b).
pub const STDDEV_EPSILON: f64 = 1e-9;

#[cfg(test)]
pub(crate) fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected}, got {actual} (diff {})",
        (actual - expected).abs()
    );
}
