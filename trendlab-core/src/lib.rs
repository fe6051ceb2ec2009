//! TrendLab Core — streaming indicators, regime-dispatched strategy layer,
//! next-bar-open execution simulator, risk governor, and the bar-by-bar
//! event loop that ties them together.
//!
//! This crate contains the heart of the backtesting engine:
//! - Domain types (bars, orders, positions, trades, accounts)
//! - A generic ring buffer used by every windowed indicator
//! - O(1)-per-bar streaming indicators (SMA, EMA, RSI, ATR, ROC, Bollinger,
//!   rolling mean/stddev/z-score)
//! - A regime detector plus momentum and mean-reversion signal producers
//! - A next-bar-open execution simulator with a closed-trade ledger
//! - A risk governor: ATR trailing stops, per-day trade cap, post-loss cooldown
//! - The 7-step engine loop that sequences all of the above with no look-ahead
//!
//! Deliberately excluded: CSV ingestion, run configuration, and report
//! persistence live in the separate `trendlab-runner` crate — this crate has
//! no file or network I/O.

pub mod domain;
pub mod engine;
pub mod execution;
pub mod indicators;
pub mod ring_buffer;
pub mod risk;
pub mod strategy;

#[cfg(test)]
mod tests {
    use super::*;

    /// Compile-time check: all domain types that cross the crate boundary
    /// (into the runner, or out into a report) are Send + Sync.
    #[allow(dead_code)]
    fn assert_send_sync() {
        fn require_send<T: Send>() {}
        fn require_sync<T: Sync>() {}

        require_send::<domain::Bar>();
        require_sync::<domain::Bar>();
        require_send::<domain::Position>();
        require_sync::<domain::Position>();
        require_send::<domain::Account>();
        require_sync::<domain::Account>();
        require_send::<domain::TradeRecord>();
        require_sync::<domain::TradeRecord>();
        require_send::<engine::RunReport>();
        require_sync::<engine::RunReport>();
    }
}
