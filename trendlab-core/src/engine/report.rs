//! End-of-run report (spec.md §6), plus the `max_drawdown_breached` field
//! added by the expanded spec's resolution of the `max_drawdown_limit` open
//! question (advisory surface only — the engine never acts on it).

use serde::{Deserialize, Serialize};

use crate::domain::TradeRecord;

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RunReport {
    pub final_equity: f64,
    pub total_return_pct: f64,
    pub total_trades: usize,
    pub winning_trades: usize,
    pub win_rate: f64,
    pub gross_profit: f64,
    pub gross_loss: f64,
    pub profit_factor: f64,
    pub duration_ms: u64,
    pub bars_per_sec: f64,
    pub max_drawdown_breached: bool,
}

/// Sentinel profit factor when there are no losing trades to divide by.
const PROFIT_FACTOR_SENTINEL: f64 = 99.9;

impl RunReport {
    pub fn from_trades(
        initial_capital: f64,
        final_equity: f64,
        trades: &[TradeRecord],
        bars_seen: u64,
        duration_ms: u64,
        max_drawdown_breached: bool,
    ) -> Self {
        let total_trades = trades.len();
        let winning_trades = trades.iter().filter(|t| t.is_winner()).count();
        let win_rate = if total_trades > 0 {
            winning_trades as f64 / total_trades as f64
        } else {
            0.0
        };

        let gross_profit: f64 = trades.iter().map(|t| t.pnl).filter(|&p| p > 0.0).sum();
        let gross_loss: f64 = trades.iter().map(|t| -t.pnl).filter(|&l| l > 0.0).sum();
        let profit_factor = if gross_loss > 0.0 {
            gross_profit / gross_loss
        } else {
            PROFIT_FACTOR_SENTINEL
        };

        let total_return_pct = (final_equity - initial_capital) / initial_capital * 100.0;
        let bars_per_sec = if duration_ms > 0 {
            bars_seen as f64 / (duration_ms as f64 / 1000.0)
        } else {
            0.0
        };

        Self {
            final_equity,
            total_return_pct,
            total_trades,
            winning_trades,
            win_rate,
            gross_profit,
            gross_loss,
            profit_factor,
            duration_ms,
            bars_per_sec,
            max_drawdown_breached,
        }
    }
}
