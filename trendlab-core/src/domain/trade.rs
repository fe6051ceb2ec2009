//! TradeRecord — a closed round-trip trade with realized PnL.

use serde::{Deserialize, Serialize};

/// A completed round-trip trade: entry through exit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TradeRecord {
    pub entry_time: i64,
    pub exit_time: i64,
    pub entry_price: f64,
    pub exit_price: f64,
    pub side: i8,
    pub quantity: f64,
    pub fees: f64,
    pub pnl: f64,
}

impl TradeRecord {
    /// `pnl = side * (exit_price - entry_price) * quantity - fees`.
    pub fn new(
        entry_time: i64,
        exit_time: i64,
        entry_price: f64,
        exit_price: f64,
        side: i8,
        quantity: f64,
        fees: f64,
    ) -> Self {
        let pnl = side as f64 * (exit_price - entry_price) * quantity - fees;
        Self {
            entry_time,
            exit_time,
            entry_price,
            exit_price,
            side,
            quantity,
            fees,
            pnl,
        }
    }

    pub fn is_winner(&self) -> bool {
        self.pnl > 0.0
    }
}
