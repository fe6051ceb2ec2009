//! Execution simulator — order intake, next-bar-open fills, realized-trade ledger.
//!
//! No-look-ahead invariant: an order submitted while processing bar `t`
//! settles only when `settle_fills` is called for bar `t+1`, using that
//! bar's open. Nothing here ever reads a field of the order's own bar
//! beyond what was true at submission time.

use crate::domain::{Account, Bar, PendingOrder, Position, TradeRecord};

#[derive(Debug, Clone, Copy, Default)]
pub struct ExecutionConfig {
    pub fee_rate: f64,
}

pub struct ExecutionSimulator {
    pub account: Account,
    pending: Option<PendingOrder>,
    cfg: ExecutionConfig,
    trades: Vec<TradeRecord>,
}

impl ExecutionSimulator {
    pub fn new(initial_cash: f64, cfg: ExecutionConfig) -> Self {
        Self {
            account: Account::new(initial_cash),
            pending: None,
            cfg,
            trades: Vec::new(),
        }
    }

    /// Queue an order for settlement at the next bar's open.
    ///
    /// Submitting while a pending order already exists overwrites it —
    /// callers (the engine) must only call this once per bar.
    pub fn submit(&mut self, side: i8, quantity: f64) {
        self.pending = Some(PendingOrder::new(side, quantity));
    }

    /// Convenience: submit the order that flattens the current position.
    pub fn close_position(&mut self) {
        debug_assert!(!self.account.position.is_flat(), "close_position called while flat");
        if self.account.position.is_flat() {
            return;
        }
        let side = -self.account.position.side;
        let qty = self.account.position.quantity;
        self.submit(side, qty);
    }

    pub fn is_invested(&self) -> bool {
        self.account.is_invested()
    }

    pub fn equity(&self, price: f64) -> f64 {
        self.account.equity(price)
    }

    pub fn trades(&self) -> &[TradeRecord] {
        &self.trades
    }

    fn fee(&self, price: f64, qty: f64) -> f64 {
        price * qty * self.cfg.fee_rate
    }

    /// Fill any pending order at `bar.open`, update cash/position, and emit a
    /// `TradeRecord` if the fill transitions the position to flat.
    pub fn settle_fills(&mut self, bar: &Bar) {
        let Some(order) = self.pending.take() else {
            return;
        };
        let fill_price = bar.open;
        let fee = self.fee(fill_price, order.quantity);
        self.account.cash -= order.side as f64 * order.quantity * fill_price;
        self.account.cash -= fee;

        let before = self.account.position;
        let new_side_qty = before.side as f64 * before.quantity + order.side as f64 * order.quantity;

        if before.is_flat() {
            self.account.position = Position::open(order.side, order.quantity, fill_price, bar.timestamp);
            return;
        }

        if new_side_qty.abs() < crate::domain::account::EPSILON {
            // Transition to flat: emit the closed trade.
            let entry_fee = 0.0; // entry fee already deducted from cash at entry time.
            let _ = entry_fee;
            let trade = TradeRecord::new(
                before.entry_time,
                bar.timestamp,
                before.entry_price,
                fill_price,
                before.side,
                before.quantity,
                fee,
            );
            self.trades.push(trade);
            self.account.position = Position::flat();
            return;
        }

        // Direction reversal or partial close within one fill is unsupported
        // by design (§4.4) — the engine must close then re-enter across two
        // bars. Treat any remaining same-direction overwrite as a no-op
        // precondition violation.
        debug_assert!(
            false,
            "fill would partially close or reverse a position; unsupported"
        );
    }
}
