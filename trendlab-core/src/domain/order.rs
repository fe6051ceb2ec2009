//! Pending order — the at-most-one in-flight order awaiting next-bar-open fill.

/// A pending order awaiting settlement at the next bar's open.
///
/// At most one exists at any moment (§3). `side` is `+1` for buy/cover-long,
/// `-1` for sell/short.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendingOrder {
    pub side: i8,
    pub quantity: f64,
}

impl PendingOrder {
    pub fn new(side: i8, quantity: f64) -> Self {
        debug_assert!(side == 1 || side == -1, "order side must be +1 or -1");
        debug_assert!(quantity > 0.0, "order quantity must be > 0");
        Self { side, quantity }
    }
}
