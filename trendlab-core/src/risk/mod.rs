//! Risk governor — trailing ATR stops, per-day trade cap, post-loss cooldown.

use crate::domain::Bar;

#[derive(Debug, Clone, Copy)]
pub struct RiskConfig {
    pub atr_stop_multiplier: f64,
    pub max_trades_per_day: u32,
    pub cooldown_bars: u32,
}

impl Default for RiskConfig {
    fn default() -> Self {
        Self {
            atr_stop_multiplier: 2.0,
            max_trades_per_day: 20,
            cooldown_bars: 5,
        }
    }
}

/// Civil calendar day derived from a unix-epoch-seconds timestamp (UTC).
fn calendar_day(timestamp: i64) -> i64 {
    timestamp.div_euclid(86_400)
}

pub struct RiskGovernor {
    cfg: RiskConfig,
    trades_today: u32,
    last_trade_day: Option<i64>,
    cooldown_remaining: u32,
    side: i8,
    entry_price: f64,
    stop_price: f64,
    peak_favorable_price: f64,
    atr_at_entry: f64,
}

impl RiskGovernor {
    pub fn new(cfg: RiskConfig) -> Self {
        Self {
            cfg,
            trades_today: 0,
            last_trade_day: None,
            cooldown_remaining: 0,
            side: 0,
            entry_price: 0.0,
            stop_price: 0.0,
            peak_favorable_price: 0.0,
            atr_at_entry: 0.0,
        }
    }

    fn roll_day(&mut self, bar_timestamp: i64) {
        let day = calendar_day(bar_timestamp);
        if self.last_trade_day != Some(day) {
            self.trades_today = 0;
        }
    }

    /// True iff under the per-day cap and outside a cooldown window.
    /// Resets `trades_today` when `bar`'s calendar day differs from the
    /// last trade's day.
    pub fn can_enter(&mut self, bar: &Bar) -> bool {
        self.roll_day(bar.timestamp);
        self.trades_today < self.cfg.max_trades_per_day && self.cooldown_remaining == 0
    }

    pub fn on_entry(&mut self, price: f64, atr: f64, side: i8) {
        debug_assert!(side == 1 || side == -1);
        self.side = side;
        self.entry_price = price;
        self.atr_at_entry = atr;
        self.peak_favorable_price = price;
        let offset = self.cfg.atr_stop_multiplier * atr;
        self.stop_price = if side == 1 { price - offset } else { price + offset };
        self.trades_today += 1;
    }

    /// Records which calendar day the most recent entry happened on. Must be
    /// called by the engine immediately after `on_entry`, passing the entry
    /// bar's timestamp, so the next `can_enter` rolls the counter correctly.
    pub fn note_entry_day(&mut self, bar_timestamp: i64) {
        self.last_trade_day = Some(calendar_day(bar_timestamp));
    }

    /// Stop check plus monotone trailing-stop ratchet. Returns true if the
    /// stop was breached this bar (flat positions always return false).
    pub fn check_exit(&mut self, bar: &Bar) -> bool {
        if self.side == 0 {
            return false;
        }
        if self.side == 1 {
            if bar.low < self.stop_price {
                return true;
            }
            if bar.high > self.peak_favorable_price {
                self.peak_favorable_price = bar.high;
                let candidate = self.peak_favorable_price - self.cfg.atr_stop_multiplier * self.atr_at_entry;
                self.stop_price = self.stop_price.max(candidate);
            }
        } else {
            if bar.high > self.stop_price {
                return true;
            }
            if bar.low < self.peak_favorable_price {
                self.peak_favorable_price = bar.low;
                let candidate = self.peak_favorable_price + self.cfg.atr_stop_multiplier * self.atr_at_entry;
                self.stop_price = self.stop_price.min(candidate);
            }
        }
        false
    }

    pub fn on_exit(&mut self, was_win: bool) {
        self.side = 0;
        if !was_win {
            self.cooldown_remaining = self.cfg.cooldown_bars;
        }
    }

    /// Decrement the cooldown counter toward 0. Call once per bar.
    pub fn tick(&mut self) {
        if self.cooldown_remaining > 0 {
            self.cooldown_remaining -= 1;
        }
    }

    pub fn stop_price(&self) -> f64 {
        self.stop_price
    }

    pub fn entry_price(&self) -> f64 {
        self.entry_price
    }

    pub fn cooldown_remaining(&self) -> u32 {
        self.cooldown_remaining
    }
}
