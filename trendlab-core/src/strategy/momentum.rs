//! Momentum producer — ROC z-score breakout with trend/volume/RSI filters.

use super::{Signal, StrategySignal};
use crate::domain::Bar;
use crate::indicators::{Ema, Indicator, Roc, RollingStats, Rsi, Sma};

#[derive(Debug, Clone, Copy)]
pub struct MomentumConfig {
    pub mom_period: usize,
    pub rank_period: usize,
    pub rsi_period: usize,
    pub ema_fast: usize,
    pub ema_slow: usize,
    pub volume_ma: usize,
    pub entry_z: f64,
    pub exit_z: f64,
}

impl Default for MomentumConfig {
    fn default() -> Self {
        Self {
            mom_period: 100,
            rank_period: 100,
            rsi_period: 14,
            ema_fast: 12,
            ema_slow: 26,
            volume_ma: 20,
            entry_z: 1.5,
            exit_z: 0.3,
        }
    }
}

pub struct Momentum {
    cfg: MomentumConfig,
    roc: Roc,
    roc_stats: RollingStats,
    ema_fast: Ema,
    ema_slow: Ema,
    volume_sma: Sma,
    rsi: Rsi,
    last_z: f64,
    signal: Signal,
}

impl Momentum {
    pub fn new(cfg: MomentumConfig) -> Self {
        Self {
            roc: Roc::new(cfg.mom_period),
            roc_stats: RollingStats::new(cfg.rank_period),
            ema_fast: Ema::new(cfg.ema_fast),
            ema_slow: Ema::new(cfg.ema_slow),
            volume_sma: Sma::new(cfg.volume_ma),
            rsi: Rsi::new(cfg.rsi_period),
            cfg,
            last_z: 0.0,
            signal: 0,
        }
    }
}

impl StrategySignal for Momentum {
    fn on_bar(&mut self, bar: &Bar) {
        let roc_value = self.roc.update(bar.close);
        let roc_ready = self.roc.ready();
        // Only feed the rank window real ROC values — pushing Roc's 0.0
        // placeholder during its own warmup would contaminate the window
        // with bars that aren't real momentum readings.
        let (z, stats_ready) = if roc_ready {
            let (_, _, z) = self.roc_stats.update(roc_value);
            (z, self.roc_stats.ready())
        } else {
            (0.0, false)
        };
        let ema_fast = self.ema_fast.update(bar.close);
        let ema_slow = self.ema_slow.update(bar.close);
        let volume_ma = self.volume_sma.update(bar.volume);
        let volume_ready = self.volume_sma.ready();
        let rsi = self.rsi.update(bar.close);
        let rsi_ready = self.rsi.ready();

        if !(roc_ready && stats_ready && volume_ready && rsi_ready) {
            self.signal = 0;
            self.last_z = z;
            return;
        }

        let long_entry = z > self.cfg.entry_z
            && ema_fast > ema_slow
            && bar.volume > volume_ma
            && rsi < 75.0
            && z > self.last_z;
        let short_entry = z < -self.cfg.entry_z
            && ema_fast < ema_slow
            && bar.volume > volume_ma
            && rsi > 25.0
            && z < self.last_z;

        if long_entry {
            self.signal = 1;
        } else if short_entry {
            self.signal = -1;
        } else if z.abs() < self.cfg.exit_z {
            self.signal = 0;
        }
        // Otherwise hold the prior signal.

        self.last_z = z;
    }

    fn signal(&self) -> Signal {
        self.signal
    }

    fn name(&self) -> &'static str {
        "momentum"
    }
}
