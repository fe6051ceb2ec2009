//! Mean-reversion producer — Bollinger %-position with RSI and vol-regime filters.

use super::{Signal, StrategySignal};
use crate::domain::Bar;
use crate::indicators::{Bollinger, Indicator, RollingStats, Rsi};

#[derive(Debug, Clone, Copy)]
pub struct MeanReversionConfig {
    pub bb_period: usize,
    pub bb_std: f64,
    pub rsi_period: usize,
    pub rsi_lower: f64,
    pub rsi_upper: f64,
    pub bb_entry: f64,
    pub bb_exit: f64,
    pub vol_fast: usize,
    pub vol_slow: usize,
}

impl Default for MeanReversionConfig {
    fn default() -> Self {
        Self {
            bb_period: 100,
            bb_std: 2.0,
            rsi_period: 20,
            rsi_lower: 30.0,
            rsi_upper: 70.0,
            bb_entry: 0.8,
            bb_exit: 0.1,
            vol_fast: 20,
            vol_slow: 60,
        }
    }
}

pub struct MeanReversion {
    cfg: MeanReversionConfig,
    bb: Bollinger,
    rsi: Rsi,
    vol_fast: RollingStats,
    vol_slow: RollingStats,
    prev_close: Option<f64>,
    signal: Signal,
}

impl MeanReversion {
    pub fn new(cfg: MeanReversionConfig) -> Self {
        Self {
            bb: Bollinger::new(cfg.bb_period, cfg.bb_std),
            rsi: Rsi::new(cfg.rsi_period),
            vol_fast: RollingStats::new(cfg.vol_fast),
            vol_slow: RollingStats::new(cfg.vol_slow),
            cfg,
            prev_close: None,
            signal: 0,
        }
    }

    /// `(close - middle) / (2 * std)` — derived position within the bands,
    /// distinct from Bollinger's own `%b` (which is scaled 0..1 against the
    /// band width, not symmetric around 0).
    fn bb_pos(&self, close: f64) -> f64 {
        let v = self.bb.value();
        let std = (v.upper - v.middle) / self.cfg.bb_std;
        if std.abs() < crate::indicators::STDDEV_EPSILON {
            return 0.0;
        }
        (close - v.middle) / (2.0 * std)
    }
}

impl StrategySignal for MeanReversion {
    fn on_bar(&mut self, bar: &Bar) {
        self.bb.update(bar.close);
        let bb_ready = self.bb.ready();
        let rsi = self.rsi.update(bar.close);
        let rsi_ready = self.rsi.ready();

        let had_prev = self.prev_close.is_some();
        let log_return = match self.prev_close {
            Some(pc) if pc > 0.0 => (bar.close / pc).ln(),
            Some(pc) => {
                eprintln!("mean_reversion: non-positive prev_close {pc}, treating log-return as 0");
                0.0
            }
            None => 0.0,
        };
        self.prev_close = Some(bar.close);

        let (mut fast_ready, mut slow_ready) = (false, false);
        let (mut fast_std, mut slow_std) = (0.0, 0.0);
        if had_prev {
            let (_, fs, _) = self.vol_fast.update(log_return);
            let (_, ss, _) = self.vol_slow.update(log_return);
            fast_std = fs;
            slow_std = ss;
            fast_ready = self.vol_fast.ready();
            slow_ready = self.vol_slow.ready();
        }

        if !(bb_ready && rsi_ready && fast_ready && slow_ready) {
            self.signal = 0;
            return;
        }

        let bb_pos = self.bb_pos(bar.close);
        let low_vol = fast_std < slow_std;

        let long_entry = bb_pos < -self.cfg.bb_entry && rsi < self.cfg.rsi_lower && low_vol;
        let short_entry = bb_pos > self.cfg.bb_entry && rsi > self.cfg.rsi_upper && low_vol;

        match self.signal {
            1 if bb_pos > self.cfg.bb_exit => self.signal = 0,
            -1 if bb_pos < -self.cfg.bb_exit => self.signal = 0,
            0 if long_entry => self.signal = 1,
            0 if short_entry => self.signal = -1,
            _ => {}
        }
    }

    fn signal(&self) -> Signal {
        self.signal
    }

    fn name(&self) -> &'static str {
        "mean_reversion"
    }
}
