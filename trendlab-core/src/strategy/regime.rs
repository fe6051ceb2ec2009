//! Regime detector — classifies recent market behavior, never emits a signal.

use crate::domain::Bar;
use crate::indicators::{Indicator, RollingStats, Sma};

/// Coarse regime classification: trending/ranging crossed with low/high volatility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Regime {
    LvTrend,
    HvTrend,
    LvRange,
    HvRange,
    Undefined,
}

#[derive(Debug, Clone, Copy)]
pub struct RegimeConfig {
    pub vol_short: usize,
    pub vol_long: usize,
    pub trend_sma: usize,
    pub trend_threshold: f64,
}

impl Default for RegimeConfig {
    fn default() -> Self {
        Self {
            vol_short: 50,
            vol_long: 200,
            trend_sma: 300,
            trend_threshold: 0.005,
        }
    }
}

pub struct RegimeDetector {
    cfg: RegimeConfig,
    vol_short: RollingStats,
    vol_long: RollingStats,
    trend_sma: Sma,
    prev_close: Option<f64>,
    regime: Regime,
}

impl RegimeDetector {
    pub fn new(cfg: RegimeConfig) -> Self {
        Self {
            vol_short: RollingStats::new(cfg.vol_short),
            vol_long: RollingStats::new(cfg.vol_long),
            trend_sma: Sma::new(cfg.trend_sma),
            cfg,
            prev_close: None,
            regime: Regime::Undefined,
        }
    }

    pub fn on_bar(&mut self, bar: &Bar) {
        let sma_value = self.trend_sma.update(bar.close);

        let had_prev = self.prev_close.is_some();
        let log_return = match self.prev_close {
            Some(pc) if pc > 0.0 => (bar.close / pc).ln(),
            Some(pc) => {
                eprintln!("regime detector: non-positive prev_close {pc}, treating log-return as 0");
                0.0
            }
            None => 0.0,
        };
        self.prev_close = Some(bar.close);

        // Seed the volatility windows only once a previous close exists; the
        // very first bar has no return to contribute.
        if had_prev {
            let (_, short_std, _) = self.vol_short.update(log_return);
            let (_, long_std, _) = self.vol_long.update(log_return);
            let short_ready = self.vol_short.ready();
            let long_ready = self.vol_long.ready();

            if short_ready && long_ready && self.trend_sma.ready() {
                // `<=`, not strict `<`: a flat series has short == long == 0,
                // and the spec's own worked example (S1) classifies that as
                // low-vol, not high-vol.
                let low_vol = short_std <= long_std;
                let trend_strength = (bar.close - sma_value).abs() / sma_value;
                let trending = trend_strength > self.cfg.trend_threshold;
                self.regime = match (low_vol, trending) {
                    (true, true) => Regime::LvTrend,
                    (false, true) => Regime::HvTrend,
                    (true, false) => Regime::LvRange,
                    (false, false) => Regime::HvRange,
                };
            }
        }
    }

    pub fn regime(&self) -> Regime {
        self.regime
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bar(close: f64) -> Bar {
        Bar {
            timestamp: 0,
            open: close,
            high: close,
            low: close,
            close,
            volume: 1000.0,
        }
    }

    #[test]
    fn undefined_until_ready() {
        let cfg = RegimeConfig {
            vol_short: 3,
            vol_long: 5,
            trend_sma: 4,
            trend_threshold: 0.005,
        };
        let mut det = RegimeDetector::new(cfg);
        for _ in 0..4 {
            det.on_bar(&bar(100.0));
            assert_eq!(det.regime(), Regime::Undefined);
        }
    }

    #[test]
    fn constant_price_is_low_vol_range() {
        let cfg = RegimeConfig {
            vol_short: 3,
            vol_long: 5,
            trend_sma: 4,
            trend_threshold: 0.005,
        };
        let mut det = RegimeDetector::new(cfg);
        for _ in 0..10 {
            det.on_bar(&bar(100.0));
        }
        // stddev short == stddev long == 0 -> low_vol, no trend -> LvRange (S1).
        assert_eq!(det.regime(), Regime::LvRange);
    }

    #[test]
    fn strongly_trending_low_vol_series_is_lv_trend() {
        let cfg = RegimeConfig {
            vol_short: 5,
            vol_long: 10,
            trend_sma: 8,
            trend_threshold: 0.005,
        };
        let mut det = RegimeDetector::new(cfg);
        let mut price = 100.0;
        for _ in 0..40 {
            price *= 1.01;
            det.on_bar(&bar(price));
        }
        assert_eq!(det.regime(), Regime::LvTrend);
    }
}
