//! Event loop — wires indicators, regime/strategy layer, execution, and risk
//! into the exact 7-step per-bar ordering that guarantees no look-ahead.

mod config;
mod report;

pub use config::EngineConfig;
pub use report::RunReport;

use crate::domain::Bar;
use crate::execution::{ExecutionConfig, ExecutionSimulator};
use crate::indicators::Atr;
use crate::risk::{RiskConfig, RiskGovernor};
use crate::strategy::{
    MeanReversion, MeanReversionConfig, Momentum, MomentumConfig, Regime, RegimeConfig,
    RegimeDetector, StrategySignal,
};

pub struct Engine {
    cfg: EngineConfig,
    execution: ExecutionSimulator,
    risk: RiskGovernor,
    regime: RegimeDetector,
    momentum: Momentum,
    mean_reversion: MeanReversion,
    atr: Atr,
    bars_seen: u64,
    peak_equity: f64,
    max_drawdown_breached: bool,
}

impl Engine {
    pub fn new(cfg: EngineConfig) -> Self {
        let execution = ExecutionSimulator::new(cfg.initial_capital, ExecutionConfig { fee_rate: cfg.fee_rate });
        let risk = RiskGovernor::new(RiskConfig {
            atr_stop_multiplier: cfg.atr_stop_multiplier,
            max_trades_per_day: cfg.max_trades_per_day,
            cooldown_bars: cfg.cooldown_bars,
        });
        let regime = RegimeDetector::new(RegimeConfig {
            vol_short: cfg.vol_short,
            vol_long: cfg.vol_long,
            trend_sma: cfg.trend_sma,
            trend_threshold: cfg.trend_threshold,
        });
        let momentum = Momentum::new(MomentumConfig {
            mom_period: cfg.mom_period,
            rank_period: cfg.rank_period,
            rsi_period: cfg.momentum_rsi_period,
            ema_fast: cfg.ema_fast,
            ema_slow: cfg.ema_slow,
            volume_ma: cfg.volume_ma,
            entry_z: cfg.entry_z,
            exit_z: cfg.exit_z,
        });
        let mean_reversion = MeanReversion::new(MeanReversionConfig {
            bb_period: cfg.bb_period,
            bb_std: cfg.bb_std,
            rsi_period: cfg.mean_reversion_rsi_period,
            rsi_lower: cfg.rsi_lower,
            rsi_upper: cfg.rsi_upper,
            bb_entry: cfg.bb_entry,
            bb_exit: cfg.bb_exit,
            vol_fast: cfg.mean_reversion_vol_fast,
            vol_slow: cfg.mean_reversion_vol_slow,
        });

        Self {
            peak_equity: cfg.initial_capital,
            atr: Atr::new(14),
            cfg,
            execution,
            risk,
            regime,
            momentum,
            mean_reversion,
            bars_seen: 0,
            max_drawdown_breached: false,
        }
    }

    /// Run the exact 7-step §4.6 ordering for one bar.
    ///
    /// Deviation from the literal step-6 pseudocode: the spec text calls
    /// `risk.on_exit(true)` unconditionally at the moment a flat-close is
    /// *submitted*, which cannot distinguish a losing close from a winning
    /// one and would make testable property 5 (cooldown after a loss)
    /// unsatisfiable for stop-triggered exits. Instead `on_exit` fires once
    /// the closing trade actually *settles* (step 1 of the bar after the
    /// close was submitted), using the realized trade's own win/loss.
    pub fn on_bar(&mut self, bar: &Bar) {
        // 1. Realize any pending order queued on a prior bar.
        let trades_before = self.execution.trades().len();
        self.execution.settle_fills(bar);
        if self.execution.trades().len() > trades_before {
            let was_win = self.execution.trades().last().expect("just pushed").is_winner();
            self.risk.on_exit(was_win);
        }

        // 2. Stop check against this bar's intrabar range.
        if self.execution.is_invested() && self.risk.check_exit(bar) {
            self.execution.close_position();
        }

        // 3. Advance regime and both signal producers.
        self.regime.on_bar(bar);
        self.momentum.on_bar(bar);
        self.mean_reversion.on_bar(bar);
        let atr_value = self.atr.update_bar(bar);
        let atr_estimate = if self.atr.ready() { atr_value } else { 0.01 * bar.close };

        // 4. Dispatch by regime.
        let signal = match self.regime.regime() {
            Regime::LvTrend | Regime::HvTrend => self.momentum.signal(),
            Regime::LvRange => self.mean_reversion.signal(),
            Regime::HvRange | Regime::Undefined => 0,
        };

        // 5/6. Decide and submit.
        if signal != 0 && !self.execution.is_invested() && self.risk.can_enter(bar) {
            let qty = self.cfg.allocation_fraction * self.cfg.initial_capital / bar.close;
            self.execution.submit(signal, qty);
            self.risk.on_entry(bar.close, atr_estimate, signal);
            self.risk.note_entry_day(bar.timestamp);
        } else if signal == 0 && self.execution.is_invested() {
            // Outcome is unknown until the close settles next bar; see the
            // deviation note on `on_bar` above.
            self.execution.close_position();
        }

        // 7. Decay cooldown.
        self.risk.tick();

        let equity = self.execution.equity(bar.close);
        if equity > self.peak_equity {
            self.peak_equity = equity;
        }
        if let Some(limit) = self.cfg.max_drawdown_limit {
            let drawdown = (self.peak_equity - equity) / self.peak_equity;
            if drawdown > limit {
                self.max_drawdown_breached = true;
            }
        }

        self.bars_seen += 1;
    }

    pub fn equity(&self, last_close: f64) -> f64 {
        self.execution.equity(last_close)
    }

    /// Build the end-of-run report. `last_close` should be the close of the
    /// final bar processed, used to mark any still-open position to market.
    pub fn report(&self, last_close: f64, duration_ms: u64) -> RunReport {
        RunReport::from_trades(
            self.cfg.initial_capital,
            self.execution.equity(last_close),
            self.execution.trades(),
            self.bars_seen,
            duration_ms,
            self.max_drawdown_breached,
        )
    }
}
