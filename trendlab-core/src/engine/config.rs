//! Engine configuration knobs (spec.md §6), collected into one struct so a
//! driver can construct a fully-specified run without touching the engine
//! internals.

#[derive(Debug, Clone, Copy)]
pub struct EngineConfig {
    pub initial_capital: f64,
    pub allocation_fraction: f64,
    pub fee_rate: f64,
    pub atr_stop_multiplier: f64,
    pub max_drawdown_limit: Option<f64>,
    pub max_trades_per_day: u32,
    pub cooldown_bars: u32,

    pub entry_z: f64,
    pub exit_z: f64,
    pub mom_period: usize,
    pub rank_period: usize,
    pub momentum_rsi_period: usize,
    pub ema_fast: usize,
    pub ema_slow: usize,
    pub volume_ma: usize,

    pub bb_period: usize,
    pub bb_std: f64,
    pub mean_reversion_rsi_period: usize,
    pub rsi_lower: f64,
    pub rsi_upper: f64,
    pub bb_entry: f64,
    pub bb_exit: f64,
    pub mean_reversion_vol_fast: usize,
    pub mean_reversion_vol_slow: usize,

    pub vol_short: usize,
    pub vol_long: usize,
    pub trend_sma: usize,
    pub trend_threshold: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            initial_capital: 100_000.0,
            allocation_fraction: 0.20,
            fee_rate: 0.0,
            atr_stop_multiplier: 2.0,
            max_drawdown_limit: None,
            max_trades_per_day: 20,
            cooldown_bars: 5,

            entry_z: 1.5,
            exit_z: 0.3,
            mom_period: 100,
            rank_period: 100,
            momentum_rsi_period: 14,
            ema_fast: 12,
            ema_slow: 26,
            volume_ma: 20,

            bb_period: 100,
            bb_std: 2.0,
            mean_reversion_rsi_period: 20,
            rsi_lower: 30.0,
            rsi_upper: 70.0,
            bb_entry: 0.8,
            bb_exit: 0.1,
            mean_reversion_vol_fast: 20,
            mean_reversion_vol_slow: 60,

            vol_short: 50,
            vol_long: 200,
            trend_sma: 300,
            trend_threshold: 0.005,
        }
    }
}
