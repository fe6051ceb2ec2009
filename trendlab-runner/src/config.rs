//! Serializable run configuration, loaded from TOML, with a deterministic
//! content-addressable `run_id`.

use serde::{Deserialize, Serialize};
use std::path::Path;
use trendlab_core::engine::EngineConfig;

use crate::error::ConfigError;

/// Unique identifier for a run configuration (BLAKE3 hash of its canonical
/// JSON encoding). Two runs with identical configs share a `run_id`, which
/// is what testable property 8 (determinism) ultimately keys off of.
pub type RunId = String;

/// Serializable mirror of `trendlab_core::engine::EngineConfig`, plus the
/// location of the bar data to run against. Kept as a distinct type (rather
/// than deriving `Serialize` directly on `EngineConfig`) so the core crate
/// has zero serde-format coupling to the runner's on-disk shape.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RunConfig {
    pub data_path: String,

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

impl Default for RunConfig {
    fn default() -> Self {
        let e = EngineConfig::default();
        Self {
            data_path: String::new(),
            initial_capital: e.initial_capital,
            allocation_fraction: e.allocation_fraction,
            fee_rate: e.fee_rate,
            atr_stop_multiplier: e.atr_stop_multiplier,
            max_drawdown_limit: e.max_drawdown_limit,
            max_trades_per_day: e.max_trades_per_day,
            cooldown_bars: e.cooldown_bars,
            entry_z: e.entry_z,
            exit_z: e.exit_z,
            mom_period: e.mom_period,
            rank_period: e.rank_period,
            momentum_rsi_period: e.momentum_rsi_period,
            ema_fast: e.ema_fast,
            ema_slow: e.ema_slow,
            volume_ma: e.volume_ma,
            bb_period: e.bb_period,
            bb_std: e.bb_std,
            mean_reversion_rsi_period: e.mean_reversion_rsi_period,
            rsi_lower: e.rsi_lower,
            rsi_upper: e.rsi_upper,
            bb_entry: e.bb_entry,
            bb_exit: e.bb_exit,
            mean_reversion_vol_fast: e.mean_reversion_vol_fast,
            mean_reversion_vol_slow: e.mean_reversion_vol_slow,
            vol_short: e.vol_short,
            vol_long: e.vol_long,
            trend_sma: e.trend_sma,
            trend_threshold: e.trend_threshold,
        }
    }
}

impl RunConfig {
    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path_ref = path.as_ref();
        let path_str = path_ref.display().to_string();
        let raw = std::fs::read_to_string(path_ref).map_err(|source| ConfigError::Read {
            path: path_str.clone(),
            source,
        })?;
        toml::from_str(&raw).map_err(|source| ConfigError::Parse { path: path_str, source })
    }

    /// Deterministic content-addressable hash of this configuration,
    /// computed over its canonical JSON encoding so field order never
    /// affects the id.
    pub fn run_id(&self) -> RunId {
        let json = serde_json::to_string(self).expect("RunConfig serialization failed");
        blake3::hash(json.as_bytes()).to_hex().to_string()
    }

    pub fn to_engine_config(&self) -> EngineConfig {
        EngineConfig {
            initial_capital: self.initial_capital,
            allocation_fraction: self.allocation_fraction,
            fee_rate: self.fee_rate,
            atr_stop_multiplier: self.atr_stop_multiplier,
            max_drawdown_limit: self.max_drawdown_limit,
            max_trades_per_day: self.max_trades_per_day,
            cooldown_bars: self.cooldown_bars,
            entry_z: self.entry_z,
            exit_z: self.exit_z,
            mom_period: self.mom_period,
            rank_period: self.rank_period,
            momentum_rsi_period: self.momentum_rsi_period,
            ema_fast: self.ema_fast,
            ema_slow: self.ema_slow,
            volume_ma: self.volume_ma,
            bb_period: self.bb_period,
            bb_std: self.bb_std,
            mean_reversion_rsi_period: self.mean_reversion_rsi_period,
            rsi_lower: self.rsi_lower,
            rsi_upper: self.rsi_upper,
            bb_entry: self.bb_entry,
            bb_exit: self.bb_exit,
            mean_reversion_vol_fast: self.mean_reversion_vol_fast,
            mean_reversion_vol_slow: self.mean_reversion_vol_slow,
            vol_short: self.vol_short,
            vol_long: self.vol_long,
            trend_sma: self.trend_sma,
            trend_threshold: self.trend_threshold,
        }
    }
}
