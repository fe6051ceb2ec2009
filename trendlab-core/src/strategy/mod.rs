//! Regime detector + momentum and mean-reversion signal producers.
//!
//! All three share a small capability set (`on_bar` / `signal` / `name`) —
//! a tagged trait rather than a deep hierarchy, since there are exactly
//! three implementations and no plugin surface is required.

pub mod mean_reversion;
pub mod momentum;
pub mod regime;

pub use mean_reversion::{MeanReversion, MeanReversionConfig};
pub use momentum::{Momentum, MomentumConfig};
pub use regime::{Regime, RegimeConfig, RegimeDetector};

use crate::domain::Bar;

/// Desired position side: `-1` short, `0` flat, `+1` long.
pub type Signal = i8;

/// Shared contract for the two tradeable signal producers.
///
/// The regime detector does not implement this — it never emits a trade
/// signal, only a classification consumed by the engine's dispatcher.
pub trait StrategySignal {
    fn on_bar(&mut self, bar: &Bar);
    fn signal(&self) -> Signal;
    fn name(&self) -> &'static str;
}
