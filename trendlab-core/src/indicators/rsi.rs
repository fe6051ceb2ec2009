//! Relative Strength Index — Wilder-smoothed average gain/loss.
//!
//! Primed by averaging the first `period` price deltas, then Wilder
//! smoothing thereafter. `ready` after `period` deltas (i.e. `period + 1`
//! prices).

use super::Indicator;

#[derive(Debug, Clone)]
pub struct Rsi {
    period: usize,
    prev_price: Option<f64>,
    avg_gain: f64,
    avg_loss: f64,
    /// Deltas accumulated during the priming window (cleared once primed).
    priming: Vec<f64>,
    primed: bool,
    value: f64,
}

impl Rsi {
    pub fn new(period: usize) -> Self {
        assert!(period >= 1, "RSI period must be >= 1");
        Self {
            period,
            prev_price: None,
            avg_gain: 0.0,
            avg_loss: 0.0,
            priming: Vec::with_capacity(period),
            primed: false,
            value: f64::NAN,
        }
    }

    fn compute_rsi(avg_gain: f64, avg_loss: f64) -> f64 {
        if avg_loss == 0.0 {
            return 100.0;
        }
        100.0 - 100.0 / (1.0 + avg_gain / avg_loss)
    }
}

impl Indicator for Rsi {
    type Value = f64;

    fn update(&mut self, price: f64) -> f64 {
        let prev = match self.prev_price {
            None => {
                self.prev_price = Some(price);
                return self.value;
            }
            Some(p) => p,
        };
        self.prev_price = Some(price);
        let delta = price - prev;

        if !self.primed {
            self.priming.push(delta);
            if self.priming.len() == self.period {
                let (mut gain_sum, mut loss_sum) = (0.0, 0.0);
                for &d in &self.priming {
                    if d > 0.0 {
                        gain_sum += d;
                    } else {
                        loss_sum -= d;
                    }
                }
                self.avg_gain = gain_sum / self.period as f64;
                self.avg_loss = loss_sum / self.period as f64;
                self.primed = true;
                self.value = Self::compute_rsi(self.avg_gain, self.avg_loss);
            }
            return self.value;
        }

        let gain = delta.max(0.0);
        let loss = (-delta).max(0.0);
        let p = self.period as f64;
        self.avg_gain = (self.avg_gain * (p - 1.0) + gain) / p;
        self.avg_loss = (self.avg_loss * (p - 1.0) + loss) / p;
        self.value = Self::compute_rsi(self.avg_gain, self.avg_loss);
        self.value
    }

    fn ready(&self) -> bool {
        self.primed
    }

    fn value(&self) -> f64 {
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::assert_close;

    #[test]
    fn ready_after_period_plus_one_prices() {
        let mut rsi = Rsi::new(3);
        for p in [100.0, 101.0, 102.0] {
            rsi.update(p);
            assert!(!rsi.ready());
        }
        rsi.update(103.0);
        assert!(rsi.ready());
    }

    #[test]
    fn all_gains_yields_100() {
        let mut rsi = Rsi::new(3);
        for p in [100.0, 101.0, 102.0, 103.0, 104.0] {
            rsi.update(p);
        }
        assert_close(rsi.value(), 100.0, 1e-9);
    }

    #[test]
    fn all_losses_yields_zero_avg_loss_guard() {
        let mut rsi = Rsi::new(3);
        for p in [100.0, 99.0, 98.0, 97.0] {
            rsi.update(p);
        }
        // avg_gain == 0, avg_loss > 0 -> rsi = 0
        assert_close(rsi.value(), 0.0, 1e-9);
    }

    #[test]
    fn matches_reference_wilder_smoothing() {
        let prices = [
            44.34, 44.09, 44.15, 43.61, 44.33, 44.83, 45.10, 45.42, 45.84, 46.08, 45.89, 46.03,
            45.61, 46.28, 46.28, 46.00, 46.03,
        ];
        let period = 14;
        let mut deltas = vec![];
        for i in 1..prices.len() {
            deltas.push(prices[i] - prices[i - 1]);
        }
        let (mut gain_sum, mut loss_sum) = (0.0, 0.0);
        for &d in &deltas[0..period] {
            if d > 0.0 {
                gain_sum += d;
            } else {
                loss_sum -= d;
            }
        }
        let mut avg_gain = gain_sum / period as f64;
        let mut avg_loss = loss_sum / period as f64;
        let mut expected = Rsi::compute_rsi(avg_gain, avg_loss);

        let mut rsi = Rsi::new(period);
        for &p in &prices {
            rsi.update(p);
        }
        assert_close(rsi.value(), expected, 1e-9);

        for &d in &deltas[period..] {
            let gain = d.max(0.0);
            let loss = (-d).max(0.0);
            avg_gain = (avg_gain * (period as f64 - 1.0) + gain) / period as f64;
            avg_loss = (avg_loss * (period as f64 - 1.0) + loss) / period as f64;
            expected = Rsi::compute_rsi(avg_gain, avg_loss);
        }
        assert_close(rsi.value(), expected, 1e-9);
    }
}
