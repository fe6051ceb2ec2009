//! Average True Range — Wilder-smoothed average of true range.

use super::Indicator;
use crate::domain::Bar;

#[derive(Debug, Clone)]
pub struct Atr {
    period: usize,
    prev_close: Option<f64>,
    priming: Vec<f64>,
    primed: bool,
    value: f64,
}

impl Atr {
    pub fn new(period: usize) -> Self {
        assert!(period >= 1, "ATR period must be >= 1");
        Self {
            period,
            prev_close: None,
            priming: Vec::with_capacity(period),
            primed: false,
            value: f64::NAN,
        }
    }

    /// Feed one bar. ATR takes a bar (not a scalar close) because true range
    /// needs high/low/prev-close together.
    pub fn update_bar(&mut self, bar: &Bar) -> f64 {
        let tr = bar.true_range(self.prev_close);
        self.prev_close = Some(bar.close);

        if !self.primed {
            self.priming.push(tr);
            if self.priming.len() == self.period {
                self.value = self.priming.iter().sum::<f64>() / self.period as f64;
                self.primed = true;
            }
            return self.value;
        }

        let p = self.period as f64;
        self.value = (self.value * (p - 1.0) + tr) / p;
        self.value
    }

    pub fn ready(&self) -> bool {
        self.primed
    }

    pub fn value(&self) -> f64 {
        self.value
    }
}
