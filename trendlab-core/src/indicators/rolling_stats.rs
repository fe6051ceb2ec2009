//! Rolling mean / population stddev / z-score over a fixed window.

use super::{Indicator, STDDEV_EPSILON};
use crate::ring_buffer::RingBuffer;

#[derive(Debug, Clone)]
pub struct RollingStats {
    window: RingBuffer<f64>,
    period: usize,
    sum: f64,
    sum_sq: f64,
    last: f64,
}

impl RollingStats {
    pub fn new(period: usize) -> Self {
        assert!(period >= 1, "RollingStats period must be >= 1");
        Self {
            window: RingBuffer::new(period),
            period,
            sum: 0.0,
            sum_sq: 0.0,
            last: 0.0,
        }
    }

    pub fn mean(&self) -> f64 {
        self.sum / self.period as f64
    }

    /// Population stddev (divide by P). Round-off negative variance is
    /// clamped to 0 before the square root.
    pub fn stddev(&self) -> f64 {
        let p = self.period as f64;
        let mean = self.mean();
        let variance = (self.sum_sq / p - mean * mean).max(0.0);
        variance.sqrt()
    }

    /// `(x - mean) / stddev`, or 0 when stddev is below epsilon.
    pub fn zscore(&self) -> f64 {
        let sd = self.stddev();
        if sd < STDDEV_EPSILON {
            return 0.0;
        }
        (self.last - self.mean()) / sd
    }
}

impl Indicator for RollingStats {
    /// `(mean, stddev, zscore)` of the window after this observation.
    type Value = (f64, f64, f64);

    fn update(&mut self, x: f64) -> Self::Value {
        if self.window.is_full() {
            let evicted = self.window.get(self.window.size() - 1).unwrap();
            self.sum -= evicted;
            self.sum_sq -= evicted * evicted;
        }
        self.sum += x;
        self.sum_sq += x * x;
        self.window.push(x);
        self.last = x;
        self.value()
    }

    fn ready(&self) -> bool {
        self.window.size() >= self.period
    }

    fn value(&self) -> Self::Value {
        (self.mean(), self.stddev(), self.zscore())
    }
}
