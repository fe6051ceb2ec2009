//! Rate of Change — `(current - oldest) / oldest` over a `period + 1` window.

use super::Indicator;
use crate::ring_buffer::RingBuffer;

#[derive(Debug, Clone)]
pub struct Roc {
    window: RingBuffer<f64>,
    period: usize,
    value: f64,
}

impl Roc {
    pub fn new(period: usize) -> Self {
        assert!(period >= 1, "ROC period must be >= 1");
        Self {
            window: RingBuffer::new(period + 1),
            period,
            value: 0.0,
        }
    }
}

impl Indicator for Roc {
    type Value = f64;

    fn update(&mut self, x: f64) -> f64 {
        self.window.push(x);
        if self.ready() {
            let oldest = self.window.get(self.window.size() - 1).unwrap();
            self.value = if oldest == 0.0 {
                0.0
            } else {
                (x - oldest) / oldest
            };
        }
        self.value
    }

    fn ready(&self) -> bool {
        self.window.size() >= self.period + 1
    }

    fn value(&self) -> f64 {
        self.value
    }
}
