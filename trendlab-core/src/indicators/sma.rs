//! Simple Moving Average — running sum over a fixed window.

use super::Indicator;
use crate::ring_buffer::RingBuffer;

#[derive(Debug, Clone)]
pub struct Sma {
    window: RingBuffer<f64>,
    period: usize,
    sum: f64,
}

impl Sma {
    pub fn new(period: usize) -> Self {
        assert!(period >= 1, "SMA period must be >= 1");
        Self {
            window: RingBuffer::new(period),
            period,
            sum: 0.0,
        }
    }
}

impl Indicator for Sma {
    type Value = f64;

    fn update(&mut self, x: f64) -> f64 {
        if self.window.is_full() {
            // Evict the oldest sample before adding the new one.
            let evicted = self.window.get(self.window.size() - 1).unwrap();
            self.sum -= evicted;
        }
        self.sum += x;
        self.window.push(x);
        self.value()
    }

    fn ready(&self) -> bool {
        self.window.size() >= self.period
    }

    fn value(&self) -> f64 {
        self.sum / self.period as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::assert_close;

    #[test]
    fn not_ready_until_period_samples() {
        let mut sma = Sma::new(3);
        sma.update(1.0);
        assert!(!sma.ready());
        sma.update(2.0);
        assert!(!sma.ready());
        sma.update(3.0);
        assert!(sma.ready());
    }

    #[test]
    fn matches_batch_mean() {
        let mut sma = Sma::new(5);
        let xs = [10.0, 11.0, 12.0, 13.0, 14.0, 15.0, 16.0];
        let mut last = 0.0;
        for &x in &xs {
            last = sma.update(x);
        }
        assert_close(last, (12.0 + 13.0 + 14.0 + 15.0 + 16.0) / 5.0, 1e-9);
    }

    #[test]
    fn period_one_tracks_input() {
        let mut sma = Sma::new(1);
        assert_close(sma.update(100.0), 100.0, 1e-9);
        assert_close(sma.update(200.0), 200.0, 1e-9);
    }

    #[test]
    fn streaming_equals_batch_reference() {
        let xs: Vec<f64> = (0..50).map(|i| (i as f64).sin() * 10.0 + 100.0).collect();
        let period = 7;
        let mut sma = Sma::new(period);
        for (i, &x) in xs.iter().enumerate() {
            let v = sma.update(x);
            if i + 1 >= period {
                let batch_mean: f64 = xs[i + 1 - period..=i].iter().sum::<f64>() / period as f64;
                assert_close(v, batch_mean, 1e-9);
            }
        }
    }
}
