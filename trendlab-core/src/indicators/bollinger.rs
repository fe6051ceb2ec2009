//! Bollinger Bands — SMA basis with stddev-scaled upper/lower bands.

use super::rolling_stats::RollingStats;
use super::Indicator;

/// Middle, upper, lower bands, and `%b` position of the last close within them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BollingerValue {
    pub middle: f64,
    pub upper: f64,
    pub lower: f64,
    pub percent_b: f64,
}

#[derive(Debug, Clone)]
pub struct Bollinger {
    stats: RollingStats,
    k: f64,
    value: BollingerValue,
}

impl Bollinger {
    pub fn new(period: usize, k: f64) -> Self {
        Self {
            stats: RollingStats::new(period),
            k,
            value: BollingerValue {
                middle: f64::NAN,
                upper: f64::NAN,
                lower: f64::NAN,
                percent_b: 0.5,
            },
        }
    }

    pub fn ready(&self) -> bool {
        self.stats.ready()
    }

    pub fn value(&self) -> BollingerValue {
        self.value
    }

    pub fn update(&mut self, close: f64) -> BollingerValue {
        let (mean, std, _) = self.stats.update(close);
        let middle = mean;
        let upper = middle + self.k * std;
        let lower = middle - self.k * std;
        let width = upper - lower;
        let percent_b = if width.abs() < super::STDDEV_EPSILON {
            0.5
        } else {
            (close - lower) / width
        };
        self.value = BollingerValue {
            middle,
            upper,
            lower,
            percent_b,
        };
        self.value
    }
}
