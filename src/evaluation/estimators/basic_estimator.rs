use crate::evaluation::estimators::Estimator;

/// Arithmetic mean of the observations. NaN observations are ignored.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct BasicEstimator {
    count: u64,
    sum: f64,
}

impl Estimator for BasicEstimator {
    #[inline]
    fn add(&mut self, v: f64) {
        if v.is_nan() {
            return;
        }
        self.count += 1;
        self.sum += v;
    }

    #[inline]
    fn estimation(&self) -> f64 {
        match self.count {
            0 => f64::NAN,
            n => self.sum / n as f64,
        }
    }

    fn observations(&self) -> u64 {
        self.count
    }
}
