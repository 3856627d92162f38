/// Running scalar estimate fed one observation at a time.
pub trait Estimator {
    fn add(&mut self, v: f64);

    /// Current estimate; NaN before any observation.
    fn estimation(&self) -> f64;

    fn observations(&self) -> u64;

    /// Like [`Estimator::estimation`] but falls back to `empty` when nothing
    /// has been observed.
    fn estimation_or(&self, empty: f64) -> f64 {
        if self.observations() == 0 {
            empty
        } else {
            self.estimation()
        }
    }
}
