use crate::core::instances::Instance;
use crate::evaluation::Measurement;
use std::collections::HashMap;

/// Accumulates labelled examples and the votes a model cast for them.
pub trait PerformanceEvaluator {
    /// Clears every accumulated count.
    fn reset(&mut self);

    /// Feeds one example and its class votes, one score per class. Empty
    /// votes mean the model produced no prediction and count as a miss.
    fn add_result(&mut self, example: &dyn Instance, class_votes: &[f64]);

    fn performance(&self) -> Vec<Measurement>;
}

pub trait PerformanceEvaluatorExt {
    /// `(name, value)` for each requested metric, in request order.
    fn metrics<'a, I>(&self, names: I) -> Vec<(String, Option<f64>)>
    where
        I: IntoIterator<Item = &'a str>;

    fn metric(&self, name: &str) -> Option<f64> {
        self.metrics([name]).into_iter().next().and_then(|(_, v)| v)
    }
}

impl<T: PerformanceEvaluator + ?Sized> PerformanceEvaluatorExt for T {
    fn metrics<'a, I>(&self, names: I) -> Vec<(String, Option<f64>)>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let map: HashMap<_, _> = self
            .performance()
            .into_iter()
            .map(|m| (m.name, m.value))
            .collect();
        names
            .into_iter()
            .map(|n| (n.to_string(), map.get(n).copied()))
            .collect()
    }
}
