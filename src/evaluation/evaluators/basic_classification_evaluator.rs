use crate::core::instances::Instance;
use crate::evaluation::{Estimator, Measurement, PerformanceEvaluator};

/// Two-class evaluator.
///
/// Tracks:
/// - accuracy (`correct`), exactly 0 before any example;
/// - marginals of true and predicted labels for Cohen's kappa;
/// - per-class precision and recall, macro-averaged in `performance()`.
///
/// An example the model could not vote on counts as a miss and is also
/// reported under `"unrouted"`.
pub struct BasicClassificationEvaluator<E: Estimator + Default> {
    correct: E,
    true_marginal: [E; 2],
    predicted_marginal: [E; 2],
    precision: [E; 2],
    recall: [E; 2],
    unrouted: u64,
}

impl<E: Estimator + Default> BasicClassificationEvaluator<E> {
    pub fn new() -> Self {
        Self {
            correct: E::default(),
            true_marginal: Default::default(),
            predicted_marginal: Default::default(),
            precision: Default::default(),
            recall: Default::default(),
            unrouted: 0,
        }
    }

    pub fn examples_seen(&self) -> u64 {
        self.correct.observations()
    }

    pub fn accuracy(&self) -> f64 {
        self.correct.estimation_or(0.0)
    }

    #[inline]
    fn argmax(v: &[f64]) -> Option<usize> {
        v.iter()
            .take(2)
            .enumerate()
            .filter(|(_, x)| x.is_finite())
            .fold(None, |best: Option<(usize, f64)>, (i, &x)| match best {
                Some((_, b)) if b >= x => best,
                _ => Some((i, x)),
            })
            .map(|(i, _)| i)
    }

    fn kappa(&self) -> f64 {
        let p_o = self.accuracy();
        let p_e: f64 = (0..2)
            .map(|c| {
                self.true_marginal[c].estimation_or(0.0)
                    * self.predicted_marginal[c].estimation_or(0.0)
            })
            .sum();
        let denom = 1.0 - p_e;
        if denom.abs() > f64::EPSILON {
            (p_o - p_e) / denom
        } else {
            f64::NAN
        }
    }
}

fn f1(p: f64, r: f64) -> f64 {
    let s = p + r;
    if p.is_finite() && r.is_finite() && s > f64::EPSILON {
        2.0 * p * r / s
    } else {
        f64::NAN
    }
}

fn macro_average<E: Estimator>(per_class: &[E; 2]) -> f64 {
    let finite: Vec<f64> = per_class
        .iter()
        .map(Estimator::estimation)
        .filter(|v| v.is_finite())
        .collect();
    if finite.is_empty() {
        f64::NAN
    } else {
        finite.iter().sum::<f64>() / finite.len() as f64
    }
}

impl<E: Estimator + Default> Default for BasicClassificationEvaluator<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Estimator + Default> PerformanceEvaluator for BasicClassificationEvaluator<E> {
    fn reset(&mut self) {
        *self = Self::new();
    }

    fn add_result(&mut self, example: &dyn Instance, class_votes: &[f64]) {
        let Some(y) = example.class_label().map(|l| l.index()) else {
            return;
        };
        let yhat = Self::argmax(class_votes);
        let hit = yhat == Some(y);
        if yhat.is_none() {
            self.unrouted += 1;
        }

        self.correct.add(if hit { 1.0 } else { 0.0 });
        for c in 0..2 {
            self.true_marginal[c].add(if c == y { 1.0 } else { 0.0 });
            self.predicted_marginal[c].add(if Some(c) == yhat { 1.0 } else { 0.0 });
        }
        if let Some(p) = yhat {
            self.precision[p].add(if hit { 1.0 } else { 0.0 });
        }
        self.recall[y].add(if hit { 1.0 } else { 0.0 });
    }

    fn performance(&self) -> Vec<Measurement> {
        let mut m = vec![Measurement::new("accuracy", self.accuracy())];
        if self.examples_seen() == 0 {
            m.push(Measurement::new("kappa", 0.0));
            return m;
        }

        m.push(Measurement::new("kappa", self.kappa()));
        let precision = macro_average(&self.precision);
        let recall = macro_average(&self.recall);
        m.push(Measurement::new("precision", precision));
        m.push(Measurement::new("recall", recall));
        m.push(Measurement::new("f1", f1(precision, recall)));
        m.push(Measurement::new("unrouted", self.unrouted as f64));

        m
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::{BasicEstimator, PerformanceEvaluatorExt};
    use crate::testing::dummies::{header_with_features, instance};

    type Eval = BasicClassificationEvaluator<BasicEstimator>;

    fn labelled(y: u8) -> crate::core::instances::BinaryInstance {
        instance(&header_with_features(1), &[0, y])
    }

    fn votes(pred: usize) -> Vec<f64> {
        if pred == 0 { vec![1.0, 0.0] } else { vec![0.0, 1.0] }
    }

    #[test]
    fn accuracy_is_zero_when_empty() {
        let ev = Eval::new();
        assert_eq!(ev.metric("accuracy"), Some(0.0));
        assert_eq!(ev.metric("kappa"), Some(0.0));
        assert_eq!(ev.metric("precision"), None);
    }

    #[test]
    fn perfect_on_balanced_gives_kappa_one() {
        let mut ev = Eval::new();
        ev.add_result(&labelled(0), &votes(0));
        ev.add_result(&labelled(1), &votes(1));

        assert_eq!(ev.metric("accuracy"), Some(1.0));
        assert!((ev.metric("kappa").unwrap() - 1.0).abs() < 1e-12);
        assert!((ev.metric("f1").unwrap() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn chance_level_gives_kappa_zero() {
        let mut ev = Eval::new();
        ev.add_result(&labelled(0), &votes(1));
        ev.add_result(&labelled(1), &votes(1));

        assert!((ev.accuracy() - 0.5).abs() < 1e-12);
        assert!(ev.metric("kappa").unwrap().abs() < 1e-12);
    }

    #[test]
    fn missing_votes_count_as_misses() {
        let mut ev = Eval::new();
        ev.add_result(&labelled(1), &votes(1));
        ev.add_result(&labelled(1), &[]);

        assert_eq!(ev.examples_seen(), 2);
        assert!((ev.accuracy() - 0.5).abs() < 1e-12);
        assert_eq!(ev.metric("unrouted"), Some(1.0));
        assert!((ev.metric("recall").unwrap() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn reset_clears_counts() {
        let mut ev = Eval::new();
        ev.add_result(&labelled(1), &votes(1));
        ev.reset();
        assert_eq!(ev.examples_seen(), 0);
        assert_eq!(ev.accuracy(), 0.0);
    }
}
