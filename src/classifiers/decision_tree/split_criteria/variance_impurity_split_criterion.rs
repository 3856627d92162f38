use crate::classifiers::decision_tree::split_criteria::split_criterion::SplitCriterion;

/// Variance impurity `(p0 * p1) / (total * total)`.
///
/// The extra division by the squared group size is part of the metric as
/// used here; it is not the textbook `p0 * p1`.
#[derive(Debug, Default, Clone, Copy)]
pub struct VarianceImpuritySplitCriterion;

impl VarianceImpuritySplitCriterion {
    pub fn new() -> Self {
        Self
    }
}

impl SplitCriterion for VarianceImpuritySplitCriterion {
    fn impurity(&self, neg: u64, pos: u64) -> f64 {
        if neg == 0 || pos == 0 {
            return 0.0;
        }
        let total = (neg + pos) as f64;
        let p0 = neg as f64 / total;
        let p1 = pos as f64 / total;
        (p0 * p1) / (total * total)
    }
}
