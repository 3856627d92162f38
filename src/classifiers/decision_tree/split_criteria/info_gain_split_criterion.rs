use crate::classifiers::decision_tree::split_criteria::split_criterion::SplitCriterion;

/// Binary entropy in bits. Minimising the weighted child entropy is the same
/// as maximising information gain.
#[derive(Debug, Default, Clone, Copy)]
pub struct InfoGainSplitCriterion;

impl InfoGainSplitCriterion {
    pub fn new() -> Self {
        Self
    }
}

impl SplitCriterion for InfoGainSplitCriterion {
    fn impurity(&self, neg: u64, pos: u64) -> f64 {
        if neg == 0 || pos == 0 {
            return 0.0;
        }
        let total = (neg + pos) as f64;
        let p0 = neg as f64 / total;
        let p1 = pos as f64 / total;
        -p0 * p0.log2() - p1 * p1.log2()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pure_groups_have_zero_entropy() {
        let c = InfoGainSplitCriterion::new();
        assert_eq!(c.impurity(0, 9), 0.0);
        assert_eq!(c.impurity(4, 0), 0.0);
        assert_eq!(c.impurity(0, 0), 0.0);
    }

    #[test]
    fn balanced_group_has_one_bit() {
        let c = InfoGainSplitCriterion::new();
        assert!((c.impurity(3, 3) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn weighted_merit() {
        let c = InfoGainSplitCriterion::new();
        // 4 mixed examples (1 bit) out of 6, plus a pure pair.
        let merit = c.merit_of_split(&[[2, 2], [0, 2]]);
        assert!((merit - 2.0 / 3.0).abs() < 1e-12);
    }
}
