mod info_gain_split_criterion;
mod split_criterion;
mod split_heuristic;
mod variance_impurity_split_criterion;

pub use info_gain_split_criterion::InfoGainSplitCriterion;
pub use split_criterion::SplitCriterion;
pub use split_heuristic::SplitHeuristic;
pub use variance_impurity_split_criterion::VarianceImpuritySplitCriterion;
