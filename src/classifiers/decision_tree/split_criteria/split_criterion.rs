/// Scores the label disorder of a group of examples; lower is purer.
pub trait SplitCriterion {
    /// Impurity of a group holding `neg` negative and `pos` positive examples.
    /// Must be 0 whenever either count is 0.
    fn impurity(&self, neg: u64, pos: u64) -> f64;

    /// Size-weighted impurity of the groups produced by a split, where each
    /// entry of `post_split_dists` is a `[neg, pos]` pair.
    fn merit_of_split(&self, post_split_dists: &[[u64; 2]]) -> f64 {
        let total: u64 = post_split_dists.iter().map(|d| d[0] + d[1]).sum();
        if total == 0 {
            return 0.0;
        }
        post_split_dists
            .iter()
            .map(|&[neg, pos]| ((neg + pos) as f64 / total as f64) * self.impurity(neg, pos))
            .sum()
    }
}
