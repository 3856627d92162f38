use crate::classifiers::decision_tree::DecisionTree;
use crate::classifiers::decision_tree::nodes::{NodeStats, TreeNode};
use crate::classifiers::decision_tree::split_criteria::{SplitCriterion, SplitHeuristic};
use crate::core::dataset::Dataset;
use std::sync::Arc;
use tracing::debug;

/// Grows a full ID3 tree, choosing each split by the configured heuristic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Id3Builder {
    heuristic: SplitHeuristic,
}

impl Id3Builder {
    pub fn new(heuristic: SplitHeuristic) -> Self {
        Self { heuristic }
    }

    pub fn heuristic(&self) -> SplitHeuristic {
        self.heuristic
    }

    /// Induces a tree from `training`. Every leaf of the result is
    /// classified; internal nodes keep their counts for later pruning.
    pub fn induce(&self, training: Dataset) -> DecisionTree {
        let header = Arc::clone(training.header());
        let criterion = self.heuristic.criterion();
        debug!(
            heuristic = %self.heuristic,
            examples = training.len(),
            features = header.number_of_features(),
            "inducing tree"
        );
        let root = grow(training, criterion.as_ref(), 0);
        let tree = DecisionTree::new(header, root);
        debug!(
            heuristic = %self.heuristic,
            internal_nodes = tree.internal_node_count(),
            depth = tree.depth(),
            "tree induced"
        );
        tree
    }
}

fn grow(dataset: Dataset, criterion: &dyn SplitCriterion, depth: usize) -> TreeNode {
    if dataset.stats().is_pure() {
        return TreeNode::leaf(dataset.into_stats());
    }
    if dataset.stats().mask().is_exhausted() {
        return TreeNode::leaf(dataset.into_stats().purified());
    }

    match dataset.split(criterion) {
        Err(unsplittable) => TreeNode::leaf(unsplittable.into_stats().purified()),
        Ok(split) => {
            debug!(
                depth,
                attribute = split.attribute_index(),
                merit = split.suggestion.get_merit(),
                "split"
            );
            let test = split.suggestion.get_split_test();
            let parent = split.parent;
            let children = split.branches.map(|branch| {
                if branch.is_empty() {
                    // No examples reached this side: label it from the parent.
                    let stats = NodeStats::new(
                        branch.stats().mask().clone(),
                        parent.neg_count(),
                        parent.pos_count(),
                    );
                    TreeNode::leaf(stats.purified())
                } else {
                    grow(branch, criterion, depth + 1)
                }
            });
            TreeNode::split(parent, test, children)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifiers::Classifier;
    use crate::core::instances::{ClassLabel, Instance};
    use crate::testing::dummies::{dataset, header_with_features, mixed_ab, separable_ab};

    #[test]
    fn separable_data_gives_depth_one_tree() {
        let tree = Id3Builder::new(SplitHeuristic::InformationGain).induce(separable_ab());
        assert_eq!(tree.internal_node_count(), 1);
        assert_eq!(tree.depth(), 1);
        assert_eq!(tree.root().split_test().unwrap().attribute_index(), 0);

        let items = separable_ab();
        for item in items.items() {
            assert_eq!(tree.predict(item), item.class_label());
        }
    }

    #[test]
    fn pure_training_set_is_a_single_leaf() {
        let header = header_with_features(2);
        let tree = Id3Builder::new(SplitHeuristic::VarianceImpurity)
            .induce(dataset(&header, &[&[0, 1, 1], &[1, 0, 1]]));
        assert!(tree.root().is_leaf());
        assert_eq!(tree.order_nodes(), 0);
        assert_eq!(tree.render(), "1");
    }

    #[test]
    fn every_leaf_is_classified() {
        fn check(node: &TreeNode) {
            match node {
                TreeNode::Leaf { stats } => assert!(stats.classifier().is_some()),
                TreeNode::Split { children, .. } => children.iter().for_each(check),
            }
        }
        for heuristic in [SplitHeuristic::InformationGain, SplitHeuristic::VarianceImpurity] {
            check(Id3Builder::new(heuristic).induce(mixed_ab()).root());
        }
    }

    #[test]
    fn exhausted_attributes_fall_back_to_majority() {
        let header = header_with_features(1);
        // Same attribute value, conflicting labels.
        let tree = Id3Builder::new(SplitHeuristic::InformationGain)
            .induce(dataset(&header, &[&[1, 1], &[1, 0], &[1, 1]]));
        assert_eq!(tree.internal_node_count(), 1);
        let [zero, one] = [&tree.root().children()[0], &tree.root().children()[1]];
        assert_eq!(one.stats().classifier(), Some(ClassLabel::Positive));
        assert_eq!(one.stats().class_distribution(), [1, 2]);
        // Empty side inherits the parent's counts.
        assert_eq!(zero.stats().class_distribution(), [1, 2]);
        assert_eq!(zero.stats().classifier(), Some(ClassLabel::Positive));
        assert!(zero.stats().mask().is_exhausted());
    }

    #[test]
    fn no_attribute_repeats_on_a_path() {
        fn walk(node: &TreeNode, used: &mut Vec<usize>) {
            if let Some(test) = node.split_test() {
                assert!(!used.contains(&test.attribute_index()));
                used.push(test.attribute_index());
                for child in node.children() {
                    walk(child, used);
                }
                used.pop();
            }
        }
        let header = header_with_features(3);
        let rows: Vec<Vec<u8>> = (0..16u8)
            .map(|n| {
                let (a, b, c) = (n & 1, (n >> 1) & 1, (n >> 2) & 1);
                vec![a, b, c, (a ^ b ^ c ^ (n >> 3)) & 1]
            })
            .collect();
        let refs: Vec<&[u8]> = rows.iter().map(Vec::as_slice).collect();
        let tree = Id3Builder::new(SplitHeuristic::InformationGain).induce(dataset(&header, &refs));
        walk(tree.root(), &mut Vec::new());
        assert!(tree.depth() <= 3);
    }

    #[test]
    fn induction_is_deterministic() {
        let builder = Id3Builder::new(SplitHeuristic::VarianceImpurity);
        assert_eq!(builder.induce(mixed_ab()), builder.induce(mixed_ab()));
    }
}
