mod decision_tree;
mod id3;
pub mod nodes;
mod post_pruning;
pub mod split_criteria;

pub use decision_tree::DecisionTree;
pub use id3::Id3Builder;
pub use post_pruning::{PostPruner, PruneOutcome};
