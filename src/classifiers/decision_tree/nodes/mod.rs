mod node_stats;
mod tree_node;

pub use node_stats::NodeStats;
pub use tree_node::{NodePath, TreeDisplay, TreeNode};
