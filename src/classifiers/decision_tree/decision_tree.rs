use crate::classifiers::Classifier;
use crate::classifiers::decision_tree::nodes::{NodePath, TreeNode};
use crate::core::instance_header::InstanceHeader;
use crate::core::instances::{ClassLabel, Instance};
use serde_json::{Value, json};
use std::fmt;
use std::sync::Arc;

/// An induced tree together with the schema it was grown against.
#[derive(Debug, Clone, PartialEq)]
pub struct DecisionTree {
    header: Arc<InstanceHeader>,
    root: TreeNode,
}

impl DecisionTree {
    pub fn new(header: Arc<InstanceHeader>, root: TreeNode) -> Self {
        Self { header, root }
    }

    pub fn header(&self) -> &Arc<InstanceHeader> {
        &self.header
    }

    pub fn root(&self) -> &TreeNode {
        &self.root
    }

    pub fn into_root(self) -> TreeNode {
        self.root
    }

    pub fn order_nodes(&self) -> usize {
        self.root.order_nodes(0)
    }

    pub fn internal_node_count(&self) -> usize {
        self.root.internal_node_count()
    }

    pub fn leaf_count(&self) -> usize {
        self.root.leaf_count()
    }

    pub fn depth(&self) -> usize {
        self.root.depth()
    }

    pub fn addressing(&self) -> Vec<NodePath> {
        self.root.addressing()
    }

    pub fn node_at(&self, position: usize) -> Option<&TreeNode> {
        self.root.node_at(position)
    }

    pub fn prune_at(&mut self, position: usize) -> bool {
        self.root.prune_at(position)
    }

    pub fn deep_copy(&self) -> DecisionTree {
        DecisionTree {
            header: Arc::clone(&self.header),
            root: self.root.deep_copy(),
        }
    }

    pub fn render(&self) -> String {
        self.root.render(&self.header)
    }

    /// Shape summary plus the full node structure.
    pub fn to_json(&self) -> Value {
        json!({
            "relation": self.header.relation_name(),
            "attributes": self.header.attributes,
            "class_index": self.header.class_index(),
            "internal_nodes": self.internal_node_count(),
            "leaves": self.leaf_count(),
            "depth": self.depth(),
            "root": &self.root,
        })
    }
}

impl Classifier for DecisionTree {
    fn predict(&self, instance: &dyn Instance) -> Option<ClassLabel> {
        self.root.predict(instance)
    }

    fn model_context(&self) -> &InstanceHeader {
        &self.header
    }
}

impl fmt::Display for DecisionTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.root.display(&self.header), f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifiers::decision_tree::Id3Builder;
    use crate::classifiers::decision_tree::split_criteria::SplitHeuristic;
    use crate::testing::dummies::{instance, separable_ab};

    fn tree() -> DecisionTree {
        Id3Builder::new(SplitHeuristic::InformationGain).induce(separable_ab())
    }

    #[test]
    fn votes_are_one_hot() {
        let t = tree();
        let header = Arc::clone(t.header());
        let votes = t
            .get_votes_for_instance(&instance(&header, &[1, 0, 0]))
            .unwrap();
        assert_eq!(votes, vec![0.0, 1.0]);
        assert_eq!(t.model_context().class_index(), 2);
    }

    #[test]
    fn display_matches_render() {
        let t = tree();
        assert_eq!(t.to_string(), "A = 0 : 0\nA = 1 : 1");
        assert_eq!(t.to_string(), t.render());
    }

    #[test]
    fn json_carries_shape_and_nodes() {
        let v = tree().to_json();
        assert_eq!(v["internal_nodes"], 1);
        assert_eq!(v["leaves"], 2);
        assert_eq!(v["depth"], 1);
        assert_eq!(v["root"]["kind"], "split");
        assert_eq!(v["root"]["children"][1]["stats"]["classifier"], "positive");
    }

    #[test]
    fn deep_copy_keeps_header_and_detaches_nodes() {
        let t = tree();
        let mut copy = t.deep_copy();
        assert!(Arc::ptr_eq(t.header(), copy.header()));
        assert!(copy.prune_at(1));
        assert_eq!(copy.order_nodes(), 0);
        assert_eq!(t.order_nodes(), 1);
    }
}
