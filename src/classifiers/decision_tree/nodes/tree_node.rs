use crate::classifiers::conditional_tests::BinaryAttributeTest;
use crate::classifiers::decision_tree::nodes::NodeStats;
use crate::core::instance_header::InstanceHeader;
use crate::core::instances::{ClassLabel, Instance};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Branch indices leading from the root to a node.
pub type NodePath = Vec<usize>;

/// Binary decision tree node.
///
/// A `Split` routes attribute value 0 to `children[0]` and value 1 to
/// `children[1]`. Internal nodes are addressed by their 1-based pre-order
/// position among internal nodes; leaves have no position. Positions are
/// derived from the current shape on every lookup, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TreeNode {
    Leaf {
        stats: NodeStats,
    },
    Split {
        stats: NodeStats,
        test: BinaryAttributeTest,
        children: Box<[TreeNode; 2]>,
    },
}

impl TreeNode {
    pub fn leaf(stats: NodeStats) -> Self {
        TreeNode::Leaf { stats }
    }

    pub fn split(stats: NodeStats, test: BinaryAttributeTest, children: [TreeNode; 2]) -> Self {
        TreeNode::Split {
            stats,
            test,
            children: Box::new(children),
        }
    }

    pub fn stats(&self) -> &NodeStats {
        match self {
            TreeNode::Leaf { stats } | TreeNode::Split { stats, .. } => stats,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, TreeNode::Leaf { .. })
    }

    /// Children in branch order; empty for a leaf.
    pub fn children(&self) -> &[TreeNode] {
        match self {
            TreeNode::Leaf { .. } => &[],
            TreeNode::Split { children, .. } => children.as_slice(),
        }
    }

    pub fn split_test(&self) -> Option<BinaryAttributeTest> {
        match self {
            TreeNode::Leaf { .. } => None,
            TreeNode::Split { test, .. } => Some(*test),
        }
    }

    /// Walks from this node to a leaf and returns the leaf's label.
    ///
    /// `None` if the instance lacks a tested attribute or the leaf was never
    /// classified.
    pub fn predict(&self, instance: &dyn Instance) -> Option<ClassLabel> {
        let mut node = self;
        loop {
            match node {
                TreeNode::Leaf { stats } => return stats.classifier(),
                TreeNode::Split { test, children, .. } => {
                    node = &children[test.branch_for_instance(instance)?];
                }
            }
        }
    }

    /// Numbers the internal nodes in pre-order starting at `offset + 1` and
    /// returns the highest number assigned (`offset` when there are none).
    pub fn order_nodes(&self, offset: usize) -> usize {
        match self {
            TreeNode::Leaf { .. } => offset,
            TreeNode::Split { children, .. } => children
                .iter()
                .fold(offset + 1, |last, child| child.order_nodes(last)),
        }
    }

    pub fn internal_node_count(&self) -> usize {
        self.order_nodes(0)
    }

    pub fn leaf_count(&self) -> usize {
        match self {
            TreeNode::Leaf { .. } => 1,
            TreeNode::Split { children, .. } => children.iter().map(TreeNode::leaf_count).sum(),
        }
    }

    /// Number of edges on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        match self {
            TreeNode::Leaf { .. } => 0,
            TreeNode::Split { children, .. } => {
                1 + children.iter().map(TreeNode::depth).max().unwrap_or(0)
            }
        }
    }

    /// Paths to every internal node in pre-order; entry `p - 1` addresses
    /// position `p`.
    pub fn addressing(&self) -> Vec<NodePath> {
        let mut table = Vec::new();
        let mut path = Vec::new();
        self.collect_paths(&mut path, &mut table);
        table
    }

    fn collect_paths(&self, path: &mut NodePath, table: &mut Vec<NodePath>) {
        if let TreeNode::Split { children, .. } = self {
            table.push(path.clone());
            for (branch, child) in children.iter().enumerate() {
                path.push(branch);
                child.collect_paths(path, table);
                path.pop();
            }
        }
    }

    pub fn node_at_path(&self, path: &[usize]) -> Option<&TreeNode> {
        path.iter()
            .try_fold(self, |node, &branch| node.children().get(branch))
    }

    /// Internal node at pre-order `position` (1-based), or `None` if out of range.
    pub fn node_at(&self, position: usize) -> Option<&TreeNode> {
        let mut next = 1;
        self.find(position, &mut next)
    }

    pub fn node_at_mut(&mut self, position: usize) -> Option<&mut TreeNode> {
        let mut next = 1;
        self.find_mut(position, &mut next)
    }

    fn find(&self, target: usize, next: &mut usize) -> Option<&TreeNode> {
        let TreeNode::Split { children, .. } = self else {
            return None;
        };
        if *next == target {
            return Some(self);
        }
        *next += 1;
        children.iter().find_map(|child| child.find(target, next))
    }

    fn find_mut(&mut self, target: usize, next: &mut usize) -> Option<&mut TreeNode> {
        if self.is_leaf() {
            return None;
        }
        if *next == target {
            return Some(self);
        }
        *next += 1;
        match self {
            TreeNode::Split { children, .. } => {
                for child in children.iter_mut() {
                    if let Some(found) = child.find_mut(target, next) {
                        return Some(found);
                    }
                }
                None
            }
            TreeNode::Leaf { .. } => None,
        }
    }

    /// Replaces this subtree with a leaf labelled by the majority of its own
    /// counts. Leaves are left as they are.
    pub fn collapse(&mut self) {
        if let TreeNode::Split { stats, .. } = self {
            let stats = stats.clone().purified();
            *self = TreeNode::Leaf { stats };
        }
    }

    /// Collapses the internal node at `position`. Returns `false`, and leaves
    /// the tree unchanged, when no such node exists.
    pub fn prune_at(&mut self, position: usize) -> bool {
        match self.node_at_mut(position) {
            Some(node) => {
                node.collapse();
                true
            }
            None => false,
        }
    }

    /// Structurally independent copy carrying only node statistics.
    pub fn deep_copy(&self) -> TreeNode {
        match self {
            TreeNode::Leaf { stats } => TreeNode::leaf(stats.clone()),
            TreeNode::Split {
                stats,
                test,
                children,
            } => TreeNode::split(
                stats.clone(),
                *test,
                [children[0].deep_copy(), children[1].deep_copy()],
            ),
        }
    }

    /// Display label: the tested attribute's name for a split, the class
    /// value for a leaf.
    pub fn label(&self, header: &InstanceHeader) -> String {
        match self {
            TreeNode::Leaf { stats } => stats
                .classifier()
                .unwrap_or_else(|| stats.majority_label())
                .to_string(),
            TreeNode::Split { test, .. } => header
                .attribute_name(test.attribute_index())
                .map(str::to_string)
                .unwrap_or_else(|| format!("#{}", test.attribute_index())),
        }
    }

    /// Indented text form, one line per leaf:
    ///
    /// ```text
    /// XB = 0 :
    /// | XC = 0 : 1
    /// | XC = 1 : 0
    /// XB = 1 : 1
    /// ```
    pub fn render(&self, header: &InstanceHeader) -> String {
        self.display(header).to_string()
    }

    /// [`fmt::Display`] adapter for [`TreeNode::render`].
    pub fn display<'a>(&'a self, header: &'a InstanceHeader) -> TreeDisplay<'a> {
        TreeDisplay { node: self, header }
    }

    fn write_branches<W: fmt::Write>(
        &self,
        header: &InstanceHeader,
        depth: usize,
        first: &mut bool,
        out: &mut W,
    ) -> fmt::Result {
        let TreeNode::Split { children, .. } = self else {
            return Ok(());
        };
        let name = self.label(header);
        for (branch, child) in children.iter().enumerate() {
            if !std::mem::take(first) {
                out.write_char('\n')?;
            }
            for _ in 0..depth {
                out.write_str("| ")?;
            }
            write!(out, "{name} = {branch} :")?;
            if child.is_leaf() {
                write!(out, " {}", child.label(header))?;
            } else {
                child.write_branches(header, depth + 1, first, out)?;
            }
        }
        Ok(())
    }
}

/// Borrowed tree plus the header naming its attributes.
pub struct TreeDisplay<'a> {
    node: &'a TreeNode,
    header: &'a InstanceHeader,
}

impl fmt::Display for TreeDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.node {
            TreeNode::Leaf { .. } => f.write_str(&self.node.label(self.header)),
            TreeNode::Split { .. } => self.node.write_branches(self.header, 0, &mut true, f),
        }
    }
}
