use crate::core::attribute_mask::AttributeMask;
use crate::core::instances::ClassLabel;
use serde::{Deserialize, Serialize};

/// Statistics a tree node keeps about the examples that reached it.
///
/// The examples themselves are released once the node is split; the label
/// counts and the attribute mask outlive them. `classifier` is `None` until
/// the node is proven pure or forced pure by majority vote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeStats {
    mask: AttributeMask,
    neg_count: u64,
    pos_count: u64,
    classifier: Option<ClassLabel>,
}

impl NodeStats {
    pub fn new(mask: AttributeMask, neg_count: u64, pos_count: u64) -> Self {
        Self {
            mask,
            neg_count,
            pos_count,
            classifier: None,
        }
    }

    pub fn mask(&self) -> &AttributeMask {
        &self.mask
    }

    pub fn neg_count(&self) -> u64 {
        self.neg_count
    }

    pub fn pos_count(&self) -> u64 {
        self.pos_count
    }

    pub fn total(&self) -> u64 {
        self.neg_count + self.pos_count
    }

    /// `[neg, pos]`, indexed by [`ClassLabel::index`].
    pub fn class_distribution(&self) -> [u64; 2] {
        [self.neg_count, self.pos_count]
    }

    pub fn classifier(&self) -> Option<ClassLabel> {
        self.classifier
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    pub fn is_pure(&self) -> bool {
        self.classifier.is_some()
    }

    /// Majority label; ties go to [`ClassLabel::Negative`].
    pub fn majority_label(&self) -> ClassLabel {
        if self.neg_count < self.pos_count {
            ClassLabel::Positive
        } else {
            ClassLabel::Negative
        }
    }

    /// Forces the classifier to the majority label.
    pub fn purify(&mut self) -> ClassLabel {
        let label = self.majority_label();
        self.classifier = Some(label);
        label
    }

    pub fn purified(mut self) -> Self {
        self.purify();
        self
    }

    /// Marks the stats pure when one of the labels is absent, unset otherwise.
    pub fn classify(mut self) -> Self {
        if self.neg_count == 0 || self.pos_count == 0 {
            self.purify();
        } else {
            self.classifier = None;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(neg: u64, pos: u64) -> NodeStats {
        NodeStats::new(AttributeMask::full(3, 2), neg, pos)
    }

    #[test]
    fn ties_purify_to_negative() {
        assert_eq!(stats(2, 2).purified().classifier(), Some(ClassLabel::Negative));
        assert_eq!(stats(0, 0).purified().classifier(), Some(ClassLabel::Negative));
        assert_eq!(stats(1, 3).purified().classifier(), Some(ClassLabel::Positive));
    }

    #[test]
    fn classify_only_marks_single_label_groups() {
        assert_eq!(stats(0, 4).classify().classifier(), Some(ClassLabel::Positive));
        assert_eq!(stats(5, 0).classify().classifier(), Some(ClassLabel::Negative));
        assert!(!stats(2, 1).classify().is_pure());
    }

    #[test]
    fn empty_means_no_counts() {
        assert!(stats(0, 0).is_empty());
        assert!(!stats(0, 1).is_empty());
        assert_eq!(stats(3, 4).class_distribution(), [3, 4]);
        assert_eq!(stats(3, 4).total(), 7);
    }
}
