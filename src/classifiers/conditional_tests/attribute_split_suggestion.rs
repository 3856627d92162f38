use crate::classifiers::conditional_tests::BinaryAttributeTest;
use std::cmp::Ordering;

/// Outcome of scoring one candidate attribute: the test it induces, the
/// `[neg, pos]` distribution of each branch and the weighted impurity (merit).
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeSplitSuggestion {
    split_test: BinaryAttributeTest,
    resulting_class_distribution: [[u64; 2]; 2],
    merit: f64,
}

impl AttributeSplitSuggestion {
    pub fn new(
        split_test: BinaryAttributeTest,
        resulting_class_distribution: [[u64; 2]; 2],
        merit: f64,
    ) -> Self {
        Self {
            split_test,
            resulting_class_distribution,
            merit,
        }
    }

    pub fn get_split_test(&self) -> BinaryAttributeTest {
        self.split_test
    }

    pub fn get_resulting_class_distribution(&self) -> &[[u64; 2]; 2] {
        &self.resulting_class_distribution
    }

    pub fn get_merit(&self) -> f64 {
        self.merit
    }

    pub fn number_of_splits(&self) -> usize {
        self.resulting_class_distribution.len()
    }

    pub fn resulting_class_distribution_from_split(&self, split_index: usize) -> [u64; 2] {
        self.resulting_class_distribution[split_index]
    }
}

impl PartialOrd for AttributeSplitSuggestion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.merit.partial_cmp(&other.merit)
    }
}
