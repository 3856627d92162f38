pub mod classifier;
pub mod conditional_tests;
pub mod decision_tree;

pub use classifier::Classifier;
