mod attribute_split_suggestion;

pub use attribute_split_suggestion::AttributeSplitSuggestion;
pub use binary_attribute_test::BinaryAttributeTest;
