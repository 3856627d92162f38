use crate::core::attribute_mask::AttributeMask;
use crate::core::error::DataError;
use serde::{Deserialize, Serialize};

/// Schema shared by every instance and dataset drawn from one source.
///
/// Attribute names are kept only for display; the algorithms address
/// attributes by index. The class attribute sits at `class_index`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceHeader {
    pub relation_name: String,
    pub attributes: Vec<String>,
    pub class_index: usize,
}

impl InstanceHeader {
    pub fn new(
        relation_name: String,
        attributes: Vec<String>,
        class_index: usize,
    ) -> Result<InstanceHeader, DataError> {
        if class_index >= attributes.len() {
            return Err(DataError::ClassIndexOutOfRange {
                class_index,
                attributes: attributes.len(),
            });
        }
        Ok(InstanceHeader {
            relation_name,
            attributes,
            class_index,
        })
    }

    /// Header whose class attribute is named `class_name`.
    pub fn with_class_attribute(
        relation_name: String,
        attributes: Vec<String>,
        class_name: &str,
    ) -> Result<InstanceHeader, DataError> {
        let class_index = attributes
            .iter()
            .position(|a| a == class_name)
            .ok_or_else(|| DataError::UnknownClassAttribute(class_name.to_string()))?;
        Self::new(relation_name, attributes, class_index)
    }

    pub fn relation_name(&self) -> &str {
        &self.relation_name
    }

    pub fn number_of_attributes(&self) -> usize {
        self.attributes.len()
    }

    /// Attributes available for splitting (the class attribute excluded).
    pub fn number_of_features(&self) -> usize {
        self.attributes.len().saturating_sub(1)
    }

    pub fn class_index(&self) -> usize {
        self.class_index
    }

    pub fn attribute_name(&self, index: usize) -> Option<&str> {
        self.attributes.get(index).map(String::as_str)
    }

    pub fn index_of_attribute(&self, name: &str) -> Option<usize> {
        self.attributes.iter().position(|a| a == name)
    }

    pub fn full_mask(&self) -> AttributeMask {
        AttributeMask::full(self.attributes.len(), self.class_index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(n: &[&str]) -> Vec<String> {
        n.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn rejects_out_of_range_class_index() {
        let err = InstanceHeader::new("r".into(), names(&["a", "b"]), 2).unwrap_err();
        assert!(matches!(
            err,
            DataError::ClassIndexOutOfRange {
                class_index: 2,
                attributes: 2
            }
        ));
    }

    #[test]
    fn class_attribute_by_name() {
        let h = InstanceHeader::with_class_attribute("r".into(), names(&["Class", "x", "y"]), "Class")
            .unwrap();
        assert_eq!(h.class_index(), 0);
        assert_eq!(h.number_of_features(), 2);
        assert_eq!(h.index_of_attribute("y"), Some(2));
        assert_eq!(h.attribute_name(1), Some("x"));

        let mask = h.full_mask();
        assert!(!mask.is_eligible(0));
        assert_eq!(mask.remaining(), 2);
    }

    #[test]
    fn unknown_class_attribute_is_reported() {
        let err = InstanceHeader::with_class_attribute("r".into(), names(&["a"]), "Class")
            .unwrap_err();
        assert!(matches!(err, DataError::UnknownClassAttribute(ref n) if n == "Class"));
    }
}
