use crate::core::instance_header::InstanceHeader;
use crate::core::instances::ClassLabel;

/// Read-only view of one labelled example.
pub trait Instance {
    fn value_at_index(&self, index: usize) -> Option<u8>;

    fn class_index(&self) -> usize;

    fn class_value(&self) -> Option<u8> {
        self.value_at_index(self.class_index())
    }

    fn class_label(&self) -> Option<ClassLabel> {
        self.class_value().map(ClassLabel::from_value)
    }

    fn number_of_attributes(&self) -> usize;

    fn to_vec(&self) -> Vec<u8>;

    fn header(&self) -> &InstanceHeader;
}
