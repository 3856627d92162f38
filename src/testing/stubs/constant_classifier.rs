use crate::classifiers::Classifier;
use crate::core::instance_header::InstanceHeader;
use crate::core::instances::{ClassLabel, Instance};
use std::sync::Arc;

/// Answers every instance with the same label, or never answers.
pub struct ConstantClassifier {
    header: Arc<InstanceHeader>,
    label: Option<ClassLabel>,
}

impl ConstantClassifier {
    pub fn new(header: Arc<InstanceHeader>, label: Option<ClassLabel>) -> Self {
        Self { header, label }
    }
}

impl Classifier for ConstantClassifier {
    fn predict(&self, _instance: &dyn Instance) -> Option<ClassLabel> {
        self.label
    }

    fn model_context(&self) -> &InstanceHeader {
        &self.header
    }
}
