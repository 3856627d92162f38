use crate::core::instance_header::InstanceHeader;
use crate::core::instances::{ClassLabel, Instance};

pub trait Classifier {
    /// Label for `instance`, or `None` when the model cannot route it.
    fn predict(&self, instance: &dyn Instance) -> Option<ClassLabel>;

    fn model_context(&self) -> &InstanceHeader;

    /// One vote per class, indexed by [`ClassLabel::index`].
    fn get_votes_for_instance(&self, instance: &dyn Instance) -> Option<Vec<f64>> {
        self.predict(instance).map(|label| {
            let mut votes = vec![0.0; 2];
            votes[label.index()] = 1.0;
            votes
        })
    }
}
