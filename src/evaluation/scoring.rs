use crate::classifiers::Classifier;
use crate::core::dataset::Dataset;
use crate::core::instances::Instance;
use crate::evaluation::{BasicClassificationEvaluator, BasicEstimator, PerformanceEvaluator};

/// Fraction of `dataset` items whose predicted label matches the true one.
/// An empty dataset scores 0.
pub fn accuracy<C: Classifier + ?Sized>(classifier: &C, dataset: &Dataset) -> f64 {
    let hits = dataset
        .items()
        .iter()
        .filter(|item| {
            let predicted = classifier.predict(*item);
            predicted.is_some() && predicted == item.class_label()
        })
        .count();
    match dataset.len() {
        0 => 0.0,
        n => hits as f64 / n as f64,
    }
}

/// Runs every item of `dataset` through `classifier` into a fresh evaluator.
pub fn evaluate<C: Classifier + ?Sized>(
    classifier: &C,
    dataset: &Dataset,
) -> BasicClassificationEvaluator<BasicEstimator> {
    let mut evaluator = BasicClassificationEvaluator::new();
    for item in dataset.items() {
        let votes = classifier.get_votes_for_instance(item).unwrap_or_default();
        evaluator.add_result(item, &votes);
    }
    evaluator
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifiers::decision_tree::Id3Builder;
    use crate::classifiers::decision_tree::split_criteria::SplitHeuristic;
    use crate::core::instances::ClassLabel;
    use crate::evaluation::PerformanceEvaluatorExt;
    use crate::testing::dummies::{dataset, header_with_features, separable_ab};
    use crate::testing::stubs::ConstantClassifier;
    use std::sync::Arc;

    #[test]
    fn induced_tree_fits_its_training_data() {
        let tree = Id3Builder::new(SplitHeuristic::InformationGain).induce(separable_ab());
        assert_eq!(accuracy(&tree, &separable_ab()), 1.0);
    }

    #[test]
    fn empty_dataset_scores_zero() {
        let header = header_with_features(2);
        let classifier = ConstantClassifier::new(Arc::clone(&header), Some(ClassLabel::Positive));
        assert_eq!(accuracy(&classifier, &dataset(&header, &[])), 0.0);
    }

    #[test]
    fn constant_prediction_scores_label_share() {
        let ds = separable_ab();
        let header = Arc::clone(ds.header());
        let positive = ConstantClassifier::new(Arc::clone(&header), Some(ClassLabel::Positive));
        assert_eq!(accuracy(&positive, &ds), 0.5);

        let silent = ConstantClassifier::new(header, None);
        assert_eq!(accuracy(&silent, &ds), 0.0);
    }

    #[test]
    fn evaluator_agrees_with_accuracy() {
        let ds = separable_ab();
        let positive = ConstantClassifier::new(Arc::clone(ds.header()), Some(ClassLabel::Positive));
        let ev = evaluate(&positive, &ds);
        assert_eq!(ev.metric("accuracy"), Some(accuracy(&positive, &ds)));
    }
}
