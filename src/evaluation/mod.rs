mod estimators;
mod evaluators;
mod measurement;
mod scoring;

pub use estimators::{BasicEstimator, Estimator};
pub use evaluators::{BasicClassificationEvaluator, PerformanceEvaluator, PerformanceEvaluatorExt};
pub use measurement::Measurement;
pub use scoring::{accuracy, evaluate};
