mod experiment;

pub use experiment::{Experiment, ExperimentReport, HeuristicResult};
