use crate::classifiers::decision_tree::split_criteria::SplitHeuristic;
use crate::classifiers::decision_tree::{DecisionTree, Id3Builder, PostPruner, PruneOutcome};
use crate::core::dataset::Dataset;
use crate::core::error::DataError;
use crate::evaluation::{Measurement, PerformanceEvaluator, accuracy, evaluate};
use crate::streams::CsvFileStream;
use crate::ui::types::ExperimentConfig;
use rand::Rng;
use std::fmt;
use std::path::{Path, PathBuf};
use strum::EnumMessage;
use tracing::info;

/// Grow, prune and score one tree per configured heuristic.
pub struct Experiment {
    config: ExperimentConfig,
}

/// Scores of one heuristic on the test set, before and after pruning.
#[derive(Debug, Clone)]
pub struct HeuristicResult {
    pub heuristic: SplitHeuristic,
    pub unpruned_accuracy: f64,
    pub pruned_accuracy: f64,
    /// Evaluator measurements of the pruned tree on the test set.
    pub test_metrics: Vec<Measurement>,
    pub tree: DecisionTree,
    pub pruning: PruneOutcome,
}

impl HeuristicResult {
    pub fn label(&self) -> &'static str {
        heuristic_label(self.heuristic)
    }

    pub fn pruned_tree(&self) -> &DecisionTree {
        &self.pruning.tree
    }
}

#[derive(Debug, Clone)]
pub struct ExperimentReport {
    pub trials: u64,
    pub max_prunes: u64,
    pub training_set: PathBuf,
    pub validation_set: PathBuf,
    pub test_set: PathBuf,
    pub print_tree: bool,
    pub results: Vec<HeuristicResult>,
}

fn heuristic_label(h: SplitHeuristic) -> &'static str {
    h.get_message().unwrap_or_else(|| h.into())
}

fn load(path: &Path) -> Result<Dataset, DataError> {
    let mut stream = CsvFileStream::open(path)?;
    let dataset = Dataset::from_stream(&mut stream)?;
    info!(path = %path.display(), examples = dataset.len(), "dataset loaded");
    Ok(dataset)
}

impl Experiment {
    pub fn new(config: ExperimentConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ExperimentConfig {
        &self.config
    }

    /// Loads the three CSV files named by the configuration and runs on them.
    pub fn run(&self) -> Result<ExperimentReport, DataError> {
        let training = load(&self.config.training_set)?;
        let validation = load(&self.config.validation_set)?;
        let test = load(&self.config.test_set)?;
        Ok(self.run_on(&training, &validation, &test))
    }

    pub fn run_on(&self, training: &Dataset, validation: &Dataset, test: &Dataset) -> ExperimentReport {
        let trials = usize::try_from(self.config.trials).unwrap_or(usize::MAX);
        let max_prunes = usize::try_from(self.config.max_prunes).unwrap_or(usize::MAX);
        let results = match self.config.seed {
            Some(seed) => {
                let mut pruner = PostPruner::seeded(trials, max_prunes, seed);
                self.run_heuristics(&mut pruner, training, validation, test)
            }
            None => {
                let mut pruner = PostPruner::from_os_rng(trials, max_prunes);
                self.run_heuristics(&mut pruner, training, validation, test)
            }
        };

        ExperimentReport {
            trials: self.config.trials,
            max_prunes: self.config.max_prunes,
            training_set: self.config.training_set.clone(),
            validation_set: self.config.validation_set.clone(),
            test_set: self.config.test_set.clone(),
            print_tree: self.config.print_tree,
            results,
        }
    }

    fn run_heuristics<R: Rng>(
        &self,
        pruner: &mut PostPruner<R>,
        training: &Dataset,
        validation: &Dataset,
        test: &Dataset,
    ) -> Vec<HeuristicResult> {
        self.config
            .heuristics
            .iter()
            .map(|&heuristic| {
                let tree = Id3Builder::new(heuristic).induce(training.clone());
                let pruning = pruner.prune(&tree, validation);
                let unpruned_accuracy = accuracy(&tree, test);
                let pruned_accuracy = accuracy(&pruning.tree, test);
                let test_metrics = evaluate(&pruning.tree, test).performance();
                info!(
                    heuristic = %heuristic,
                    unpruned = unpruned_accuracy,
                    pruned = pruned_accuracy,
                    "test accuracy"
                );
                HeuristicResult {
                    heuristic,
                    unpruned_accuracy,
                    pruned_accuracy,
                    test_metrics,
                    tree,
                    pruning,
                }
            })
            .collect()
    }
}

const RULE: &str = "+-------------------+----------------+--------------+";

impl fmt::Display for ExperimentReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Accuracy Table: L = {}, K = {}", self.trials, self.max_prunes)?;
        writeln!(
            f,
            "Training-set: {}; Validation-set: {}; Test-set: {}",
            self.training_set.display(),
            self.validation_set.display(),
            self.test_set.display()
        )?;
        writeln!(
            f,
            "Print pruned tree: {}",
            if self.print_tree { "Yes" } else { "No" }
        )?;
        writeln!(f, "{RULE}")?;
        writeln!(f, "|    Heuristics     |  No Pruning    | Post-pruning |")?;
        writeln!(f, "{RULE}")?;
        for r in &self.results {
            writeln!(
                f,
                "| {:<17} |  {:<13.6} | {:<12.6} |",
                r.label(),
                r.unpruned_accuracy,
                r.pruned_accuracy
            )?;
        }
        write!(f, "{RULE}")?;

        write!(f, "\n\nTest-set metrics after pruning:")?;
        for r in &self.results {
            write!(f, "\n| {:<17} |", r.label())?;
            for m in &r.test_metrics {
                write!(f, " {m} |")?;
            }
        }

        if self.print_tree {
            for r in &self.results {
                write!(
                    f,
                    "\n\n+---------------+---Decision Tree ({})---+---------------+\n{}",
                    r.label(),
                    r.pruned_tree()
                )?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::dummies::{noisy_parity, separable_ab};
    use std::fs;
    use tempfile::TempDir;

    fn config(seed: u64) -> ExperimentConfig {
        ExperimentConfig {
            trials: 30,
            max_prunes: 3,
            seed: Some(seed),
            ..Default::default()
        }
    }

    #[test]
    fn one_result_per_heuristic() {
        let (training, validation) = noisy_parity();
        let report = Experiment::new(config(4)).run_on(&training, &validation, &validation);
        let heuristics: Vec<_> = report.results.iter().map(|r| r.heuristic).collect();
        assert_eq!(
            heuristics,
            vec![SplitHeuristic::InformationGain, SplitHeuristic::VarianceImpurity]
        );
        for r in &report.results {
            assert!(r.pruned_tree().internal_node_count() <= r.tree.internal_node_count());
            assert!(r.pruning.accuracy >= r.pruning.baseline_accuracy);
        }
    }

    #[test]
    fn seeded_runs_repeat() {
        let (training, validation) = noisy_parity();
        let a = Experiment::new(config(8)).run_on(&training, &validation, &validation);
        let b = Experiment::new(config(8)).run_on(&training, &validation, &validation);
        assert_eq!(a.to_string(), b.to_string());
    }

    #[test]
    fn table_layout() {
        let ds = separable_ab();
        let report = Experiment::new(config(1)).run_on(&ds, &ds, &ds);
        let text = report.to_string();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "Accuracy Table: L = 30, K = 3");
        assert_eq!(
            lines[1],
            "Training-set: data_sets1/training_set.csv; Validation-set: data_sets1/validation_set.csv; Test-set: data_sets1/test_set.csv"
        );
        assert_eq!(lines[2], "Print pruned tree: No");
        assert_eq!(lines[6], "| Information Gain  |  1.000000      | 1.000000     |");
        assert_eq!(lines[7], "| Variance Impurity |  1.000000      | 1.000000     |");
        assert_eq!(lines.len(), 13);
    }

    #[test]
    fn metrics_of_pruned_trees_follow_the_table() {
        let ds = separable_ab();
        let report = Experiment::new(config(1)).run_on(&ds, &ds, &ds);
        let text = report.to_string();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[9], "");
        assert_eq!(lines[10], "Test-set metrics after pruning:");
        assert_eq!(
            lines[11],
            "| Information Gain  | accuracy: 1.000000 | kappa: 1.000000 | precision: 1.000000 | recall: 1.000000 | f1: 1.000000 | unrouted: 0.000000 |"
        );
        assert!(lines[12].starts_with("| Variance Impurity | accuracy: 1.000000 |"));
    }

    #[test]
    fn metrics_agree_with_the_accuracy_column() {
        let (training, validation) = noisy_parity();
        let report = Experiment::new(config(5)).run_on(&training, &validation, &validation);
        for r in &report.results {
            let names: Vec<_> = r.test_metrics.iter().map(|m| m.name.as_str()).collect();
            assert_eq!(names, ["accuracy", "kappa", "precision", "recall", "f1", "unrouted"]);
            assert_eq!(r.test_metrics[0].value, r.pruned_accuracy);
        }
    }

    #[test]
    fn printed_trees_follow_the_table() {
        let ds = separable_ab();
        let mut c = config(1);
        c.print_tree = true;
        c.heuristics = vec![SplitHeuristic::VarianceImpurity];
        let text = Experiment::new(c).run_on(&ds, &ds, &ds).to_string();
        assert!(text.ends_with(
            "+---------------+---Decision Tree (Variance Impurity)---+---------------+\nA = 0 : 0\nA = 1 : 1"
        ));
    }

    #[test]
    fn runs_from_csv_files() {
        let dir = TempDir::new().unwrap();
        let body = "XA,XB,Class\n0,0,0\n0,1,0\n1,0,1\n1,1,1\n";
        let mut c = config(2);
        for (field, name) in [
            (&mut c.training_set, "training_set.csv"),
            (&mut c.validation_set, "validation_set.csv"),
            (&mut c.test_set, "test_set.csv"),
        ] {
            let path = dir.path().join(name);
            fs::write(&path, body).unwrap();
            *field = path;
        }
        let report = Experiment::new(c).run().unwrap();
        assert!(report.results.iter().all(|r| r.unpruned_accuracy == 1.0));
        assert_eq!(report.results[0].tree.to_string(), "XA = 0 : 0\nXA = 1 : 1");
    }

    #[test]
    fn missing_file_is_reported() {
        let c = ExperimentConfig {
            training_set: PathBuf::from("/no/such/training_set.csv"),
            ..config(0)
        };
        assert!(matches!(Experiment::new(c).run(), Err(DataError::Io { .. })));
    }
}
