use crate::classifiers::decision_tree::DecisionTree;
use crate::core::dataset::Dataset;
use crate::evaluation::accuracy;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

/// Result of a post-pruning search.
#[derive(Debug, Clone)]
pub struct PruneOutcome {
    /// Best tree found; the unpruned input if no trial beat it.
    pub tree: DecisionTree,
    pub accuracy: f64,
    pub baseline_accuracy: f64,
    /// Trials that strictly improved on the best accuracy seen so far.
    pub improved_trials: usize,
}

impl PruneOutcome {
    pub fn improved(&self) -> bool {
        self.improved_trials > 0
    }
}

/// Randomised reduced-error pruning.
///
/// Each of the `trials` attempts copies the original tree, collapses between
/// 1 and `max_prunes` randomly chosen internal nodes and scores the copy on
/// the validation set. Only a strictly better copy replaces the current best.
/// Trials never build on each other's results.
#[derive(Debug, Clone)]
pub struct PostPruner<R: Rng = StdRng> {
    trials: usize,
    max_prunes: usize,
    rng: R,
}

impl PostPruner<StdRng> {
    pub fn seeded(trials: usize, max_prunes: usize, seed: u64) -> Self {
        Self::new(trials, max_prunes, StdRng::seed_from_u64(seed))
    }

    pub fn from_os_rng(trials: usize, max_prunes: usize) -> Self {
        Self::new(trials, max_prunes, StdRng::from_os_rng())
    }
}

impl<R: Rng> PostPruner<R> {
    pub fn new(trials: usize, max_prunes: usize, rng: R) -> Self {
        Self {
            trials,
            max_prunes,
            rng,
        }
    }

    pub fn trials(&self) -> usize {
        self.trials
    }

    pub fn max_prunes(&self) -> usize {
        self.max_prunes
    }

    pub fn prune(&mut self, tree: &DecisionTree, validation: &Dataset) -> PruneOutcome {
        let baseline_accuracy = accuracy(tree, validation);
        let mut best = tree.deep_copy();
        let mut best_accuracy = baseline_accuracy;
        let mut improved_trials = 0;

        for trial in 1..=self.trials {
            let mut candidate = tree.deep_copy();
            let prunes = if self.max_prunes == 0 {
                0
            } else {
                self.rng.random_range(1..=self.max_prunes)
            };

            for _ in 0..prunes {
                let internal = candidate.order_nodes();
                if internal == 0 {
                    break;
                }
                let position = self.rng.random_range(1..=internal);
                if !candidate.prune_at(position) {
                    debug!(trial, position, "no internal node at position; skipped");
                }
            }

            let candidate_accuracy = accuracy(&candidate, validation);
            if candidate_accuracy > best_accuracy {
                debug!(
                    trial,
                    prunes,
                    accuracy = candidate_accuracy,
                    internal_nodes = candidate.internal_node_count(),
                    "pruned tree improved validation accuracy"
                );
                best = candidate;
                best_accuracy = candidate_accuracy;
                improved_trials += 1;
            }
        }

        info!(
            trials = self.trials,
            max_prunes = self.max_prunes,
            baseline = baseline_accuracy,
            accuracy = best_accuracy,
            internal_nodes_before = tree.internal_node_count(),
            internal_nodes_after = best.internal_node_count(),
            "post-pruning finished"
        );

        PruneOutcome {
            tree: best,
            accuracy: best_accuracy,
            baseline_accuracy,
            improved_trials,
        }
    }
}
