use crate::classifiers::decision_tree::split_criteria::SplitHeuristic;
use crate::ui::types::ConfigError;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use strum::IntoEnumIterator;

pub const USAGE: &str = "\
id3-prune <L> <K> <training-set> <validation-set> <test-set> <to-print>
            L: maximum number of post-pruning trials
            K: maximum number of nodes to prune in each pruning trial
            training-set: {set1, set2}
            validation-set: {set1, set2}
            test-set: {set1, set2}
            to-print: {yes, no}";

/// Everything one experiment run needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
#[schemars(title = "Experiment")]
pub struct ExperimentConfig {
    #[schemars(
        title = "Pruning Trials (L)",
        description = "Number of independent post-pruning trials"
    )]
    pub trials: u64,

    #[schemars(
        title = "Max Prunes per Trial (K)",
        description = "Upper bound on the nodes collapsed in one trial"
    )]
    pub max_prunes: u64,

    #[schemars(title = "Training Set", description = "CSV file the trees are grown from")]
    pub training_set: PathBuf,

    #[schemars(title = "Validation Set", description = "CSV file scoring pruning trials")]
    pub validation_set: PathBuf,

    #[schemars(title = "Test Set", description = "CSV file for the reported accuracies")]
    pub test_set: PathBuf,

    #[schemars(skip)]
    pub heuristics: Vec<SplitHeuristic>,

    #[schemars(
        title = "Seed",
        description = "Seed for the pruning search (None = fresh entropy)"
    )]
    pub seed: Option<u64>,

    #[schemars(title = "Print Trees", description = "Print the pruned trees after the table")]
    pub print_tree: bool,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            trials: 1500,
            max_prunes: 7,
            training_set: resolve_set("set1", "training_set.csv"),
            validation_set: resolve_set("set1", "validation_set.csv"),
            test_set: resolve_set("set1", "test_set.csv"),
            heuristics: SplitHeuristic::iter().collect(),
            seed: None,
            print_tree: false,
        }
    }
}

/// Maps a `set1`/`set2` selector to its data directory. Any selector
/// containing `1` picks `data_sets1`; everything else picks `data_sets2`.
pub fn resolve_set(selector: &str, file_name: &str) -> PathBuf {
    let dir = if selector.contains('1') {
        "data_sets1"
    } else {
        "data_sets2"
    };
    Path::new(dir).join(file_name)
}

/// Signed integer, negatives clamped to 0 (no trials, no prunes).
fn parse_count(name: &'static str, raw: &str) -> Result<u64, ConfigError> {
    let n: i64 = raw
        .trim()
        .parse()
        .map_err(|source| ConfigError::InvalidValue {
            name,
            value: raw.to_string(),
            source,
        })?;
    Ok(u64::try_from(n).unwrap_or(0))
}

impl ExperimentConfig {
    /// `<L> <K> <training-set> <validation-set> <test-set> <to-print>`; extra
    /// arguments are ignored.
    pub fn from_positional<S: AsRef<str>>(args: &[S]) -> Result<Self, ConfigError> {
        if args.len() < 6 {
            return Err(ConfigError::ArgumentCount(args.len()));
        }
        let arg = |i: usize| args[i].as_ref();
        Ok(Self {
            trials: parse_count("L", arg(0))?,
            max_prunes: parse_count("K", arg(1))?,
            training_set: resolve_set(arg(2), "training_set.csv"),
            validation_set: resolve_set(arg(3), "validation_set.csv"),
            test_set: resolve_set(arg(4), "test_set.csv"),
            print_tree: arg(5).eq_ignore_ascii_case("yes"),
            ..Self::default()
        })
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.heuristics.is_empty() {
            return Err(ConfigError::NoHeuristics);
        }
        Ok(())
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn defaults_match_documented_setting() {
        let c = ExperimentConfig::default();
        assert_eq!(c.trials, 1500);
        assert_eq!(c.max_prunes, 7);
        assert_eq!(c.training_set, Path::new("data_sets1/training_set.csv"));
        assert_eq!(c.test_set, Path::new("data_sets1/test_set.csv"));
        assert_eq!(
            c.heuristics,
            vec![SplitHeuristic::InformationGain, SplitHeuristic::VarianceImpurity]
        );
        assert!(!c.print_tree);
    }

    #[test]
    fn positional_arguments() {
        let c = ExperimentConfig::from_positional(&["10", "3", "set2", "set1", "x", "YES"]).unwrap();
        assert_eq!(c.trials, 10);
        assert_eq!(c.max_prunes, 3);
        assert_eq!(c.training_set, Path::new("data_sets2/training_set.csv"));
        assert_eq!(c.validation_set, Path::new("data_sets1/validation_set.csv"));
        assert_eq!(c.test_set, Path::new("data_sets2/test_set.csv"));
        assert!(c.print_tree);
    }

    #[test]
    fn malformed_positional_arguments() {
        assert!(matches!(
            ExperimentConfig::from_positional(&["10", "3"]),
            Err(ConfigError::ArgumentCount(2))
        ));
        assert!(matches!(
            ExperimentConfig::from_positional(&["ten", "3", "set1", "set1", "set1", "no"]),
            Err(ConfigError::InvalidValue { name: "L", .. })
        ));
        assert!(matches!(
            ExperimentConfig::from_positional(&["1", "3.5", "set1", "set1", "set1", "no"]),
            Err(ConfigError::InvalidValue { name: "K", .. })
        ));
    }

    #[test]
    fn negative_counts_mean_zero() {
        let c = ExperimentConfig::from_positional(&["-4", "-3", "set1", "set1", "set1", "no"]).unwrap();
        assert_eq!(c.trials, 0);
        assert_eq!(c.max_prunes, 0);

        let c = ExperimentConfig::from_positional(&["5", "-1", "set1", "set1", "set1", "no"]).unwrap();
        assert_eq!(c.trials, 5);
        assert_eq!(c.max_prunes, 0);
    }

    #[test]
    fn json_file_fills_missing_fields_with_defaults() {
        let mut f = NamedTempFile::new().unwrap();
        write!(f, r#"{{"trials": 20, "heuristics": ["variance-impurity"], "seed": 5}}"#).unwrap();
        let c = ExperimentConfig::from_json_file(f.path()).unwrap();
        assert_eq!(c.trials, 20);
        assert_eq!(c.max_prunes, 7);
        assert_eq!(c.heuristics, vec![SplitHeuristic::VarianceImpurity]);
        assert_eq!(c.seed, Some(5));
    }

    #[test]
    fn json_file_errors() {
        let mut empty = NamedTempFile::new().unwrap();
        write!(empty, r#"{{"heuristics": []}}"#).unwrap();
        assert!(matches!(
            ExperimentConfig::from_json_file(empty.path()),
            Err(ConfigError::NoHeuristics)
        ));

        let mut bad = NamedTempFile::new().unwrap();
        write!(bad, "{{ trials: ").unwrap();
        assert!(matches!(
            ExperimentConfig::from_json_file(bad.path()),
            Err(ConfigError::Parse { .. })
        ));

        assert!(matches!(
            ExperimentConfig::from_json_file("/no/such/config.json"),
            Err(ConfigError::Read { .. })
        ));
    }

    #[test]
    fn seed_override_keeps_existing_when_absent() {
        let c = ExperimentConfig {
            seed: Some(1),
            ..Default::default()
        };
        assert_eq!(c.clone().with_seed(None).seed, Some(1));
        assert_eq!(c.with_seed(Some(9)).seed, Some(9));
    }
}
