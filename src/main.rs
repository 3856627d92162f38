use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};

use id3_prune::tasks::{Experiment, ExperimentReport};
use id3_prune::ui::cli::drivers::InquireDriver;
use id3_prune::ui::cli::wizard::prompt_experiment_config;
use id3_prune::ui::types::{ExperimentConfig, USAGE};

#[derive(Parser)]
#[command(name = "id3-prune")]
#[command(about = "ID3 decision trees with randomized post-pruning")]
#[command(version)]
struct Cli {
    /// <L> <K> <training-set> <validation-set> <test-set> <to-print>
    #[arg(value_name = "ARGS", allow_hyphen_values = true)]
    args: Vec<String>,

    /// Read the experiment from a JSON file instead of positional arguments
    #[arg(long, conflicts_with = "args")]
    config: Option<PathBuf>,

    /// Build the experiment through interactive prompts
    #[arg(long, conflicts_with_all = ["args", "config"])]
    interactive: bool,

    /// RNG seed for the pruning search
    #[arg(long)]
    seed: Option<u64>,

    /// Write each pruned tree as JSON into this directory
    #[arg(long)]
    export: Option<PathBuf>,

    /// Enable verbose (debug-level) logging
    #[arg(long)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(long)]
    quiet: bool,
}

fn resolve_config(cli: &Cli) -> Result<ExperimentConfig> {
    if cli.interactive {
        return prompt_experiment_config(&InquireDriver);
    }
    if let Some(path) = &cli.config {
        return Ok(ExperimentConfig::from_json_file(path).unwrap_or_else(|e| {
            warn!(error = %e, "unusable configuration file, running on the default setting");
            ExperimentConfig::default()
        }));
    }
    if cli.args.is_empty() {
        info!("no arguments given, running on the default setting");
        return Ok(ExperimentConfig::default());
    }
    Ok(ExperimentConfig::from_positional(&cli.args).unwrap_or_else(|e| {
        warn!(
            error = %e,
            "wrong input parameters, running on the default setting. Usage:\n{USAGE}"
        );
        ExperimentConfig::default()
    }))
}

fn export_trees(report: &ExperimentReport, dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).with_context(|| format!("failed to create {}", dir.display()))?;
    for result in &report.results {
        let path = dir.join(format!("{}.json", result.heuristic));
        let json = serde_json::to_string_pretty(&serde_json::json!({
            "tree": result.pruned_tree().to_json(),
            "test_metrics": result.test_metrics,
        }))?;
        fs::write(&path, json).with_context(|| format!("failed to write {}", path.display()))?;
        info!(path = %path.display(), "pruned tree exported");
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match (cli.verbose, cli.quiet) {
        (true, _) => "debug",
        (_, true) => "error",
        _ => "info",
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = resolve_config(&cli)?.with_seed(cli.seed);
    let report = Experiment::new(config)
        .run()
        .context("failed to load the data sets")?;

    println!("{report}");

    if let Some(dir) = &cli.export {
        export_trees(&report, dir)?;
    }
    Ok(())
}
