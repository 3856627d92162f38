use crate::classifiers::decision_tree::split_criteria::SplitHeuristic;
use crate::ui::cli::drivers::PromptDriver;
use crate::ui::types::{ExperimentConfig, FieldKind, FieldSpec, field_specs};
use anyhow::{Context, Result};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use strum::{EnumMessage, IntoEnumIterator};

/// Walks every field of [`ExperimentConfig`], then asks which heuristics to run.
pub fn prompt_experiment_config<D: PromptDriver>(driver: &D) -> Result<ExperimentConfig> {
    let defaults = serde_json::to_value(ExperimentConfig::default())?;
    let mut params = Map::new();

    for spec in field_specs::<ExperimentConfig>()? {
        let init = spec
            .default
            .clone()
            .or_else(|| defaults.get(&spec.name).cloned());
        if let Some(value) = prompt_field(driver, &spec, init)? {
            params.insert(spec.name.clone(), value);
        }
    }

    let mut heuristics = Vec::new();
    for h in SplitHeuristic::iter() {
        let label = h.get_message().unwrap_or_else(|| h.into());
        let help = h.get_detailed_message().unwrap_or("");
        if driver.ask_bool(&format!("Run {label}?"), help, true)? {
            heuristics.push(Value::from(<&'static str>::from(h)));
        }
    }
    params.insert("heuristics".into(), Value::Array(heuristics));

    let config: ExperimentConfig = serde_json::from_value(Value::Object(params))?;
    config.validate()?;
    Ok(config)
}

fn prompt_field<D: PromptDriver>(
    driver: &D,
    spec: &FieldSpec,
    init: Option<Value>,
) -> Result<Option<Value>> {
    let help = spec.description.as_deref().unwrap_or("");

    if spec.nullable && spec.kind == FieldKind::Integer {
        let def = init
            .as_ref()
            .and_then(Value::as_u64)
            .map(|n| n.to_string())
            .unwrap_or_default();
        let answer = driver.ask_string(&spec.title, &format!("{help}\n(leave blank for none)"), &def)?;
        let answer = answer.trim();
        if answer.is_empty() {
            return Ok(None);
        }
        let n: u64 = answer
            .parse()
            .with_context(|| format!("invalid integer for {}", spec.title))?;
        return Ok(Some(Value::from(n)));
    }

    let value = match spec.kind {
        FieldKind::Boolean => {
            let def = init.and_then(|v| v.as_bool()).unwrap_or(false);
            Value::Bool(driver.ask_bool(&spec.title, help, def)?)
        }
        FieldKind::Integer => {
            let def = init.and_then(|v| v.as_u64()).unwrap_or(0);
            Value::from(driver.ask_u64(&spec.title, help, def, spec.min, spec.max)?)
        }
        FieldKind::String => {
            let def = init
                .and_then(|v| v.as_str().map(str::to_string))
                .unwrap_or_default();
            let answer = if spec.name.ends_with("_set") {
                prompt_path_until_ok(driver, &spec.title, help, &def, &["csv"])?
                    .to_string_lossy()
                    .into_owned()
            } else {
                driver.ask_string(&spec.title, help, &def)?
            };
            Value::String(answer)
        }
    };
    Ok(Some(value))
}

fn validate_path_str(input: &str, allowed_exts: &[&str]) -> Result<(), String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err("Path cannot be empty".into());
    }
    let p = Path::new(trimmed);
    if !p.exists() {
        return Err(format!("Path does not exist: {}", p.display()));
    }
    if !p.is_file() {
        return Err("Expected a file path, not a directory".into());
    }
    match p.extension().and_then(|e| e.to_str()) {
        Some(ext) if allowed_exts.iter().any(|e| e.eq_ignore_ascii_case(ext)) => Ok(()),
        _ => Err(format!("Expected a .{} file", allowed_exts.join(" / ."))),
    }
}

fn prompt_path_until_ok<D: PromptDriver>(
    driver: &D,
    title: &str,
    help: &str,
    default: &str,
    allowed_exts: &[&str],
) -> Result<PathBuf> {
    loop {
        let answer = driver.ask_string(title, help, default)?;
        match validate_path_str(&answer, allowed_exts) {
            Ok(()) => return Ok(PathBuf::from(answer.trim())),
            Err(msg) => eprintln!("✗ {msg}"),
        }
    }
}
