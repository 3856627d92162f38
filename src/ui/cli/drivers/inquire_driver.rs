use crate::ui::cli::drivers::PromptDriver;
use anyhow::Result;
use inquire::validator::Validation;
use inquire::{Confirm, CustomType, Text};

/// Terminal prompts backed by `inquire`.
pub struct InquireDriver;

fn check_range(x: u64, min: Option<u64>, max: Option<u64>) -> Validation {
    match (min, max) {
        (Some(lo), Some(hi)) if x < lo || x > hi => {
            Validation::Invalid(format!("Must be between {lo} and {hi}").into())
        }
        (Some(lo), None) if x < lo => Validation::Invalid(format!("Must be ≥ {lo}").into()),
        (None, Some(hi)) if x > hi => Validation::Invalid(format!("Must be ≤ {hi}").into()),
        _ => Validation::Valid,
    }
}

impl PromptDriver for InquireDriver {
    fn ask_bool(&self, title: &str, help: &str, default: bool) -> Result<bool> {
        Ok(Confirm::new(title)
            .with_default(default)
            .with_help_message(help)
            .prompt()?)
    }

    fn ask_string(&self, title: &str, help: &str, default: &str) -> Result<String> {
        Ok(Text::new(title)
            .with_initial_value(default)
            .with_help_message(help)
            .prompt()?)
    }

    fn ask_u64(
        &self,
        title: &str,
        help: &str,
        default: u64,
        min: Option<u64>,
        max: Option<u64>,
    ) -> Result<u64> {
        Ok(CustomType::<u64>::new(title)
            .with_default(default)
            .with_help_message(help)
            .with_validator(move |x: &u64| Ok(check_range(*x, min, max)))
            .prompt()?)
    }
}
