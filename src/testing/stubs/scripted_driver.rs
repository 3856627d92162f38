use crate::ui::cli::drivers::PromptDriver;
use anyhow::{Context, Result, bail};
use std::cell::RefCell;
use std::collections::VecDeque;

/// Replays canned answers in order. An empty answer takes the prompt's default.
pub struct ScriptedDriver {
    answers: RefCell<VecDeque<String>>,
    titles: RefCell<Vec<String>>,
}

impl ScriptedDriver {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: RefCell::new(answers.into_iter().map(Into::into).collect()),
            titles: RefCell::new(Vec::new()),
        }
    }

    /// How many times a prompt with `title` was shown.
    pub fn asked(&self, title: &str) -> usize {
        self.titles.borrow().iter().filter(|t| *t == title).count()
    }

    fn next(&self, title: &str) -> Result<String> {
        self.titles.borrow_mut().push(title.to_string());
        self.answers
            .borrow_mut()
            .pop_front()
            .with_context(|| format!("no scripted answer left for '{title}'"))
    }
}

impl PromptDriver for ScriptedDriver {
    fn ask_bool(&self, title: &str, _help: &str, default: bool) -> Result<bool> {
        match self.next(title)?.to_ascii_lowercase().as_str() {
            "" => Ok(default),
            "y" | "yes" | "true" => Ok(true),
            "n" | "no" | "false" => Ok(false),
            other => bail!("not a yes/no answer: {other}"),
        }
    }

    fn ask_string(&self, title: &str, _help: &str, default: &str) -> Result<String> {
        let answer = self.next(title)?;
        Ok(if answer.is_empty() {
            default.to_string()
        } else {
            answer
        })
    }

    fn ask_u64(
        &self,
        title: &str,
        _help: &str,
        default: u64,
        min: Option<u64>,
        max: Option<u64>,
    ) -> Result<u64> {
        let answer = self.next(title)?;
        let n = if answer.is_empty() {
            default
        } else {
            answer.parse()?
        };
        if min.is_some_and(|lo| n < lo) || max.is_some_and(|hi| n > hi) {
            bail!("{n} is out of range for '{title}'");
        }
        Ok(n)
    }
}
