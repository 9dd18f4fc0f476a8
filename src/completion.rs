// completion.rs

use rustyline::completion::{Completer, Pair};
use rustyline::{Helper, Context};
use rustyline::hint::Hinter;
use rustyline::highlight::Highlighter;
use rustyline::validate::{Validator, ValidationContext, ValidationResult};
use rustyline::error::ReadlineError;
use crate::commands::COMMAND_NAMES;

#[derive(Default)]
pub struct CommandCompleter;

impl CommandCompleter {
    pub fn new() -> Self {
        Self
    }

    /// Command names starting with `prefix`, sorted. Empty once the line has
    /// moved past the first word.
    pub fn candidates(&self, prefix: &str) -> Vec<String> {
        if prefix.chars().any(char::is_whitespace) {
            return Vec::new();
        }
        let mut names: Vec<String> = COMMAND_NAMES
            .iter()
            .filter(|name| name.starts_with(prefix))
            .map(|name| name.to_string())
            .collect();
        names.sort();
        names
    }
}

impl Completer for CommandCompleter {
    type Candidate = Pair;
    fn complete(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Result<(usize, Vec<Pair>), ReadlineError> {
        let prefix = line[..pos].trim_start();
        let start = pos - prefix.len();
        let completions = self
            .candidates(prefix)
            .into_iter()
            .map(|n| Pair {
                display: n.clone(),
                replacement: format!("{} ", n),
            })
            .collect();
        Ok((start, completions))
    }
}

impl Hinter for CommandCompleter {
    type Hint = String;
    fn hint(&self, _line: &str, _pos: usize, _ctx: &Context<'_>) -> Option<String> {
        None
    }
}

impl Highlighter for CommandCompleter {}

impl Validator for CommandCompleter {
    fn validate(&self, _ctx: &mut ValidationContext) -> Result<ValidationResult, ReadlineError> {
        Ok(ValidationResult::Valid(None))
    }
}

impl Helper for CommandCompleter {}
