// commands.rs

use std::io::Write;
use itertools::Itertools;
use tracing::debug;
use crate::error::MoviesError;
use crate::manager::MoviesManager;
use crate::parser::split_words;
use crate::util::{write_numbered, writeln_ignore_broken_pipe};

pub const COMMAND_NAMES: [&str; 7] = ["add", "all", "last", "limit", "count", "help", "exit"];

const HELP: &str = "\
add <title>   remember a movie
all           list every movie in the order added
last          list the newest movies, newest first
limit         show how many movies `last` returns
count         show how many movies are stored
help          show this text
exit [code]   leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(String),
    All,
    Last,
    Limit,
    Count,
    Help,
    Exit(i32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit(i32),
}

impl Command {
    /// `Ok(None)` for a blank line.
    pub fn parse(line: &str) -> Result<Option<Command>, MoviesError> {
        let words = split_words(line);
        let Some((name, args)) = words.split_first() else {
            return Ok(None);
        };
        let command = match name.as_str() {
            "add" => {
                if args.is_empty() {
                    return Err(MoviesError::MissingArgument("add"));
                }
                Command::Add(args.iter().join(" "))
            }
            "all" => Command::All,
            "last" => Command::Last,
            "limit" => Command::Limit,
            "count" => Command::Count,
            "help" => Command::Help,
            "exit" => match args.first() {
                None => Command::Exit(0),
                Some(code) => Command::Exit(
                    code.parse()
                        .map_err(|_| MoviesError::InvalidExitCode(code.clone()))?,
                ),
            },
            other => return Err(MoviesError::UnknownCommand(other.to_string())),
        };
        Ok(Some(command))
    }

    pub fn execute<W: Write>(self, manager: &mut MoviesManager, mut out: W) -> Result<Flow, MoviesError> {
        debug!(command = ?self, "executing");
        match self {
            Command::Add(title) => manager.add(title),
            Command::All => write_numbered(&mut out, &manager.find_all())?,
            Command::Last => write_numbered(&mut out, &manager.find_last())?,
            Command::Limit => writeln_ignore_broken_pipe(&mut out, manager.limit().to_string())?,
            Command::Count => writeln_ignore_broken_pipe(&mut out, manager.len().to_string())?,
            Command::Help => writeln_ignore_broken_pipe(&mut out, HELP)?,
            Command::Exit(code) => return Ok(Flow::Exit(code)),
        }
        out.flush()?;
        Ok(Flow::Continue)
    }
}

pub fn run_line<W: Write>(line: &str, manager: &mut MoviesManager, out: W) -> Result<Flow, MoviesError> {
    match Command::parse(line)? {
        Some(command) => command.execute(manager, out),
        None => Ok(Flow::Continue),
    }
}
