// repl.rs

use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::{Editor, CompletionType, Config};
use tracing::{info, warn};
use crate::commands::{run_line, Flow};
use crate::completion::CommandCompleter;
use crate::manager::MoviesManager;

pub const PROMPT: &str = "movies> ";

/// Runs the prompt until `exit`, Ctrl-C or Ctrl-D. Returns the exit code.
pub fn start_repl(manager: &mut MoviesManager) -> rustyline::Result<i32> {
    let config = Config::builder().completion_type(CompletionType::List).build();
    let mut rl: Editor<CommandCompleter, DefaultHistory> = Editor::with_config(config)?;
    rl.set_helper(Some(CommandCompleter::new()));
    loop {
        match rl.readline(PROMPT) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() { continue; }
                let _ = rl.add_history_entry(trimmed);
                match run_line(trimmed, manager, std::io::stdout()) {
                    Ok(Flow::Continue) => {}
                    Ok(Flow::Exit(code)) => return Ok(code),
                    Err(err) => {
                        warn!(line = trimmed, error = %err, "command failed");
                        eprintln!("error: {}", err);
                    }
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                info!("input closed");
                return Ok(0);
            }
            Err(err) => return Err(err),
        }
    }
}
