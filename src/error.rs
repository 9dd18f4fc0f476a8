// error.rs

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MoviesError {
    #[error("MOVIES_LIMIT must be an integer, got {value:?}")]
    InvalidLimit { value: String },
    #[error("{0}: command not found")]
    UnknownCommand(String),
    #[error("{0}: missing argument")]
    MissingArgument(&'static str),
    #[error("exit: {0}: numeric argument required")]
    InvalidExitCode(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
