pub mod commands;
pub mod completion;
pub mod config;
pub mod error;
pub mod manager;
pub mod parser;
pub mod repl;
pub mod util;

pub use error::MoviesError;
pub use manager::{MoviesManager, DEFAULT_LIMIT};
