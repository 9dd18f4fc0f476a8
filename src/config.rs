// config.rs

use crate::error::MoviesError;
use crate::manager::DEFAULT_LIMIT;

pub const LIMIT_VAR: &str = "MOVIES_LIMIT";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub limit: i32,
}

impl Default for Config {
    fn default() -> Self {
        Self { limit: DEFAULT_LIMIT }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, MoviesError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Unset or blank means the default limit. Zero and negatives pass through.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, MoviesError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(raw) = lookup(LIMIT_VAR) {
            let raw = raw.trim();
            if !raw.is_empty() {
                config.limit = raw
                    .parse()
                    .map_err(|_| MoviesError::InvalidLimit { value: raw.to_string() })?;
            }
        }
        Ok(config)
    }
}
