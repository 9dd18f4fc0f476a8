// manager.rs

use tracing::{debug, warn};

pub const DEFAULT_LIMIT: i32 = 5;

/// Keeps movie titles in the order they were added.
///
/// `find_last` returns at most `limit` of the newest titles, newest first.
/// The limit is not validated: zero or a negative value makes `find_last`
/// always come back empty.
#[derive(Debug, Clone)]
pub struct MoviesManager {
    movies: Vec<String>,
    limit: i32,
}

impl MoviesManager {
    pub fn new() -> Self {
        Self::with_limit(DEFAULT_LIMIT)
    }

    pub fn with_limit(limit: i32) -> Self {
        if limit <= 0 {
            warn!(limit, "non-positive limit, find_last will always be empty");
        }
        Self { movies: Vec::new(), limit }
    }

    pub fn add(&mut self, movie: impl Into<String>) {
        let movie = movie.into();
        debug!(movie = %movie, total = self.movies.len() + 1, "movie added");
        self.movies.push(movie);
    }

    /// All titles in insertion order, as an owned copy.
    pub fn find_all(&self) -> Vec<String> {
        self.movies.clone()
    }

    /// The newest `limit` titles, most recent first.
    pub fn find_last(&self) -> Vec<String> {
        let count = usize::try_from(self.limit).unwrap_or(0).min(self.movies.len());
        self.movies.iter().rev().take(count).cloned().collect()
    }

    pub fn limit(&self) -> i32 {
        self.limit
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}

impl Default for MoviesManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(limit: i32, count: usize) -> MoviesManager {
        let mut manager = MoviesManager::with_limit(limit);
        for i in 1..=count {
            manager.add(format!("Movie{}", i));
        }
        manager
    }

    #[test]
    fn default_limit_is_five_and_starts_empty() {
        let manager = MoviesManager::new();
        assert_eq!(manager.limit(), 5);
        assert!(manager.find_all().is_empty());
        assert!(manager.is_empty());
    }

    #[test]
    fn custom_limit_starts_empty() {
        let manager = MoviesManager::with_limit(3);
        assert_eq!(manager.limit(), 3);
        assert_eq!(manager.find_all().len(), 0);
    }

    #[test]
    fn find_all_keeps_insertion_order() {
        let manager = filled(5, 3);
        assert_eq!(manager.find_all(), vec!["Movie1", "Movie2", "Movie3"]);
    }

    #[test]
    fn find_last_on_empty() {
        assert!(MoviesManager::new().find_last().is_empty());
    }

    #[test]
    fn find_last_below_limit_returns_everything_reversed() {
        assert_eq!(filled(5, 3).find_last(), vec!["Movie3", "Movie2", "Movie1"]);
    }

    #[test]
    fn find_last_at_limit() {
        assert_eq!(
            filled(5, 5).find_last(),
            vec!["Movie5", "Movie4", "Movie3", "Movie2", "Movie1"]
        );
    }

    #[test]
    fn find_last_above_limit_drops_oldest() {
        assert_eq!(
            filled(5, 6).find_last(),
            vec!["Movie6", "Movie5", "Movie4", "Movie3", "Movie2"]
        );
    }

    #[test]
    fn find_last_custom_limit() {
        assert_eq!(filled(3, 2).find_last(), vec!["Movie2", "Movie1"]);
        assert_eq!(filled(3, 4).find_last(), vec!["Movie4", "Movie3", "Movie2"]);
    }

    #[test]
    fn zero_limit_returns_nothing() {
        assert!(filled(0, 1).find_last().is_empty());
    }

    #[test]
    fn negative_limit_is_clamped() {
        let manager = filled(-2, 4);
        assert!(manager.find_last().is_empty());
        assert_eq!(manager.find_all().len(), 4);
    }

    #[test]
    fn duplicates_count_by_position() {
        let mut manager = MoviesManager::with_limit(2);
        manager.add("Alien");
        manager.add("Heat");
        manager.add("Alien");
        assert_eq!(manager.find_all(), vec!["Alien", "Heat", "Alien"]);
        assert_eq!(manager.find_last(), vec!["Alien", "Heat"]);
    }

    #[test]
    fn returned_vectors_are_copies() {
        let manager = filled(5, 2);
        let mut all = manager.find_all();
        all.clear();
        let mut last = manager.find_last();
        last.push("Intruder".to_string());
        assert_eq!(manager.find_all(), vec!["Movie1", "Movie2"]);
        assert_eq!(manager.find_last(), vec!["Movie2", "Movie1"]);
    }
}
