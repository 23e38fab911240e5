//! Data models for the application.

mod author;
mod user;

pub use author::{mock_authors, Author, AUTHOR_COUNT};
pub use user::{mock_users, User, USER_COUNT};

use serde::{Deserialize, Serialize};

/// The full generated dataset. Built once at process start and shared
/// read-only across request handlers; immutability is the concurrency
/// strategy, so no locking is needed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MockData {
    pub users: Vec<User>,
    pub authors: Vec<Author>,
}

impl MockData {
    /// Generate the fixed-size collections (20 users, 10 authors).
    pub fn generate() -> Self {
        Self {
            users: mock_users(USER_COUNT),
            authors: mock_authors(AUTHOR_COUNT),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_uses_fixed_counts() {
        let data = MockData::generate();
        assert_eq!(data.users.len(), 20);
        assert_eq!(data.authors.len(), 10);
    }

    #[test]
    fn generate_is_deterministic() {
        assert_eq!(MockData::generate(), MockData::generate());
    }
}
