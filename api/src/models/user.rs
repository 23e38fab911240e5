//! # User model
//!
//! A synthetic user record, generated from its index at process start. The
//! collection is never persisted and never mutated after generation: every
//! process start reproduces the same records.
//!
//! The `even` and `odd` greeting phrases are selected by divisibility of the
//! id by 2 and 3 respectively.

use serde::{Deserialize, Serialize};

/// Number of users generated at startup.
pub const USER_COUNT: usize = 20;

/// A synthetic user record. Every field is populated at generation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub name: String,
    pub even: String,
    pub odd: String,
}

impl User {
    fn from_index(index: u32) -> Self {
        Self {
            id: index,
            name: format!("index-{}", index + 1),
            even: if index % 2 == 0 {
                "Hello Arjun From Pune".to_string()
            } else {
                "Hello Arjun from Bangalore".to_string()
            },
            odd: if index % 3 == 0 {
                "Hello Arjun From USA".to_string()
            } else {
                "Hello Arjun from Canada".to_string()
            },
        }
    }
}

/// Generate `count` users, index-addressed from 0, in index order.
pub fn mock_users(count: usize) -> Vec<User> {
    (0..count as u32).map(User::from_index).collect()
}
