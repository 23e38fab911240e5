//! # Author model
//!
//! A synthetic author record with the same lifecycle as [`super::User`]:
//! generated once from its index, immutable, gone on process exit.

use serde::{Deserialize, Serialize};

/// Number of authors generated at startup.
pub const AUTHOR_COUNT: usize = 10;

/// A synthetic author record. Every field is populated at generation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: u32,
    pub name: String,
    pub bio: String,
    pub image: String,
    pub location: String,
}

impl Author {
    fn from_index(index: u32) -> Self {
        Self {
            id: index,
            name: format!("Author {}", index + 1),
            bio: format!("This is a short bio of Author {}.", index + 1),
            image: "https://via.placeholder.com/600/771796".to_string(),
            location: format!("Location {}", index + 1),
        }
    }
}

/// Generate `count` authors, index-addressed from 0, in index order.
pub fn mock_authors(count: usize) -> Vec<Author> {
    (0..count as u32).map(Author::from_index).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique_zero_based_and_contiguous() {
        for count in [10, 20] {
            let authors = mock_authors(count);
            assert_eq!(authors.len(), count);
            for (index, author) in authors.iter().enumerate() {
                assert_eq!(author.id as usize, index);
            }
        }
    }

    #[test]
    fn record_at_index_three_matches_expected_values() {
        let authors = mock_authors(AUTHOR_COUNT);
        assert_eq!(
            authors[3],
            Author {
                id: 3,
                name: "Author 4".to_string(),
                bio: "This is a short bio of Author 4.".to_string(),
                image: "https://via.placeholder.com/600/771796".to_string(),
                location: "Location 4".to_string(),
            }
        );
    }

    #[test]
    fn serializes_with_expected_field_names() {
        let value = serde_json::to_value(&mock_authors(1)[0]).unwrap();
        assert_eq!(value["id"], 0);
        assert_eq!(value["name"], "Author 1");
        assert_eq!(value["bio"], "This is a short bio of Author 1.");
        assert_eq!(value["image"], "https://via.placeholder.com/600/771796");
        assert_eq!(value["location"], "Location 1");
    }
}
