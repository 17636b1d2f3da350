//! Book model and related types

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Book record held by the inventory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Book {
    /// Caller-supplied identifier
    pub id: String,
    pub title: String,
    pub author: String,
    /// Number of copies available for checkout
    pub quantity: i64,
}

impl Book {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
        quantity: i64,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            author: author.into(),
            quantity,
        }
    }

    /// Books the server starts with
    pub fn demo_shelf() -> Vec<Book> {
        vec![
            Book::new("1", "In Search of Lost Time", "Marcel Proust", 2),
            Book::new("2", "The Great Gatsby", "F. Scott Fitzgerald", 5),
            Book::new("3", "War and Peace", "Leo Tolstoy", 6),
        ]
    }
}

/// Create book request; missing fields fall back to empty values
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct CreateBook {
    pub id: String,
    pub title: String,
    pub author: String,
    pub quantity: i64,
}

impl From<CreateBook> for Book {
    fn from(data: CreateBook) -> Self {
        Self {
            id: data.id,
            title: data.title,
            author: data.author,
            quantity: data.quantity,
        }
    }
}

/// Query string carrying a book id (`?id=...`)
#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct BookIdQuery {
    /// Book ID
    pub id: Option<String>,
}

impl BookIdQuery {
    /// Build from raw query pairs; the first `id` wins when repeated
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        Self {
            id: pairs.into_iter().find(|(key, _)| key == "id").map(|(_, value)| value),
        }
    }
}
