//! Case-insensitive substring search over book metadata.

use crate::models::Book;

/// A lowercased search term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookQuery {
    needle: String,
}

impl BookQuery {
    pub fn new(text: &str) -> Self {
        Self {
            needle: text.to_lowercase(),
        }
    }

    /// True when the term occurs in the title, author, description, category
    /// or location. The empty term matches every book.
    pub fn matches(&self, book: &Book) -> bool {
        [
            &book.title,
            &book.author,
            &book.description,
            &book.category,
            &book.location,
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(&self.needle))
    }

    /// Keep the matching books, preserving their order.
    pub fn filter(&self, books: Vec<Book>) -> Vec<Book> {
        books.into_iter().filter(|book| self.matches(book)).collect()
    }
}
