//! Catalog browsing state: the filter model applied client-side.
//!
//! The API returns the whole catalog; search, genre, and availability are
//! narrowed here.

#[cfg(test)]
#[path = "books_test.rs"]
mod books_test;

use crate::net::types::Book;

/// Availability narrowing for the browse page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Availability {
    #[default]
    All,
    Available,
    Unavailable,
}

impl Availability {
    /// Parse the `<select>` option value; anything unknown means no filter.
    pub fn from_key(key: &str) -> Self {
        match key {
            "available" => Self::Available,
            "unavailable" => Self::Unavailable,
            _ => Self::All,
        }
    }

    pub fn as_key(self) -> &'static str {
        match self {
            Self::All => "",
            Self::Available => "available",
            Self::Unavailable => "unavailable",
        }
    }

    fn matches(self, book: &Book) -> bool {
        match self {
            Self::All => true,
            Self::Available => book.is_available(),
            Self::Unavailable => !book.is_available(),
        }
    }
}

/// Search term plus the two dropdown filters.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CatalogFilter {
    pub search: String,
    /// Empty means all genres.
    pub genre: String,
    pub availability: Availability,
}

impl CatalogFilter {
    /// Case-insensitive match on title or author; ISBN matches on substring.
    pub fn matches(&self, book: &Book) -> bool {
        let needle = self.search.trim().to_lowercase();
        let matches_search = needle.is_empty()
            || book.title.to_lowercase().contains(&needle)
            || book.author.to_lowercase().contains(&needle)
            || book.isbn.contains(needle.as_str());
        let matches_genre =
            self.genre.is_empty() || book.genre.as_deref() == Some(self.genre.as_str());
        matches_search && matches_genre && self.availability.matches(book)
    }
}

/// Apply the filter, preserving catalog order.
pub fn apply(filter: &CatalogFilter, books: &[Book]) -> Vec<Book> {
    books
        .iter()
        .filter(|book| filter.matches(book))
        .cloned()
        .collect()
}

/// Distinct genres present in the catalog, sorted for the dropdown.
pub fn genres(books: &[Book]) -> Vec<String> {
    let mut out: Vec<String> = books
        .iter()
        .filter_map(|book| book.genre.clone())
        .filter(|genre| !genre.is_empty())
        .collect();
    out.sort();
    out.dedup();
    out
}
