//! Catalog logic, one module per operation.
//!
//! Everything here works on plain book slices. Persistence lives in
//! [`crate::store`] and ownership of the sequence in [`crate::api::Catalog`].

pub mod add;
pub mod remove;
pub mod search;
pub mod stats;

pub use search::SearchField;
pub use stats::Statistics;

/// Case-insensitive comparison key. Plain Unicode lowercasing, no trimming.
pub(crate) fn fold(s: &str) -> String {
    s.to_lowercase()
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::model::Book;

    pub fn book(title: &str, author: &str, read: bool) -> Book {
        Book::new(
            title.to_string(),
            author.to_string(),
            1990,
            "Fiction".to_string(),
            read,
        )
    }
}
