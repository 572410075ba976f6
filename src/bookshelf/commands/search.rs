use super::fold;
use crate::model::Book;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    Title,
    Author,
}

impl SearchField {
    fn value<'a>(&self, book: &'a Book) -> &'a str {
        match self {
            SearchField::Title => &book.title,
            SearchField::Author => &book.author,
        }
    }
}

/// Books whose `field` contains `query` as a case-insensitive substring,
/// in catalog order. An empty query matches everything.
pub fn run(books: &[Book], field: SearchField, query: &str) -> Vec<Book> {
    let needle = fold(query);
    books
        .iter()
        .filter(|b| fold(field.value(b)).contains(&needle))
        .cloned()
        .collect()
}
