use super::BookStore;
use crate::error::{CatalogError, Result, StorageFailure};
use crate::model::Book;
use std::cell::RefCell;
use std::path::PathBuf;

const VIRTUAL_PATH: &str = "memory://library";

/// In-memory storage for testing.
///
/// Uses `RefCell` since the catalog is single-threaded and `BookStore`
/// takes `&self` for saves.
#[derive(Default)]
pub struct InMemoryStore {
    books: RefCell<Option<Vec<Book>>>,
    simulate_read_error: RefCell<bool>,
    simulate_write_error: RefCell<bool>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `books`, as if saved by an earlier session.
    pub fn with_books(books: Vec<Book>) -> Self {
        let store = Self::default();
        *store.books.borrow_mut() = Some(books);
        store
    }

    pub fn set_simulate_read_error(&self, simulate: bool) {
        *self.simulate_read_error.borrow_mut() = simulate;
    }

    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }

    /// What a later session would load.
    pub fn stored(&self) -> Option<Vec<Book>> {
        self.books.borrow().clone()
    }
}

impl BookStore for InMemoryStore {
    fn load_books(&self) -> Result<Option<Vec<Book>>> {
        if *self.simulate_read_error.borrow() {
            return Err(CatalogError::read(
                VIRTUAL_PATH,
                StorageFailure::Other("Simulated read error".to_string()),
            ));
        }
        Ok(self.books.borrow().clone())
    }

    fn save_books(&self, books: &[Book]) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(CatalogError::write(
                VIRTUAL_PATH,
                StorageFailure::Other("Simulated write error".to_string()),
            ));
        }
        *self.books.borrow_mut() = Some(books.to_vec());
        Ok(())
    }

    fn location(&self) -> PathBuf {
        PathBuf::from(VIRTUAL_PATH)
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    /// Builds a stored catalog one book at a time.
    #[derive(Default)]
    pub struct StoreFixture {
        books: Vec<Book>,
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_book(mut self, title: &str, author: &str, read: bool) -> Self {
            self.books.push(Book::new(
                title.to_string(),
                author.to_string(),
                2000,
                "Fiction".to_string(),
                read,
            ));
            self
        }

        pub fn with_books(mut self, count: usize) -> Self {
            for i in 0..count {
                self = self.with_book(&format!("Book {}", i + 1), "Some Author", false);
            }
            self
        }

        pub fn build(self) -> InMemoryStore {
            InMemoryStore::with_books(self.books)
        }
    }
}
