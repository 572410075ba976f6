//! # API Facade
//!
//! [`Catalog`] is the catalog store: it owns the ordered book sequence and a
//! storage backend, and is the single entry point for every front end.
//!
//! The in-memory sequence and the backend are independent until [`Catalog::save`]
//! or [`Catalog::load`] is called. Nothing is written implicitly.
//!
//! ## Generic Over BookStore
//!
//! - Production: `Catalog<FileStore>`
//! - Testing: `Catalog<InMemoryStore>`
//!
//! The facade dispatches to `commands/*.rs` and never prints. Storage
//! failures are logged through `tracing` and returned as typed errors.

use crate::commands::{self, SearchField};
use crate::error::Result;
use crate::model::Book;
use crate::store::BookStore;
use tracing::{debug, error, warn};

pub use crate::commands::Statistics;

pub struct Catalog<S: BookStore> {
    books: Vec<Book>,
    store: S,
}

impl<S: BookStore> Catalog<S> {
    /// An empty catalog backed by `store`. Nothing is loaded.
    pub fn new(store: S) -> Self {
        Self {
            books: Vec::new(),
            store,
        }
    }

    /// Construct and load from `store`, the way a session starts.
    ///
    /// A failed load is logged and leaves the catalog empty.
    pub fn open(store: S) -> Self {
        let mut catalog = Self::new(store);
        if let Err(e) = catalog.load() {
            warn!("starting with an empty library: {}", e);
        }
        catalog
    }

    pub fn add(
        &mut self,
        title: String,
        author: String,
        year: i32,
        genre: String,
        read: bool,
    ) -> Book {
        let book = commands::add::run(&mut self.books, title, author, year, genre, read);
        debug!(title = %book.title, total = self.books.len(), "book added");
        book
    }

    /// Remove all books titled `title` (case-insensitive). False when none matched.
    pub fn remove(&mut self, title: &str) -> bool {
        let removed = commands::remove::run(&mut self.books, title);
        debug!(title, removed, "remove by title");
        removed > 0
    }

    pub fn search_by_title(&self, query: &str) -> Vec<Book> {
        commands::search::run(&self.books, SearchField::Title, query)
    }

    pub fn search_by_author(&self, query: &str) -> Vec<Book> {
        commands::search::run(&self.books, SearchField::Author, query)
    }

    pub fn statistics(&self) -> Statistics {
        commands::stats::run(&self.books)
    }

    /// Overwrite the stored catalog with the current sequence.
    pub fn save(&self) -> Result<()> {
        self.store.save_books(&self.books).inspect_err(|e| {
            error!("{}", e);
        })?;
        debug!(count = self.books.len(), "library saved");
        Ok(())
    }

    /// Replace the current sequence with the stored one.
    ///
    /// Returns Ok(false) when nothing is stored yet. On error the current
    /// sequence is left untouched.
    pub fn load(&mut self) -> Result<bool> {
        let loaded = self.store.load_books().inspect_err(|e| {
            error!("{}", e);
        })?;
        match loaded {
            Some(books) => {
                debug!(count = books.len(), "library loaded");
                self.books = books;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CatalogError;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    fn add(catalog: &mut Catalog<InMemoryStore>, title: &str, author: &str, read: bool) -> Book {
        catalog.add(
            title.to_string(),
            author.to_string(),
            2001,
            "Fiction".to_string(),
            read,
        )
    }

    #[test]
    fn dune_walkthrough() {
        let mut catalog = Catalog::new(InMemoryStore::new());
        let dune = catalog.add(
            "Dune".into(),
            "Frank Herbert".into(),
            1965,
            "Sci-Fi".into(),
            true,
        );

        assert_eq!(catalog.search_by_author("herbert"), vec![dune]);
        assert!(catalog.remove("dune"));
        assert!(catalog.is_empty());
        assert!(!catalog.remove("dune"));
    }

    #[test]
    fn title_and_author_searches_look_at_their_own_field() {
        let mut catalog = Catalog::new(InMemoryStore::new());
        add(&mut catalog, "Emma", "Jane Austen", false);
        add(&mut catalog, "Persuasion", "Jane Austen", true);

        assert_eq!(catalog.search_by_title("emma").len(), 1);
        assert_eq!(catalog.search_by_title("austen").len(), 0);
        assert_eq!(catalog.search_by_author("austen").len(), 2);
        assert_eq!(catalog.search_by_title("").len(), 2);
    }

    #[test]
    fn queries_do_not_mutate() {
        let mut catalog = Catalog::new(InMemoryStore::new());
        add(&mut catalog, "Emma", "Jane Austen", false);
        let before = catalog.books().to_vec();

        let _ = catalog.search_by_title("e");
        let _ = catalog.search_by_author("x");
        let _ = catalog.statistics();

        assert_eq!(catalog.books(), before.as_slice());
    }

    #[test]
    fn statistics_reflect_read_flags() {
        let mut catalog = Catalog::new(InMemoryStore::new());
        assert_eq!(catalog.statistics().percent_read, 0.0);

        add(&mut catalog, "A", "x", true);
        add(&mut catalog, "B", "x", false);
        add(&mut catalog, "C", "x", false);
        add(&mut catalog, "D", "x", false);

        let stats = catalog.statistics();
        assert_eq!((stats.total, stats.read), (4, 1));
        assert_eq!(stats.percent_read, 25.0);
    }

    #[test]
    fn nothing_is_persisted_until_save() {
        let mut catalog = Catalog::new(InMemoryStore::new());
        add(&mut catalog, "A", "x", true);
        assert!(catalog.store().stored().is_none());

        catalog.save().unwrap();
        assert_eq!(catalog.store().stored().unwrap().len(), 1);

        add(&mut catalog, "B", "x", true);
        assert_eq!(catalog.store().stored().unwrap().len(), 1);
    }

    #[test]
    fn save_then_load_round_trips() {
        let mut catalog = Catalog::new(InMemoryStore::new());
        add(&mut catalog, "A", "x", true);
        add(&mut catalog, "B", "y", false);
        catalog.save().unwrap();

        let stored = catalog.store().stored().unwrap();
        let fresh = Catalog::open(InMemoryStore::with_books(stored));
        assert_eq!(fresh.books(), catalog.books());
    }

    #[test]
    fn load_without_stored_data_returns_false() {
        let mut catalog = Catalog::new(InMemoryStore::new());
        assert!(!catalog.load().unwrap());
        assert!(catalog.is_empty());
    }

    #[test]
    fn load_replaces_current_sequence() {
        let store = StoreFixture::new().with_books(3).build();
        let mut catalog = Catalog::new(store);
        add(&mut catalog, "Unsaved", "x", false);

        assert!(catalog.load().unwrap());
        assert_eq!(catalog.len(), 3);
        assert!(catalog.search_by_title("unsaved").is_empty());
    }

    #[test]
    fn failed_load_is_a_read_error_and_keeps_books() {
        let store = StoreFixture::new().with_books(2).build();
        store.set_simulate_read_error(true);
        let mut catalog = Catalog::new(store);
        add(&mut catalog, "Kept", "x", false);

        let err = catalog.load().unwrap_err();
        assert!(matches!(err, CatalogError::StorageRead { .. }));
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn open_swallows_read_errors() {
        let store = StoreFixture::new().with_books(2).build();
        store.set_simulate_read_error(true);
        let catalog = Catalog::open(store);
        assert!(catalog.is_empty());
    }

    #[test]
    fn failed_save_is_a_write_error() {
        let store = InMemoryStore::new();
        store.set_simulate_write_error(true);
        let mut catalog = Catalog::new(store);
        add(&mut catalog, "A", "x", false);

        let err = catalog.save().unwrap_err();
        assert!(matches!(err, CatalogError::StorageWrite { .. }));
        assert!(catalog.store().stored().is_none());
    }
}
