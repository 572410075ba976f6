//! # Storage Layer
//!
//! The catalog is persisted as a whole: every save overwrites the previous
//! contents, every load replaces the in-memory sequence. [`BookStore`] hides
//! where that whole-catalog snapshot lives.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage, a single pretty-printed JSON file.
//!   Writes go to a temp file in the same directory and are renamed over the
//!   target, so a failed save never leaves a half-written catalog behind.
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing. It can be told
//!   to fail reads or writes so error paths can be exercised without touching
//!   file permissions.
//!
//! ## Storage Format
//!
//! ```text
//! <data dir>/
//! ├── library.txt     # JSON array of books (name comes from config.json)
//! └── config.json     # optional, see crate::config
//! ```

use crate::error::Result;
use crate::model::Book;
use std::path::PathBuf;

pub mod fs;
pub mod memory;

/// Abstract interface for catalog persistence.
pub trait BookStore {
    /// Load the stored catalog.
    /// Returns Ok(None) when nothing has been stored yet.
    /// Returns Err on I/O failure or when the stored data has the wrong shape.
    fn load_books(&self) -> Result<Option<Vec<Book>>>;

    /// Replace the stored catalog with `books`.
    fn save_books(&self, books: &[Book]) -> Result<()>;

    /// Where the catalog lives, for messages.
    /// For FileStore this is the real path; for InMemoryStore a virtual one.
    fn location(&self) -> PathBuf;
}
