//! # Bookshelf Architecture
//!
//! Bookshelf is a small **book catalog library** with a terminal client on top.
//! The catalog store knows nothing about menus, prompts or colors; the binary
//! is just one consumer of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Menu loop, prompts, input validation, rendering          │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Catalog<S>: owns the ordered book sequence + a store     │
//! │  - Explicit save/load, typed errors                         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - add / remove / search / stats over plain slices          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - BookStore trait                                          │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No I/O Assumptions in Core
//!
//! From `api.rs` inward, code never writes to stdout/stderr and never exits
//! the process. Failures come back as [`error::CatalogError`] values and are
//! also emitted as `tracing` events; installing a subscriber is the binary's job.
//!
//! ## Matching Rules
//!
//! Title and author comparisons lowercase both sides and nothing else: no
//! trimming, no Unicode normalization. Search is substring, removal is
//! whole-title equality.
//!
//! ## Module Overview
//!
//! - [`api`]: [`api::Catalog`], the catalog store
//! - [`commands`]: Logic for each catalog operation
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: The [`model::Book`] record
//! - [`config`]: Data directory and `config.json`
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
