//! # CLI Behavior
//!
//! This is **one possible client** for the catalog, not the application itself.
//! It is the only place that knows about terminal I/O, exit codes and colors.
//!
//! ## Naked Execution (`bookshelf`)
//!
//! Running with no subcommand opens the interactive menu. The catalog is
//! loaded once at startup and written once, when the session ends (Exit or
//! end of input). A failed save ends the process with exit code 1.
//!
//! `list`, `search` and `stats` are read-only: they load, print, and never
//! write the catalog file.
//!
//! ## Validation
//!
//! The catalog accepts whatever it is given. Year range and yes/no parsing
//! are checked here (`input.rs`) before calling `Catalog::add`.
//!
//! ## Logging
//!
//! `tracing` output goes to stderr so it never mixes with menu output.
//! `RUST_LOG` wins over `--verbose`.
//!
//! ## Module Structure
//!
//! - `commands`: Context setup and per-command handlers
//! - `shell`: The interactive menu loop
//! - `input`: Prompt answer validation
//! - `render`: Book lines, statistics, colored messages
//! - `setup`: Argument parsing via clap

mod commands;
mod input;
mod render;
mod setup;
mod shell;

pub use commands::run;
