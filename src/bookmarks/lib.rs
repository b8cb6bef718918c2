//! # Bookmarks Architecture
//!
//! A personal bookmark store: add URLs (typed or from the clipboard), list
//! them, and open them in a browser. Like most small CLIs worth testing, it
//! is a library with a thin binary on top.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (args.rs, main.rs)                                     │
//! │  - Parses arguments, sets up logging, prints results        │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, returns `CmdResult`           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - add, list, open, init, path                              │
//! │  - Talks to the store and to the clipboard/browser traits   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - BookmarkStore trait, one JSON record per line            │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular Rust arguments and returns
//! `Result<CmdResult>`. It never writes to stdout/stderr and never exits the
//! process. Diagnostics go through `tracing`; the binary decides where they
//! end up.
//!
//! ## Configuration
//!
//! [`config::AppConfig`] is built once in `main` and its values are handed to
//! the store and commands explicitly. There is no global state.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Business logic for each command
//! - [`store`]: Storage abstraction, file format and implementations
//! - [`model`]: The `Bookmark` type
//! - [`config`]: Resolved process configuration and default paths
//! - [`clipboard`]: Clipboard reading
//! - [`browser`]: Browser launching
//! - [`error`]: Error types

pub mod api;
pub mod browser;
pub mod clipboard;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
