//! # Pinbook Architecture
//!
//! Pinbook keeps a short list of personal records (a name and an identifier such
//! as a PIN or card number) on the local machine, formats identifiers into one
//! readable shape, and shares a record as text. It is a library with a CLI client,
//! not a CLI with some library code.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prints, talks to clipboard and OS      │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, parses selectors              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Operates on Rust types, returns CmdResult                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait, RecordStore over a StorageBackend       │
//! │  - FsBackend (production), MemBackend (testing)             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Persistence
//!
//! The whole collection lives in one slot and is rewritten on every change.
//! See [`store`] for the load and write-through rules.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: One module per operation
//! - [`store`]: Storage abstraction, record store and backends
//! - [`model`]: `Record`, `RecordId`, field validation
//! - [`format`]: Canonical identifier formatting
//! - [`index`]: 1-based selection of records
//! - [`share`]: Share text and `sms:`/`mailto:` links
//! - [`clipboard`], [`launcher`]: OS integration used by the CLI
//! - [`config`]: `config.json` settings
//! - [`clock`]: Timestamp source
//! - [`logging`]: `tracing` subscriber setup
//! - [`init`]: Data directory resolution and startup
//! - [`error`]: Error types

pub mod api;
pub mod clipboard;
pub mod clock;
pub mod commands;
pub mod config;
pub mod error;
pub mod format;
pub mod index;
pub mod init;
pub mod launcher;
pub mod logging;
pub mod model;
pub mod share;
pub mod store;
