//! # Rentvibe Architecture
//!
//! Rentvibe is a **UI-agnostic rental catalog library**. It browses a fixed
//! catalog of listings, narrows it with multi-criteria filters, and keeps a
//! durable set of favorites. The `rentvibe` binary is one client of it.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (args.rs, wired by main.rs)                      │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, one value per session         │
//! │  - Fills in config defaults (sort order, related limit)     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Turns store operations into `CmdResult`s with messages   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (catalog_store.rs, filter.rs, sort.rs, query.rs)      │
//! │  - Pure filtering, the published result, favorites state    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract DataStore trait                                 │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular Rust arguments and returns
//! `Result<CmdResult>`. It never writes to stdout/stderr and never exits the
//! process. Diagnostics go through `tracing`; the binary decides where they
//! end up.
//!
//! ## Testing Strategy
//!
//! 1. **Core and commands**: unit tests next to the code, over
//!    [`store::memory::InMemoryStore`] and the `StoreFixture` builder.
//! 2. **API**: dispatch tests in `api.rs`.
//! 3. **CLI**: end-to-end tests in `tests/` that run the binary against a
//!    temporary data directory.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Per-command result building
//! - [`catalog`]: The listing catalog and its built-in seed
//! - [`catalog_store`]: Session state: published results and favorites
//! - [`filter`]: The filter engine
//! - [`sort`]: Result ordering
//! - [`query`]: Filters from URL query strings
//! - [`auth`]: Password hashing
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod auth;
pub mod catalog;
pub mod catalog_store;
pub mod commands;
pub mod config;
pub mod error;
pub mod filter;
pub mod model;
pub mod query;
pub mod sort;
pub mod store;
