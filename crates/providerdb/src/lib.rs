//! # providerdb Architecture
//!
//! providerdb is a **UI-agnostic provider registry library**. It keeps a collection of
//! providers in a single JSON file and serves it safely to many concurrent callers.
//! The bundled CLI is one client of this library, not the library itself.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Client (providerdb-cli, or anything embedding the crate)   │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Fills configured defaults                                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Validation, name uniqueness, NotFound semantics          │
//! │  - Pagination of listings (pagination.rs)                   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait, ProviderStore with a reader/writer lock │
//! │  - FsBackend (JSON file), MemBackend (testing)              │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular Rust arguments, returns regular Rust types
//! (`Result<CmdResult>`), and never writes to stdout/stderr. Diagnostics go through
//! `tracing`; installing a subscriber is the client's business.
//!
//! ## Testing Strategy
//!
//! - **Store**: locking, identity and durability tests against both backends.
//! - **Pagination**: boundary pages, empty collections, counts.
//! - **Commands**: business rules against `InMemoryStore`.
//! - **Integration** (`tests/`): the file-backed store under concurrent load.

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod init;
pub mod model;
pub mod pagination;
pub mod store;
