//! # Catalog Architecture
//!
//! Catalog is a **file-backed product catalog library** with a small CLI
//! client. The CLI is one adapter among many: an HTTP layer, a TUI or a test
//! harness would all drive the same [`service::CatalogService`].
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (main.rs, args.rs, print.rs)                           │
//! │  - Parses arguments, prints tables and messages             │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Service (service.rs, validation.rs)                        │
//! │  - Validates fields and dates before touching storage       │
//! │  - Maps repository errors to domain errors                  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Repository (repository/)                                   │
//! │  - Id assignment (max + 1) and code uniqueness              │
//! │  - Load snapshot → mutate → persist, on every call          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage (store/)                                           │
//! │  - ProductStore trait: read_all / write_all                 │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Concurrency
//!
//! Everything is synchronous and single-actor. Each repository call is a full
//! read-modify-write of the data file with no locking; two processes
//! mutating the same file concurrently can lose updates. Embedders that need
//! shared access must serialize calls themselves (e.g. a `Mutex` around the
//! service).
//!
//! ## Testing Strategy
//!
//! 1. **Query helpers, validation, repository rules**: unit tests on plain
//!    snapshots.
//! 2. **Repository / service**: unit tests against `InMemoryStore` and
//!    `InMemoryRepository`, including simulated storage failures.
//! 3. **FileStore and CLI**: integration tests in `tests/` using temporary
//!    directories.
//!
//! ## Module Overview
//!
//! - [`service`]: Domain entry point
//! - [`validation`]: Required-field and expiration checks
//! - [`repository`]: Repository trait, production and in-memory implementations
//! - [`query`]: Snapshot helpers shared by repositories
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: `Product`, `ProductPatch`
//! - [`config`]: Catalog home configuration
//! - [`error`]: Error types

pub mod config;
pub mod error;
pub mod model;
pub mod query;
pub mod repository;
pub mod service;
pub mod store;
pub mod validation;
