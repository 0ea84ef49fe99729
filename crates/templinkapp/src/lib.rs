//! # Templink Architecture
//!
//! Templink keeps content records consistent with the templates they are
//! bound to. A record stores a flat mapping of values; a content template and
//! an optional URL template reference those values through `{{name}}`
//! placeholders. Templink answers two questions:
//!
//! - *Before* a template edit is saved: which records would break, and how
//!   badly? (the two preview modes)
//! - *At any time*: which records are out of step with their templates, or
//!   bound to a template that no longer exists? (the system scan)
//!
//! Templink is a **read-only, UI-agnostic library**. It never writes, repairs
//! or renders anything; callers decide what to do with a report.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI client (crates/templink)                               │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, owns the rule tables          │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Preview, validate, and scan logic                        │
//! │  - Built on the pure primitives in placeholders/ + analysis/│
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Read-only DataStore trait                                │
//! │  - InMemoryStore, loaded from JSON snapshots                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: Pure Over a Snapshot
//!
//! Every analysis is a deterministic function of the templates and records it
//! reads. There is no global mutable state; the compiled placeholder regex
//! and the keyword tables are the only statics. Analyses can run concurrently
//! without coordination.
//!
//! ## Testing Strategy
//!
//! 1. **Primitives** (`placeholders/`, `analysis/`, `rules.rs`): table-style
//!    unit tests of extraction, naming, diffing, and classification.
//! 2. **Commands** (`commands/*.rs`): the lion's share, run against an
//!    `InMemoryStore` built by `StoreFixture`.
//! 3. **API** (`api.rs`): dispatch only.
//! 4. **CLI** (`crates/templink/tests`): end-to-end runs of the binary on
//!    snapshot files.
//!
//! ## Module Overview
//!
//! - [`placeholders`]: extraction, naming convention, sample values, diffing
//! - [`rules`]: alias table, standard parameters, severity threshold
//! - [`analysis`]: record classification and severity ratings
//! - [`commands`]: the analysis modes
//! - [`api`]: the facade, entry point for all operations
//! - [`store`]: storage abstraction, in-memory store and snapshots
//! - [`model`]: templates, records and stored data decoding
//! - [`config`]: configuration schema
//! - [`init`]: config resolution and context setup
//! - [`error`]: error types

pub mod analysis;
pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod init;
pub mod model;
pub mod placeholders;
pub mod rules;
pub mod store;
