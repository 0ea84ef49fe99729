//! # Storage Layer
//!
//! Templink never owns persistence. Templates and content records live in
//! whatever system the editors use; the analyzer only needs a handful of
//! read-only queries against it. The [`DataStore`] trait is that contract.
//!
//! ## Read-Only by Construction
//!
//! Every method takes `&self`. The analysis runs against a snapshot of the
//! data and never writes back: no edits are committed, no records repaired.
//!
//! ## NotFound Semantics
//!
//! Single-entity lookups return the matching `*NotFound` error when the id
//! does not resolve. Targeted operations propagate it as-is, so no partial
//! report is ever produced for a dangling id. [`DataStore::all_bound_content`]
//! is the exception: it reports dangling references as `None` so the system
//! scan can surface them as orphans.
//!
//! ## Implementations
//!
//! - [`memory::InMemoryStore`]: `HashMap`-backed store, used by tests and the CLI.
//! - [`snapshot`]: loads an `InMemoryStore` from a JSON snapshot file.

use crate::error::Result;
use crate::model::{BoundContent, ContentRecord, ContentTemplate, RecordSummary, UrlTemplate};
use uuid::Uuid;

pub mod memory;
pub mod snapshot;

/// Read-only view of templates and content records.
pub trait DataStore {
    /// Get a content template by ID
    fn get_template(&self, id: &Uuid) -> Result<ContentTemplate>;

    /// Get a URL template by ID
    fn get_url_template(&self, id: &Uuid) -> Result<UrlTemplate>;

    /// Get a content record by ID
    fn get_record(&self, id: &Uuid) -> Result<ContentRecord>;

    /// Summaries of every record bound to a content template.
    ///
    /// Fails with `MalformedStoredData` if any of them cannot be decoded.
    fn records_for_template(&self, template_id: &Uuid) -> Result<Vec<RecordSummary>>;

    /// Summaries of every record bound to a URL template (same decoding rule)
    fn records_for_url_template(&self, template_id: &Uuid) -> Result<Vec<RecordSummary>>;

    /// Every record with its templates resolved (`None` when dangling)
    fn all_bound_content(&self) -> Result<Vec<BoundContent>>;
}
