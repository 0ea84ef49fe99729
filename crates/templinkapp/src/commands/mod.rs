//! # Command Layer
//!
//! This module contains the **core business logic** of templink. Each
//! operation lives in its own submodule as a plain function generic over
//! [`DataStore`](crate::store::DataStore).
//!
//! ## Role and Responsibilities
//!
//! Commands:
//! - Fetch exactly the templates and records an operation needs
//! - Run the pure analysis primitives from [`crate::analysis`]
//! - Return structured reports, never strings
//!
//! ## What Commands Do NOT Do
//!
//! - **Any I/O**: No stdout, stderr, or formatting
//! - **Writes**: Nothing is saved, repaired, or cached between calls
//! - **Partial results on NotFound**: a dangling target id aborts the call
//!
//! ## The Three Analysis Modes
//!
//! | Mode | Module | Input | Buckets reported |
//! |---|---|---|---|
//! | Content-template preview | [`preview_template`] | candidate body | missing, unused |
//! | URL-template preview | [`preview_url`] | candidate pattern | unused (removed params only) |
//! | System scan | [`scan`] | saved templates | missing, unused, unsupplied URL + orphans |
//!
//! [`validate`] runs the system-scan classification for a single record.
//!
//! ## Testing Strategy
//!
//! **This is where the lion's share of testing lives.** Command tests build an
//! [`InMemoryStore`](crate::store::memory::InMemoryStore) through
//! [`StoreFixture`](crate::store::memory::fixtures::StoreFixture) and assert on
//! the returned report.

use crate::analysis::Severity;
use crate::error::{Result, TemplinkError};
use crate::model::ContentStatus;
use crate::placeholders::{placeholder_set, PlaceholderDiff};
use crate::store::DataStore;
use serde::Serialize;
use std::collections::hash_map::Entry;
use std::collections::{BTreeSet, HashMap};
use uuid::Uuid;

pub mod preview_template;
pub mod preview_url;
pub mod scan;
pub mod validate;

/// One record touched by a previewed template edit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AffectedRecord {
    pub id: Uuid,
    pub name: String,
    pub status: ContentStatus,
    /// Placeholders the edited template would need but the record lacks.
    pub missing: Vec<String>,
    /// Stored keys the edited template set would no longer use.
    pub unused: Vec<String>,
}

impl AffectedRecord {
    pub fn has_mismatches(&self) -> bool {
        !self.missing.is_empty() || !self.unused.is_empty()
    }
}

/// Blast radius of a template edit, computed before it is saved.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImpactReport {
    pub template_id: Uuid,
    pub template_name: String,
    pub diff: PlaceholderDiff,
    pub affected: Vec<AffectedRecord>,
    pub total_affected: usize,
    pub severity: Severity,
}

/// Placeholder sets of saved templates, fetched once per id within one call.
#[derive(Default)]
pub(crate) struct NamesCache {
    sets: HashMap<Uuid, BTreeSet<String>>,
}

impl NamesCache {
    pub(crate) fn get_or_fetch<F>(&mut self, id: Uuid, fetch: F) -> Result<&BTreeSet<String>>
    where
        F: FnOnce(&Uuid) -> Result<BTreeSet<String>>,
    {
        match self.sets.entry(id) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => {
                let names = fetch(&id)?;
                Ok(entry.insert(names))
            }
        }
    }
}

/// Placeholders of a saved content template; a dangling id yields none.
pub(crate) fn content_template_names<S: DataStore>(
    store: &S,
    id: &Uuid,
) -> Result<BTreeSet<String>> {
    match store.get_template(id) {
        Ok(template) => Ok(placeholder_set(&template.body)),
        Err(TemplinkError::TemplateNotFound(_)) => {
            tracing::warn!(template = %id, "dangling content template reference");
            Ok(BTreeSet::new())
        }
        Err(e) => Err(e),
    }
}

/// Placeholders of a saved URL template; a dangling id yields none.
pub(crate) fn url_template_names<S: DataStore>(store: &S, id: &Uuid) -> Result<BTreeSet<String>> {
    match store.get_url_template(id) {
        Ok(url_template) => Ok(placeholder_set(&url_template.pattern)),
        Err(TemplinkError::UrlTemplateNotFound(_)) => {
            tracing::warn!(url_template = %id, "dangling URL template reference");
            Ok(BTreeSet::new())
        }
        Err(e) => Err(e),
    }
}
