//! JSON snapshots of templates and records.
//!
//! A snapshot is a point-in-time export of the editing system, loaded into an
//! [`InMemoryStore`] for analysis:
//!
//! ```json
//! {
//!   "templates":     [{ "id": "…", "name": "Card", "body": "<h1>{{title}}</h1>", … }],
//!   "url_templates": [{ "id": "…", "name": "Landing", "pattern": "{{baseUrl}}", … }],
//!   "records":       [{ "id": "…", "name": "Spring", "template_id": "…", "data": {…}, … }]
//! }
//! ```
//!
//! All three lists are optional. Record `data` is kept raw; a record with
//! malformed data still loads and is handled by the decode policy in
//! [`crate::model`].

use super::memory::InMemoryStore;
use crate::error::Result;
use crate::model::{ContentRecord, ContentTemplate, UrlTemplate};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Snapshot {
    pub templates: Vec<ContentTemplate>,
    pub url_templates: Vec<UrlTemplate>,
    pub records: Vec<ContentRecord>,
}

impl Snapshot {
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn into_store(self) -> InMemoryStore {
        let mut store = InMemoryStore::new();
        for template in self.templates {
            store.insert_template(template);
        }
        for template in self.url_templates {
            store.insert_url_template(template);
        }
        for record in self.records {
            store.insert_record(record);
        }
        store
    }
}

/// Reads the snapshot at `path` into a store.
pub fn load(path: &Path) -> Result<InMemoryStore> {
    let text = fs::read_to_string(path)?;
    let snapshot = Snapshot::from_json(&text)?;
    tracing::debug!(
        path = %path.display(),
        templates = snapshot.templates.len(),
        url_templates = snapshot.url_templates.len(),
        records = snapshot.records.len(),
        "loaded snapshot"
    );
    Ok(snapshot.into_store())
}
