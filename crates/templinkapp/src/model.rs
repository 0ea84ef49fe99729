//! # Domain Model
//!
//! This module defines the entities the analyzer reads: [`ContentTemplate`],
//! [`UrlTemplate`] and [`ContentRecord`], plus the typed view of a record's
//! stored data ([`StoredData`]).
//!
//! ## Three Independently Edited Entities
//!
//! ```text
//!   ContentTemplate.body      "<h1>{{title}}</h1><img src='{{image}}'>"
//!   UrlTemplate.pattern       "{{baseUrl}}?utm_source={{utm_source}}"
//!   ContentRecord.data        {"title": "Hi", "link": "https://…"}
//! ```
//!
//! Editors change each of these on their own schedule. Nothing here enforces
//! agreement between them; that is the analyzer's job.
//!
//! ## Stored Data Decoding
//!
//! Records keep their data exactly as it was persisted, as a raw
//! [`serde_json::Value`]. Historically the value is either a JSON object or a
//! string containing a JSON object, so it is never read directly. Every read
//! goes through [`StoredData::decode`] or its policy wrapper
//! [`StoredData::decode_or_empty`].
//!
//! Decoding rules:
//!
//! - `null` or a blank string: empty mapping.
//! - An object: each value must be a string, number, or boolean. `null` values
//!   are skipped (they supply nothing). Arrays and nested objects are malformed.
//! - A string: parsed as JSON, then the object rule applies.
//! - Anything else is malformed.
//!
//! ### Fallback Policy
//!
//! [`StoredData::decode_or_empty`] is the single place where a decode failure is
//! recovered: the failure is logged at `warn` and the record is treated as
//! having no data. Only the system scan uses it, so one corrupt record never
//! aborts a sweep over all the others. Targeted operations (the previews and
//! single-record validation) read through [`ContentRecord::stored_data`] and
//! fail with [`TemplinkError::MalformedStoredData`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};
use uuid::Uuid;

use crate::error::{Result, TemplinkError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ContentStatus {
    #[default]
    Draft,
    Active,
    Paused,
    Archived,
}

impl std::fmt::Display for ContentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ContentStatus::Draft => "draft",
            ContentStatus::Active => "active",
            ContentStatus::Paused => "paused",
            ContentStatus::Archived => "archived",
        };
        f.write_str(label)
    }
}

/// A body of markup reused across many content records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentTemplate {
    pub id: Uuid,
    pub name: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ContentTemplate {
    pub fn new(name: impl Into<String>, body: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            body: body.into(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// A URL pattern reused across many content records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UrlTemplate {
    pub id: Uuid,
    pub name: String,
    pub pattern: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UrlTemplate {
    pub fn new(name: impl Into<String>, pattern: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            pattern: pattern.into(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// Binds one content template, one URL template and concrete values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentRecord {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub status: ContentStatus,
    pub template_id: Uuid,
    #[serde(default)]
    pub url_template_id: Option<Uuid>,
    /// Raw stored data. Read it through [`StoredData`], never directly.
    #[serde(default)]
    pub data: Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ContentRecord {
    pub fn new(name: impl Into<String>, template_id: Uuid, url_template_id: Option<Uuid>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            status: ContentStatus::Draft,
            template_id,
            url_template_id,
            data: Value::Object(Default::default()),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_data(mut self, data: Value) -> Self {
        self.data = data;
        self
    }

    pub fn with_status(mut self, status: ContentStatus) -> Self {
        self.status = status;
        self
    }

    /// Strictly decoded data; malformed data is an error.
    pub fn stored_data(&self) -> Result<StoredData> {
        StoredData::decode(self.id, &self.data)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScalarValue {
    Bool(bool),
    Number(serde_json::Number),
    Text(String),
}

/// Typed mapping from placeholder name to the value a record supplies.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StoredData(BTreeMap<String, ScalarValue>);

impl StoredData {
    pub fn decode(record: Uuid, raw: &Value) -> Result<Self> {
        let malformed = |reason: String| TemplinkError::MalformedStoredData { record, reason };

        match raw {
            Value::Null => Ok(Self::default()),
            Value::Object(map) => Self::from_object(map).map_err(malformed),
            Value::String(text) if text.trim().is_empty() => Ok(Self::default()),
            Value::String(text) => {
                let parsed: Value = serde_json::from_str(text)
                    .map_err(|e| malformed(format!("invalid JSON text: {}", e)))?;
                match parsed {
                    Value::Null => Ok(Self::default()),
                    Value::Object(map) => Self::from_object(&map).map_err(malformed),
                    other => Err(malformed(format!(
                        "expected a JSON object, found {}",
                        kind_of(&other)
                    ))),
                }
            }
            other => Err(malformed(format!(
                "expected a JSON object, found {}",
                kind_of(other)
            ))),
        }
    }

    /// Decodes `raw`, substituting an empty mapping when it is malformed.
    pub fn decode_or_empty(record: Uuid, raw: &Value) -> Self {
        match Self::decode(record, raw) {
            Ok(data) => data,
            Err(e) => {
                tracing::warn!(%record, error = %e, "treating malformed stored data as empty");
                Self::default()
            }
        }
    }

    fn from_object(map: &serde_json::Map<String, Value>) -> std::result::Result<Self, String> {
        let mut values = BTreeMap::new();
        for (key, value) in map {
            let scalar = match value {
                Value::Null => continue,
                Value::Bool(b) => ScalarValue::Bool(*b),
                Value::Number(n) => ScalarValue::Number(n.clone()),
                Value::String(s) => ScalarValue::Text(s.clone()),
                other => return Err(not_scalar(key, other)),
            };
            values.insert(key.clone(), scalar);
        }
        Ok(Self(values))
    }

    pub fn keys(&self) -> BTreeSet<String> {
        self.0.keys().cloned().collect()
    }

    pub fn get(&self, key: &str) -> Option<&ScalarValue> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

fn not_scalar(key: &str, value: &Value) -> String {
    format!(
        "value for '{}' must be a scalar, found {}",
        key,
        kind_of(value)
    )
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// What the preview modes need to know about a bound record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordSummary {
    pub id: Uuid,
    pub name: String,
    pub status: ContentStatus,
    pub template_id: Uuid,
    pub url_template_id: Option<Uuid>,
    pub data_keys: BTreeSet<String>,
}

impl RecordSummary {
    pub fn from_record(record: &ContentRecord) -> Result<Self> {
        Ok(Self {
            id: record.id,
            name: record.name.clone(),
            status: record.status,
            template_id: record.template_id,
            url_template_id: record.url_template_id,
            data_keys: record.stored_data()?.keys(),
        })
    }
}

/// A record together with whatever its template references resolve to.
///
/// `None` means the reference is dangling (or, for the URL template, absent).
#[derive(Debug, Clone)]
pub struct BoundContent {
    pub record: ContentRecord,
    pub template: Option<ContentTemplate>,
    pub url_template: Option<UrlTemplate>,
}
