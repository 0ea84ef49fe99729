//! Placeholder set diffs.
//!
//! Compares the placeholders a template had before an edit with those the
//! candidate text has now. Only extraction-level normalization applies; names
//! differing in case are different placeholders.

use super::placeholder_set;
use serde::Serialize;
use std::collections::HashSet;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PlaceholderDiff {
    /// In the new text but not in the old set, in extraction order.
    pub added: Vec<String>,
    /// In the old set but not in the new text, in the old set's order.
    pub removed: Vec<String>,
    /// In both, in the old set's order.
    pub unchanged: Vec<String>,
}

impl PlaceholderDiff {
    /// True when nothing was added or removed.
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

/// Diffs `old_names` against the placeholders extracted from `new_text`.
///
/// # Examples
/// ```
/// use templinkapp::placeholders::diff;
///
/// let old = vec!["title".to_string()];
/// let d = diff(&old, "<div>{{title}}{{image}}</div>");
/// assert_eq!(d.added, vec!["image"]);
/// assert!(d.removed.is_empty());
/// assert_eq!(d.unchanged, vec!["title"]);
/// ```
pub fn diff(old_names: &[String], new_text: &str) -> PlaceholderDiff {
    let new_names = placeholder_set(new_text);
    let old_lookup: HashSet<&str> = old_names.iter().map(String::as_str).collect();

    let added: Vec<String> = new_names
        .iter()
        .filter(|name| !old_lookup.contains(name.as_str()))
        .cloned()
        .collect();
    let (unchanged, removed): (Vec<String>, Vec<String>) = old_names
        .iter()
        .cloned()
        .partition(|name| new_names.contains(name));

    PlaceholderDiff {
        added,
        removed,
        unchanged,
    }
}
