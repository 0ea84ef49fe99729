//! Cross-template consistency classification.
//!
//! For one content record the analyzer looks at three name sets:
//!
//! - `P_ad`: placeholders of the record's content template body,
//! - `P_url`: placeholders of its URL template pattern,
//! - `K`: keys of its stored data.
//!
//! and sorts disagreements into three buckets:
//!
//! | Bucket | Rule |
//! |---|---|
//! | missing | `p ∈ P_ad` and `p ∉ K` |
//! | unused | `k ∈ K` not used by either template (alias-aware), and not a standard parameter |
//! | unsupplied URL | `u ∈ P_url` with no value in `K`, directly or through an alias |
//!
//! A key `k` counts as used when `k ∈ P_ad`, `k ∈ P_url`, `alias(k) ∈ P_url`, or
//! some content-side `a ∈ P_ad` has `alias(a) = k`.
//!
//! All functions return names in lexicographic order.

use crate::rules::RuleSet;
use serde::Serialize;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub missing: Vec<String>,
    pub unused: Vec<String>,
    pub unsupplied_url: Vec<String>,
}

impl Classification {
    pub fn is_clean(&self) -> bool {
        self.missing.is_empty() && self.unused.is_empty() && self.unsupplied_url.is_empty()
    }

    /// Every placeholder of both templates gets a value; unused keys may remain.
    pub fn fills_templates(&self) -> bool {
        self.missing.is_empty() && self.unsupplied_url.is_empty()
    }
}

/// Runs all three buckets for one record.
pub fn classify_record(
    template_names: &BTreeSet<String>,
    url_names: &BTreeSet<String>,
    data_keys: &BTreeSet<String>,
    rules: &RuleSet,
) -> Classification {
    Classification {
        missing: missing_placeholders(template_names, data_keys),
        unused: unused_data_keys(template_names, url_names, data_keys, rules),
        unsupplied_url: unsupplied_url_parameters(url_names, data_keys, rules),
    }
}

/// Placeholders the content template needs that the data does not supply.
pub fn missing_placeholders(
    template_names: &BTreeSet<String>,
    data_keys: &BTreeSet<String>,
) -> Vec<String> {
    template_names.difference(data_keys).cloned().collect()
}

/// Data keys neither template uses, excluding standard parameters.
pub fn unused_data_keys(
    template_names: &BTreeSet<String>,
    url_names: &BTreeSet<String>,
    data_keys: &BTreeSet<String>,
    rules: &RuleSet,
) -> Vec<String> {
    data_keys
        .iter()
        .filter(|key| !rules.is_standard_parameter(key.as_str()))
        .filter(|key| !is_key_used(key.as_str(), template_names, url_names, rules))
        .cloned()
        .collect()
}

fn is_key_used(
    key: &str,
    template_names: &BTreeSet<String>,
    url_names: &BTreeSet<String>,
    rules: &RuleSet,
) -> bool {
    template_names.contains(key)
        || url_names.contains(key)
        || rules
            .alias_of(key)
            .is_some_and(|target| url_names.contains(target))
        || rules
            .aliases_targeting(key)
            .any(|source| template_names.contains(source))
}

/// URL parameters the record cannot supply a value for.
pub fn unsupplied_url_parameters(
    url_names: &BTreeSet<String>,
    data_keys: &BTreeSet<String>,
    rules: &RuleSet,
) -> Vec<String> {
    url_names
        .iter()
        .filter(|param| {
            !data_keys.contains(param.as_str())
                && !rules
                    .aliases_targeting(param.as_str())
                    .any(|source| data_keys.contains(source))
        })
        .cloned()
        .collect()
}

/// Data keys still pointing at URL parameters that an edit removes.
///
/// A key is reported when it names a removed parameter directly or through its
/// alias, and nothing left uses it: neither the record's content template nor
/// the candidate URL placeholders (`url_names`). Standard parameters are
/// exempt, as everywhere else. Parameters *added* to a URL template are never
/// reported here.
pub fn keys_orphaned_by_url_removal(
    removed: &[String],
    template_names: &BTreeSet<String>,
    url_names: &BTreeSet<String>,
    data_keys: &BTreeSet<String>,
    rules: &RuleSet,
) -> Vec<String> {
    let removed: BTreeSet<&str> = removed.iter().map(String::as_str).collect();
    data_keys
        .iter()
        .filter(|key| !rules.is_standard_parameter(key.as_str()))
        .filter(|key| {
            removed.contains(key.as_str())
                || rules
                    .alias_of(key.as_str())
                    .is_some_and(|target| removed.contains(target))
        })
        .filter(|key| !is_key_used(key.as_str(), template_names, url_names, rules))
        .cloned()
        .collect()
}
