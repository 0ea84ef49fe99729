//! # Content-Template Change Preview
//!
//! Answers "what breaks if I save this body?" before anything is saved.
//!
//! The candidate body's placeholder set replaces the saved one, and every
//! record bound to the template is classified against it (together with the
//! record's current URL template, which resolves aliases). Only the
//! content-side buckets are reported: `missing` and `unused`.
//!
//! ## Which Records Are Listed
//!
//! - Records with at least one mismatch are listed with their mismatches.
//! - If no record has a mismatch but the body text changed, **every** bound
//!   record is listed with empty lists: the data contract holds, but the
//!   rendered output of each of them changes.
//! - An unchanged body with no mismatches lists nothing.
//!
//! A record whose URL template reference dangles is classified with an empty
//! URL placeholder set; the system scan is where that gets reported. A record
//! whose stored data cannot be decoded fails the preview with
//! [`TemplinkError::MalformedStoredData`](crate::error::TemplinkError).

use super::{url_template_names, AffectedRecord, ImpactReport, NamesCache};
use crate::analysis::consistency::{missing_placeholders, unused_data_keys};
use crate::analysis::severity;
use crate::error::Result;
use crate::placeholders::{diff, extract_placeholders, placeholder_set};
use crate::rules::RuleSet;
use crate::store::DataStore;
use std::collections::BTreeSet;
use uuid::Uuid;

pub fn run<S: DataStore>(
    store: &S,
    rules: &RuleSet,
    template_id: &Uuid,
    candidate_body: &str,
    candidate_name: Option<&str>,
) -> Result<ImpactReport> {
    let template = store.get_template(template_id)?;
    let placeholder_diff = diff(&extract_placeholders(&template.body), candidate_body);
    let candidate_names = placeholder_set(candidate_body);
    let body_changed = template.body != candidate_body;

    let records = store.records_for_template(template_id)?;
    let mut url_names = NamesCache::default();
    let no_url = BTreeSet::new();
    let mut classified = Vec::with_capacity(records.len());
    for record in records {
        let record_url_names = match record.url_template_id {
            Some(id) => url_names.get_or_fetch(id, |id| url_template_names(store, id))?,
            None => &no_url,
        };
        classified.push(AffectedRecord {
            id: record.id,
            name: record.name,
            status: record.status,
            missing: missing_placeholders(&candidate_names, &record.data_keys),
            unused: unused_data_keys(&candidate_names, record_url_names, &record.data_keys, rules),
        });
    }

    let any_mismatch = classified.iter().any(AffectedRecord::has_mismatches);
    let affected: Vec<AffectedRecord> = if any_mismatch {
        classified
            .into_iter()
            .filter(AffectedRecord::has_mismatches)
            .collect()
    } else if body_changed {
        classified
    } else {
        Vec::new()
    };

    let total_affected = affected.len();
    let severity = severity::classify(
        &placeholder_diff,
        total_affected,
        rules.high_severity_threshold(),
    );
    tracing::debug!(
        template = %template_id,
        added = placeholder_diff.added.len(),
        removed = placeholder_diff.removed.len(),
        affected = total_affected,
        %severity,
        "previewed content template change"
    );

    Ok(ImpactReport {
        template_id: *template_id,
        template_name: candidate_name
            .map(str::to_string)
            .unwrap_or(template.name),
        diff: placeholder_diff,
        affected,
        total_affected,
        severity,
    })
}
