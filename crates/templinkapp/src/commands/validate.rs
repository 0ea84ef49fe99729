//! Single-record integrity check against its saved templates.
//!
//! Unlike the system scan, this is a targeted lookup: a dangling reference or
//! undecodable stored data is returned as an error, not reported as findings.

use crate::analysis::classify_record;
use crate::error::Result;
use crate::placeholders::placeholder_set;
use crate::rules::RuleSet;
use crate::store::DataStore;
use serde::Serialize;
use std::collections::BTreeSet;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordValidation {
    pub content_id: Uuid,
    /// False when the record cannot fill its templates; unused keys alone
    /// leave it valid.
    pub is_valid: bool,
    pub missing: Vec<String>,
    pub unused: Vec<String>,
    pub unsupplied_url: Vec<String>,
    pub template_name: String,
}

pub fn run<S: DataStore>(
    store: &S,
    rules: &RuleSet,
    content_id: &Uuid,
) -> Result<RecordValidation> {
    let record = store.get_record(content_id)?;
    let data_keys = record.stored_data()?.keys();
    let template = store.get_template(&record.template_id)?;
    let url_names = match record.url_template_id {
        Some(id) => placeholder_set(&store.get_url_template(&id)?.pattern),
        None => BTreeSet::new(),
    };

    let classification = classify_record(
        &placeholder_set(&template.body),
        &url_names,
        &data_keys,
        rules,
    );
    let is_valid = classification.fills_templates();
    tracing::debug!(content = %content_id, is_valid, "validated record");

    Ok(RecordValidation {
        content_id: *content_id,
        is_valid,
        missing: classification.missing,
        unused: classification.unused,
        unsupplied_url: classification.unsupplied_url,
        template_name: template.name,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TemplinkError;
    use crate::store::memory::fixtures::StoreFixture;
    use serde_json::json;

    #[test]
    fn complete_record_is_valid() {
        let mut fx = StoreFixture::new();
        let t = fx.template("Card", "{{title}}{{image}}");
        let id = fx.record("Full", t, None, json!({"title": "a", "image": "b.png"}));

        let result = run(&fx.store, &RuleSet::default(), &id).unwrap();
        assert!(result.is_valid);
        assert!(result.missing.is_empty());
        assert_eq!(result.template_name, "Card");
    }

    #[test]
    fn missing_placeholder_invalidates() {
        let mut fx = StoreFixture::new();
        let t = fx.template("Card", "{{title}}{{image}}");
        let id = fx.record("Partial", t, None, json!({"title": "a"}));

        let result = run(&fx.store, &RuleSet::default(), &id).unwrap();
        assert!(!result.is_valid);
        assert_eq!(result.missing, vec!["image"]);
    }

    #[test]
    fn unused_keys_alone_stay_valid() {
        let mut fx = StoreFixture::new();
        let t = fx.template("Card", "{{title}}");
        let id = fx.record("Extra", t, None, json!({"title": "a", "legacy": "b"}));

        let result = run(&fx.store, &RuleSet::default(), &id).unwrap();
        assert!(result.is_valid);
        assert_eq!(result.unused, vec!["legacy"]);
    }

    #[test]
    fn url_parameters_resolve_through_aliases() {
        let mut fx = StoreFixture::new();
        let t = fx.template("Card", "{{title}}");
        let u = fx.url_template("Landing", "{{baseUrl}}?c={{utm_campaign}}");
        let id = fx.record(
            "Linked",
            t,
            Some(u),
            json!({"title": "a", "url": "https://x.test"}),
        );

        let result = run(&fx.store, &RuleSet::default(), &id).unwrap();
        assert_eq!(result.unsupplied_url, vec!["utm_campaign"]);
        assert!(!result.is_valid);
        assert!(result.unused.is_empty());
    }

    #[test]
    fn malformed_data_is_an_error() {
        let mut fx = StoreFixture::new();
        let t = fx.template("Card", "{{title}}");
        let id = fx.record("Broken", t, None, json!("{not json"));

        match run(&fx.store, &RuleSet::default(), &id) {
            Err(TemplinkError::MalformedStoredData { record, .. }) => assert_eq!(record, id),
            other => panic!("Expected MalformedStoredData, got {:?}", other),
        }
    }

    #[test]
    fn dangling_references_are_not_found() {
        let mut fx = StoreFixture::new();
        let t = fx.template("Card", "{{title}}");
        let u = fx.url_template("Landing", "{{baseUrl}}");
        let id = fx.record("Linked", t, Some(u), json!({}));

        fx.store.remove_url_template(&u);
        assert!(matches!(
            run(&fx.store, &RuleSet::default(), &id),
            Err(TemplinkError::UrlTemplateNotFound(_))
        ));

        fx.store.remove_template(&t);
        assert!(matches!(
            run(&fx.store, &RuleSet::default(), &id),
            Err(TemplinkError::TemplateNotFound(_))
        ));

        assert!(matches!(
            run(&fx.store, &RuleSet::default(), &Uuid::new_v4()),
            Err(TemplinkError::ContentNotFound(_))
        ));
    }
}
