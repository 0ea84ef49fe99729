use super::DataStore;
use crate::error::{Result, TemplinkError};
use crate::model::{BoundContent, ContentRecord, ContentTemplate, RecordSummary, UrlTemplate};
use std::collections::HashMap;
use uuid::Uuid;

/// `HashMap`-backed store.
///
/// Records keep insertion order so reports list them deterministically.
#[derive(Debug, Default, Clone)]
pub struct InMemoryStore {
    templates: HashMap<Uuid, ContentTemplate>,
    url_templates: HashMap<Uuid, UrlTemplate>,
    records: Vec<ContentRecord>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_template(&mut self, template: ContentTemplate) {
        self.templates.insert(template.id, template);
    }

    pub fn insert_url_template(&mut self, template: UrlTemplate) {
        self.url_templates.insert(template.id, template);
    }

    /// Inserts a record, replacing any record with the same id.
    pub fn insert_record(&mut self, record: ContentRecord) {
        match self.records.iter_mut().find(|r| r.id == record.id) {
            Some(existing) => *existing = record,
            None => self.records.push(record),
        }
    }

    /// Drops a content template, leaving its records dangling.
    pub fn remove_template(&mut self, id: &Uuid) -> Option<ContentTemplate> {
        self.templates.remove(id)
    }

    /// Drops a URL template, leaving its records dangling.
    pub fn remove_url_template(&mut self, id: &Uuid) -> Option<UrlTemplate> {
        self.url_templates.remove(id)
    }

    pub fn templates(&self) -> impl Iterator<Item = &ContentTemplate> {
        self.templates.values()
    }

    pub fn url_templates(&self) -> impl Iterator<Item = &UrlTemplate> {
        self.url_templates.values()
    }

    pub fn records(&self) -> &[ContentRecord] {
        &self.records
    }
}

impl DataStore for InMemoryStore {
    fn get_template(&self, id: &Uuid) -> Result<ContentTemplate> {
        self.templates
            .get(id)
            .cloned()
            .ok_or(TemplinkError::TemplateNotFound(*id))
    }

    fn get_url_template(&self, id: &Uuid) -> Result<UrlTemplate> {
        self.url_templates
            .get(id)
            .cloned()
            .ok_or(TemplinkError::UrlTemplateNotFound(*id))
    }

    fn get_record(&self, id: &Uuid) -> Result<ContentRecord> {
        self.records
            .iter()
            .find(|r| r.id == *id)
            .cloned()
            .ok_or(TemplinkError::ContentNotFound(*id))
    }

    fn records_for_template(&self, template_id: &Uuid) -> Result<Vec<RecordSummary>> {
        self.records
            .iter()
            .filter(|r| r.template_id == *template_id)
            .map(RecordSummary::from_record)
            .collect()
    }

    fn records_for_url_template(&self, template_id: &Uuid) -> Result<Vec<RecordSummary>> {
        self.records
            .iter()
            .filter(|r| r.url_template_id.as_ref() == Some(template_id))
            .map(RecordSummary::from_record)
            .collect()
    }

    fn all_bound_content(&self) -> Result<Vec<BoundContent>> {
        Ok(self
            .records
            .iter()
            .map(|record| BoundContent {
                record: record.clone(),
                template: self.templates.get(&record.template_id).cloned(),
                url_template: record
                    .url_template_id
                    .and_then(|id| self.url_templates.get(&id).cloned()),
            })
            .collect())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use serde_json::Value;

    /// Builds a populated [`InMemoryStore`] and hands back the ids it creates.
    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn template(&mut self, name: &str, body: &str) -> Uuid {
            let template = ContentTemplate::new(name, body);
            let id = template.id;
            self.store.insert_template(template);
            id
        }

        pub fn url_template(&mut self, name: &str, pattern: &str) -> Uuid {
            let template = UrlTemplate::new(name, pattern);
            let id = template.id;
            self.store.insert_url_template(template);
            id
        }

        pub fn record(
            &mut self,
            name: &str,
            template_id: Uuid,
            url_template_id: Option<Uuid>,
            data: Value,
        ) -> Uuid {
            let record = ContentRecord::new(name, template_id, url_template_id).with_data(data);
            let id = record.id;
            self.store.insert_record(record);
            id
        }

        /// Binds `count` records sharing the same data, named `"{prefix} N"`.
        pub fn records(
            &mut self,
            prefix: &str,
            count: usize,
            template_id: Uuid,
            url_template_id: Option<Uuid>,
            data: Value,
        ) -> Vec<Uuid> {
            (1..=count)
                .map(|i| {
                    self.record(
                        &format!("{} {}", prefix, i),
                        template_id,
                        url_template_id,
                        data.clone(),
                    )
                })
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::StoreFixture;
    use super::*;
    use serde_json::json;

    #[test]
    fn test_get_template_not_found() {
        let store = InMemoryStore::new();
        let id = Uuid::new_v4();
        match store.get_template(&id) {
            Err(TemplinkError::TemplateNotFound(err_id)) => assert_eq!(err_id, id),
            _ => panic!("Expected TemplateNotFound"),
        }
    }

    #[test]
    fn test_get_url_template_and_record_not_found() {
        let store = InMemoryStore::new();
        let id = Uuid::new_v4();
        assert!(matches!(
            store.get_url_template(&id),
            Err(TemplinkError::UrlTemplateNotFound(_))
        ));
        assert!(matches!(
            store.get_record(&id),
            Err(TemplinkError::ContentNotFound(_))
        ));
    }

    #[test]
    fn test_records_filtered_by_binding() {
        let mut fx = StoreFixture::new();
        let t1 = fx.template("Card", "{{title}}");
        let t2 = fx.template("Banner", "{{image}}");
        let u1 = fx.url_template("Landing", "{{baseUrl}}");
        fx.records("Card", 2, t1, Some(u1), json!({"title": "x"}));
        fx.record("Banner 1", t2, None, json!({"image": "y"}));

        assert_eq!(fx.store.records_for_template(&t1).unwrap().len(), 2);
        assert_eq!(fx.store.records_for_template(&t2).unwrap().len(), 1);
        assert_eq!(fx.store.records_for_url_template(&u1).unwrap().len(), 2);
    }

    #[test]
    fn test_summaries_preserve_insertion_order() {
        let mut fx = StoreFixture::new();
        let t = fx.template("Card", "{{title}}");
        fx.records("Card", 3, t, None, json!({}));
        let names: Vec<_> = fx
            .store
            .records_for_template(&t)
            .unwrap()
            .into_iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(names, vec!["Card 1", "Card 2", "Card 3"]);
    }

    #[test]
    fn test_summaries_fail_on_malformed_data() {
        let mut fx = StoreFixture::new();
        let t = fx.template("Card", "{{title}}");
        fx.record("Fine", t, None, json!({"title": "x"}));
        let broken = fx.record("Broken", t, None, json!([1, 2]));

        match fx.store.records_for_template(&t) {
            Err(TemplinkError::MalformedStoredData { record, .. }) => assert_eq!(record, broken),
            other => panic!("Expected MalformedStoredData, got {:?}", other),
        }
        // the full sweep still hands the raw record over
        assert_eq!(fx.store.all_bound_content().unwrap().len(), 2);
    }

    #[test]
    fn test_bound_content_reports_dangling_refs() {
        let mut fx = StoreFixture::new();
        let t = fx.template("Card", "{{title}}");
        let u = fx.url_template("Landing", "{{baseUrl}}");
        fx.record("Kept", t, Some(u), json!({}));
        fx.store.remove_template(&t);
        fx.store.remove_url_template(&u);

        let bound = fx.store.all_bound_content().unwrap();
        assert_eq!(bound.len(), 1);
        assert!(bound[0].template.is_none());
        assert!(bound[0].url_template.is_none());
    }

    #[test]
    fn test_insert_record_replaces_same_id() {
        let mut fx = StoreFixture::new();
        let t = fx.template("Card", "{{title}}");
        let id = fx.record("Before", t, None, json!({}));
        let mut updated = fx.store.get_record(&id).unwrap();
        updated.name = "After".to_string();
        fx.store.insert_record(updated);

        assert_eq!(fx.store.records().len(), 1);
        assert_eq!(fx.store.get_record(&id).unwrap().name, "After");
    }
}
