//! In-memory document store using dashmap.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use dashmap::DashMap;
use serde_json::Value;
use tracing::debug;

use notnotion_core::config::StoreConfig;
use notnotion_core::result::AppResult;
use notnotion_core::traits::store::{Document, DocumentStore};
use notnotion_core::types::{CollectionPath, DocumentPath, FieldFilter};

/// In-memory document store.
///
/// Documents are grouped per collection, keyed by the rendered collection
/// path, and ordered by id inside a collection.
#[derive(Debug, Clone, Default)]
pub struct MemoryDocumentStore {
    /// Collection path → (document id → document).
    collections: Arc<DashMap<String, BTreeMap<String, Document>>>,
    /// Delay applied before every call.
    latency: Duration,
}

impl MemoryDocumentStore {
    /// Create an empty store without latency.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store from configuration.
    pub fn from_config(config: &StoreConfig) -> Self {
        Self::new().with_latency(Duration::from_millis(config.latency_ms))
    }

    /// Set the delay applied before every call.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Total number of documents across all collections.
    pub fn document_count(&self) -> usize {
        self.collections.iter().map(|entry| entry.value().len()).sum()
    }

    /// Every document in the store, ordered by path.
    pub fn documents(&self) -> Vec<Document> {
        let mut all: Vec<Document> = self
            .collections
            .iter()
            .flat_map(|entry| entry.value().values().cloned().collect::<Vec<_>>())
            .collect();
        all.sort_by_key(|doc| doc.path.to_string());
        all
    }

    /// Insert documents without latency. Existing documents at the same
    /// paths are replaced.
    pub fn insert_documents(&self, documents: impl IntoIterator<Item = Document>) {
        for doc in documents {
            self.collections
                .entry(doc.path.collection().to_string())
                .or_default()
                .insert(doc.path.id().to_string(), doc);
        }
    }

    /// Remove every document.
    pub fn clear(&self) {
        self.collections.clear();
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn list(
        &self,
        collection: &CollectionPath,
        filter: Option<&FieldFilter>,
    ) -> AppResult<Vec<Document>> {
        self.simulate_latency().await;

        let key = collection.to_string();
        let docs: Vec<Document> = self
            .collections
            .get(&key)
            .map(|entry| {
                entry
                    .value()
                    .values()
                    .filter(|doc| filter.is_none_or(|f| f.matches(&doc.data)))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();

        debug!(collection = %key, count = docs.len(), "Listed documents");
        Ok(docs)
    }

    async fn get(&self, path: &DocumentPath) -> AppResult<Option<Document>> {
        self.simulate_latency().await;

        Ok(self
            .collections
            .get(&path.collection().to_string())
            .and_then(|entry| entry.value().get(path.id()).cloned()))
    }

    async fn set(&self, path: &DocumentPath, data: Value) -> AppResult<()> {
        self.simulate_latency().await;

        self.collections
            .entry(path.collection().to_string())
            .or_default()
            .insert(
                path.id().to_string(),
                Document {
                    path: path.clone(),
                    data,
                },
            );

        debug!(path = %path, "Stored document");
        Ok(())
    }

    async fn delete(&self, path: &DocumentPath) -> AppResult<()> {
        self.simulate_latency().await;

        let key = path.collection().to_string();
        let removed = self
            .collections
            .get_mut(&key)
            .and_then(|mut entry| entry.value_mut().remove(path.id()))
            .is_some();
        self.collections.remove_if(&key, |_, docs| docs.is_empty());

        debug!(path = %path, removed, "Deleted document");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use notnotion_core::types::{FolderId, NoteId, UserId};
    use serde_json::json;

    fn uid() -> UserId {
        UserId::parse("u1").unwrap()
    }

    fn folder(id: &str) -> FolderId {
        FolderId::parse(id).unwrap()
    }

    #[tokio::test]
    async fn test_set_get() {
        let store = MemoryDocumentStore::new();
        let path = DocumentPath::folder(&uid(), &folder("f1"));
        store.set(&path, json!({"name": "Inbox"})).await.unwrap();

        let doc = store.get(&path).await.unwrap().unwrap();
        assert_eq!(doc.id(), "f1");
        assert_eq!(doc.data["name"], "Inbox");
    }

    #[tokio::test]
    async fn test_list_filters_and_orders_by_id() {
        let store = MemoryDocumentStore::new();
        for (id, parent) in [("b", "None"), ("a", "None"), ("c", "a")] {
            let path = DocumentPath::folder(&uid(), &folder(id));
            store
                .set(&path, json!({"parentFolderId": parent}))
                .await
                .unwrap();
        }

        let collection = CollectionPath::Folders(uid());
        let all = store.list(&collection, None).await.unwrap();
        let ids: Vec<&str> = all.iter().map(Document::id).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);

        let filter = FieldFilter::eq("parentFolderId", "None");
        let roots = store.list(&collection, Some(&filter)).await.unwrap();
        assert_eq!(roots.len(), 2);
    }

    #[tokio::test]
    async fn test_collections_are_isolated() {
        let store = MemoryDocumentStore::new();
        let note = DocumentPath::note(&uid(), &folder("f1"), &NoteId::parse("n1").unwrap());
        store.set(&note, json!({"title": "x"})).await.unwrap();

        let other = CollectionPath::Notes(uid(), folder("f2"));
        assert!(store.list(&other, None).await.unwrap().is_empty());
        let folders = CollectionPath::Folders(uid());
        assert!(store.list(&folders, None).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_missing_is_ok_and_empty_collections_vanish() {
        let store = MemoryDocumentStore::new();
        let path = DocumentPath::folder(&uid(), &folder("f1"));
        store.delete(&path).await.unwrap();

        store.set(&path, json!({})).await.unwrap();
        assert_eq!(store.document_count(), 1);
        store.delete(&path).await.unwrap();
        assert_eq!(store.document_count(), 0);
        assert!(store.documents().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_latency_is_applied() {
        let store = MemoryDocumentStore::new().with_latency(Duration::from_millis(50));
        let path = DocumentPath::folder(&uid(), &folder("f1"));
        let start = tokio::time::Instant::now();
        store.set(&path, json!({})).await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(50));
    }
}
