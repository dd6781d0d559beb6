//! Document store trait for the hosted database collaborator.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::result::AppResult;
use crate::types::filter::FieldFilter;
use crate::types::path::{CollectionPath, DocumentPath};

/// A document as returned by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Full path of the document.
    pub path: DocumentPath,
    /// The stored record.
    pub data: Value,
}

impl Document {
    /// The document id within its collection.
    pub fn id(&self) -> &str {
        self.path.id()
    }

    /// Deserialize the record into a typed model.
    pub fn decode<T: DeserializeOwned>(&self) -> AppResult<T> {
        Ok(serde_json::from_value(self.data.clone())?)
    }
}

/// Trait for hierarchical document stores.
///
/// Every call is asynchronous and may fail with a
/// [`RemoteOperation`](crate::error::ErrorKind::RemoteOperation) error.
/// Listing returns documents ordered by id.
#[async_trait]
pub trait DocumentStore: Send + Sync + std::fmt::Debug + 'static {
    /// List the documents of a collection, optionally restricted to those
    /// whose field equals the filter value.
    async fn list(
        &self,
        collection: &CollectionPath,
        filter: Option<&FieldFilter>,
    ) -> AppResult<Vec<Document>>;

    /// Fetch a single document.
    async fn get(&self, path: &DocumentPath) -> AppResult<Option<Document>>;

    /// Create or overwrite a document.
    async fn set(&self, path: &DocumentPath, data: Value) -> AppResult<()>;

    /// Delete a document. Deleting a missing document succeeds.
    async fn delete(&self, path: &DocumentPath) -> AppResult<()>;
}
