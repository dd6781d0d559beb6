//! Test doubles shared by the service unit tests.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;

use notnotion_auth::SessionManager;
use notnotion_core::error::AppError;
use notnotion_core::result::AppResult;
use notnotion_core::traits::auth::AuthUser;
use notnotion_core::traits::store::{Document, DocumentStore};
use notnotion_core::types::{CollectionPath, DocumentPath, FieldFilter, UserId};
use notnotion_store::MemoryDocumentStore;

/// A store call, as observed by [`RecordingStore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    List(String),
    Get(String),
    Set(String),
    Delete(String),
}

/// Memory store wrapper that records every call and fails on demand.
#[derive(Debug, Default)]
pub struct RecordingStore {
    pub inner: MemoryDocumentStore,
    ops: Mutex<Vec<Op>>,
    failing_deletes: Mutex<HashSet<String>>,
}

impl RecordingStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Makes `delete` fail for the given rendered path.
    pub fn fail_delete(&self, path: &DocumentPath) {
        self.failing_deletes.lock().unwrap().insert(path.to_string());
    }

    pub fn ops(&self) -> Vec<Op> {
        self.ops.lock().unwrap().clone()
    }

    pub fn deletes(&self) -> Vec<String> {
        self.ops()
            .into_iter()
            .filter_map(|op| match op {
                Op::Delete(path) => Some(path),
                _ => None,
            })
            .collect()
    }

    pub fn clear_ops(&self) {
        self.ops.lock().unwrap().clear();
    }

    fn record(&self, op: Op) {
        self.ops.lock().unwrap().push(op);
    }
}

#[async_trait]
impl DocumentStore for RecordingStore {
    async fn list(
        &self,
        collection: &CollectionPath,
        filter: Option<&FieldFilter>,
    ) -> AppResult<Vec<Document>> {
        self.record(Op::List(collection.to_string()));
        self.inner.list(collection, filter).await
    }

    async fn get(&self, path: &DocumentPath) -> AppResult<Option<Document>> {
        self.record(Op::Get(path.to_string()));
        self.inner.get(path).await
    }

    async fn set(&self, path: &DocumentPath, data: Value) -> AppResult<()> {
        self.record(Op::Set(path.to_string()));
        self.inner.set(path, data).await
    }

    async fn delete(&self, path: &DocumentPath) -> AppResult<()> {
        self.record(Op::Delete(path.to_string()));
        if self.failing_deletes.lock().unwrap().contains(&path.to_string()) {
            return Err(AppError::remote(format!("Injected failure deleting {path}")));
        }
        self.inner.delete(path).await
    }
}

pub fn signed_in(uid: &str) -> Arc<SessionManager> {
    let session = SessionManager::new();
    session.sign_in(AuthUser {
        uid: UserId::parse(uid).unwrap(),
        display_name: None,
        photo_url: None,
    });
    Arc::new(session)
}

pub fn signed_out() -> Arc<SessionManager> {
    Arc::new(SessionManager::new())
}
