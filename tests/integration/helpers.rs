//! Shared test helpers for integration tests.

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
use notnotion_entity::folder::{Folder, ParentRef};
use notnotion_entity::note::Note;
use notnotion_service::{FolderService, NoteService};
use notnotion_store::MemoryDocumentStore;

pub const USER: &str = "alice";

/// Test application context
pub struct TestApp {
    pub store: MemoryDocumentStore,
    pub session: SessionManager,
    pub folders: FolderService,
    pub notes: NoteService,
}

impl TestApp {
    /// Create a test application signed in as [`USER`]
    pub fn new() -> Self {
        Self::with_store(MemoryDocumentStore::new())
    }

    pub fn with_store(store: MemoryDocumentStore) -> Self {
        Self::with_backend(store.clone(), Arc::new(store))
    }

    /// Services talk to `backend`; `store` is the memory store behind it.
    pub fn with_backend(store: MemoryDocumentStore, backend: Arc<dyn DocumentStore>) -> Self {
        let session = SessionManager::new();
        session.sign_in(AuthUser {
            uid: uid(),
            display_name: Some("Alice".to_string()),
            photo_url: None,
        });
        let auth = Arc::new(session.clone());

        Self {
            folders: FolderService::new(backend.clone(), auth.clone()),
            notes: NoteService::new(backend, auth),
            store,
            session,
        }
    }

    pub async fn folder(&self, name: &str, parent: Option<&Folder>) -> Folder {
        let parent = ParentRef::from_option(parent.map(|p| p.id.clone()));
        self.folders
            .create_folder(name, parent, 0)
            .await
            .expect("Failed to create folder")
    }

    pub async fn note(&self, folder: &Folder, title: &str) -> Note {
        self.notes
            .add_note(title, "", &folder.id, false)
            .await
            .expect("Failed to create note")
    }

    /// Builds `A { B (2 notes), C { D (1 note) } }`.
    pub async fn seed_tree(&self) -> Tree {
        let a = self.folder("A", None).await;
        let b = self.folder("B", Some(&a)).await;
        let c = self.folder("C", Some(&a)).await;
        let d = self.folder("D", Some(&c)).await;
        self.note(&b, "b1").await;
        self.note(&b, "b2").await;
        self.note(&d, "d1").await;
        Tree { a, b, c, d }
    }
}

pub struct Tree {
    pub a: Folder,
    pub b: Folder,
    pub c: Folder,
    pub d: Folder,
}

pub fn uid() -> UserId {
    UserId::parse(USER).expect("valid user id")
}

/// Store wrapper whose deletes fail for chosen paths.
#[derive(Debug)]
pub struct FlakyStore {
    inner: MemoryDocumentStore,
    failing: Mutex<HashSet<String>>,
}

impl FlakyStore {
    pub fn new(inner: MemoryDocumentStore) -> Arc<Self> {
        Arc::new(Self {
            inner,
            failing: Mutex::new(HashSet::new()),
        })
    }

    pub fn fail_delete(&self, path: &DocumentPath) {
        self.failing.lock().unwrap().insert(path.to_string());
    }
}

#[async_trait]
impl DocumentStore for FlakyStore {
    async fn list(
        &self,
        collection: &CollectionPath,
        filter: Option<&FieldFilter>,
    ) -> AppResult<Vec<Document>> {
        self.inner.list(collection, filter).await
    }

    async fn get(&self, path: &DocumentPath) -> AppResult<Option<Document>> {
        self.inner.get(path).await
    }

    async fn set(&self, path: &DocumentPath, data: Value) -> AppResult<()> {
        self.inner.set(path, data).await
    }

    async fn delete(&self, path: &DocumentPath) -> AppResult<()> {
        if self.failing.lock().unwrap().contains(&path.to_string()) {
            return Err(AppError::remote(format!("unavailable: {path}")));
        }
        self.inner.delete(path).await
    }
}
