//! Shared dependencies for command execution.

use std::sync::Arc;

use notnotion_auth::SessionManager;
use notnotion_core::config::AppConfig;
use notnotion_core::traits::auth::AuthProvider;
use notnotion_core::traits::store::DocumentStore;
use notnotion_service::{EventService, FolderService, NoteService, ProfileService};
use notnotion_store::MemoryDocumentStore;

/// Everything a command needs. Cloning shares the underlying store and session.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Document store
    pub store: MemoryDocumentStore,
    /// Signed-in user
    pub session: SessionManager,

    pub folders: Arc<FolderService>,
    pub notes: Arc<NoteService>,
    pub events: Arc<EventService>,
    pub profiles: Arc<ProfileService>,
}

impl AppState {
    /// Wires the services to a store and a session.
    pub fn new(config: AppConfig, store: MemoryDocumentStore, session: SessionManager) -> Self {
        let documents: Arc<dyn DocumentStore> = Arc::new(store.clone());
        let auth: Arc<dyn AuthProvider> = Arc::new(session.clone());

        Self {
            config: Arc::new(config),
            folders: Arc::new(FolderService::new(documents.clone(), auth.clone())),
            notes: Arc::new(NoteService::new(documents.clone(), auth.clone())),
            events: Arc::new(EventService::new(documents.clone(), auth.clone())),
            profiles: Arc::new(ProfileService::new(documents, auth)),
            store,
            session,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use notnotion_core::traits::auth::AuthUser;
    use notnotion_core::types::UserId;
    use notnotion_entity::folder::ParentRef;

    #[tokio::test]
    async fn test_services_share_store_and_session() {
        let state = AppState::new(
            AppConfig::default(),
            MemoryDocumentStore::new(),
            SessionManager::new(),
        );
        state.session.sign_in(AuthUser {
            uid: UserId::parse("u1").unwrap(),
            display_name: None,
            photo_url: None,
        });

        let folder = state
            .folders
            .create_folder("Inbox", ParentRef::Root, 0)
            .await
            .unwrap();
        state.notes.add_note("n", "", &folder.id, false).await.unwrap();

        assert_eq!(state.store.document_count(), 2);
    }
}
