//! Note CRUD operations against each folder's notes collection.

use std::sync::Arc;

use futures::future::try_join_all;
use tracing::info;

use notnotion_core::error::{AppError, ErrorKind};
use notnotion_core::traits::auth::AuthProvider;
use notnotion_core::traits::store::{Document, DocumentStore};
use notnotion_core::types::{CollectionPath, DocumentPath, FieldFilter, FolderId, NoteId, UserId};
use notnotion_entity::note::Note;
use notnotion_entity::note::model::FAVORITE_FIELD;

use crate::context::RequestContext;

/// Manages notes.
#[derive(Debug, Clone)]
pub struct NoteService {
    /// Document store.
    store: Arc<dyn DocumentStore>,
    /// Source of the signed-in user.
    auth: Arc<dyn AuthProvider>,
}

impl NoteService {
    /// Creates a new note service.
    pub fn new(store: Arc<dyn DocumentStore>, auth: Arc<dyn AuthProvider>) -> Self {
        Self { store, auth }
    }

    /// Adds a note to an existing folder.
    pub async fn add_note(
        &self,
        title: &str,
        content: &str,
        folder_id: &FolderId,
        is_favorite: bool,
    ) -> Result<Note, AppError> {
        let ctx = RequestContext::resolve(self.auth.as_ref())?;
        let uid = ctx.user_id();

        let folder = self
            .store
            .get(&DocumentPath::folder(uid, folder_id))
            .await
            .map_err(|e| AppError::with_source(ErrorKind::RemoteOperation, "Failed to read folder", e))?;
        if folder.is_none() {
            return Err(AppError::not_found(format!("Folder {folder_id} not found")));
        }

        let note = Note::new(title, content, folder_id.clone(), is_favorite);
        self.write(uid, &note).await?;

        info!(
            user_id = %uid,
            folder_id = %folder_id,
            note_id = %note.id,
            "Note created"
        );

        Ok(note)
    }

    /// Saves changes to an existing note, touching its modification time.
    pub async fn update_note(&self, mut note: Note) -> Result<Note, AppError> {
        let ctx = RequestContext::resolve(self.auth.as_ref())?;
        let uid = ctx.user_id();

        self.find(uid, &note.folder_id, &note.id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Note {} not found", note.id)))?;

        note.touch();
        self.write(uid, &note).await?;

        info!(user_id = %uid, note_id = %note.id, "Note updated");
        Ok(note)
    }

    /// Deletes one note.
    pub async fn delete_note(&self, folder_id: &FolderId, note_id: &NoteId) -> Result<(), AppError> {
        let ctx = RequestContext::resolve(self.auth.as_ref())?;
        let uid = ctx.user_id();

        if self.find(uid, folder_id, note_id).await?.is_none() {
            return Err(AppError::not_found(format!("Note {note_id} not found")));
        }

        self.store
            .delete(&DocumentPath::note(uid, folder_id, note_id))
            .await
            .map_err(|e| AppError::with_source(ErrorKind::RemoteOperation, "Failed to delete note", e))?;

        info!(user_id = %uid, note_id = %note_id, "Note deleted");
        Ok(())
    }

    /// Gets one note.
    pub async fn get_note(&self, folder_id: &FolderId, note_id: &NoteId) -> Result<Note, AppError> {
        let ctx = RequestContext::resolve(self.auth.as_ref())?;
        self.find(ctx.user_id(), folder_id, note_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Note {note_id} not found")))
    }

    /// Lists the notes of a folder.
    pub async fn list_by_folder(&self, folder_id: &FolderId) -> Result<Vec<Note>, AppError> {
        let ctx = RequestContext::resolve(self.auth.as_ref())?;
        self.list_in(ctx.user_id(), folder_id, None).await
    }

    /// Lists the favorite notes of a folder.
    pub async fn list_favorites(&self, folder_id: &FolderId) -> Result<Vec<Note>, AppError> {
        let ctx = RequestContext::resolve(self.auth.as_ref())?;
        let filter = FieldFilter::eq_bool(FAVORITE_FIELD, true);
        self.list_in(ctx.user_id(), folder_id, Some(&filter)).await
    }

    /// Lists every note of the user, folder by folder.
    pub async fn list_all(&self) -> Result<Vec<Note>, AppError> {
        let ctx = RequestContext::resolve(self.auth.as_ref())?;
        let uid = ctx.user_id();

        let folders = self
            .store
            .list(&CollectionPath::Folders(uid.clone()), None)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::RemoteOperation, "Failed to list folders", e))?;
        let folder_ids = folders
            .iter()
            .map(|doc| FolderId::parse(doc.id()))
            .collect::<Result<Vec<_>, _>>()?;

        let per_folder = try_join_all(
            folder_ids
                .iter()
                .map(|folder_id| self.list_in(uid, folder_id, None)),
        )
        .await?;

        Ok(per_folder.into_iter().flatten().collect())
    }

    async fn list_in(
        &self,
        uid: &UserId,
        folder_id: &FolderId,
        filter: Option<&FieldFilter>,
    ) -> Result<Vec<Note>, AppError> {
        let collection = CollectionPath::Notes(uid.clone(), folder_id.clone());
        let docs = self
            .store
            .list(&collection, filter)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::RemoteOperation, "Failed to list notes", e))?;
        docs.iter().map(Document::decode::<Note>).collect()
    }

    async fn find(
        &self,
        uid: &UserId,
        folder_id: &FolderId,
        note_id: &NoteId,
    ) -> Result<Option<Note>, AppError> {
        self.store
            .get(&DocumentPath::note(uid, folder_id, note_id))
            .await
            .map_err(|e| AppError::with_source(ErrorKind::RemoteOperation, "Failed to read note", e))?
            .map(|doc| doc.decode())
            .transpose()
    }

    async fn write(&self, uid: &UserId, note: &Note) -> Result<(), AppError> {
        let data = serde_json::to_value(note)?;
        self.store
            .set(&DocumentPath::note(uid, &note.folder_id, &note.id), data)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::RemoteOperation, "Failed to save note", e))
    }
}
