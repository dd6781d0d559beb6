//! Folder CRUD operations scoped to the signed-in user.

use std::sync::Arc;

use tracing::info;

use notnotion_core::error::{AppError, ErrorKind};
use notnotion_core::traits::auth::AuthProvider;
use notnotion_core::traits::store::{Document, DocumentStore};
use notnotion_core::types::{CollectionPath, DocumentPath, FieldFilter, FolderId, UserId};
use notnotion_entity::folder::model::PARENT_FIELD;
use notnotion_entity::folder::{Folder, ParentRef};

use super::delete::{DeleteReport, SubtreeDeleter};
use crate::context::RequestContext;

/// Manages folder CRUD operations.
#[derive(Debug, Clone)]
pub struct FolderService {
    /// Document store.
    store: Arc<dyn DocumentStore>,
    /// Source of the signed-in user.
    auth: Arc<dyn AuthProvider>,
    /// Recursive deletion.
    deleter: SubtreeDeleter,
}

impl FolderService {
    /// Creates a new folder service.
    pub fn new(store: Arc<dyn DocumentStore>, auth: Arc<dyn AuthProvider>) -> Self {
        let deleter = SubtreeDeleter::new(store.clone(), auth.clone());
        Self {
            store,
            auth,
            deleter,
        }
    }

    /// Gets a folder by ID.
    pub async fn get_folder(&self, folder_id: &FolderId) -> Result<Folder, AppError> {
        let ctx = RequestContext::resolve(self.auth.as_ref())?;
        self.find(ctx.user_id(), folder_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Folder {folder_id} not found")))
    }

    /// Lists every folder of the user.
    pub async fn list_all(&self) -> Result<Vec<Folder>, AppError> {
        let ctx = RequestContext::resolve(self.auth.as_ref())?;
        let docs = self
            .store
            .list(&CollectionPath::Folders(ctx.user_id().clone()), None)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::RemoteOperation, "Failed to list folders", e))?;
        decode_all(&docs)
    }

    /// Lists direct children of a folder; `None` lists root folders.
    ///
    /// Root folders are matched on the decoded parent, so records written
    /// with an empty parent string count as root too.
    pub async fn list_children(&self, parent: Option<&FolderId>) -> Result<Vec<Folder>, AppError> {
        let ctx = RequestContext::resolve(self.auth.as_ref())?;
        let collection = CollectionPath::Folders(ctx.user_id().clone());

        match parent {
            Some(parent_id) => {
                let filter = FieldFilter::eq(PARENT_FIELD, parent_id.as_str());
                let docs = self
                    .store
                    .list(&collection, Some(&filter))
                    .await
                    .map_err(|e| {
                        AppError::with_source(ErrorKind::RemoteOperation, "Failed to list subfolders", e)
                    })?;
                decode_all(&docs)
            }
            None => {
                let docs = self.store.list(&collection, None).await.map_err(|e| {
                    AppError::with_source(ErrorKind::RemoteOperation, "Failed to list root folders", e)
                })?;
                Ok(decode_all(&docs)?
                    .into_iter()
                    .filter(Folder::is_root)
                    .collect())
            }
        }
    }

    /// Lists root folders.
    pub async fn list_roots(&self) -> Result<Vec<Folder>, AppError> {
        self.list_children(None).await
    }

    /// Counts direct children of a folder.
    pub async fn count_children(&self, folder_id: &FolderId) -> Result<usize, AppError> {
        Ok(self.list_children(Some(folder_id)).await?.len())
    }

    /// Creates a new folder.
    pub async fn create_folder(
        &self,
        name: &str,
        parent: ParentRef,
        folder_type: i32,
    ) -> Result<Folder, AppError> {
        let ctx = RequestContext::resolve(self.auth.as_ref())?;
        let uid = ctx.user_id();

        if name.trim().is_empty() {
            return Err(AppError::validation("Folder name cannot be empty"));
        }

        if let ParentRef::Folder(parent_id) = &parent {
            if self.find(uid, parent_id).await?.is_none() {
                return Err(AppError::not_found(format!(
                    "Parent folder {parent_id} not found"
                )));
            }
        }

        let folder = Folder::new(name.trim(), parent, folder_type);
        self.write(uid, &folder).await?;

        info!(
            user_id = %uid,
            folder_id = %folder.id,
            parent = %folder.parent,
            "Folder created"
        );

        Ok(folder)
    }

    /// Saves changes to a folder, touching its modification time.
    ///
    /// A new parent must exist and must not be the folder itself or one of
    /// its descendants.
    pub async fn update_folder(&self, mut folder: Folder) -> Result<Folder, AppError> {
        let ctx = RequestContext::resolve(self.auth.as_ref())?;
        let uid = ctx.user_id();

        if folder.name.trim().is_empty() {
            return Err(AppError::validation("Folder name cannot be empty"));
        }

        let current = self
            .find(uid, &folder.id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Folder {} not found", folder.id)))?;

        if current.parent != folder.parent {
            if let ParentRef::Folder(new_parent) = &folder.parent {
                self.ensure_not_descendant(uid, &folder.id, new_parent).await?;
            }
        }

        folder.touch();
        self.write(uid, &folder).await?;

        info!(user_id = %uid, folder_id = %folder.id, "Folder updated");
        Ok(folder)
    }

    /// Deletes a single empty folder.
    ///
    /// Fails with a conflict error when the folder still owns subfolders or
    /// notes; use [`Self::delete_recursive`] for those.
    pub async fn delete_folder(&self, folder_id: &FolderId) -> Result<(), AppError> {
        let ctx = RequestContext::resolve(self.auth.as_ref())?;
        let uid = ctx.user_id();

        if self.find(uid, folder_id).await?.is_none() {
            return Err(AppError::not_found(format!("Folder {folder_id} not found")));
        }

        let children = self.count_children(folder_id).await?;
        let notes = self
            .store
            .list(&CollectionPath::Notes(uid.clone(), folder_id.clone()), None)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::RemoteOperation, "Failed to list notes", e))?
            .len();
        if children > 0 || notes > 0 {
            return Err(AppError::conflict(format!(
                "Folder {folder_id} is not empty ({children} subfolders, {notes} notes)"
            )));
        }

        self.store
            .delete(&DocumentPath::folder(uid, folder_id))
            .await
            .map_err(|e| AppError::with_source(ErrorKind::RemoteOperation, "Failed to delete folder", e))?;

        info!(user_id = %uid, folder_id = %folder_id, "Folder deleted");
        Ok(())
    }

    /// Deletes a folder together with all of its subfolders and notes.
    pub async fn delete_recursive(&self, folder_id: &FolderId) -> Result<DeleteReport, AppError> {
        self.deleter.delete_subtree(folder_id).await
    }

    /// The subtree deleter used by [`Self::delete_recursive`].
    pub fn deleter(&self) -> &SubtreeDeleter {
        &self.deleter
    }

    async fn find(&self, uid: &UserId, folder_id: &FolderId) -> Result<Option<Folder>, AppError> {
        self.store
            .get(&DocumentPath::folder(uid, folder_id))
            .await
            .map_err(|e| AppError::with_source(ErrorKind::RemoteOperation, "Failed to read folder", e))?
            .map(|doc| doc.decode())
            .transpose()
    }

    async fn write(&self, uid: &UserId, folder: &Folder) -> Result<(), AppError> {
        let data = serde_json::to_value(folder)?;
        self.store
            .set(&DocumentPath::folder(uid, &folder.id), data)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::RemoteOperation, "Failed to save folder", e))
    }

    /// Walks up from `new_parent` to the root, rejecting the move if
    /// `folder_id` is on the way.
    async fn ensure_not_descendant(
        &self,
        uid: &UserId,
        folder_id: &FolderId,
        new_parent: &FolderId,
    ) -> Result<(), AppError> {
        let mut cursor = Some(new_parent.clone());
        while let Some(current) = cursor {
            if &current == folder_id {
                return Err(AppError::validation(
                    "Cannot move a folder into itself or one of its descendants",
                ));
            }
            let folder = self
                .find(uid, &current)
                .await?
                .ok_or_else(|| AppError::not_found(format!("Parent folder {current} not found")))?;
            cursor = folder.parent.folder_id().cloned();
        }
        Ok(())
    }
}

fn decode_all(docs: &[Document]) -> Result<Vec<Folder>, AppError> {
    docs.iter().map(Document::decode::<Folder>).collect()
}
