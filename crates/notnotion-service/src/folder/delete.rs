//! Recursive folder deletion.
//!
//! [`SubtreeDeleter::delete_subtree`] removes a folder, every descendant
//! folder, and every note owned by any of them. The returned future
//! resolves exactly once, after the whole subtree is gone.
//!
//! ## Order of operations for one folder
//!
//! 1. list the folder's notes and delete them concurrently
//! 2. list the direct child folders
//! 3. recurse into every child concurrently and wait for all of them
//! 4. delete the folder's own record
//!
//! A folder record is therefore always deleted after all of its
//! descendants. Sibling subtrees have no ordering relative to each other.
//! Each level joins its own children, so no counter is shared between
//! levels.
//!
//! Every branch carries the chain of folders above it. A child that is
//! already on that chain (a self-parented record or a parent cycle in
//! stored data) is skipped with a warning instead of being revisited.
//!
//! ## Failures
//!
//! A failing store call stops the work of the folder it belongs to, and
//! the error travels up to the caller, which receives `Err` instead of a
//! [`DeleteReport`]. Sibling branches that are already in flight still run
//! to completion. A folder whose subtree reported a failure keeps its own
//! record, so a partial failure never leaves a child pointing at a deleted
//! parent.

use std::sync::Arc;

use futures::FutureExt;
use futures::future::{BoxFuture, join_all};
use serde::Serialize;
use tokio::sync::oneshot;
use tracing::{debug, error, info, warn};

use notnotion_core::error::{AppError, ErrorKind};
use notnotion_core::result::AppResult;
use notnotion_core::traits::auth::AuthProvider;
use notnotion_core::traits::store::DocumentStore;
use notnotion_core::types::{CollectionPath, DocumentPath, FieldFilter, FolderId, UserId};
use notnotion_entity::folder::model::PARENT_FIELD;

use crate::context::RequestContext;

/// Outcome of a successful subtree deletion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DeleteReport {
    /// Number of folder records removed, the subtree root included.
    pub folders_deleted: usize,
    /// Number of note records removed.
    pub notes_deleted: usize,
    /// Removed folders, each listed after all of its descendants.
    pub deleted_folder_ids: Vec<FolderId>,
}

impl DeleteReport {
    fn absorb(&mut self, child: DeleteReport) {
        self.folders_deleted += child.folders_deleted;
        self.notes_deleted += child.notes_deleted;
        self.deleted_folder_ids.extend(child.deleted_folder_ids);
    }
}

/// Deletes folder subtrees.
#[derive(Debug, Clone)]
pub struct SubtreeDeleter {
    /// Document store.
    store: Arc<dyn DocumentStore>,
    /// Source of the signed-in user.
    auth: Arc<dyn AuthProvider>,
}

impl SubtreeDeleter {
    /// Creates a new subtree deleter.
    pub fn new(store: Arc<dyn DocumentStore>, auth: Arc<dyn AuthProvider>) -> Self {
        Self { store, auth }
    }

    /// Deletes `folder_id` and everything below it.
    ///
    /// Fails with an authentication error before touching the store when
    /// nobody is signed in, and with a not-found error when the folder does
    /// not exist (so a second call on the same id is an error, not a no-op).
    pub async fn delete_subtree(&self, folder_id: &FolderId) -> AppResult<DeleteReport> {
        let ctx = RequestContext::resolve(self.auth.as_ref())?;
        let uid = ctx.user_id();

        let root = DocumentPath::folder(uid, folder_id);
        let existing = self
            .store
            .get(&root)
            .await
            .map_err(|e| remote(format!("Failed to read folder {root}"), e))?;
        if existing.is_none() {
            return Err(AppError::not_found(format!("Folder {folder_id} not found")));
        }

        let report = self.delete_node(uid, folder_id.clone(), Vec::new()).await?;

        info!(
            user_id = %uid,
            folder_id = %folder_id,
            folders = report.folders_deleted,
            notes = report.notes_deleted,
            "Folder subtree deleted"
        );

        Ok(report)
    }

    /// Runs [`Self::delete_subtree`] on a spawned task.
    ///
    /// The receiver yields the result once; it is the completion signal for
    /// callers that do not want to await the deletion inline.
    pub fn spawn_delete_subtree(
        &self,
        folder_id: FolderId,
    ) -> oneshot::Receiver<AppResult<DeleteReport>> {
        let (tx, rx) = oneshot::channel();
        let deleter = self.clone();
        tokio::spawn(async move {
            let result = deleter.delete_subtree(&folder_id).await;
            if tx.send(result).is_err() {
                debug!(folder_id = %folder_id, "Delete completion receiver dropped");
            }
        });
        rx
    }

    fn delete_node<'a>(
        &'a self,
        uid: &'a UserId,
        folder_id: FolderId,
        ancestors: Vec<FolderId>,
    ) -> BoxFuture<'a, AppResult<DeleteReport>> {
        async move {
            let mut report = DeleteReport {
                notes_deleted: self.delete_notes(uid, &folder_id).await?,
                ..DeleteReport::default()
            };

            let mut chain = ancestors;
            chain.push(folder_id.clone());

            let mut children = self.child_ids(uid, &folder_id).await?;
            children.retain(|child| {
                let revisit = chain.contains(child);
                if revisit {
                    warn!(
                        folder_id = %folder_id,
                        child_id = %child,
                        "Folder is its own ancestor, skipping"
                    );
                }
                !revisit
            });
            if !children.is_empty() {
                debug!(
                    folder_id = %folder_id,
                    children = children.len(),
                    "Deleting child subtrees"
                );
            }

            let results = join_all(
                children
                    .into_iter()
                    .map(|child| self.delete_node(uid, child, chain.clone())),
            )
            .await;

            let mut first_error = None;
            for result in results {
                match result {
                    Ok(child) => report.absorb(child),
                    Err(e) => {
                        first_error.get_or_insert(e);
                    }
                }
            }
            if let Some(e) = first_error {
                error!(
                    folder_id = %folder_id,
                    error = %e,
                    "Subtree deletion incomplete, keeping folder record"
                );
                return Err(e);
            }

            let path = DocumentPath::folder(uid, &folder_id);
            self.store.delete(&path).await.map_err(|e| {
                error!(path = %path, error = %e, "Failed to delete folder");
                remote(format!("Failed to delete folder {path}"), e)
            })?;

            report.folders_deleted += 1;
            report.deleted_folder_ids.push(folder_id);
            Ok(report)
        }
        .boxed()
    }

    /// Deletes every note directly owned by the folder; returns how many.
    async fn delete_notes(&self, uid: &UserId, folder_id: &FolderId) -> AppResult<usize> {
        let collection = CollectionPath::Notes(uid.clone(), folder_id.clone());
        let notes = self
            .store
            .list(&collection, None)
            .await
            .map_err(|e| remote(format!("Failed to list notes of {collection}"), e))?;

        let results = join_all(notes.iter().map(|doc| async move {
            self.store.delete(&doc.path).await.map_err(|e| {
                error!(path = %doc.path, error = %e, "Failed to delete note");
                remote(format!("Failed to delete note {}", doc.path), e)
            })
        }))
        .await;

        let mut deleted = 0;
        let mut first_error = None;
        for result in results {
            match result {
                Ok(()) => deleted += 1,
                Err(e) => {
                    first_error.get_or_insert(e);
                }
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(deleted),
        }
    }

    /// Lists the ids of the folder's direct children.
    async fn child_ids(&self, uid: &UserId, folder_id: &FolderId) -> AppResult<Vec<FolderId>> {
        let collection = CollectionPath::Folders(uid.clone());
        let filter = FieldFilter::eq(PARENT_FIELD, folder_id.as_str());
        let docs = self
            .store
            .list(&collection, Some(&filter))
            .await
            .map_err(|e| remote(format!("Failed to list subfolders of {folder_id}"), e))?;

        docs.iter().map(|doc| FolderId::parse(doc.id())).collect()
    }
}

fn remote(message: String, source: AppError) -> AppError {
    AppError::with_source(ErrorKind::RemoteOperation, message, source)
}
