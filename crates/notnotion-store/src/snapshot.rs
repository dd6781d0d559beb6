//! JSON snapshots of the memory store.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use notnotion_core::result::AppResult;
use notnotion_core::traits::store::Document;

use crate::memory::MemoryDocumentStore;

/// On-disk snapshot format.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Snapshot {
    /// Every stored document.
    pub documents: Vec<Document>,
}

/// Load a snapshot into `store`. A missing file leaves the store unchanged.
pub async fn load(store: &MemoryDocumentStore, path: impl AsRef<Path>) -> AppResult<usize> {
    let path = path.as_ref();
    if !tokio::fs::try_exists(path).await? {
        return Ok(0);
    }

    let raw = tokio::fs::read(path).await?;
    let snapshot: Snapshot = serde_json::from_slice(&raw)?;
    let count = snapshot.documents.len();
    store.insert_documents(snapshot.documents);

    info!(path = %path.display(), documents = count, "Snapshot loaded");
    Ok(count)
}

/// Write every document of `store` to `path`, creating parent directories.
///
/// The snapshot is written next to `path` first and then renamed over it,
/// so an interrupted save leaves the previous snapshot intact.
pub async fn save(store: &MemoryDocumentStore, path: impl AsRef<Path>) -> AppResult<usize> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }

    let snapshot = Snapshot {
        documents: store.documents(),
    };
    let count = snapshot.documents.len();
    let staging = staging_path(path);
    tokio::fs::write(&staging, serde_json::to_vec_pretty(&snapshot)?).await?;
    tokio::fs::rename(&staging, path).await?;

    info!(path = %path.display(), documents = count, "Snapshot saved");
    Ok(count)
}

fn staging_path(path: &Path) -> PathBuf {
    let mut staging = path.as_os_str().to_owned();
    staging.push(".tmp");
    PathBuf::from(staging)
}
