//! Folder entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use notnotion_core::types::FolderId;

use super::parent::ParentRef;

/// Name of the field holding a folder's parent reference.
pub const PARENT_FIELD: &str = "parentFolderId";

/// A folder in a user's folder tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Folder {
    /// Unique folder identifier.
    pub id: FolderId,
    /// Display name.
    pub name: String,
    /// Parent folder, or root.
    #[serde(rename = "parentFolderId", default)]
    pub parent: ParentRef,
    /// When the folder was created.
    pub created_at: DateTime<Utc>,
    /// When the folder was last modified.
    pub updated_at: DateTime<Utc>,
    /// Category tag (0 for plain folders).
    #[serde(rename = "type", default)]
    pub folder_type: i32,
}

impl Folder {
    /// Creates a folder with a fresh id and both timestamps set to now.
    pub fn new(name: impl Into<String>, parent: ParentRef, folder_type: i32) -> Self {
        let now = Utc::now();
        Self {
            id: FolderId::generate(),
            name: name.into(),
            parent,
            created_at: now,
            updated_at: now,
            folder_type,
        }
    }

    /// Check if this is a root folder (no parent).
    pub fn is_root(&self) -> bool {
        self.parent.is_root()
    }

    /// Marks the folder as modified now.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
