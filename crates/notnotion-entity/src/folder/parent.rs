//! Parent references for folders.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use notnotion_core::types::FolderId;

/// Wire value stored in `parentFolderId` for top-level folders.
pub use notnotion_core::types::ROOT_SENTINEL;

/// Where a folder hangs in the tree.
///
/// On the wire the root is written as [`ROOT_SENTINEL`]. When reading,
/// the sentinel, a blank string, `null` and a missing field all mean
/// [`ParentRef::Root`]. Any other value is taken verbatim, so a decoded
/// parent always equals the string a `parentFolderId` filter matches on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum ParentRef {
    /// Top-level folder.
    #[default]
    Root,
    /// Child of the given folder.
    Folder(FolderId),
}

impl ParentRef {
    /// Builds a parent reference from an optional folder id.
    pub fn from_option(parent: Option<FolderId>) -> Self {
        parent.map_or(Self::Root, Self::Folder)
    }

    /// Check if this is the root reference.
    pub fn is_root(&self) -> bool {
        matches!(self, Self::Root)
    }

    /// The parent folder id, if any.
    pub fn folder_id(&self) -> Option<&FolderId> {
        match self {
            Self::Root => None,
            Self::Folder(id) => Some(id),
        }
    }

    /// The value stored in the `parentFolderId` field.
    pub fn wire_value(&self) -> &str {
        match self {
            Self::Root => ROOT_SENTINEL,
            Self::Folder(id) => id.as_str(),
        }
    }
}

impl fmt::Display for ParentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Root => f.write_str("(root)"),
            Self::Folder(id) => write!(f, "{id}"),
        }
    }
}

impl Serialize for ParentRef {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.wire_value())
    }
}

impl<'de> Deserialize<'de> for ParentRef {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        match raw.as_deref() {
            None | Some(ROOT_SENTINEL) => Ok(Self::Root),
            Some(id) if id.trim().is_empty() => Ok(Self::Root),
            Some(id) => FolderId::parse(id)
                .map(Self::Folder)
                .map_err(serde::de::Error::custom),
        }
    }
}
