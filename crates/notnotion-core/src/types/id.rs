//! Newtype wrappers for document identifiers.
//!
//! Identifiers are opaque strings chosen by the document store (freshly
//! created records use a UUIDv4). Each id is validated at construction so
//! it can be embedded in a [`DocumentPath`](super::path::DocumentPath)
//! without ever producing an extra path segment.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppError;

/// Wire value of a parent reference that points at the root level.
///
/// Reserved: no [`FolderId`] may take this value.
pub const ROOT_SENTINEL: &str = "None";

/// Checks that `raw` is usable as a single path segment.
fn validate_segment(kind: &str, raw: &str, reserved: &[&str]) -> Result<(), AppError> {
    if raw.trim().is_empty() {
        return Err(AppError::validation(format!("{kind} cannot be empty")));
    }
    if raw.contains('/') {
        return Err(AppError::validation(format!(
            "{kind} '{raw}' must not contain '/'"
        )));
    }
    if reserved.contains(&raw) {
        return Err(AppError::validation(format!("{kind} '{raw}' is reserved")));
    }
    Ok(())
}

/// Macro to define a validated string-backed ID newtype.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        define_id!($(#[$meta])* $name, reserved = []);
    };
    (
        $(#[$meta:meta])*
        $name:ident, reserved = [$($reserved:expr),*]
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Create a new random identifier.
            pub fn generate() -> Self {
                Self(Uuid::new_v4().to_string())
            }

            /// Create an identifier from an existing string, validating it.
            pub fn parse(raw: impl Into<String>) -> Result<Self, AppError> {
                let raw = raw.into();
                validate_segment(stringify!($name), &raw, &[$($reserved),*])?;
                Ok(Self(raw))
            }

            /// Return the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl FromStr for $name {
            type Err = AppError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl TryFrom<String> for $name {
            type Error = AppError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::parse(value)
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> String {
                id.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(
    /// Unique identifier for an authenticated user.
    UserId
);

define_id!(
    /// Unique identifier for a folder within a user's folder space.
    FolderId, reserved = [ROOT_SENTINEL]
);

define_id!(
    /// Unique identifier for a note within its folder.
    NoteId
);

define_id!(
    /// Unique identifier for a calendar event.
    EventId
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_generate_is_unique() {
        let a = FolderId::generate();
        let b = FolderId::generate();
        assert_ne!(a, b);
        assert!(Uuid::parse_str(a.as_str()).is_ok());
    }

    #[test]
    fn test_parse_rejects_separator_and_blank() {
        assert!(NoteId::parse("a/b").is_err());
        assert!(NoteId::parse("   ").is_err());
        assert!(NoteId::parse("").is_err());
        assert_eq!(NoteId::parse("n1").unwrap().as_str(), "n1");
    }

    #[test]
    fn test_folder_id_rejects_root_sentinel() {
        let err = FolderId::parse(ROOT_SENTINEL).unwrap_err();
        assert!(err.is(ErrorKind::Validation));
        assert!(serde_json::from_str::<FolderId>("\"None\"").is_err());
        assert!(FolderId::parse("none").is_ok());
        assert!(NoteId::parse(ROOT_SENTINEL).is_ok());
    }

    #[test]
    fn test_serde_is_transparent_and_validated() {
        let id = UserId::parse("uid-1").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"uid-1\"");
        let parsed: UserId = serde_json::from_str("\"uid-1\"").unwrap();
        assert_eq!(parsed, id);
        assert!(serde_json::from_str::<UserId>("\"bad/id\"").is_err());
    }
}
