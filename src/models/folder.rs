// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Folder domain model and the virtual "unfiled" grouping (UI-agnostic).

use std::borrow::Cow;
use std::collections::HashSet;

use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};

/// Identifier reserved for the unfiled sentinel.
pub const UNFILED_FOLDER_ID: &str = "unfiled";

/// Label shown for notes that belong to no folder.
pub const UNFILED_FOLDER_NAME: &str = "Unfiled";

/// Placeholder entry listed alongside real folders for notes without a folder.
///
/// It is virtual and must never be written to storage.
pub static UNFILED_FOLDER: Folder = Folder {
    id: Cow::Borrowed(UNFILED_FOLDER_ID),
    name: Cow::Borrowed(UNFILED_FOLDER_NAME),
    is_virtual: true,
};

/// A folder grouping notes, as exchanged with the backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Folder {
    pub id: Cow<'static, str>,
    pub name: Cow<'static, str>,
    /// Set only for UI-side placeholders such as [`UNFILED_FOLDER`].
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_virtual: bool,
}

impl Folder {
    /// Build a real folder backed by storage.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: Cow::Owned(id.into()),
            name: Cow::Owned(name.into()),
            is_virtual: false,
        }
    }

    /// Whether this entry stands for "no folder".
    pub fn is_unfiled(&self) -> bool {
        self.id == UNFILED_FOLDER_ID
    }

    /// Refuse to persist virtual folders or anything claiming the reserved id.
    pub fn ensure_persistable(&self) -> Result<()> {
        if self.is_virtual {
            bail!("Folder '{}' is virtual and cannot be stored", self.name);
        }
        if self.is_unfiled() {
            bail!("Folder id '{UNFILED_FOLDER_ID}' is reserved");
        }
        Ok(())
    }
}

/// Build a folder listing headed by the unfiled sentinel.
///
/// Entries reusing the sentinel id or repeating an earlier id are dropped so
/// the sentinel appears exactly once.
pub fn with_unfiled(folders: Vec<Folder>) -> Vec<Folder> {
    let mut seen = HashSet::new();
    seen.insert(UNFILED_FOLDER_ID.to_string());

    let mut listing = Vec::with_capacity(folders.len() + 1);
    listing.push(UNFILED_FOLDER.clone());
    for folder in folders {
        if seen.insert(folder.id.to_string()) {
            listing.push(folder);
        } else {
            tracing::debug!(id = %folder.id, "dropping duplicate folder entry");
        }
    }
    listing
}

/// Iterate over the folders that may be written to storage.
pub fn persistable(folders: &[Folder]) -> impl Iterator<Item = &Folder> {
    folders.iter().filter(|f| f.ensure_persistable().is_ok())
}

#[cfg(test)]
mod tests {
    use super::{Folder, UNFILED_FOLDER, UNFILED_FOLDER_ID, persistable, with_unfiled};

    #[test]
    fn unfiled_sentinel_is_virtual_and_not_persistable() {
        assert!(UNFILED_FOLDER.is_virtual);
        assert!(UNFILED_FOLDER.is_unfiled());
        assert_eq!(UNFILED_FOLDER.id, UNFILED_FOLDER_ID);
        assert!(UNFILED_FOLDER.ensure_persistable().is_err());
    }

    // A real folder must not sneak in under the reserved id.
    #[test]
    fn ensure_persistable_rejects_reserved_id() {
        let impostor = Folder::new(UNFILED_FOLDER_ID, "Mine");
        assert!(!impostor.is_virtual);
        assert!(impostor.ensure_persistable().is_err());
        assert!(Folder::new("f1", "Work").ensure_persistable().is_ok());
    }

    #[test]
    fn with_unfiled_puts_sentinel_first_once() {
        let listing = with_unfiled(vec![
            Folder::new("a", "Alpha"),
            UNFILED_FOLDER.clone(),
            Folder::new("b", "Beta"),
            Folder::new("a", "Alpha again"),
        ]);

        let ids: Vec<&str> = listing.iter().map(|f| &*f.id).collect();
        assert_eq!(ids, vec!["unfiled", "a", "b"]);
        assert_eq!(listing[0], UNFILED_FOLDER);
        assert_eq!(listing[1].name, "Alpha");
    }

    #[test]
    fn persistable_skips_virtual_entries() {
        let listing = with_unfiled(vec![Folder::new("a", "Alpha")]);
        let stored: Vec<&str> = persistable(&listing).map(|f| &*f.id).collect();
        assert_eq!(stored, vec!["a"]);
    }

    #[test]
    fn folder_json_uses_camel_case_and_omits_false_flag() {
        let json = serde_json::to_value(&UNFILED_FOLDER).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": "unfiled", "name": "Unfiled", "isVirtual": true})
        );

        let real = serde_json::to_value(Folder::new("f1", "Work")).unwrap();
        assert_eq!(real, serde_json::json!({"id": "f1", "name": "Work"}));

        let parsed: Folder = serde_json::from_str(r#"{"id":"f2","name":"Home"}"#).unwrap();
        assert_eq!(parsed, Folder::new("f2", "Home"));
    }
}
