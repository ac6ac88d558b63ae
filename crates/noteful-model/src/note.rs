// SPDX-License-Identifier: Apache-2.0

use crate::FolderId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type NoteId = i64;

/// A text record, optionally filed under a folder.
///
/// `date_modified` is assigned by the store on insert; patches leave it as is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    pub name: String,
    pub content: Option<String>,
    pub folder_id: Option<FolderId>,
    pub date_modified: DateTime<Utc>,
}

/// Insert payload. Only `name` is required.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NewNote {
    pub name: String,
    pub content: Option<String>,
    pub folder_id: Option<FolderId>,
}

/// Partial update. `None` means "leave the column unchanged"; for the nullable
/// columns `Some(None)` clears the stored value.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NotePatch {
    pub name: Option<String>,
    pub content: Option<Option<String>>,
    pub folder_id: Option<Option<FolderId>>,
}

impl NotePatch {
    /// True when no field carries a value. Clears alone do not count.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && !matches!(self.content, Some(Some(_)))
            && !matches!(self.folder_id, Some(Some(_)))
    }
}
