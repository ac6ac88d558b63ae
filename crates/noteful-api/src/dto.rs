// SPDX-License-Identifier: Apache-2.0

use crate::ApiError;
use noteful_model::{FolderId, NewFolder, NewNote, NotePatch};
use serde::{Deserialize, Deserializer, Serialize};

// Request bodies accept unknown keys; they are dropped on the floor.

/// Keeps an explicit `null` distinct from an absent key: absent stays `None`
/// through `#[serde(default)]`, `null` becomes `Some(None)`.
fn explicit_null<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateFolderRequest {
    #[serde(default)]
    pub name: Option<String>,
}

impl CreateFolderRequest {
    pub fn validate(self) -> Result<NewFolder, ApiError> {
        let name = self.name.ok_or_else(ApiError::missing_folder_name)?;
        Ok(NewFolder { name })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateNoteRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub folder_id: Option<FolderId>,
}

impl CreateNoteRequest {
    pub fn validate(self) -> Result<NewNote, ApiError> {
        let name = self.name.ok_or_else(ApiError::missing_note_name)?;
        Ok(NewNote {
            name,
            content: self.content,
            folder_id: self.folder_id,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateNoteRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(
        default,
        deserialize_with = "explicit_null",
        skip_serializing_if = "Option::is_none"
    )]
    pub content: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "explicit_null",
        skip_serializing_if = "Option::is_none"
    )]
    pub folder_id: Option<Option<FolderId>>,
}

impl UpdateNoteRequest {
    /// A patch must give a value for at least one of the updatable columns.
    /// An explicit `null` on `content` or `folder_id` clears that column but
    /// does not count towards the requirement.
    pub fn validate(self) -> Result<NotePatch, ApiError> {
        let patch = NotePatch {
            name: self.name,
            content: self.content,
            folder_id: self.folder_id,
        };
        if patch.is_empty() {
            return Err(ApiError::empty_note_patch());
        }
        Ok(patch)
    }
}
