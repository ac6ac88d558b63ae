// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

pub type FolderId = i64;

/// A named container grouping zero or more notes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Folder {
    pub id: FolderId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewFolder {
    pub name: String,
}

impl NewFolder {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
