// SPDX-License-Identifier: Apache-2.0

use noteful_model::{Folder, FolderId, NewFolder};
use noteful_store::{Database, StoreResult};
use rusqlite::{params, OptionalExtension, Row};

const SELECT_FOLDERS: &str = "SELECT id, name FROM noteful_folders";
const SELECT_FOLDER_BY_ID: &str = "SELECT id, name FROM noteful_folders WHERE id = ?1";
const INSERT_FOLDER: &str = "INSERT INTO noteful_folders (name) VALUES (?1) RETURNING id, name";
const DELETE_FOLDER: &str = "DELETE FROM noteful_folders WHERE id = ?1";

fn folder_from_row(row: &Row<'_>) -> rusqlite::Result<Folder> {
    Ok(Folder {
        id: row.get(0)?,
        name: row.get(1)?,
    })
}

#[derive(Clone, Debug)]
pub struct FolderService {
    db: Database,
}

impl FolderService {
    #[must_use]
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// All folders in store order; no ordering is imposed.
    pub async fn list_folders(&self) -> StoreResult<Vec<Folder>> {
        self.db
            .call(|conn| {
                let mut stmt = conn.prepare_cached(SELECT_FOLDERS)?;
                let rows = stmt.query_map([], folder_from_row)?;
                rows.collect()
            })
            .await
    }

    pub async fn get_folder_by_id(&self, id: FolderId) -> StoreResult<Option<Folder>> {
        self.db
            .call(move |conn| {
                conn.query_row(SELECT_FOLDER_BY_ID, params![id], folder_from_row)
                    .optional()
            })
            .await
    }

    pub async fn insert_folder(&self, new_folder: NewFolder) -> StoreResult<Folder> {
        self.db
            .call(move |conn| conn.query_row(INSERT_FOLDER, params![new_folder.name], folder_from_row))
            .await
    }

    /// Returns the number of rows removed; zero is not an error.
    pub async fn delete_folder(&self, id: FolderId) -> StoreResult<usize> {
        self.db
            .call(move |conn| conn.execute(DELETE_FOLDER, params![id]))
            .await
    }
}
