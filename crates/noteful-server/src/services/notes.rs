// SPDX-License-Identifier: Apache-2.0

use noteful_model::{NewNote, Note, NoteId, NotePatch};
use noteful_store::{Database, StoreResult};
use rusqlite::{params, OptionalExtension, Row};

const NOTE_COLUMNS: &str = "id, name, content, folder_id, date_modified";

// An absent name binds as NULL and COALESCE keeps the stored value. The
// nullable columns carry a set flag so an explicit null can clear them.
const UPDATE_NOTE: &str = "UPDATE noteful_notes
     SET name = COALESCE(?2, name),
         content = CASE WHEN ?3 THEN ?4 ELSE content END,
         folder_id = CASE WHEN ?5 THEN ?6 ELSE folder_id END
     WHERE id = ?1";
const DELETE_NOTE: &str = "DELETE FROM noteful_notes WHERE id = ?1";

fn note_from_row(row: &Row<'_>) -> rusqlite::Result<Note> {
    let date_modified: chrono::NaiveDateTime = row.get(4)?;
    Ok(Note {
        id: row.get(0)?,
        name: row.get(1)?,
        content: row.get(2)?,
        folder_id: row.get(3)?,
        date_modified: date_modified.and_utc(),
    })
}

#[derive(Clone, Debug)]
pub struct NoteService {
    db: Database,
}

impl NoteService {
    #[must_use]
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub async fn list_notes(&self) -> StoreResult<Vec<Note>> {
        self.db
            .call(|conn| {
                let mut stmt =
                    conn.prepare_cached(&format!("SELECT {NOTE_COLUMNS} FROM noteful_notes"))?;
                let rows = stmt.query_map([], note_from_row)?;
                rows.collect()
            })
            .await
    }

    pub async fn get_note_by_id(&self, id: NoteId) -> StoreResult<Option<Note>> {
        self.db
            .call(move |conn| {
                conn.query_row(
                    &format!("SELECT {NOTE_COLUMNS} FROM noteful_notes WHERE id = ?1"),
                    params![id],
                    note_from_row,
                )
                .optional()
            })
            .await
    }

    pub async fn insert_note(&self, new_note: NewNote) -> StoreResult<Note> {
        self.db
            .call(move |conn| {
                conn.query_row(
                    &format!(
                        "INSERT INTO noteful_notes (name, content, folder_id) VALUES (?1, ?2, ?3) RETURNING {NOTE_COLUMNS}"
                    ),
                    params![new_note.name, new_note.content, new_note.folder_id],
                    note_from_row,
                )
            })
            .await
    }

    /// Writes only the supplied fields. `date_modified` is left untouched.
    pub async fn update_note(&self, id: NoteId, patch: NotePatch) -> StoreResult<usize> {
        self.db
            .call(move |conn| {
                let NotePatch {
                    name,
                    content,
                    folder_id,
                } = patch;
                conn.execute(
                    UPDATE_NOTE,
                    params![
                        id,
                        name,
                        content.is_some(),
                        content.flatten(),
                        folder_id.is_some(),
                        folder_id.flatten()
                    ],
                )
            })
            .await
    }

    pub async fn delete_note(&self, id: NoteId) -> StoreResult<usize> {
        self.db
            .call(move |conn| conn.execute(DELETE_NOTE, params![id]))
            .await
    }
}
