#![forbid(unsafe_code)]
//! Noteful record types.
//!
//! Rows as the store returns them (`Folder`, `Note`) and the insert/patch
//! payloads the services accept (`NewFolder`, `NewNote`, `NotePatch`).

mod folder;
mod note;

pub use folder::{Folder, FolderId, NewFolder};
pub use note::{NewNote, Note, NoteId, NotePatch};

pub const CRATE_NAME: &str = "noteful-model";
