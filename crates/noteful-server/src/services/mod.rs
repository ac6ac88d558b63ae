//! Thin pass-through from service calls to parameterized SQL.

mod folders;
mod notes;

pub use folders::FolderService;
pub use notes::NoteService;
