#![forbid(unsafe_code)]
//! Storage handle for noteful.
//!
//! `Database` owns one SQLite connection behind a mutex and runs every
//! statement on the blocking pool. Opening a database always configures
//! foreign keys and brings the schema up to [`latest_version`].

mod database;
mod error;
mod migrations;

pub use database::{Database, MEMORY_URL};
pub use error::{StoreError, StoreResult};
pub use migrations::{apply_migrations, latest_version};

pub const CRATE_NAME: &str = "noteful-store";
pub const FOLDERS_TABLE: &str = "noteful_folders";
pub const NOTES_TABLE: &str = "noteful_notes";
