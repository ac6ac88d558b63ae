#![forbid(unsafe_code)]

use std::sync::atomic::AtomicU64;
use std::sync::Arc;

mod config;
mod http;
mod middleware;
mod runtime;
mod services;

pub use config::{validate_startup_config, Environment, ServerConfig};
pub use runtime::server_runtime_app::build_router;
pub use services::{FolderService, NoteService};

pub const CRATE_NAME: &str = "noteful-server";

/// Per-process state handed to every handler. Services are built once from an
/// injected `Database` and shared by clone.
#[derive(Clone)]
pub struct AppState {
    pub folders: FolderService,
    pub notes: NoteService,
    pub config: Arc<ServerConfig>,
    request_id_seed: Arc<AtomicU64>,
}
