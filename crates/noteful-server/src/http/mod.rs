pub(crate) mod errors;
pub(crate) mod folders;
pub(crate) mod handlers;
pub(crate) mod notes;
pub(crate) mod request_tracing;
