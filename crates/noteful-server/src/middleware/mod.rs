pub(crate) mod cors;
pub(crate) mod error_boundary;
pub(crate) mod request_tracing;
pub(crate) mod security_headers;
