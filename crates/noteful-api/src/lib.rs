#![forbid(unsafe_code)]

mod dto;
mod errors;
mod openapi;

pub use dto::{CreateFolderRequest, CreateNoteRequest, UpdateNoteRequest};
pub use errors::{messages, ApiError, ErrorEnvelope};
pub use openapi::openapi_spec;

pub const CRATE_NAME: &str = "noteful-api";
pub const API_PREFIX: &str = "/api";

/// `Location` value for a freshly created resource: `<request path>/<id>`.
#[must_use]
pub fn created_location(request_path: &str, id: i64) -> String {
    format!("{}/{id}", request_path.trim_end_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::created_location;

    #[test]
    fn location_joins_without_double_slash() {
        assert_eq!(created_location("/api/folders", 4), "/api/folders/4");
        assert_eq!(created_location("/api/notes/", 12), "/api/notes/12");
    }
}
