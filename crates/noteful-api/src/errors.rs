// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

pub mod messages {
    pub const MISSING_FOLDER_NAME: &str = "Missing Name if request body";
    pub const MISSING_NOTE_NAME: &str = "Missing Name in request body";
    pub const EMPTY_NOTE_PATCH: &str =
        "Request body must contain either 'name', 'content', or 'folder id'";
    pub const FOLDER_NOT_FOUND: &str = "Folder doesn't exist";
    pub const NOTE_NOT_FOUND: &str = "Note doesn't exist";
    pub const SERVER_ERROR: &str = "server error";
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApiError {
    pub message: String,
}

impl ApiError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn missing_folder_name() -> Self {
        Self::new(messages::MISSING_FOLDER_NAME)
    }

    #[must_use]
    pub fn missing_note_name() -> Self {
        Self::new(messages::MISSING_NOTE_NAME)
    }

    #[must_use]
    pub fn empty_note_patch() -> Self {
        Self::new(messages::EMPTY_NOTE_PATCH)
    }

    #[must_use]
    pub fn folder_not_found() -> Self {
        Self::new(messages::FOLDER_NOT_FOUND)
    }

    #[must_use]
    pub fn note_not_found() -> Self {
        Self::new(messages::NOTE_NOT_FOUND)
    }

    #[must_use]
    pub fn server_error() -> Self {
        Self::new(messages::SERVER_ERROR)
    }
}

/// Body of every non-2xx response: `{"error":{"message":...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ErrorEnvelope {
    pub error: ApiError,
}

impl From<ApiError> for ErrorEnvelope {
    fn from(error: ApiError) -> Self {
        Self { error }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn envelope_shape_is_stable() {
        let body = serde_json::to_value(ErrorEnvelope::from(ApiError::folder_not_found()))
            .expect("envelope json");
        assert_eq!(body, json!({"error": {"message": "Folder doesn't exist"}}));
    }
}
