use axum::Json;
use serde_json::{json, Value};

pub(crate) async fn landing_handler() -> Json<Value> {
    Json(json!({"ok": true, "service": crate::CRATE_NAME}))
}

pub(crate) async fn openapi_handler() -> Json<Value> {
    Json(noteful_api::openapi_spec())
}
