use crate::AppState;
use axum::body::Body;
use axum::extract::State;
use axum::http::{HeaderMap, HeaderValue, Method, Request, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

const ALLOWED_METHODS: &str = "GET,POST,PATCH,DELETE,OPTIONS";
const ALLOWED_HEADERS: &str = "content-type,x-request-id,x-correlation-id";

/// Resolves the `access-control-allow-origin` value for a request, if any.
/// An empty allow-list admits every origin.
fn allowed_origin(state: &AppState, headers: &HeaderMap) -> Option<HeaderValue> {
    let allow = &state.config.cors_allowed_origins;
    if allow.is_empty() {
        return Some(HeaderValue::from_static("*"));
    }
    let origin = headers.get("origin")?.to_str().ok()?.trim();
    if allow.iter().any(|x| x == origin) {
        HeaderValue::from_str(origin).ok()
    } else {
        None
    }
}

pub(crate) async fn cors_middleware(
    State(state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Response {
    let origin = allowed_origin(&state, req.headers());

    if req.method() == Method::OPTIONS {
        let mut resp = StatusCode::NO_CONTENT.into_response();
        if let Some(value) = origin {
            let headers = resp.headers_mut();
            headers.insert("access-control-allow-origin", value);
            headers.insert(
                "access-control-allow-methods",
                HeaderValue::from_static(ALLOWED_METHODS),
            );
            headers.insert(
                "access-control-allow-headers",
                HeaderValue::from_static(ALLOWED_HEADERS),
            );
        }
        return resp;
    }

    let mut resp = next.run(req).await;
    if let Some(value) = origin {
        resp.headers_mut()
            .insert("access-control-allow-origin", value);
        resp.headers_mut()
            .insert("access-control-expose-headers", HeaderValue::from_static("location,x-request-id"));
    }
    resp
}
