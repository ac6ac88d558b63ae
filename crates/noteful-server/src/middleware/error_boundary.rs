use crate::http::errors::{api_error_response, StoreErrorDetail};
use crate::AppState;
use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;
use noteful_api::ApiError;

/// Outside production, 500 responses carry the underlying store error text
/// instead of the generic message.
pub(crate) async fn error_boundary_middleware(
    State(state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Response {
    let mut resp = next.run(req).await;
    if state.config.environment.is_production() {
        return resp;
    }
    let detail = resp.extensions_mut().remove::<StoreErrorDetail>();
    match detail {
        Some(StoreErrorDetail(detail)) => api_error_response(resp.status(), ApiError::new(detail)),
        None => resp,
    }
}
