use crate::http::errors::AppError;
use crate::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::{OriginalUri, Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use noteful_api::{created_location, ApiError, CreateFolderRequest};
use noteful_model::{Folder, FolderId};
use tracing::info;

pub(crate) fn router() -> Router<AppState> {
    Router::new()
        .route("/api/folders", get(list_folders).post(create_folder))
        .route(
            "/api/folders/:folder_id",
            get(get_folder).delete(delete_folder),
        )
}

/// Shared guard for `/api/folders/:folder_id`: resolves the folder or ends the
/// request with 404 before any verb-specific work. Ids that do not parse can
/// never match a row.
async fn load_folder(state: &AppState, raw_id: &str) -> Result<Folder, AppError> {
    let not_found = || AppError::NotFound(ApiError::folder_not_found());
    let id: FolderId = raw_id.parse().map_err(|_| not_found())?;
    state
        .folders
        .get_folder_by_id(id)
        .await?
        .ok_or_else(not_found)
}

async fn list_folders(State(state): State<AppState>) -> Result<Json<Vec<Folder>>, AppError> {
    Ok(Json(state.folders.list_folders().await?))
}

async fn create_folder(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    payload: Result<Json<CreateFolderRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(body) = payload?;
    let new_folder = body.validate().map_err(AppError::Validation)?;
    let folder = state.folders.insert_folder(new_folder).await?;
    info!(folder_id = folder.id, "folder created");
    let location = created_location(uri.path(), folder.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(folder),
    )
        .into_response())
}

async fn get_folder(
    State(state): State<AppState>,
    Path(folder_id): Path<String>,
) -> Result<Json<Folder>, AppError> {
    Ok(Json(load_folder(&state, &folder_id).await?))
}

async fn delete_folder(
    State(state): State<AppState>,
    Path(folder_id): Path<String>,
) -> Result<StatusCode, AppError> {
    let folder = load_folder(&state, &folder_id).await?;
    state.folders.delete_folder(folder.id).await?;
    info!(folder_id = folder.id, "folder deleted");
    Ok(StatusCode::NO_CONTENT)
}
