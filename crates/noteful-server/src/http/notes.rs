use crate::http::errors::AppError;
use crate::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::{OriginalUri, Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use noteful_api::{created_location, ApiError, CreateNoteRequest, UpdateNoteRequest};
use noteful_model::{Note, NoteId};
use tracing::info;

pub(crate) fn router() -> Router<AppState> {
    Router::new()
        .route("/api/notes", get(list_notes).post(create_note))
        .route(
            "/api/notes/:note_id",
            get(get_note).delete(delete_note).patch(update_note),
        )
}

async fn load_note(state: &AppState, raw_id: &str) -> Result<Note, AppError> {
    let not_found = || AppError::NotFound(ApiError::note_not_found());
    let id: NoteId = raw_id.parse().map_err(|_| not_found())?;
    state
        .notes
        .get_note_by_id(id)
        .await?
        .ok_or_else(not_found)
}

async fn list_notes(State(state): State<AppState>) -> Result<Json<Vec<Note>>, AppError> {
    Ok(Json(state.notes.list_notes().await?))
}

async fn create_note(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    payload: Result<Json<CreateNoteRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(body) = payload?;
    let new_note = body.validate().map_err(AppError::Validation)?;
    let note = state.notes.insert_note(new_note).await?;
    info!(note_id = note.id, folder_id = note.folder_id, "note created");
    let location = created_location(uri.path(), note.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(note)).into_response())
}

async fn get_note(
    State(state): State<AppState>,
    Path(note_id): Path<String>,
) -> Result<Json<Note>, AppError> {
    Ok(Json(load_note(&state, &note_id).await?))
}

async fn delete_note(
    State(state): State<AppState>,
    Path(note_id): Path<String>,
) -> Result<StatusCode, AppError> {
    let note = load_note(&state, &note_id).await?;
    state.notes.delete_note(note.id).await?;
    info!(note_id = note.id, "note deleted");
    Ok(StatusCode::NO_CONTENT)
}

// The existence guard runs before the body is inspected, so an unknown id is
// a 404 even when the body is also invalid.
async fn update_note(
    State(state): State<AppState>,
    Path(note_id): Path<String>,
    payload: Result<Json<UpdateNoteRequest>, JsonRejection>,
) -> Result<StatusCode, AppError> {
    let note = load_note(&state, &note_id).await?;
    let Json(body) = payload?;
    let patch = body.validate().map_err(AppError::Validation)?;
    state.notes.update_note(note.id, patch).await?;
    info!(note_id = note.id, "note updated");
    Ok(StatusCode::NO_CONTENT)
}
