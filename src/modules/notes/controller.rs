use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::instrument;
use uuid::Uuid;

use tutorbase_core::{AppError, ErrorResponse, MessageResponse};

use crate::modules::notes::model::{CreateNoteDto, NoteListResponse, NoteResponse, UpdateNoteDto};
use crate::modules::notes::service::NoteService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

#[utoipa::path(
    post,
    path = "/api/notes",
    request_body = CreateNoteDto,
    responses(
        (status = 201, description = "Note created successfully", body = NoteResponse),
        (status = 400, description = "Invalid fields", body = ErrorResponse)
    ),
    tag = "Notes"
)]
#[instrument(skip(state, dto))]
pub async fn create_note(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateNoteDto>,
) -> Result<(StatusCode, Json<NoteResponse>), AppError> {
    let data = NoteService::create_note(&state.db, dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(NoteResponse {
            success: true,
            data,
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/api/notes/getall",
    responses((status = 200, description = "List of notes", body = NoteListResponse)),
    tag = "Notes"
)]
#[instrument(skip(state))]
pub async fn get_all_notes(State(state): State<AppState>) -> Result<Json<NoteListResponse>, AppError> {
    let data = NoteService::get_all_notes(&state.db).await?;
    Ok(Json(NoteListResponse {
        success: true,
        data,
    }))
}

#[utoipa::path(
    get,
    path = "/api/notes/get/{id}",
    params(("id" = Uuid, Path, description = "Note ID")),
    responses(
        (status = 200, description = "Note details", body = NoteResponse),
        (status = 404, description = "Note not found", body = ErrorResponse)
    ),
    tag = "Notes"
)]
#[instrument(skip(state))]
pub async fn get_note(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<NoteResponse>, AppError> {
    let data = NoteService::get_note_by_id(&state.db, id).await?;
    Ok(Json(NoteResponse {
        success: true,
        data,
    }))
}

#[utoipa::path(
    put,
    path = "/api/notes/update/{id}",
    params(("id" = Uuid, Path, description = "Note ID")),
    request_body = UpdateNoteDto,
    responses(
        (status = 200, description = "Note updated successfully", body = NoteResponse),
        (status = 404, description = "Note not found", body = ErrorResponse)
    ),
    tag = "Notes"
)]
#[instrument(skip(state, dto))]
pub async fn update_note(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<UpdateNoteDto>,
) -> Result<Json<NoteResponse>, AppError> {
    let data = NoteService::update_note(&state.db, id, dto).await?;
    Ok(Json(NoteResponse {
        success: true,
        data,
    }))
}

#[utoipa::path(
    delete,
    path = "/api/notes/delete/{id}",
    params(("id" = Uuid, Path, description = "Note ID")),
    responses(
        (status = 200, description = "Note deleted successfully", body = MessageResponse),
        (status = 404, description = "Note not found", body = ErrorResponse)
    ),
    tag = "Notes"
)]
#[instrument(skip(state))]
pub async fn delete_note(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    NoteService::delete_note(&state.db, id).await?;
    Ok(Json(MessageResponse::ok("Note deleted successfully")))
}
