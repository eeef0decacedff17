use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::instrument;
use uuid::Uuid;

use tutorbase_core::{AppError, ErrorResponse, MessageResponse};

use crate::modules::contact::model::{ContactListResponse, ContactResponse, CreateContactDto};
use crate::modules::contact::service::ContactService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

#[utoipa::path(
    post,
    path = "/api/contact/add",
    request_body = CreateContactDto,
    responses(
        (status = 201, description = "Contact message stored", body = ContactResponse),
        (status = 400, description = "Invalid fields", body = ErrorResponse)
    ),
    tag = "Contact"
)]
#[instrument(skip(state, dto))]
pub async fn create_message(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateContactDto>,
) -> Result<(StatusCode, Json<ContactResponse>), AppError> {
    let data = ContactService::create_message(&state.db, dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ContactResponse {
            success: true,
            data,
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/api/contact/get",
    responses(
        (status = 200, description = "List of contact messages", body = ContactListResponse)
    ),
    tag = "Contact"
)]
#[instrument(skip(state))]
pub async fn get_all_messages(
    State(state): State<AppState>,
) -> Result<Json<ContactListResponse>, AppError> {
    let data = ContactService::get_all_messages(&state.db).await?;
    Ok(Json(ContactListResponse {
        success: true,
        data,
    }))
}

#[utoipa::path(
    get,
    path = "/api/contact/get/{id}",
    params(("id" = Uuid, Path, description = "Contact message ID")),
    responses(
        (status = 200, description = "Contact message details", body = ContactResponse),
        (status = 404, description = "Contact message not found", body = ErrorResponse)
    ),
    tag = "Contact"
)]
#[instrument(skip(state))]
pub async fn get_message(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ContactResponse>, AppError> {
    let data = ContactService::get_message_by_id(&state.db, id).await?;
    Ok(Json(ContactResponse {
        success: true,
        data,
    }))
}

#[utoipa::path(
    delete,
    path = "/api/contact/delete/{id}",
    params(("id" = Uuid, Path, description = "Contact message ID")),
    responses(
        (status = 200, description = "Contact message deleted", body = MessageResponse),
        (status = 404, description = "Contact message not found", body = ErrorResponse)
    ),
    tag = "Contact"
)]
#[instrument(skip(state))]
pub async fn delete_message(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    ContactService::delete_message(&state.db, id).await?;
    Ok(Json(MessageResponse::ok(
        "Contact message deleted successfully",
    )))
}
