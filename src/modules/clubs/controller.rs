use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::instrument;
use uuid::Uuid;

use tutorbase_core::{AppError, ErrorResponse, MessageResponse};

use crate::modules::clubs::model::{ClubListResponse, ClubResponse, CreateClubDto, UpdateClubDto};
use crate::modules::clubs::service::ClubService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

#[utoipa::path(
    post,
    path = "/api/clubs",
    request_body = CreateClubDto,
    responses(
        (status = 201, description = "Club created successfully", body = ClubResponse),
        (status = 400, description = "Invalid fields", body = ErrorResponse)
    ),
    tag = "Clubs"
)]
#[instrument(skip(state, dto))]
pub async fn create_club(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateClubDto>,
) -> Result<(StatusCode, Json<ClubResponse>), AppError> {
    let data = ClubService::create_club(&state.db, dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ClubResponse {
            success: true,
            data,
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/api/clubs/getall",
    responses((status = 200, description = "List of clubs", body = ClubListResponse)),
    tag = "Clubs"
)]
#[instrument(skip(state))]
pub async fn get_all_clubs(State(state): State<AppState>) -> Result<Json<ClubListResponse>, AppError> {
    let data = ClubService::get_all_clubs(&state.db).await?;
    Ok(Json(ClubListResponse {
        success: true,
        data,
    }))
}

#[utoipa::path(
    get,
    path = "/api/clubs/get/{id}",
    params(("id" = Uuid, Path, description = "Club ID")),
    responses(
        (status = 200, description = "Club details", body = ClubResponse),
        (status = 404, description = "Club not found", body = ErrorResponse)
    ),
    tag = "Clubs"
)]
#[instrument(skip(state))]
pub async fn get_club(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ClubResponse>, AppError> {
    let data = ClubService::get_club_by_id(&state.db, id).await?;
    Ok(Json(ClubResponse {
        success: true,
        data,
    }))
}

#[utoipa::path(
    put,
    path = "/api/clubs/update/{id}",
    params(("id" = Uuid, Path, description = "Club ID")),
    request_body = UpdateClubDto,
    responses(
        (status = 200, description = "Club updated successfully", body = ClubResponse),
        (status = 404, description = "Club not found", body = ErrorResponse)
    ),
    tag = "Clubs"
)]
#[instrument(skip(state, dto))]
pub async fn update_club(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<UpdateClubDto>,
) -> Result<Json<ClubResponse>, AppError> {
    let data = ClubService::update_club(&state.db, id, dto).await?;
    Ok(Json(ClubResponse {
        success: true,
        data,
    }))
}

#[utoipa::path(
    delete,
    path = "/api/clubs/delete/{id}",
    params(("id" = Uuid, Path, description = "Club ID")),
    responses(
        (status = 200, description = "Club deleted successfully", body = MessageResponse),
        (status = 404, description = "Club not found", body = ErrorResponse)
    ),
    tag = "Clubs"
)]
#[instrument(skip(state))]
pub async fn delete_club(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    ClubService::delete_club(&state.db, id).await?;
    Ok(Json(MessageResponse::ok("Club deleted successfully")))
}
