use axum::{
    Json,
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
};
use tracing::instrument;
use uuid::Uuid;

use tutorbase_core::{AppError, ErrorResponse, MessageResponse};

use crate::modules::teachers::model::{
    CreateTeacherDto, Teacher, TeacherListResponse, TeacherResponse, TeacherSearchParams,
    UpdateTeacherDto,
};
use crate::modules::teachers::service::TeacherService;
use crate::state::AppState;
use crate::uploads::{self, TEACHER_FILES};
use crate::validator::ValidatedJson;

#[utoipa::path(
    post,
    path = "/api/teachers",
    request_body(content = CreateTeacherDto, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Teacher created successfully", body = TeacherResponse),
        (status = 400, description = "Invalid fields or rejected file upload", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Teachers"
)]
#[instrument(skip(state, multipart))]
pub async fn create_teacher(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<(StatusCode, Json<TeacherResponse>), AppError> {
    // Everything (fields, file types, sizes) is validated before any file
    // is written or the record persisted.
    let pending = uploads::collect::<CreateTeacherDto>(multipart, &TEACHER_FILES).await?;
    let (dto, files) = pending.store(&state.storage).await?;

    let teacher = TeacherService::create_teacher(&state.db, dto, files).await?;

    Ok((
        StatusCode::CREATED,
        Json(TeacherResponse {
            success: true,
            teacher,
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/api/teachers/getall",
    responses(
        (status = 200, description = "List of teachers", body = TeacherListResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Teachers"
)]
#[instrument(skip(state))]
pub async fn get_all_teachers(
    State(state): State<AppState>,
) -> Result<Json<TeacherListResponse>, AppError> {
    let teachers = TeacherService::get_all_teachers(&state.db).await?;
    Ok(Json(TeacherListResponse {
        success: true,
        teachers,
    }))
}

#[utoipa::path(
    get,
    path = "/api/teachers/get/{id}",
    params(("id" = Uuid, Path, description = "Teacher ID")),
    responses(
        (status = 200, description = "Teacher details", body = TeacherResponse),
        (status = 404, description = "Teacher not found", body = ErrorResponse)
    ),
    tag = "Teachers"
)]
#[instrument(skip(state))]
pub async fn get_teacher(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<TeacherResponse>, AppError> {
    let teacher = TeacherService::get_teacher_by_id(&state.db, id).await?;
    Ok(Json(TeacherResponse {
        success: true,
        teacher,
    }))
}

#[utoipa::path(
    put,
    path = "/api/teachers/update/{id}",
    params(("id" = Uuid, Path, description = "Teacher ID")),
    request_body = UpdateTeacherDto,
    responses(
        (status = 200, description = "Teacher updated successfully", body = TeacherResponse),
        (status = 400, description = "Invalid fields", body = ErrorResponse),
        (status = 404, description = "Teacher not found", body = ErrorResponse)
    ),
    tag = "Teachers"
)]
#[instrument(skip(state, dto))]
pub async fn update_teacher(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<UpdateTeacherDto>,
) -> Result<Json<TeacherResponse>, AppError> {
    let teacher = TeacherService::update_teacher(&state.db, id, dto).await?;
    Ok(Json(TeacherResponse {
        success: true,
        teacher,
    }))
}

#[utoipa::path(
    delete,
    path = "/api/teachers/{id}",
    params(("id" = Uuid, Path, description = "Teacher ID")),
    responses(
        (status = 200, description = "Teacher deleted successfully", body = MessageResponse),
        (status = 404, description = "Teacher not found", body = ErrorResponse)
    ),
    tag = "Teachers"
)]
#[instrument(skip(state))]
pub async fn delete_teacher(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    TeacherService::delete_teacher(&state.db, id).await?;
    Ok(Json(MessageResponse::ok("Teacher deleted successfully")))
}

#[utoipa::path(
    get,
    path = "/api/teachers/subject/{applied_for}",
    params(("applied_for" = String, Path, description = "Subject applied for")),
    responses(
        (status = 200, description = "Teachers who applied for the subject", body = TeacherListResponse)
    ),
    tag = "Teachers"
)]
#[instrument(skip(state))]
pub async fn get_teachers_by_subject(
    State(state): State<AppState>,
    Path(applied_for): Path<String>,
) -> Result<Json<TeacherListResponse>, AppError> {
    let teachers = TeacherService::get_teachers_by_subject(&state.db, &applied_for).await?;
    Ok(Json(TeacherListResponse {
        success: true,
        teachers,
    }))
}

#[utoipa::path(
    get,
    path = "/api/teachers/search",
    params(TeacherSearchParams),
    responses(
        (status = 200, description = "Teachers matching the search", body = TeacherListResponse)
    ),
    tag = "Teachers"
)]
#[instrument(skip(state, params))]
pub async fn search_teachers(
    State(state): State<AppState>,
    Query(params): Query<TeacherSearchParams>,
) -> Result<Json<TeacherListResponse>, AppError> {
    let teachers = TeacherService::search_teachers(&state.db, params).await?;
    Ok(Json(TeacherListResponse {
        success: true,
        teachers,
    }))
}
