use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::instrument;
use uuid::Uuid;

use tutorbase_core::{AppError, ErrorResponse, MessageResponse};

use crate::modules::courses::model::{
    CourseListResponse, CourseResponse, CreateCourseDto, UpdateCourseDto,
};
use crate::modules::courses::service::CourseService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

#[utoipa::path(
    post,
    path = "/api/courses",
    request_body = CreateCourseDto,
    responses(
        (status = 201, description = "Course created successfully", body = CourseResponse),
        (status = 400, description = "Invalid fields", body = ErrorResponse)
    ),
    tag = "Courses"
)]
#[instrument(skip(state, dto))]
pub async fn create_course(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateCourseDto>,
) -> Result<(StatusCode, Json<CourseResponse>), AppError> {
    let data = CourseService::create_course(&state.db, dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(CourseResponse {
            success: true,
            data,
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/api/courses/getall",
    responses((status = 200, description = "List of courses", body = CourseListResponse)),
    tag = "Courses"
)]
#[instrument(skip(state))]
pub async fn get_all_courses(
    State(state): State<AppState>,
) -> Result<Json<CourseListResponse>, AppError> {
    let data = CourseService::get_all_courses(&state.db).await?;
    Ok(Json(CourseListResponse {
        success: true,
        data,
    }))
}

#[utoipa::path(
    get,
    path = "/api/courses/get/{id}",
    params(("id" = Uuid, Path, description = "Course ID")),
    responses(
        (status = 200, description = "Course details", body = CourseResponse),
        (status = 404, description = "Course not found", body = ErrorResponse)
    ),
    tag = "Courses"
)]
#[instrument(skip(state))]
pub async fn get_course(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CourseResponse>, AppError> {
    let data = CourseService::get_course_by_id(&state.db, id).await?;
    Ok(Json(CourseResponse {
        success: true,
        data,
    }))
}

#[utoipa::path(
    put,
    path = "/api/courses/update/{id}",
    params(("id" = Uuid, Path, description = "Course ID")),
    request_body = UpdateCourseDto,
    responses(
        (status = 200, description = "Course updated successfully", body = CourseResponse),
        (status = 404, description = "Course not found", body = ErrorResponse)
    ),
    tag = "Courses"
)]
#[instrument(skip(state, dto))]
pub async fn update_course(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<UpdateCourseDto>,
) -> Result<Json<CourseResponse>, AppError> {
    let data = CourseService::update_course(&state.db, id, dto).await?;
    Ok(Json(CourseResponse {
        success: true,
        data,
    }))
}

#[utoipa::path(
    delete,
    path = "/api/courses/delete/{id}",
    params(("id" = Uuid, Path, description = "Course ID")),
    responses(
        (status = 200, description = "Course deleted successfully", body = MessageResponse),
        (status = 404, description = "Course not found", body = ErrorResponse)
    ),
    tag = "Courses"
)]
#[instrument(skip(state))]
pub async fn delete_course(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    CourseService::delete_course(&state.db, id).await?;
    Ok(Json(MessageResponse::ok("Course deleted successfully")))
}
