use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::instrument;
use uuid::Uuid;

use tutorbase_core::{AppError, ErrorResponse, MessageResponse};

use crate::modules::students::model::{
    CreateStudentDto, StudentListResponse, StudentResponse, UpdateStudentDto,
};
use crate::modules::students::service::StudentService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

#[utoipa::path(
    post,
    path = "/api/students/get",
    request_body = CreateStudentDto,
    responses(
        (status = 201, description = "Student created successfully", body = StudentResponse),
        (status = 400, description = "Invalid fields", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Students"
)]
#[instrument(skip(state, dto))]
pub async fn create_student(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateStudentDto>,
) -> Result<(StatusCode, Json<StudentResponse>), AppError> {
    let student = StudentService::create_student(&state.db, dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(StudentResponse {
            success: true,
            student,
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/api/students/getAll",
    responses(
        (status = 200, description = "List of students", body = StudentListResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Students"
)]
#[instrument(skip(state))]
pub async fn get_all_students(
    State(state): State<AppState>,
) -> Result<Json<StudentListResponse>, AppError> {
    let students = StudentService::get_all_students(&state.db).await?;
    Ok(Json(StudentListResponse {
        success: true,
        students,
    }))
}

#[utoipa::path(
    get,
    path = "/api/students/get/{id}",
    params(("id" = Uuid, Path, description = "Student ID")),
    responses(
        (status = 200, description = "Student details", body = StudentResponse),
        (status = 404, description = "Student not found", body = ErrorResponse)
    ),
    tag = "Students"
)]
#[instrument(skip(state))]
pub async fn get_student(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<StudentResponse>, AppError> {
    let student = StudentService::get_student_by_id(&state.db, id).await?;
    Ok(Json(StudentResponse {
        success: true,
        student,
    }))
}

#[utoipa::path(
    put,
    path = "/api/students/update/{id}",
    params(("id" = Uuid, Path, description = "Student ID")),
    request_body = UpdateStudentDto,
    responses(
        (status = 200, description = "Student updated successfully", body = StudentResponse),
        (status = 400, description = "Invalid fields", body = ErrorResponse),
        (status = 404, description = "Student not found", body = ErrorResponse)
    ),
    tag = "Students"
)]
#[instrument(skip(state, dto))]
pub async fn update_student(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<UpdateStudentDto>,
) -> Result<Json<StudentResponse>, AppError> {
    let student = StudentService::update_student(&state.db, id, dto).await?;
    Ok(Json(StudentResponse {
        success: true,
        student,
    }))
}

#[utoipa::path(
    delete,
    path = "/api/students/delete/{id}",
    params(("id" = Uuid, Path, description = "Student ID")),
    responses(
        (status = 200, description = "Student deleted successfully", body = MessageResponse),
        (status = 404, description = "Student not found", body = ErrorResponse)
    ),
    tag = "Students"
)]
#[instrument(skip(state))]
pub async fn delete_student(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    StudentService::delete_student(&state.db, id).await?;
    Ok(Json(MessageResponse::ok("Student deleted successfully")))
}
