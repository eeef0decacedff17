use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::instrument;
use uuid::Uuid;

use tutorbase_core::{AppError, ErrorResponse, MessageResponse};

use crate::modules::quizzes::model::{CreateQuizDto, QuizListResponse, QuizResponse, UpdateQuizDto};
use crate::modules::quizzes::service::QuizService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

#[utoipa::path(
    post,
    path = "/api/quizzes",
    request_body = CreateQuizDto,
    responses(
        (status = 201, description = "Quiz created successfully", body = QuizResponse),
        (status = 400, description = "Invalid fields", body = ErrorResponse)
    ),
    tag = "Quizzes"
)]
#[instrument(skip(state, dto))]
pub async fn create_quiz(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateQuizDto>,
) -> Result<(StatusCode, Json<QuizResponse>), AppError> {
    let data = QuizService::create_quiz(&state.db, dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(QuizResponse {
            success: true,
            data,
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/api/quizzes/getall",
    responses((status = 200, description = "List of quizzes", body = QuizListResponse)),
    tag = "Quizzes"
)]
#[instrument(skip(state))]
pub async fn get_all_quizzes(
    State(state): State<AppState>,
) -> Result<Json<QuizListResponse>, AppError> {
    let data = QuizService::get_all_quizzes(&state.db).await?;
    Ok(Json(QuizListResponse {
        success: true,
        data,
    }))
}

#[utoipa::path(
    get,
    path = "/api/quizzes/get/{id}",
    params(("id" = Uuid, Path, description = "Quiz ID")),
    responses(
        (status = 200, description = "Quiz details", body = QuizResponse),
        (status = 404, description = "Quiz not found", body = ErrorResponse)
    ),
    tag = "Quizzes"
)]
#[instrument(skip(state))]
pub async fn get_quiz(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<QuizResponse>, AppError> {
    let data = QuizService::get_quiz_by_id(&state.db, id).await?;
    Ok(Json(QuizResponse {
        success: true,
        data,
    }))
}

#[utoipa::path(
    put,
    path = "/api/quizzes/update/{id}",
    params(("id" = Uuid, Path, description = "Quiz ID")),
    request_body = UpdateQuizDto,
    responses(
        (status = 200, description = "Quiz updated successfully", body = QuizResponse),
        (status = 404, description = "Quiz not found", body = ErrorResponse)
    ),
    tag = "Quizzes"
)]
#[instrument(skip(state, dto))]
pub async fn update_quiz(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<UpdateQuizDto>,
) -> Result<Json<QuizResponse>, AppError> {
    let data = QuizService::update_quiz(&state.db, id, dto).await?;
    Ok(Json(QuizResponse {
        success: true,
        data,
    }))
}

#[utoipa::path(
    delete,
    path = "/api/quizzes/delete/{id}",
    params(("id" = Uuid, Path, description = "Quiz ID")),
    responses(
        (status = 200, description = "Quiz deleted successfully", body = MessageResponse),
        (status = 404, description = "Quiz not found", body = ErrorResponse)
    ),
    tag = "Quizzes"
)]
#[instrument(skip(state))]
pub async fn delete_quiz(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    QuizService::delete_quiz(&state.db, id).await?;
    Ok(Json(MessageResponse::ok("Quiz deleted successfully")))
}
