use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::instrument;
use uuid::Uuid;

use tutorbase_core::{AppError, ErrorResponse, MessageResponse};

use crate::modules::comments::model::{
    CommentListResponse, CommentResponse, CreateCommentDto, UpdateCommentDto,
};
use crate::modules::comments::service::CommentService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

#[utoipa::path(
    post,
    path = "/api/comments",
    request_body = CreateCommentDto,
    responses(
        (status = 201, description = "Comment created successfully", body = CommentResponse),
        (status = 400, description = "Invalid fields", body = ErrorResponse)
    ),
    tag = "Comments"
)]
#[instrument(skip(state, dto))]
pub async fn create_comment(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateCommentDto>,
) -> Result<(StatusCode, Json<CommentResponse>), AppError> {
    let data = CommentService::create_comment(&state.db, dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(CommentResponse {
            success: true,
            data,
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/api/comments/getall",
    responses((status = 200, description = "List of comments", body = CommentListResponse)),
    tag = "Comments"
)]
#[instrument(skip(state))]
pub async fn get_all_comments(
    State(state): State<AppState>,
) -> Result<Json<CommentListResponse>, AppError> {
    let data = CommentService::get_all_comments(&state.db).await?;
    Ok(Json(CommentListResponse {
        success: true,
        data,
    }))
}

#[utoipa::path(
    get,
    path = "/api/comments/blog/{blog_id}",
    params(("blog_id" = Uuid, Path, description = "Blog ID")),
    responses(
        (status = 200, description = "Comments for the blog", body = CommentListResponse)
    ),
    tag = "Comments"
)]
#[instrument(skip(state))]
pub async fn get_comments_by_blog(
    State(state): State<AppState>,
    Path(blog_id): Path<Uuid>,
) -> Result<Json<CommentListResponse>, AppError> {
    let data = CommentService::get_comments_by_blog(&state.db, blog_id).await?;
    Ok(Json(CommentListResponse {
        success: true,
        data,
    }))
}

#[utoipa::path(
    put,
    path = "/api/comments/update/{id}",
    params(("id" = Uuid, Path, description = "Comment ID")),
    request_body = UpdateCommentDto,
    responses(
        (status = 200, description = "Comment updated successfully", body = CommentResponse),
        (status = 404, description = "Comment not found", body = ErrorResponse)
    ),
    tag = "Comments"
)]
#[instrument(skip(state, dto))]
pub async fn update_comment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<UpdateCommentDto>,
) -> Result<Json<CommentResponse>, AppError> {
    let data = CommentService::update_comment(&state.db, id, dto).await?;
    Ok(Json(CommentResponse {
        success: true,
        data,
    }))
}

#[utoipa::path(
    delete,
    path = "/api/comments/delete/{id}",
    params(("id" = Uuid, Path, description = "Comment ID")),
    responses(
        (status = 200, description = "Comment deleted successfully", body = MessageResponse),
        (status = 404, description = "Comment not found", body = ErrorResponse)
    ),
    tag = "Comments"
)]
#[instrument(skip(state))]
pub async fn delete_comment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    CommentService::delete_comment(&state.db, id).await?;
    Ok(Json(MessageResponse::ok("Comment deleted successfully")))
}
