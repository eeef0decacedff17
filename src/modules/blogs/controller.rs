use axum::{
    Json,
    extract::{Multipart, Path, State},
    http::StatusCode,
};
use tracing::instrument;
use uuid::Uuid;

use tutorbase_core::{AppError, ErrorResponse, MessageResponse};

use crate::modules::blogs::model::{BlogListResponse, BlogResponse, CreateBlogDto, UpdateBlogDto};
use crate::modules::blogs::service::BlogService;
use crate::state::AppState;
use crate::uploads::{self, BLOG_IMAGE};
use crate::validator::ValidatedJson;

#[utoipa::path(
    post,
    path = "/api/blogs",
    request_body(content = CreateBlogDto, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Blog created successfully", body = BlogResponse),
        (status = 400, description = "Invalid fields or rejected image", body = ErrorResponse)
    ),
    tag = "Blogs"
)]
#[instrument(skip(state, multipart))]
pub async fn create_blog(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<(StatusCode, Json<BlogResponse>), AppError> {
    let pending = uploads::collect::<CreateBlogDto>(multipart, &BLOG_IMAGE).await?;
    let (dto, files) = pending.store(&state.storage).await?;

    let data = BlogService::create_blog(&state.db, dto, files.image).await?;

    Ok((
        StatusCode::CREATED,
        Json(BlogResponse {
            success: true,
            data,
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/api/blogs/getall",
    responses((status = 200, description = "List of blogs", body = BlogListResponse)),
    tag = "Blogs"
)]
#[instrument(skip(state))]
pub async fn get_all_blogs(
    State(state): State<AppState>,
) -> Result<Json<BlogListResponse>, AppError> {
    let data = BlogService::get_all_blogs(&state.db).await?;
    Ok(Json(BlogListResponse {
        success: true,
        data,
    }))
}

#[utoipa::path(
    get,
    path = "/api/blogs/get/{id}",
    params(("id" = Uuid, Path, description = "Blog ID")),
    responses(
        (status = 200, description = "Blog details", body = BlogResponse),
        (status = 404, description = "Blog not found", body = ErrorResponse)
    ),
    tag = "Blogs"
)]
#[instrument(skip(state))]
pub async fn get_blog(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<BlogResponse>, AppError> {
    let data = BlogService::get_blog_by_id(&state.db, id).await?;
    Ok(Json(BlogResponse {
        success: true,
        data,
    }))
}

#[utoipa::path(
    put,
    path = "/api/blogs/update/{id}",
    params(("id" = Uuid, Path, description = "Blog ID")),
    request_body = UpdateBlogDto,
    responses(
        (status = 200, description = "Blog updated successfully", body = BlogResponse),
        (status = 404, description = "Blog not found", body = ErrorResponse)
    ),
    tag = "Blogs"
)]
#[instrument(skip(state, dto))]
pub async fn update_blog(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<UpdateBlogDto>,
) -> Result<Json<BlogResponse>, AppError> {
    let data = BlogService::update_blog(&state.db, id, dto).await?;
    Ok(Json(BlogResponse {
        success: true,
        data,
    }))
}

#[utoipa::path(
    delete,
    path = "/api/blogs/delete/{id}",
    params(("id" = Uuid, Path, description = "Blog ID")),
    responses(
        (status = 200, description = "Blog deleted successfully", body = MessageResponse),
        (status = 404, description = "Blog not found", body = ErrorResponse)
    ),
    tag = "Blogs"
)]
#[instrument(skip(state))]
pub async fn delete_blog(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    BlogService::delete_blog(&state.db, id).await?;
    Ok(Json(MessageResponse::ok("Blog deleted successfully")))
}
