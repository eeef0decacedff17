use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Comment {
    pub id: Uuid,
    /// Soft reference: the blog may have been deleted since
    pub blog_id: Uuid,
    pub author: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateCommentDto {
    pub blog_id: Uuid,
    #[validate(length(min = 1, max = 120, message = "author is required"))]
    pub author: String,
    #[validate(length(min = 1, max = 2000, message = "content is required"))]
    pub content: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateCommentDto {
    #[validate(length(min = 1, max = 2000, message = "content is required"))]
    pub content: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CommentResponse {
    pub success: bool,
    pub data: Comment,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CommentListResponse {
    pub success: bool,
    pub data: Vec<Comment>,
}
