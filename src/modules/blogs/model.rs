use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Blog {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub author: String,
    /// Storage key of the cover image, served under `/uploads`
    pub image_path: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateBlogDto {
    #[validate(length(min = 1, max = 200, message = "title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "content is required"))]
    pub content: String,
    #[validate(length(min = 1, max = 120, message = "author is required"))]
    pub author: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateBlogDto {
    #[validate(length(min = 1, max = 200, message = "title is required"))]
    pub title: Option<String>,
    #[validate(length(min = 1, message = "content is required"))]
    pub content: Option<String>,
    #[validate(length(min = 1, max = 120, message = "author is required"))]
    pub author: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BlogResponse {
    pub success: bool,
    pub data: Blog,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BlogListResponse {
    pub success: bool,
    pub data: Vec<Blog>,
}
