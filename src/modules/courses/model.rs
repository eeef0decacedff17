use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Course {
    pub id: Uuid,
    pub title: String,
    pub subject: String,
    pub description: Option<String>,
    pub level: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateCourseDto {
    #[validate(length(min = 1, max = 200, message = "title is required"))]
    pub title: String,
    #[validate(length(min = 1, max = 100, message = "subject is required"))]
    pub subject: String,
    #[validate(length(max = 2000, message = "description must not exceed 2000 characters"))]
    pub description: Option<String>,
    pub level: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateCourseDto {
    #[validate(length(min = 1, max = 200, message = "title is required"))]
    pub title: Option<String>,
    #[validate(length(min = 1, max = 100, message = "subject is required"))]
    pub subject: Option<String>,
    #[validate(length(max = 2000, message = "description must not exceed 2000 characters"))]
    pub description: Option<String>,
    pub level: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CourseResponse {
    pub success: bool,
    pub data: Course,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CourseListResponse {
    pub success: bool,
    pub data: Vec<Course>,
}
