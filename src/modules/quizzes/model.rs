use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Quiz {
    pub id: Uuid,
    pub title: String,
    pub subject: String,
    pub class_level: Option<String>,
    pub duration_minutes: Option<i32>,
    pub total_marks: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateQuizDto {
    #[validate(length(min = 1, max = 200, message = "title is required"))]
    pub title: String,
    #[validate(length(min = 1, max = 100, message = "subject is required"))]
    pub subject: String,
    pub class_level: Option<String>,
    #[validate(range(min = 1, message = "duration_minutes must be positive"))]
    pub duration_minutes: Option<i32>,
    #[validate(range(min = 1, message = "total_marks must be positive"))]
    pub total_marks: Option<i32>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateQuizDto {
    #[validate(length(min = 1, max = 200, message = "title is required"))]
    pub title: Option<String>,
    #[validate(length(min = 1, max = 100, message = "subject is required"))]
    pub subject: Option<String>,
    pub class_level: Option<String>,
    #[validate(range(min = 1, message = "duration_minutes must be positive"))]
    pub duration_minutes: Option<i32>,
    #[validate(range(min = 1, message = "total_marks must be positive"))]
    pub total_marks: Option<i32>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct QuizResponse {
    pub success: bool,
    pub data: Quiz,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct QuizListResponse {
    pub success: bool,
    pub data: Vec<Quiz>,
}
