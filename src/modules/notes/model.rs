use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Note {
    pub id: Uuid,
    pub title: String,
    pub subject: String,
    pub content: String,
    pub class_level: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateNoteDto {
    #[validate(length(min = 1, max = 200, message = "title is required"))]
    pub title: String,
    #[validate(length(min = 1, max = 100, message = "subject is required"))]
    pub subject: String,
    #[validate(length(min = 1, message = "content is required"))]
    pub content: String,
    pub class_level: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateNoteDto {
    #[validate(length(min = 1, max = 200, message = "title is required"))]
    pub title: Option<String>,
    #[validate(length(min = 1, max = 100, message = "subject is required"))]
    pub subject: Option<String>,
    #[validate(length(min = 1, message = "content is required"))]
    pub content: Option<String>,
    pub class_level: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct NoteResponse {
    pub success: bool,
    pub data: Note,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct NoteListResponse {
    pub success: bool,
    pub data: Vec<Note>,
}
