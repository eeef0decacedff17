use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Club {
    pub id: Uuid,
    pub name: String,
    pub category: Option<String>,
    pub description: Option<String>,
    pub meeting_day: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateClubDto {
    #[validate(length(min = 1, max = 120, message = "name is required"))]
    pub name: String,
    pub category: Option<String>,
    #[validate(length(max = 2000, message = "description must not exceed 2000 characters"))]
    pub description: Option<String>,
    pub meeting_day: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateClubDto {
    #[validate(length(min = 1, max = 120, message = "name is required"))]
    pub name: Option<String>,
    pub category: Option<String>,
    #[validate(length(max = 2000, message = "description must not exceed 2000 characters"))]
    pub description: Option<String>,
    pub meeting_day: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ClubResponse {
    pub success: bool,
    pub data: Club,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ClubListResponse {
    pub success: bool,
    pub data: Vec<Club>,
}
