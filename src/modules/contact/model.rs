use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ContactMessage {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: Option<String>,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateContactDto {
    #[validate(length(min = 1, max = 120, message = "name is required"))]
    pub name: String,
    #[validate(email(message = "email is invalid"))]
    pub email: String,
    pub phone: Option<String>,
    #[validate(length(max = 200, message = "subject must not exceed 200 characters"))]
    pub subject: Option<String>,
    #[validate(length(min = 1, max = 5000, message = "message is required"))]
    pub message: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ContactResponse {
    pub success: bool,
    pub data: ContactMessage,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ContactListResponse {
    pub success: bool,
    pub data: Vec<ContactMessage>,
}
