use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Student {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub class_level: String,
    pub guardian_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateStudentDto {
    #[validate(length(min = 1, max = 120, message = "name is required"))]
    pub name: String,
    #[validate(email(message = "email is invalid"))]
    pub email: String,
    #[validate(length(min = 5, max = 20, message = "phone must be 5 to 20 characters"))]
    pub phone: String,
    #[validate(length(min = 1, max = 40, message = "class_level is required"))]
    pub class_level: String,
    pub guardian_name: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateStudentDto {
    #[validate(length(min = 1, max = 120, message = "name is required"))]
    pub name: Option<String>,
    #[validate(email(message = "email is invalid"))]
    pub email: Option<String>,
    #[validate(length(min = 5, max = 20, message = "phone must be 5 to 20 characters"))]
    pub phone: Option<String>,
    #[validate(length(min = 1, max = 40, message = "class_level is required"))]
    pub class_level: Option<String>,
    pub guardian_name: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct StudentResponse {
    pub success: bool,
    pub student: Student,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct StudentListResponse {
    pub success: bool,
    pub students: Vec<Student>,
}
