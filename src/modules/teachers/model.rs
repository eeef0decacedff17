use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

/// Subjects a teacher can apply for.
pub const SUBJECTS: &[&str] = &[
    "mathematics",
    "physics",
    "chemistry",
    "biology",
    "english",
    "computer-science",
    "economics",
    "history",
    "geography",
];

fn validate_subject(value: &str) -> Result<(), ValidationError> {
    if SUBJECTS.contains(&value) {
        return Ok(());
    }
    Err(ValidationError::new("subject"))
}

#[derive(Debug, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Teacher {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub applied_for: String,
    pub qualification: Option<String>,
    pub about: Option<String>,
    /// Storage key of the profile image, served under `/uploads`
    pub image_path: Option<String>,
    /// Storage key of the résumé, served under `/uploads`
    pub resume_path: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateTeacherDto {
    #[validate(length(min = 1, max = 120, message = "name is required"))]
    pub name: String,
    #[validate(email(message = "email is invalid"))]
    pub email: String,
    #[validate(length(min = 5, max = 20, message = "phone must be 5 to 20 characters"))]
    pub phone: String,
    #[validate(custom(
        function = validate_subject,
        message = "applied_for must be one of the offered subjects"
    ))]
    pub applied_for: String,
    pub qualification: Option<String>,
    #[validate(length(max = 2000, message = "about must not exceed 2000 characters"))]
    pub about: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateTeacherDto {
    #[validate(length(min = 1, max = 120, message = "name is required"))]
    pub name: Option<String>,
    #[validate(email(message = "email is invalid"))]
    pub email: Option<String>,
    #[validate(length(min = 5, max = 20, message = "phone must be 5 to 20 characters"))]
    pub phone: Option<String>,
    #[validate(custom(
        function = validate_subject,
        message = "applied_for must be one of the offered subjects"
    ))]
    pub applied_for: Option<String>,
    pub qualification: Option<String>,
    #[validate(length(max = 2000, message = "about must not exceed 2000 characters"))]
    pub about: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema, utoipa::IntoParams)]
pub struct TeacherSearchParams {
    pub name: Option<String>,
    pub subject: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TeacherResponse {
    pub success: bool,
    pub teacher: Teacher,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TeacherListResponse {
    pub success: bool,
    pub teachers: Vec<Teacher>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto(applied_for: &str) -> CreateTeacherDto {
        CreateTeacherDto {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            phone: "08012345678".to_string(),
            applied_for: applied_for.to_string(),
            qualification: Some("BSc Mathematics".to_string()),
            about: None,
        }
    }

    #[test]
    fn accepts_offered_subjects() {
        for subject in SUBJECTS {
            assert!(dto(subject).validate().is_ok(), "{} should be valid", subject);
        }
    }

    #[test]
    fn rejects_unknown_subjects() {
        assert!(dto("astrology").validate().is_err());
        assert!(dto("").validate().is_err());
    }

    #[test]
    fn rejects_malformed_email() {
        let mut teacher = dto("physics");
        teacher.email = "not-an-email".to_string();
        assert!(teacher.validate().is_err());
    }
}
