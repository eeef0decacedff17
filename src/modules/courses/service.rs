use anyhow::Context;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use tutorbase_core::AppError;

use crate::modules::courses::model::{Course, CreateCourseDto, UpdateCourseDto};

const COURSE_COLUMNS: &str = "id, title, subject, description, level, created_at, updated_at";

pub struct CourseService;

impl CourseService {
    #[instrument(skip(db, dto))]
    pub async fn create_course(db: &PgPool, dto: CreateCourseDto) -> Result<Course, AppError> {
        let course = sqlx::query_as::<_, Course>(&format!(
            "INSERT INTO courses (title, subject, description, level)
             VALUES ($1, $2, $3, $4)
             RETURNING {COURSE_COLUMNS}"
        ))
        .bind(&dto.title)
        .bind(&dto.subject)
        .bind(&dto.description)
        .bind(&dto.level)
        .fetch_one(db)
        .await
        .context("Failed to create course")
        .map_err(AppError::database)?;

        Ok(course)
    }

    #[instrument(skip(db))]
    pub async fn get_all_courses(db: &PgPool) -> Result<Vec<Course>, AppError> {
        let courses = sqlx::query_as::<_, Course>(&format!(
            "SELECT {COURSE_COLUMNS} FROM courses ORDER BY created_at DESC"
        ))
        .fetch_all(db)
        .await
        .context("Failed to fetch courses")
        .map_err(AppError::database)?;

        Ok(courses)
    }

    #[instrument(skip(db))]
    pub async fn get_course_by_id(db: &PgPool, id: Uuid) -> Result<Course, AppError> {
        let course = sqlx::query_as::<_, Course>(&format!(
            "SELECT {COURSE_COLUMNS} FROM courses WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(db)
        .await
        .context("Failed to fetch course by ID")
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Course not found")))?;

        Ok(course)
    }

    #[instrument(skip(db, dto))]
    pub async fn update_course(
        db: &PgPool,
        id: Uuid,
        dto: UpdateCourseDto,
    ) -> Result<Course, AppError> {
        let existing = Self::get_course_by_id(db, id).await?;

        let title = dto.title.unwrap_or(existing.title);
        let subject = dto.subject.unwrap_or(existing.subject);
        let description = dto.description.or(existing.description);
        let level = dto.level.or(existing.level);

        let course = sqlx::query_as::<_, Course>(&format!(
            "UPDATE courses
             SET title = $1, subject = $2, description = $3, level = $4, updated_at = NOW()
             WHERE id = $5
             RETURNING {COURSE_COLUMNS}"
        ))
        .bind(&title)
        .bind(&subject)
        .bind(&description)
        .bind(&level)
        .bind(id)
        .fetch_one(db)
        .await
        .context("Failed to update course")
        .map_err(AppError::database)?;

        Ok(course)
    }

    #[instrument(skip(db))]
    pub async fn delete_course(db: &PgPool, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM courses WHERE id = $1")
            .bind(id)
            .execute(db)
            .await
            .context("Failed to delete course")
            .map_err(AppError::database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!("Course not found")));
        }

        Ok(())
    }
}
