use anyhow::Context;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use tutorbase_core::AppError;

use crate::modules::quizzes::model::{CreateQuizDto, Quiz, UpdateQuizDto};

const QUIZ_COLUMNS: &str =
    "id, title, subject, class_level, duration_minutes, total_marks, created_at, updated_at";

pub struct QuizService;

impl QuizService {
    #[instrument(skip(db, dto))]
    pub async fn create_quiz(db: &PgPool, dto: CreateQuizDto) -> Result<Quiz, AppError> {
        let quiz = sqlx::query_as::<_, Quiz>(&format!(
            "INSERT INTO quizzes (title, subject, class_level, duration_minutes, total_marks)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {QUIZ_COLUMNS}"
        ))
        .bind(&dto.title)
        .bind(&dto.subject)
        .bind(&dto.class_level)
        .bind(dto.duration_minutes)
        .bind(dto.total_marks)
        .fetch_one(db)
        .await
        .context("Failed to create quiz")
        .map_err(AppError::database)?;

        Ok(quiz)
    }

    #[instrument(skip(db))]
    pub async fn get_all_quizzes(db: &PgPool) -> Result<Vec<Quiz>, AppError> {
        let quizzes = sqlx::query_as::<_, Quiz>(&format!(
            "SELECT {QUIZ_COLUMNS} FROM quizzes ORDER BY created_at DESC"
        ))
        .fetch_all(db)
        .await
        .context("Failed to fetch quizzes")
        .map_err(AppError::database)?;

        Ok(quizzes)
    }

    #[instrument(skip(db))]
    pub async fn get_quiz_by_id(db: &PgPool, id: Uuid) -> Result<Quiz, AppError> {
        let quiz = sqlx::query_as::<_, Quiz>(&format!(
            "SELECT {QUIZ_COLUMNS} FROM quizzes WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(db)
        .await
        .context("Failed to fetch quiz by ID")
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Quiz not found")))?;

        Ok(quiz)
    }

    #[instrument(skip(db, dto))]
    pub async fn update_quiz(db: &PgPool, id: Uuid, dto: UpdateQuizDto) -> Result<Quiz, AppError> {
        let existing = Self::get_quiz_by_id(db, id).await?;

        let title = dto.title.unwrap_or(existing.title);
        let subject = dto.subject.unwrap_or(existing.subject);
        let class_level = dto.class_level.or(existing.class_level);
        let duration_minutes = dto.duration_minutes.or(existing.duration_minutes);
        let total_marks = dto.total_marks.or(existing.total_marks);

        let quiz = sqlx::query_as::<_, Quiz>(&format!(
            "UPDATE quizzes
             SET title = $1, subject = $2, class_level = $3, duration_minutes = $4,
                 total_marks = $5, updated_at = NOW()
             WHERE id = $6
             RETURNING {QUIZ_COLUMNS}"
        ))
        .bind(&title)
        .bind(&subject)
        .bind(&class_level)
        .bind(duration_minutes)
        .bind(total_marks)
        .bind(id)
        .fetch_one(db)
        .await
        .context("Failed to update quiz")
        .map_err(AppError::database)?;

        Ok(quiz)
    }

    #[instrument(skip(db))]
    pub async fn delete_quiz(db: &PgPool, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM quizzes WHERE id = $1")
            .bind(id)
            .execute(db)
            .await
            .context("Failed to delete quiz")
            .map_err(AppError::database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!("Quiz not found")));
        }

        Ok(())
    }
}
