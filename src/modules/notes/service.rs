use anyhow::Context;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use tutorbase_core::AppError;

use crate::modules::notes::model::{CreateNoteDto, Note, UpdateNoteDto};

const NOTE_COLUMNS: &str = "id, title, subject, content, class_level, created_at, updated_at";

pub struct NoteService;

impl NoteService {
    #[instrument(skip(db, dto))]
    pub async fn create_note(db: &PgPool, dto: CreateNoteDto) -> Result<Note, AppError> {
        let note = sqlx::query_as::<_, Note>(&format!(
            "INSERT INTO notes (title, subject, content, class_level)
             VALUES ($1, $2, $3, $4)
             RETURNING {NOTE_COLUMNS}"
        ))
        .bind(&dto.title)
        .bind(&dto.subject)
        .bind(&dto.content)
        .bind(&dto.class_level)
        .fetch_one(db)
        .await
        .context("Failed to create note")
        .map_err(AppError::database)?;

        Ok(note)
    }

    #[instrument(skip(db))]
    pub async fn get_all_notes(db: &PgPool) -> Result<Vec<Note>, AppError> {
        let notes = sqlx::query_as::<_, Note>(&format!(
            "SELECT {NOTE_COLUMNS} FROM notes ORDER BY created_at DESC"
        ))
        .fetch_all(db)
        .await
        .context("Failed to fetch notes")
        .map_err(AppError::database)?;

        Ok(notes)
    }

    #[instrument(skip(db))]
    pub async fn get_note_by_id(db: &PgPool, id: Uuid) -> Result<Note, AppError> {
        let note = sqlx::query_as::<_, Note>(&format!(
            "SELECT {NOTE_COLUMNS} FROM notes WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(db)
        .await
        .context("Failed to fetch note by ID")
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Note not found")))?;

        Ok(note)
    }

    #[instrument(skip(db, dto))]
    pub async fn update_note(db: &PgPool, id: Uuid, dto: UpdateNoteDto) -> Result<Note, AppError> {
        let existing = Self::get_note_by_id(db, id).await?;

        let title = dto.title.unwrap_or(existing.title);
        let subject = dto.subject.unwrap_or(existing.subject);
        let content = dto.content.unwrap_or(existing.content);
        let class_level = dto.class_level.or(existing.class_level);

        let note = sqlx::query_as::<_, Note>(&format!(
            "UPDATE notes
             SET title = $1, subject = $2, content = $3, class_level = $4, updated_at = NOW()
             WHERE id = $5
             RETURNING {NOTE_COLUMNS}"
        ))
        .bind(&title)
        .bind(&subject)
        .bind(&content)
        .bind(&class_level)
        .bind(id)
        .fetch_one(db)
        .await
        .context("Failed to update note")
        .map_err(AppError::database)?;

        Ok(note)
    }

    #[instrument(skip(db))]
    pub async fn delete_note(db: &PgPool, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM notes WHERE id = $1")
            .bind(id)
            .execute(db)
            .await
            .context("Failed to delete note")
            .map_err(AppError::database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!("Note not found")));
        }

        Ok(())
    }
}
