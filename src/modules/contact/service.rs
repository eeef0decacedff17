use anyhow::Context;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use tutorbase_core::AppError;

use crate::modules::contact::model::{ContactMessage, CreateContactDto};

const CONTACT_COLUMNS: &str = "id, name, email, phone, subject, message, created_at, updated_at";

pub struct ContactService;

impl ContactService {
    #[instrument(skip(db, dto))]
    pub async fn create_message(
        db: &PgPool,
        dto: CreateContactDto,
    ) -> Result<ContactMessage, AppError> {
        let message = sqlx::query_as::<_, ContactMessage>(&format!(
            "INSERT INTO contact_messages (name, email, phone, subject, message)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {CONTACT_COLUMNS}"
        ))
        .bind(&dto.name)
        .bind(&dto.email)
        .bind(&dto.phone)
        .bind(&dto.subject)
        .bind(&dto.message)
        .fetch_one(db)
        .await
        .context("Failed to store contact message")
        .map_err(AppError::database)?;

        Ok(message)
    }

    #[instrument(skip(db))]
    pub async fn get_all_messages(db: &PgPool) -> Result<Vec<ContactMessage>, AppError> {
        let messages = sqlx::query_as::<_, ContactMessage>(&format!(
            "SELECT {CONTACT_COLUMNS} FROM contact_messages ORDER BY created_at DESC"
        ))
        .fetch_all(db)
        .await
        .context("Failed to fetch contact messages")
        .map_err(AppError::database)?;

        Ok(messages)
    }

    #[instrument(skip(db))]
    pub async fn get_message_by_id(db: &PgPool, id: Uuid) -> Result<ContactMessage, AppError> {
        let message = sqlx::query_as::<_, ContactMessage>(&format!(
            "SELECT {CONTACT_COLUMNS} FROM contact_messages WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(db)
        .await
        .context("Failed to fetch contact message by ID")
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Contact message not found")))?;

        Ok(message)
    }

    #[instrument(skip(db))]
    pub async fn delete_message(db: &PgPool, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM contact_messages WHERE id = $1")
            .bind(id)
            .execute(db)
            .await
            .context("Failed to delete contact message")
            .map_err(AppError::database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!(
                "Contact message not found"
            )));
        }

        Ok(())
    }
}
