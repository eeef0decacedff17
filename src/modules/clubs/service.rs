use anyhow::Context;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use tutorbase_core::AppError;

use crate::modules::clubs::model::{Club, CreateClubDto, UpdateClubDto};

const CLUB_COLUMNS: &str = "id, name, category, description, meeting_day, created_at, updated_at";

pub struct ClubService;

impl ClubService {
    #[instrument(skip(db, dto))]
    pub async fn create_club(db: &PgPool, dto: CreateClubDto) -> Result<Club, AppError> {
        let club = sqlx::query_as::<_, Club>(&format!(
            "INSERT INTO clubs (name, category, description, meeting_day)
             VALUES ($1, $2, $3, $4)
             RETURNING {CLUB_COLUMNS}"
        ))
        .bind(&dto.name)
        .bind(&dto.category)
        .bind(&dto.description)
        .bind(&dto.meeting_day)
        .fetch_one(db)
        .await
        .context("Failed to create club")
        .map_err(AppError::database)?;

        Ok(club)
    }

    #[instrument(skip(db))]
    pub async fn get_all_clubs(db: &PgPool) -> Result<Vec<Club>, AppError> {
        let clubs = sqlx::query_as::<_, Club>(&format!(
            "SELECT {CLUB_COLUMNS} FROM clubs ORDER BY name"
        ))
        .fetch_all(db)
        .await
        .context("Failed to fetch clubs")
        .map_err(AppError::database)?;

        Ok(clubs)
    }

    #[instrument(skip(db))]
    pub async fn get_club_by_id(db: &PgPool, id: Uuid) -> Result<Club, AppError> {
        let club = sqlx::query_as::<_, Club>(&format!(
            "SELECT {CLUB_COLUMNS} FROM clubs WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(db)
        .await
        .context("Failed to fetch club by ID")
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Club not found")))?;

        Ok(club)
    }

    #[instrument(skip(db, dto))]
    pub async fn update_club(db: &PgPool, id: Uuid, dto: UpdateClubDto) -> Result<Club, AppError> {
        let existing = Self::get_club_by_id(db, id).await?;

        let name = dto.name.unwrap_or(existing.name);
        let category = dto.category.or(existing.category);
        let description = dto.description.or(existing.description);
        let meeting_day = dto.meeting_day.or(existing.meeting_day);

        let club = sqlx::query_as::<_, Club>(&format!(
            "UPDATE clubs
             SET name = $1, category = $2, description = $3, meeting_day = $4, updated_at = NOW()
             WHERE id = $5
             RETURNING {CLUB_COLUMNS}"
        ))
        .bind(&name)
        .bind(&category)
        .bind(&description)
        .bind(&meeting_day)
        .bind(id)
        .fetch_one(db)
        .await
        .context("Failed to update club")
        .map_err(AppError::database)?;

        Ok(club)
    }

    #[instrument(skip(db))]
    pub async fn delete_club(db: &PgPool, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM clubs WHERE id = $1")
            .bind(id)
            .execute(db)
            .await
            .context("Failed to delete club")
            .map_err(AppError::database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!("Club not found")));
        }

        Ok(())
    }
}
