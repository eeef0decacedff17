use anyhow::Context;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use tutorbase_core::AppError;

use crate::modules::comments::model::{Comment, CreateCommentDto, UpdateCommentDto};

const COMMENT_COLUMNS: &str = "id, blog_id, author, content, created_at, updated_at";

pub struct CommentService;

impl CommentService {
    /// The blog reference is not checked: a comment may outlive its blog,
    /// and clients render a missing parent as deleted.
    #[instrument(skip(db, dto))]
    pub async fn create_comment(db: &PgPool, dto: CreateCommentDto) -> Result<Comment, AppError> {
        let comment = sqlx::query_as::<_, Comment>(&format!(
            "INSERT INTO comments (blog_id, author, content)
             VALUES ($1, $2, $3)
             RETURNING {COMMENT_COLUMNS}"
        ))
        .bind(dto.blog_id)
        .bind(&dto.author)
        .bind(&dto.content)
        .fetch_one(db)
        .await
        .context("Failed to create comment")
        .map_err(AppError::database)?;

        Ok(comment)
    }

    #[instrument(skip(db))]
    pub async fn get_all_comments(db: &PgPool) -> Result<Vec<Comment>, AppError> {
        let comments = sqlx::query_as::<_, Comment>(&format!(
            "SELECT {COMMENT_COLUMNS} FROM comments ORDER BY created_at DESC"
        ))
        .fetch_all(db)
        .await
        .context("Failed to fetch comments")
        .map_err(AppError::database)?;

        Ok(comments)
    }

    #[instrument(skip(db))]
    pub async fn get_comments_by_blog(db: &PgPool, blog_id: Uuid) -> Result<Vec<Comment>, AppError> {
        let comments = sqlx::query_as::<_, Comment>(&format!(
            "SELECT {COMMENT_COLUMNS} FROM comments WHERE blog_id = $1 ORDER BY created_at ASC"
        ))
        .bind(blog_id)
        .fetch_all(db)
        .await
        .context("Failed to fetch comments for blog")
        .map_err(AppError::database)?;

        Ok(comments)
    }

    #[instrument(skip(db, dto))]
    pub async fn update_comment(
        db: &PgPool,
        id: Uuid,
        dto: UpdateCommentDto,
    ) -> Result<Comment, AppError> {
        let comment = sqlx::query_as::<_, Comment>(&format!(
            "UPDATE comments SET content = $1, updated_at = NOW()
             WHERE id = $2
             RETURNING {COMMENT_COLUMNS}"
        ))
        .bind(&dto.content)
        .bind(id)
        .fetch_optional(db)
        .await
        .context("Failed to update comment")
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Comment not found")))?;

        Ok(comment)
    }

    #[instrument(skip(db))]
    pub async fn delete_comment(db: &PgPool, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(id)
            .execute(db)
            .await
            .context("Failed to delete comment")
            .map_err(AppError::database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!("Comment not found")));
        }

        Ok(())
    }
}
