use anyhow::Context;
use sqlx::PgPool;
use tracing::{info, instrument};
use uuid::Uuid;

use tutorbase_core::AppError;

use crate::modules::blogs::model::{Blog, CreateBlogDto, UpdateBlogDto};

const BLOG_COLUMNS: &str = "id, title, content, author, image_path, created_at, updated_at";

pub struct BlogService;

impl BlogService {
    #[instrument(skip(db, dto, image_path))]
    pub async fn create_blog(
        db: &PgPool,
        dto: CreateBlogDto,
        image_path: Option<String>,
    ) -> Result<Blog, AppError> {
        let blog = sqlx::query_as::<_, Blog>(&format!(
            "INSERT INTO blogs (title, content, author, image_path)
             VALUES ($1, $2, $3, $4)
             RETURNING {BLOG_COLUMNS}"
        ))
        .bind(&dto.title)
        .bind(&dto.content)
        .bind(&dto.author)
        .bind(&image_path)
        .fetch_one(db)
        .await
        .context("Failed to create blog")
        .map_err(AppError::database)?;

        info!(blog.id = %blog.id, "Blog created successfully");

        Ok(blog)
    }

    #[instrument(skip(db))]
    pub async fn get_all_blogs(db: &PgPool) -> Result<Vec<Blog>, AppError> {
        let blogs = sqlx::query_as::<_, Blog>(&format!(
            "SELECT {BLOG_COLUMNS} FROM blogs ORDER BY created_at DESC"
        ))
        .fetch_all(db)
        .await
        .context("Failed to fetch blogs")
        .map_err(AppError::database)?;

        Ok(blogs)
    }

    #[instrument(skip(db))]
    pub async fn get_blog_by_id(db: &PgPool, id: Uuid) -> Result<Blog, AppError> {
        let blog = sqlx::query_as::<_, Blog>(&format!(
            "SELECT {BLOG_COLUMNS} FROM blogs WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(db)
        .await
        .context("Failed to fetch blog by ID")
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Blog not found")))?;

        Ok(blog)
    }

    #[instrument(skip(db, dto))]
    pub async fn update_blog(db: &PgPool, id: Uuid, dto: UpdateBlogDto) -> Result<Blog, AppError> {
        let existing = Self::get_blog_by_id(db, id).await?;

        let title = dto.title.unwrap_or(existing.title);
        let content = dto.content.unwrap_or(existing.content);
        let author = dto.author.unwrap_or(existing.author);

        let blog = sqlx::query_as::<_, Blog>(&format!(
            "UPDATE blogs
             SET title = $1, content = $2, author = $3, updated_at = NOW()
             WHERE id = $4
             RETURNING {BLOG_COLUMNS}"
        ))
        .bind(&title)
        .bind(&content)
        .bind(&author)
        .bind(id)
        .fetch_one(db)
        .await
        .context("Failed to update blog")
        .map_err(AppError::database)?;

        Ok(blog)
    }

    #[instrument(skip(db))]
    pub async fn delete_blog(db: &PgPool, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM blogs WHERE id = $1")
            .bind(id)
            .execute(db)
            .await
            .context("Failed to delete blog")
            .map_err(AppError::database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!("Blog not found")));
        }

        // Comments referencing this blog are left in place; readers treat
        // the missing parent as deleted.
        info!(blog.id = %id, "Blog deleted successfully");

        Ok(())
    }
}
