use sqlx::PgPool;
use tracing::{debug, error, info, instrument, warn};
use uuid::Uuid;

use tutorbase_core::AppError;

use crate::modules::teachers::model::{
    CreateTeacherDto, Teacher, TeacherSearchParams, UpdateTeacherDto,
};
use crate::uploads::StoredFiles;

const TEACHER_COLUMNS: &str = "id, name, email, phone, applied_for, qualification, about, \
     image_path, resume_path, created_at, updated_at";

pub struct TeacherService;

impl TeacherService {
    #[instrument(skip(db, dto, files), fields(teacher.email = %dto.email, db.operation = "INSERT", db.table = "teachers"))]
    pub async fn create_teacher(
        db: &PgPool,
        dto: CreateTeacherDto,
        files: StoredFiles,
    ) -> Result<Teacher, AppError> {
        debug!(teacher.name = %dto.name, applied_for = %dto.applied_for, "Creating teacher application");

        let teacher = sqlx::query_as::<_, Teacher>(&format!(
            "INSERT INTO teachers (name, email, phone, applied_for, qualification, about, image_path, resume_path)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {TEACHER_COLUMNS}"
        ))
        .bind(&dto.name)
        .bind(&dto.email)
        .bind(&dto.phone)
        .bind(&dto.applied_for)
        .bind(&dto.qualification)
        .bind(&dto.about)
        .bind(&files.image)
        .bind(&files.resume)
        .fetch_one(db)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e
                && db_err.is_unique_violation()
            {
                warn!(teacher.email = %dto.email, "Attempted to create teacher with existing email");
                return AppError::bad_request(anyhow::anyhow!(
                    "Teacher with email {} already exists",
                    dto.email
                ));
            }
            error!(error = %e, "Database error creating teacher");
            AppError::from(e)
        })?;

        info!(teacher.id = %teacher.id, teacher.email = %teacher.email, "Teacher created successfully");

        Ok(teacher)
    }

    #[instrument(skip(db), fields(db.operation = "SELECT", db.table = "teachers"))]
    pub async fn get_all_teachers(db: &PgPool) -> Result<Vec<Teacher>, AppError> {
        let teachers = sqlx::query_as::<_, Teacher>(&format!(
            "SELECT {TEACHER_COLUMNS} FROM teachers ORDER BY created_at DESC"
        ))
        .fetch_all(db)
        .await
        .map_err(|e| {
            error!(error = %e, "Database error fetching teachers");
            AppError::from(e)
        })?;

        Ok(teachers)
    }

    #[instrument(skip(db), fields(teacher.id = %id, db.operation = "SELECT", db.table = "teachers"))]
    pub async fn get_teacher_by_id(db: &PgPool, id: Uuid) -> Result<Teacher, AppError> {
        let teacher = sqlx::query_as::<_, Teacher>(&format!(
            "SELECT {TEACHER_COLUMNS} FROM teachers WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(db)
        .await
        .map_err(|e| {
            error!(teacher.id = %id, error = %e, "Database error fetching teacher");
            AppError::from(e)
        })?
        .ok_or_else(|| {
            debug!(teacher.id = %id, "Teacher not found");
            AppError::not_found(anyhow::anyhow!("Teacher not found"))
        })?;

        Ok(teacher)
    }

    #[instrument(skip(db, dto), fields(teacher.id = %id, db.operation = "UPDATE", db.table = "teachers"))]
    pub async fn update_teacher(
        db: &PgPool,
        id: Uuid,
        dto: UpdateTeacherDto,
    ) -> Result<Teacher, AppError> {
        let existing = Self::get_teacher_by_id(db, id).await?;

        let name = dto.name.unwrap_or(existing.name);
        let email = dto.email.unwrap_or(existing.email);
        let phone = dto.phone.unwrap_or(existing.phone);
        let applied_for = dto.applied_for.unwrap_or(existing.applied_for);
        let qualification = dto.qualification.or(existing.qualification);
        let about = dto.about.or(existing.about);

        let teacher = sqlx::query_as::<_, Teacher>(&format!(
            "UPDATE teachers
             SET name = $1, email = $2, phone = $3, applied_for = $4, qualification = $5,
                 about = $6, updated_at = NOW()
             WHERE id = $7
             RETURNING {TEACHER_COLUMNS}"
        ))
        .bind(&name)
        .bind(&email)
        .bind(&phone)
        .bind(&applied_for)
        .bind(&qualification)
        .bind(&about)
        .bind(id)
        .fetch_one(db)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e
                && db_err.is_unique_violation()
            {
                return AppError::bad_request(anyhow::anyhow!(
                    "Teacher with email {} already exists",
                    email
                ));
            }
            error!(teacher.id = %id, error = %e, "Database error updating teacher");
            AppError::from(e)
        })?;

        info!(teacher.id = %id, "Teacher updated successfully");

        Ok(teacher)
    }

    #[instrument(skip(db), fields(teacher.id = %id, db.operation = "DELETE", db.table = "teachers"))]
    pub async fn delete_teacher(db: &PgPool, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM teachers WHERE id = $1")
            .bind(id)
            .execute(db)
            .await
            .map_err(|e| {
                error!(teacher.id = %id, error = %e, "Database error deleting teacher");
                AppError::from(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!("Teacher not found")));
        }

        info!(teacher.id = %id, "Teacher deleted successfully");

        Ok(())
    }

    #[instrument(skip(db), fields(db.operation = "SELECT", db.table = "teachers"))]
    pub async fn get_teachers_by_subject(
        db: &PgPool,
        applied_for: &str,
    ) -> Result<Vec<Teacher>, AppError> {
        let teachers = sqlx::query_as::<_, Teacher>(&format!(
            "SELECT {TEACHER_COLUMNS} FROM teachers WHERE applied_for = $1 ORDER BY created_at DESC"
        ))
        .bind(applied_for)
        .fetch_all(db)
        .await
        .map_err(|e| {
            error!(error = %e, "Database error fetching teachers by subject");
            AppError::from(e)
        })?;

        Ok(teachers)
    }

    #[instrument(skip(db, params), fields(db.operation = "SELECT", db.table = "teachers"))]
    pub async fn search_teachers(
        db: &PgPool,
        params: TeacherSearchParams,
    ) -> Result<Vec<Teacher>, AppError> {
        debug!(
            filter.name = ?params.name,
            filter.subject = ?params.subject,
            "Searching teachers"
        );

        let mut query = format!("SELECT {TEACHER_COLUMNS} FROM teachers WHERE 1=1");
        let mut binds = Vec::new();

        if let Some(name) = &params.name {
            binds.push(format!("%{}%", name));
            query.push_str(&format!(" AND name ILIKE ${}", binds.len()));
        }

        if let Some(subject) = &params.subject {
            binds.push(format!("%{}%", subject));
            query.push_str(&format!(" AND applied_for ILIKE ${}", binds.len()));
        }

        query.push_str(" ORDER BY created_at DESC");

        let mut sql = sqlx::query_as::<_, Teacher>(&query);
        for bind in binds {
            sql = sql.bind(bind);
        }
        let teachers = sql.fetch_all(db).await.map_err(|e| {
            error!(error = %e, "Database error searching teachers");
            AppError::from(e)
        })?;

        debug!(returned = %teachers.len(), "Teacher search completed");

        Ok(teachers)
    }
}
