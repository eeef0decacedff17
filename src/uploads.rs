//! Multipart collection against declarative upload policies.
//!
//! Each multipart endpoint declares which file fields it accepts and the
//! combined byte budget for them. Collection buffers the payloads and
//! validates everything (file metadata, sizes, and the DTO built from the
//! text fields) before a single byte reaches disk, so a rejected request
//! persists nothing.

use std::collections::HashMap;

use axum::body::Bytes;
use axum::extract::Multipart;
use serde::de::DeserializeOwned;
use validator::Validate;

use tutorbase_core::{AppError, FileMetadata, StorageError, UploadKind, UploadStorage, storage};

use crate::validator::validate_dto;

/// Declarative description of what a multipart endpoint accepts: the file
/// field names with their kinds, and the combined size budget.
pub struct UploadPolicy {
    pub fields: &'static [(&'static str, UploadKind)],
    pub combined_max_bytes: usize,
}

/// Teacher applications: an optional profile image and an optional résumé,
/// 10 MiB combined.
pub const TEACHER_FILES: UploadPolicy = UploadPolicy {
    fields: &[("image", UploadKind::Image), ("resume", UploadKind::Resume)],
    combined_max_bytes: 10 * 1024 * 1024,
};

/// Standalone image uploads (blog posts): 5 MiB.
pub const BLOG_IMAGE: UploadPolicy = UploadPolicy {
    fields: &[("image", UploadKind::Image)],
    combined_max_bytes: 5 * 1024 * 1024,
};

/// Body-size ceiling for multipart routes. Set above every policy budget so
/// oversized files are answered by the pipeline's 400, not the generic 413;
/// only bodies beyond this are cut off by the server itself.
pub const MULTIPART_BODY_LIMIT: usize = 16 * 1024 * 1024;

struct PendingFile {
    kind: UploadKind,
    meta: FileMetadata,
    bytes: Bytes,
}

/// Storage keys of the files written for one request.
#[derive(Debug, Default)]
pub struct StoredFiles {
    pub image: Option<String>,
    pub resume: Option<String>,
}

/// A fully validated multipart request, not yet written to disk.
pub struct PendingUpload<T> {
    pub dto: T,
    files: Vec<PendingFile>,
}

impl<T> PendingUpload<T> {
    /// Write the buffered files, returning the DTO and the storage keys.
    pub async fn store(self, storage: &UploadStorage) -> Result<(T, StoredFiles), AppError> {
        let mut stored = StoredFiles::default();

        for file in self.files {
            let key = storage
                .save(file.kind, &file.meta, &file.bytes)
                .await
                .map_err(AppError::upload)?;
            match file.kind {
                UploadKind::Image => stored.image = Some(key),
                UploadKind::Resume => stored.resume = Some(key),
            }
        }

        Ok((self.dto, stored))
    }
}

/// Drain a multipart request against a policy.
///
/// File fields are resolved through the policy's field table; a file field
/// the policy does not name is rejected outright. Text fields are collected
/// and deserialized into the endpoint's DTO, which then runs the same
/// validation rules as JSON bodies.
pub async fn collect<T>(
    mut multipart: Multipart,
    policy: &UploadPolicy,
) -> Result<PendingUpload<T>, AppError>
where
    T: DeserializeOwned + Validate,
{
    let mut fields: HashMap<String, serde_json::Value> = HashMap::new();
    let mut files: Vec<PendingFile> = Vec::new();
    let mut combined_bytes = 0usize;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::bad_request(anyhow::anyhow!("Malformed multipart request: {}", e)))?
    {
        let name = field.name().unwrap_or("").to_string();

        if let Some(filename) = field.file_name() {
            let Some(&(_, kind)) = policy.fields.iter().find(|(f, _)| *f == name) else {
                return Err(AppError::upload(StorageError::UnexpectedField {
                    field: name,
                }));
            };

            let filename = filename.to_string();
            let mime_type = field
                .content_type()
                .unwrap_or("application/octet-stream")
                .to_string();

            let bytes = field.bytes().await.map_err(|e| {
                AppError::bad_request(anyhow::anyhow!("Failed to read file '{}': {}", name, e))
            })?;

            let meta = FileMetadata {
                filename,
                mime_type,
                size_bytes: bytes.len(),
            };
            storage::validate(kind, &meta).map_err(AppError::upload)?;

            combined_bytes += bytes.len();
            if combined_bytes > policy.combined_max_bytes {
                return Err(AppError::upload(StorageError::CombinedTooLarge {
                    max_bytes: policy.combined_max_bytes,
                }));
            }

            files.push(PendingFile { kind, meta, bytes });
        } else {
            let text = field.text().await.map_err(|e| {
                AppError::bad_request(anyhow::anyhow!("Failed to read field '{}': {}", name, e))
            })?;
            fields.insert(name, serde_json::Value::String(text));
        }
    }

    let dto: T = serde_json::from_value(serde_json::Value::Object(
        fields.into_iter().collect(),
    ))
    .map_err(|e| {
        let error_msg = e.to_string();
        if error_msg.contains("missing field") {
            let field = error_msg
                .split("missing field `")
                .nth(1)
                .and_then(|s| s.split('`').next())
                .unwrap_or("unknown");
            return AppError::validation(vec![format!("{} is required", field)]);
        }
        AppError::validation(vec!["Invalid form field in request".to_string()])
    })?;

    validate_dto(&dto)?;

    Ok(PendingUpload { dto, files })
}
