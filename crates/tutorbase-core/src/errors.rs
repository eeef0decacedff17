use anyhow::Error;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::storage::StorageError;

/// Application error carrying an HTTP status and, for validation failures,
/// the aggregated per-field messages.
#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub error: Error,
    pub details: Option<Vec<String>>,
}

impl AppError {
    pub fn new<E>(status: StatusCode, err: E) -> Self
    where
        E: Into<Error>,
    {
        Self {
            status,
            error: err.into(),
            details: None,
        }
    }

    pub fn internal<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, err)
    }

    pub fn not_found<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::NOT_FOUND, err)
    }

    pub fn bad_request<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::BAD_REQUEST, err)
    }

    pub fn database<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, err)
    }

    /// A 400 carrying the aggregated list of field errors.
    pub fn validation(errors: Vec<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error: anyhow::anyhow!("Validation failed"),
            details: Some(errors),
        }
    }

    /// Map an upload pipeline error onto its HTTP status: known size/type
    /// violations become 400, anything else surfaces unchanged as 500.
    pub fn upload(err: StorageError) -> Self {
        match err {
            StorageError::Io(_) => Self::internal(err),
            _ => Self::bad_request(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let mut body = json!({
            "success": false,
            "message": self.error.to_string(),
        });
        if let Some(details) = &self.details {
            body["errors"] = json!(details);
        }

        (self.status, Json(body)).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<Error>,
{
    fn from(err: E) -> Self {
        AppError::internal(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_keeps_field_messages() {
        let err = AppError::validation(vec![
            "name is required".to_string(),
            "email is invalid".to_string(),
        ]);

        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.details.as_ref().map(Vec::len), Some(2));
    }

    #[test]
    fn upload_type_violations_map_to_bad_request() {
        let err = AppError::upload(StorageError::InvalidImageType {
            filename: "notes.txt".to_string(),
            mime_type: "text/plain".to_string(),
        });
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn upload_io_errors_map_to_internal() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = AppError::upload(StorageError::Io(io));
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
