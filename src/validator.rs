use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use tutorbase_core::AppError;

/// Flatten `validator` output into one message per failed field.
pub fn collect_errors(errors: &ValidationErrors) -> Vec<String> {
    let mut messages: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| {
                error
                    .message
                    .as_ref()
                    .map(|msg| msg.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field))
            })
        })
        .collect();
    messages.sort();
    messages
}

/// Validate a deserialized DTO, rejecting with the aggregated field errors.
///
/// Used directly by multipart endpoints, where the DTO is built from
/// collected form fields rather than a JSON body.
pub fn validate_dto<T: Validate>(dto: &T) -> Result<(), AppError> {
    dto.validate()
        .map_err(|errors| AppError::validation(collect_errors(&errors)))
}

/// JSON extractor that validates the body before the handler runs.
///
/// Deserialization problems and failed validation rules both short-circuit
/// with a 400 carrying the aggregated list of field errors; the handler is
/// never invoked and the request is not mutated.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                let error_msg = rejection.body_text();

                if error_msg.contains("missing field") {
                    let field = error_msg
                        .split("missing field `")
                        .nth(1)
                        .and_then(|s| s.split('`').next())
                        .unwrap_or("unknown");
                    return AppError::validation(vec![format!("{} is required", field)]);
                }

                if error_msg.contains("invalid type") {
                    return AppError::validation(vec!["Invalid field type in request".to_string()]);
                }

                if matches!(rejection, JsonRejection::MissingJsonContentType(_)) {
                    return AppError::bad_request(anyhow::anyhow!(
                        "Missing 'Content-Type: application/json' header"
                    ));
                }

                AppError::bad_request(anyhow::anyhow!("Invalid request body"))
            })?;

        validate_dto(&value)?;

        Ok(ValidatedJson(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, Validate)]
    struct Signup {
        #[validate(length(min = 1, message = "name is required"))]
        name: String,
        #[validate(email(message = "email is invalid"))]
        email: String,
    }

    #[test]
    fn aggregates_one_message_per_failed_field() {
        let dto = Signup {
            name: String::new(),
            email: "not-an-email".to_string(),
        };

        let err = validate_dto(&dto).unwrap_err();
        assert_eq!(
            err.details,
            Some(vec![
                "email is invalid".to_string(),
                "name is required".to_string(),
            ])
        );
    }

    #[test]
    fn passes_valid_dtos_through() {
        let dto = Signup {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
        };
        assert!(validate_dto(&dto).is_ok());
    }
}
