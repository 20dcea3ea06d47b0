use crate::db::errors::DbError;
use crate::types::EmployeeId;
use crate::validation::FieldErrors;
use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error as ThisError;

/// Key used for single-message error bodies. The trailing space is part of the wire format.
pub const ERROR_MESSAGE_KEY: &str = "error message ";

#[derive(ThisError, Debug)]
pub enum Error {
    /// Requested employee does not exist
    #[error("The user with user id {id} is not present.")]
    RecordNotFound { id: EmployeeId },

    /// Submission violated one or more field constraints
    #[error("Submission failed validation on {} field(s)", .0.len())]
    ValidationFailed(FieldErrors),

    /// Request body could not be parsed; rendered with axum's default rejection response
    #[error(transparent)]
    Rejected(#[from] JsonRejection),

    /// Database operation error
    #[error(transparent)]
    Database(#[from] DbError),

    /// Unexpected error with full context chain
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Error {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::RecordNotFound { .. } => StatusCode::NOT_FOUND,
            Error::ValidationFailed(_) => StatusCode::BAD_REQUEST,
            Error::Rejected(rejection) => rejection.status(),
            Error::Database(db_err) => match db_err {
                DbError::UniqueViolation { .. } => StatusCode::CONFLICT,
                DbError::CheckViolation { .. } => StatusCode::BAD_REQUEST,
                DbError::Other(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Error::Other(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns a user-safe error message, without leaking internal implementation details
    pub fn user_message(&self) -> String {
        match self {
            Error::RecordNotFound { .. } => self.to_string(),
            Error::ValidationFailed(_) => "Invalid input".to_string(),
            Error::Rejected(rejection) => rejection.body_text(),
            Error::Database(db_err) => match db_err {
                DbError::UniqueViolation { .. } if db_err.is_duplicate_email() => {
                    "An employee with this email address already exists".to_string()
                }
                DbError::UniqueViolation { .. } => "Resource already exists".to_string(),
                DbError::CheckViolation { .. } => "Invalid data provided".to_string(),
                DbError::Other(_) => "Database error occurred".to_string(),
            },
            Error::Other(_) => "Internal server error".to_string(),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        // Log full error details for debugging - different log levels based on severity
        match &self {
            Error::Database(DbError::Other(_)) | Error::Other(_) => {
                tracing::error!("Internal service error: {:#}", self);
            }
            Error::Database(_) => {
                tracing::warn!("Database constraint error: {}", self);
            }
            Error::RecordNotFound { .. } | Error::ValidationFailed(_) | Error::Rejected(_) => {
                tracing::debug!("Client error: {}", self);
            }
        }

        let status = self.status_code();

        match self {
            Error::ValidationFailed(errors) => (status, Json(errors)).into_response(),
            Error::Rejected(rejection) => rejection.into_response(),
            Error::RecordNotFound { .. } | Error::Database(DbError::UniqueViolation { .. } | DbError::CheckViolation { .. }) => {
                let body = json!({ ERROR_MESSAGE_KEY: self.user_message() });
                (status, Json(body)).into_response()
            }
            // Server faults get a plain-text body with no structure
            _ => (status, self.user_message()).into_response(),
        }
    }
}

/// Type alias for service operation results
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::Value;

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn not_found_renders_message_under_fixed_key() {
        let response = Error::RecordNotFound { id: 7 }.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_json(response).await;
        assert_eq!(body, json!({ "error message ": "The user with user id 7 is not present." }));
    }

    #[tokio::test]
    async fn validation_failure_renders_field_map() {
        let mut errors = FieldErrors::default();
        errors.insert("phone", "Invalid phone number");
        errors.insert("salary", "salary can't be negative");

        let response = Error::ValidationFailed(errors).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(
            body,
            json!({ "phone": "Invalid phone number", "salary": "salary can't be negative" })
        );
    }

    #[tokio::test]
    async fn duplicate_email_is_a_conflict() {
        let err = Error::from(DbError::UniqueViolation {
            constraint: Some("employee_email_key".to_string()),
            table: Some("employee".to_string()),
            message: "duplicate".to_string(),
        });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);

        let body = body_json(response).await;
        assert_eq!(
            body[ERROR_MESSAGE_KEY],
            "An employee with this email address already exists"
        );
    }

    #[tokio::test]
    async fn other_unique_constraints_are_a_generic_conflict() {
        let err = Error::from(DbError::UniqueViolation {
            constraint: Some("manager_email_idx".to_string()),
            table: Some("employee".to_string()),
            message: "duplicate".to_string(),
        });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);

        let body = body_json(response).await;
        assert_eq!(body[ERROR_MESSAGE_KEY], "Resource already exists");
    }

    #[tokio::test]
    async fn missing_row_from_the_driver_is_an_internal_error() {
        let response = Error::from(DbError::from(sqlx::Error::RowNotFound)).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"Database error occurred");
    }

    #[tokio::test]
    async fn unexpected_errors_do_not_leak_details() {
        let response = Error::from(anyhow::anyhow!("connection refused to 10.0.0.3")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"Internal server error");
    }
}
