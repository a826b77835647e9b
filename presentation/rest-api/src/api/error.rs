use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

use business::domain::errors::RepositoryError;

#[derive(Object, Debug)]
pub struct ErrorResponse {
    pub name: String,
    pub message: String,
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}

pub fn error_response(
    status: StatusCode,
    name: &str,
    message: impl Into<String>,
) -> (StatusCode, Json<ErrorResponse>) {
    (
        status,
        Json(ErrorResponse {
            name: name.to_string(),
            message: message.into(),
        }),
    )
}

/// Status and error name for a failed store call. The message keeps the
/// transport detail so the client can show it.
pub fn repository_status(err: &RepositoryError) -> (StatusCode, &'static str) {
    match err {
        RepositoryError::NotFound => (StatusCode::NOT_FOUND, "NotFound"),
        RepositoryError::Duplicated => (StatusCode::CONFLICT, "Conflict"),
        RepositoryError::Unavailable(_) => (StatusCode::SERVICE_UNAVAILABLE, "BackendUnavailable"),
    }
}

/// Body for a path segment that is not a valid identifier.
pub fn invalid_id(message: &str) -> Json<ErrorResponse> {
    error_response(StatusCode::BAD_REQUEST, "ValidationError", message).1
}

impl IntoErrorResponse for RepositoryError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name) = repository_status(&self);
        error_response(status, name, self.to_string())
    }
}
