use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::user::errors::UserError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_response};

impl IntoErrorResponse for UserError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        match self {
            UserError::EmailEmpty => {
                error_response(StatusCode::BAD_REQUEST, "ValidationError", "user.email_empty")
            }
            UserError::NotFound => {
                error_response(StatusCode::NOT_FOUND, "NotFound", "user.not_found")
            }
            UserError::Repository(err) => err.into_error_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::errors::RepositoryError;

    #[test]
    fn should_map_missing_user_to_not_found() {
        let (status, body) = UserError::NotFound.into_error_response();

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.0.message, "user.not_found");
    }

    #[test]
    fn should_keep_backend_message_when_store_is_down() {
        let (status, body) =
            UserError::Repository(RepositoryError::unavailable("timeout")).into_error_response();

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body.0.message, "repository.unavailable: timeout");
    }
}
