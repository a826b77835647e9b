use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::item::errors::ListItemError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_response};

impl IntoErrorResponse for ListItemError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        match self {
            ListItemError::NameEmpty => error_response(
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "list_item.name_empty",
            ),
            ListItemError::NotFound => {
                error_response(StatusCode::NOT_FOUND, "NotFound", "list_item.not_found")
            }
            ListItemError::Repository(err) => err.into_error_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::errors::RepositoryError;

    #[test]
    fn should_map_blank_name_to_bad_request() {
        let (status, body) = ListItemError::NameEmpty.into_error_response();

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.0.name, "ValidationError");
    }

    #[test]
    fn should_map_missing_record_to_not_found() {
        let (status, _) =
            ListItemError::Repository(RepositoryError::NotFound).into_error_response();

        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
