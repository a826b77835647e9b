use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::list::errors::ListError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_response};

impl IntoErrorResponse for ListError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        match self {
            ListError::TitleEmpty => {
                error_response(StatusCode::BAD_REQUEST, "ValidationError", "list.title_empty")
            }
            ListError::NotFound => {
                error_response(StatusCode::NOT_FOUND, "NotFound", "list.not_found")
            }
            ListError::NotAuthenticated => error_response(
                StatusCode::UNAUTHORIZED,
                "NotAuthenticated",
                "list.not_authenticated",
            ),
            ListError::Repository(err) => err.into_error_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::errors::RepositoryError;

    #[test]
    fn should_map_each_list_error_to_its_status() {
        let cases = [
            (ListError::TitleEmpty, StatusCode::BAD_REQUEST),
            (ListError::NotFound, StatusCode::NOT_FOUND),
            (ListError::NotAuthenticated, StatusCode::UNAUTHORIZED),
            (
                ListError::Repository(RepositoryError::unavailable("down")),
                StatusCode::SERVICE_UNAVAILABLE,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(err.into_error_response().0, expected);
        }
    }
}
