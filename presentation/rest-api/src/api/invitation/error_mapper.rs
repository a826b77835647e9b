use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::invitation::errors::InvitationError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_response, repository_status};

impl IntoErrorResponse for InvitationError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        match self {
            InvitationError::DuplicateInvitation => {
                error_response(StatusCode::CONFLICT, "DuplicateInvitation", "invitation.duplicate")
            }
            InvitationError::NotAuthenticated => error_response(
                StatusCode::UNAUTHORIZED,
                "NotAuthenticated",
                "invitation.not_authenticated",
            ),
            InvitationError::UserNotFound => error_response(
                StatusCode::NOT_FOUND,
                "NotFound",
                "invitation.user_not_found",
            ),
            InvitationError::EmailEmpty => error_response(
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "invitation.email_empty",
            ),
            InvitationError::NotFound => {
                error_response(StatusCode::NOT_FOUND, "NotFound", "invitation.not_found")
            }
            InvitationError::NotParticipant => error_response(
                StatusCode::FORBIDDEN,
                "Forbidden",
                "invitation.not_participant",
            ),
            InvitationError::ListMismatch => error_response(
                StatusCode::FORBIDDEN,
                "Forbidden",
                "invitation.list_mismatch",
            ),
            InvitationError::AlreadyRejected => error_response(
                StatusCode::CONFLICT,
                "AlreadyRejected",
                "invitation.already_rejected",
            ),
            InvitationError::CollaboratorLink(source) => {
                let (status, _) = repository_status(&source);
                error_response(
                    status,
                    "CollaboratorLinkFailed",
                    format!("invitation.collaborator_link_failed: {source}"),
                )
            }
            InvitationError::Repository(err) => err.into_error_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::errors::RepositoryError;

    #[test]
    fn should_map_duplicate_to_conflict() {
        let (status, body) = InvitationError::DuplicateInvitation.into_error_response();

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body.0.message, "invitation.duplicate");
    }

    #[test]
    fn should_map_unknown_email_to_not_found() {
        let (status, _) = InvitationError::UserNotFound.into_error_response();
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[test]
    fn should_forbid_acting_on_someone_elses_invitation() {
        let (status, body) = InvitationError::NotParticipant.into_error_response();

        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body.0.message, "invitation.not_participant");
        assert_eq!(
            InvitationError::ListMismatch.into_error_response().0,
            StatusCode::FORBIDDEN
        );
    }

    #[test]
    fn should_explain_failed_collaborator_link() {
        let err = InvitationError::CollaboratorLink(RepositoryError::unavailable("offline"));

        let (status, body) = err.into_error_response();

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(
            body.0.message,
            "invitation.collaborator_link_failed: repository.unavailable: offline"
        );
    }
}
