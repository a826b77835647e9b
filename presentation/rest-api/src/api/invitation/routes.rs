use std::sync::Arc;

use futures_util::stream::BoxStream;
use poem_openapi::{
    OpenApi,
    param::Path,
    payload::{EventStream, Json},
};
use uuid::Uuid;

use business::domain::invitation::model::{InvitationDecision, InvitationDirection};
use business::domain::invitation::use_cases::accept::{
    AcceptInvitationParams, AcceptInvitationUseCase,
};
use business::domain::invitation::use_cases::delete::{
    DeleteInvitationParams, DeleteInvitationUseCase,
};
use business::domain::invitation::use_cases::invite_by_email::{
    InviteByEmailParams, InviteByEmailUseCase,
};
use business::domain::invitation::use_cases::subscribe::{
    SubscribeInvitationsParams, SubscribeInvitationsUseCase,
};
use business::domain::invitation::use_cases::update_status::{
    UpdateInvitationStatusParams, UpdateInvitationStatusUseCase,
};
use business::domain::shared::value_objects::UserId;

use crate::api::error::{ErrorResponse, IntoErrorResponse, invalid_id};
use crate::api::invitation::dto::{
    AcceptInvitationRequest, InvitationResponse, InvitationsEvent, InviteRequest,
};
use crate::api::live::{event_stream, queued_states};
use crate::api::security::FirebaseBearer;
use crate::api::tags::ApiTags;

pub struct InvitationApi {
    invite_use_case: Arc<dyn InviteByEmailUseCase>,
    accept_use_case: Arc<dyn AcceptInvitationUseCase>,
    update_status_use_case: Arc<dyn UpdateInvitationStatusUseCase>,
    delete_use_case: Arc<dyn DeleteInvitationUseCase>,
    subscribe_use_case: Arc<dyn SubscribeInvitationsUseCase>,
}

impl InvitationApi {
    pub fn new(
        invite_use_case: Arc<dyn InviteByEmailUseCase>,
        accept_use_case: Arc<dyn AcceptInvitationUseCase>,
        update_status_use_case: Arc<dyn UpdateInvitationStatusUseCase>,
        delete_use_case: Arc<dyn DeleteInvitationUseCase>,
        subscribe_use_case: Arc<dyn SubscribeInvitationsUseCase>,
    ) -> Self {
        Self {
            invite_use_case,
            accept_use_case,
            update_status_use_case,
            delete_use_case,
            subscribe_use_case,
        }
    }

    async fn stream(&self, user_id: UserId, direction: InvitationDirection) -> StreamInvitationsResponse {
        let (on_change, states) = queued_states();
        let params = SubscribeInvitationsParams {
            user_id: Some(user_id),
            direction,
            on_change,
        };

        match self.subscribe_use_case.execute(params).await {
            Ok(subscription) => StreamInvitationsResponse::Ok(EventStream::new(event_stream(
                subscription,
                states,
                InvitationsEvent::from,
            ))),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                StreamInvitationsResponse::ServiceUnavailable(json)
            }
        }
    }
}

/// List invitations
///
/// Sharing a list with another user goes through an invitation that the
/// target user accepts or rejects.
#[OpenApi]
impl InvitationApi {
    /// Invite a user to a list
    ///
    /// The target is looked up by email. Only one pending invitation may
    /// exist per list and target user.
    #[oai(
        path = "/lists/:list_id/invitations",
        method = "post",
        tag = "ApiTags::Invitations"
    )]
    async fn invite(
        &self,
        auth: FirebaseBearer,
        list_id: Path<String>,
        body: Json<InviteRequest>,
    ) -> InviteResponse {
        let Ok(list_id) = Uuid::parse_str(&list_id.0) else {
            return InviteResponse::BadRequest(invalid_id("list.invalid_id"));
        };

        let params = InviteByEmailParams {
            list_id,
            from_user_id: Some(auth.0.uid),
            email: body.0.email,
        };

        match self.invite_use_case.execute(params).await {
            Ok(invitation) => InviteResponse::Created(Json(invitation.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => InviteResponse::BadRequest(json),
                    401 => InviteResponse::Unauthorized(json),
                    404 => InviteResponse::NotFound(json),
                    409 => InviteResponse::Conflict(json),
                    503 => InviteResponse::ServiceUnavailable(json),
                    _ => InviteResponse::InternalError(json),
                }
            }
        }
    }

    /// Stream invitations addressed to the caller
    ///
    /// Each invitation carries the inviter's name and the list title when
    /// they could be resolved.
    #[oai(
        path = "/invitations/incoming/stream",
        method = "get",
        tag = "ApiTags::Invitations"
    )]
    async fn incoming(&self, auth: FirebaseBearer) -> StreamInvitationsResponse {
        self.stream(auth.0.uid, InvitationDirection::Incoming).await
    }

    /// Stream invitations sent by the caller
    #[oai(
        path = "/invitations/outgoing/stream",
        method = "get",
        tag = "ApiTags::Invitations"
    )]
    async fn outgoing(&self, auth: FirebaseBearer) -> StreamInvitationsResponse {
        self.stream(auth.0.uid, InvitationDirection::Outgoing).await
    }

    /// Accept an invitation
    ///
    /// Only the addressee may accept, and `listId` must be the invitation's
    /// list. Adds the caller to the list, then marks the invitation accepted.
    /// When joining the list fails the invitation stays pending.
    #[oai(
        path = "/invitations/:id/accept",
        method = "post",
        tag = "ApiTags::Invitations"
    )]
    async fn accept(
        &self,
        auth: FirebaseBearer,
        id: Path<String>,
        body: Json<AcceptInvitationRequest>,
    ) -> InvitationActionResponse {
        let Ok(invitation_id) = Uuid::parse_str(&id.0) else {
            return InvitationActionResponse::BadRequest(invalid_id("invitation.invalid_id"));
        };
        let Ok(list_id) = Uuid::parse_str(&body.0.list_id) else {
            return InvitationActionResponse::BadRequest(invalid_id("list.invalid_id"));
        };

        let params = AcceptInvitationParams {
            invitation_id,
            list_id,
            accepting_user_id: Some(auth.0.uid),
        };

        InvitationActionResponse::from_outcome(self.accept_use_case.execute(params).await)
    }

    /// Reject an invitation addressed to the caller
    #[oai(
        path = "/invitations/:id/reject",
        method = "post",
        tag = "ApiTags::Invitations"
    )]
    async fn reject(&self, auth: FirebaseBearer, id: Path<String>) -> InvitationActionResponse {
        let Ok(invitation_id) = Uuid::parse_str(&id.0) else {
            return InvitationActionResponse::BadRequest(invalid_id("invitation.invalid_id"));
        };

        let params = UpdateInvitationStatusParams {
            invitation_id,
            decision: InvitationDecision::Reject,
            acting_user_id: Some(auth.0.uid),
        };

        InvitationActionResponse::from_outcome(self.update_status_use_case.execute(params).await)
    }

    /// Delete an invitation the caller sent or received
    #[oai(path = "/invitations/:id", method = "delete", tag = "ApiTags::Invitations")]
    async fn delete(&self, auth: FirebaseBearer, id: Path<String>) -> InvitationActionResponse {
        let Ok(invitation_id) = Uuid::parse_str(&id.0) else {
            return InvitationActionResponse::BadRequest(invalid_id("invitation.invalid_id"));
        };

        let params = DeleteInvitationParams {
            invitation_id,
            acting_user_id: Some(auth.0.uid),
        };

        InvitationActionResponse::from_outcome(self.delete_use_case.execute(params).await)
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum InviteResponse {
    #[oai(status = 201)]
    Created(Json<InvitationResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    /// No user is registered with that email
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    /// A pending invitation already exists
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum StreamInvitationsResponse {
    #[oai(status = 200)]
    Ok(EventStream<BoxStream<'static, InvitationsEvent>>),
    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum InvitationActionResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    /// The caller is not a party to the invitation
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl InvitationActionResponse {
    fn from_outcome<E: IntoErrorResponse>(result: Result<(), E>) -> Self {
        match result {
            Ok(()) => InvitationActionResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => InvitationActionResponse::BadRequest(json),
                    401 => InvitationActionResponse::Unauthorized(json),
                    403 => InvitationActionResponse::Forbidden(json),
                    404 => InvitationActionResponse::NotFound(json),
                    409 => InvitationActionResponse::Conflict(json),
                    503 => InvitationActionResponse::ServiceUnavailable(json),
                    _ => InvitationActionResponse::InternalError(json),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::errors::RepositoryError;
    use business::domain::invitation::errors::InvitationError;

    #[test]
    fn should_answer_no_content_when_action_succeeds() {
        let response = InvitationActionResponse::from_outcome::<InvitationError>(Ok(()));

        assert!(matches!(response, InvitationActionResponse::NoContent));
    }

    #[test]
    fn should_answer_forbidden_when_caller_is_not_addressee() {
        let response =
            InvitationActionResponse::from_outcome(Err(InvitationError::NotParticipant));

        assert!(matches!(response, InvitationActionResponse::Forbidden(_)));
    }

    #[test]
    fn should_answer_not_found_for_unknown_invitation() {
        let response = InvitationActionResponse::from_outcome(Err(InvitationError::NotFound));

        assert!(matches!(response, InvitationActionResponse::NotFound(_)));
    }

    #[test]
    fn should_answer_service_unavailable_when_link_step_fails() {
        let err = InvitationError::CollaboratorLink(RepositoryError::unavailable("offline"));

        let response = InvitationActionResponse::from_outcome(Err(err));

        assert!(matches!(
            response,
            InvitationActionResponse::ServiceUnavailable(_)
        ));
    }
}
