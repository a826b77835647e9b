use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::invitation::model::{EnrichedInvitation, Invitation};
use business::domain::shared::live::CollectionState;

#[derive(Debug, Clone, Object)]
pub struct InviteRequest {
    /// Email of the user to invite
    pub email: String,
}

#[derive(Debug, Clone, Object)]
pub struct AcceptInvitationRequest {
    /// List the invitation refers to
    pub list_id: String,
}

#[derive(Debug, Clone, Object)]
pub struct InvitationResponse {
    pub id: String,
    pub list_id: String,
    pub from_user_id: String,
    pub to_user_id: String,
    /// `pending`, `accepted` or `rejected`
    pub status: String,
    pub created_at: DateTime<Utc>,
    #[oai(skip_serializing_if_is_none)]
    pub inviter_name: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub invitee_name: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub list_title: Option<String>,
}

impl From<Invitation> for InvitationResponse {
    fn from(invitation: Invitation) -> Self {
        EnrichedInvitation::bare(invitation).into()
    }
}

impl From<EnrichedInvitation> for InvitationResponse {
    fn from(enriched: EnrichedInvitation) -> Self {
        let invitation = enriched.invitation;
        Self {
            id: invitation.id.to_string(),
            list_id: invitation.list_id.to_string(),
            from_user_id: invitation.from_user_id.into(),
            to_user_id: invitation.to_user_id.into(),
            status: invitation.status.to_string(),
            created_at: invitation.created_at,
            inviter_name: enriched.inviter_name,
            invitee_name: enriched.invitee_name,
            list_title: enriched.list_title,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct InvitationsEvent {
    pub invitations: Vec<InvitationResponse>,
    #[oai(skip_serializing_if_is_none)]
    pub error: Option<String>,
}

impl From<CollectionState<EnrichedInvitation>> for InvitationsEvent {
    fn from(state: CollectionState<EnrichedInvitation>) -> Self {
        Self {
            invitations: state.records.into_iter().map(Into::into).collect(),
            error: state.error,
        }
    }
}
