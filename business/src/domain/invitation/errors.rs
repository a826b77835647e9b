use crate::domain::errors::RepositoryError;

#[derive(Debug, thiserror::Error)]
pub enum InvitationError {
    #[error("invitation.duplicate")]
    DuplicateInvitation,
    #[error("invitation.not_authenticated")]
    NotAuthenticated,
    #[error("invitation.user_not_found")]
    UserNotFound,
    #[error("invitation.email_empty")]
    EmailEmpty,
    #[error("invitation.not_found")]
    NotFound,
    /// The acting user is neither the addressee nor, where allowed, the sender.
    #[error("invitation.not_participant")]
    NotParticipant,
    #[error("invitation.list_mismatch")]
    ListMismatch,
    #[error("invitation.already_rejected")]
    AlreadyRejected,
    /// Adding the accepting user to the list failed; the invitation was left untouched.
    #[error("invitation.collaborator_link_failed")]
    CollaboratorLink(#[source] RepositoryError),
    #[error("repository.persistence")]
    Repository(#[from] RepositoryError),
}
