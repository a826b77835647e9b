use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::shared::value_objects::UserId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvitationStatus {
    Pending,
    Accepted,
    Rejected,
}

impl std::fmt::Display for InvitationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvitationStatus::Pending => write!(f, "pending"),
            InvitationStatus::Accepted => write!(f, "accepted"),
            InvitationStatus::Rejected => write!(f, "rejected"),
        }
    }
}

impl std::str::FromStr for InvitationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(InvitationStatus::Pending),
            "accepted" => Ok(InvitationStatus::Accepted),
            "rejected" => Ok(InvitationStatus::Rejected),
            _ => Err(format!("Invalid invitation status: {}", s)),
        }
    }
}

/// The answer a target user gives to an invitation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvitationDecision {
    Accept,
    Reject,
}

impl From<InvitationDecision> for InvitationStatus {
    fn from(decision: InvitationDecision) -> Self {
        match decision {
            InvitationDecision::Accept => InvitationStatus::Accepted,
            InvitationDecision::Reject => InvitationStatus::Rejected,
        }
    }
}

/// Which side of an invitation the watching user is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvitationDirection {
    /// Invitations addressed to the user (`to_user_id == user`).
    Incoming,
    /// Invitations the user sent (`from_user_id == user`).
    Outgoing,
}

impl InvitationDirection {
    pub fn matches(&self, invitation: &Invitation, user_id: &UserId) -> bool {
        match self {
            InvitationDirection::Incoming => &invitation.to_user_id == user_id,
            InvitationDirection::Outgoing => &invitation.from_user_id == user_id,
        }
    }
}

/// A proposal for `to_user_id` to collaborate on `list_id`. Stored normalized:
/// user names and the list title are never persisted here.
#[derive(Debug, Clone, PartialEq)]
pub struct Invitation {
    pub id: Uuid,
    pub list_id: Uuid,
    pub from_user_id: UserId,
    pub to_user_id: UserId,
    pub status: InvitationStatus,
    pub created_at: DateTime<Utc>,
}

impl Invitation {
    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: Uuid,
        list_id: Uuid,
        from_user_id: UserId,
        to_user_id: UserId,
        status: InvitationStatus,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            list_id,
            from_user_id,
            to_user_id,
            status,
            created_at,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.status == InvitationStatus::Pending
    }

    pub fn is_addressed_to(&self, user_id: &UserId) -> bool {
        &self.to_user_id == user_id
    }

    /// Sender or addressee.
    pub fn involves(&self, user_id: &UserId) -> bool {
        self.is_addressed_to(user_id) || &self.from_user_id == user_id
    }
}

/// Data of an invitation about to be written. It is always stored as
/// pending; the store assigns the id and the creation timestamp.
#[derive(Debug, Clone, PartialEq)]
pub struct NewInvitation {
    pub list_id: Uuid,
    pub from_user_id: UserId,
    pub to_user_id: UserId,
}

/// An invitation joined at read time with display fields. A missing user or
/// list leaves the matching field empty.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedInvitation {
    pub invitation: Invitation,
    pub inviter_name: Option<String>,
    pub invitee_name: Option<String>,
    pub list_title: Option<String>,
}

impl EnrichedInvitation {
    pub fn bare(invitation: Invitation) -> Self {
        Self {
            invitation,
            inviter_name: None,
            invitee_name: None,
            list_title: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invitation(from: &str, to: &str) -> Invitation {
        Invitation::from_repository(
            Uuid::new_v4(),
            Uuid::new_v4(),
            UserId::new(from),
            UserId::new(to),
            InvitationStatus::Pending,
            Utc::now(),
        )
    }

    #[test]
    fn should_match_direction_by_counterpart_field() {
        let inv = invitation("alice", "bob");

        assert!(InvitationDirection::Incoming.matches(&inv, &UserId::new("bob")));
        assert!(!InvitationDirection::Incoming.matches(&inv, &UserId::new("alice")));
        assert!(InvitationDirection::Outgoing.matches(&inv, &UserId::new("alice")));
    }

    #[test]
    fn should_only_involve_sender_and_addressee() {
        let inv = invitation("alice", "bob");

        assert!(inv.involves(&UserId::new("alice")));
        assert!(inv.involves(&UserId::new("bob")));
        assert!(!inv.involves(&UserId::new("mallory")));
        assert!(!inv.is_addressed_to(&UserId::new("alice")));
    }

    #[test]
    fn should_map_decision_to_terminal_status() {
        assert_eq!(
            InvitationStatus::from(InvitationDecision::Accept),
            InvitationStatus::Accepted
        );
        assert_eq!(
            InvitationStatus::from(InvitationDecision::Reject),
            InvitationStatus::Rejected
        );
    }

    #[test]
    fn should_round_trip_status_text() {
        assert_eq!("accepted".parse::<InvitationStatus>(), Ok(InvitationStatus::Accepted));
        assert_eq!(InvitationStatus::Pending.to_string(), "pending");
        assert!("maybe".parse::<InvitationStatus>().is_err());
    }
}
