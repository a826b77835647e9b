use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::invitation::model::{Invitation, InvitationStatus};
use business::domain::shared::value_objects::UserId;

pub const INVITATION_COLUMNS: &str = "id, list_id, from_user_id, to_user_id, status, created_at";

#[derive(Debug, FromRow)]
pub struct InvitationEntity {
    pub id: Uuid,
    pub list_id: Uuid,
    pub from_user_id: String,
    pub to_user_id: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl InvitationEntity {
    pub fn into_domain(self) -> Invitation {
        Invitation::from_repository(
            self.id,
            self.list_id,
            UserId::new(self.from_user_id),
            UserId::new(self.to_user_id),
            self.status
                .parse::<InvitationStatus>()
                .unwrap_or(InvitationStatus::Pending),
            self.created_at,
        )
    }
}
